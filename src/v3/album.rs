/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v3::image::ImageInfo;
use serde::Deserialize;

/// Holds information returned from the album endpoint.
///
/// See [Imgur API Docs](https://apidocs.imgur.com/#album-model) for details
/// on the individual fields.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct AlbumInfo {
    #[serde(default)]
    pub id: String,

    #[serde(default)]
    pub deletehash: Option<String>,

    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub cover: Option<String>,

    #[serde(default)]
    pub images_count: u32,

    #[serde(default)]
    pub images: Vec<ImageInfo>,

    #[serde(default)]
    pub link: String,
}

/// The minimal album record returned by album creation.
///
/// Anonymous albums can only be added to via their `deletehash`, so both
/// identifiers are kept.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct CreatedAlbum {
    #[serde(default)]
    pub id: String,

    #[serde(default)]
    pub deletehash: Option<String>,
}
