/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use serde::Deserialize;

/// Holds information returned from the image endpoints.
///
/// See [Imgur API Docs](https://apidocs.imgur.com/#image-model) for details
/// on the individual fields. `deletehash` is only present on responses for
/// images owned by (or anonymously uploaded with) the requesting client.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct ImageInfo {
    #[serde(default)]
    pub id: String,

    #[serde(default)]
    pub deletehash: Option<String>,

    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub datetime: Option<i64>,

    #[serde(default, rename = "type")]
    pub mime_type: Option<String>,

    #[serde(default)]
    pub animated: bool,

    #[serde(default)]
    pub width: u32,

    #[serde(default)]
    pub height: u32,

    #[serde(default)]
    pub size: u64,

    #[serde(default)]
    pub views: u64,

    #[serde(default)]
    pub link: String,
}
