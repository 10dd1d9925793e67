/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v3::api::{FormFields, Operation, Payload};
use crate::v3::client::Client;
use crate::v3::errors::ImgurError;
use crate::v3::image::ImageInfo;
use crate::v3::{AlbumInfo, CreatedAlbum};
use futures::future;
use log::{debug, info};
use std::path::Path;
use strum_macros::{EnumString, IntoStaticStr};

/// Which single-upload entry point [`Client::upload_images`] fans out over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, IntoStaticStr)]
pub enum UploadKind {
    File,
    Url,
    Base64,
}

/// Optional metadata attached to an upload as extra multipart fields.
///
/// Only non-empty values are sent.
#[derive(Debug, Clone, Default)]
pub struct UploadOptions {
    pub album: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
}

impl UploadOptions {
    /// Upload into the given album (album id, or deletehash for anonymous
    /// albums).
    pub fn with_album(album: &str) -> Self {
        Self {
            album: Some(album.to_string()),
            ..Self::default()
        }
    }

    fn form_fields(&self) -> FormFields {
        [
            ("album", self.album.as_deref()),
            ("title", self.title.as_deref()),
            ("description", self.description.as_deref()),
        ]
        .into_iter()
        .filter_map(|(param, value)| {
            value
                .filter(|v| !v.is_empty())
                .map(|v| (param.to_string(), v.to_string()))
        })
        .collect()
    }
}

/// The result of [`Client::upload_album`]: the created album and the images
/// uploaded into it, in input order.
#[derive(Debug, Clone, Default)]
pub struct AlbumUpload {
    pub album: CreatedAlbum,
    pub images: Vec<ImageInfo>,
}

impl Client {
    /// Uploads every file matching a glob pattern.
    ///
    /// Returns one [`ImageInfo`] per matched file, in match order. Fails if
    /// the pattern is invalid, matches nothing, or any single upload fails.
    pub async fn upload_file(
        &self,
        pattern: &str,
        options: &UploadOptions,
    ) -> Result<Vec<ImageInfo>, ImgurError> {
        let paths: Vec<_> = glob::glob(pattern)
            .map_err(|_| ImgurError::InvalidInput("Invalid file or glob".to_string()))?
            .filter_map(Result::ok)
            .filter(|p| p.is_file())
            .collect();
        if paths.is_empty() {
            return Err(ImgurError::InvalidInput("Invalid file or glob".to_string()));
        }
        debug!("pattern {pattern} matched {} file(s)", paths.len());

        let uploads = paths.iter().map(|path| self.upload_file_path(path, options));
        future::try_join_all(uploads).await
    }

    async fn upload_file_path(
        &self,
        path: &Path,
        options: &UploadOptions,
    ) -> Result<ImageInfo, ImgurError> {
        let bytes = tokio::fs::read(path).await?;
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("image")
            .to_string();
        info!("uploading {}", path.display());
        self.api()
            .perform(
                Operation::Upload,
                Some(Payload::File { name, bytes }),
                options.form_fields(),
            )
            .await?
            .decode()
    }

    /// Uploads the image an http(s) url points at.
    pub async fn upload_url(
        &self,
        url: &str,
        options: &UploadOptions,
    ) -> Result<ImageInfo, ImgurError> {
        if url.is_empty() || url::Url::parse(url).is_err() {
            return Err(ImgurError::InvalidInput("Invalid URL".to_string()));
        }
        self.api()
            .perform(
                Operation::Upload,
                Some(url.into()),
                options.form_fields(),
            )
            .await?
            .decode()
    }

    /// Uploads a base64-encoded image string.
    pub async fn upload_base64(
        &self,
        base64: &str,
        options: &UploadOptions,
    ) -> Result<ImageInfo, ImgurError> {
        if base64.is_empty() {
            return Err(ImgurError::InvalidInput("Invalid Base64 input".to_string()));
        }
        self.api()
            .perform(
                Operation::Upload,
                Some(base64.into()),
                options.form_fields(),
            )
            .await?
            .decode()
    }

    /// Uploads a batch of images concurrently, preserving input order.
    ///
    /// Fails as a whole if any single upload fails; there is no
    /// partial-success aggregation.
    pub async fn upload_images(
        &self,
        images: &[String],
        kind: UploadKind,
        album_id: Option<&str>,
    ) -> Result<Vec<ImageInfo>, ImgurError> {
        if images.is_empty() {
            return Err(ImgurError::InvalidInput(
                "Invalid image input, only arrays supported".to_string(),
            ));
        }
        let options = album_id
            .map(UploadOptions::with_album)
            .unwrap_or_default();

        let uploads = images.iter().map(|image| {
            let options = &options;
            async move {
                match kind {
                    UploadKind::File => self.upload_file(image, options).await,
                    UploadKind::Url => self.upload_url(image, options).await.map(|i| vec![i]),
                    UploadKind::Base64 => {
                        self.upload_base64(image, options).await.map(|i| vec![i])
                    }
                }
            }
        });
        let results = future::try_join_all(uploads).await?;
        Ok(results.into_iter().flatten().collect())
    }

    /// Creates a fresh album and uploads the batch into it.
    ///
    /// With `fail_safe`, invalid or empty input degrades to an empty result
    /// instead of an error, for batch callers that tolerate skips.
    pub async fn upload_album(
        &self,
        images: &[String],
        kind: UploadKind,
        fail_safe: bool,
    ) -> Result<AlbumUpload, ImgurError> {
        if images.is_empty() {
            if fail_safe {
                return Ok(AlbumUpload::default());
            }
            return Err(ImgurError::InvalidInput(
                "Invalid image input, only arrays supported".to_string(),
            ));
        }

        let album = self.create_album().await?;
        let uploaded = self
            .upload_images(images, kind, Some(album.id.as_str()))
            .await?;
        Ok(AlbumUpload {
            album,
            images: uploaded,
        })
    }

    /// Fetches the images of an existing album as a convenience over
    /// [`Client::get_album_info`].
    pub async fn get_album_images(&self, id: &str) -> Result<Vec<ImageInfo>, ImgurError> {
        self.get_album_info(id).await.map(|a: AlbumInfo| a.images)
    }
}
