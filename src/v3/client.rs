/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v3::api::{ApiClient, Operation};
use crate::v3::config::Config;
use crate::v3::credits::RateLimitCredits;
use crate::v3::errors::ImgurError;
use crate::v3::image::ImageInfo;
use crate::v3::search::{EMPTY_QUERY_MSG, SearchOptions, SearchParams, SearchResults};
use crate::v3::{AlbumInfo, CreatedAlbum};
use std::sync::Arc;

// Placeholder body for album creation; the API ignores it but dispatch
// validation requires a payload to be present.
const CREATE_ALBUM_PAYLOAD: &str = "dummy";

/// High level client for the Imgur v3 API.
///
/// Cheap to clone; all clones share the credential state and cached access
/// token. For request/response combinations not covered here, drop down to
/// [`Client::api`].
#[derive(Debug, Clone)]
pub struct Client {
    api_client: Arc<ApiClient>,
}

impl Client {
    pub fn new(config: Config) -> Self {
        Self {
            api_client: Arc::new(ApiClient::new(config)),
        }
    }

    /// Builds a client configured from the `IMGUR_*` environment variables.
    pub fn from_env() -> Self {
        Self::new(Config::from_env())
    }

    /// The lower-level dispatch interface.
    pub fn api(&self) -> &ApiClient {
        &self.api_client
    }

    pub fn config(&self) -> &Config {
        self.api_client.config()
    }

    /// Returns metadata for the image with the given id.
    pub async fn get_info(&self, id: &str) -> Result<ImageInfo, ImgurError> {
        if id.is_empty() {
            return Err(ImgurError::InvalidInput("Invalid image ID".to_string()));
        }
        self.api_client
            .perform(Operation::Info, Some(id.into()), Vec::new())
            .await?
            .decode()
    }

    /// Returns metadata for the album with the given id, including its
    /// images.
    pub async fn get_album_info(&self, id: &str) -> Result<AlbumInfo, ImgurError> {
        if id.is_empty() {
            return Err(ImgurError::InvalidInput("Invalid album ID".to_string()));
        }
        self.api_client
            .perform(Operation::Album, Some(id.into()), Vec::new())
            .await?
            .decode()
    }

    /// Deletes an image by the deletehash handed out at upload time.
    pub async fn delete_image(&self, deletehash: &str) -> Result<(), ImgurError> {
        if deletehash.is_empty() {
            return Err(ImgurError::InvalidInput("Missing deletehash".to_string()));
        }
        self.api_client
            .perform(Operation::Delete, Some(deletehash.into()), Vec::new())
            .await?;
        Ok(())
    }

    /// Creates a new (anonymous, unless authenticated) album.
    pub async fn create_album(&self) -> Result<CreatedAlbum, ImgurError> {
        self.api_client
            .perform(
                Operation::CreateAlbum,
                Some(CREATE_ALBUM_PAYLOAD.into()),
                Vec::new(),
            )
            .await?
            .decode()
    }

    /// Searches the public gallery.
    ///
    /// Options are overlaid onto the defaults and serialized in fixed order
    /// into the request path.
    pub async fn search(
        &self,
        query: &str,
        options: &SearchOptions,
    ) -> Result<SearchResults, ImgurError> {
        if query.is_empty() {
            return Err(ImgurError::InvalidInput(EMPTY_QUERY_MSG.to_string()));
        }
        let params = SearchParams::with_options(options);
        let envelope = self
            .api_client
            .perform(
                Operation::Search,
                Some(params.to_path(query).into()),
                Vec::new(),
            )
            .await?;
        Ok(SearchResults {
            data: envelope.data,
            params,
        })
    }

    /// Returns the remaining rate limit credits for this client.
    pub async fn get_credits(&self) -> Result<RateLimitCredits, ImgurError> {
        self.api_client
            .perform(Operation::Credits, None, Vec::new())
            .await?
            .decode()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    // These fail during input validation, before any request goes out.

    #[tokio::test]
    async fn empty_identifiers_are_rejected() {
        let client = Client::new(Config::default());

        let err = client.get_info("").await.unwrap_err();
        assert_eq!(err.to_string(), "Invalid image ID");

        let err = client.get_album_info("").await.unwrap_err();
        assert_eq!(err.to_string(), "Invalid album ID");

        let err = client.delete_image("").await.unwrap_err();
        assert_eq!(err.to_string(), "Missing deletehash");
    }

    #[tokio::test]
    async fn search_requires_a_query() {
        let client = Client::new(Config::default());
        let err = client
            .search("", &SearchOptions::default())
            .await
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Search requires a query. Try searching with a query (e.g cats)."
        );
    }
}
