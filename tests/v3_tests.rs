/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

#[cfg(test)]
mod test {
    use anyhow::Context;
    use dotenvy::dotenv;
    use imgur::v3::{Client, Config, ImgurError, SearchOptions, UploadKind, UploadOptions};

    fn client_from_env() -> Client {
        dotenv().ok();
        Client::from_env()
    }

    // A 1x1 transparent gif
    const PIXEL_BASE64: &str = "R0lGODlhAQABAIAAAAAAAP///yH5BAEAAAAALAAAAAABAAEAAAIBRAA7";

    #[tokio::test]
    async fn dispatch_validation_is_local() {
        let client = Client::new(Config::default());

        let err = client
            .api()
            .dispatch("upload", None, Vec::new())
            .await
            .unwrap_err();
        assert!(matches!(err, ImgurError::InvalidArgument(_)));

        let err = client
            .api()
            .dispatch("nonsense", Some("x".into()), Vec::new())
            .await
            .unwrap_err();
        assert!(matches!(err, ImgurError::InvalidOperation(_)));
    }

    // Live tests below talk to the real API and are disabled for ci/cd
    // builds. Set IMGUR_CLIENT_ID (or rely on the public default) and run
    // with `cargo test -- --ignored`.

    #[ignore]
    #[tokio::test]
    async fn upload_base64_and_delete() -> anyhow::Result<()> {
        let client = client_from_env();
        let image = client
            .upload_base64(PIXEL_BASE64, &UploadOptions::default())
            .await?;
        assert!(!image.link.is_empty());

        let deletehash = image
            .deletehash
            .context("anonymous uploads carry a deletehash")?;
        client.delete_image(&deletehash).await?;
        Ok(())
    }

    #[ignore]
    #[tokio::test]
    async fn get_info_for_known_image() -> anyhow::Result<()> {
        let client = client_from_env();
        let info = client.get_info("orunSTu").await?;
        println!("Image info: {info:?}");
        assert!(!info.link.is_empty());
        Ok(())
    }

    #[ignore]
    #[tokio::test]
    async fn search_gallery() -> anyhow::Result<()> {
        let client = client_from_env();
        let results = client.search("cats", &SearchOptions::default()).await?;
        assert_eq!(results.params.sort, "time");
        assert!(results.data.is_array());
        Ok(())
    }

    #[ignore]
    #[tokio::test]
    async fn get_credits() -> anyhow::Result<()> {
        let client = client_from_env();
        let credits = client.get_credits().await?;
        println!("Credits: {credits:?}");
        assert!(credits.client_limit.unwrap_or_default() > 0);
        Ok(())
    }

    #[ignore]
    #[tokio::test]
    async fn upload_album_of_base64_images() -> anyhow::Result<()> {
        let client = client_from_env();
        let images = vec![PIXEL_BASE64.to_string(), PIXEL_BASE64.to_string()];
        let result = client.upload_album(&images, UploadKind::Base64, false).await?;
        assert!(!result.album.id.is_empty());
        assert_eq!(result.images.len(), 2);
        Ok(())
    }
}
