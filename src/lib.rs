/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

//! # Imgur
//!
//! Client library (and command line uploader) for the Imgur v3 REST API.
//!
//! For further details on the Rest API refer to the [Imgur API Docs](https://apidocs.imgur.com/)
//!
//! ## Features
//!
//! - Image uploads from local files (with glob patterns), urls, and
//!   base64-encoded strings, optionally into an album
//! - Album creation and batch album uploads
//! - Image and album metadata lookup, image deletion by deletehash
//! - Gallery search
//! - Rate limit credits lookup
//! - Anonymous `Client-ID` authorization out of the box, with an optional
//!   username/password token exchange for authenticated sessions
//! - A persisted client id (`~/.imgur`) shared between invocations
//!
//! *If you want to use this library for more than is currently implemented,
//! [`v3::ApiClient`] is a way to make request/responses in a more direct
//! way.*
//!
//! ## Usage
//!
//! ```no_run
//! use imgur::v3::{Client, SearchOptions, UploadOptions};
//!
//! async fn example() -> Result<(), imgur::v3::ImgurError> {
//!     // Picks up IMGUR_CLIENT_ID and friends from the environment,
//!     // falling back to the public anonymous client id
//!     let client = Client::from_env();
//!
//!     // Upload everything a glob pattern matches
//!     let images = client
//!         .upload_file("shots/*.png", &UploadOptions::default())
//!         .await?;
//!     for image in &images {
//!         println!("{}", image.link);
//!     }
//!
//!     // Look one of them back up
//!     let info = client.get_info(&images[0].id).await?;
//!     println!("{}x{}", info.width, info.height);
//!
//!     // Search the public gallery
//!     let results = client.search("cats", &SearchOptions::default()).await?;
//!     println!("searched with {:?}", results.params);
//!     Ok(())
//! }
//! ```
pub mod v3;
