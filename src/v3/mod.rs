/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

pub mod album;
pub mod api;
mod auth;
pub mod client;
pub mod config;
pub mod credits;
pub mod errors;
pub mod image;
mod parsers;
pub mod search;
pub mod store;
pub mod upload;

pub use album::*;
pub use api::*;
pub use client::*;
pub use config::*;
pub use credits::*;
pub use errors::*;
pub use image::*;
pub use search::*;
pub use upload::*;
