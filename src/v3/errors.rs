/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

use std::io;
use thiserror::Error;

/// Error conditions that can be returned
#[derive(Error, Debug)]
pub enum ImgurError {
    #[error("I/O error")]
    Io(#[from] io::Error),

    #[error("Request network error")]
    Transport(#[from] reqwest::Error),

    #[error("Authorization error. {0}")]
    Auth(String),

    #[error("Deserialization error")]
    Deserialization(#[from] serde_json::Error),

    #[error("URL Parse error")]
    UrlParsing(#[from] url::ParseError),

    #[error("Invalid argument: {0}")]
    InvalidArgument(&'static str),

    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    #[error("{0}")]
    InvalidInput(String),

    #[error("API response was error: {status}, msg: {message}")]
    Api { status: u16, message: String },
}
