/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

//! One-line credential file holding the client id, `~/.imgur` by default.

use crate::v3::errors::ImgurError;
use std::fs;
use std::path::{Path, PathBuf};

/// Default on-disk location for the saved client id.
pub fn default_client_id_path() -> PathBuf {
    dirs::home_dir().unwrap_or_default().join(".imgur")
}

/// Reads the saved client id. Fails if the file is missing or empty.
pub fn load_client_id(path: &Path) -> Result<String, ImgurError> {
    let client_id = fs::read_to_string(path)?;
    if client_id.is_empty() {
        return Err(ImgurError::InvalidInput("File is empty".to_string()));
    }
    Ok(client_id)
}

/// Saves the client id, overwriting any previous value.
pub fn save_client_id(client_id: &str, path: &Path) -> Result<(), ImgurError> {
    Ok(fs::write(path, client_id)?)
}

/// Empties the credential file. The file itself remains.
pub fn clear_client_id(path: &Path) -> Result<(), ImgurError> {
    save_client_id("", path)
}
