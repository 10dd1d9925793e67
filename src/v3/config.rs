/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

/// Default Imgur API base. Every operation path is joined onto this.
pub const DEFAULT_API_URL: &str = "https://api.imgur.com/3/";

// The following client ID is tied to the registered 'node-imgur' app and is
// available for public, anonymous usage.
pub const DEFAULT_CLIENT_ID: &str = "f0ea04148a54268";

/// Credential and endpoint configuration for a [`crate::v3::Client`].
///
/// Constructed once at startup (usually via [`Config::from_env`]) and handed
/// to the client. Setters only accept non-empty strings; anything else is a
/// silent no-op and the previous value is kept.
#[derive(Debug, Clone)]
pub struct Config {
    api_url: String,
    client_id: String,
    mashape_key: Option<String>,
    username: Option<String>,
    password: Option<String>,
    access_token: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            client_id: DEFAULT_CLIENT_ID.to_string(),
            mashape_key: None,
            username: None,
            password: None,
            access_token: None,
        }
    }
}

impl Config {
    /// Builds a configuration from the `IMGUR_*` environment variables,
    /// falling back to the public defaults for anything unset.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(url) = std::env::var("IMGUR_API_URL") {
            config.set_api_url(&url);
        }
        if let Ok(key) = std::env::var("IMGUR_MASHAPE_KEY") {
            config.set_mashape_key(&key);
        }
        if let Ok(id) = std::env::var("IMGUR_CLIENT_ID") {
            config.set_client_id(&id);
        }
        if let (Ok(user), Ok(pass)) = (
            std::env::var("IMGUR_USERNAME"),
            std::env::var("IMGUR_PASSWORD"),
        ) {
            config.set_credentials(&user, &pass);
        }
        if let Ok(token) = std::env::var("IMGUR_ACCESS_TOKEN")
            && !token.is_empty()
        {
            config.access_token = Some(token);
        }
        config
    }

    /// Set the client ID used for anonymous `Client-ID` authorization.
    ///
    /// An empty string leaves the current value intact.
    pub fn set_client_id(&mut self, client_id: &str) {
        if !client_id.is_empty() {
            self.client_id = client_id.to_string();
        }
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    /// Set the account username/password used for the token exchange.
    ///
    /// Each value is applied independently; empty strings are ignored.
    pub fn set_credentials(&mut self, username: &str, password: &str) {
        if !username.is_empty() {
            self.username = Some(username.to_string());
        }
        if !password.is_empty() {
            self.password = Some(password.to_string());
        }
    }

    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    pub fn password(&self) -> Option<&str> {
        self.password.as_deref()
    }

    /// Point the client at a different API base url.
    ///
    /// An empty string leaves the current value intact.
    pub fn set_api_url(&mut self, url: &str) {
        if !url.is_empty() {
            self.api_url = url.to_string();
        }
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Set the Mashape proxy key, sent as `X-Mashape-Key` on every request.
    ///
    /// An empty string leaves the current value intact.
    pub fn set_mashape_key(&mut self, mashape_key: &str) {
        if !mashape_key.is_empty() {
            self.mashape_key = Some(mashape_key.to_string());
        }
    }

    pub fn mashape_key(&self) -> Option<&str> {
        self.mashape_key.as_deref()
    }

    /// Access token the client starts out with, if any.
    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.api_url(), "https://api.imgur.com/3/");
        assert_eq!(config.client_id(), DEFAULT_CLIENT_ID);
        assert!(config.mashape_key().is_none());
        assert!(config.username().is_none());
    }

    #[test]
    fn empty_setter_values_keep_prior_state() {
        let mut config = Config::default();
        config.set_client_id("abc123");
        config.set_client_id("");
        assert_eq!(config.client_id(), "abc123");

        config.set_api_url("https://imgur-apiv3.p.mashape.com/3/");
        config.set_api_url("");
        assert_eq!(config.api_url(), "https://imgur-apiv3.p.mashape.com/3/");

        config.set_mashape_key("key");
        config.set_mashape_key("");
        assert_eq!(config.mashape_key(), Some("key"));
    }

    #[test]
    fn credentials_apply_independently() {
        let mut config = Config::default();
        config.set_credentials("user", "hunter2");
        config.set_credentials("", "secret");
        assert_eq!(config.username(), Some("user"));
        assert_eq!(config.password(), Some("secret"));
    }
}
