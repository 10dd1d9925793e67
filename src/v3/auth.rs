/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v3::config::Config;
use crate::v3::errors::ImgurError;
use crate::v3::parsers;
use log::debug;
use reqwest::header::{COOKIE, LOCATION};
use tokio::sync::Mutex;

/// Resolves the `Authorization` header for the next request.
///
/// A cached bearer token wins; otherwise configured username/password
/// credentials are exchanged for one; otherwise the client falls back to
/// anonymous `Client-ID` authorization. The mutex is held across the
/// exchange so concurrent first callers coalesce into a single one.
pub(crate) struct TokenCache {
    token: Mutex<Option<String>>,
}

impl TokenCache {
    pub(crate) fn new(initial: Option<String>) -> Self {
        Self {
            token: Mutex::new(initial),
        }
    }

    pub(crate) async fn authorization_header(
        &self,
        config: &Config,
    ) -> Result<String, ImgurError> {
        let mut cached = self.token.lock().await;
        if let Some(token) = cached.as_deref() {
            return Ok(format!("Bearer {token}"));
        }
        match (config.username(), config.password()) {
            (Some(username), Some(password)) => {
                let token = exchange_credentials(config, username, password).await?;
                let header = format!("Bearer {token}");
                *cached = Some(token);
                Ok(header)
            }
            _ => Ok(format!("Client-ID {}", config.client_id())),
        }
    }
}

// Two-step token exchange: fetch an authorize_token cookie, then post the
// credentials and pull the access token out of the redirect fragment.
async fn exchange_credentials(
    config: &Config,
    username: &str,
    password: &str,
) -> Result<String, ImgurError> {
    // Redirects stay unfollowed so the Location fragment is observable
    let https_client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()?;
    let authorize_url = authorize_url(config.api_url())?;

    debug!("requesting authorize token from {authorize_url}");
    let resp = https_client
        .get(authorize_url.clone())
        .query(&[
            ("client_id", config.client_id()),
            ("response_type", "token"),
        ])
        .send()
        .await?;
    let authorize_token = parsers::authorize_token_from_cookies(resp.headers()).ok_or_else(
        || ImgurError::Auth("authorize_token cookie missing from authorize response".to_string()),
    )?;

    debug!("exchanging credentials for access token");
    let resp = https_client
        .post(authorize_url)
        .header(COOKIE, format!("authorize_token={authorize_token}"))
        .form(&[
            ("username", username),
            ("password", password),
            ("allow", authorize_token.as_str()),
        ])
        .send()
        .await?;
    let location = resp
        .headers()
        .get(LOCATION)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| {
            ImgurError::Auth("redirect location missing from token response".to_string())
        })?;

    parsers::fragment_params(location)
        .remove("access_token")
        .ok_or_else(|| ImgurError::Auth("access_token missing from redirect fragment".to_string()))
}

// The oauth2 endpoints live at the API origin, not under the /3/ base
fn authorize_url(api_url: &str) -> Result<url::Url, ImgurError> {
    let mut url = url::Url::parse(api_url)?;
    url.set_path("/oauth2/authorize");
    url.set_query(None);
    Ok(url)
}

#[cfg(test)]
mod test {
    use super::*;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    // Minimal oauth2 endpoint stand-in: hands out an authorize_token cookie
    // on GET and a redirect carrying the access token on POST. Counts the
    // authorize round-trips it serves.
    fn spawn_oauth_server() -> (String, Arc<AtomicUsize>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let exchanges = Arc::new(AtomicUsize::new(0));
        let served = exchanges.clone();
        std::thread::spawn(move || {
            for stream in listener.incoming() {
                let mut stream = match stream {
                    Ok(stream) => stream,
                    Err(_) => break,
                };
                let mut buf = [0u8; 2048];
                let n = stream.read(&mut buf).unwrap_or(0);
                let request = String::from_utf8_lossy(&buf[..n]);
                let response = if request.starts_with("GET") {
                    served.fetch_add(1, Ordering::SeqCst);
                    "HTTP/1.1 200 OK\r\n\
                     Set-Cookie: authorize_token=tok123; path=/; secure\r\n\
                     Content-Length: 0\r\nConnection: close\r\n\r\n"
                } else {
                    "HTTP/1.1 302 Found\r\n\
                     Location: https://imgur.com/#access_token=abc123&token_type=bearer\r\n\
                     Content-Length: 0\r\nConnection: close\r\n\r\n"
                };
                let _ = stream.write_all(response.as_bytes());
            }
        });
        (format!("http://{addr}/3/"), exchanges)
    }

    #[tokio::test]
    async fn credentials_are_exchanged_for_a_bearer_token() {
        let (api_url, exchanges) = spawn_oauth_server();
        let mut config = Config::default();
        config.set_api_url(&api_url);
        config.set_credentials("user", "hunter2");

        let cache = TokenCache::new(None);
        let header = cache.authorization_header(&config).await.unwrap();
        assert_eq!(header, "Bearer abc123");
        assert_eq!(exchanges.load(Ordering::SeqCst), 1);

        // Later calls hit the cache, not the endpoint
        let header = cache.authorization_header(&config).await.unwrap();
        assert_eq!(header, "Bearer abc123");
        assert_eq!(exchanges.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn concurrent_first_callers_share_one_exchange() {
        let (api_url, exchanges) = spawn_oauth_server();
        let mut config = Config::default();
        config.set_api_url(&api_url);
        config.set_credentials("user", "hunter2");

        let cache = TokenCache::new(None);
        let (first, second) = tokio::join!(
            cache.authorization_header(&config),
            cache.authorization_header(&config)
        );
        assert_eq!(first.unwrap(), "Bearer abc123");
        assert_eq!(second.unwrap(), "Bearer abc123");
        assert_eq!(exchanges.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn anonymous_mode_uses_client_id() {
        let mut config = Config::default();
        config.set_client_id("abc123");
        let cache = TokenCache::new(None);
        let header = cache.authorization_header(&config).await.unwrap();
        assert_eq!(header, "Client-ID abc123");
    }

    #[tokio::test]
    async fn cached_token_short_circuits() {
        let config = Config::default();
        let cache = TokenCache::new(Some("tok".to_string()));
        let header = cache.authorization_header(&config).await.unwrap();
        assert_eq!(header, "Bearer tok");
    }

    #[test]
    fn authorize_endpoint_is_derived_from_api_origin() {
        let url = authorize_url("https://api.imgur.com/3/").unwrap();
        assert_eq!(url.as_str(), "https://api.imgur.com/oauth2/authorize");
    }
}
