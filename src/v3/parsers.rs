/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

use reqwest::header::{HeaderMap, SET_COOKIE};
use std::collections::HashMap;

// Extracts the `authorize_token` cookie value from the authorize response
pub(crate) fn authorize_token_from_cookies(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .find_map(cookie_value)
}

// Finds "authorize_token=<value>" within a single Set-Cookie line
fn cookie_value(cookie: &str) -> Option<String> {
    cookie.split(';').map(str::trim).find_map(|pair| {
        pair.strip_prefix("authorize_token=")
            .filter(|v| !v.is_empty())
            .map(str::to_string)
    })
}

// Parses a redirect Location fragment ("#key=value&key=value") into a map
pub(crate) fn fragment_params(location: &str) -> HashMap<String, String> {
    let fragment = match location.split_once('#') {
        Some((_, fragment)) => fragment,
        None => return HashMap::new(),
    };
    fragment
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;
    use reqwest::header::HeaderValue;

    #[test]
    fn cookie_extraction() {
        let mut headers = HeaderMap::new();
        headers.append(
            SET_COOKIE,
            HeaderValue::from_static("IMGURSESSION=xyz; path=/; HttpOnly"),
        );
        headers.append(
            SET_COOKIE,
            HeaderValue::from_static("authorize_token=deadbeef; path=/; secure"),
        );
        assert_eq!(
            authorize_token_from_cookies(&headers).as_deref(),
            Some("deadbeef")
        );
    }

    #[test]
    fn cookie_missing_or_empty() {
        let mut headers = HeaderMap::new();
        assert!(authorize_token_from_cookies(&headers).is_none());

        headers.append(SET_COOKIE, HeaderValue::from_static("authorize_token=;"));
        assert!(authorize_token_from_cookies(&headers).is_none());
    }

    #[test]
    fn fragment_parsing() {
        let params = fragment_params(
            "https://imgur.com/#access_token=abc123&expires_in=3600&token_type=bearer",
        );
        assert_eq!(params.get("access_token").map(String::as_str), Some("abc123"));
        assert_eq!(params.get("expires_in").map(String::as_str), Some("3600"));
    }

    #[test]
    fn fragment_absent() {
        assert!(fragment_params("https://imgur.com/").is_empty());
    }
}
