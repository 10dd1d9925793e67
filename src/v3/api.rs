/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v3::auth::TokenCache;
use crate::v3::config::Config;
use crate::v3::errors::ImgurError;
use log::debug;
use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::str::FromStr;
use strum_macros::{EnumString, IntoStaticStr};

// Header required by the Mashape API gateway in front of imgur
const MASHAPE_KEY_HEADER: &str = "X-Mashape-Key";

/// The logical operations the API client knows how to perform.
///
/// Each maps to a fixed HTTP method and path; `Info`/`Album`/`Delete`
/// interpolate an identifier and `Search` a pre-built query segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, IntoStaticStr)]
#[strum(serialize_all = "camelCase")]
pub enum Operation {
    Upload,
    Credits,
    Info,
    Album,
    CreateAlbum,
    Delete,
    Search,
}

impl Operation {
    pub fn method(&self) -> reqwest::Method {
        match self {
            Operation::Upload | Operation::CreateAlbum => reqwest::Method::POST,
            Operation::Delete => reqwest::Method::DELETE,
            _ => reqwest::Method::GET,
        }
    }

    /// Path relative to the API base url.
    pub fn path(&self, payload: Option<&Payload>) -> String {
        let segment = payload.map(Payload::path_segment).unwrap_or_default();
        match self {
            Operation::Upload => "image".to_string(),
            Operation::Credits => "credits".to_string(),
            Operation::Info | Operation::Delete => format!("image/{segment}"),
            Operation::Album => format!("album/{segment}"),
            Operation::CreateAlbum => "album".to_string(),
            Operation::Search => format!("gallery/search{segment}"),
        }
    }

    // Only credits and search may be dispatched without a payload
    fn payload_optional(operation: &str) -> bool {
        matches!(operation, "credits" | "search")
    }
}

/// Payload handed to [`ApiClient::dispatch`].
///
/// `Text` doubles as the interpolated path segment for metadata operations
/// and as the `image` form field for url/base64 uploads; `File` becomes a
/// multipart file part.
#[derive(Debug, Clone)]
pub enum Payload {
    Text(String),
    File { name: String, bytes: Vec<u8> },
}

impl Payload {
    fn path_segment(&self) -> &str {
        match self {
            Payload::Text(text) => text,
            Payload::File { .. } => "",
        }
    }

    fn into_form(self, form: Form) -> Form {
        match self {
            Payload::Text(text) => form.text("image", text),
            Payload::File { name, bytes } => {
                form.part("image", Part::bytes(bytes).file_name(name))
            }
        }
    }
}

impl From<&str> for Payload {
    fn from(text: &str) -> Self {
        Payload::Text(text.to_string())
    }
}

impl From<String> for Payload {
    fn from(text: String) -> Self {
        Payload::Text(text)
    }
}

/// Extra multipart fields attached to an upload (album/title/description).
pub type FormFields = Vec<(String, String)>;

/// The uniform response wrapper returned by every API endpoint.
#[derive(Deserialize, Debug)]
pub struct ResponseEnvelope {
    pub success: bool,
    pub status: u16,
    #[serde(default)]
    pub data: serde_json::Value,
}

impl ResponseEnvelope {
    /// Deserializes the `data` member into a concrete model.
    pub fn decode<T: DeserializeOwned>(self) -> Result<T, ImgurError> {
        Ok(serde_json::from_value(self.data)?)
    }
}

/// Directly communicates with the API.
///
/// This is the lower-level interface; [`crate::v3::Client`] wraps it with
/// typed per-operation methods.
pub struct ApiClient {
    config: Config,
    auth: TokenCache,
    https_client: reqwest::Client,
}

impl ApiClient {
    pub fn new(config: Config) -> Self {
        let auth = TokenCache::new(config.access_token().map(str::to_string));
        Self {
            config,
            auth,
            https_client: reqwest::Client::new(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Dispatches an operation named by its wire string.
    ///
    /// Validation order: empty operation, then missing payload (required for
    /// everything except `credits` and `search`), then unknown operation.
    pub async fn dispatch(
        &self,
        operation: &str,
        payload: Option<Payload>,
        extra_fields: FormFields,
    ) -> Result<ResponseEnvelope, ImgurError> {
        if operation.is_empty() {
            return Err(ImgurError::InvalidArgument(
                "operation must be a non-empty string",
            ));
        }
        if payload.is_none() && !Operation::payload_optional(operation) {
            return Err(ImgurError::InvalidArgument(
                "payload is required for this operation",
            ));
        }
        let operation = Operation::from_str(operation)
            .map_err(|_| ImgurError::InvalidOperation(operation.to_string()))?;
        self.perform(operation, payload, extra_fields).await
    }

    /// Issues a request for an already-validated operation.
    pub(crate) async fn perform(
        &self,
        operation: Operation,
        payload: Option<Payload>,
        extra_fields: FormFields,
    ) -> Result<ResponseEnvelope, ImgurError> {
        let req_url =
            url::Url::parse(self.config.api_url())?.join(&operation.path(payload.as_ref()))?;
        let authorization = self.auth.authorization_header(&self.config).await?;

        debug!(
            "{} {} ({})",
            operation.method(),
            req_url,
            <&'static str>::from(operation)
        );

        let mut req = self
            .https_client
            .request(operation.method(), req_url)
            .header(AUTHORIZATION, authorization)
            .header(ACCEPT, "application/json");
        if let Some(key) = self.config.mashape_key() {
            req = req.header(MASHAPE_KEY_HEADER, key);
        }

        if operation == Operation::Upload {
            let mut form = Form::new();
            if let Some(payload) = payload {
                form = payload.into_form(form);
            }
            for (param, value) in extra_fields {
                form = form.text(param, value);
            }
            req = req.multipart(form);
        }

        let envelope = req.send().await?.json::<ResponseEnvelope>().await?;
        if !envelope.success {
            let message = envelope
                .data
                .get("error")
                .and_then(serde_json::Value::as_str)
                .map(str::to_string)
                .unwrap_or_else(|| "No body data response".to_string());
            return Err(ImgurError::Api {
                status: envelope.status,
                message,
            });
        }
        Ok(envelope)
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient").finish()
    }
}
