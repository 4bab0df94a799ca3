use reqwest::blocking::Client;
use serde_json::Value;

use super::error::ApiError;

pub const DEFAULT_BASE_URL: &str = "http://api.open-notify.org";

/// Anything that can answer a GET with a decoded JSON document.
pub trait JsonSource {
    fn fetch_json(&self, path: &str, query: &[(&str, String)]) -> Result<Value, ApiError>;
}

/// Blocking wrapper around `reqwest` with a fixed base URL.
///
/// Requests are issued one at a time on the calling thread. No retries are
/// attempted and the transport's default timeout applies.
#[derive(Debug)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        Ok(Self {
            client: Client::builder().build()?,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn url(&self) -> &str {
        &self.base_url
    }
}

impl JsonSource for ApiClient {
    fn fetch_json(&self, path: &str, query: &[(&str, String)]) -> Result<Value, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        log::debug!("GET {} {:?}", url, query);

        let response = self.client.get(&url).query(query).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Http {
                status,
                url: response.url().to_string(),
            });
        }

        Ok(response.json::<Value>()?)
    }
}
