use crate::error::{Result, UpdateError};
use reqwest::blocking::Client;

/// Blocking HTTP fetcher. The client keeps reqwest's defaults for
/// headers, redirects and timeout.
pub struct Downloader {
    client: Client,
}

impl Default for Downloader {
    fn default() -> Self {
        Self {
            client: Client::new(),
        }
    }
}

impl Downloader {
    pub fn new() -> Self {
        Self::default()
    }

    /// GETs `url` and returns the whole body. Non-success statuses are errors.
    pub fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        let response = self
            .client
            .get(url)
            .send()
            .and_then(|response| response.error_for_status())
            .map_err(|e| UpdateError::http(url, e))?;

        let body = response.bytes().map_err(|e| UpdateError::http(url, e))?;
        Ok(body.to_vec())
    }
}
