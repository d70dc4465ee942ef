// src/core/net.rs

// Blocking HTTPS GET of dashboard resources.

use std::time::Duration;

use reqwest::blocking::Client;

use crate::config::consts::{REQUEST_TIMEOUT_SECS, USER_AGENT};
use crate::config::options::resource_url;
use crate::error::{Error, Result};

/// Where the raw CSV exports come from. The runner only ever asks for a
/// resource by file name; `HttpSource` resolves it against the dashboard,
/// tests hand in canned text.
pub trait Source {
    fn fetch_text(&self, resource: &str) -> Result<String>;
}

pub struct HttpSource {
    base_url: String,
    client: Client,
}

impl HttpSource {
    pub fn new(base_url: &str) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| Error::fetch(base_url, e))?;

        Ok(Self { base_url: s!(base_url), client })
    }

    pub fn http_get(&self, url: &str) -> Result<String> {
        logd!("GET {url}");
        let resp = self
            .client
            .get(url)
            .send()
            .and_then(|r| r.error_for_status())
            .map_err(|e| Error::fetch(url, e))?;

        // The detections table is served without a charset; assume UTF-8.
        let body = resp
            .text_with_charset("utf-8")
            .map_err(|e| Error::fetch(url, e))?;

        Ok(strip_bom(body))
    }
}

impl Source for HttpSource {
    fn fetch_text(&self, resource: &str) -> Result<String> {
        self.http_get(&resource_url(&self.base_url, resource))
    }
}

pub fn strip_bom(text: String) -> String {
    match text.strip_prefix('\u{feff}') {
        Some(rest) => s!(rest),
        None => text,
    }
}
