// src/core/net.rs

// Blocking HTTP GET of one facility page.

use reqwest::{StatusCode, blocking::Client};
use thiserror::Error;
use tracing::debug;

use crate::config::{consts::USER_AGENT, options::RunOptions};

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("could not build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("GET {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP error: {status} {url}")]
    Status { url: String, status: StatusCode },
}

/// Where facility pages come from. One call per code, raw page text back.
pub trait PageSource {
    fn fetch_page(&self, code: &str) -> Result<String, FetchError>;
}

pub struct HttpFetcher {
    client: Client,
    base_url: String,
}

impl HttpFetcher {
    pub fn new(opts: &RunOptions) -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(opts.timeout)
            .build()
            .map_err(FetchError::Client)?;

        Ok(Self { client, base_url: opts.base_url.clone() })
    }

    pub fn url_for(&self, code: &str) -> String {
        format!("{}{}", self.base_url, code)
    }
}

impl PageSource for HttpFetcher {
    fn fetch_page(&self, code: &str) -> Result<String, FetchError> {
        let url = self.url_for(code);
        debug!(%url, "GET");

        let resp = self
            .client
            .get(&url)
            .send()
            .map_err(|source| FetchError::Request { url: url.clone(), source })?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status { url, status });
        }

        resp.text().map_err(|source| FetchError::Request { url, source })
    }
}
