//! Blocking HTTP fetcher.

use std::fs;
use std::io::Read;
use std::time::Duration;

use url::Url;

use crate::error::{Result, SwatchError};

use super::Fetcher;

/// Response bodies are cut off after this many bytes.
const MAX_BODY_BYTES: u64 = 10 * 1024 * 1024;

/// Fetches pages over HTTP(S), and `file:` URLs from disk.
pub struct HttpFetcher {
    agent: ureq::Agent,
}

impl HttpFetcher {
    pub fn new(timeout: Duration, user_agent: &str) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(timeout)
            .user_agent(user_agent)
            .build();
        Self { agent }
    }
}

impl Fetcher for HttpFetcher {
    fn fetch(&self, url: &Url) -> Result<String> {
        if url.scheme() == "file" {
            let path = url.to_file_path().map_err(|()| SwatchError::Url {
                input: url.to_string(),
                message: "not a local file path".to_string(),
            })?;
            let bytes = fs::read(&path).map_err(|e| SwatchError::Io {
                path,
                message: e.to_string(),
            })?;
            return Ok(decode(&bytes));
        }

        let response = self
            .agent
            .request_url("GET", url)
            .call()
            .map_err(|e| SwatchError::Fetch {
                url: url.to_string(),
                message: e.to_string(),
                help: None,
            })?;

        let mut body = Vec::new();
        response
            .into_reader()
            .take(MAX_BODY_BYTES)
            .read_to_end(&mut body)
            .map_err(|e| SwatchError::Fetch {
                url: url.to_string(),
                message: format!("Failed to read response body: {}", e),
                help: None,
            })?;
        Ok(decode(&body))
    }
}

/// Decode text, replacing invalid UTF-8 with U+FFFD.
fn decode(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}
