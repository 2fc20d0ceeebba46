//! GitHub Releases API source implementation

use std::time::Duration;

use reqwest::header::ACCEPT;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::config::UpdateConfig;
use crate::update::error::{FetchError, ParseError, UpdateError};
use crate::update::source::ReleaseSource;
use crate::update::version::Version;

/// Media type requested from the API
const GITHUB_ACCEPT: &str = "application/vnd.github.v3+json";

/// Response from the GitHub latest release API
#[derive(Debug, Deserialize)]
struct Release {
    tag_name: Option<String>,
}

/// Release source backed by the GitHub `releases/latest` endpoint
pub struct GitHubReleaseSource {
    client: reqwest::Client,
    url: String,
    api_version: String,
    timeout_ms: u64,
}

impl GitHubReleaseSource {
    /// Creates a source from configuration.
    ///
    /// Fails if the configured proxy URL is invalid or the client cannot be built.
    pub fn new(config: &UpdateConfig) -> Result<Self, FetchError> {
        let mut builder = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(Duration::from_millis(config.timeout_ms));

        if let Some(proxy) = &config.proxy {
            let proxy = reqwest::Proxy::all(proxy.as_str()).map_err(|e| FetchError::InvalidProxy {
                proxy: proxy.clone(),
                reason: e.to_string(),
            })?;
            builder = builder.proxy(proxy);
        }

        Ok(Self {
            client: builder.build()?,
            url: config.releases_latest_url(),
            api_version: config.api_version.clone(),
            timeout_ms: config.timeout_ms,
        })
    }

    fn map_request_error(&self, error: reqwest::Error) -> FetchError {
        if error.is_timeout() {
            FetchError::Timeout {
                timeout_ms: self.timeout_ms,
            }
        } else {
            FetchError::Network(error)
        }
    }
}

/// Extracts the version from a latest-release JSON document
fn parse_release(body: &str) -> Result<Version, ParseError> {
    let release: Release = serde_json::from_str(body).map_err(|e| {
        warn!("Failed to parse GitHub release response: {}", e);
        ParseError::InvalidResponse(e.to_string())
    })?;

    let tag = release.tag_name.ok_or(ParseError::MissingTag)?;
    if tag.trim().is_empty() {
        return Err(ParseError::EmptyTag);
    }

    Version::parse(&tag)
}

#[async_trait::async_trait]
impl ReleaseSource for GitHubReleaseSource {
    async fn fetch_latest_version(&self) -> Result<Version, UpdateError> {
        debug!("Fetching latest release: {}", self.url);

        let response = self
            .client
            .get(&self.url)
            .header(ACCEPT, GITHUB_ACCEPT)
            .header("X-GitHub-Api-Version", self.api_version.as_str())
            .send()
            .await
            .map_err(|e| self.map_request_error(e))?;

        let status = response.status();
        if !status.is_success() {
            warn!("GitHub API returned status {}: {}", status, self.url);
            return Err(FetchError::Status(status).into());
        }

        let body = response
            .text()
            .await
            .map_err(|e| self.map_request_error(e))?;

        Ok(parse_release(&body)?)
    }
}
