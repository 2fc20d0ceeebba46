//! Trait for fetching the latest released version from a remote source

#[cfg(test)]
use mockall::automock;

use crate::update::error::UpdateError;
use crate::update::version::Version;

/// Trait for fetching the latest published version
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait ReleaseSource: Send + Sync {
    /// Fetches and parses the latest release
    ///
    /// # Returns
    /// * `Ok(Version)` - The version of the latest release
    /// * `Err(UpdateError::Fetch)` - If the request failed, timed out or returned a non-2xx status
    /// * `Err(UpdateError::Parse)` - If the release tag was absent or not a valid version
    async fn fetch_latest_version(&self) -> Result<Version, UpdateError>;
}
