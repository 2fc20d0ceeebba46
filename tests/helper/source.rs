//! Release source test utilities

use std::sync::Mutex;

use async_trait::async_trait;

use update_checker::update::error::UpdateError;
use update_checker::update::source::ReleaseSource;
use update_checker::update::version::Version;

/// Source that replays queued results, oldest first
pub struct StubSource {
    results: Mutex<Vec<Result<Version, UpdateError>>>,
}

impl StubSource {
    pub fn new(mut results: Vec<Result<Version, UpdateError>>) -> Self {
        results.reverse();
        Self {
            results: Mutex::new(results),
        }
    }

    pub fn returning(version: &str) -> Self {
        Self::new(vec![Ok(Version::parse(version).unwrap())])
    }
}

#[async_trait]
impl ReleaseSource for StubSource {
    async fn fetch_latest_version(&self) -> Result<Version, UpdateError> {
        self.results
            .lock()
            .unwrap()
            .pop()
            .expect("StubSource has no more results queued")
    }
}
