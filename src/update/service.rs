//! Update check orchestration
//!
//! [`UpdateService`] ties a [`ReleaseSource`] to the classifier and a
//! [`Reporter`]. Every failure is absorbed into [`UpdateSeverity::Unknown`];
//! nothing propagates past [`UpdateService::refresh`].

use std::sync::{Arc, RwLock};

use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use crate::report::{ReportLevel, Reporter};
use crate::update::checker::{UpdateSeverity, classify};
use crate::update::source::ReleaseSource;
use crate::update::version::Version;

/// Caption used when a failed check is displayed
pub const CHECK_FAILED_CAPTION: &str = "Unable to check for updated versions";

/// Outcome of a single update check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateCheck {
    pub current: Version,
    /// Latest published version, or `None` if the check failed
    pub available: Option<Version>,
    pub severity: UpdateSeverity,
    pub checked_at: DateTime<Utc>,
}

impl UpdateCheck {
    pub fn update_available(&self, skip_patch_updates: bool) -> bool {
        self.severity.update_available(skip_patch_updates)
    }
}

pub struct UpdateService {
    current: Version,
    source: Arc<dyn ReleaseSource>,
    reporter: Arc<dyn Reporter>,
    last: RwLock<Option<UpdateCheck>>,
}

impl UpdateService {
    pub fn new(
        current: Version,
        source: Arc<dyn ReleaseSource>,
        reporter: Arc<dyn Reporter>,
    ) -> Self {
        Self {
            current,
            source,
            reporter,
            last: RwLock::new(None),
        }
    }

    pub fn current_build(&self) -> Version {
        self.current
    }

    /// Most recent check result, if any check has run
    pub fn last_check(&self) -> Option<UpdateCheck> {
        self.last
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// Runs a check and returns only its severity
    pub async fn check(&self, display_errors: bool) -> UpdateSeverity {
        self.refresh(display_errors).await.severity
    }

    /// Fetches the latest release, classifies it and replaces the cached result.
    ///
    /// When `display_errors` is set, failures are also sent to the reporter.
    pub async fn refresh(&self, display_errors: bool) -> UpdateCheck {
        debug!("Checking for updates (current build {})", self.current);

        let (available, severity) = match self.source.fetch_latest_version().await {
            Ok(available) => {
                let severity = classify(self.current, available);
                info!(
                    "Update check: current {}, available {}, result {}",
                    self.current,
                    available,
                    severity.as_str()
                );
                (Some(available), severity)
            }
            Err(e) => {
                warn!("Update check failed: {}", e);
                if display_errors {
                    self.reporter
                        .report(CHECK_FAILED_CAPTION, &e.to_string(), ReportLevel::Error);
                }
                (None, UpdateSeverity::Unknown)
            }
        };

        let result = UpdateCheck {
            current: self.current,
            available,
            severity,
            checked_at: Utc::now(),
        };

        *self.last.write().unwrap_or_else(|e| e.into_inner()) = Some(result.clone());
        result
    }
}
