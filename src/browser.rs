//! Opening the download page in the default browser

use tracing::{debug, warn};

/// Opens `url` in the user's default browser without waiting for it.
///
/// Returns whether the browser could be launched; failures are logged.
pub fn open_url(url: &str) -> bool {
    match open::that_detached(url) {
        Ok(()) => {
            debug!(url = %url, "Opened browser");
            true
        }
        Err(e) => {
            warn!(url = %url, error = %e, "Failed to open browser");
            false
        }
    }
}
