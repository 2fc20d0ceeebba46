use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Directory name used under the config and data directories
const APP_DIR: &str = "update-checker";

/// Default base URL for GitHub API
pub const DEFAULT_API_BASE_URL: &str = "https://api.github.com";

/// Repository whose releases are checked
pub const DEFAULT_REPOSITORY: &str = "TabularEditor/TabularEditor";

/// Client identifier sent with every request
pub const DEFAULT_USER_AGENT: &str = "TabularEditorUpdateChecker";

/// Value of the `X-GitHub-Api-Version` header
pub const DEFAULT_API_VERSION: &str = "2022-11-28";

/// Timeout for the release request in milliseconds (5 seconds)
pub const FETCH_TIMEOUT_MS: u64 = 5_000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file {path:?}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Update checker configuration structure
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct UpdateConfig {
    pub api_base_url: String,
    /// `owner/name` of the GitHub repository
    pub repository: String,
    pub user_agent: String,
    pub api_version: String,
    /// Request timeout in milliseconds
    pub timeout_ms: u64,
    /// Proxy URL used for all requests; environment proxies apply when unset
    pub proxy: Option<String>,
    pub skip_patch_updates: bool,
}

impl Default for UpdateConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            repository: DEFAULT_REPOSITORY.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            timeout_ms: FETCH_TIMEOUT_MS,
            proxy: None,
            skip_patch_updates: false,
        }
    }
}

impl UpdateConfig {
    /// URL of the latest release endpoint
    pub fn releases_latest_url(&self) -> String {
        format!(
            "{}/repos/{}/releases/latest",
            self.api_base_url.trim_end_matches('/'),
            self.repository
        )
    }

    /// Human-facing page where the latest release can be downloaded
    pub fn download_page_url(&self) -> String {
        format!("https://github.com/{}/releases/latest", self.repository)
    }

    /// Loads configuration from `path`, falling back to defaults when the file does not exist
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        serde_json::from_str(&content).map_err(|source| ConfigError::Json {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Returns the path to the config directory for update-checker.
/// Uses $XDG_CONFIG_HOME/update-checker if XDG_CONFIG_HOME is set,
/// otherwise falls back to ~/.config/update-checker,
/// or ./update-checker if neither is available.
pub fn config_dir() -> PathBuf {
    dir_with_env(
        std::env::var("XDG_CONFIG_HOME").ok(),
        dirs::home_dir(),
        ".config",
    )
}

/// Returns the path to the data directory for update-checker.
/// Uses $XDG_DATA_HOME/update-checker if XDG_DATA_HOME is set,
/// otherwise falls back to ~/.local/share/update-checker,
/// or ./update-checker if neither is available.
pub fn data_dir() -> PathBuf {
    dir_with_env(
        std::env::var("XDG_DATA_HOME").ok(),
        dirs::home_dir(),
        ".local/share",
    )
}

/// Returns the path to the config file.
pub fn config_path() -> PathBuf {
    config_dir().join("config.json")
}

/// Returns the path to the log file.
pub fn log_path() -> PathBuf {
    data_dir().join("update-checker.log")
}

fn dir_with_env(xdg_home: Option<String>, home_dir: Option<PathBuf>, home_suffix: &str) -> PathBuf {
    let base = xdg_home
        .map(PathBuf::from)
        .or_else(|| home_dir.map(|home| home.join(home_suffix)))
        .unwrap_or_else(|| PathBuf::from("."));

    base.join(APP_DIR)
}
