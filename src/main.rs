use std::io::IsTerminal;
use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing::info;

use update_checker::browser::open_url;
use update_checker::config::{UpdateConfig, config_path, log_path};
use update_checker::logging::init_logging_or_warn;
use update_checker::report::{BatchReporter, InteractiveReporter, ReportLevel, Reporter};
use update_checker::update::checker::UpdateSeverity;
use update_checker::update::github::GitHubReleaseSource;
use update_checker::update::service::UpdateService;
use update_checker::update::version::Version;

#[derive(Parser)]
#[command(name = "update-checker")]
#[command(version, about = "Checks whether a newer release has been published")]
struct Cli {
    /// Path to the JSON config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Report plain lines instead of framed messages
    #[arg(long, global = true)]
    batch: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Check for a newer release
    Check {
        /// Version to compare against instead of this build
        #[arg(long, value_parser = parse_version)]
        current: Option<Version>,

        /// Do not offer build/revision-only updates
        #[arg(long)]
        skip_patch: bool,

        /// Do not display errors when the check fails
        #[arg(long)]
        quiet: bool,

        /// Open the download page when an update is available
        #[arg(long)]
        open: bool,
    },
    /// Open the download page
    Open,
}

fn parse_version(s: &str) -> Result<Version, String> {
    Version::parse(s).map_err(|e| e.to_string())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = UpdateConfig::load(&cli.config.unwrap_or_else(config_path))?;
    let _guard = init_logging_or_warn(&log_path());

    let reporter: Arc<dyn Reporter> = if cli.batch || !std::io::stdout().is_terminal() {
        Arc::new(BatchReporter::stdout())
    } else {
        Arc::new(InteractiveReporter::stderr())
    };

    match cli.command {
        Command::Check {
            current,
            skip_patch,
            quiet,
            open,
        } => {
            let source = GitHubReleaseSource::new(&config)?;
            let service = UpdateService::new(
                current.unwrap_or_else(Version::current),
                Arc::new(source),
                reporter.clone(),
            );

            let result = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()?
                .block_on(service.refresh(!quiet));

            let skip_patch = skip_patch || config.skip_patch_updates;
            match (result.severity, result.available) {
                (UpdateSeverity::Unknown, _) | (_, None) => {}
                (_, Some(available)) if result.update_available(skip_patch) => {
                    reporter.report(
                        "Update available",
                        &format!(
                            "Version {} is available (current build {}): {}",
                            available,
                            result.current,
                            config.download_page_url()
                        ),
                        ReportLevel::Info,
                    );
                    if open {
                        open_url(&config.download_page_url());
                    }
                }
                (UpdateSeverity::PatchAvailable, Some(available)) => {
                    reporter.report(
                        "Patch update skipped",
                        &format!(
                            "Version {} is available but patch updates are skipped (current build {})",
                            available, result.current
                        ),
                        ReportLevel::Info,
                    );
                }
                (_, Some(available)) => {
                    reporter.report(
                        "No update available",
                        &format!(
                            "Current build {} is up to date (latest release {})",
                            result.current, available
                        ),
                        ReportLevel::Info,
                    );
                }
            }
            info!("Update check finished: {}", result.severity.as_str());
        }
        Command::Open => {
            open_url(&config.download_page_url());
        }
    }

    Ok(())
}
