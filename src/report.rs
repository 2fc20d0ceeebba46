//! Reporting channel for check results and failures
//!
//! The host picks one [`Reporter`] at startup: [`InteractiveReporter`] for a
//! user at a terminal, [`BatchReporter`] for scripted or unattended runs.

use std::io::Write;
use std::sync::Mutex;

#[cfg(test)]
use mockall::automock;
use tracing::{error, info, warn};

/// Severity of a reported message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportLevel {
    Info,
    Warning,
    Error,
}

impl ReportLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportLevel::Info => "info",
            ReportLevel::Warning => "warning",
            ReportLevel::Error => "error",
        }
    }
}

/// Sink for user-facing messages
#[cfg_attr(test, automock)]
pub trait Reporter: Send + Sync {
    /// Reports `message` under `caption` at the given level
    fn report(&self, caption: &str, message: &str, level: ReportLevel);
}

/// Renders each report as a framed, captioned block
pub struct InteractiveReporter<W: Write + Send> {
    out: Mutex<W>,
}

impl<W: Write + Send> InteractiveReporter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    /// Consumes the reporter and returns the underlying writer
    pub fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(|e| e.into_inner())
    }
}

impl InteractiveReporter<std::io::Stderr> {
    pub fn stderr() -> Self {
        Self::new(std::io::stderr())
    }
}

impl<W: Write + Send> Reporter for InteractiveReporter<W> {
    fn report(&self, caption: &str, message: &str, level: ReportLevel) {
        let title = match level {
            ReportLevel::Info => caption.to_string(),
            ReportLevel::Warning => format!("Warning: {caption}"),
            ReportLevel::Error => format!("Error: {caption}"),
        };
        let mut out = self.out.lock().unwrap_or_else(|e| e.into_inner());
        let _ = write_framed(&mut *out, &title, message);
    }
}

fn write_framed(out: &mut impl Write, title: &str, message: &str) -> std::io::Result<()> {
    let pad = message.chars().count().max(title.chars().count());
    let rule = "─".repeat(pad + 2);

    writeln!(out, "┌{rule}┐")?;
    writeln!(out, "│ {title:<pad$} │")?;
    writeln!(out, "├{rule}┤")?;
    writeln!(out, "│ {message:<pad$} │")?;
    writeln!(out, "└{rule}┘")?;
    out.flush()
}

/// Writes one line per report and mirrors it to the log
pub struct BatchReporter<W: Write + Send> {
    out: Mutex<W>,
}

impl<W: Write + Send> BatchReporter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    /// Consumes the reporter and returns the underlying writer
    pub fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(|e| e.into_inner())
    }
}

impl BatchReporter<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write + Send> Reporter for BatchReporter<W> {
    fn report(&self, caption: &str, message: &str, level: ReportLevel) {
        match level {
            ReportLevel::Info => info!(caption, "{}", message),
            ReportLevel::Warning => warn!(caption, "{}", message),
            ReportLevel::Error => error!(caption, "{}", message),
        }

        let mut out = self.out.lock().unwrap_or_else(|e| e.into_inner());
        let _ = writeln!(out, "[{}] {}: {}", level.as_str(), caption, message);
    }
}
