//! Reporter test utilities

use std::sync::Mutex;

use update_checker::report::{ReportLevel, Reporter};

/// Reporter that keeps every report for later assertions
#[derive(Default)]
pub struct RecordingReporter {
    reports: Mutex<Vec<(String, String, ReportLevel)>>,
}

impl RecordingReporter {
    pub fn reports(&self) -> Vec<(String, String, ReportLevel)> {
        self.reports.lock().unwrap().clone()
    }
}

impl Reporter for RecordingReporter {
    fn report(&self, caption: &str, message: &str, level: ReportLevel) {
        self.reports
            .lock()
            .unwrap()
            .push((caption.to_string(), message.to_string(), level));
    }
}
