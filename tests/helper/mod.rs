//! Shared test utilities

pub mod report;
pub mod source;

pub use report::RecordingReporter;
pub use source::StubSource;
