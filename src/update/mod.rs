//! Update checking layer
//!
//! Fetches the latest published release, parses its tag into a [`version::Version`]
//! and classifies how far ahead it is of the running build.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   Source    │────▶│   Version   │────▶│   Checker   │
//! │  (fetch)    │     │   (parse)   │     │ (classify)  │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!        ▲                                       │
//!        │            ┌─────────────┐            │
//!        └────────────│   Service   │◀───────────┘
//!                     │(orchestrate)│
//!                     └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`checker`]: Severity classification between current and available versions
//! - [`error`]: Error types for fetch and parse failures
//! - [`github`]: GitHub Releases API source
//! - [`service`]: Orchestration that degrades every failure to `Unknown`
//! - [`source`]: Trait for fetching the latest released version
//! - [`version`]: Four-component version type and strict parsing

pub mod checker;
pub mod error;
pub mod github;
pub mod service;
pub mod source;
pub mod version;
