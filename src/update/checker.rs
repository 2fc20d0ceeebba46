//! Classification of an available version against the running build

use crate::update::version::Version;

/// How far ahead the available version is of the current build
///
/// Variants are ordered by distance; `Unknown` sorts last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum UpdateSeverity {
    /// Current build is up to date
    NoNewVersion,
    /// A newer build or revision within the same major.minor
    PatchAvailable,
    /// A newer minor version within the same major
    MinorAvailable,
    /// A newer major version
    MajorAvailable,
    /// The check itself failed, so nothing is known
    Unknown,
}

impl UpdateSeverity {
    /// Whether this result should be offered to the user as an update.
    ///
    /// Patch updates are suppressed when `skip_patch_updates` is set.
    /// `Unknown` is never an update.
    pub fn update_available(self, skip_patch_updates: bool) -> bool {
        match self {
            UpdateSeverity::PatchAvailable => !skip_patch_updates,
            UpdateSeverity::MinorAvailable | UpdateSeverity::MajorAvailable => true,
            UpdateSeverity::NoNewVersion | UpdateSeverity::Unknown => false,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UpdateSeverity::NoNewVersion => "no_new_version",
            UpdateSeverity::PatchAvailable => "patch_available",
            UpdateSeverity::MinorAvailable => "minor_available",
            UpdateSeverity::MajorAvailable => "major_available",
            UpdateSeverity::Unknown => "unknown",
        }
    }
}

/// Classify `available` relative to `current`
///
/// A greater major wins regardless of lower components, then a greater
/// minor under the same major. Anything else that is strictly greater is a
/// patch; everything not strictly greater is `NoNewVersion`.
pub fn classify(current: Version, available: Version) -> UpdateSeverity {
    if available.major > current.major {
        UpdateSeverity::MajorAvailable
    } else if available.major == current.major && available.minor > current.minor {
        UpdateSeverity::MinorAvailable
    } else if available > current {
        UpdateSeverity::PatchAvailable
    } else {
        UpdateSeverity::NoNewVersion
    }
}
