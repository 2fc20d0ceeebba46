//! Four-component build versions
//!
//! Versions have the form `major.minor.build.revision`. Parsing is strict:
//! release tags must already be in that exact form, so a tag such as
//! `v2.27.0` is rejected instead of being reinterpreted.

use std::fmt;
use std::str::FromStr;

use tracing::warn;

use crate::update::error::ParseError;

/// Number of dot-separated components in a version string
const COMPONENT_COUNT: usize = 4;

/// Build version of the running binary, padded to four components
pub const CURRENT_BUILD: &str = concat!(env!("CARGO_PKG_VERSION"), ".0");

const _: () = assert!(
    is_four_part_numeric(CURRENT_BUILD),
    "crate version must be plain major.minor.patch digits"
);

/// Whether `s` is four non-empty digit runs separated by dots
const fn is_four_part_numeric(s: &str) -> bool {
    let bytes = s.as_bytes();
    let mut dots = 0;
    let mut run = 0;
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'.' {
            if run == 0 {
                return false;
            }
            dots += 1;
            run = 0;
        } else if bytes[i].is_ascii_digit() {
            run += 1;
        } else {
            return false;
        }
        i += 1;
    }
    dots == COMPONENT_COUNT - 1 && run > 0
}

/// Immutable build version ordered lexicographically by component
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub build: u32,
    pub revision: u32,
}

impl Version {
    pub const fn new(major: u32, minor: u32, build: u32, revision: u32) -> Self {
        Self {
            major,
            minor,
            build,
            revision,
        }
    }

    /// Parses a version string after trimming surrounding whitespace.
    ///
    /// Each component must be a run of ASCII digits that fits in a `u32`.
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        let trimmed = input.trim();
        let invalid = |reason| ParseError::InvalidVersion {
            input: trimmed.to_string(),
            reason,
        };

        let parts: Vec<&str> = trimmed.split('.').collect();
        if parts.len() != COMPONENT_COUNT {
            return Err(invalid("expected four dot-separated components"));
        }

        let mut components = [0u32; COMPONENT_COUNT];
        for (slot, part) in components.iter_mut().zip(&parts) {
            if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(invalid("components must be non-negative integers"));
            }
            *slot = part
                .parse()
                .map_err(|_| invalid("component is out of range"))?;
        }

        let [major, minor, build, revision] = components;
        Ok(Self::new(major, minor, build, revision))
    }

    /// Version of the running binary
    pub fn current() -> Self {
        Self::parse(CURRENT_BUILD).unwrap_or_else(|e| {
            warn!("Falling back to 0.0.0.0 for current build: {}", e);
            Self::default()
        })
    }
}

impl FromStr for Version {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{}.{}.{}",
            self.major, self.minor, self.build, self.revision
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("2.27.1.2342", Version::new(2, 27, 1, 2342))]
    #[case("0.0.0.0", Version::new(0, 0, 0, 0))]
    #[case("  3.0.0.4344\n", Version::new(3, 0, 0, 4344))]
    #[case("4294967295.0.0.1", Version::new(u32::MAX, 0, 0, 1))]
    fn parse_accepts_four_numeric_components(#[case] input: &str, #[case] expected: Version) {
        assert_eq!(Version::parse(input), Ok(expected));
    }

    #[rstest]
    #[case("v2.27.1.2342")] // prefix is not stripped
    #[case("2.27.1")]
    #[case("2.27")]
    #[case("2.27.1.2342.5")]
    #[case("2.27..2342")]
    #[case("2.-1.1.2342")]
    #[case("2.+1.1.2342")]
    #[case("2.27.1.2342-beta")]
    #[case("4294967296.0.0.0")]
    #[case("")]
    fn parse_rejects_non_conforming_input(#[case] input: &str) {
        assert!(matches!(
            Version::parse(input),
            Err(ParseError::InvalidVersion { .. })
        ));
    }

    #[test]
    fn ordering_is_lexicographic_by_component() {
        let ordered = [
            Version::new(1, 9, 9, 9),
            Version::new(2, 0, 0, 0),
            Version::new(2, 0, 0, 1),
            Version::new(2, 0, 1, 0),
            Version::new(2, 1, 0, 0),
        ];

        for pair in ordered.windows(2) {
            assert!(pair[0] < pair[1], "{} should be < {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn display_joins_components_with_dots() {
        assert_eq!(Version::new(2, 28, 0, 144).to_string(), "2.28.0.144");
    }

    #[rstest]
    #[case("2.27.1.0", true)]
    #[case("0.0.0.0", true)]
    #[case("2.27.1-beta.1.0", false)]
    #[case("2.27.1", false)]
    #[case("2..1.0", false)]
    #[case("2.27.1.", false)]
    #[case("", false)]
    fn is_four_part_numeric_matches_parse(#[case] input: &str, #[case] expected: bool) {
        assert_eq!(is_four_part_numeric(input), expected);
        assert_eq!(Version::parse(input).is_ok(), expected);
    }

    #[test]
    fn current_matches_crate_version() {
        let current = Version::current();
        let pkg = env!("CARGO_PKG_VERSION");

        assert_eq!(current.to_string(), format!("{pkg}.0"));
    }
}
