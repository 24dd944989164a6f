//! Package version values.
//!
//! Versions are `(major, minor, patch)` triples written in dot notation.
//! The patch component may be omitted on input (`"1.2"` is `1.2.0`), but is
//! always present on output, so `"1.2"` formats back as `"1.2.0"`.

use std::fmt;
use std::str::FromStr;

use modorder_util::errors::ModError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A parsed package version, ordered lexicographically on its components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl Version {
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Parse `<major>.<minor>` or `<major>.<minor>.<patch>`.
    ///
    /// Every component must be a non-empty run of ASCII digits that fits in
    /// a `u32`; signs, whitespace and trailing components are rejected.
    pub fn parse(input: &str) -> Result<Self, ModError> {
        let malformed = || ModError::VersionFormat {
            input: input.to_string(),
        };

        let parts: Vec<&str> = input.split('.').collect();
        if parts.len() != 2 && parts.len() != 3 {
            return Err(malformed());
        }

        let mut components = [0u32; 3];
        for (slot, part) in components.iter_mut().zip(&parts) {
            if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(malformed());
            }
            *slot = part.parse().map_err(|_| malformed())?;
        }

        Ok(Self::new(components[0], components[1], components[2]))
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl FromStr for Version {
    type Err = ModError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for Version {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Version {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}
