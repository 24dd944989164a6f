//! Dependency specifications as written in package manifests.
//!
//! The grammar is `["?"] <name> [<op> <version>]` where `op` is one of
//! `>`, `>=` (also written `=>`) or `=`. A leading `?` marks the dependency
//! optional; a missing operator means any version satisfies it.

use std::fmt;

use modorder_util::errors::ModError;
use serde::{Deserialize, Serialize};

use crate::version::Version;

/// How a required version relates to the actual version of a dependency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VersionRange {
    /// Strictly newer than the required version (`>`).
    After,
    /// The required version or newer (`>=`).
    AtLeast,
    /// Exactly the required version (`=`).
    Exactly,
}

impl VersionRange {
    /// The canonical operator for this range.
    pub fn operator(self) -> &'static str {
        match self {
            VersionRange::After => ">",
            VersionRange::AtLeast => ">=",
            VersionRange::Exactly => "=",
        }
    }

    fn from_operator(op: &str) -> Option<Self> {
        match op {
            ">" => Some(VersionRange::After),
            ">=" | "=>" => Some(VersionRange::AtLeast),
            "=" => Some(VersionRange::Exactly),
            _ => None,
        }
    }
}

/// A version constraint attached to a dependency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VersionRequirement {
    pub version: Version,
    pub range: VersionRange,
}

impl VersionRequirement {
    pub fn new(range: VersionRange, version: Version) -> Self {
        Self { version, range }
    }

    /// Check whether `actual` satisfies this requirement.
    pub fn matches(&self, actual: &Version) -> bool {
        match self.range {
            VersionRange::After => *actual > self.version,
            VersionRange::AtLeast => *actual >= self.version,
            VersionRange::Exactly => *actual == self.version,
        }
    }
}

impl fmt::Display for VersionRequirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.range.operator(), self.version)
    }
}

/// One dependency entry declared by a package.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dependency {
    pub name: String,
    #[serde(default)]
    pub requirement: Option<VersionRequirement>,
    #[serde(default)]
    pub optional: bool,
}

impl Dependency {
    /// A mandatory dependency on any version of `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            requirement: None,
            optional: false,
        }
    }

    pub fn with_requirement(mut self, range: VersionRange, version: Version) -> Self {
        self.requirement = Some(VersionRequirement::new(range, version));
        self
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// Whether `actual` satisfies this dependency's version requirement.
    /// A dependency without a requirement accepts every version.
    pub fn accepts(&self, actual: &Version) -> bool {
        self.requirement.map_or(true, |req| req.matches(actual))
    }

    /// Parse a dependency specification such as `"? base >= 0.14.0"`.
    pub fn parse(spec: &str) -> Result<Self, ModError> {
        let invalid = |reason: String| ModError::DependencySpec {
            spec: spec.to_string(),
            reason,
        };

        let mut rest = spec.trim_start();
        let optional = match rest.strip_prefix('?') {
            Some(after) => {
                rest = after;
                true
            }
            None => false,
        };

        let op_start = rest.find(is_operator_char).unwrap_or(rest.len());
        let (name_part, suffix) = rest.split_at(op_start);

        let name = name_part.trim();
        if name.is_empty() {
            return Err(invalid("missing package name".to_string()));
        }
        if let Some(bad) = name.chars().find(|&c| !is_name_char(c)) {
            let reason = if bad == '.' {
                "version without a preceding operator".to_string()
            } else {
                format!("unexpected character `{bad}` in package name")
            };
            return Err(invalid(reason));
        }

        let suffix = suffix.trim();
        if suffix.is_empty() {
            return Ok(Self {
                name: name.to_string(),
                requirement: None,
                optional,
            });
        }

        let op_len = suffix
            .find(|c: char| !is_operator_char(c))
            .unwrap_or(suffix.len());
        let (op, version_text) = suffix.split_at(op_len);
        let range = VersionRange::from_operator(op)
            .ok_or_else(|| invalid(format!("unsupported operator `{op}`")))?;

        let version_text = version_text.trim();
        if version_text.is_empty() {
            return Err(invalid(format!(
                "operator `{op}` is not followed by a version"
            )));
        }
        let version = Version::parse(version_text)?;

        Ok(Self {
            name: name.to_string(),
            requirement: Some(VersionRequirement::new(range, version)),
            optional,
        })
    }
}

impl fmt::Display for Dependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.optional {
            f.write_str("? ")?;
        }
        f.write_str(&self.name)?;
        if let Some(req) = &self.requirement {
            write!(f, " {req}")?;
        }
        Ok(())
    }
}

fn is_operator_char(c: char) -> bool {
    matches!(c, '<' | '>' | '=' | '!' | '~' | '^')
}

fn is_name_char(c: char) -> bool {
    c.is_alphanumeric() || c.is_whitespace() || c == '_' || c == '-'
}
