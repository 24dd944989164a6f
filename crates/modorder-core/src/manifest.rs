//! Package manifest (`info.json`) reading.
//!
//! A manifest is a JSON object with at least `name` and `version` strings
//! and an optional `dependencies` array of dependency specifications.
//! Unknown keys are ignored.

use std::io::Read;
use std::path::Path;

use modorder_util::errors::ModError;
use serde_json::{Map, Value};

use crate::dependency::Dependency;
use crate::version::Version;

const KEY_NAME: &str = "name";
const KEY_VERSION: &str = "version";
const KEY_DEPENDENCIES: &str = "dependencies";

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// The parsed representation of a package manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manifest {
    pub name: String,
    pub version: Version,
    pub dependencies: Vec<Dependency>,
}

impl Manifest {
    /// Load and parse a manifest file from the given path.
    pub fn from_path(path: &Path) -> Result<Self, ModError> {
        let origin = path.display().to_string();
        let content = std::fs::read(path).map_err(|e| ModError::Manifest {
            origin: origin.clone(),
            message: format!("failed to read: {e}"),
        })?;
        Self::from_slice(&origin, &content)
    }

    /// Parse a manifest from a reader, e.g. an archive entry.
    ///
    /// `origin` names the package source in error messages.
    pub fn from_reader<R: Read>(origin: &str, mut reader: R) -> Result<Self, ModError> {
        let mut content = Vec::new();
        reader
            .read_to_end(&mut content)
            .map_err(|e| ModError::Manifest {
                origin: origin.to_string(),
                message: format!("failed to read: {e}"),
            })?;
        Self::from_slice(origin, &content)
    }

    /// Parse a manifest from raw UTF-8 JSON bytes. A leading byte-order mark
    /// is ignored.
    pub fn from_slice(origin: &str, content: &[u8]) -> Result<Self, ModError> {
        let content = content.strip_prefix(UTF8_BOM).unwrap_or(content);
        let raw: Map<String, Value> =
            serde_json::from_slice(content).map_err(|e| ModError::Manifest {
                origin: origin.to_string(),
                message: format!("not a JSON object: {e}"),
            })?;
        Self::from_map(origin, &raw)
    }

    /// Build a manifest from an already-decoded key/value map.
    pub fn from_map(origin: &str, raw: &Map<String, Value>) -> Result<Self, ModError> {
        let reader = KeyReader { origin, raw };

        let name = reader.require_str(KEY_NAME)?.to_string();
        let version = reader.require_str(KEY_VERSION)?;
        let dependencies = match raw.get(KEY_DEPENDENCIES) {
            Some(value) => reader.parse_dependencies(value)?,
            None => Vec::new(),
        };

        Ok(Self {
            name,
            version: Version::parse(version)?,
            dependencies,
        })
    }
}

struct KeyReader<'a> {
    origin: &'a str,
    raw: &'a Map<String, Value>,
}

impl<'a> KeyReader<'a> {
    fn error(&self, message: String) -> ModError {
        ModError::Manifest {
            origin: self.origin.to_string(),
            message,
        }
    }

    fn require_str(&self, key: &str) -> Result<&'a str, ModError> {
        match self.raw.get(key) {
            None => Err(self.error(format!("required key `{key}` is missing"))),
            Some(Value::String(s)) => Ok(s.as_str()),
            Some(_) => Err(self.error(format!("expected `{key}` of type string"))),
        }
    }

    fn parse_dependencies(&self, value: &Value) -> Result<Vec<Dependency>, ModError> {
        let Value::Array(entries) = value else {
            return Err(self.error(format!("expected `{KEY_DEPENDENCIES}` of type array")));
        };

        entries
            .iter()
            .map(|entry| match entry {
                Value::String(spec) => Dependency::parse(spec).map_err(|e| match e {
                    ModError::DependencySpec { spec, reason } => self.error(format!(
                        "invalid dependency specification `{spec}`: {reason}"
                    )),
                    other => other,
                }),
                _ => Err(self.error(format!(
                    "expected `{KEY_DEPENDENCIES}` entries of type string"
                ))),
            })
            .collect()
    }
}
