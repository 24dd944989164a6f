use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::dependency::Dependency;
use crate::manifest::Manifest;
use crate::version::Version;

/// How a package is laid out on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeploymentKind {
    /// An unpacked directory containing the manifest.
    Directory,
    /// A `.zip` archive containing the manifest.
    Archive,
}

impl fmt::Display for DeploymentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeploymentKind::Directory => f.write_str("directory"),
            DeploymentKind::Archive => f.write_str("archive"),
        }
    }
}

/// A discovered package: where it lives plus its parsed manifest.
///
/// The `name` identifies the package within one resolution run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageMetadata {
    pub source: PathBuf,
    pub deployment: DeploymentKind,
    pub name: String,
    pub version: Version,
    #[serde(default)]
    pub dependencies: Vec<Dependency>,
}

impl PackageMetadata {
    pub fn from_manifest(source: PathBuf, deployment: DeploymentKind, manifest: Manifest) -> Self {
        Self {
            source,
            deployment,
            name: manifest.name,
            version: manifest.version,
            dependencies: manifest.dependencies,
        }
    }

    /// `<name>_<version>`, the conventional file name of a packaged release.
    pub fn versioned_name(&self) -> String {
        format!("{}_{}", self.name, self.version)
    }
}
