//! Per-package resolution outcomes.

use std::fmt;

use modorder_core::dependency::VersionRequirement;
use modorder_core::package::PackageMetadata;
use modorder_core::version::Version;
use serde::Serialize;

/// Why a package cannot be loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum DependencyProblem {
    /// A mandatory dependency is absent or could not be resolved itself.
    MissingDependency { name: String },
    /// A dependency is present but its version does not satisfy the
    /// requirement. Applies to optional dependencies too.
    VersionMismatch {
        name: String,
        required: VersionRequirement,
        actual: Version,
    },
    /// The package takes part in a dependency cycle. The path starts and
    /// ends with the same package name.
    CyclicDependency { path: Vec<String> },
}

impl fmt::Display for DependencyProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DependencyProblem::MissingDependency { name } => {
                write!(f, "missing dependency `{name}`")
            }
            DependencyProblem::VersionMismatch {
                name,
                required,
                actual,
            } => write!(
                f,
                "dependency `{name}` requires version {required}, found {actual}"
            ),
            DependencyProblem::CyclicDependency { path } => {
                write!(f, "cyclic dependency: {}", path.join(" -> "))
            }
        }
    }
}

/// The outcome of one resolution run for a single package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionStatus {
    pub metadata: PackageMetadata,
    pub problems: Vec<DependencyProblem>,
}

impl ResolutionStatus {
    pub fn new(metadata: PackageMetadata, problems: Vec<DependencyProblem>) -> Self {
        Self { metadata, problems }
    }

    /// A package is loadable iff it has no problems.
    pub fn is_successful(&self) -> bool {
        self.problems.is_empty()
    }

    pub fn name(&self) -> &str {
        &self.metadata.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use modorder_core::dependency::VersionRange;
    use modorder_core::package::DeploymentKind;

    fn package(name: &str) -> PackageMetadata {
        PackageMetadata {
            source: format!("mods/{name}").into(),
            deployment: DeploymentKind::Directory,
            name: name.to_string(),
            version: Version::new(1, 0, 0),
            dependencies: vec![],
        }
    }

    #[test]
    fn success_means_no_problems() {
        let ok = ResolutionStatus::new(package("a"), vec![]);
        assert!(ok.is_successful());
        assert_eq!(ok.name(), "a");

        let failed = ResolutionStatus::new(
            package("b"),
            vec![DependencyProblem::MissingDependency {
                name: "c".to_string(),
            }],
        );
        assert!(!failed.is_successful());
    }

    #[test]
    fn problem_messages() {
        let missing = DependencyProblem::MissingDependency {
            name: "Missing".to_string(),
        };
        assert_eq!(missing.to_string(), "missing dependency `Missing`");

        let mismatch = DependencyProblem::VersionMismatch {
            name: "B".to_string(),
            required: VersionRequirement::new(VersionRange::After, Version::new(1, 0, 0)),
            actual: Version::new(1, 0, 0),
        };
        assert_eq!(
            mismatch.to_string(),
            "dependency `B` requires version > 1.0.0, found 1.0.0"
        );

        let cycle = DependencyProblem::CyclicDependency {
            path: vec!["A".into(), "B".into(), "A".into()],
        };
        assert_eq!(cycle.to_string(), "cyclic dependency: A -> B -> A");
    }

    #[test]
    fn problems_serialize_with_kind_tag() {
        let json = serde_json::to_value(DependencyProblem::MissingDependency {
            name: "x".to_string(),
        })
        .unwrap();
        assert_eq!(json["kind"], "missing-dependency");
        assert_eq!(json["name"], "x");
    }
}
