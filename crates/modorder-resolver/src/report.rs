//! Human and machine readable summaries of a resolution run.

use std::fmt;
use std::path::Path;

use modorder_core::package::DeploymentKind;
use modorder_core::version::Version;
use serde::{Serialize, Serializer};

use crate::problem::{DependencyProblem, ResolutionStatus};

/// The ordered outcome of resolving a catalog.
#[derive(Debug, Clone, Default)]
pub struct ResolutionReport {
    pub statuses: Vec<ResolutionStatus>,
}

impl ResolutionReport {
    pub fn new(statuses: Vec<ResolutionStatus>) -> Self {
        Self { statuses }
    }

    /// Loadable packages, in load order.
    pub fn load_order(&self) -> impl Iterator<Item = &ResolutionStatus> {
        self.statuses.iter().filter(|s| s.is_successful())
    }

    /// Packages that cannot be loaded.
    pub fn rejected(&self) -> impl Iterator<Item = &ResolutionStatus> {
        self.statuses.iter().filter(|s| !s.is_successful())
    }

    /// `true` when every package resolved.
    pub fn is_clean(&self) -> bool {
        self.statuses.iter().all(ResolutionStatus::is_successful)
    }

    pub fn len(&self) -> usize {
        self.statuses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statuses.is_empty()
    }
}

impl fmt::Display for ResolutionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let loadable: Vec<_> = self.load_order().collect();
        writeln!(f, "Load order ({}):", loadable.len())?;
        for (i, status) in loadable.iter().enumerate() {
            writeln!(
                f,
                "  {:>3}. {} {}",
                i + 1,
                status.metadata.name,
                status.metadata.version
            )?;
        }

        let rejected: Vec<_> = self.rejected().collect();
        if rejected.is_empty() {
            return Ok(());
        }
        writeln!(f, "Rejected ({}):", rejected.len())?;
        for status in rejected {
            writeln!(f, "  {} {}", status.metadata.name, status.metadata.version)?;
            for problem in &status.problems {
                writeln!(f, "    - {problem}")?;
            }
        }
        Ok(())
    }
}

/// Serialized shape of one status.
#[derive(Serialize)]
struct StatusView<'a> {
    name: &'a str,
    version: Version,
    source: &'a Path,
    deployment: DeploymentKind,
    successful: bool,
    problems: &'a [DependencyProblem],
}

impl<'a> From<&'a ResolutionStatus> for StatusView<'a> {
    fn from(status: &'a ResolutionStatus) -> Self {
        Self {
            name: &status.metadata.name,
            version: status.metadata.version,
            source: &status.metadata.source,
            deployment: status.metadata.deployment,
            successful: status.is_successful(),
            problems: &status.problems,
        }
    }
}

impl Serialize for ResolutionReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.statuses.iter().map(StatusView::from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use modorder_core::dependency::Dependency;
    use modorder_core::package::PackageMetadata;

    use crate::resolver::resolve;

    fn package(name: &str, deps: &[&str]) -> PackageMetadata {
        PackageMetadata {
            source: format!("mods/{name}").into(),
            deployment: DeploymentKind::Directory,
            name: name.to_string(),
            version: Version::new(1, 0, 0),
            dependencies: deps.iter().map(|d| Dependency::parse(d).unwrap()).collect(),
        }
    }

    fn sample() -> ResolutionReport {
        ResolutionReport::new(
            resolve(&[
                package("Base", &[]),
                package("Add1", &["Base >= 1.0.0"]),
                package("Broken", &["Missing"]),
            ])
            .unwrap(),
        )
    }

    #[test]
    fn splits_loadable_and_rejected() {
        let report = sample();
        assert_eq!(report.len(), 3);
        assert!(!report.is_clean());
        let loadable: Vec<&str> = report.load_order().map(ResolutionStatus::name).collect();
        assert_eq!(loadable, vec!["Base", "Add1"]);
        let rejected: Vec<&str> = report.rejected().map(ResolutionStatus::name).collect();
        assert_eq!(rejected, vec!["Broken"]);
    }

    #[test]
    fn display_lists_order_and_problems() {
        let text = sample().to_string();
        assert_eq!(
            text,
            "Load order (2):\n    1. Base 1.0.0\n    2. Add1 1.0.0\n\
             Rejected (1):\n  Broken 1.0.0\n    - missing dependency `Missing`\n"
        );
    }

    #[test]
    fn display_omits_empty_rejected_section() {
        let report = ResolutionReport::new(resolve(&[package("Base", &[])]).unwrap());
        assert!(report.is_clean());
        assert!(!report.to_string().contains("Rejected"));
    }

    #[test]
    fn serializes_statuses_in_order() {
        let json = serde_json::to_value(sample()).unwrap();
        let entries = json.as_array().unwrap();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0]["name"], "Base");
        assert_eq!(entries[0]["version"], "1.0.0");
        assert_eq!(entries[0]["deployment"], "directory");
        assert_eq!(entries[0]["successful"], true);
        assert_eq!(entries[2]["successful"], false);
        assert_eq!(entries[2]["problems"][0]["kind"], "missing-dependency");
        assert_eq!(entries[2]["problems"][0]["name"], "Missing");
    }
}
