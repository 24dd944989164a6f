//! Resolution entry point: validation, load-order sort, status assembly.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use modorder_core::package::PackageMetadata;
use modorder_util::errors::ModError;

use crate::index::PackageIndex;
use crate::problem::ResolutionStatus;
use crate::topo;
use crate::validator::DependencyValidator;

/// Resolve a catalog into one status per distinct package name.
///
/// Successful packages come first, in load order (every dependency before its
/// dependents). Unsuccessful packages follow in the order their names first
/// appear in `packages`.
///
/// The only error is an internal consistency failure; per-package problems
/// are reported through the returned statuses.
pub fn resolve(packages: &[PackageMetadata]) -> Result<Vec<ResolutionStatus>, ModError> {
    let index = PackageIndex::build(packages);
    let mut statuses = DependencyValidator::new(&index).validate();

    let edges = load_edges(&index, &statuses);
    let order = topo::sort(&edges)?;

    let mut resolved = Vec::with_capacity(index.len());
    for name in &order {
        let status = statuses.remove(name).ok_or_else(|| ModError::Consistency {
            message: format!("load order names unknown package `{name}`"),
        })?;
        resolved.push(status);
    }

    for name in index.names() {
        if let Some(status) = statuses.remove(name) {
            if status.is_successful() {
                return Err(ModError::Consistency {
                    message: format!("successful package `{name}` missing from load order"),
                });
            }
            resolved.push(status);
        }
    }

    tracing::debug!(
        "resolved {} packages: {} loadable, {} rejected",
        resolved.len(),
        order.len(),
        resolved.len() - order.len()
    );
    Ok(resolved)
}

/// Edges from each successful package to the successful packages that
/// depend on it. Every successful package gets an entry, so packages without
/// edges still appear in the load order.
fn load_edges(
    index: &PackageIndex,
    statuses: &HashMap<String, ResolutionStatus>,
) -> BTreeMap<String, BTreeSet<String>> {
    let successful = |name: &str| statuses.get(name).is_some_and(ResolutionStatus::is_successful);

    let mut edges: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
    for package in index.iter().filter(|p| successful(&p.name)) {
        edges.entry(package.name.clone()).or_default();
        for dep in &package.dependencies {
            if successful(&dep.name) {
                edges
                    .entry(dep.name.clone())
                    .or_default()
                    .insert(package.name.clone());
            }
        }
    }
    edges
}
