//! Dependency validation with cycle detection.
//!
//! Every package is walked depth-first along its dependency edges. A package
//! has three implicit states during the walk: unvisited, on the current walk
//! path, and complete (its status is memoized). Reaching a package that is
//! already on the walk path closes a cycle.

use std::collections::HashMap;

use crate::index::PackageIndex;
use crate::problem::{DependencyProblem, ResolutionStatus};

/// Mutable state of one validation run.
#[derive(Debug, Default)]
struct ValidationState {
    walk_path: Vec<String>,
    complete: HashMap<String, ResolutionStatus>,
    cycles_by_node: HashMap<String, Vec<String>>,
}

impl ValidationState {
    /// If `name` is on the active walk path, record the closed cycle for
    /// every package on it and return `true`.
    fn detect_cycle(&mut self, name: &str) -> bool {
        let Some(start) = self.walk_path.iter().position(|n| n == name) else {
            return false;
        };

        let mut cycle = self.walk_path[start..].to_vec();
        cycle.push(name.to_string());
        tracing::debug!("dependency cycle detected: {}", cycle.join(" -> "));

        for member in &cycle[..cycle.len() - 1] {
            self.cycles_by_node
                .entry(member.clone())
                .or_insert_with(|| cycle.clone());
        }
        true
    }
}

/// Checks every package's dependencies against the rest of the catalog.
pub struct DependencyValidator<'a> {
    index: &'a PackageIndex,
}

impl<'a> DependencyValidator<'a> {
    pub fn new(index: &'a PackageIndex) -> Self {
        Self { index }
    }

    /// Produce a status for every package in the index.
    pub fn validate(&self) -> HashMap<String, ResolutionStatus> {
        let mut state = ValidationState::default();
        for name in self.index.names() {
            self.visit(name, &mut state);
        }
        debug_assert!(state.walk_path.is_empty());
        debug_assert_eq!(state.complete.len(), self.index.len());
        state.complete
    }

    /// Validate `name`, returning whether it resolved successfully.
    ///
    /// `None` means the package cannot serve as a dependency right now: it
    /// is absent from the index or is already on the walk path.
    fn visit(&self, name: &str, state: &mut ValidationState) -> Option<bool> {
        if let Some(status) = state.complete.get(name) {
            return Some(status.is_successful());
        }

        let package = self.index.get(name)?;
        if state.detect_cycle(name) {
            return None;
        }

        state.walk_path.push(name.to_string());
        let mut problems = Vec::new();
        for dep in &package.dependencies {
            let resolved = self.visit(&dep.name, state);
            match (resolved, self.index.get(&dep.name)) {
                (Some(true), Some(target)) => {
                    if let Some(required) = dep.requirement {
                        if !required.matches(&target.version) {
                            problems.push(DependencyProblem::VersionMismatch {
                                name: dep.name.clone(),
                                required,
                                actual: target.version,
                            });
                        }
                    }
                }
                _ if dep.optional => {}
                _ => problems.push(DependencyProblem::MissingDependency {
                    name: dep.name.clone(),
                }),
            }
        }
        state.walk_path.pop();

        if let Some(cycle) = state.cycles_by_node.get(name) {
            problems.push(DependencyProblem::CyclicDependency {
                path: cycle.clone(),
            });
        }

        let status = ResolutionStatus::new(package.clone(), problems);
        let successful = status.is_successful();
        state.complete.insert(name.to_string(), status);
        Some(successful)
    }
}
