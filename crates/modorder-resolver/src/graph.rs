//! Load graph construction and traversal.

use std::collections::HashMap;
use std::fmt;

use modorder_core::package::PackageMetadata;
use modorder_core::version::Version;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::Direction;

use crate::problem::ResolutionStatus;

/// A successfully resolved package in the load graph.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct LoadNode {
    pub name: String,
    pub version: Version,
    /// Position in the load order.
    pub position: usize,
}

impl fmt::Display for LoadNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.version)
    }
}

/// Edge label in the load graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadEdge {
    pub optional: bool,
}

/// Dependency graph of the loadable packages, backed by petgraph.
///
/// Edges point from a dependent to its dependency. Only packages that
/// resolved successfully take part, so the graph is acyclic.
pub struct LoadGraph {
    graph: DiGraph<LoadNode, LoadEdge>,
    index: HashMap<String, NodeIndex>,
}

impl LoadGraph {
    pub fn new() -> Self {
        Self {
            graph: DiGraph::new(),
            index: HashMap::new(),
        }
    }

    /// Build the graph from resolved statuses, ignoring unsuccessful ones.
    pub fn from_statuses(statuses: &[ResolutionStatus]) -> Self {
        let mut graph = Self::new();
        let loadable: Vec<&PackageMetadata> = statuses
            .iter()
            .filter(|s| s.is_successful())
            .map(|s| &s.metadata)
            .collect();

        for (position, package) in loadable.iter().enumerate() {
            graph.add_node(LoadNode {
                name: package.name.clone(),
                version: package.version,
                position,
            });
        }

        for package in &loadable {
            let Some(from) = graph.find(&package.name) else {
                continue;
            };
            for dep in &package.dependencies {
                if let Some(to) = graph.find(&dep.name) {
                    graph.add_edge(
                        from,
                        to,
                        LoadEdge {
                            optional: dep.optional,
                        },
                    );
                }
            }
        }
        graph
    }

    /// Add or retrieve a node. If the name already exists, returns the existing index.
    pub fn add_node(&mut self, node: LoadNode) -> NodeIndex {
        if let Some(&idx) = self.index.get(&node.name) {
            return idx;
        }
        let name = node.name.clone();
        let idx = self.graph.add_node(node);
        self.index.insert(name, idx);
        idx
    }

    /// Add an edge from dependent `from` to dependency `to`.
    pub fn add_edge(&mut self, from: NodeIndex, to: NodeIndex, edge: LoadEdge) {
        if !self.graph.edges(from).any(|e| e.target() == to) {
            self.graph.add_edge(from, to, edge);
        }
    }

    pub fn find(&self, name: &str) -> Option<NodeIndex> {
        self.index.get(name).copied()
    }

    pub fn node(&self, idx: NodeIndex) -> &LoadNode {
        &self.graph[idx]
    }

    /// Direct dependencies of a node, in load order.
    pub fn dependencies_of(&self, idx: NodeIndex) -> Vec<(&LoadNode, &LoadEdge)> {
        self.neighbors(idx, Direction::Outgoing)
    }

    /// Packages that depend directly on a node, in load order.
    pub fn dependents_of(&self, idx: NodeIndex) -> Vec<(&LoadNode, &LoadEdge)> {
        self.neighbors(idx, Direction::Incoming)
    }

    fn neighbors(&self, idx: NodeIndex, direction: Direction) -> Vec<(&LoadNode, &LoadEdge)> {
        let mut found: Vec<(&LoadNode, &LoadEdge)> = self
            .graph
            .edges_directed(idx, direction)
            .map(|e| {
                let other = match direction {
                    Direction::Outgoing => e.target(),
                    Direction::Incoming => e.source(),
                };
                (&self.graph[other], e.weight())
            })
            .collect();
        found.sort_by_key(|(node, _)| node.position);
        found
    }

    pub fn len(&self) -> usize {
        self.graph.node_count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for LoadGraph {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use modorder_core::dependency::Dependency;
    use modorder_core::package::DeploymentKind;

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

    fn names<'a>(entries: &[(&'a LoadNode, &LoadEdge)]) -> Vec<&'a str> {
        entries.iter().map(|(n, _)| n.name.as_str()).collect()
    }

    fn sample() -> LoadGraph {
        let statuses = resolve(&[
            package("base", &[]),
            package("lib", &["base"]),
            package("app", &["lib", "? base", "? absent"]),
            package("broken", &["lib", "ghost"]),
        ])
        .unwrap();
        LoadGraph::from_statuses(&statuses)
    }

    #[test]
    fn add_and_find() {
        let mut g = LoadGraph::new();
        let idx = g.add_node(LoadNode {
            name: "lib".to_string(),
            version: Version::new(1, 2, 0),
            position: 0,
        });
        assert_eq!(g.find("lib"), Some(idx));
        assert_eq!(g.node(idx).to_string(), "lib 1.2.0");
    }

    #[test]
    fn duplicate_add_returns_same_index() {
        let mut g = LoadGraph::new();
        let node = LoadNode {
            name: "lib".to_string(),
            version: Version::new(1, 0, 0),
            position: 0,
        };
        let idx1 = g.add_node(node.clone());
        let idx2 = g.add_node(node);
        assert_eq!(idx1, idx2);
        assert_eq!(g.len(), 1);
    }

    #[test]
    fn only_loadable_packages_are_nodes() {
        let g = sample();
        assert_eq!(g.len(), 3);
        assert!(g.find("broken").is_none());
        assert!(g.find("absent").is_none());
    }

    #[test]
    fn dependencies_and_dependents() {
        let g = sample();
        let app = g.find("app").unwrap();
        let deps = g.dependencies_of(app);
        assert_eq!(names(&deps), vec!["base", "lib"]);
        assert!(deps[0].1.optional);
        assert!(!deps[1].1.optional);

        let base = g.find("base").unwrap();
        assert_eq!(names(&g.dependents_of(base)), vec!["lib", "app"]);
        assert!(g.dependencies_of(base).is_empty());
    }

    #[test]
    fn positions_follow_load_order() {
        let g = sample();
        let positions: Vec<usize> = ["base", "lib", "app"]
            .iter()
            .map(|n| g.node(g.find(n).unwrap()).position)
            .collect();
        assert_eq!(positions, vec![0, 1, 2]);
    }
}
