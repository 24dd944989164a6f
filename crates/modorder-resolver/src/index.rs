//! Name-keyed view of a package list.

use std::collections::HashMap;

use modorder_core::package::PackageMetadata;

/// Packages keyed by name, remembering the order names were first seen.
///
/// Later records with an already-seen name replace the earlier metadata but
/// keep the earlier position.
#[derive(Debug, Clone, Default)]
pub struct PackageIndex {
    by_name: HashMap<String, PackageMetadata>,
    order: Vec<String>,
}

impl PackageIndex {
    pub fn build<'a, I>(packages: I) -> Self
    where
        I: IntoIterator<Item = &'a PackageMetadata>,
    {
        let mut index = Self::default();
        for package in packages {
            index.insert(package.clone());
        }
        index
    }

    pub fn insert(&mut self, package: PackageMetadata) {
        let name = package.name.clone();
        match self.by_name.insert(name.clone(), package) {
            Some(replaced) => tracing::warn!(
                "duplicate package name `{name}`: {} replaced by a later record",
                replaced.source.display()
            ),
            None => self.order.push(name),
        }
    }

    pub fn get(&self, name: &str) -> Option<&PackageMetadata> {
        self.by_name.get(name)
    }

    /// Package names in first-seen order.
    pub fn names(&self) -> &[String] {
        &self.order
    }

    /// Packages in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = &PackageMetadata> {
        self.order.iter().filter_map(|name| self.by_name.get(name))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
