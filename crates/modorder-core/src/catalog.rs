//! Package discovery.
//!
//! Enumerates the mandatory base package plus every candidate source in the
//! mods directory, producing one [`PackageMetadata`] per readable manifest.
//! The order of the result is enumeration order and carries no load-order
//! meaning.

use std::fs::File;
use std::path::{Path, PathBuf};

use modorder_util::errors::ModError;
use modorder_util::fs::has_zip_extension;

use crate::config::{CatalogConfig, Settings};
use crate::manifest::Manifest;
use crate::package::{DeploymentKind, PackageMetadata};

/// Discovers packages below a game installation and a mods directory.
#[derive(Debug, Clone)]
pub struct PackageFinder {
    game_path: PathBuf,
    mods_path: PathBuf,
    config: CatalogConfig,
}

impl PackageFinder {
    pub fn new(game_path: PathBuf, mods_path: PathBuf, config: CatalogConfig) -> Self {
        Self {
            game_path,
            mods_path,
            config,
        }
    }

    /// Build a finder from loaded settings; both paths must be set.
    pub fn from_settings(settings: &Settings) -> Result<Self, ModError> {
        Ok(Self::new(
            settings.require_game_path()?,
            settings.require_mods_path()?,
            settings.catalog.clone(),
        ))
    }

    /// Read the base package, then every package in the mods directory.
    pub fn find_all(&self) -> Result<Vec<PackageMetadata>, ModError> {
        let base = self.read_base()?;
        let sources = self.mod_sources()?;
        let mut found = Vec::with_capacity(sources.len() + 1);
        found.push(base);
        found.extend(self.discover(&sources)?);
        Ok(found)
    }

    /// Read one package per source that carries a parseable manifest.
    ///
    /// Sources without a manifest are skipped. Sources whose manifest or
    /// archive is unreadable are skipped with a warning, or abort the call
    /// when the catalog is configured as strict.
    pub fn discover(&self, sources: &[PathBuf]) -> Result<Vec<PackageMetadata>, ModError> {
        let mut found = Vec::new();
        for source in sources {
            match self.read_source(source) {
                Ok(Some(package)) => {
                    tracing::debug!(
                        "found {} ({}) at {}",
                        package.versioned_name(),
                        package.deployment,
                        source.display()
                    );
                    found.push(package);
                }
                Ok(None) => {}
                Err(e) if !self.config.strict => {
                    tracing::warn!("skipping {}: {e}", source.display());
                }
                Err(e) => return Err(e),
            }
        }
        Ok(found)
    }

    /// Candidate sources in the mods directory, in path order.
    pub fn mod_sources(&self) -> Result<Vec<PathBuf>, ModError> {
        if !self.mods_path.is_dir() {
            return Err(ModError::Config {
                message: format!(
                    "mods directory {} does not exist",
                    self.mods_path.display()
                ),
            });
        }

        let mut sources = std::fs::read_dir(&self.mods_path)?
            .map(|entry| entry.map(|e| e.path()))
            .collect::<Result<Vec<_>, _>>()?;
        sources.sort();
        Ok(sources)
    }

    fn read_base(&self) -> Result<PackageMetadata, ModError> {
        let base_path = self.game_path.join(&self.config.base_dir);
        if !base_path.is_dir() {
            return Err(ModError::MissingBasePackage {
                message: format!("base data directory {} is missing", base_path.display()),
            });
        }

        self.read_directory(&base_path)
            .map_err(|e| ModError::MissingBasePackage {
                message: format!("{}: {e}", base_path.display()),
            })?
            .ok_or_else(|| ModError::MissingBasePackage {
                message: format!(
                    "{} missing in {}",
                    self.config.manifest_name,
                    base_path.display()
                ),
            })
    }

    /// Read a single source: a package directory or a `.zip` archive.
    pub fn read_source(&self, source: &Path) -> Result<Option<PackageMetadata>, ModError> {
        let package = if source.is_dir() {
            self.read_directory(source)?
        } else if source.is_file() && has_zip_extension(source) {
            self.read_archive(source)?
        } else {
            tracing::info!(
                "skipping {}: neither a directory nor a .zip file",
                source.display()
            );
            return Ok(None);
        };

        if package.is_none() {
            tracing::info!(
                "no {} in {}, skipped",
                self.config.manifest_name,
                source.display()
            );
        }
        Ok(package)
    }

    fn read_directory(&self, dir: &Path) -> Result<Option<PackageMetadata>, ModError> {
        let manifest_path = dir.join(&self.config.manifest_name);
        if !manifest_path.is_file() {
            return Ok(None);
        }
        let manifest = Manifest::from_path(&manifest_path)?;
        Ok(Some(PackageMetadata::from_manifest(
            dir.to_path_buf(),
            DeploymentKind::Directory,
            manifest,
        )))
    }

    fn read_archive(&self, path: &Path) -> Result<Option<PackageMetadata>, ModError> {
        let archive_error = |message: String| ModError::Archive {
            path: path.to_path_buf(),
            message,
        };

        let file = File::open(path).map_err(|e| archive_error(e.to_string()))?;
        let mut archive =
            zip::ZipArchive::new(file).map_err(|e| archive_error(e.to_string()))?;

        // Packaged releases nest their files under `<name>_<version>/`, so the
        // shallowest matching entry is the package's own manifest.
        let manifest_name = self.config.manifest_name.as_str();
        let Some(entry_name) = archive
            .file_names()
            .filter(|name| {
                Path::new(name)
                    .file_name()
                    .is_some_and(|file_name| file_name == manifest_name)
            })
            .min_by_key(|name| name.matches('/').count())
            .map(str::to_string)
        else {
            return Ok(None);
        };

        let entry = archive
            .by_name(&entry_name)
            .map_err(|e| archive_error(format!("{entry_name}: {e}")))?;
        let origin = format!("{}!{entry_name}", path.display());
        let manifest = Manifest::from_reader(&origin, entry)?;

        Ok(Some(PackageMetadata::from_manifest(
            path.to_path_buf(),
            DeploymentKind::Archive,
            manifest,
        )))
    }
}
