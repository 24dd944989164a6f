//! Command dispatch and handler modules.

mod check;
mod list;
mod resolve;
mod why;

use miette::Result;
use modorder_core::catalog::PackageFinder;
use modorder_core::config::Settings;
use modorder_core::package::PackageMetadata;
use modorder_resolver::report::ResolutionReport;
use modorder_resolver::resolver;
use modorder_util::errors::ModError;
use modorder_util::progress;

use crate::cli::{Cli, Command, GlobalArgs};

/// Route a parsed CLI invocation to the appropriate command handler.
pub async fn dispatch(cli: Cli) -> Result<()> {
    let global = cli.global;
    match cli.command {
        Command::List => list::exec(&global),
        Command::Resolve { json } => resolve::exec(&global, json).await,
        Command::Check => check::exec(&global).await,
        Command::Why { name } => why::exec(&global, &name).await,
    }
}

/// Load settings and apply command-line overrides.
///
/// An explicit `--config` file wins over discovery from the working
/// directory; path flags and `--strict` override whatever the file says.
fn load_settings(global: &GlobalArgs) -> Result<Settings> {
    let mut settings = match &global.config {
        Some(path) => Settings::from_path(path)?,
        None => {
            let cwd = std::env::current_dir().map_err(ModError::Io)?;
            Settings::discover(&cwd)?
        }
    };

    if let Some(game) = &global.game_path {
        settings.game_path = Some(game.clone());
    }
    if let Some(mods) = &global.mods_path {
        settings.mods_path = Some(mods.clone());
    }
    if global.strict {
        settings.catalog.strict = true;
    }
    Ok(settings)
}

/// Discover every package the settings point at.
fn discover_packages(global: &GlobalArgs) -> Result<Vec<PackageMetadata>> {
    let settings = load_settings(global)?;
    let finder = PackageFinder::from_settings(&settings)?;
    let packages = finder.find_all()?;
    tracing::debug!("discovered {} packages", packages.len());
    Ok(packages)
}

/// Discover and resolve on a blocking worker thread.
async fn resolve_packages(global: &GlobalArgs) -> Result<ResolutionReport> {
    let packages = discover_packages(global)?;

    let pb = progress::spinner(&format!("Resolving {} packages", packages.len()));
    let outcome = tokio::task::spawn_blocking(move || resolver::resolve(&packages)).await;
    pb.finish_and_clear();

    let statuses = outcome.map_err(|e| ModError::Generic {
        message: format!("resolver task failed: {e}"),
    })??;
    Ok(ResolutionReport::new(statuses))
}
