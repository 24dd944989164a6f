//! Handler for `modorder list`.

use miette::Result;
use modorder_util::progress;

use crate::cli::GlobalArgs;

pub fn exec(global: &GlobalArgs) -> Result<()> {
    let packages = super::discover_packages(global)?;

    progress::status_info("Found", &format!("{} packages", packages.len()));
    for package in &packages {
        println!(
            "{:<32} {:<10} {:<9} {}",
            package.name,
            package.version.to_string(),
            package.deployment.to_string(),
            package.source.display()
        );
    }
    Ok(())
}
