//! Check command implementation.

use miette::Result;
use modorder_util::errors::ModError;
use modorder_util::progress;

use crate::cli::GlobalArgs;

pub async fn exec(global: &GlobalArgs) -> Result<()> {
    let report = super::resolve_packages(global).await?;

    if report.is_clean() {
        progress::status("Checked", &format!("{} packages, all loadable", report.len()));
        return Ok(());
    }

    for status in report.rejected() {
        eprintln!("{} {}", status.metadata.name, status.metadata.version);
        for problem in &status.problems {
            eprintln!("    - {problem}");
        }
    }
    let rejected = report.rejected().count();
    Err(ModError::Generic {
        message: format!(
            "{rejected} of {} packages cannot be loaded",
            report.len()
        ),
    }
    .into())
}
