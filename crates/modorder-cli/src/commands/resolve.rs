//! Handler for `modorder resolve`.

use miette::{IntoDiagnostic, Result};
use modorder_util::progress;

use crate::cli::GlobalArgs;

pub async fn exec(global: &GlobalArgs, json: bool) -> Result<()> {
    let report = super::resolve_packages(global).await?;

    if json {
        let out = serde_json::to_string_pretty(&report).into_diagnostic()?;
        println!("{out}");
        return Ok(());
    }

    print!("{report}");
    let loadable = report.load_order().count();
    let rejected = report.len() - loadable;
    if rejected == 0 {
        progress::status("Resolved", &format!("{loadable} packages"));
    } else {
        progress::status_warn(
            "Resolved",
            &format!("{loadable} packages, {rejected} rejected"),
        );
    }
    Ok(())
}
