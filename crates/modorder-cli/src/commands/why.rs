//! Handler for `modorder why`.

use console::style;
use miette::Result;
use modorder_resolver::graph::LoadGraph;
use modorder_util::errors::ModError;

use crate::cli::GlobalArgs;

pub async fn exec(global: &GlobalArgs, name: &str) -> Result<()> {
    let report = super::resolve_packages(global).await?;

    let Some(status) = report.statuses.iter().find(|s| s.name() == name) else {
        return Err(ModError::Generic {
            message: format!("no package named `{name}` was found"),
        }
        .into());
    };

    if !status.is_successful() {
        println!(
            "{} {} is rejected:",
            style(name).bold(),
            status.metadata.version
        );
        for problem in &status.problems {
            println!("  - {problem}");
        }
        return Ok(());
    }

    let graph = LoadGraph::from_statuses(&report.statuses);
    let Some(idx) = graph.find(name) else {
        return Err(ModError::Consistency {
            message: format!("loadable package `{name}` is missing from the load graph"),
        }
        .into());
    };
    let node = graph.node(idx);
    println!(
        "{} {} (load position {})",
        style(&node.name).bold(),
        node.version,
        node.position + 1
    );

    let dependencies = graph.dependencies_of(idx);
    if dependencies.is_empty() {
        println!("Depends on: nothing");
    } else {
        println!("Depends on:");
        for (dep, edge) in dependencies {
            let marker = if edge.optional { " (optional)" } else { "" };
            println!("  {dep}{marker}");
        }
    }

    let dependents = graph.dependents_of(idx);
    if dependents.is_empty() {
        println!("Required by: nothing");
    } else {
        println!("Required by:");
        for (dependent, edge) in dependents {
            let marker = if edge.optional { " (optional)" } else { "" };
            println!("  {dependent}{marker}");
        }
    }
    Ok(())
}
