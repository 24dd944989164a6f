//! CLI argument definitions for modorder.
//!
//! Uses `clap` derive macros to define the full command surface. Each command
//! corresponds to a handler in the [`super::commands`] module.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "modorder",
    version,
    about = "Resolve mod dependencies and compute a deterministic load order",
    long_about = "modorder discovers the base game package and every mod in a mods directory, \
                  validates their declared dependencies and prints the order in which the \
                  loadable mods must be initialized."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[command(flatten)]
    pub global: GlobalArgs,
}

/// Options shared by every command.
#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Settings file to use instead of the discovered modorder.toml
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Game installation directory (contains data/base)
    #[arg(long, global = true, env = "MODORDER_GAME_PATH", value_name = "PATH")]
    pub game_path: Option<PathBuf>,

    /// Directory holding installed mods
    #[arg(long, global = true, env = "MODORDER_MODS_PATH", value_name = "PATH")]
    pub mods_path: Option<PathBuf>,

    /// Abort on unreadable manifests or archives instead of skipping them
    #[arg(long, global = true)]
    pub strict: bool,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List every discovered package
    List,

    /// Resolve dependencies and print the load order
    Resolve {
        /// Print the resolution statuses as JSON
        #[arg(long)]
        json: bool,
    },

    /// Resolve and fail if any package cannot be loaded
    Check,

    /// Show the direct dependencies and dependents of a package
    Why {
        /// Package name
        name: String,
    },
}

/// Parse command-line arguments into a [`Cli`] struct.
pub fn parse() -> Cli {
    Cli::parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_follow_subcommand() {
        let cli = Cli::try_parse_from([
            "modorder",
            "resolve",
            "--json",
            "--game-path",
            "/games/base",
            "--strict",
        ])
        .unwrap();
        assert!(matches!(cli.command, Command::Resolve { json: true }));
        assert_eq!(cli.global.game_path, Some(PathBuf::from("/games/base")));
        assert!(cli.global.strict);
    }

    #[test]
    fn why_requires_name() {
        assert!(Cli::try_parse_from(["modorder", "why"]).is_err());
    }
}
