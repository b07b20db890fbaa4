use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::commands::gav_command;

#[derive(Parser, Debug)]
#[command(name = "gav-reader")]
#[command(version, about, long_about = None)]
#[command(subcommand_required = true, arg_required_else_help = true)]
#[command(after_help = "ENVIRONMENT:\n    RUST_LOG=debug    Enable debug logging (written to stderr)")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the module's GAV, parent GAV and descriptor path as one JSON line
    Gav {
        /// Module coordinate as <group>:<artifact>:<version>
        #[arg(long = "gav", value_name = "G:A:V")]
        gav: Option<String>,

        /// Parent coordinate as <group>:<artifact>:<version>; omit for root modules
        #[arg(long = "parent-gav", value_name = "G:A:V")]
        parent_gav: Option<String>,

        /// Path to the module's descriptor file (e.g., pom.xml)
        #[arg(long = "pom-path", value_name = "PATH")]
        pom_path: Option<String>,

        /// Directory that relative descriptor paths are resolved against (defaults to current directory)
        #[arg(long = "cwd", value_name = "DIR")]
        cwd: Option<String>,
    },
}

impl Commands {
    /// Execute the command
    pub fn execute(self) -> Result<()> {
        match self {
            Commands::Gav {
                gav,
                parent_gav,
                pom_path,
                cwd,
            } => gav_command(
                gav.as_deref(),
                parent_gav.as_deref(),
                pom_path.as_deref(),
                cwd.as_deref(),
            ),
        }
    }
}
