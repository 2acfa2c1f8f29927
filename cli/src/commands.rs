pub mod check;
pub mod drill;
pub mod lecturer;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use drillr_common::network::subnet::Subnet;

#[derive(Parser)]
#[command(name = "drillr")]
#[command(about = "An IPv4 subnetting drill trainer.")]
pub struct CommandLine {
    /// Path of the prefix store document
    #[arg(long, global = true, default_value = "drillr.json")]
    pub store: PathBuf,

    /// Graded questions per score report
    #[arg(long, global = true, default_value_t = 10,
          value_parser = clap::value_parser!(u32).range(1..))]
    pub report_every: u32,

    /// Suppress decorative output
    #[arg(long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the interactive subnetting drill
    #[command(alias = "d")]
    Drill,
    /// Derive network, broadcast and mask for one prefix
    #[command(alias = "c")]
    Check { prefix: Subnet },
    /// List every stored prefix (lecturer)
    #[command(alias = "l")]
    List,
    /// Add a prefix to the store (lecturer)
    Add { prefix: String },
    /// Replace the text of a stored prefix (lecturer)
    Update { id: u64, prefix: String },
    /// Remove a prefix from the store (lecturer)
    Delete { id: u64 },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
