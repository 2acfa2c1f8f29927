mod commands;
mod terminal;

use commands::{CommandLine, Commands, check, drill, lecturer};
use drillr_common::config::Config;
use terminal::logging;

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init();

    let cfg = Config {
        report_every: commands.report_every,
        store_path: commands.store,
        quiet: commands.quiet,
    };

    match commands.command {
        Commands::Drill => drill::drill(&cfg),
        Commands::Check { prefix } => check::check(&cfg, &prefix),
        Commands::List => lecturer::list(&cfg),
        Commands::Add { prefix } => lecturer::add(&cfg, &prefix),
        Commands::Update { id, prefix } => lecturer::update(&cfg, id, &prefix),
        Commands::Delete { id } => lecturer::delete(&cfg, id),
    }
}
