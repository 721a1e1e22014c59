//! tic-tac-types binary.

use anyhow::Result;
use clap::Parser;
use tic_tac_types_cli::{AppConfig, Cli, Command, commands};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::load(cli.config.as_deref())?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    debug!(?config, "Configuration resolved");

    match cli.command {
        Command::Play {
            start,
            format,
            positions,
        } => {
            let config = config.with_overrides(start, format);
            let report = commands::play(*config.starting_player(), &positions)?;
            print!("{}", commands::format_play(&report, *config.format())?);
        }
        Command::Render { marks } => {
            print!("{}", commands::render_marks(&marks)?);
        }
        Command::Tree { start, format } => {
            let config = config.with_overrides(start, format);
            info!(starting_player = %config.starting_player(), "Exploring game tree");
            let stats = commands::tree(*config.starting_player());
            print!("{}", commands::format_tree(&stats, *config.format())?);
        }
    }

    Ok(())
}
