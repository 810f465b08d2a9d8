//! Entry point: parse CLI, set up logging, and dispatch to command handlers.

use clap::Parser;
use espn_league_history::{
    cli::{Commands, ESPN},
    commands::{
        draft_picks::handle_draft_picks, league_history::handle_league_history,
        player_stats::handle_player_stats,
    },
    config::PipelineConfig,
    Result, LEAGUE_ID_ENV_VAR,
};
use tracing_subscriber::EnvFilter;

fn init_tracing(verbose: bool) {
    let default = if verbose { "info" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

async fn run(command: Commands) -> Result<()> {
    match command {
        Commands::LeagueHistory { common } => {
            init_tracing(common.verbose);
            let config = PipelineConfig::from_args(common, None)?;
            handle_league_history(&config).await
        }

        Commands::PlayerStats { common, draft_dir } => {
            init_tracing(common.verbose);
            let config = PipelineConfig::from_args(common, draft_dir)?;
            handle_player_stats(&config).await
        }

        Commands::DraftPicks { common, draft_dir } => {
            init_tracing(common.verbose);
            let config = PipelineConfig::from_args(common, draft_dir)?;
            handle_draft_picks(&config).await
        }
    }
}

/// Run the CLI.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let app = ESPN::parse();

    if let Err(e) = run(app.command).await {
        if e.is_configuration() {
            eprintln!("⚠ No seasons were processed.");
            eprintln!("Pass --league-id or set {}.", LEAGUE_ID_ENV_VAR);
        }
        return Err(e.into());
    }

    Ok(())
}
