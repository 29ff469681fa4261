use anyhow::Result;
use clap::Parser;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

mod config;
mod converter;
mod dashboard;
mod dispatcher;
mod models;
mod registry;
mod scoring;
mod sources;

use config::{Command, Config};
use dashboard::AppState;
use dispatcher::Dispatcher;
use models::MatchRequest;
use registry::LeagueRegistry;
use scoring::Analyzer;
use sources::SourceBindings;

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialise tracing / logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::parse();
    config.validate()?;

    let registry = Arc::new(LeagueRegistry::builtin()?);
    info!("Loaded {} leagues", registry.len());

    let fetch_timeout = Duration::from_secs(config.fetch_timeout_secs);
    let mut sources = if config.offline {
        info!("🟡 OFFLINE mode – no network sources bound");
        SourceBindings::new()
    } else {
        SourceBindings::from_registry(&registry, &config.espn_base_url, fetch_timeout)?
    };
    if let Some(path) = &config.fixtures_file {
        sources = sources.with_fixture_file(&registry, path)?;
    }
    if sources.is_empty() {
        info!("No sources bound – every league uses synthetic fixtures");
    }

    let dispatcher = Arc::new(
        Dispatcher::new(registry, sources, Analyzer::new(config.edge_cutoff))
            .with_fetch_timeout(fetch_timeout)
            .with_fallback_matches(config.fallback_matches),
    );

    match config.command.clone().unwrap_or(Command::Serve) {
        Command::Leagues => {
            for league in dispatcher.registry().iter() {
                println!("{:<22} {} {}", league.key, league.flag, league.name);
            }
        }
        Command::Predict {
            league,
            home,
            away,
            venue,
            date,
        } => {
            let request = MatchRequest {
                venue,
                date,
                ..MatchRequest::new(&league, &home, &away)
            };
            print_json(&dispatcher.predict(&request))?;
        }
        Command::Matches { league } => {
            print_json(&dispatcher.league_matches(&league).await)?;
        }
        Command::Slate { limit } => {
            print_json(&dispatcher.slate(limit).await)?;
        }
        Command::Serve => {
            let app = dashboard::router(AppState { dispatcher });
            let addr: SocketAddr = config.dashboard_addr.parse()?;
            info!("Dashboard listening on http://{}", addr);
            let listener = tokio::net::TcpListener::bind(addr).await?;
            axum::serve(listener, app).await?;
        }
    }

    Ok(())
}
