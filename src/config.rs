use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::sources::DEFAULT_ESPN_BASE_URL;

/// League registry and fetch-with-fallback match predictions
#[derive(Parser, Debug, Clone)]
#[command(name = "sports-oracle", version, about)]
pub struct Config {
    /// Per-source fetch timeout in seconds
    #[arg(long, env = "FETCH_TIMEOUT_SECS", default_value = "10")]
    pub fetch_timeout_secs: u64,

    /// Number of synthetic fixtures used when a league has no real data
    #[arg(long, env = "FALLBACK_MATCHES", default_value = "3")]
    pub fallback_matches: usize,

    /// Score above which a prediction is flagged as a betting edge (0.0–1.0)
    #[arg(long, env = "EDGE_CUTOFF", default_value = "0.70")]
    pub edge_cutoff: f64,

    /// ESPN site API base URL
    #[arg(long, env = "ESPN_BASE_URL", default_value = DEFAULT_ESPN_BASE_URL)]
    pub espn_base_url: String,

    /// Do not bind any external source; every league uses synthetic fixtures
    #[arg(long, env = "OFFLINE", default_value = "false")]
    pub offline: bool,

    /// JSON file of league id to match rows, served as a local source
    #[arg(long, env = "FIXTURES_FILE")]
    pub fixtures_file: Option<PathBuf>,

    /// Dashboard listen address
    #[arg(long, env = "DASHBOARD_ADDR", default_value = "0.0.0.0:8080")]
    pub dashboard_addr: String,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Serve the JSON dashboard (default)
    Serve,
    /// List registered leagues
    Leagues,
    /// Predict a single match
    Predict {
        #[arg(long)]
        league: String,
        /// Home team or first player
        #[arg(long, alias = "player1")]
        home: String,
        /// Away team or second player
        #[arg(long, alias = "player2")]
        away: String,
        #[arg(long)]
        venue: Option<String>,
        /// Match date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Fetch matches for one league
    Matches {
        #[arg(long)]
        league: String,
    },
    /// Top picks across every registered league
    Slate {
        #[arg(long, default_value = "10")]
        limit: usize,
    },
}

impl Config {
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.fetch_timeout_secs == 0 {
            anyhow::bail!("fetch_timeout_secs must be at least 1");
        }
        if self.fallback_matches == 0 {
            anyhow::bail!("fallback_matches must be at least 1");
        }
        if !(0.0..=1.0).contains(&self.edge_cutoff) {
            anyhow::bail!("edge_cutoff must be between 0.0 and 1.0");
        }
        if !self.offline && url::Url::parse(&self.espn_base_url).is_err() {
            anyhow::bail!("espn_base_url is not a valid URL: {}", self.espn_base_url);
        }
        Ok(())
    }
}
