use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Label used for every record produced without an external source.
pub const SYNTHETIC_SOURCE: &str = "synthetic";

/// A single prediction request for two participants in a league.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchRequest {
    /// League identifier; canonical key or alias, any case
    pub league: String,
    /// Home team, or first player for individual sports
    #[serde(alias = "player1")]
    pub home: String,
    /// Away team, or second player for individual sports
    #[serde(alias = "player2")]
    pub away: String,
    #[serde(default)]
    pub venue: Option<String>,
    #[serde(default)]
    pub date: Option<NaiveDate>,
}

impl MatchRequest {
    pub fn new(league: &str, home: &str, away: &str) -> Self {
        MatchRequest {
            league: league.to_string(),
            home: home.to_string(),
            away: away.to_string(),
            venue: None,
            date: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Home,
    Away,
    Draw,
}

/// Output of a single-match prediction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionResult {
    /// False only when a participant name was missing
    pub success: bool,
    pub league: String,
    pub home: String,
    pub away: String,
    /// Deterministic score inside the league's band (0.0–1.0)
    pub score: f64,
    /// Score cleared the configured edge cutoff
    pub betting_edge: bool,
    pub recommended_side: Side,
    /// Integer percent after boost, rule adjustment and cap
    pub confidence: i32,
    pub signals: Vec<String>,
    pub data_source: String,
    /// Whether anything in this result came from an external source
    pub real_data: bool,
    /// Echoed from the request
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub venue: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
}

/// Common record shape every source output is coerced into.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnifiedGameRecord {
    pub league: String,
    pub home_team: String,
    pub away_team: String,
    pub venue: String,
    pub date: Option<String>,
    /// e.g. "Arsenal Win", "Draw"; empty until analysis runs
    pub prediction: String,
    /// Integer percent (0–100)
    pub confidence: i32,
    pub market_efficiency: u8,
    pub team_performance: u8,
    pub key_players: u8,
    pub source: String,
    pub real_data: bool,
}

/// All records the dispatcher produced for one league.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeagueMatches {
    /// Canonical key, or the normalized input for unregistered leagues
    pub league: String,
    pub records: Vec<UnifiedGameRecord>,
    pub source: String,
    pub real_data: bool,
}
