use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};
use tracing::debug;
use url::Url;

use super::provider::{MatchSource, SourceError};

pub const DEFAULT_ESPN_BASE_URL: &str = "https://site.api.espn.com/apis/site/v2/sports";

/// Match source backed by ESPN's public site-API scoreboard.
/// No API key required.
pub struct EspnScoreboard {
    http: Client,
    name: String,
    url: Url,
}

impl EspnScoreboard {
    /// `client` is shared across all ESPN-backed leagues.
    pub fn new(
        client: Client,
        base_url: &str,
        sport: &str,
        league: &str,
    ) -> Result<Self, SourceError> {
        let raw = format!(
            "{}/{}/{}/scoreboard",
            base_url.trim_end_matches('/'),
            sport,
            league
        );
        let url = Url::parse(&raw).map_err(|e| SourceError::Parse(format!("{}: {}", raw, e)))?;
        Ok(EspnScoreboard {
            http: client,
            name: format!("espn:{}/{}", sport, league),
            url,
        })
    }

    #[cfg(test)]
    pub fn url(&self) -> &Url {
        &self.url
    }
}

#[async_trait]
impl MatchSource for EspnScoreboard {
    fn name(&self) -> &str {
        &self.name
    }

    async fn fetch_matches(&self) -> Result<Vec<Value>, SourceError> {
        debug!("Fetching scoreboard from {}", self.url);

        let resp = self.http.get(self.url.clone()).send().await?;
        if !resp.status().is_success() {
            return Err(SourceError::Status(resp.status()));
        }

        let raw: Value = resp
            .json()
            .await
            .map_err(|e| SourceError::Parse(e.to_string()))?;

        parse_scoreboard(&raw)
    }
}

fn competitor_name(c: &Value) -> Option<String> {
    ["team", "athlete"].iter().find_map(|k| {
        c[*k]["displayName"]
            .as_str()
            .or_else(|| c[*k]["name"].as_str())
            .map(str::to_string)
    })
}

fn flatten_competition(event: &Value, comp: &Value) -> Option<Value> {
    let competitors = comp["competitors"].as_array()?;
    if competitors.len() < 2 {
        return None;
    }

    let side = |wanted: &str| {
        competitors
            .iter()
            .find(|c| c["homeAway"].as_str() == Some(wanted))
            .and_then(competitor_name)
    };
    // Individual sports carry no home/away marker; keep listing order.
    let home = side("home").or_else(|| competitor_name(&competitors[0]))?;
    let away = side("away").or_else(|| competitor_name(&competitors[1]))?;

    let event_id = comp["id"].as_str().or_else(|| event["id"].as_str());
    let date = comp["date"].as_str().or_else(|| event["date"].as_str());
    let venue = comp["venue"]["fullName"].as_str();
    let status = event["status"]["type"]["description"].as_str();

    Some(json!({
        "event_id": event_id,
        "home_team": home,
        "away_team": away,
        "venue": venue,
        "date": date,
        "status": status,
    }))
}

/// Flatten an ESPN scoreboard into one row per competition.
pub fn parse_scoreboard(raw: &Value) -> Result<Vec<Value>, SourceError> {
    let events = match raw.get("events") {
        Some(Value::Array(events)) => events,
        Some(_) => return Err(SourceError::Parse("'events' is not an array".to_string())),
        None => return Ok(vec![]),
    };

    let mut rows = Vec::new();
    for event in events {
        let direct = event["competitions"].as_array().into_iter().flatten();
        // Tennis scoreboards nest competitions under tournament groupings.
        let grouped = event["groupings"]
            .as_array()
            .into_iter()
            .flatten()
            .flat_map(|g| g["competitions"].as_array().into_iter().flatten());

        rows.extend(
            direct
                .chain(grouped)
                .filter_map(|comp| flatten_competition(event, comp)),
        );
    }
    Ok(rows)
}
