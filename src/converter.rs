//! Best-effort coercion of heterogeneous source rows into [`UnifiedGameRecord`].
//!
//! Sources disagree on field names (`home_team`, `homeTeam`, `strHomeTeam`,
//! ...) and shapes (plain strings, numbers, `{ "displayName": .. }` objects).
//! Each field is looked up through an ordered list of known keys. Anything
//! not found gets a default, so the output always carries every field.

use serde_json::Value;

use crate::models::UnifiedGameRecord;

pub const DEFAULT_HOME: &str = "Home Team";
pub const DEFAULT_AWAY: &str = "Away Team";
pub const DEFAULT_VENUE: &str = "TBD";

const HOME_KEYS: &[&str] = &["home_team", "homeTeam", "strHomeTeam", "home", "team1", "player1"];
const AWAY_KEYS: &[&str] = &["away_team", "awayTeam", "strAwayTeam", "away", "team2", "player2"];
const VENUE_KEYS: &[&str] = &["venue", "strVenue", "stadium", "location"];
const DATE_KEYS: &[&str] = &["date", "dateEvent", "start_time", "startTime", "kickoff"];
const PREDICTION_KEYS: &[&str] = &["prediction", "pick", "recommended_side", "recommendation"];
const CONFIDENCE_KEYS: &[&str] = &["confidence", "confidence_score", "win_probability"];
const MARKET_KEYS: &[&str] = &["market_efficiency", "marketEfficiency", "market_score"];
const PERFORMANCE_KEYS: &[&str] = &["team_performance", "teamPerformance", "performance_score"];
const PLAYERS_KEYS: &[&str] = &["key_players", "keyPlayers", "players_score"];

/// Nested objects commonly carry the display string under one of these.
const NAME_KEYS: &[&str] = &["displayName", "name", "fullName", "shortDisplayName"];

fn as_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Object(_) => NAME_KEYS.iter().find_map(|k| as_text(&value[*k])),
        _ => None,
    }
}

fn as_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().trim_end_matches('%').trim().parse().ok(),
        _ => None,
    }
}

fn extract_text(raw: &Value, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|k| raw.get(*k).and_then(as_text))
}

fn extract_number(raw: &Value, keys: &[&str]) -> Option<f64> {
    keys.iter().find_map(|k| raw.get(*k).and_then(as_number))
}

/// Values strictly between 0 and 1 are fractions; everything else, including
/// a bare `1`, is already a percent.
fn to_percent(value: f64) -> f64 {
    if value > 0.0 && value < 1.0 {
        value * 100.0
    } else {
        value
    }
}

fn extract_percent(raw: &Value, keys: &[&str]) -> u8 {
    extract_number(raw, keys)
        .map(|v| to_percent(v).round().clamp(0.0, 100.0) as u8)
        .unwrap_or(0)
}

/// Coerce one raw row. Never fails; missing fields become defaults.
///
/// `real_data` only sticks when both participant names were found in the
/// row. A row that needed a default name is reported as synthetic.
pub fn to_unified(raw: &Value, league: &str, source: &str, real_data: bool) -> UnifiedGameRecord {
    let home = extract_text(raw, HOME_KEYS);
    let away = extract_text(raw, AWAY_KEYS);
    let has_participants = home.is_some() && away.is_some();

    UnifiedGameRecord {
        league: league.to_string(),
        home_team: home.unwrap_or_else(|| DEFAULT_HOME.to_string()),
        away_team: away.unwrap_or_else(|| DEFAULT_AWAY.to_string()),
        venue: extract_text(raw, VENUE_KEYS).unwrap_or_else(|| DEFAULT_VENUE.to_string()),
        date: extract_text(raw, DATE_KEYS),
        prediction: extract_text(raw, PREDICTION_KEYS).unwrap_or_default(),
        confidence: extract_number(raw, CONFIDENCE_KEYS)
            .map(|v| to_percent(v).round().clamp(0.0, 100.0) as i32)
            .unwrap_or(0),
        market_efficiency: extract_percent(raw, MARKET_KEYS),
        team_performance: extract_percent(raw, PERFORMANCE_KEYS),
        key_players: extract_percent(raw, PLAYERS_KEYS),
        source: source.to_string(),
        real_data: real_data && has_participants,
    }
}

/// Coerce a whole batch, preserving order.
pub fn to_unified_batch(
    rows: &[Value],
    league: &str,
    source: &str,
    real_data: bool,
) -> Vec<UnifiedGameRecord> {
    rows.iter()
        .map(|raw| to_unified(raw, league, source, real_data))
        .collect()
}

/// Synthetic row for a fallback name pair.
pub fn synthetic_row(home: &str, away: &str) -> Value {
    serde_json::json!({ "home_team": home, "away_team": away })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_snake_case_row() {
        let raw = json!({
            "home_team": "Arsenal",
            "away_team": "Chelsea",
            "venue": "Emirates Stadium",
            "date": "2026-10-17",
            "confidence": 0.72,
        });
        let rec = to_unified(&raw, "PREMIER_LEAGUE", "test", true);
        assert_eq!(rec.home_team, "Arsenal");
        assert_eq!(rec.away_team, "Chelsea");
        assert_eq!(rec.venue, "Emirates Stadium");
        assert_eq!(rec.date.as_deref(), Some("2026-10-17"));
        assert_eq!(rec.confidence, 72);
        assert!(rec.real_data);
    }

    #[test]
    fn test_thesportsdb_style_row() {
        let raw = json!({
            "strHomeTeam": "Celtic",
            "strAwayTeam": "Rangers",
            "strVenue": "Celtic Park",
            "dateEvent": "2026-10-18",
        });
        let rec = to_unified(&raw, "SCOTTISH_PREMIERSHIP", "thesportsdb", true);
        assert_eq!(rec.home_team, "Celtic");
        assert_eq!(rec.away_team, "Rangers");
        assert_eq!(rec.venue, "Celtic Park");
    }

    #[test]
    fn test_nested_name_objects() {
        let raw = json!({
            "homeTeam": { "displayName": "Boston Celtics", "id": "2" },
            "awayTeam": { "name": "Los Angeles Lakers" },
            "venue": { "fullName": "TD Garden" },
        });
        let rec = to_unified(&raw, "NBA", "espn", true);
        assert_eq!(rec.home_team, "Boston Celtics");
        assert_eq!(rec.away_team, "Los Angeles Lakers");
        assert_eq!(rec.venue, "TD Garden");
    }

    #[test]
    fn test_missing_fields_get_defaults() {
        let rec = to_unified(&json!({}), "NBA", "espn", false);
        assert_eq!(rec.home_team, DEFAULT_HOME);
        assert_eq!(rec.away_team, DEFAULT_AWAY);
        assert_eq!(rec.venue, DEFAULT_VENUE);
        assert!(rec.date.is_none());
        assert!(rec.prediction.is_empty());
        assert_eq!(rec.confidence, 0);
        assert_eq!(rec.market_efficiency, 0);
    }

    #[test]
    fn test_non_object_input() {
        let rec = to_unified(&json!("garbage"), "NBA", "espn", true);
        assert_eq!(rec.home_team, DEFAULT_HOME);
        assert!(!rec.real_data);
        let rec = to_unified(&Value::Null, "NBA", "espn", true);
        assert_eq!(rec.away_team, DEFAULT_AWAY);
        assert!(!rec.real_data);
    }

    #[test]
    fn test_one_missing_name_is_not_real() {
        let rec = to_unified(&json!({ "home_team": "Ajax" }), "EREDIVISIE", "espn", true);
        assert_eq!(rec.home_team, "Ajax");
        assert_eq!(rec.away_team, DEFAULT_AWAY);
        assert!(!rec.real_data);
    }

    #[test]
    fn test_fraction_boundaries() {
        let rec = to_unified(&json!({ "home_team": "A", "away_team": "B", "confidence": 1 }), "X", "t", true);
        assert_eq!(rec.confidence, 1);
        let rec = to_unified(&json!({ "home_team": "A", "away_team": "B", "confidence": 0.99 }), "X", "t", true);
        assert_eq!(rec.confidence, 99);
    }

    #[test]
    fn test_blank_string_falls_through_to_next_key() {
        let raw = json!({ "home_team": "  ", "home": "Ajax", "away_team": "PSV" });
        let rec = to_unified(&raw, "EREDIVISIE", "test", true);
        assert_eq!(rec.home_team, "Ajax");
    }

    #[test]
    fn test_percent_strings_and_clamping() {
        let raw = json!({
            "home_team": "A",
            "away_team": "B",
            "confidence": "64%",
            "market_efficiency": 140,
            "team_performance": "0.8",
            "key_players": -3,
        });
        let rec = to_unified(&raw, "X", "test", true);
        assert_eq!(rec.confidence, 64);
        assert_eq!(rec.market_efficiency, 100);
        assert_eq!(rec.team_performance, 80);
        assert_eq!(rec.key_players, 0);
    }

    #[test]
    fn test_batch_preserves_order() {
        let rows = vec![synthetic_row("A", "B"), synthetic_row("C", "D")];
        let recs = to_unified_batch(&rows, "X", "synthetic", false);
        assert_eq!(recs.len(), 2);
        assert_eq!(recs[0].home_team, "A");
        assert_eq!(recs[1].away_team, "D");
    }
}
