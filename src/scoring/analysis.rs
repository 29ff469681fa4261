//! Per-league analysis step.
//!
//! Composes the deterministic scorer with a league's configured band, boost,
//! cap and rule table. Every record the dispatcher returns, real or synthetic,
//! passes through [`Analyzer::attach`].

use tracing::debug;

use super::rules::first_match;
use super::scorer::{dimension_percent, fallback_score, NEUTRAL_SCORE};
use crate::models::{PredictionResult, Side, UnifiedGameRecord, SYNTHETIC_SOURCE};
use crate::registry::LeagueConfig;

/// Default score above which a result is flagged as a betting edge.
pub const DEFAULT_EDGE_CUTOFF: f64 = 0.70;

const EDGE_SIGNALS: &[&str] = &[
    "Contrarian value against public consensus",
    "Line movement lagging performance indicators",
    "Market inefficiency detected",
];

const NEUTRAL_SIGNALS: &[&str] = &[
    "Market priced efficiently",
    "No significant line movement",
];

#[derive(Debug, Clone)]
pub struct Analyzer {
    edge_cutoff: f64,
}

impl Default for Analyzer {
    fn default() -> Self {
        Analyzer::new(DEFAULT_EDGE_CUTOFF)
    }
}

impl Analyzer {
    pub fn new(edge_cutoff: f64) -> Self {
        Analyzer { edge_cutoff }
    }

    fn recommended_side(config: &LeagueConfig, score: f64) -> Side {
        if config.draw_eligible && (score - 0.5).abs() < config.draw_threshold {
            Side::Draw
        } else if score >= 0.5 {
            Side::Home
        } else {
            Side::Away
        }
    }

    /// Deterministic prediction for one pair in `config`'s league.
    pub fn predict(&self, config: &LeagueConfig, home: &str, away: &str) -> PredictionResult {
        let league = config.key.to_string();

        if home.trim().is_empty() || away.trim().is_empty() {
            return PredictionResult {
                success: false,
                league,
                home: home.to_string(),
                away: away.to_string(),
                score: NEUTRAL_SCORE,
                betting_edge: false,
                recommended_side: Side::Home,
                confidence: (NEUTRAL_SCORE * 100.0).round() as i32,
                signals: vec!["Insufficient participant data".to_string()],
                data_source: SYNTHETIC_SOURCE.to_string(),
                real_data: false,
                venue: None,
                date: None,
            };
        }

        let score = fallback_score(home, away, config.score_band);
        let rule = first_match(config.rules, home, away);
        let adjustment = rule.map_or(0, |r| r.adjustment);
        let confidence = ((score * 100.0).round() as i32 + config.confidence_boost + adjustment)
            .clamp(0, config.confidence_cap.max(0));
        let betting_edge = score > self.edge_cutoff;

        let mut signals: Vec<String> = if betting_edge {
            EDGE_SIGNALS.iter().map(|s| s.to_string()).collect()
        } else {
            NEUTRAL_SIGNALS.iter().map(|s| s.to_string()).collect()
        };
        if let Some(rule) = rule {
            signals.push(format!("rule: {}", rule.name));
        }

        debug!(
            "{} {} vs {}: score={:.3} confidence={} rule={:?}",
            config.name,
            home,
            away,
            score,
            confidence,
            rule.map(|r| r.name)
        );

        PredictionResult {
            success: true,
            league,
            home: home.to_string(),
            away: away.to_string(),
            score,
            betting_edge,
            recommended_side: Self::recommended_side(config, score),
            confidence,
            signals,
            data_source: SYNTHETIC_SOURCE.to_string(),
            real_data: false,
            venue: None,
            date: None,
        }
    }

    /// Attach dimension scores, plus a prediction and confidence for
    /// whichever of the two the source left out.
    pub fn attach(&self, config: &LeagueConfig, record: &mut UnifiedGameRecord) {
        let (home, away) = (record.home_team.as_str(), record.away_team.as_str());
        record.market_efficiency = dimension_percent(home, away, "market", config.market_efficiency);
        record.team_performance =
            dimension_percent(home, away, "performance", config.team_performance);
        record.key_players = dimension_percent(home, away, "players", config.key_players);

        let needs_prediction = record.prediction.is_empty();
        let needs_confidence = record.confidence <= 0;
        if !needs_prediction && !needs_confidence {
            return;
        }

        let result = self.predict(config, home, away);
        if needs_prediction {
            record.prediction = match result.recommended_side {
                Side::Home => format!("{} Win", record.home_team),
                Side::Away => format!("{} Win", record.away_team),
                Side::Draw => "Draw".to_string(),
            };
        }
        if needs_confidence {
            record.confidence = result.confidence;
        }
    }
}
