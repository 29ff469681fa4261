//! Fetch-with-fallback dispatcher.
//!
//! For each league the bound source (if any) is raced against a timeout. Real
//! rows win when the source answers in time with at least one match.
//! Otherwise the league's static fixture table stands in:
//!
//! ```text
//!   source? ──none───────────────────────────┐
//!      │                                     ▼
//!      └─ timeout(fetch) ─ Err / timeout / [] ─▶ synthetic pairs ─┐
//!                │                                                ├─▶ Analyzer::attach ─▶ records
//!                └─ Ok(rows) ─▶ converter ────────────────────────┘
//! ```
//!
//! Nothing on this path returns an error to the caller; failures are logged
//! and degrade to synthetic output tagged `real_data = false`.

use futures_util::future::join_all;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::converter::{self, DEFAULT_AWAY, DEFAULT_HOME};
use crate::models::{
    LeagueMatches, MatchRequest, PredictionResult, UnifiedGameRecord, SYNTHETIC_SOURCE,
};
use crate::registry::{LeagueConfig, LeagueRegistry};
use crate::scoring::Analyzer;
use crate::sources::{MatchSource, SourceBindings, SourceError};

pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(10);
pub const DEFAULT_FALLBACK_MATCHES: usize = 3;

pub struct Dispatcher {
    registry: Arc<LeagueRegistry>,
    sources: SourceBindings,
    analyzer: Analyzer,
    fetch_timeout: Duration,
    fallback_matches: usize,
}

impl Dispatcher {
    pub fn new(registry: Arc<LeagueRegistry>, sources: SourceBindings, analyzer: Analyzer) -> Self {
        Dispatcher {
            registry,
            sources,
            analyzer,
            fetch_timeout: DEFAULT_FETCH_TIMEOUT,
            fallback_matches: DEFAULT_FALLBACK_MATCHES,
        }
    }

    pub fn with_fetch_timeout(mut self, timeout: Duration) -> Self {
        self.fetch_timeout = timeout;
        self
    }

    pub fn with_fallback_matches(mut self, count: usize) -> Self {
        self.fallback_matches = count.max(1);
        self
    }

    pub fn registry(&self) -> &LeagueRegistry {
        &self.registry
    }

    /// Single-match prediction. Unregistered leagues use generic defaults.
    pub fn predict(&self, request: &MatchRequest) -> PredictionResult {
        let config = self.registry.get_config(&request.league);
        let mut result = self.analyzer.predict(config, &request.home, &request.away);
        if config.is_empty() {
            result.league = self.registry.resolve(&request.league);
        }
        result.venue = request.venue.clone();
        result.date = request.date;
        result
    }

    async fn fetch_with_timeout(&self, source: &dyn MatchSource) -> Result<Vec<Value>, SourceError> {
        match tokio::time::timeout(self.fetch_timeout, source.fetch_matches()).await {
            Ok(result) => result,
            Err(_) => Err(SourceError::Timeout(self.fetch_timeout)),
        }
    }

    /// Matches for one league: real rows if the bound source delivers,
    /// synthetic fixtures otherwise. Never empty.
    pub async fn league_matches(&self, id: &str) -> LeagueMatches {
        let key = self.registry.resolve(id);
        let config = self.registry.get_config(&key);

        if let Some(source) = self.sources.get(&key) {
            match self.fetch_with_timeout(source.as_ref()).await {
                Ok(rows) => {
                    // Rows without both participant names are dropped.
                    let records: Vec<UnifiedGameRecord> =
                        converter::to_unified_batch(&rows, &key, source.name(), true)
                            .into_iter()
                            .filter(|r| r.real_data)
                            .collect();
                    if !records.is_empty() {
                        debug!(
                            "{}: {} of {} rows usable from {}",
                            key,
                            records.len(),
                            rows.len(),
                            source.name()
                        );
                        return LeagueMatches {
                            league: key,
                            records: self.analyze(config, records),
                            source: source.name().to_string(),
                            real_data: true,
                        };
                    }
                    warn!(
                        "{}: '{}' returned no usable matches ({} rows), using synthetic fixtures",
                        key,
                        source.name(),
                        rows.len()
                    );
                }
                Err(e) => warn!(
                    "{}: '{}' failed ({}), using synthetic fixtures",
                    key,
                    source.name(),
                    e
                ),
            }
        }

        self.synthetic(config, key)
    }

    fn synthetic(&self, config: &LeagueConfig, key: String) -> LeagueMatches {
        let rows: Vec<Value> = if config.teams.is_empty() {
            vec![converter::synthetic_row(DEFAULT_HOME, DEFAULT_AWAY)]
        } else {
            config
                .teams
                .iter()
                .take(self.fallback_matches)
                .map(|(home, away)| converter::synthetic_row(home, away))
                .collect()
        };

        let records = self.analyze(
            config,
            converter::to_unified_batch(&rows, &key, SYNTHETIC_SOURCE, false),
        );
        LeagueMatches {
            league: key,
            records,
            source: SYNTHETIC_SOURCE.to_string(),
            real_data: false,
        }
    }

    fn analyze(
        &self,
        config: &LeagueConfig,
        mut records: Vec<UnifiedGameRecord>,
    ) -> Vec<UnifiedGameRecord> {
        for record in &mut records {
            self.analyzer.attach(config, record);
        }
        records
    }

    /// Fetch many leagues concurrently. Output order follows `ids`.
    pub async fn league_batch<S: AsRef<str>>(&self, ids: &[S]) -> Vec<LeagueMatches> {
        let results = join_all(ids.iter().map(|id| self.league_matches(id.as_ref()))).await;

        let real = results.iter().filter(|r| r.real_data).count();
        info!(
            "Batch complete: {} leagues ({} real, {} synthetic)",
            results.len(),
            real,
            results.len() - real
        );
        results
    }

    /// Highest-confidence records across every registered league.
    pub async fn slate(&self, limit: usize) -> Vec<UnifiedGameRecord> {
        let keys = self.registry.list_all();
        let mut records: Vec<UnifiedGameRecord> = self
            .league_batch(&keys)
            .await
            .into_iter()
            .flat_map(|league| league.records)
            .collect();

        records.sort_by(|a, b| b.confidence.cmp(&a.confidence));
        records.truncate(limit);
        records
    }
}
