//! Static league configuration with case-insensitive alias resolution.
//!
//! The registry is built once at startup from the tables in [`leagues`] and
//! never mutated afterwards, so it is shared as a plain `Arc<LeagueRegistry>`.
//! Unknown identifiers are not an error: [`LeagueRegistry::get_config`] hands
//! back the [`GENERIC`] config so callers always have ranges to work with.

pub mod leagues;

use serde::Serialize;
use std::collections::HashMap;
use thiserror::Error;

use crate::scoring::rules::Rule;
use crate::scoring::scorer::{PercentRange, ScoreBand, DEFAULT_BAND};

pub use leagues::{ALIASES, LEAGUES};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Sport {
    Soccer,
    Basketball,
    AmericanFootball,
    Baseball,
    IceHockey,
    Tennis,
    Cricket,
    Rugby,
    Mma,
    Other,
}

/// Which external source a league is fetched from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SourceBinding {
    /// ESPN site API scoreboard, e.g. `soccer` / `eng.1`
    Espn {
        sport: &'static str,
        league: &'static str,
    },
}

#[derive(Debug, Clone, Serialize)]
pub struct LeagueConfig {
    /// Canonical key (uppercase, underscores); empty for the generic config
    pub key: &'static str,
    pub name: &'static str,
    pub flag: &'static str,
    pub sport: Sport,
    pub market_efficiency: PercentRange,
    pub team_performance: PercentRange,
    pub key_players: PercentRange,
    /// Percentage points added to every confidence
    pub confidence_boost: i32,
    /// Upper bound on confidence after boost and rule adjustment
    pub confidence_cap: i32,
    pub draw_eligible: bool,
    /// Scores within this distance of 0.5 are called a draw
    pub draw_threshold: f64,
    pub score_band: ScoreBand,
    pub source: Option<SourceBinding>,
    /// Name pairs used when no external data is available
    pub teams: &'static [(&'static str, &'static str)],
    pub rules: &'static [Rule],
}

impl LeagueConfig {
    pub fn is_empty(&self) -> bool {
        self.key.is_empty()
    }
}

/// Defaults for any league the registry doesn't know.
pub static GENERIC: LeagueConfig = LeagueConfig {
    key: "",
    name: "Generic League",
    flag: "🏟️",
    sport: Sport::Other,
    market_efficiency: PercentRange::new(55, 80),
    team_performance: PercentRange::new(55, 80),
    key_players: PercentRange::new(55, 80),
    confidence_boost: 0,
    confidence_cap: 85,
    draw_eligible: false,
    draw_threshold: 0.0,
    score_band: DEFAULT_BAND,
    source: None,
    teams: &[],
    rules: &[],
};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("duplicate league key '{0}'")]
    DuplicateKey(String),
    #[error("league key '{0}' is not in canonical form")]
    NonCanonicalKey(String),
    #[error("alias '{alias}' points at unknown league '{target}'")]
    DanglingAlias { alias: String, target: String },
    #[error("alias '{0}' shadows a canonical league key")]
    AliasShadowsKey(String),
}

/// Normalize a user-supplied identifier: trim, uppercase, `-`/space → `_`.
pub fn normalize(id: &str) -> String {
    id.trim()
        .chars()
        .map(|c| match c {
            '-' | ' ' => '_',
            c => c.to_ascii_uppercase(),
        })
        .collect()
}

pub struct LeagueRegistry {
    /// Insertion order is the listing order
    leagues: Vec<LeagueConfig>,
    index: HashMap<&'static str, usize>,
    /// normalized alias → canonical key
    aliases: HashMap<String, &'static str>,
}

impl LeagueRegistry {
    pub fn new(
        leagues: &[LeagueConfig],
        aliases: &[(&'static str, &'static str)],
    ) -> Result<Self, RegistryError> {
        let mut index = HashMap::with_capacity(leagues.len());
        for (i, league) in leagues.iter().enumerate() {
            if league.key.is_empty() || normalize(league.key) != league.key {
                return Err(RegistryError::NonCanonicalKey(league.key.to_string()));
            }
            if index.insert(league.key, i).is_some() {
                return Err(RegistryError::DuplicateKey(league.key.to_string()));
            }
        }

        let mut alias_map = HashMap::with_capacity(aliases.len());
        for (alias, target) in aliases {
            let alias = normalize(alias);
            if index.contains_key(alias.as_str()) {
                return Err(RegistryError::AliasShadowsKey(alias));
            }
            let Some(&i) = index.get(target) else {
                return Err(RegistryError::DanglingAlias {
                    alias,
                    target: target.to_string(),
                });
            };
            alias_map.insert(alias, leagues[i].key);
        }

        Ok(LeagueRegistry {
            leagues: leagues.to_vec(),
            index,
            aliases: alias_map,
        })
    }

    /// Registry over the built-in league and alias tables.
    pub fn builtin() -> Result<Self, RegistryError> {
        Self::new(LEAGUES, ALIASES)
    }

    /// Canonical key for `id`, or its normalized form if nothing matches.
    pub fn resolve(&self, id: &str) -> String {
        let normalized = normalize(id);
        match self.aliases.get(&normalized) {
            Some(canonical) => canonical.to_string(),
            None => normalized,
        }
    }

    pub fn get(&self, id: &str) -> Option<&LeagueConfig> {
        let key = self.resolve(id);
        self.index.get(key.as_str()).map(|&i| &self.leagues[i])
    }

    /// Config for `id`, falling back to [`GENERIC`] for unregistered leagues.
    pub fn get_config(&self, id: &str) -> &LeagueConfig {
        self.get(id).unwrap_or(&GENERIC)
    }

    pub fn is_registered(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn list_all(&self) -> Vec<&'static str> {
        self.leagues.iter().map(|l| l.key).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &LeagueConfig> {
        self.leagues.iter()
    }

    pub fn len(&self) -> usize {
        self.leagues.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> LeagueRegistry {
        LeagueRegistry::builtin().expect("built-in tables are valid")
    }

    #[test]
    fn test_alias_resolves_to_canonical() {
        let reg = registry();
        assert_eq!(reg.resolve("EPL"), "PREMIER_LEAGUE");
        assert_eq!(reg.resolve("PREMIER_LEAGUE"), "PREMIER_LEAGUE");
        assert_eq!(reg.get_config("epl").key, "PREMIER_LEAGUE");
    }

    #[test]
    fn test_case_and_separator_insensitive() {
        let reg = registry();
        assert_eq!(reg.resolve("liga-mx"), "LIGA_MX");
        assert_eq!(reg.resolve(" premier league "), "PREMIER_LEAGUE");
        assert!(reg.is_registered("uefa"));
    }

    #[test]
    fn test_resolve_is_idempotent() {
        let reg = registry();
        let mut ids: Vec<String> = ALIASES.iter().map(|(a, _)| a.to_string()).collect();
        ids.extend(reg.list_all().iter().map(|k| k.to_string()));
        ids.push("nonexistent league".to_string());
        for id in ids {
            let once = reg.resolve(&id);
            assert_eq!(reg.resolve(&once), once, "resolve not idempotent for {}", id);
        }
    }

    #[test]
    fn test_unregistered_returns_generic() {
        let reg = registry();
        let cfg = reg.get_config("NONEXISTENT_LEAGUE");
        assert!(cfg.is_empty());
        assert!(cfg.teams.is_empty());
        assert!(!reg.is_registered("NONEXISTENT_LEAGUE"));
        assert!(reg.get("NONEXISTENT_LEAGUE").is_none());
    }

    #[test]
    fn test_list_all_keeps_insertion_order() {
        let reg = registry();
        let keys = reg.list_all();
        assert_eq!(keys.len(), LEAGUES.len());
        for (key, league) in keys.iter().zip(LEAGUES.iter()) {
            assert_eq!(*key, league.key);
        }
    }

    #[test]
    fn test_builtin_configs_are_sane() {
        for league in registry().iter() {
            assert!(league.score_band.low < league.score_band.high, "{}", league.key);
            for range in [league.market_efficiency, league.team_performance, league.key_players] {
                assert!(range.low <= range.high && range.high <= 100, "{}", league.key);
            }
            assert!(league.confidence_cap <= 100, "{}", league.key);
            assert!(!league.teams.is_empty(), "{} has no fallback teams", league.key);
        }
    }

    #[test]
    fn test_rejects_duplicate_key() {
        let dup = [LEAGUES[0].clone(), LEAGUES[0].clone()];
        let err = LeagueRegistry::new(&dup, &[]).err();
        assert_eq!(err, Some(RegistryError::DuplicateKey(LEAGUES[0].key.to_string())));
    }

    #[test]
    fn test_rejects_dangling_alias() {
        let err = LeagueRegistry::new(&LEAGUES[..1], &[("XYZ", "MISSING")]).err();
        assert!(matches!(err, Some(RegistryError::DanglingAlias { .. })));
    }

    #[test]
    fn test_rejects_alias_shadowing_key() {
        let key = LEAGUES[0].key;
        let err = LeagueRegistry::new(&LEAGUES[..1], &[(key, key)]).err();
        assert_eq!(err, Some(RegistryError::AliasShadowsKey(key.to_string())));
    }

    #[test]
    fn test_rejects_non_canonical_key() {
        let mut bad = LEAGUES[0].clone();
        bad.key = "premier league";
        let err = LeagueRegistry::new(&[bad], &[]).err();
        assert!(matches!(err, Some(RegistryError::NonCanonicalKey(_))));
    }
}
