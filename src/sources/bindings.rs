use anyhow::Context;
use reqwest::Client;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

use super::espn::EspnScoreboard;
use super::provider::{FnSource, MatchSource, SourceError};
use crate::registry::{LeagueRegistry, SourceBinding};

/// League key → source, resolved once at startup.
#[derive(Clone, Default)]
pub struct SourceBindings {
    sources: HashMap<String, Arc<dyn MatchSource>>,
}

impl SourceBindings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind every league whose config names a source.
    ///
    /// Fails only if a binding cannot be constructed, so a bad table is caught
    /// before the first request.
    pub fn from_registry(
        registry: &LeagueRegistry,
        espn_base_url: &str,
        request_timeout: Duration,
    ) -> Result<Self, SourceError> {
        let http = Client::builder()
            .timeout(request_timeout)
            .user_agent(concat!("sports-oracle/", env!("CARGO_PKG_VERSION")))
            .build()?;

        let mut bindings = SourceBindings::new();
        for league in registry.iter() {
            if let Some(SourceBinding::Espn { sport, league: slug }) = league.source {
                let source = EspnScoreboard::new(http.clone(), espn_base_url, sport, slug)?;
                bindings = bindings.bind(league.key, Arc::new(source));
            }
        }

        info!(
            "Bound {} of {} leagues to external sources",
            bindings.len(),
            registry.len()
        );
        Ok(bindings)
    }

    /// Bind every league listed in a local fixture file.
    ///
    /// The file is a JSON object of league id (key or alias) to an array of
    /// match rows. It is read once here to learn the leagues, then re-read on
    /// every fetch so edits show up without a restart. Entries override any
    /// binding already present for the same league.
    pub fn with_fixture_file(
        mut self,
        registry: &LeagueRegistry,
        path: &Path,
    ) -> Result<Self, SourceError> {
        let leagues = read_fixture_file(path)?;
        let name = format!("fixtures:{}", path.display());

        for id in leagues.keys() {
            let key = registry.resolve(id);
            let (path, id) = (path.to_path_buf(), id.clone());
            let source = FnSource::new(&name, move || {
                let mut leagues = read_fixture_file(&path)?;
                match leagues.remove(&id) {
                    Some(Value::Array(rows)) => Ok(rows),
                    Some(_) => anyhow::bail!("'{}' in {} is not an array", id, path.display()),
                    None => Ok(vec![]),
                }
            });
            self = self.bind(&key, Arc::new(source));
        }

        info!("Bound {} leagues to {}", leagues.len(), name);
        Ok(self)
    }

    /// Bind (or replace) the source for a canonical league key.
    pub fn bind(mut self, key: &str, source: Arc<dyn MatchSource>) -> Self {
        self.sources.insert(key.to_string(), source);
        self
    }

    pub fn get(&self, key: &str) -> Option<Arc<dyn MatchSource>> {
        self.sources.get(key).cloned()
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}

fn read_fixture_file(path: &Path) -> anyhow::Result<Map<String, Value>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading fixture file {}", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("parsing fixture file {}", path.display()))
}
