use axum::{
    extract::{Path, Query, State},
    response::{Html, IntoResponse},
    routing::get,
    Json, Router,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use crate::dispatcher::Dispatcher;
use crate::models::MatchRequest;
use crate::registry::{LeagueConfig, Sport};

#[derive(Clone)]
pub struct AppState {
    pub dispatcher: Arc<Dispatcher>,
}

#[derive(Debug, Serialize)]
struct LeagueSummary {
    key: &'static str,
    name: &'static str,
    flag: &'static str,
    sport: Sport,
    has_source: bool,
}

#[derive(Debug, Serialize)]
struct LeagueDetail {
    canonical: String,
    registered: bool,
    config: LeagueConfig,
}

#[derive(Debug, Deserialize)]
struct PredictQuery {
    #[serde(default)]
    league: String,
    #[serde(default, alias = "player1")]
    home: String,
    #[serde(default, alias = "player2")]
    away: String,
    venue: Option<String>,
    date: Option<NaiveDate>,
}

#[derive(Debug, Deserialize)]
struct SlateQuery {
    limit: Option<usize>,
}

/// Build the Axum router for the dashboard.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/api/leagues", get(leagues_handler))
        .route("/api/leagues/:id", get(league_handler))
        .route("/api/leagues/:id/matches", get(matches_handler))
        .route("/api/predict", get(predict_handler))
        .route("/api/slate", get(slate_handler))
        .layer(CorsLayer::permissive())
        .with_state(Arc::new(state))
}

async fn index_handler() -> impl IntoResponse {
    Html(DASHBOARD_HTML)
}

/// GET /api/leagues
async fn leagues_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let leagues: Vec<LeagueSummary> = state
        .dispatcher
        .registry()
        .iter()
        .map(|l| LeagueSummary {
            key: l.key,
            name: l.name,
            flag: l.flag,
            sport: l.sport,
            has_source: l.source.is_some(),
        })
        .collect();
    Json(leagues)
}

/// GET /api/leagues/:id — unregistered ids return the generic config
async fn league_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let registry = state.dispatcher.registry();
    Json(LeagueDetail {
        canonical: registry.resolve(&id),
        registered: registry.is_registered(&id),
        config: registry.get_config(&id).clone(),
    })
}

/// GET /api/leagues/:id/matches
async fn matches_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    Json(state.dispatcher.league_matches(&id).await)
}

/// GET /api/predict?league=EPL&home=Arsenal&away=Chelsea[&venue=..&date=YYYY-MM-DD]
async fn predict_handler(
    State(state): State<Arc<AppState>>,
    Query(q): Query<PredictQuery>,
) -> impl IntoResponse {
    let request = MatchRequest {
        venue: q.venue,
        date: q.date,
        ..MatchRequest::new(&q.league, &q.home, &q.away)
    };
    Json(state.dispatcher.predict(&request))
}

/// GET /api/slate?limit=10
async fn slate_handler(
    State(state): State<Arc<AppState>>,
    Query(q): Query<SlateQuery>,
) -> impl IntoResponse {
    Json(state.dispatcher.slate(q.limit.unwrap_or(10)).await)
}

/// Embedded single-file dashboard (HTML + CSS + JS)
const DASHBOARD_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>Sports Oracle</title>
<style>
  :root { --bg: #0f1117; --card: #1a1d27; --border: #2a2d3a; --accent: #6c63ff; --green: #00c896; --text: #e0e0e0; --muted: #8888aa; }
  * { box-sizing: border-box; margin: 0; padding: 0; }
  body { background: var(--bg); color: var(--text); font-family: 'Segoe UI', system-ui, sans-serif; }
  header { display: flex; align-items: center; gap: 1rem; padding: 1rem 2rem; border-bottom: 1px solid var(--border); }
  header h1 { font-size: 1.4rem; font-weight: 700; }
  main { padding: 1.5rem 2rem; display: grid; gap: 1.5rem; }
  .panel { background: var(--card); border: 1px solid var(--border); border-radius: 10px; overflow: hidden; }
  .panel-header { padding: .9rem 1.2rem; border-bottom: 1px solid var(--border); font-weight: 600; display: flex; gap: .6rem; align-items: center; }
  table { width: 100%; border-collapse: collapse; }
  th { padding: .7rem 1rem; text-align: left; font-size: .75rem; text-transform: uppercase; color: var(--muted); border-bottom: 1px solid var(--border); }
  td { padding: .65rem 1rem; font-size: .88rem; border-bottom: 1px solid #1e2130; }
  .pill { display: inline-block; padding: .15rem .55rem; border-radius: 20px; font-size: .75rem; font-weight: 600; }
  .pill.real { background: rgba(0,200,150,.15); color: var(--green); }
  .pill.synthetic { background: rgba(255,152,0,.15); color: #ff9800; }
  select, button { background: var(--bg); color: var(--text); border: 1px solid var(--border); padding: .3rem .6rem; border-radius: 6px; }
  .empty { color: var(--muted); text-align: center; padding: 2rem; font-size: .9rem; }
</style>
</head>
<body>
<header><h1>🔮 Sports Oracle</h1></header>
<main>
  <div class="panel">
    <div class="panel-header">League <select id="league"></select> <button onclick="loadMatches()">↻</button></div>
    <table>
      <thead><tr><th>Home</th><th>Away</th><th>Venue</th><th>Prediction</th><th>Conf.</th><th>Mkt</th><th>Perf</th><th>Players</th><th>Data</th></tr></thead>
      <tbody id="matches"><tr><td colspan="9" class="empty">Loading…</td></tr></tbody>
    </table>
  </div>
  <div class="panel">
    <div class="panel-header">Top picks</div>
    <table>
      <thead><tr><th>League</th><th>Match</th><th>Prediction</th><th>Conf.</th><th>Data</th></tr></thead>
      <tbody id="slate"><tr><td colspan="5" class="empty">Loading…</td></tr></tbody>
    </table>
  </div>
</main>
<script>
const esc = v => String(v ?? '').replace(/[&<>"']/g, c =>
  ({ '&': '&amp;', '<': '&lt;', '>': '&gt;', '"': '&quot;', "'": '&#39;' })[c]);
const pill = r => `<span class="pill ${r.real_data ? 'real' : 'synthetic'}">${r.real_data ? 'real' : 'synthetic'}</span>`;
async function loadLeagues() {
  const leagues = await (await fetch('/api/leagues')).json();
  document.getElementById('league').innerHTML =
    leagues.map(l => `<option value="${esc(l.key)}">${esc(l.flag)} ${esc(l.name)}</option>`).join('');
  document.getElementById('league').onchange = loadMatches;
  loadMatches();
}
async function loadMatches() {
  const key = document.getElementById('league').value;
  const data = await (await fetch(`/api/leagues/${encodeURIComponent(key)}/matches`)).json();
  document.getElementById('matches').innerHTML = data.records.map(r =>
    `<tr><td>${esc(r.home_team)}</td><td>${esc(r.away_team)}</td><td>${esc(r.venue)}</td><td>${esc(r.prediction)}</td>` +
    `<td>${r.confidence}%</td><td>${r.market_efficiency}</td><td>${r.team_performance}</td><td>${r.key_players}</td><td>${pill(r)}</td></tr>`
  ).join('');
}
async function loadSlate() {
  const rows = await (await fetch('/api/slate?limit=10')).json();
  document.getElementById('slate').innerHTML = rows.map(r =>
    `<tr><td>${esc(r.league)}</td><td>${esc(r.home_team)} vs ${esc(r.away_team)}</td><td>${esc(r.prediction)}</td><td>${r.confidence}%</td><td>${pill(r)}</td></tr>`
  ).join('');
}
loadLeagues();
loadSlate();
</script>
</body>
</html>
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::LeagueRegistry;
    use crate::scoring::Analyzer;
    use crate::sources::SourceBindings;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use serde_json::Value;
    use tower::ServiceExt;

    fn app() -> Router {
        let registry = Arc::new(LeagueRegistry::builtin().unwrap());
        let dispatcher = Dispatcher::new(registry, SourceBindings::new(), Analyzer::default());
        router(AppState {
            dispatcher: Arc::new(dispatcher),
        })
    }

    async fn get_json(uri: &str) -> (StatusCode, Value) {
        let resp = app()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = resp.status();
        let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_leagues_listing() {
        let (status, body) = get_json("/api/leagues").await;
        assert_eq!(status, StatusCode::OK);
        let leagues = body.as_array().unwrap();
        assert_eq!(leagues[0]["key"], "PREMIER_LEAGUE");
        assert_eq!(leagues[0]["has_source"], true);
    }

    #[tokio::test]
    async fn test_league_detail_resolves_alias() {
        let (_, body) = get_json("/api/leagues/epl").await;
        assert_eq!(body["canonical"], "PREMIER_LEAGUE");
        assert_eq!(body["registered"], true);
        assert_eq!(body["config"]["sport"], "soccer");
    }

    #[tokio::test]
    async fn test_unregistered_league_is_not_an_error() {
        let (status, body) = get_json("/api/leagues/NONEXISTENT_LEAGUE").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["registered"], false);
        assert_eq!(body["config"]["key"], "");
    }

    #[tokio::test]
    async fn test_matches_endpoint() {
        let (_, body) = get_json("/api/leagues/nba/matches").await;
        assert_eq!(body["league"], "NBA");
        assert_eq!(body["real_data"], false);
        assert!(!body["records"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_predict_endpoint() {
        let (status, body) = get_json("/api/predict?league=LA_LIGA&home=Real%20Madrid&away=Barcelona").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        let score = body["score"].as_f64().unwrap();
        assert!((0.45..=0.85).contains(&score));
        assert_eq!(body["real_data"], false);
    }

    #[tokio::test]
    async fn test_predict_missing_names_still_answers() {
        let (status, body) = get_json("/api/predict?league=EPL").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], false);
        assert_eq!(body["score"], 0.65);
    }

    #[tokio::test]
    async fn test_predict_echoes_venue_and_date() {
        let (status, body) =
            get_json("/api/predict?league=EPL&home=Arsenal&away=Chelsea&venue=Emirates&date=2026-10-17").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["venue"], "Emirates");
        assert_eq!(body["date"], "2026-10-17");

        let (_, bare) = get_json("/api/predict?league=EPL&home=Arsenal&away=Chelsea").await;
        assert!(bare.get("venue").is_none());
        assert!(bare.get("date").is_none());
    }

    #[tokio::test]
    async fn test_page_escapes_source_strings() {
        let resp = app()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        let page = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(page.contains("const esc ="));
        assert!(page.contains("${esc(r.home_team)}"));
        assert!(!page.contains("<td>${r.home_team}</td>"));
    }

    #[tokio::test]
    async fn test_slate_limit() {
        let (_, body) = get_json("/api/slate?limit=3").await;
        assert_eq!(body.as_array().unwrap().len(), 3);
    }
}
