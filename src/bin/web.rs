//! Single binary web server: HTML from templates/, static from /static, API via REST.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default. Override with env: HOST, PORT, DATA_FILE.

use actix_files::Files;
use actix_web::{
    get, post, put,
    web::{self, Data, Json, Path},
    App, HttpResponse, HttpServer, Responder,
};
use cup_scoring_web::{
    bracket_dot, get_bracket_view, get_standings, knockout_schedule, league_schedule,
    standings_csv, store, validate_fixture, Cup, EventData, League, MatchScore, ResultStore,
    Round, RoundRobinKey, ScheduleSettings, Score, ServerConfig, TeamCode,
};
use serde::Deserialize;
use std::path::PathBuf;
use std::sync::RwLock;

/// Event data plus where it is persisted.
struct EventEntry {
    event: EventData,
    data_file: PathBuf,
}

/// In-memory state, written through to the data file on every change.
type AppState = Data<RwLock<EventEntry>>;

#[derive(serde::Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Deserialize)]
struct TitleBody {
    title: String,
}

#[derive(Deserialize)]
struct TeamNameBody {
    name: String,
}

#[derive(Deserialize)]
struct RoundRobinBody {
    league: League,
    slot: usize,
    home: TeamCode,
    away: TeamCode,
    /// `null` clears the result.
    score: Option<Score>,
}

#[derive(Deserialize)]
struct KnockoutBody {
    league: League,
    cup: Cup,
    round: Round,
    score: Option<Score>,
    #[serde(default)]
    penalties: Option<Score>,
}

/// Path segment: league (e.g. /api/standings/{league})
#[derive(Deserialize)]
struct LeaguePath {
    league: String,
}

/// Path segments: league and team code (e.g. /api/teams/{league}/{code})
#[derive(Deserialize)]
struct TeamPath {
    league: String,
    code: String,
}

/// Path segments: league and cup (e.g. /api/brackets/{league}/{cup})
#[derive(Deserialize)]
struct CupPath {
    league: String,
    cup: String,
}

fn bad_request(e: impl std::fmt::Display) -> HttpResponse {
    HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() }))
}

fn lock_error() -> HttpResponse {
    HttpResponse::InternalServerError().body("lock error")
}

/// Write the updated event to disk, then swap it in and answer with it.
/// A failed write keeps the previous event in memory.
fn persist_and_respond(entry: &mut EventEntry, updated: EventData) -> HttpResponse {
    match store::commit(&entry.data_file, &mut entry.event, updated) {
        Ok(()) => HttpResponse::Ok().json(&entry.event),
        Err(e) => {
            log::error!("Could not save event data: {}", e);
            HttpResponse::InternalServerError().json(serde_json::json!({ "error": e.to_string() }))
        }
    }
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "cup-scoring-web",
    })
}

/// Avoid 404 in browser tab: favicon not required for app logic.
#[get("/favicon.ico")]
async fn favicon() -> HttpResponse {
    HttpResponse::NoContent().finish()
}

/// Full raw event data (rosters, results, settings).
#[get("/api/event")]
async fn api_get_event(state: AppState) -> HttpResponse {
    match state.read() {
        Ok(g) => HttpResponse::Ok().json(&g.event),
        Err(_) => lock_error(),
    }
}

#[put("/api/event/title")]
async fn api_set_title(state: AppState, body: Json<TitleBody>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    let mut updated = g.event.clone();
    match updated.set_title(&body.title) {
        Ok(()) => persist_and_respond(&mut g, updated),
        Err(e) => bad_request(e),
    }
}

/// Court mode and timings. Results entered under another court mode are kept.
#[put("/api/event/settings")]
async fn api_set_settings(state: AppState, body: Json<ScheduleSettings>) -> HttpResponse {
    let settings = body.into_inner();
    if let Err(e) = settings.validate() {
        return bad_request(e);
    }
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    let mut updated = g.event.clone();
    updated.settings = settings;
    log::info!("Schedule settings changed: {:?}", settings);
    persist_and_respond(&mut g, updated)
}

/// Teams of a league with their display names.
#[get("/api/teams/{league}")]
async fn api_teams(state: AppState, path: Path<LeaguePath>) -> HttpResponse {
    let league: League = match path.league.parse() {
        Ok(l) => l,
        Err(e) => return bad_request(e),
    };
    match state.read() {
        Ok(g) => HttpResponse::Ok().json(g.event.roster(league).teams()),
        Err(_) => lock_error(),
    }
}

/// Rename a team (cosmetic; identity is the code).
#[put("/api/teams/{league}/{code}")]
async fn api_rename_team(state: AppState, path: Path<TeamPath>, body: Json<TeamNameBody>) -> HttpResponse {
    let league: League = match path.league.parse() {
        Ok(l) => l,
        Err(e) => return bad_request(e),
    };
    let code: TeamCode = match path.code.parse() {
        Ok(c) => c,
        Err(e) => return bad_request(e),
    };
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    let mut updated = g.event.clone();
    match updated.rename_team(league, code, &body.name) {
        Ok(()) => persist_and_respond(&mut g, updated),
        Err(e) => bad_request(e),
    }
}

#[get("/api/schedule/league")]
async fn api_league_schedule(state: AppState) -> HttpResponse {
    match state.read() {
        Ok(g) => HttpResponse::Ok().json(league_schedule(&g.event.settings)),
        Err(_) => lock_error(),
    }
}

#[get("/api/schedule/knockout")]
async fn api_knockout_schedule(state: AppState) -> HttpResponse {
    match state.read() {
        Ok(g) => HttpResponse::Ok().json(knockout_schedule(&g.event.settings)),
        Err(_) => lock_error(),
    }
}

#[get("/api/standings/{league}")]
async fn api_standings(state: AppState, path: Path<LeaguePath>) -> HttpResponse {
    let league: League = match path.league.parse() {
        Ok(l) => l,
        Err(e) => return bad_request(e),
    };
    match state.read() {
        Ok(g) => HttpResponse::Ok().json(get_standings(&g.event, league)),
        Err(_) => lock_error(),
    }
}

#[get("/api/standings/{league}/csv")]
async fn api_standings_csv(state: AppState, path: Path<LeaguePath>) -> HttpResponse {
    let league: League = match path.league.parse() {
        Ok(l) => l,
        Err(e) => return bad_request(e),
    };
    let rows = match state.read() {
        Ok(g) => get_standings(&g.event, league),
        Err(_) => return lock_error(),
    };
    match standings_csv(&rows) {
        Ok(body) => HttpResponse::Ok().content_type("text/csv; charset=utf-8").body(body),
        Err(e) => HttpResponse::InternalServerError().body(e.to_string()),
    }
}

/// Enter, edit, or clear a round-robin score. The key must be a scheduled fixture.
#[put("/api/results/round-robin")]
async fn api_set_round_robin(state: AppState, body: Json<RoundRobinBody>) -> HttpResponse {
    let key = match RoundRobinKey::new(body.league, body.slot, body.home, body.away) {
        Ok(k) => k,
        Err(e) => return bad_request(e),
    };
    if let Err(e) = body.score.map(Score::checked).transpose() {
        return bad_request(e);
    }
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    if let Err(e) = validate_fixture(&g.event.settings, &key) {
        return bad_request(e);
    }
    let mut updated = g.event.clone();
    updated.record_round_robin(key, body.score);
    log::info!(
        "{} slot {}: {} vs {} -> {:?}",
        key.league,
        key.slot,
        key.home,
        key.away,
        body.score
    );
    persist_and_respond(&mut g, updated)
}

/// Enter or edit a knockout score (penalties only matter when the score is level).
#[put("/api/results/knockout")]
async fn api_set_knockout(state: AppState, body: Json<KnockoutBody>) -> HttpResponse {
    let result = MatchScore {
        score: body.score,
        penalties: body.penalties,
    };
    if let Err(e) = result.checked() {
        return bad_request(e);
    }
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    let mut updated = g.event.clone();
    updated.record_knockout(body.league, body.cup, body.round, result);
    log::info!(
        "{} {} {}: {}",
        body.league,
        body.cup,
        body.round,
        result.describe().unwrap_or_else(|| "cleared".to_string())
    );
    persist_and_respond(&mut g, updated)
}

#[get("/api/brackets/{league}/{cup}")]
async fn api_bracket(state: AppState, path: Path<CupPath>) -> HttpResponse {
    let (league, cup) = match parse_cup_path(&path) {
        Ok(lc) => lc,
        Err(resp) => return resp,
    };
    match state.read() {
        Ok(g) => HttpResponse::Ok().json(get_bracket_view(&g.event, league, cup)),
        Err(_) => lock_error(),
    }
}

/// Graphviz DOT source of the bracket.
#[get("/api/brackets/{league}/{cup}/dot")]
async fn api_bracket_dot(state: AppState, path: Path<CupPath>) -> HttpResponse {
    let (league, cup) = match parse_cup_path(&path) {
        Ok(lc) => lc,
        Err(resp) => return resp,
    };
    match state.read() {
        Ok(g) => HttpResponse::Ok()
            .content_type("text/vnd.graphviz; charset=utf-8")
            .body(bracket_dot(&get_bracket_view(&g.event, league, cup))),
        Err(_) => lock_error(),
    }
}

fn parse_cup_path(path: &CupPath) -> Result<(League, Cup), HttpResponse> {
    let league = path.league.parse::<League>().map_err(bad_request)?;
    let cup = path.cup.parse::<Cup>().map_err(bad_request)?;
    Ok((league, cup))
}

/// Wipe all results, names and settings, and delete the data file.
#[post("/api/reset")]
async fn api_reset(state: AppState) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    if let Err(e) = store::reset(&g.data_file) {
        log::error!("Could not remove data file: {}", e);
        return HttpResponse::InternalServerError().json(serde_json::json!({ "error": e.to_string() }));
    }
    g.event = EventData::default();
    log::info!("Event reset");
    HttpResponse::Ok().json(&g.event)
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = ServerConfig::from_env();
    let event = store::load(&config.data_file);
    let bind = (config.host.as_str(), config.port);
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);

    let state = Data::new(RwLock::new(EventEntry {
        event,
        data_file: config.data_file.clone(),
    }));

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .route("/", web::get().to(serve_index_async))
            .service(api_health)
            .service(favicon)
            .service(api_get_event)
            .service(api_set_title)
            .service(api_set_settings)
            .service(api_teams)
            .service(api_rename_team)
            .service(api_league_schedule)
            .service(api_knockout_schedule)
            .service(api_standings)
            .service(api_standings_csv)
            .service(api_set_round_robin)
            .service(api_set_knockout)
            .service(api_bracket)
            .service(api_bracket_dot)
            .service(api_reset)
            .service(Files::new("/static", "static"))
    })
    .bind(bind)?
    .run()
    .await
}

async fn serve_index_async() -> HttpResponse {
    let html = include_str!("../../templates/index.html");
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(html)
}
