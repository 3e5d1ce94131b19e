//! Single binary web server: REST API for running table tennis tournaments.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default so the app is reachable via DNS on a VPS.
//! Override with env: HOST (e.g. 0.0.0.0), PORT (e.g. 8080).

use actix_files::Files;
use actix_web::{
    delete, get, post, put,
    web::{Data, Json, Path},
    App, HttpResponse, HttpServer, Responder,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::RwLock;
use table_tennis_tournament_web::{
    advance_playoffs, compute_standings, generate_playoffs, group_matches_by_group, next_seed,
    reset_groups, reset_match, reset_playoffs, start_tournament, submit_result, unique_player_ids,
    update_match_state, GameMatch, MatchId, MatchStatus, MatchStore, MemoryMatchStore, Player,
    PlayerId, Round, RoundFilter, ScheduleKind, StandingRow, Tournament, TournamentError,
    TournamentFormat, TournamentId, TournamentStatus, MAX_GROUP_COUNT,
};
use uuid::Uuid;

/// In-memory application state: tournaments, their players, and all matches.
struct AppData {
    tournaments: HashMap<TournamentId, Tournament>,
    players: HashMap<TournamentId, Vec<Player>>,
    store: MemoryMatchStore,
}

impl AppData {
    fn new() -> Self {
        Self {
            tournaments: HashMap::new(),
            players: HashMap::new(),
            store: MemoryMatchStore::new(),
        }
    }
}

type AppState = Data<RwLock<AppData>>;

#[derive(Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Deserialize)]
struct CreateTournamentBody {
    name: String,
    format: TournamentFormat,
    date: NaiveDate,
    location: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    table_count: Option<u32>,
    #[serde(default)]
    group_count: Option<u32>,
    #[serde(default)]
    schedule: Option<ScheduleKind>,
}

#[derive(Deserialize)]
struct UpdateTournamentBody {
    name: Option<String>,
    format: Option<TournamentFormat>,
    date: Option<NaiveDate>,
    location: Option<String>,
    description: Option<String>,
    status: Option<TournamentStatus>,
    table_count: Option<u32>,
    group_count: Option<u32>,
    schedule: Option<ScheduleKind>,
}

#[derive(Deserialize)]
struct AddPlayerBody {
    name: String,
}

#[derive(Deserialize)]
struct SeedBody {
    seed: u32,
}

#[derive(Deserialize)]
struct ResultBody {
    player1_score: u8,
    player2_score: u8,
}

#[derive(Deserialize)]
struct StateBody {
    status: Option<MatchStatus>,
    table_number: Option<u32>,
}

/// Path segment: tournament id (e.g. /api/tournaments/{id})
#[derive(Deserialize)]
struct TournamentPath {
    id: TournamentId,
}

/// Path segments: tournament id and player id
#[derive(Deserialize)]
struct TournamentPlayerPath {
    id: TournamentId,
    player_id: Uuid,
}

/// Path segment: match id (e.g. /api/matches/{id})
#[derive(Deserialize)]
struct MatchPath {
    id: MatchId,
}

/// Match enriched with player names and derived group labelling for display.
/// The round still serializes as the legacy integer.
#[derive(Serialize)]
struct MatchView {
    #[serde(flatten)]
    game: GameMatch,
    player1_name: Option<String>,
    player2_name: Option<String>,
    winner_name: Option<String>,
    group_letter: Option<char>,
    match_in_group: Option<u32>,
}

#[derive(Serialize)]
struct GroupStandings {
    group: u32,
    standings: Vec<StandingRow>,
}

#[derive(Serialize)]
struct StandingsResponse {
    #[serde(rename = "type")]
    format: TournamentFormat,
    #[serde(skip_serializing_if = "Option::is_none")]
    standings: Option<Vec<StandingRow>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    groups: Option<Vec<GroupStandings>>,
}

fn error_response(e: &TournamentError) -> HttpResponse {
    let body = serde_json::json!({ "error": e.to_string() });
    match e {
        TournamentError::TournamentNotFound
        | TournamentError::MatchNotFound(_)
        | TournamentError::PlayerNotFound(_) => HttpResponse::NotFound().json(body),
        _ => HttpResponse::BadRequest().json(body),
    }
}

fn lock_error() -> HttpResponse {
    HttpResponse::InternalServerError().body("lock error")
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "table-tennis-tournament-web",
    })
}

/// Avoid 404 in browser tab: favicon not required for app logic.
#[get("/favicon.ico")]
async fn favicon() -> HttpResponse {
    HttpResponse::NoContent().finish()
}

/// List all tournaments, newest date first.
#[get("/api/tournaments")]
async fn api_list_tournaments(state: AppState) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    let mut tournaments: Vec<&Tournament> = g.tournaments.values().collect();
    tournaments.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| a.name.cmp(&b.name)));
    HttpResponse::Ok().json(&tournaments)
}

/// Create a new tournament.
#[post("/api/tournaments")]
async fn api_create_tournament(state: AppState, body: Json<CreateTournamentBody>) -> HttpResponse {
    if body.name.trim().is_empty() || body.location.trim().is_empty() {
        return HttpResponse::BadRequest()
            .json(serde_json::json!({ "error": "Name and location are required" }));
    }
    if matches!(body.table_count, Some(0)) {
        return error_response(&TournamentError::InvalidTableNumber { available: 1 });
    }
    if body
        .group_count
        .is_some_and(|g| g < 1 || g > MAX_GROUP_COUNT)
    {
        return error_response(&TournamentError::InvalidGroupConfiguration);
    }

    let mut tournament = Tournament::new(
        body.name.trim(),
        body.format,
        body.date,
        body.location.trim(),
    );
    if let Some(description) = &body.description {
        tournament.description = description.clone();
    }
    if let Some(table_count) = body.table_count {
        tournament.table_count = table_count;
    }
    tournament.group_count = body.group_count;
    if let Some(schedule) = body.schedule {
        tournament.schedule = schedule;
    }

    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    let id = tournament.id;
    g.tournaments.insert(id, tournament);
    g.players.insert(id, Vec::new());
    HttpResponse::Created().json(&g.tournaments[&id])
}

/// Get a tournament by id (404 if not found).
#[get("/api/tournaments/{id}")]
async fn api_get_tournament(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    match g.tournaments.get(&path.id) {
        Some(t) => HttpResponse::Ok().json(t),
        None => error_response(&TournamentError::TournamentNotFound),
    }
}

/// Update tournament fields (any subset).
#[put("/api/tournaments/{id}")]
async fn api_update_tournament(
    state: AppState,
    path: Path<TournamentPath>,
    body: Json<UpdateTournamentBody>,
) -> HttpResponse {
    if matches!(body.table_count, Some(0)) {
        return error_response(&TournamentError::InvalidTableNumber { available: 1 });
    }
    if body
        .group_count
        .is_some_and(|g| g < 1 || g > MAX_GROUP_COUNT)
    {
        return error_response(&TournamentError::InvalidGroupConfiguration);
    }
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    let t = match g.tournaments.get_mut(&path.id) {
        Some(t) => t,
        None => return error_response(&TournamentError::TournamentNotFound),
    };
    if let Some(name) = &body.name {
        t.name = name.clone();
    }
    if let Some(format) = body.format {
        t.format = format;
    }
    if let Some(date) = body.date {
        t.date = date;
    }
    if let Some(location) = &body.location {
        t.location = location.clone();
    }
    if let Some(description) = &body.description {
        t.description = description.clone();
    }
    if let Some(status) = body.status {
        t.status = status;
    }
    if let Some(table_count) = body.table_count {
        t.table_count = table_count;
    }
    if let Some(group_count) = body.group_count {
        t.group_count = Some(group_count);
    }
    if let Some(schedule) = body.schedule {
        t.schedule = schedule;
    }
    HttpResponse::Ok().json(t)
}

/// Delete a tournament with its players and matches.
#[delete("/api/tournaments/{id}")]
async fn api_delete_tournament(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    if g.tournaments.remove(&path.id).is_none() {
        return error_response(&TournamentError::TournamentNotFound);
    }
    g.players.remove(&path.id);
    g.store.delete_matches(path.id, RoundFilter::All);
    HttpResponse::Ok().json(serde_json::json!({ "message": "Tournament deleted" }))
}

/// List players of a tournament, name ascending.
#[get("/api/tournaments/{id}/players")]
async fn api_list_players(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    match g.players.get(&path.id) {
        Some(players) => {
            let mut players: Vec<&Player> = players.iter().collect();
            players.sort_by(|a, b| a.name.cmp(&b.name));
            HttpResponse::Ok().json(&players)
        }
        None => error_response(&TournamentError::TournamentNotFound),
    }
}

/// Add a player. The seed defaults to the end of the current order.
#[post("/api/tournaments/{id}/players")]
async fn api_add_player(
    state: AppState,
    path: Path<TournamentPath>,
    body: Json<AddPlayerBody>,
) -> HttpResponse {
    let name = body.name.trim();
    if name.is_empty() {
        return HttpResponse::BadRequest()
            .json(serde_json::json!({ "error": "Player name is required" }));
    }
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    let players = match g.players.get_mut(&path.id) {
        Some(p) => p,
        None => return error_response(&TournamentError::TournamentNotFound),
    };
    let player = Player::new(name, next_seed(players));
    players.push(player.clone());
    HttpResponse::Created().json(&player)
}

/// Remove a player. Already-generated matches are left untouched.
#[delete("/api/tournaments/{id}/players/{player_id}")]
async fn api_delete_player(state: AppState, path: Path<TournamentPlayerPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    let players = match g.players.get_mut(&path.id) {
        Some(p) => p,
        None => return error_response(&TournamentError::TournamentNotFound),
    };
    let before = players.len();
    players.retain(|p| p.id != path.player_id);
    if players.len() == before {
        return error_response(&TournamentError::PlayerNotFound(path.player_id));
    }
    HttpResponse::Ok().json(serde_json::json!({ "message": "Player deleted" }))
}

/// Change a player's seed order (before the tournament starts).
#[put("/api/tournaments/{id}/players/{player_id}/seed")]
async fn api_set_player_seed(
    state: AppState,
    path: Path<TournamentPlayerPath>,
    body: Json<SeedBody>,
) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    let data = &mut *g;
    match data.tournaments.get(&path.id) {
        Some(t) if t.status != TournamentStatus::Upcoming => {
            return error_response(&TournamentError::InvalidState)
        }
        Some(_) => {}
        None => return error_response(&TournamentError::TournamentNotFound),
    }
    let players = match data.players.get_mut(&path.id) {
        Some(p) => p,
        None => return error_response(&TournamentError::TournamentNotFound),
    };
    match players.iter_mut().find(|p| p.id == path.player_id) {
        Some(player) => {
            player.seed = body.seed;
            HttpResponse::Ok().json(&*player)
        }
        None => error_response(&TournamentError::PlayerNotFound(path.player_id)),
    }
}

/// Start the tournament: generate the full match set for its format.
#[post("/api/tournaments/{id}/start")]
async fn api_start_tournament(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    let data = &mut *g;
    let t = match data.tournaments.get_mut(&path.id) {
        Some(t) => t,
        None => return error_response(&TournamentError::TournamentNotFound),
    };
    let players = data.players.get(&path.id).cloned().unwrap_or_default();
    match start_tournament(&mut data.store, t, &players, &mut rand::thread_rng()) {
        Ok(created) => HttpResponse::Ok().json(serde_json::json!({
            "message": "Tournament started",
            "matchesGenerated": created
        })),
        Err(e) => error_response(&e),
    }
}

/// List a tournament's matches with player names and derived group labels.
#[get("/api/tournaments/{id}/matches")]
async fn api_list_matches(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    if !g.tournaments.contains_key(&path.id) {
        return error_response(&TournamentError::TournamentNotFound);
    }
    let players = g.players.get(&path.id).cloned().unwrap_or_default();
    let name_of = |pid: Option<PlayerId>| -> Option<String> {
        pid.and_then(|pid| players.iter().find(|p| p.id == pid).map(|p| p.name.clone()))
    };

    let matches = g.store.list_matches(path.id, RoundFilter::All);
    let mut group_counters: HashMap<u32, u32> = HashMap::new();
    let views: Vec<MatchView> = matches
        .into_iter()
        .map(|game| {
            let (group_letter, match_in_group) = if game.round.is_group_stage() {
                let counter = group_counters
                    .entry(game.round.group_number())
                    .or_insert(0);
                *counter += 1;
                (game.round.group_letter(), Some(*counter))
            } else {
                (None, None)
            };
            MatchView {
                player1_name: name_of(game.player1),
                player2_name: name_of(game.player2),
                winner_name: name_of(game.winner),
                group_letter,
                match_in_group,
                game,
            }
        })
        .collect();
    HttpResponse::Ok().json(&views)
}

/// Submit a best-of-five result for a match. For mixed tournaments this may
/// auto-generate the next playoff round.
#[put("/api/matches/{id}/result")]
async fn api_submit_result(
    state: AppState,
    path: Path<MatchPath>,
    body: Json<ResultBody>,
) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    let data = &mut *g;
    let game = match data.store.get_match(path.id) {
        Some(m) => m,
        None => return error_response(&TournamentError::MatchNotFound(path.id)),
    };
    let tournament = match data.tournaments.get(&game.tournament_id) {
        Some(t) => t.clone(),
        None => return error_response(&TournamentError::TournamentNotFound),
    };
    match submit_result(
        &mut data.store,
        &tournament,
        path.id,
        body.player1_score,
        body.player2_score,
    ) {
        Ok(outcome) => HttpResponse::Ok().json(serde_json::json!({
            "match": outcome.game,
            "autoGeneratedNextRound": outcome.auto_advanced
        })),
        Err(e) => error_response(&e),
    }
}

/// Clear a match result (back to unplayed, table released).
#[post("/api/matches/{id}/reset")]
async fn api_reset_match(state: AppState, path: Path<MatchPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    match reset_match(&mut g.store, path.id) {
        Ok(game) => HttpResponse::Ok().json(&game),
        Err(e) => error_response(&e),
    }
}

/// Update match status and/or table assignment.
#[put("/api/matches/{id}/state")]
async fn api_update_match_state(
    state: AppState,
    path: Path<MatchPath>,
    body: Json<StateBody>,
) -> HttpResponse {
    if body.status.is_none() && body.table_number.is_none() {
        return HttpResponse::BadRequest()
            .json(serde_json::json!({ "error": "Nothing to update" }));
    }
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    let data = &mut *g;
    let game = match data.store.get_match(path.id) {
        Some(m) => m,
        None => return error_response(&TournamentError::MatchNotFound(path.id)),
    };
    let tournament = match data.tournaments.get(&game.tournament_id) {
        Some(t) => t.clone(),
        None => return error_response(&TournamentError::TournamentNotFound),
    };
    match update_match_state(
        &mut data.store,
        &tournament,
        path.id,
        body.status,
        body.table_number,
    ) {
        Ok(game) => HttpResponse::Ok().json(&game),
        Err(e) => error_response(&e),
    }
}

/// Standings: per group for grouped/mixed schedules, single table otherwise.
/// With no finished matches yet, returns initial tables in seed order.
#[get("/api/tournaments/{id}/standings")]
async fn api_standings(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    let tournament = match g.tournaments.get(&path.id) {
        Some(t) => t,
        None => return error_response(&TournamentError::TournamentNotFound),
    };

    // Elimination brackets have no standings table.
    if tournament.format == TournamentFormat::Elimination {
        return HttpResponse::Ok().json(StandingsResponse {
            format: tournament.format,
            standings: Some(Vec::new()),
            groups: None,
        });
    }

    let players = g.players.get(&path.id).cloned().unwrap_or_default();
    let name_of = |pid: PlayerId| players.iter().find(|p| p.id == pid).map(|p| p.name.clone());
    let seed_of = |pid: &PlayerId| {
        players
            .iter()
            .find(|p| p.id == *pid)
            .map(|p| p.seed)
            .unwrap_or(0)
    };

    let group_matches = g.store.list_matches(path.id, RoundFilter::GroupStage);
    let finished: Vec<GameMatch> = group_matches
        .iter()
        .filter(|m| m.status == MatchStatus::Finished)
        .cloned()
        .collect();

    if finished.is_empty() {
        // No results yet: initial tables ordered by seed.
        let has_encoded_groups = group_matches
            .iter()
            .any(|m| matches!(m.round, Round::Group { .. }));
        if tournament.format == TournamentFormat::Mixed || has_encoded_groups {
            let groups: Vec<GroupStandings> = group_matches_by_group(&group_matches)
                .into_iter()
                .map(|(group, matches)| {
                    let mut ids = unique_player_ids(&matches);
                    ids.sort_by_key(seed_of);
                    GroupStandings {
                        group,
                        standings: initial_rows(&ids, &name_of),
                    }
                })
                .collect();
            return HttpResponse::Ok().json(StandingsResponse {
                format: tournament.format,
                standings: None,
                groups: Some(groups),
            });
        }
        let mut ids: Vec<PlayerId> = players.iter().map(|p| p.id).collect();
        ids.sort_by_key(seed_of);
        return HttpResponse::Ok().json(StandingsResponse {
            format: tournament.format,
            standings: Some(initial_rows(&ids, &name_of)),
            groups: None,
        });
    }

    let has_encoded_groups = finished
        .iter()
        .any(|m| matches!(m.round, Round::Group { .. }));
    if tournament.format == TournamentFormat::RoundRobin && !has_encoded_groups {
        let ids: Vec<PlayerId> = players.iter().map(|p| p.id).collect();
        let standings = compute_standings(&ids, &finished, &name_of);
        return HttpResponse::Ok().json(StandingsResponse {
            format: tournament.format,
            standings: Some(standings),
            groups: None,
        });
    }

    let groups: Vec<GroupStandings> = group_matches_by_group(&finished)
        .into_iter()
        .map(|(group, matches)| {
            let ids = unique_player_ids(&matches);
            GroupStandings {
                group,
                standings: compute_standings(&ids, &matches, &name_of),
            }
        })
        .collect();
    HttpResponse::Ok().json(StandingsResponse {
        format: tournament.format,
        standings: None,
        groups: Some(groups),
    })
}

fn initial_rows<F>(ids: &[PlayerId], name_of: F) -> Vec<StandingRow>
where
    F: Fn(PlayerId) -> Option<String>,
{
    ids.iter()
        .enumerate()
        .map(|(idx, &pid)| StandingRow {
            player_id: pid,
            name: name_of(pid).unwrap_or_default(),
            rank: idx as u32 + 1,
            played: 0,
            wins: 0,
            losses: 0,
            sets_won: 0,
            sets_lost: 0,
            sets_diff: 0,
        })
        .collect()
}

/// Seed the playoff bracket of a mixed tournament from group results.
#[post("/api/tournaments/{id}/playoffs")]
async fn api_generate_playoffs(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    let data = &mut *g;
    let tournament = match data.tournaments.get(&path.id) {
        Some(t) => t.clone(),
        None => return error_response(&TournamentError::TournamentNotFound),
    };
    let players = data.players.get(&path.id).cloned().unwrap_or_default();
    match generate_playoffs(&mut data.store, &tournament, &players) {
        Ok(created) => HttpResponse::Ok().json(serde_json::json!({
            "message": "Playoffs generated",
            "matchesCreated": created
        })),
        Err(e) => error_response(&e),
    }
}

/// Explicitly generate the next playoff round.
#[post("/api/tournaments/{id}/playoffs/next-round")]
async fn api_next_playoff_round(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    let data = &mut *g;
    let tournament = match data.tournaments.get(&path.id) {
        Some(t) => t.clone(),
        None => return error_response(&TournamentError::TournamentNotFound),
    };
    match advance_playoffs(&mut data.store, &tournament) {
        Ok((round, created)) => HttpResponse::Ok().json(serde_json::json!({
            "message": "Next playoff round generated",
            "round": round,
            "matchesCreated": created
        })),
        Err(e) => error_response(&e),
    }
}

/// Delete all playoff matches of a tournament.
#[delete("/api/tournaments/{id}/playoffs")]
async fn api_reset_playoffs(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    let data = &mut *g;
    let tournament = match data.tournaments.get(&path.id) {
        Some(t) => t.clone(),
        None => return error_response(&TournamentError::TournamentNotFound),
    };
    let deleted = reset_playoffs(&mut data.store, &tournament);
    HttpResponse::Ok().json(serde_json::json!({
        "message": "Playoffs reset",
        "deletedMatches": deleted
    }))
}

/// Delete all group-stage matches; the tournament goes back to upcoming.
#[delete("/api/tournaments/{id}/groups")]
async fn api_reset_groups(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    let data = &mut *g;
    let t = match data.tournaments.get_mut(&path.id) {
        Some(t) => t,
        None => return error_response(&TournamentError::TournamentNotFound),
    };
    let deleted = reset_groups(&mut data.store, t);
    HttpResponse::Ok().json(serde_json::json!({
        "message": "Groups reset, tournament back to upcoming",
        "deletedMatches": deleted
    }))
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let host = std::env::var("HOST").unwrap_or_else(|_| default_host());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or_else(default_port);
    let bind = (host.as_str(), port);
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);

    let state = Data::new(RwLock::new(AppData::new()));

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .service(api_health)
            .service(favicon)
            .service(api_list_tournaments)
            .service(api_create_tournament)
            .service(api_get_tournament)
            .service(api_update_tournament)
            .service(api_delete_tournament)
            .service(api_list_players)
            .service(api_add_player)
            .service(api_delete_player)
            .service(api_set_player_seed)
            .service(api_start_tournament)
            .service(api_list_matches)
            .service(api_submit_result)
            .service(api_reset_match)
            .service(api_update_match_state)
            .service(api_standings)
            .service(api_generate_playoffs)
            .service(api_next_playoff_round)
            .service(api_reset_playoffs)
            .service(api_reset_groups)
            .service(Files::new("/static", "static").show_files_listing())
    })
    .bind(bind)?
    .run()
    .await
}
