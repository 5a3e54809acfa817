//! Single binary web server: HTML from templates/, static from /static, API via REST.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default so the app is reachable via DNS on a VPS.
//! Override with env: HOST (e.g. 0.0.0.0), PORT (e.g. 8080), DATA_FILE (session file path).

use actix_files::Files;
use actix_web::{
    delete, get, post, put,
    web::{self, Data, Json, Path, Query},
    App, HttpResponse, HttpServer, Responder,
};
use poker_night_web::{
    csv_filename, render_csv_report, render_html_report, report_filename, settle, Lang, PlayerId,
    RawNumber, Session, SessionError, Storage, DEFAULT_DATA_FILE,
};
use serde::Deserialize;
use std::sync::RwLock;

/// Shared state: the single session, replaced wholesale on each mutation.
type AppState = Data<RwLock<Session>>;

#[derive(serde::Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct BuyInBody {
    buy_in: f64,
}

/// Partial player update; numeric fields accept a JSON number or the raw
/// input string (possibly empty), stored as typed.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct UpdatePlayerBody {
    name: Option<String>,
    entries: Option<RawNumber>,
    final_chips: Option<RawNumber>,
}

/// Path segment: player id (e.g. /api/session/players/{id})
#[derive(Deserialize)]
struct PlayerPath {
    id: PlayerId,
}

/// Path segment: language code (e.g. /api/i18n/{code})
#[derive(Deserialize)]
struct LangPath {
    code: String,
}

#[derive(Deserialize)]
struct ExportQuery {
    lang: Option<String>,
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "poker-night-web",
    })
}

/// Avoid 404 in browser tab: favicon not required for app logic.
#[get("/favicon.ico")]
async fn favicon() -> HttpResponse {
    HttpResponse::NoContent().finish()
}

/// Get the current session.
#[get("/api/session")]
async fn api_get_session(state: AppState) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    HttpResponse::Ok().json(&*g)
}

/// Set the buy-in per entry.
#[put("/api/session/buy-in")]
async fn api_set_buy_in(state: AppState, storage: Data<Storage>, body: Json<BuyInBody>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    g.set_buy_in(body.buy_in);
    storage.save(&g);
    HttpResponse::Ok().json(&*g)
}

/// Add a player (named after its id, one entry, no chips).
#[post("/api/session/players")]
async fn api_add_player(state: AppState, storage: Data<Storage>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    g.add_player();
    storage.save(&g);
    HttpResponse::Ok().json(&*g)
}

/// Remove a player by id. The last remaining player cannot be removed.
#[delete("/api/session/players/{id}")]
async fn api_remove_player(state: AppState, storage: Data<Storage>, path: Path<PlayerPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.remove_player(path.id) {
        Ok(()) => {
            storage.save(&g);
            HttpResponse::Ok().json(&*g)
        }
        Err(e) => HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() })),
    }
}

/// Update a player's name / entries / final chips. Raw input text is stored
/// as typed; coercion happens only when the settlement is computed.
#[put("/api/session/players/{id}")]
async fn api_update_player(
    state: AppState,
    storage: Data<Storage>,
    path: Path<PlayerPath>,
    body: Json<UpdatePlayerBody>,
) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let body = body.into_inner();
    let result: Result<(), SessionError> = (|| {
        if let Some(name) = body.name {
            g.rename_player(path.id, name)?;
        }
        if let Some(entries) = body.entries {
            g.set_entries(path.id, entries)?;
        }
        if let Some(final_chips) = body.final_chips {
            g.set_final_chips(path.id, final_chips)?;
        }
        Ok(())
    })();
    match result {
        Ok(()) => {
            storage.save(&g);
            HttpResponse::Ok().json(&*g)
        }
        Err(e) => HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() })),
    }
}

/// Computed settlement for the current session.
#[get("/api/session/summary")]
async fn api_summary(state: AppState) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    HttpResponse::Ok().json(settle(&g))
}

/// Download the standalone HTML report.
#[get("/api/export/html")]
async fn api_export_html(state: AppState, query: Query<ExportQuery>) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let lang = Lang::from_code(query.lang.as_deref().unwrap_or("en"));
    let today = chrono::Local::now().date_naive();
    let html = render_html_report(&g, lang, today);
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .insert_header((
            "Content-Disposition",
            format!("attachment; filename=\"{}\"", report_filename(today)),
        ))
        .body(html)
}

/// Download the settlement table as CSV.
#[get("/api/export/csv")]
async fn api_export_csv(state: AppState) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let today = chrono::Local::now().date_naive();
    match render_csv_report(&g) {
        Ok(csv) => HttpResponse::Ok()
            .content_type("text/csv; charset=utf-8")
            .insert_header((
                "Content-Disposition",
                format!("attachment; filename=\"{}\"", csv_filename(today)),
            ))
            .body(csv),
        Err(e) => HttpResponse::InternalServerError()
            .json(serde_json::json!({ "error": e.to_string() })),
    }
}

/// Display strings for a language (unknown codes fall back to English).
#[get("/api/i18n/{code}")]
async fn api_i18n(path: Path<LangPath>) -> HttpResponse {
    let lang = Lang::from_code(&path.code);
    HttpResponse::Ok().json(lang.labels())
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
    let data_file =
        std::env::var("DATA_FILE").unwrap_or_else(|_| DEFAULT_DATA_FILE.to_string());
    let bind = (host.as_str(), port);
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);

    let storage = Storage::new(&data_file);
    let session = storage.load().unwrap_or_default();
    log::info!(
        "Session loaded from {} ({} player(s))",
        storage.path().display(),
        session.players.len()
    );

    let state = Data::new(RwLock::new(session));
    let storage = Data::new(storage);

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .app_data(storage.clone())
            .route("/", web::get().to(serve_index_async))
            .service(api_health)
            .service(favicon)
            .service(api_get_session)
            .service(api_set_buy_in)
            .service(api_add_player)
            .service(api_remove_player)
            .service(api_update_player)
            .service(api_summary)
            .service(api_export_html)
            .service(api_export_csv)
            .service(api_i18n)
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
