use actix_cors::Cors;
use actix_web::http::header;
use actix_web::web::{self, Data};
use actix_web::{HttpResponse, Responder};
use futures::StreamExt;
use log::warn;
use serde_json::json;

use super::game_cache::GameCache;
use super::stream::{PlayStreamer, sse_frame};

/// Registers the replay endpoints. Expects `Data<GameCache>` and
/// `Data<PlayStreamer>` in app data.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/game-teams/{game_id}", web::get().to(game_teams))
        .route("/stream-plays/{game_id}", web::get().to(stream_plays))
        .route("/health", web::get().to(HttpResponse::Ok));
}

/// Cross-origin policy for browser clients: credentials allowed, any method
/// or header, only from `allowed_origins`.
#[must_use]
pub fn cors(allowed_origins: &[String]) -> Cors {
    allowed_origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        .allow_any_method()
        .allow_any_header()
        .supports_credentials()
}

pub async fn game_teams(path: web::Path<String>, cache: Data<GameCache>) -> impl Responder {
    let teams = cache.teams(&path.into_inner()).await;
    HttpResponse::Ok().json(teams)
}

pub async fn stream_plays(path: web::Path<String>, streamer: Data<PlayStreamer>) -> HttpResponse {
    let game_id = path.into_inner();
    match streamer.stream(&game_id).await {
        Ok(plays) => HttpResponse::Ok()
            .content_type("text/event-stream")
            .insert_header((header::CACHE_CONTROL, "no-cache"))
            .streaming(plays.map(|play| sse_frame(&play))),
        Err(e) => {
            warn!("Rejected stream request for '{game_id}': {e}");
            HttpResponse::BadRequest().json(json!({"error": e.to_string()}))
        }
    }
}
