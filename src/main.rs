use actix_web::middleware::Logger;
use actix_web::web::Data;
use actix_web::{App, HttpServer};
use gridiron_replay::args;
use gridiron_replay::controller::http_handlers;
use gridiron_replay::{GameCache, PlayDataset, PlayStreamer};
use log::info;
use std::sync::Arc;

#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = args::args_checks()?;

    let dataset = PlayDataset::from_path(&args.data_file)?;
    info!(
        "Loaded {} plays for {} games from {}",
        dataset.row_count(),
        dataset.game_count(),
        args.data_file.display()
    );

    let cache = Arc::new(GameCache::new(Arc::new(dataset)));
    let streamer = PlayStreamer::new(cache.clone(), args.stream_config);
    let allowed_origins = args.allowed_origins.clone();

    let (host, port) = args.bind_address();
    info!(
        "Listening on {host}:{port}, one play every {:?}, cursor mode {:?}",
        args.stream_config.interval, args.stream_config.cursor_mode
    );

    HttpServer::new(move || {
        App::new()
            .wrap(http_handlers::cors(&allowed_origins))
            .wrap(Logger::default())
            .app_data(Data::from(cache.clone()))
            .app_data(Data::new(streamer.clone()))
            .configure(http_handlers::configure)
    })
    .bind((host, port))?
    .run()
    .await?;
    Ok(())
}
