use clap::Parser;
use std::path::PathBuf;

use crate::controller::stream::{CursorMode, StreamConfig};

pub const DEFAULT_ALLOWED_ORIGINS: [&str; 2] = ["http://localhost:3000", "http://127.0.0.1:3000"];

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Play-by-play csv, loaded once at startup.
    #[arg(
        short = 'f',
        long,
        value_name = "DATA_FILE",
        default_value = "pbp-2024.csv",
        value_parser = crate::args::validation::check_readable_file
    )]
    pub data_file: String,
    #[arg(long, value_name = "HOST", default_value = "0.0.0.0")]
    pub host: String,
    #[arg(short = 'p', long, value_name = "PORT", default_value = "8000")]
    pub port: u16,
    /// Seconds between streamed plays.
    #[arg(
        short = 'i',
        long,
        value_name = "SECONDS",
        default_value = "5",
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub interval_secs: u64,
    /// Milliseconds between streamed plays. Overrides --interval-secs.
    #[arg(
        long,
        value_name = "MILLIS",
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub interval_millis: Option<u64>,
    /// shared: one cursor per game for all viewers. per-connection: every viewer gets the whole game.
    #[arg(long, value_enum, value_name = "CURSOR_MODE", default_value = "per-connection")]
    pub cursor_mode: CursorMode,
    /// Origin allowed to call the api cross-origin. Repeat for more than one.
    #[arg(
        long,
        value_name = "ORIGIN",
        default_values = DEFAULT_ALLOWED_ORIGINS
    )]
    pub allowed_origin: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct CleanArgs {
    pub data_file: PathBuf,
    pub host: String,
    pub port: u16,
    pub stream_config: StreamConfig,
    pub allowed_origins: Vec<String>,
}
