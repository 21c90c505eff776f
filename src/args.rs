use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

use crate::controller::stream::StreamConfig;

pub mod types;
pub mod validation;

pub use types::{Args, CleanArgs};

/// # Errors
///
/// Will return `Err` if the arguments are invalid
pub fn args_checks() -> Result<CleanArgs, String> {
    let args = Args::parse();
    args.validate()?;
    Ok(CleanArgs::new(args))
}

impl CleanArgs {
    #[must_use]
    pub fn new(args: Args) -> Self {
        // millis wins so sub-second pacing is possible for demos
        let interval = args
            .interval_millis
            .map_or(Duration::from_secs(args.interval_secs), Duration::from_millis);

        CleanArgs {
            data_file: PathBuf::from(args.data_file),
            host: args.host.trim().to_string(),
            port: args.port,
            stream_config: StreamConfig {
                interval,
                cursor_mode: args.cursor_mode,
            },
            allowed_origins: args
                .allowed_origin
                .iter()
                .map(|o| o.trim().trim_end_matches('/').to_string())
                .collect(),
        }
    }

    #[must_use]
    pub fn bind_address(&self) -> (String, u16) {
        (self.host.clone(), self.port)
    }
}
