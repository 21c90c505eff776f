pub mod args;
pub mod dataset;
pub mod error;
pub mod model;
pub mod controller {
    pub mod cursor;
    pub mod game_cache;
    pub mod http_handlers;
    pub mod stream;
}

pub use controller::game_cache::{GameCache, PreparedGame};
pub use controller::stream::{CursorMode, PlayStreamer, StreamConfig};
pub use dataset::{PlayDataset, PlaySource};
pub use error::AppError;
pub use model::{NormalizedPlay, RawPlayRow, TeamAssignment};
