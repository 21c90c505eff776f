use crate::controller::cursor::CursorRegistry;
use crate::controller::game_cache::{GameCache, PreparedGame};
use crate::error::AppError;
use crate::model::NormalizedPlay;
use actix_web::web::Bytes;
use futures::stream::{self, BoxStream, StreamExt};
use log::debug;
use std::sync::Arc;
use std::time::Duration;

pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(5);

/// Who owns the "next play" index for a stream.
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorMode {
    /// One cursor per game, advanced by every connection watching it. A late
    /// viewer picks up wherever the game currently is.
    Shared,
    /// Every connection replays the game from the first play.
    #[default]
    PerConnection,
}

#[derive(Debug, Clone, Copy)]
pub struct StreamConfig {
    pub interval: Duration,
    pub cursor_mode: CursorMode,
}

impl Default for StreamConfig {
    fn default() -> Self {
        Self {
            interval: DEFAULT_INTERVAL,
            cursor_mode: CursorMode::default(),
        }
    }
}

enum Cursor {
    Shared(Arc<CursorRegistry>),
    Local(usize),
}

struct StreamState {
    game: Arc<PreparedGame>,
    cursor: Cursor,
    interval: Duration,
    emitted: usize,
    pace: bool,
}

impl StreamState {
    async fn next_index(&mut self) -> Option<usize> {
        let len = self.game.len();
        match &mut self.cursor {
            Cursor::Shared(registry) => registry.claim_next(self.game.game_id, len).await,
            Cursor::Local(next) => {
                if *next >= len {
                    return None;
                }
                let claimed = *next;
                *next += 1;
                Some(claimed)
            }
        }
    }
}

/// Replays prepared games one play per interval.
#[derive(Clone)]
pub struct PlayStreamer {
    cache: Arc<GameCache>,
    config: StreamConfig,
}

impl PlayStreamer {
    #[must_use]
    pub fn new(cache: Arc<GameCache>, config: StreamConfig) -> Self {
        Self { cache, config }
    }

    #[must_use]
    pub fn cache(&self) -> &Arc<GameCache> {
        &self.cache
    }

    #[must_use]
    pub fn config(&self) -> StreamConfig {
        self.config
    }

    /// Prepares the game and returns its plays as a paced stream. The first
    /// play is available immediately; each later one waits `interval` after
    /// the previous. The stream ends once the cursor reaches the end of the
    /// buffer, after one final wait.
    ///
    /// # Errors
    ///
    /// Will return `Err` if `game_id` isn't an integer
    pub async fn stream(
        &self,
        game_id: &str,
    ) -> Result<BoxStream<'static, NormalizedPlay>, AppError> {
        let game = self.cache.prepare(game_id).await?;
        let cursor = match self.config.cursor_mode {
            CursorMode::Shared => Cursor::Shared(self.cache.cursors().clone()),
            CursorMode::PerConnection => Cursor::Local(0),
        };
        let state = StreamState {
            game,
            cursor,
            interval: self.config.interval,
            emitted: 0,
            pace: false,
        };

        let plays = stream::unfold(state, |mut state| async move {
            if state.pace {
                tokio::time::sleep(state.interval).await;
            }
            let Some(index) = state.next_index().await else {
                debug!(
                    "Finished streaming game {} after {} plays",
                    state.game.game_id, state.emitted
                );
                return None;
            };
            let play = state.game.plays[index].clone();
            state.emitted += 1;
            state.pace = true;
            Some((play, state))
        });
        Ok(plays.boxed())
    }
}

/// One server-sent event carrying `play` as json.
///
/// # Errors
///
/// Will return `Err` if the play can't be serialized
pub fn sse_frame(play: &NormalizedPlay) -> Result<Bytes, AppError> {
    let json = serde_json::to_string(play)?;
    Ok(Bytes::from(format!("data: {json}\n\n")))
}
