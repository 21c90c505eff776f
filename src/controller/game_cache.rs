use crate::controller::cursor::CursorRegistry;
use crate::dataset::PlaySource;
use crate::error::AppError;
use crate::model::{NormalizedPlay, RawPlayRow, TeamAssignment, infer_teams, normalize_plays};
use ahash::AHashMap;
use log::{debug, warn};
use std::sync::Arc;
use tokio::sync::RwLock;

/// A game ready for replay. Never changes once built.
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedGame {
    pub game_id: i64,
    pub plays: Vec<NormalizedPlay>,
    pub teams: TeamAssignment,
}

impl PreparedGame {
    #[must_use]
    pub fn from_rows(game_id: i64, rows: &[RawPlayRow]) -> Self {
        Self {
            game_id,
            teams: infer_teams(rows),
            plays: normalize_plays(rows),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.plays.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.plays.is_empty()
    }
}

/// # Errors
///
/// Will return `Err` if `game_id` isn't an integer
pub fn parse_game_id(game_id: &str) -> Result<i64, AppError> {
    game_id.trim().parse::<i64>().map_err(|e| {
        AppError::InvalidInput(format!("game id '{game_id}' is not an integer: {e}"))
    })
}

pub type GameMap = Arc<RwLock<AHashMap<i64, Arc<PreparedGame>>>>;

/// Process-wide store of prepared games. Entries are built on first request
/// and kept for the life of the process; nothing is ever evicted.
pub struct GameCache {
    source: Arc<dyn PlaySource>,
    games: GameMap,
    cursors: Arc<CursorRegistry>,
}

impl GameCache {
    #[must_use]
    pub fn new(source: Arc<dyn PlaySource>) -> Self {
        Self {
            source,
            games: Arc::new(RwLock::new(AHashMap::new())),
            cursors: Arc::new(CursorRegistry::new()),
        }
    }

    #[must_use]
    pub fn cursors(&self) -> &Arc<CursorRegistry> {
        &self.cursors
    }

    /// Builds the play buffer and team assignment for `game_id` unless they
    /// already exist, and returns them. A game with no rows is still cached,
    /// with an empty buffer and placeholder teams.
    ///
    /// # Errors
    ///
    /// Will return `Err` if `game_id` isn't an integer
    pub async fn prepare(&self, game_id: &str) -> Result<Arc<PreparedGame>, AppError> {
        let id = parse_game_id(game_id)?;

        let cached = self.games.read().await.get(&id).cloned();
        if let Some(game) = cached {
            return Ok(game);
        }

        let rows = self.source.plays_for_game(id);
        let prepared = Arc::new(PreparedGame::from_rows(id, &rows));

        let cached_games = {
            let mut games = self.games.write().await;
            // Re-check after acquiring the lock in case another task already prepared it
            if let Some(existing) = games.get(&id) {
                return Ok(existing.clone());
            }
            games.insert(id, prepared.clone());
            games.len()
        };
        self.cursors.register(id).await;

        debug!(
            "Prepared game {id}: {} plays, home {} away {} ({cached_games} games cached)",
            prepared.len(),
            prepared.teams.home_team,
            prepared.teams.away_team
        );
        Ok(prepared)
    }

    /// Team assignment for `game_id`, or the placeholder pair if the game
    /// can't be prepared.
    pub async fn teams(&self, game_id: &str) -> TeamAssignment {
        match self.prepare(game_id).await {
            Ok(game) => game.teams.clone(),
            Err(e) => {
                warn!("Team lookup for '{game_id}' fell back to placeholders: {e}");
                TeamAssignment::placeholder()
            }
        }
    }

    pub async fn get(&self, game_id: i64) -> Option<Arc<PreparedGame>> {
        self.games.read().await.get(&game_id).cloned()
    }

    pub async fn cached_games(&self) -> usize {
        self.games.read().await.len()
    }
}
