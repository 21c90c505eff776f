use ahash::AHashMap;
use tokio::sync::Mutex as AsyncMutex;

/// Next play index to emit, per game. Shared by every connection streaming
/// that game when streams run in shared mode.
#[derive(Debug, Default)]
pub struct CursorRegistry {
    cursors: AsyncMutex<AHashMap<i64, usize>>,
}

impl CursorRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a cursor at 0. An existing cursor is left where it is.
    pub async fn register(&self, game_id: i64) {
        let mut cursors = self.cursors.lock().await;
        cursors.entry(game_id).or_insert(0);
    }

    /// Takes the index under the cursor and moves the cursor on by one.
    /// Returns `None` once the cursor has reached `len`.
    pub async fn claim_next(&self, game_id: i64, len: usize) -> Option<usize> {
        let mut cursors = self.cursors.lock().await;
        let cursor = cursors.entry(game_id).or_insert(0);
        if *cursor >= len {
            return None;
        }
        let claimed = *cursor;
        *cursor += 1;
        Some(claimed)
    }

    pub async fn position(&self, game_id: i64) -> Option<usize> {
        self.cursors.lock().await.get(&game_id).copied()
    }
}
