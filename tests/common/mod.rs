#![allow(dead_code)]

use gridiron_replay::{
    CursorMode, GameCache, PlayDataset, PlaySource, PlayStreamer, RawPlayRow, StreamConfig,
};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

pub const FIXTURE_CSV: &str = include_str!("../test1_plays.csv");

pub const STEELERS_FALCONS: &str = "2024090800";
pub const PATRIOTS_JETS: &str = "100";
pub const COWBOYS_ONLY: &str = "300";
pub const CHIEFS_RAVENS_OT: &str = "400";
pub const NO_SUCH_GAME: &str = "999";

pub const TEST_INTERVAL: Duration = Duration::from_millis(40);

/// Counts lookups so tests can tell whether a game was prepared more than once.
pub struct CountingSource {
    inner: PlayDataset,
    lookups: AtomicUsize,
}

impl CountingSource {
    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

impl PlaySource for CountingSource {
    fn plays_for_game(&self, game_id: i64) -> Vec<RawPlayRow> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        self.inner.plays_for_game(game_id)
    }
}

pub fn fixture_dataset() -> PlayDataset {
    PlayDataset::from_reader(FIXTURE_CSV.as_bytes()).expect("fixture csv should load")
}

pub fn counting_source() -> Arc<CountingSource> {
    Arc::new(CountingSource {
        inner: fixture_dataset(),
        lookups: AtomicUsize::new(0),
    })
}

pub fn fixture_cache() -> Arc<GameCache> {
    Arc::new(GameCache::new(Arc::new(fixture_dataset())))
}

pub fn fast_streamer(cursor_mode: CursorMode) -> PlayStreamer {
    PlayStreamer::new(
        fixture_cache(),
        StreamConfig {
            interval: TEST_INTERVAL,
            cursor_mode,
        },
    )
}
