mod common;

use common::{
    CHIEFS_RAVENS_OT, NO_SUCH_GAME, PATRIOTS_JETS, STEELERS_FALCONS, counting_source,
    fixture_cache,
};
use gridiron_replay::model::total_seconds_remaining;
use gridiron_replay::{AppError, GameCache, TeamAssignment};
use std::sync::Arc;

#[tokio::test]
async fn test3_plays_come_out_latest_clock_first() -> Result<(), Box<dyn std::error::Error>> {
    let cache = fixture_cache();
    let game = cache.prepare(STEELERS_FALCONS).await?;

    let times: Vec<i64> = game.plays.iter().map(|p| p.total_seconds_remaining).collect();
    assert_eq!(times, vec![3600, 3300, 3030, 3030, 2652, 1020, 5]);
    assert!(times.windows(2).all(|w| w[0] >= w[1]));

    // the 5:30 run is ahead of the 5:30 timeout in the file, so it stays ahead
    assert_eq!(game.plays[2].yards_gained, Some(12));
    assert_eq!(
        game.plays[3].description.as_deref(),
        Some("TIMEOUT #1 BY ATL AT 05:30.")
    );
    Ok(())
}

#[tokio::test]
async fn test3_two_play_example() -> Result<(), Box<dyn std::error::Error>> {
    assert_eq!(total_seconds_remaining(1, 10, 0), 3300);
    assert_eq!(total_seconds_remaining(1, 5, 30), 3030);

    let cache = fixture_cache();
    let game = cache.prepare(PATRIOTS_JETS).await?;
    assert_eq!(game.game_id, 100);
    let times: Vec<i64> = game.plays.iter().map(|p| p.total_seconds_remaining).collect();
    assert_eq!(times, vec![3300, 3030]);

    let first = &game.plays[0];
    assert_eq!(first.quarter, Some(1));
    assert_eq!(first.yards_gained, Some(3));
    assert_eq!(first.offense_team.as_deref(), Some("NE"));
    assert_eq!(first.defense_team.as_deref(), Some("NYJ"));
    assert_eq!(first.down, Some(1));
    assert_eq!(first.yards_to_go, Some(10));
    assert_eq!(first.yard_line, Some(25));
    Ok(())
}

#[tokio::test]
async fn test3_overtime_sorts_after_regulation() -> Result<(), Box<dyn std::error::Error>> {
    let cache = fixture_cache();
    let game = cache.prepare(CHIEFS_RAVENS_OT).await?;
    let times: Vec<i64> = game.plays.iter().map(|p| p.total_seconds_remaining).collect();
    assert_eq!(times, vec![30, -420]);
    Ok(())
}

#[tokio::test]
async fn test3_prepare_is_idempotent() -> Result<(), Box<dyn std::error::Error>> {
    let source = counting_source();
    let cache = GameCache::new(source.clone());

    let first = cache.prepare(STEELERS_FALCONS).await?;
    let snapshot = (*first).clone();
    let second = cache.prepare(STEELERS_FALCONS).await?;
    // whitespace around the id still hits the same entry
    let third = cache.prepare(" 2024090800 ").await?;

    assert!(Arc::ptr_eq(&first, &second));
    assert!(Arc::ptr_eq(&first, &third));
    assert_eq!(*second, snapshot);
    assert_eq!(source.lookups(), 1);
    assert_eq!(cache.cached_games().await, 1);
    Ok(())
}

#[tokio::test]
async fn test3_concurrent_prepares_keep_one_buffer() -> Result<(), Box<dyn std::error::Error>> {
    let cache = fixture_cache();
    let (a, b, c) = tokio::join!(
        cache.prepare(STEELERS_FALCONS),
        cache.prepare(STEELERS_FALCONS),
        cache.prepare(STEELERS_FALCONS)
    );
    let (a, b, c) = (a?, b?, c?);
    assert!(Arc::ptr_eq(&a, &b));
    assert!(Arc::ptr_eq(&b, &c));

    let stored = cache.get(2_024_090_800).await.expect("game should be cached");
    assert!(Arc::ptr_eq(&a, &stored));
    Ok(())
}

#[tokio::test]
async fn test3_prepare_starts_the_cursor_at_zero() -> Result<(), Box<dyn std::error::Error>> {
    let cache = fixture_cache();
    assert_eq!(cache.cursors().position(100).await, None);
    cache.prepare(PATRIOTS_JETS).await?;
    assert_eq!(cache.cursors().position(100).await, Some(0));

    // a later prepare doesn't rewind a cursor that has moved
    cache.cursors().claim_next(100, 2).await;
    cache.prepare(PATRIOTS_JETS).await?;
    assert_eq!(cache.cursors().position(100).await, Some(1));
    Ok(())
}

#[tokio::test]
async fn test3_unknown_game_is_empty_not_an_error() -> Result<(), Box<dyn std::error::Error>> {
    let cache = fixture_cache();
    let game = cache.prepare(NO_SUCH_GAME).await?;
    assert!(game.is_empty());
    assert_eq!(game.teams, TeamAssignment::placeholder());
    Ok(())
}

#[tokio::test]
async fn test3_non_integer_id_is_invalid_input() {
    let cache = fixture_cache();
    for bad in ["abc", "", "12.5", "2024090800x"] {
        match cache.prepare(bad).await {
            Err(AppError::InvalidInput(_)) => {}
            other => panic!("expected InvalidInput for '{bad}', got {other:?}"),
        }
    }
    assert_eq!(cache.cached_games().await, 0);
}
