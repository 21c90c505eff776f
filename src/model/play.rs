use serde::{Deserialize, Serialize};

pub const SECONDS_PER_QUARTER: i64 = 15 * 60;
pub const REGULATION_QUARTERS: i64 = 4;

/// One row of the play-by-play source file. Only the columns the replay uses
/// are mapped; anything else in the file is ignored. Empty cells come through
/// as `None`.
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
pub struct RawPlayRow {
    #[serde(rename = "GameId")]
    pub game_id: i64,
    #[serde(rename = "Quarter")]
    pub quarter: Option<i64>,
    #[serde(rename = "Minute")]
    pub minute: Option<i64>,
    #[serde(rename = "Second")]
    pub second: Option<i64>,
    #[serde(rename = "Description")]
    pub description: Option<String>,
    #[serde(rename = "Yards")]
    pub yards: Option<i64>,
    #[serde(rename = "OffenseTeam")]
    pub offense_team: Option<String>,
    #[serde(rename = "DefenseTeam")]
    pub defense_team: Option<String>,
    #[serde(rename = "Down")]
    pub down: Option<i64>,
    #[serde(rename = "ToGo")]
    pub to_go: Option<i64>,
    #[serde(rename = "YardLine")]
    pub yard_line: Option<i64>,
}

pub const REQUIRED_COLUMNS: [&str; 11] = [
    "GameId",
    "Quarter",
    "Minute",
    "Second",
    "Description",
    "Yards",
    "OffenseTeam",
    "DefenseTeam",
    "Down",
    "ToGo",
    "YardLine",
];

impl RawPlayRow {
    #[must_use]
    pub fn total_seconds_remaining(&self) -> i64 {
        total_seconds_remaining(
            self.quarter.unwrap_or(0),
            self.minute.unwrap_or(0),
            self.second.unwrap_or(0),
        )
    }
}

/// Game clock flattened to seconds left in regulation. Overtime quarters come
/// out negative, which still sorts after regulation.
#[must_use]
pub fn total_seconds_remaining(quarter: i64, minute: i64, second: i64) -> i64 {
    (REGULATION_QUARTERS - quarter) * SECONDS_PER_QUARTER + minute * 60 + second
}

/// A play as it goes out on the wire.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct NormalizedPlay {
    pub quarter: Option<i64>,
    #[serde(rename = "time")]
    pub total_seconds_remaining: i64,
    pub description: Option<String>,
    pub yards_gained: Option<i64>,
    pub offense_team: Option<String>,
    pub defense_team: Option<String>,
    pub down: Option<i64>,
    pub yards_to_go: Option<i64>,
    pub yard_line: Option<i64>,
}

impl From<&RawPlayRow> for NormalizedPlay {
    fn from(row: &RawPlayRow) -> Self {
        Self {
            quarter: row.quarter,
            total_seconds_remaining: row.total_seconds_remaining(),
            description: row.description.clone(),
            yards_gained: row.yards,
            offense_team: row.offense_team.clone(),
            defense_team: row.defense_team.clone(),
            down: row.down,
            yards_to_go: row.to_go,
            yard_line: row.yard_line,
        }
    }
}

/// Orders a game's rows into replay order: latest clock first. The sort is
/// stable so plays sharing a clock value keep their file order.
#[must_use]
pub fn normalize_plays(rows: &[RawPlayRow]) -> Vec<NormalizedPlay> {
    let mut timed: Vec<(i64, &RawPlayRow)> = rows
        .iter()
        .map(|row| (row.total_seconds_remaining(), row))
        .collect();
    timed.sort_by(|a, b| b.0.cmp(&a.0));
    timed.into_iter().map(|(_, row)| row.into()).collect()
}
