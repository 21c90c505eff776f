use super::play::RawPlayRow;
use ahash::AHashMap;
use serde::{Deserialize, Serialize};

pub const HOME_PLACEHOLDER: &str = "HOME";
pub const AWAY_PLACEHOLDER: &str = "AWAY";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct TeamAssignment {
    pub home_team: String,
    pub away_team: String,
}

impl TeamAssignment {
    #[must_use]
    pub fn placeholder() -> Self {
        Self {
            home_team: HOME_PLACEHOLDER.to_string(),
            away_team: AWAY_PLACEHOLDER.to_string(),
        }
    }
}

impl Default for TeamAssignment {
    fn default() -> Self {
        Self::placeholder()
    }
}

fn team_code(code: Option<&String>) -> Option<&str> {
    code.map(|c| c.trim()).filter(|c| !c.is_empty())
}

/// Best-effort home/away guess from a game's rows.
///
/// Every non-blank team code seen on either side of the ball is a candidate.
/// Candidates are ranked by how many plays they ran on offense, ties going to
/// the lexicographically smaller code; the top two become home and away.
/// Fewer than two candidates gives the placeholder pair.
#[must_use]
pub fn infer_teams(rows: &[RawPlayRow]) -> TeamAssignment {
    let mut offense_counts: AHashMap<&str, usize> = AHashMap::new();
    for row in rows {
        if let Some(offense) = team_code(row.offense_team.as_ref()) {
            *offense_counts.entry(offense).or_insert(0) += 1;
        }
        if let Some(defense) = team_code(row.defense_team.as_ref()) {
            offense_counts.entry(defense).or_insert(0);
        }
    }

    if offense_counts.len() < 2 {
        return TeamAssignment::placeholder();
    }

    let mut ranked: Vec<(&str, usize)> = offense_counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

    TeamAssignment {
        home_team: ranked[0].0.to_string(),
        away_team: ranked[1].0.to_string(),
    }
}
