use super::{null_as_default, Team};
use serde::{Deserialize, Serialize};

/// A single game, with both teams embedded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Game {
    pub id: u32,
    /// ISO-8601 timestamp of the game day, e.g. `2019-01-30T00:00:00.000Z`.
    pub date: String,
    pub season: u16,
    pub home_team_score: u32,
    pub visitor_team_score: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub period: u8,
    /// `Final`, a tip-off time, or a quarter marker while in progress.
    pub status: String,
    /// Game clock while in progress, empty otherwise.
    #[serde(deserialize_with = "null_as_default")]
    pub time: String,
    pub postseason: bool,
    pub home_team: Team,
    pub visitor_team: Team,
}

impl Game {
    pub fn is_final(&self) -> bool {
        self.status == "Final"
    }
}
