use super::{null_as_default, Team};
use serde::{Deserialize, Serialize};

/// One player's box score line for one game.
///
/// `game` and `player` are reduced views of [`Game`](super::Game) and
/// [`Player`](super::Player) that reference teams by ID; `team` is complete.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Stat {
    pub id: u32,
    #[serde(rename = "ast", deserialize_with = "null_as_default")]
    pub assists: u32,
    #[serde(rename = "blk", deserialize_with = "null_as_default")]
    pub blocks: u32,
    #[serde(rename = "dreb", deserialize_with = "null_as_default")]
    pub defensive_rebounds: u32,
    #[serde(rename = "fg3_pct", deserialize_with = "null_as_default")]
    pub three_point_pct: f64,
    #[serde(rename = "fg3a", deserialize_with = "null_as_default")]
    pub three_pointers_attempted: u32,
    #[serde(rename = "fg3m", deserialize_with = "null_as_default")]
    pub three_pointers_made: u32,
    #[serde(rename = "fg_pct", deserialize_with = "null_as_default")]
    pub field_goal_pct: f64,
    #[serde(rename = "fga", deserialize_with = "null_as_default")]
    pub field_goals_attempted: u32,
    #[serde(rename = "fgm", deserialize_with = "null_as_default")]
    pub field_goals_made: u32,
    #[serde(rename = "ft_pct", deserialize_with = "null_as_default")]
    pub free_throw_pct: f64,
    #[serde(rename = "fta", deserialize_with = "null_as_default")]
    pub free_throws_attempted: u32,
    #[serde(rename = "ftm", deserialize_with = "null_as_default")]
    pub free_throws_made: u32,
    pub game: StatGame,
    /// Minutes played as reported, e.g. `"34"` or `"34:12"`.
    #[serde(rename = "min", deserialize_with = "null_as_default")]
    pub minutes: String,
    #[serde(rename = "oreb", deserialize_with = "null_as_default")]
    pub offensive_rebounds: u32,
    #[serde(rename = "pf", deserialize_with = "null_as_default")]
    pub fouls: u32,
    pub player: StatPlayer,
    #[serde(rename = "pts", deserialize_with = "null_as_default")]
    pub points: u32,
    #[serde(rename = "reb", deserialize_with = "null_as_default")]
    pub rebounds: u32,
    #[serde(rename = "stl", deserialize_with = "null_as_default")]
    pub steals: u32,
    pub team: Team,
    #[serde(rename = "turnover", deserialize_with = "null_as_default")]
    pub turnovers: u32,
}

/// Game fields embedded in a [`Stat`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct StatGame {
    pub id: u32,
    pub date: String,
    pub home_team_score: u32,
    pub visitor_team_score: u32,
    pub season: u16,
    pub home_team_id: u32,
    pub visitor_team_id: u32,
}

/// Player fields embedded in a [`Stat`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct StatPlayer {
    pub id: u32,
    pub first_name: String,
    pub last_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub position: String,
    pub team_id: u32,
}

/// A player's per-game averages over one season.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SeasonAverage {
    pub games_played: u32,
    pub player_id: u32,
    pub season: u16,
    #[serde(rename = "min")]
    pub minutes: String,
    #[serde(rename = "ast")]
    pub assists: f64,
    #[serde(rename = "blk")]
    pub blocks: f64,
    #[serde(rename = "dreb")]
    pub defensive_rebounds: f64,
    #[serde(rename = "oreb")]
    pub offensive_rebounds: f64,
    #[serde(rename = "reb")]
    pub rebounds: f64,
    #[serde(rename = "fg3_pct", deserialize_with = "null_as_default")]
    pub three_point_pct: f64,
    #[serde(rename = "fg3a")]
    pub three_pointers_attempted: f64,
    #[serde(rename = "fg3m")]
    pub three_pointers_made: f64,
    #[serde(rename = "fg_pct", deserialize_with = "null_as_default")]
    pub field_goal_pct: f64,
    #[serde(rename = "fga")]
    pub field_goals_attempted: f64,
    #[serde(rename = "fgm")]
    pub field_goals_made: f64,
    #[serde(rename = "ft_pct", deserialize_with = "null_as_default")]
    pub free_throw_pct: f64,
    #[serde(rename = "fta")]
    pub free_throws_attempted: f64,
    #[serde(rename = "ftm")]
    pub free_throws_made: f64,
    #[serde(rename = "turnover")]
    pub turnovers: f64,
    #[serde(rename = "stl")]
    pub steals: f64,
    #[serde(rename = "pf")]
    pub fouls: f64,
    #[serde(rename = "pts")]
    pub points: f64,
}
