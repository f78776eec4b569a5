use super::{null_as_default, Team};
use serde::{Deserialize, Serialize};

/// A player and the team they currently play for.
///
/// Measurements are zero when the service has none on record, which is
/// common for players from older seasons.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Player {
    pub id: u32,
    pub first_name: String,
    pub last_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub position: String,
    #[serde(deserialize_with = "null_as_default")]
    pub height_feet: u8,
    #[serde(deserialize_with = "null_as_default")]
    pub height_inches: u8,
    #[serde(rename = "weight_pounds", deserialize_with = "null_as_default")]
    pub weight: u16,
    pub team: Team,
}

impl Player {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
