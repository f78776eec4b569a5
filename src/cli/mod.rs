//! CLI argument definitions and parsing.

pub mod args;

use args::{GamesArgs, PageArgs, PlayersArgs, SeasonAveragesArgs, StatsArgs};
use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[clap(name = "bdl", about = "balldontlie basketball statistics CLI", version)]
pub struct Bdl {
    /// API base URL (or set `BALLDONTLIE_BASE_URL` env var).
    #[clap(long, global = true)]
    pub base_url: Option<String>,

    /// Output results as JSON instead of text lines.
    #[clap(long, global = true)]
    pub json: bool,

    /// Log requests and responses to stderr.
    #[clap(long, short, global = true)]
    pub verbose: bool,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List games, optionally filtered by season, date or team.
    Games(GamesArgs),

    /// Show a single game.
    Game {
        /// Game ID.
        id: u32,
    },

    /// Search players by name.
    Players(PlayersArgs),

    /// Show a single player.
    Player {
        /// Player ID.
        id: u32,
    },

    /// List teams.
    Teams(PageArgs),

    /// Show a single team.
    Team {
        /// Team ID.
        id: u32,
    },

    /// List per-game box score lines.
    Stats(StatsArgs),

    /// Show season averages for one or more players.
    SeasonAverages(SeasonAveragesArgs),
}
