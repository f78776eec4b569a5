//! balldontlie API client library
//!
//! A typed Rust client for the [balldontlie](https://www.balldontlie.io)
//! basketball statistics API: games, players, teams, box score stats and
//! season averages.
//!
//! ## Features
//!
//! - **Typed records**: `Game`, `Player`, `Team`, `Stat`, `SeasonAverage`
//! - **Declarative filters**: options structs encode to query strings, list
//!   filters as repeated `key[]=` parameters
//! - **Pagination metadata**: list calls return a [`Page`] with the
//!   service's `meta` envelope
//! - **Uniform errors**: API errors keep the response status and headers
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use balldontlie::{Client, PlayersOptions};
//!
//! # async fn example() -> balldontlie::Result<()> {
//! let client = Client::default_host()?;
//!
//! let players = client
//!     .players()
//!     .find(&PlayersOptions {
//!         search: "davis".to_string(),
//!         ..Default::default()
//!     })
//!     .await?;
//!
//! for player in &players.data().data {
//!     println!("{} ({})", player.full_name(), player.team.abbreviation);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Command line
//!
//! The `bdl` binary exposes the same accessors. Point it at another host with
//! `--base-url` or:
//! ```bash
//! export BALLDONTLIE_BASE_URL=https://www.balldontlie.io
//! ```

pub mod cli;
pub mod client;
pub mod commands;
pub mod core;
pub mod error;
pub mod resources;

// Re-export commonly used types
pub use client::{Client, ClientBuilder, DEFAULT_BASE_URL};
pub use crate::core::response::{Response, ResponseParts};
pub use error::{Error, Result};
pub use resources::{
    Game, GamesOptions, Page, PageOptions, PaginationMeta, Player, PlayersOptions, SeasonAverage,
    SeasonAverageOptions, Service, Stat, StatGame, StatPlayer, StatsOptions, Team,
};

pub const BASE_URL_ENV_VAR: &str = "BALLDONTLIE_BASE_URL";
