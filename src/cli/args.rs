//! Argument groups shared by the list subcommands.

use crate::resources::{
    GamesOptions, PageOptions, PlayersOptions, SeasonAverageOptions, StatsOptions,
};
use clap::Args;

/// Pagination flags.
#[derive(Debug, Default, Args)]
pub struct PageArgs {
    /// Page to fetch (1-based).
    #[clap(long)]
    pub page: Option<u32>,

    /// Records per page (service maximum is 100).
    #[clap(long)]
    pub per_page: Option<u32>,
}

impl From<PageArgs> for PageOptions {
    fn from(args: PageArgs) -> Self {
        PageOptions::new(
            args.page.unwrap_or_default(),
            args.per_page.unwrap_or_default(),
        )
    }
}

/// Filters shared by `games` and `stats`.
#[derive(Debug, Default, Args)]
pub struct ScheduleFilters {
    /// Season (repeatable): `-s 2018 -s 2019`.
    #[clap(long = "season", short = 's')]
    pub seasons: Vec<u16>,

    /// Date as YYYY-MM-DD (repeatable).
    #[clap(long = "date", short = 'd')]
    pub dates: Vec<String>,

    /// Team ID (repeatable).
    #[clap(long = "team-id", short = 't')]
    pub team_ids: Vec<u32>,

    /// Only postseason games.
    #[clap(long)]
    pub postseason: bool,

    /// Earliest date, YYYY-MM-DD.
    #[clap(long)]
    pub start_date: Option<String>,

    /// Latest date, YYYY-MM-DD.
    #[clap(long)]
    pub end_date: Option<String>,
}

#[derive(Debug, Default, Args)]
pub struct GamesArgs {
    #[clap(flatten)]
    pub filters: ScheduleFilters,

    #[clap(flatten)]
    pub page: PageArgs,
}

impl From<GamesArgs> for GamesOptions {
    fn from(args: GamesArgs) -> Self {
        let f = args.filters;
        GamesOptions {
            seasons: f.seasons,
            dates: f.dates,
            team_ids: f.team_ids,
            postseason: f.postseason,
            start_date: f.start_date.unwrap_or_default(),
            end_date: f.end_date.unwrap_or_default(),
            page: args.page.into(),
        }
    }
}

#[derive(Debug, Default, Args)]
pub struct PlayersArgs {
    /// Name fragment matched against first and last name.
    pub search: Option<String>,

    #[clap(flatten)]
    pub page: PageArgs,
}

impl From<PlayersArgs> for PlayersOptions {
    fn from(args: PlayersArgs) -> Self {
        PlayersOptions {
            search: args.search.unwrap_or_default(),
            page: args.page.into(),
        }
    }
}

#[derive(Debug, Default, Args)]
pub struct StatsArgs {
    #[clap(flatten)]
    pub filters: ScheduleFilters,

    /// Player ID (repeatable).
    #[clap(long = "player-id", short = 'p')]
    pub player_ids: Vec<u32>,

    /// Game ID (repeatable).
    #[clap(long = "game-id", short = 'g')]
    pub game_ids: Vec<u32>,

    #[clap(flatten)]
    pub page: PageArgs,
}

impl From<StatsArgs> for StatsOptions {
    fn from(args: StatsArgs) -> Self {
        let f = args.filters;
        StatsOptions {
            seasons: f.seasons,
            dates: f.dates,
            team_ids: f.team_ids,
            player_ids: args.player_ids,
            game_ids: args.game_ids,
            postseason: f.postseason,
            start_date: f.start_date.unwrap_or_default(),
            end_date: f.end_date.unwrap_or_default(),
            page: args.page.into(),
        }
    }
}

#[derive(Debug, Default, Args)]
pub struct SeasonAveragesArgs {
    /// Season year; the service defaults to the current season.
    #[clap(long, short = 's')]
    pub season: Option<u16>,

    /// Player ID (repeatable, at least one).
    #[clap(long = "player-id", short = 'p', required = true)]
    pub player_ids: Vec<u32>,
}

impl From<SeasonAveragesArgs> for SeasonAverageOptions {
    fn from(args: SeasonAveragesArgs) -> Self {
        SeasonAverageOptions {
            season: args.season.unwrap_or_default(),
            player_ids: args.player_ids,
        }
    }
}
