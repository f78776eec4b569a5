//! Filter and pagination options accepted by the list endpoints.
//!
//! Every field is omitted from the query while it holds its zero value, so
//! `Default::default()` asks the service for its unfiltered first page.

use crate::core::query::{QueryWriter, ToQuery};

/// `page` / `per_page` pagination controls.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageOptions {
    pub page: u32,
    pub per_page: u32,
}

impl PageOptions {
    pub fn new(page: u32, per_page: u32) -> Self {
        Self { page, per_page }
    }
}

impl ToQuery for PageOptions {
    fn write_query(&self, query: &mut QueryWriter) {
        query
            .field_omit_empty("page", &self.page)
            .field_omit_empty("per_page", &self.per_page);
    }
}

/// Filters for `/api/v1/games`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GamesOptions {
    pub seasons: Vec<u16>,
    /// `YYYY-MM-DD`
    pub dates: Vec<String>,
    pub team_ids: Vec<u32>,
    pub postseason: bool,
    pub start_date: String,
    pub end_date: String,
    pub page: PageOptions,
}

impl ToQuery for GamesOptions {
    fn write_query(&self, query: &mut QueryWriter) {
        query
            .field_omit_empty("seasons", &self.seasons)
            .field_omit_empty("dates", &self.dates)
            .field_omit_empty("team_ids", &self.team_ids)
            .field_omit_empty("postseason", &self.postseason)
            .field_omit_empty("start_date", &self.start_date)
            .field_omit_empty("end_date", &self.end_date);
        self.page.write_query(query);
    }
}

/// Filters for `/api/v1/players`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayersOptions {
    /// Matched against first and last name.
    pub search: String,
    pub page: PageOptions,
}

impl ToQuery for PlayersOptions {
    fn write_query(&self, query: &mut QueryWriter) {
        query.field_omit_empty("search", &self.search);
        self.page.write_query(query);
    }
}

/// Filters for `/api/v1/stats`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatsOptions {
    pub seasons: Vec<u16>,
    pub dates: Vec<String>,
    pub team_ids: Vec<u32>,
    pub player_ids: Vec<u32>,
    pub game_ids: Vec<u32>,
    pub postseason: bool,
    pub start_date: String,
    pub end_date: String,
    pub page: PageOptions,
}

impl ToQuery for StatsOptions {
    fn write_query(&self, query: &mut QueryWriter) {
        query
            .field_omit_empty("seasons", &self.seasons)
            .field_omit_empty("dates", &self.dates)
            .field_omit_empty("team_ids", &self.team_ids)
            .field_omit_empty("player_ids", &self.player_ids)
            .field_omit_empty("game_ids", &self.game_ids)
            .field_omit_empty("postseason", &self.postseason)
            .field_omit_empty("start_date", &self.start_date)
            .field_omit_empty("end_date", &self.end_date);
        self.page.write_query(query);
    }
}

/// Filters for `/api/v1/season_averages`. The service defaults `season` to
/// the current one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeasonAverageOptions {
    pub season: u16,
    pub player_ids: Vec<u32>,
}

impl ToQuery for SeasonAverageOptions {
    fn write_query(&self, query: &mut QueryWriter) {
        query
            .field_omit_empty("season", &self.season)
            .field_omit_empty("player_ids", &self.player_ids);
    }
}
