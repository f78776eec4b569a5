//! Resource records, their options and the generic accessor that fetches them.
//!
//! Every resource is a row in `resource_table!`: a collection path, an
//! options shape and whether single records can be fetched by ID. The
//! request/response pipeline in [`crate::client`] does the rest.

mod game;
mod options;
mod player;
mod stat;
mod team;


pub use game::Game;
pub use options::{
    GamesOptions, PageOptions, PlayersOptions, SeasonAverageOptions, StatsOptions,
};
pub use player::Player;
pub use stat::{SeasonAverage, Stat, StatGame, StatPlayer};
pub use team::Team;

use crate::client::Client;
use crate::core::query::{add_options, ToQuery};
use crate::core::response::Response;
use crate::Result;
use serde::{de::DeserializeOwned, Deserialize, Deserializer, Serialize};
use std::marker::PhantomData;

/// Decode `null` as the type's zero value.
///
/// The live service sends `null` for fields it has no value for (player
/// measurements, shooting percentages of players who took no shots, ...).
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Pagination metadata attached to list responses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct PaginationMeta {
    #[serde(deserialize_with = "null_as_default")]
    pub total_pages: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub current_page: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub next_page: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub per_page: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub total_count: u32,
}

impl PaginationMeta {
    /// Next page number, if the service reports one.
    pub fn next(&self) -> Option<u32> {
        (self.next_page != 0).then_some(self.next_page)
    }
}

/// `{"data": [...], "meta": {...}}` list envelope.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Page<T> {
    #[serde(default)]
    pub data: Vec<T>,
    #[serde(default)]
    pub meta: Option<PaginationMeta>,
}

/// A resource reachable through a collection endpoint.
pub trait Resource: DeserializeOwned {
    /// Collection path, e.g. `/api/v1/games`.
    const PATH: &'static str;

    type Options: ToQuery;
}

/// Marker for resources that also expose `{PATH}/{id}`.
pub trait Fetch: Resource {
    fn item_path(id: u32) -> String {
        format!("{}/{}", Self::PATH, id)
    }
}

macro_rules! resource_table {
    (@fetch $record:ty) => {
        impl Fetch for $record {}
    };
    ($($record:ty => $path:literal, $options:ty $(, $fetch:ident)?;)*) => {
        $(
            impl Resource for $record {
                const PATH: &'static str = $path;
                type Options = $options;
            }

            $(resource_table!(@$fetch $record);)?
        )*
    };
}

resource_table! {
    Game          => "/api/v1/games",           GamesOptions, fetch;
    Player        => "/api/v1/players",         PlayersOptions, fetch;
    Team          => "/api/v1/teams",           PageOptions, fetch;
    Stat          => "/api/v1/stats",           StatsOptions;
    SeasonAverage => "/api/v1/season_averages", SeasonAverageOptions;
}

/// Accessor for one resource type.
///
/// Obtained from [`Client::games`], [`Client::teams`] and friends.
pub struct Service<R> {
    client: Client,
    _resource: PhantomData<fn() -> R>,
}

impl<R> Clone for Service<R> {
    fn clone(&self) -> Self {
        Self::new(self.client.clone())
    }
}

impl<R> Service<R> {
    pub(crate) fn new(client: Client) -> Self {
        Self {
            client,
            _resource: PhantomData,
        }
    }
}

impl<R: Resource> Service<R> {
    /// Retrieve one page of records matching `options`.
    pub async fn find(&self, options: &R::Options) -> Result<Response<Page<R>>> {
        self.fetch_page(Some(options)).await
    }

    /// Retrieve one page of records with the service's default filters.
    pub async fn list(&self) -> Result<Response<Page<R>>> {
        self.fetch_page(None).await
    }

    async fn fetch_page(&self, options: Option<&R::Options>) -> Result<Response<Page<R>>> {
        let path = add_options(R::PATH, options)?;
        self.client.get(&path).await
    }
}

impl<R: Fetch> Service<R> {
    /// Retrieve a single record by ID.
    pub async fn get(&self, id: u32) -> Result<Response<R>> {
        self.client.get(&R::item_path(id)).await
    }
}
