//! Command implementations for the bdl CLI

pub mod output;

#[cfg(test)]
mod tests;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::{
    cli::{Bdl, Commands},
    Client, Page, Response, BASE_URL_ENV_VAR, DEFAULT_BASE_URL,
};
use output::{
    format_game, format_page_footer, format_player, format_season_average, format_stat,
    format_team,
};

/// Base URL from the flag, then `BALLDONTLIE_BASE_URL`, then the public host.
pub fn resolve_base_url(base_url: Option<String>) -> String {
    base_url
        .or_else(|| std::env::var(BASE_URL_ENV_VAR).ok())
        .filter(|url| !url.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
}

/// Run a parsed command line.
pub async fn run(app: Bdl) -> Result<()> {
    let base_url = resolve_base_url(app.base_url);
    let client =
        Client::new(&base_url).with_context(|| format!("invalid base URL {base_url:?}"))?;
    let json = app.json;

    match app.command {
        Commands::Games(args) => {
            let games = client
                .games()
                .find(&args.into())
                .await
                .context("listing games")?;
            print_page(games, json, format_game)
        }
        Commands::Game { id } => {
            let game = client
                .games()
                .get(id)
                .await
                .with_context(|| format!("fetching game {id}"))?;
            print_record(game, json, format_game)
        }
        Commands::Players(args) => {
            let players = client
                .players()
                .find(&args.into())
                .await
                .context("searching players")?;
            print_page(players, json, format_player)
        }
        Commands::Player { id } => {
            let player = client
                .players()
                .get(id)
                .await
                .with_context(|| format!("fetching player {id}"))?;
            print_record(player, json, format_player)
        }
        Commands::Teams(args) => {
            let teams = client
                .teams()
                .find(&args.into())
                .await
                .context("listing teams")?;
            print_page(teams, json, format_team)
        }
        Commands::Team { id } => {
            let team = client
                .teams()
                .get(id)
                .await
                .with_context(|| format!("fetching team {id}"))?;
            print_record(team, json, format_team)
        }
        Commands::Stats(args) => {
            let stats = client
                .stats()
                .find(&args.into())
                .await
                .context("listing stats")?;
            print_page(stats, json, format_stat)
        }
        Commands::SeasonAverages(args) => {
            let averages = client
                .season_averages()
                .find(&args.into())
                .await
                .context("fetching season averages")?;
            print_page(averages, json, format_season_average)
        }
    }
}

fn print_page<T: Serialize>(
    response: Response<Page<T>>,
    json: bool,
    line: impl Fn(&T) -> String,
) -> Result<()> {
    let page = response.into_data();

    if json {
        println!("{}", serde_json::to_string_pretty(&page)?);
        return Ok(());
    }

    for record in &page.data {
        println!("{}", line(record));
    }
    if let Some(meta) = &page.meta {
        println!("{}", format_page_footer(meta));
    }
    Ok(())
}

fn print_record<T: Serialize>(
    response: Response<T>,
    json: bool,
    line: impl Fn(&T) -> String,
) -> Result<()> {
    let record = response.into_data();

    if json {
        println!("{}", serde_json::to_string_pretty(&record)?);
    } else {
        println!("{}", line(&record));
    }
    Ok(())
}
