//! One-line text renderings of records for terminal output.

use crate::{Game, PaginationMeta, Player, SeasonAverage, Stat, Team};

pub fn format_team(team: &Team) -> String {
    format!(
        "[{}] {} ({}) - {} / {}",
        team.id, team.full_name, team.abbreviation, team.conference, team.division
    )
}

pub fn format_game(game: &Game) -> String {
    let day = game.date.get(..10).unwrap_or(&game.date);
    let stage = if game.postseason { " playoffs" } else { "" };
    format!(
        "[{}] {} {} {} - {} {} ({}{})",
        game.id,
        day,
        game.visitor_team.abbreviation,
        game.visitor_team_score,
        game.home_team_score,
        game.home_team.abbreviation,
        game.status.trim(),
        stage
    )
}

pub fn format_player(player: &Player) -> String {
    let position = if player.position.is_empty() {
        "-"
    } else {
        player.position.as_str()
    };
    let mut line = format!(
        "[{}] {} {} {}",
        player.id,
        player.full_name(),
        position,
        player.team.abbreviation
    );
    if player.height_feet > 0 {
        line.push_str(&format!(" {}'{}\"", player.height_feet, player.height_inches));
    }
    if player.weight > 0 {
        line.push_str(&format!(" {}lb", player.weight));
    }
    line
}

pub fn format_stat(stat: &Stat) -> String {
    format!(
        "[{}] game {} {} {} ({}): {} pts, {} reb, {} ast in {} min",
        stat.id,
        stat.game.id,
        stat.player.first_name,
        stat.player.last_name,
        stat.team.abbreviation,
        stat.points,
        stat.rebounds,
        stat.assists,
        if stat.minutes.is_empty() { "0" } else { stat.minutes.as_str() }
    )
}

pub fn format_season_average(avg: &SeasonAverage) -> String {
    format!(
        "player {} season {}: {} games, {:.1} pts, {:.1} reb, {:.1} ast, {:.3} fg%",
        avg.player_id,
        avg.season,
        avg.games_played,
        avg.points,
        avg.rebounds,
        avg.assists,
        avg.field_goal_pct
    )
}

pub fn format_page_footer(meta: &PaginationMeta) -> String {
    let mut footer = format!(
        "page {}/{} ({} total, {} per page)",
        meta.current_page, meta.total_pages, meta.total_count, meta.per_page
    );
    if let Some(next) = meta.next() {
        footer.push_str(&format!(", next: --page {next}"));
    }
    footer
}
