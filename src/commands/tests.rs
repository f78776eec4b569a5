//! Unit tests for command helpers and output formatting

use super::output::*;
use super::*;
use crate::{Game, PaginationMeta, Player, SeasonAverage, Stat, StatGame, StatPlayer, Team};

fn lakers() -> Team {
    Team {
        id: 14,
        abbreviation: "LAL".to_string(),
        city: "Los Angeles".to_string(),
        conference: "West".to_string(),
        division: "Pacific".to_string(),
        full_name: "Los Angeles Lakers".to_string(),
        name: "Lakers".to_string(),
    }
}

#[cfg(test)]
mod command_tests {
    use super::*;

    #[test]
    fn test_resolve_base_url_precedence() {
        // single test so the env var is not raced by parallel tests
        std::env::remove_var(BASE_URL_ENV_VAR);
        assert_eq!(resolve_base_url(None), DEFAULT_BASE_URL);

        std::env::set_var(BASE_URL_ENV_VAR, "http://localhost:9000");
        assert_eq!(resolve_base_url(None), "http://localhost:9000");
        assert_eq!(
            resolve_base_url(Some("http://flag.example".to_string())),
            "http://flag.example"
        );

        std::env::set_var(BASE_URL_ENV_VAR, "  ");
        assert_eq!(resolve_base_url(None), DEFAULT_BASE_URL);

        std::env::remove_var(BASE_URL_ENV_VAR);
    }
}

#[cfg(test)]
mod output_tests {
    use super::*;

    #[test]
    fn test_format_team() {
        assert_eq!(
            format_team(&lakers()),
            "[14] Los Angeles Lakers (LAL) - West / Pacific"
        );
    }

    #[test]
    fn test_format_game() {
        let game = Game {
            id: 1,
            date: "2019-01-30T00:00:00.000Z".to_string(),
            home_team_score: 105,
            visitor_team_score: 87,
            status: "Final".to_string(),
            postseason: true,
            home_team: lakers(),
            visitor_team: Team {
                abbreviation: "PHI".to_string(),
                ..Default::default()
            },
            ..Default::default()
        };

        assert_eq!(
            format_game(&game),
            "[1] 2019-01-30 PHI 87 - 105 LAL (Final playoffs)"
        );
    }

    #[test]
    fn test_format_game_short_date() {
        let game = Game {
            id: 2,
            date: "2019".to_string(),
            ..Default::default()
        };

        assert!(format_game(&game).starts_with("[2] 2019 "));
    }

    #[test]
    fn test_format_player() {
        let player = Player {
            id: 237,
            first_name: "LeBron".to_string(),
            last_name: "James".to_string(),
            position: "F".to_string(),
            height_feet: 6,
            height_inches: 8,
            weight: 250,
            team: lakers(),
        };

        assert_eq!(format_player(&player), "[237] LeBron James F LAL 6'8\" 250lb");
    }

    #[test]
    fn test_format_player_without_measurements() {
        let player = Player {
            id: 1,
            first_name: "Alex".to_string(),
            last_name: "Abrines".to_string(),
            ..Default::default()
        };

        assert_eq!(format_player(&player), "[1] Alex Abrines - ");
    }

    #[test]
    fn test_format_stat() {
        let stat = Stat {
            id: 29,
            points: 15,
            rebounds: 9,
            assists: 2,
            minutes: "36:12".to_string(),
            game: StatGame {
                id: 1,
                ..Default::default()
            },
            player: StatPlayer {
                first_name: "Joel".to_string(),
                last_name: "Embiid".to_string(),
                ..Default::default()
            },
            team: lakers(),
            ..Default::default()
        };

        assert_eq!(
            format_stat(&stat),
            "[29] game 1 Joel Embiid (LAL): 15 pts, 9 reb, 2 ast in 36:12 min"
        );
    }

    #[test]
    fn test_format_season_average() {
        let avg = SeasonAverage {
            player_id: 237,
            season: 2018,
            games_played: 55,
            points: 27.36,
            rebounds: 8.51,
            assists: 8.31,
            field_goal_pct: 0.51,
            ..Default::default()
        };

        assert_eq!(
            format_season_average(&avg),
            "player 237 season 2018: 55 games, 27.4 pts, 8.5 reb, 8.3 ast, 0.510 fg%"
        );
    }

    #[test]
    fn test_format_page_footer() {
        let mut meta = PaginationMeta {
            total_pages: 3,
            current_page: 1,
            next_page: 2,
            per_page: 25,
            total_count: 60,
        };
        assert_eq!(
            format_page_footer(&meta),
            "page 1/3 (60 total, 25 per page), next: --page 2"
        );

        meta.next_page = 0;
        assert_eq!(format_page_footer(&meta), "page 1/3 (60 total, 25 per page)");
    }
}
