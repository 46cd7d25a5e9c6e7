use log::debug;

use super::progress::{league_progress_percent, player_progress_rate, total_possible_games};
use super::ranking::sort_and_rank;
use super::types::{PlayerStat, Standings};
use crate::config::settings::LeagueSettings;
use crate::domain::{Game, Player};

/// Builds the ranked league table from the full roster and game log.
///
/// Games naming a player missing from `players` are not attributed to anyone.
pub fn compute_standings(
    players: &[Player],
    games: &[Game],
    settings: &LeagueSettings,
) -> Standings {
    let player_count = players.len();
    debug!(
        "Computing standings for {} players over {} games",
        player_count,
        games.len()
    );

    // 1. Tally every player independently
    let mut stats: Vec<PlayerStat> = players
        .iter()
        .map(|player| tally_player(player, games, player_count, settings))
        .collect();

    // 2. Rank by total score
    sort_and_rank(&mut stats);

    // 3. League-wide progress
    let total_possible = total_possible_games(player_count);

    Standings {
        stats,
        total_players: player_count,
        total_games_played: games.len(),
        total_possible_games: total_possible,
        league_progress_percent: league_progress_percent(games.len(), total_possible),
    }
}

fn tally_player(
    player: &Player,
    games: &[Game],
    player_count: usize,
    settings: &LeagueSettings,
) -> PlayerStat {
    let name = player.player_name.as_str();
    let mut stat = PlayerStat {
        player_name: player.player_name.clone(),
        handicap: player.handicap,
        wins: 0,
        losses: 0,
        games_played: 0,
        score: 0,
        bonus: 0,
        progress_rate: 0,
        rank: 0,
    };

    for game in games {
        if game.winner_name == name {
            stat.wins += 1;
            stat.games_played += 1;
            stat.score += settings.win_points + game.bonus;
            stat.bonus += game.bonus;
        } else if game.loser_name == name {
            stat.losses += 1;
            stat.games_played += 1;
            stat.score += settings.loss_points;
        }
    }

    stat.progress_rate = player_progress_rate(stat.games_played, player_count);
    stat
}

/// Points a single game is worth to `player_name`
pub fn game_points(game: &Game, player_name: &str, settings: &LeagueSettings) -> i32 {
    if game.winner_name == player_name {
        settings.win_points + game.bonus
    } else if game.loser_name == player_name {
        settings.loss_points
    } else {
        0
    }
}
