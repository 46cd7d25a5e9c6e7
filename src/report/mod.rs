use colored::Colorize;

use crate::standings::Standings;

/// Players at or above this share of their round robin are highlighted.
const HIGHLIGHT_PROGRESS: u32 = 70;

/// Renders the league table for the terminal.
pub fn format_standings(standings: &Standings) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "Players: {}  Games: {}/{}  Progress: {}%\n\n",
        standings.total_players,
        standings.total_games_played,
        standings.total_possible_games,
        standings.league_progress_percent
    ));
    out.push_str(&format!(
        "{:>4}  {:<16} {:>4} {:>8} {:>4} {:>4} {:>5} {:>5}\n",
        "Rank", "Name", "Hcp", "Progress", "W", "L", "Bonus", "Score"
    ));

    if standings.stats.is_empty() {
        out.push_str("  (no players registered)\n");
        return out;
    }

    for stat in &standings.stats {
        let progress = format!("{:>7}%", stat.progress_rate);
        let progress = if stat.progress_rate >= HIGHLIGHT_PROGRESS {
            progress.red().bold().to_string()
        } else {
            progress
        };
        out.push_str(&format!(
            "{:>4}  {:<16} {:>4} {} {:>4} {:>4} {:>5} {:>5}\n",
            stat.rank,
            stat.player_name,
            stat.handicap,
            progress,
            stat.wins,
            stat.losses,
            stat.bonus,
            stat.score
        ));
    }

    out
}
