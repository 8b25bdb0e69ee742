//! Stats command

use super::Reply;
use crate::game::{SessionManager, UserId};
use crate::store::{SessionStore, UserStats};
use crate::wordlists::WordSource;

/// Show the user's lifetime results
pub fn handle_stats<S: SessionStore, W: WordSource>(
    sessions: &SessionManager<S, W>,
    user: UserId,
) -> Reply {
    match sessions.stats(user) {
        Ok(stats) => Reply::info(format_stats(&stats)).titled(format!("Player {user}'s stats")),
        Err(err) => err.into(),
    }
}

fn format_stats(stats: &UserStats) -> String {
    let mut text = format!(
        "🏆 Won: {}\n☠️ Lost: {}\n🏳️ Surrendered: {}",
        stats.wins, stats.losses, stats.surrenders
    );
    let games = stats.games();
    if games > 0 {
        text.push_str(&format!("\n\nPlayed {games} games:"));
        for (language, count) in &stats.plays {
            text.push_str(&format!("\n  {language}: {count}"));
        }
    }
    text
}
