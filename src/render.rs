//! Text rendering of vlog cards for the terminal.
use catalog::Vlog;
use chrono::{DateTime, Utc};

use crate::reaction::ReactionState;

pub const DESCRIPTION_LENGTH: usize = 120;
pub const EMPTY_MESSAGE: &str = "No vlogs found";

pub fn format_date(date: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let days = (now - date).num_days().abs();

    match days {
        0 => "Today".to_string(),
        1 => "Yesterday".to_string(),
        2..7 => format!("{days} days ago"),
        7..30 => plural(days / 7, "week"),
        30..365 => plural(days / 30, "month"),
        _ => date.format("%b %-d, %Y").to_string(),
    }
}

fn plural(count: i64, unit: &str) -> String {
    if count == 1 {
        format!("{count} {unit} ago")
    } else {
        format!("{count} {unit}s ago")
    }
}

pub fn truncate(text: &str, max_length: usize) -> String {
    if text.chars().count() <= max_length {
        return text.to_string();
    }

    let head: String = text.chars().take(max_length).collect();
    format!("{}...", head.trim())
}

pub fn render_card(vlog: &Vlog, reaction: ReactionState, now: DateTime<Utc>) -> String {
    let mark = |active: bool| if active { "*" } else { " " };

    [
        format!("[{}] {}", vlog.category, vlog.title),
        format!("    {}", truncate(&vlog.description, DESCRIPTION_LENGTH)),
        format!(
            "    By {} · {} · {}",
            vlog.creator_name,
            format_date(vlog.created_at, now),
            vlog.video_url
        ),
        format!(
            "   {}👍 {}  {}👎 {}    id: {}",
            mark(reaction == ReactionState::Liked),
            vlog.likes,
            mark(reaction == ReactionState::Disliked),
            vlog.dislikes,
            vlog.id
        ),
    ]
    .join("\n")
}

pub fn render_list<'a>(
    vlogs: impl IntoIterator<Item = (&'a Vlog, ReactionState)>,
    now: DateTime<Utc>,
) -> String {
    let cards: Vec<String> = vlogs
        .into_iter()
        .map(|(vlog, reaction)| render_card(vlog, reaction, now))
        .collect();

    if cards.is_empty() {
        return EMPTY_MESSAGE.to_string();
    }

    cards.join("\n\n")
}
