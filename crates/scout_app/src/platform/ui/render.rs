//! Plain-text rendering of the view model.
use std::fmt::Write;

use scout_core::{AnalyticsSnapshot, AppViewModel, Item, ItemRowView, NoticeLevel, Notification};

const MAX_TAGS: usize = 3;

pub fn render_notification(notification: &Notification) -> String {
    let marker = match notification.level {
        NoticeLevel::Info => "i",
        NoticeLevel::Success => "+",
        NoticeLevel::Error => "!",
    };
    format!("[{marker}] {}\n", notification.text)
}

pub fn render_results(view: &AppViewModel) -> String {
    let mut out = String::new();
    if view.results.is_empty() {
        return out;
    }
    let _ = writeln!(out, "Found {} results", view.results.len());
    render_rows(&mut out, &view.results);
    out
}

pub fn render_recommendations(view: &AppViewModel) -> String {
    let mut out = String::new();
    if let Some(profile) = &view.profile {
        if !profile.interests.is_empty() {
            let _ = writeln!(
                out,
                "Based on your interests in {}",
                profile.interests.join(", ")
            );
        }
        if !profile.skills.is_empty() {
            let _ = writeln!(out, "Skills: {}", profile.skills.join(", "));
        }
    }
    render_rows(&mut out, &view.recommendations);
    out
}

pub fn render_saved(view: &AppViewModel) -> String {
    let mut out = String::new();
    let count = view.saved.len();
    let noun = if count == 1 { "project" } else { "projects" };
    let _ = writeln!(out, "{count} {noun} saved");
    if count == 0 {
        let _ = writeln!(
            out,
            "Start exploring projects and save your favorites to see them here."
        );
    }
    for item in &view.saved {
        let _ = writeln!(out, "  - {} [{}]", item.title, item.id);
        render_details(&mut out, item);
    }
    out
}

pub fn render_analytics(snapshot: &AnalyticsSnapshot) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Total favorites   {}", snapshot.total_favorites);
    let _ = writeln!(out, "GitHub projects   {}", snapshot.by_source.github);
    let _ = writeln!(out, "Research papers   {}", snapshot.by_source.paper);
    let _ = writeln!(out, "Datasets          {}", snapshot.by_source.dataset);
    let _ = writeln!(out, "Easy              {}", snapshot.by_level.easy);
    let _ = writeln!(out, "Intermediate      {}", snapshot.by_level.intermediate);
    let _ = writeln!(out, "Advanced          {}", snapshot.by_level.advanced);
    let _ = writeln!(out, "Average novelty   {:.1}", snapshot.avg_novelty);
    if snapshot.total_favorites == 0 {
        let _ = writeln!(
            out,
            "No data yet. Start exploring and saving projects to see your analytics."
        );
    }
    out
}

fn render_rows(out: &mut String, rows: &[ItemRowView]) {
    for (index, row) in rows.iter().enumerate() {
        let heart = if row.favorited { "*" } else { " " };
        let _ = writeln!(out, "{:>3}. [{heart}] {}", index + 1, row.item.title);
        render_details(out, &row.item);
    }
}

fn render_details(out: &mut String, item: &Item) {
    let mut badges = format!(
        "{} | {} | novelty {:.1}/10",
        item.source, item.level, item.novelty_score
    );
    if let Some(stars) = item.stars {
        let _ = write!(badges, " | {stars} stars");
    }
    if item.is_sample() {
        badges.push_str(" | sample");
    }
    let _ = writeln!(out, "       {badges}");
    if !item.description.is_empty() {
        let _ = writeln!(out, "       {}", first_line(&item.description));
    }
    if let Some(tags) = item.tags.as_ref().filter(|tags| !tags.is_empty()) {
        let shown: Vec<_> = tags.iter().take(MAX_TAGS).map(String::as_str).collect();
        let _ = writeln!(out, "       tags: {}", shown.join(", "));
    }
    if !item.url.is_empty() {
        let _ = writeln!(out, "       {}", item.url);
    }
}

fn first_line(text: &str) -> &str {
    text.lines().next().unwrap_or(text).trim()
}
