//! `linexplain history`: print a session's stored messages.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use comfy_table::{Cell, Color, ContentArrangement, Table, presets};
use console::style;

use linexplain_core::repository::history::HistoryRepository;
use linexplain_infra::sqlite::history::SqliteHistoryRepository;
use linexplain_infra::sqlite::pool::DatabasePool;
use linexplain_types::chat::{HistoryEntry, MessageRole, SessionId};

/// Longest content shown in a table cell before it is cut.
const PREVIEW_CHARS: usize = 120;

/// Print every message of a session, oldest first.
///
/// # Examples
///
/// ```bash
/// linexplain history 9b2f0c1e-4d7a-4c1b-8f55-0a1d2e3f4a5b
/// linexplain history 9b2f0c1e-4d7a-4c1b-8f55-0a1d2e3f4a5b --json
/// ```
pub async fn show_history(pool: DatabasePool, session_id: &str, json: bool) -> Result<()> {
    let session_id = SessionId::parse(session_id).map_err(anyhow::Error::msg)?;
    let repo = SqliteHistoryRepository::new(pool);

    let messages = repo
        .list_by_session(&session_id)
        .await
        .with_context(|| format!("failed to load history for session '{session_id}'"))?;

    if json {
        let entries: Vec<HistoryEntry> = messages.into_iter().map(HistoryEntry::from).collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    if messages.is_empty() {
        println!();
        println!(
            "  {} No messages stored for session '{}'.",
            style("i").blue().bold(),
            style(&session_id).cyan()
        );
        println!();
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("Time").fg(Color::White),
        Cell::new("Role").fg(Color::White),
        Cell::new("Content").fg(Color::White),
    ]);

    for message in &messages {
        let role_cell = match message.role {
            MessageRole::User => Cell::new("user").fg(Color::Cyan),
            MessageRole::Assistant => Cell::new("assistant").fg(Color::Green),
            MessageRole::System => Cell::new("system").fg(Color::DarkGrey),
        };

        table.add_row(vec![
            Cell::new(format_timestamp(message.timestamp)).fg(Color::DarkGrey),
            role_cell,
            Cell::new(preview(&message.content)),
        ]);
    }

    println!();
    println!("  History for session '{}'", style(&session_id).cyan().bold());
    println!();
    println!("{table}");
    println!();
    println!(
        "  {} message{}",
        style(messages.len()).bold(),
        if messages.len() == 1 { "" } else { "s" }
    );
    println!();

    Ok(())
}

fn format_timestamp(ms: i64) -> String {
    DateTime::<Utc>::from_timestamp_millis(ms)
        .map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| ms.to_string())
}

fn preview(content: &str) -> String {
    if content.chars().count() <= PREVIEW_CHARS {
        return content.to_string();
    }
    let cut: String = content.chars().take(PREVIEW_CHARS - 3).collect();
    format!("{cut}...")
}
