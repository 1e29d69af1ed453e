use std::path::Path;

use anyhow::{Context, Result};
use calvis_core::config::CalvisConfig;
use calvis_core::{RawEvent, visible_events};
use owo_colors::OwoColorize;

use crate::render::{Render, format_date_label, format_time};

pub fn run(
    config: &CalvisConfig,
    events_path: &Path,
    from: Option<&str>,
    to: Option<&str>,
    json: bool,
) -> Result<()> {
    let window = super::resolve_window(config, from, to)?;

    let content = std::fs::read_to_string(events_path)
        .with_context(|| format!("Could not read {}", events_path.display()))?;
    let events: Vec<RawEvent> = serde_json::from_str(&content)
        .with_context(|| format!("Could not parse events in {}", events_path.display()))?;

    let mut visible = visible_events(&events, &window);
    tracing::debug!(total = events.len(), visible = visible.len(), "Filtered events");

    if json {
        println!("{}", serde_json::to_string_pretty(&visible)?);
        return Ok(());
    }

    println!("{} {}", "Window:".dimmed(), window.render());

    if visible.is_empty() {
        println!("{}", "No events found".dimmed());
        return Ok(());
    }

    visible.sort_by_key(|v| v.occurrence.start);

    // Group events by day and print
    let mut current_date: Option<String> = None;

    for entry in &visible {
        let date_label = format_date_label(entry.occurrence.start);

        if current_date.as_ref() != Some(&date_label) {
            if current_date.is_some() {
                println!();
            }
            println!("{}", date_label.bold());
            current_date = Some(date_label);
        }

        let tag = if entry.event.is_recurring() {
            "[recurring]".dimmed().to_string()
        } else {
            String::new()
        };
        println!(
            "  {} {} {}",
            format_time(entry.occurrence.start),
            entry.event.display_name(),
            tag
        );
    }

    Ok(())
}
