use anyhow::Result;
use calvis_core::config::CalvisConfig;
use calvis_core::{TimeInterval, first_overlap};
use owo_colors::OwoColorize;

use crate::render::{Render, format_timestamp};

pub fn run(
    config: &CalvisConfig,
    rule: &str,
    start: i64,
    end: i64,
    from: Option<&str>,
    to: Option<&str>,
) -> Result<()> {
    let window = super::resolve_window(config, from, to)?;
    let event_time = TimeInterval::new(start, end);

    println!("{} {}", "Window:".dimmed(), window.render());

    // Unlike the filter path, show why a rule failed
    match first_overlap(rule, event_time, window) {
        Ok(Some((occurrence, kind))) => {
            println!(
                "{} {} ({})",
                "Occurs".green().bold(),
                format_timestamp(occurrence.start),
                kind.render()
            );
        }
        Ok(None) => println!("{}", "Does not occur in window".dimmed()),
        Err(e) => println!("{} {}", "Does not occur in window:".red(), e),
    }

    Ok(())
}
