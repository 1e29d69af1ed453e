pub mod check;
pub mod filter;

use anyhow::Result;
use calvis_core::TimeInterval;
use calvis_core::config::CalvisConfig;
use calvis_core::date_range::window_from_args;
use chrono::Utc;

/// Resolve the query window from CLI bounds, falling back to the configured range.
fn resolve_window(config: &CalvisConfig, from: Option<&str>, to: Option<&str>) -> Result<TimeInterval> {
    let window = window_from_args(from, to, config.default_range_days, Utc::now())?;
    tracing::debug!(?window, "Resolved query window");
    Ok(window)
}
