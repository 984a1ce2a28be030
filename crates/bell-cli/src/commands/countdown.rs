//! `bell countdown` and `bell watch`.

use std::time::Duration;

use anyhow::{bail, Context, Result};
use bell_calendar::{countdown_by_acronym, render_message, EventType};
use bell_config::ExchangeCatalog;
use chrono::Utc;
use tracing::{debug, info};

use super::parse_now;

pub fn run_countdown(
    catalog: &ExchangeCatalog,
    acronym: &str,
    now: Option<&str>,
    json: bool,
) -> Result<()> {
    let now = match now {
        Some(raw) => parse_now(raw)?,
        None => Utc::now(),
    };

    let result = countdown_by_acronym(catalog, acronym, now);
    debug!(
        acronym,
        event_type = result.event_type.as_str(),
        remaining_secs = ?result.remaining_secs,
        "countdown computed"
    );

    if json {
        let out = serde_json::to_string_pretty(&result).context("serialize countdown failed")?;
        println!("{out}");
    } else {
        println!("{}", render_message(&result));
    }
    Ok(())
}

/// Re-invokes the engine every `interval_ms`; the engine keeps no timer state.
///
/// Stops after `ticks` refreshes, on Ctrl-C, or immediately when the acronym
/// is unknown.
pub async fn run_watch(
    catalog: &ExchangeCatalog,
    acronym: &str,
    interval_ms: u64,
    ticks: Option<u64>,
) -> Result<()> {
    if interval_ms == 0 {
        bail!("--interval-ms must be > 0");
    }

    let mut interval = tokio::time::interval(Duration::from_millis(interval_ms));
    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    let mut printed: u64 = 0;
    loop {
        tokio::select! {
            _ = interval.tick() => {}
            _ = &mut ctrl_c => {
                info!(acronym, printed, "watch interrupted");
                return Ok(());
            }
        }

        let result = countdown_by_acronym(catalog, acronym, Utc::now());
        println!("{}", render_message(&result));
        printed += 1;

        if result.event_type == EventType::Unresolved {
            return Ok(());
        }
        if ticks.is_some_and(|limit| printed >= limit) {
            return Ok(());
        }
    }
}
