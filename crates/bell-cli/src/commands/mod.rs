//! Command handler modules for bell-cli.
//!
//! Shared utilities used by multiple command paths live here.
//! Command-specific logic lives in the submodules.

pub mod catalog;
pub mod countdown;

use anyhow::{Context, Result};
use bell_config::ExchangeCatalog;
use chrono::{DateTime, Utc};

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

/// Layered catalog from `--config` paths, or the bundled catalog.
pub fn load_catalog(paths: &[String]) -> Result<ExchangeCatalog> {
    let refs: Vec<&str> = paths.iter().map(|s| s.as_str()).collect();
    bell_config::load_catalog_or_builtin(&refs)
}

/// Parse a CLI `--now` value (RFC 3339, any offset) into UTC.
pub fn parse_now(raw: &str) -> Result<DateTime<Utc>> {
    let dt = DateTime::parse_from_rfc3339(raw.trim()).with_context(|| {
        format!("invalid --now '{raw}'. expected RFC 3339, e.g. 2026-01-05T14:30:00Z")
    })?;
    Ok(dt.with_timezone(&Utc))
}
