//! CLI command implementations.

pub mod render;
pub mod validate;

use anyhow::{bail, Result};
use chrono::{DateTime, Utc};
use clap::Args;
use stride_catalog::listing::parse_release_date;

use crate::context::Context;

/// Arguments for the render command.
#[derive(Args)]
pub struct RenderArgs {
    /// Path to the catalog JSON file.
    pub catalog: String,

    /// Write the page to a file instead of stdout.
    #[arg(short, long)]
    pub output: Option<String>,

    /// Page title (overrides the config default).
    #[arg(long)]
    pub title: Option<String>,

    /// Fix the instant used for variant selection (RFC 3339 or YYYY-MM-DD).
    #[arg(long)]
    pub now: Option<String>,
}

/// Arguments for the validate command.
#[derive(Args)]
pub struct ValidateArgs {
    /// Path to the catalog JSON file.
    pub catalog: String,

    /// Fix the instant used for the variant summary (RFC 3339 or YYYY-MM-DD).
    #[arg(long)]
    pub now: Option<String>,
}

/// Resolve the variant-selection instant from a `--now` flag.
pub fn resolve_now(raw: Option<&str>) -> Result<DateTime<Utc>> {
    match raw {
        Some(s) => match parse_release_date(s) {
            Some(now) => Ok(now),
            None => bail!("Invalid --now value: {} (expected RFC 3339 or YYYY-MM-DD)", s),
        },
        None => Ok(Utc::now()),
    }
}

/// Warn about release dates the lenient parser dropped.
pub fn warn_unreadable_dates(json: &str, ctx: &Context) {
    let entries = match serde_json::from_str::<serde_json::Value>(json) {
        Ok(serde_json::Value::Array(entries)) => entries,
        _ => return,
    };

    for entry in &entries {
        let value = match entry.get("release_date") {
            Some(value) if !value.is_null() => value,
            _ => continue,
        };
        let readable = value
            .as_str()
            .map_or(false, |raw| parse_release_date(raw).is_some());
        if !readable {
            let slug = entry
                .get("slug")
                .and_then(|v| v.as_str())
                .unwrap_or("<unknown>");
            ctx.output.warn(&format!(
                "Listing '{}' has an unreadable release_date {}, treating it as not new",
                slug, value
            ));
        }
    }
}
