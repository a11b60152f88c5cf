//! Formatting helpers for presenting CMS values.

use time::{format_description::well_known::Rfc3339, macros::format_description, OffsetDateTime};

/// `2025-03-14T09:30:00.000Z` -> `Mar 14, 2025`. `None` when the timestamp is missing or unparsable.
pub fn format_posted_date(raw: Option<&str>) -> Option<String> {
    let parsed = OffsetDateTime::parse(raw?.trim(), &Rfc3339).ok()?;
    parsed
        .format(&format_description!(
            "[month repr:short] [day padding:none], [year]"
        ))
        .ok()
}

/// First character of a name, uppercased, for avatar placeholders.
pub fn initial(name: &str) -> String {
    name.trim()
        .chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_else(|| "?".to_string())
}
