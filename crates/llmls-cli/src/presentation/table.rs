//! Compact one-line-per-model table rendering.

use llmls_core::ModelRecord;
use llmls_core::layout::{format_date, truncate};

use super::term::{description_column_width, terminal_width};

/// Render records as table rows sized to `term_width`.
///
/// Column widths for ID and provider are the maximum observed across
/// the records being rendered, recomputed per call. Empty input yields
/// no rows (no header either).
#[must_use]
pub fn render_rows(records: &[ModelRecord], term_width: usize) -> Vec<String> {
    if records.is_empty() {
        return Vec::new();
    }

    let id_width = records
        .iter()
        .map(|r| r.id.chars().count())
        .max()
        .unwrap_or(0);
    let provider_width = records
        .iter()
        .map(|r| r.provider().chars().count())
        .max()
        .unwrap_or(0);
    let desc_width = description_column_width(term_width, id_width, provider_width);

    records
        .iter()
        .map(|record| {
            format!(
                "{:<id_width$} {:<provider_width$} {} {}",
                record.id,
                record.provider(),
                format_date(record.created),
                truncate(&record.description, desc_width),
            )
        })
        .collect()
}

/// Print the compact table to stdout.
pub fn print_compact(records: &[ModelRecord]) {
    for row in render_rows(records, terminal_width()) {
        println!("{row}");
    }
}
