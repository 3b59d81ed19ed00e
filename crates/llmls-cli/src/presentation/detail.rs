//! Verbose per-model block rendering.

use llmls_core::ModelRecord;
use llmls_core::layout::{format_count, format_date, format_price, wrap};

use super::term::terminal_width;

/// Width of the separator rule framing each block.
const RULE_WIDTH: usize = 80;
/// Margin subtracted from the terminal width for wrapped descriptions.
const DESCRIPTION_MARGIN: usize = 4;
/// Wrapped descriptions never get narrower than this.
const MIN_WRAP_WIDTH: usize = 40;

/// Render one record as a labeled multi-line block.
///
/// Lines for optional fields are emitted only when the underlying value
/// is non-empty/non-zero; the extended section appears only for records
/// carrying local-server details.
#[must_use]
pub fn render_block(record: &ModelRecord, term_width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    lines.push("=".repeat(RULE_WIDTH));

    lines.push(format!("Model ID:          {}", record.id));
    lines.push(format!("Name:              {}", record.name));
    lines.push(format!("Provider:          {}", record.provider()));
    lines.push(format!("Created:           {}", format_date(record.created)));

    if let Some(context_length) = record.context_length {
        lines.push(format!(
            "Context Length:    {} tokens",
            format_count(context_length)
        ));
    }
    if let Some(max_completion) = record.max_completion_tokens {
        lines.push(format!(
            "Max Completion:    {} tokens",
            format_count(max_completion)
        ));
    }
    if let Some(modality) = &record.modality {
        lines.push(format!("Modality:          {modality}"));
    }

    if let Some(pricing) = &record.pricing {
        if !pricing.prompt.is_empty() && pricing.prompt != "0" {
            lines.push(format!(
                "Pricing:           ${} / 1K prompt tokens, ${} / 1K completion tokens",
                format_price(&pricing.prompt),
                format_price(&pricing.completion),
            ));
        }
    }

    if record.moderated {
        lines.push("Moderation:        Enabled".to_string());
    }

    if let Some(local) = &record.local {
        if !local.family.is_empty() {
            lines.push(format!("Model Family:      {}", local.family));
        }
        if !local.parameter_size.is_empty() {
            lines.push(format!("Parameter Size:    {}", local.parameter_size));
        }
        if !local.quantization.is_empty() {
            lines.push(format!("Quantization:      {}", local.quantization));
        }
        if !local.format.is_empty() {
            lines.push(format!("Format:            {}", local.format));
        }
        if local.size_bytes > 0 {
            #[allow(clippy::cast_precision_loss)] // display only
            let size_gb = local.size_bytes as f64 / (1024.0 * 1024.0 * 1024.0);
            lines.push(format!("Model Size:        {size_gb:.2} GB"));
        }
    }

    if !record.description.is_empty() {
        lines.push("Description:".to_string());
        let wrap_width = term_width
            .saturating_sub(DESCRIPTION_MARGIN)
            .max(MIN_WRAP_WIDTH);
        for line in wrap(&record.description, wrap_width) {
            lines.push(format!("  {line}"));
        }
    }

    lines.push("=".repeat(RULE_WIDTH));
    lines
}

/// Print verbose blocks for every record, blank-line separated.
pub fn print_detailed(records: &[ModelRecord]) {
    let term_width = terminal_width();
    for (i, record) in records.iter().enumerate() {
        if i > 0 {
            println!();
        }
        for line in render_block(record, term_width) {
            println!("{line}");
        }
    }
}
