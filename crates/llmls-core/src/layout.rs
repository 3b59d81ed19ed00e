//! Pure text-layout helpers for the renderers.
//!
//! Everything here operates on strings and numbers only; terminal
//! interaction lives in the CLI crate.

use chrono::{Local, TimeZone};

/// Fold all line-break sequences (`\r\n`, `\r`, `\n`) to single spaces.
fn fold_newlines(text: &str) -> String {
    text.replace("\r\n", " ").replace(['\r', '\n'], " ")
}

/// Truncate `text` to at most `max_chars` characters, appending `".."`
/// when cut.
///
/// Line breaks are folded to spaces first. Operates on `char`
/// boundaries so multi-byte characters are never split.
#[must_use]
pub fn truncate(text: &str, max_chars: usize) -> String {
    let folded = fold_newlines(text);
    if folded.chars().count() <= max_chars {
        return folded;
    }
    let mut cut: String = folded.chars().take(max_chars).collect();
    cut.push_str("..");
    cut
}

/// Greedy word-wrap of `text` to lines of at most `width` characters.
///
/// Line breaks are folded to spaces and words are joined by single
/// spaces. A single word longer than `width` occupies its own
/// (overflowing) line rather than being split. Empty input yields no
/// lines.
#[must_use]
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let folded = fold_newlines(text);
    let mut words = folded.split_whitespace();

    let Some(first) = words.next() else {
        return Vec::new();
    };

    let mut lines = Vec::new();
    let mut current = first.to_string();

    for word in words {
        if current.chars().count() + 1 + word.chars().count() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(current);
            current = word.to_string();
        }
    }
    lines.push(current);

    lines
}

/// Format an integer with `,` thousands separators.
#[must_use]
pub fn format_count(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Convert a raw per-token price string to a per-1K-token display price.
///
/// The literal strings `""` and `"0"` render as `"0"`. Otherwise the
/// value is parsed as a float (parse failure counts as zero), multiplied
/// by 1000, and rendered with precision scaled to magnitude: 3 decimals
/// at >= 1, 4 at >= 0.01, 6 below that.
#[must_use]
pub fn format_price(raw: &str) -> String {
    if raw.is_empty() || raw == "0" {
        return "0".to_string();
    }

    let per_token: f64 = raw.parse().unwrap_or(0.0);
    let per_thousand = per_token * 1000.0;

    if per_thousand >= 1.0 {
        format!("{per_thousand:.3}")
    } else if per_thousand >= 0.01 {
        format!("{per_thousand:.4}")
    } else {
        format!("{per_thousand:.6}")
    }
}

/// Render an epoch-seconds timestamp as `YYYY-MM-DD` in the local
/// timezone.
#[must_use]
pub fn format_date(epoch_secs: i64) -> String {
    Local
        .timestamp_opt(epoch_secs, 0)
        .earliest()
        .map_or_else(|| "????-??-??".to_string(), |dt| dt.format("%Y-%m-%d").to_string())
}
