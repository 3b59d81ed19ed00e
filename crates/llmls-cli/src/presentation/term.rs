//! Terminal metrics for column sizing.

use terminal_size::{Width, terminal_size};

/// Width assumed when the output device is not a terminal or cannot be
/// queried.
pub const DEFAULT_TERMINAL_WIDTH: usize = 120;

/// Fixed width of the date column (`YYYY-MM-DD`).
const DATE_WIDTH: usize = 10;
/// Three single-space separators between the four columns.
const COLUMN_SPACING: usize = 3;
/// Margin against terminals that count width conservatively.
const SAFETY_MARGIN: usize = 5;
/// Descriptions are never rendered narrower than this.
const MIN_DESCRIPTION_WIDTH: usize = 30;

/// Column count of the output terminal, or the fixed default.
#[must_use]
pub fn terminal_width() -> usize {
    terminal_size().map_or(DEFAULT_TERMINAL_WIDTH, |(Width(w), _)| usize::from(w))
}

/// Width available for the description column given the fixed-width
/// ID/provider/date columns and separators, clamped to a usable floor.
#[must_use]
pub fn description_column_width(term_width: usize, id_width: usize, provider_width: usize) -> usize {
    let used = id_width + provider_width + DATE_WIDTH + COLUMN_SPACING + SAFETY_MARGIN;
    term_width.saturating_sub(used).max(MIN_DESCRIPTION_WIDTH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_description_width_is_remainder() {
        // 120 - (40 + 12 + 10 + 3 + 5) = 50
        assert_eq!(description_column_width(120, 40, 12), 50);
    }

    #[test]
    fn test_description_width_floor() {
        assert_eq!(description_column_width(0, 40, 12), MIN_DESCRIPTION_WIDTH);
        assert_eq!(description_column_width(20, 40, 12), MIN_DESCRIPTION_WIDTH);
        assert_eq!(description_column_width(98, 40, 12), MIN_DESCRIPTION_WIDTH);
    }

    #[test]
    fn test_description_width_just_above_floor() {
        // 99 - 70 = 29 -> clamped; 101 - 70 = 31 -> kept
        assert_eq!(description_column_width(99, 40, 12), 30);
        assert_eq!(description_column_width(101, 40, 12), 31);
    }
}
