//! Plate + FIO extraction from freeform car lists.
//!
//! A car list is human-authored text with one vehicle per line, e.g.
//!
//! ```text
//! 1. Иванов Иван Иванович - А123ВС77
//! Водитель - Петров П.П. В 456 ОР 199 rus
//! ```
//!
//! Each line yields at most one [`Car`]. A line produces a car only when the
//! plate pattern matches; name text without a plate is dropped.

use regex::Regex;
use tracing::debug;

use crate::normalizer::plate_number;
use crate::types::Car;

/// Letter, 3 digits, 2 letters, 2–3 region digits, optional `rus`, with an
/// optional single space between the groups. Anything may follow.
const PLATE_PATTERN: &str =
    r"(\p{L}\s?[0-9]{3}\s?\p{L}{2}\s?[0-9]{2,3}\s?(?i:rus)?)\s?.*";

/// `1.` / `12.` list markers at the start of the remainder.
const LIST_MARKER_PATTERN: &str = r"^\s*(?:[0-9]+\.\s*)+";

/// Lines shorter than this many characters are noise.
pub const DEFAULT_MIN_LINE_LENGTH: usize = 15;

/// Stateless extractor; build once and share freely.
#[derive(Debug, Clone)]
pub struct PlateExtractor {
    plate: Regex,
    list_marker: Regex,
    min_line_length: usize,
}

impl Default for PlateExtractor {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_LINE_LENGTH)
    }
}

impl PlateExtractor {
    pub fn new(min_line_length: usize) -> Self {
        Self {
            plate: Regex::new(PLATE_PATTERN).expect("plate pattern is a valid regex"),
            list_marker: Regex::new(LIST_MARKER_PATTERN).expect("list marker pattern is a valid regex"),
            min_line_length,
        }
    }

    pub fn min_line_length(&self) -> usize {
        self.min_line_length
    }

    /// Extract every car from a multi-line list, preserving line order.
    pub fn extract(&self, text: &str) -> Vec<Car> {
        text.lines().filter_map(|line| self.extract_line(line)).collect()
    }

    /// Extract a car from one line, or `None` when the line is too short or
    /// carries no plate.
    pub fn extract_line(&self, line: &str) -> Option<Car> {
        if line.chars().count() < self.min_line_length {
            return None;
        }

        let Some(raw) = self.plate.captures(line).and_then(|caps| caps.get(1)) else {
            debug!(line, "no plate in car line, dropped");
            return None;
        };
        let raw = raw.as_str();

        let remainder = line.replace(raw, "");
        let names = self.driver_text(&remainder);

        Some(Car::new(plate_number(raw), names.split_whitespace()))
    }

    /// Clean the text left after the plate was cut out: list markers, the
    /// role/name dash, abbreviation dots.
    fn driver_text(&self, remainder: &str) -> String {
        let unmarked = self.list_marker.replace(remainder, "");
        after_dash(&unmarked).replace('.', "").trim().to_string()
    }
}

fn is_dash(c: char) -> bool {
    matches!(c, '-' | '–' | '—')
}

/// Text after the first dash. When nothing follows the dash it was separating
/// the name from a trailing plate, so the text before it is kept instead.
fn after_dash(text: &str) -> &str {
    let Some((pos, dash)) = text.char_indices().find(|&(_, c)| is_dash(c)) else {
        return text;
    };
    let (before, after) = (&text[..pos], &text[pos + dash.len_utf8()..]);
    if after.trim().is_empty() {
        before
    } else {
        after
    }
}
