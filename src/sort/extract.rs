// src/sort/extract.rs
//! Extractor registry: which cell holds a column's value, how to turn its
//! text into a sortable integer, and which way a column sorts on first click.
//!
//! Extraction never fails. A missing cell or unparsable text sorts as `0`,
//! so one malformed row cannot stop the rest of the table from sorting.

use super::column::{Column, Direction};
use super::reorder::TableRow;

/// Definition of one sortable column.
#[derive(Clone, Copy, Debug)]
pub struct ColumnDef {
    pub column: Column,
    /// Class of the header cell that acts as the sort trigger.
    pub header_class: &'static str,
    /// Class of the body cell the key is read from.
    pub cell_class: &'static str,
    pub parse: fn(&str) -> i64,
    pub initial: Direction,
}

impl ColumnDef {
    /// Sort key of `row` for this column.
    pub fn extract<R: TableRow + ?Sized>(&self, row: &R) -> i64 {
        row.cell_text(self.cell_class)
            .map(self.parse)
            .unwrap_or(0)
    }
}

/// The columns a Last.fm tracklist can be sorted by.
pub const MODEL: [ColumnDef; 4] = [
    ColumnDef {
        column: Column::Track,
        header_class: "subjectCell",
        cell_class: "positionCell",
        parse: parse_count,
        initial: Direction::Ascending,
    },
    ColumnDef {
        column: Column::Duration,
        header_class: "durationCell",
        cell_class: "durationCell",
        parse: parse_duration,
        initial: Direction::Ascending,
    },
    ColumnDef {
        column: Column::Listeners,
        header_class: "reachCell",
        cell_class: "reachCell",
        parse: parse_count,
        initial: Direction::Descending,
    },
    ColumnDef {
        column: Column::Plays,
        header_class: "playCount",
        cell_class: "playCount",
        parse: parse_count,
        initial: Direction::Descending,
    },
];

/// Immutable column lookup, built once per table.
#[derive(Clone, Debug)]
pub struct Registry {
    defs: Vec<ColumnDef>,
}

impl Registry {
    pub fn new(defs: Vec<ColumnDef>) -> Self {
        Self { defs }
    }

    /// The four standard tracklist columns.
    pub fn standard() -> Self {
        Self::new(MODEL.to_vec())
    }

    /// # Panics
    /// If `column` was not registered. That is a wiring mistake, not input.
    pub fn get(&self, column: Column) -> &ColumnDef {
        self.defs
            .iter()
            .find(|d| d.column == column)
            .unwrap_or_else(|| panic!("column `{}` is not registered", column))
    }

    pub fn initial_direction(&self, column: Column) -> Direction {
        self.get(column).initial
    }

    /// Column whose header cell carries `class`, if any.
    pub fn by_header_class(&self, class: &str) -> Option<&ColumnDef> {
        self.defs.iter().find(|d| d.header_class == class)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ColumnDef> {
        self.defs.iter()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::standard()
    }
}

/// Keep only the digits: "1,234 listeners" → 1234. No digits → 0.
pub fn parse_count(text: &str) -> i64 {
    let digits: String = text.chars().filter(|c| c.is_ascii_digit()).collect();
    digits.parse().unwrap_or(0)
}

/// First `minutes:seconds` in the text, in seconds: "3:05" → 185.
pub fn parse_duration(text: &str) -> i64 {
    let b = text.as_bytes();
    let mut i = 0;
    while i < b.len() {
        if b[i] == b':' {
            let mut s = i;
            while s > 0 && b[s - 1].is_ascii_digit() { s -= 1; }
            let mut e = i + 1;
            while e < b.len() && b[e].is_ascii_digit() { e += 1; }

            if s < i && e > i + 1 {
                let (Ok(minutes), Ok(seconds)) =
                    (text[s..i].parse::<i64>(), text[i + 1..e].parse::<i64>())
                else {
                    return 0;
                };
                return minutes.checked_mul(60).and_then(|m| m.checked_add(seconds)).unwrap_or(0);
            }
        }
        i += 1;
    }
    0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_strips_non_digits() {
        assert_eq!(parse_count("1,234 listeners"), 1234);
        assert_eq!(parse_count("  42 "), 42);
        assert_eq!(parse_count("#7"), 7);
    }

    #[test]
    fn count_without_digits_is_zero() {
        assert_eq!(parse_count(""), 0);
        assert_eq!(parse_count("n/a"), 0);
        assert_eq!(parse_count("99999999999999999999999999"), 0);
    }

    #[test]
    fn duration_minutes_seconds() {
        assert_eq!(parse_duration("3:05"), 185);
        assert_eq!(parse_duration("2:00"), 120);
        assert_eq!(parse_duration(" 4:10 "), 250);
        assert_eq!(parse_duration("12:34 (live)"), 754);
    }

    #[test]
    fn duration_without_pattern_is_zero() {
        assert_eq!(parse_duration(""), 0);
        assert_eq!(parse_duration("3 min"), 0);
        assert_eq!(parse_duration(":30"), 0);
        assert_eq!(parse_duration("4:"), 0);
        assert_eq!(parse_duration("99999999999999999999:05"), 0);
        assert_eq!(parse_duration("3:99999999999999999999"), 0);
    }

    #[test]
    fn registry_lookup() {
        let reg = Registry::standard();
        assert_eq!(reg.initial_direction(Column::Track), Direction::Ascending);
        assert_eq!(reg.initial_direction(Column::Duration), Direction::Ascending);
        assert_eq!(reg.initial_direction(Column::Listeners), Direction::Descending);
        assert_eq!(reg.initial_direction(Column::Plays), Direction::Descending);
        assert_eq!(reg.by_header_class("reachCell").map(|d| d.column), Some(Column::Listeners));
        assert!(reg.by_header_class("lovedCell").is_none());
    }

    #[test]
    #[should_panic(expected = "not registered")]
    fn unregistered_column_fails_fast() {
        let reg = Registry::new(vec![MODEL[0]]);
        reg.get(Column::Plays);
    }
}
