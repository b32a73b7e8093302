// src/sort/column.rs
use std::{cmp::Ordering, fmt, str::FromStr};

/// The sortable dimensions of a tracklist.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Column {
    Track,
    Duration,
    Listeners,
    Plays,
}

impl Column {
    pub const ALL: [Column; 4] = [Column::Track, Column::Duration, Column::Listeners, Column::Plays];

    /// Stable identifier used on the command line and in logs.
    pub fn id(self) -> &'static str {
        match self {
            Column::Track     => "track",
            Column::Duration  => "duration",
            Column::Listeners => "listeners",
            Column::Plays     => "plays",
        }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Column {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "track"     => Ok(Column::Track),
            "duration"  => Ok(Column::Duration),
            "listeners" => Ok(Column::Listeners),
            "plays"     => Ok(Column::Plays),
            other => Err(format!("Unknown column: {}", other)),
        }
    }
}

/// Sort direction. `sign()` gives the +1 / -1 multiplier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Ascending,
    Descending,
}

impl Direction {
    pub fn sign(self) -> i64 {
        match self {
            Direction::Ascending  => 1,
            Direction::Descending => -1,
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            Direction::Ascending  => Direction::Descending,
            Direction::Descending => Direction::Ascending,
        }
    }

    /// Orient an ascending comparison result.
    pub fn apply(self, ord: Ordering) -> Ordering {
        match self {
            Direction::Ascending  => ord,
            Direction::Descending => ord.reverse(),
        }
    }

    /// Header arrow for the GUI.
    pub fn arrow(self) -> &'static str {
        match self {
            Direction::Ascending  => "▲",
            Direction::Descending => "▼",
        }
    }
}
