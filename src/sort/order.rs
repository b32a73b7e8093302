// src/sort/order.rs
//! Per-column sort direction memory.
//!
//! First click on a column uses its initial direction, a repeated click on
//! the same column toggles, and coming back to a column after sorting by
//! another restores the direction it was last sorted in. Lives as long as
//! the table it belongs to.

use std::collections::HashMap;

use super::column::{Column, Direction};
use super::extract::Registry;

#[derive(Clone, Debug)]
pub struct SortOrder {
    memo: HashMap<Column, Direction>,
    last: Column,
}

impl SortOrder {
    /// Memory for a table that arrives already sorted by `initial`.
    /// The initial column counts as clicked once, so its next click toggles.
    pub fn seeded(registry: &Registry, initial: Column) -> Self {
        let mut memo = HashMap::new();
        memo.insert(initial, registry.initial_direction(initial));
        Self { memo, last: initial }
    }

    pub fn next_direction(&mut self, registry: &Registry, column: Column) -> Direction {
        let dir = match self.memo.get(&column).copied() {
            None => registry.initial_direction(column),
            Some(d) if column == self.last => d.flipped(),
            Some(d) => d,
        };
        self.memo.insert(column, dir);
        self.last = column;
        dir
    }

    /// Most recently acted-upon column.
    pub fn current(&self) -> Column {
        self.last
    }

    /// Last-used direction of `column`, `None` if never sorted.
    pub fn direction(&self, column: Column) -> Option<Direction> {
        self.memo.get(&column).copied()
    }
}
