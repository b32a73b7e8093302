// src/sort/reorder.rs
//! What the engine needs from a table, and the detach/sort/re-append step.
//!
//! Rows are moved, never cloned: whatever a row carries (ids, links,
//! fetched data) comes back out of the sort unchanged.

use std::cmp::Ordering;

/// A row the engine can read keys from and band.
pub trait TableRow {
    /// Text of the cell carrying `class`, if the row has one.
    fn cell_text(&self, class: &str) -> Option<&str>;

    fn has_class(&self, class: &str) -> bool;
    fn add_class(&mut self, class: &str);
    fn remove_class(&mut self, class: &str);
}

/// An ordered, mutable sequence of rows (a `<tbody>`).
pub trait RowContainer {
    type Row: TableRow;

    /// Current rows, in order.
    fn rows(&self) -> &[Self::Row];
    fn rows_mut(&mut self) -> &mut [Self::Row];

    /// Take every row out, leaving the container empty.
    fn detach_rows(&mut self) -> Vec<Self::Row>;

    fn append_row(&mut self, row: Self::Row);
}

/// Stable-sort the container's rows with `compare` and put them back.
pub fn reorder<C, F>(container: &mut C, compare: F)
where
    C: RowContainer + ?Sized,
    F: Fn(&C::Row, &C::Row) -> Ordering,
{
    let mut rows = container.detach_rows();
    if rows.is_empty() {
        return;
    }
    // `sort_by` is stable
    rows.sort_by(|a, b| compare(a, b));
    for row in rows {
        container.append_row(row);
    }
}
