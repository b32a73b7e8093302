// src/sort/controller.rs
//! Sort controller: one `TableSorter` per table, one `SortBy` per header.
//!
//! ```text
//! header click → SortBy::fire → SortOrder::next_direction
//!                             → Registry::get → make_compare
//!                             → reorder → restripe
//! ```

use super::{
    column::{Column, Direction},
    compare::make_compare,
    extract::Registry,
    order::SortOrder,
    reorder::{reorder, RowContainer},
    stripe::restripe,
};

/// Registry plus direction memory for a single table.
#[derive(Clone, Debug)]
pub struct TableSorter {
    registry: Registry,
    order: SortOrder,
}

impl TableSorter {
    /// `initial` is the column the table already arrives sorted by.
    pub fn initialize(registry: Registry, initial: Column) -> Self {
        let order = SortOrder::seeded(&registry, initial);
        Self { registry, order }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Column the table is currently sorted by, and in which direction.
    pub fn current(&self) -> (Column, Direction) {
        let col = self.order.current();
        let dir = self
            .order
            .direction(col)
            .unwrap_or_else(|| self.registry.initial_direction(col));
        (col, dir)
    }

    /// One header click on `column`: pick the direction, sort, restripe.
    pub fn sort<C: RowContainer + ?Sized>(&mut self, container: &mut C, column: Column) -> Direction {
        let dir = self.order.next_direction(&self.registry, column);
        let def = self.registry.get(column);

        reorder(container, make_compare::<C::Row>(def, dir));
        restripe(container.rows_mut());

        logd!("Sort: {} {:?} ({} rows)", column, dir, container.rows().len());
        dir
    }
}

/// A header's click handler: the rows it sorts and the column it sorts by.
#[derive(Debug)]
pub struct SortBy<'a, C: ?Sized> {
    container: &'a mut C,
    column: Column,
}

/// Bind `column` to `container`.
pub fn attach<C: RowContainer + ?Sized>(container: &mut C, column: Column) -> SortBy<'_, C> {
    SortBy { container, column }
}

impl<C: RowContainer + ?Sized> SortBy<'_, C> {
    /// Run the click. Rows are read from the container on each call.
    pub fn fire(&mut self, sorter: &mut TableSorter) {
        sorter.sort(&mut *self.container, self.column);
    }
}
