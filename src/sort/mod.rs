// src/sort/mod.rs
//! # Sortable-table engine
//!
//! Clicking a column header sorts the tracklist by that column. The engine
//! knows nothing about HTML or egui; it works on anything implementing
//! [`RowContainer`] / [`TableRow`].
//!
//! - `extract` – column → cell class, key parser, initial direction.
//! - `order` – per-column direction memory (default, toggle, restore).
//! - `compare` – key + direction → comparator.
//! - `reorder` – stable detach/sort/re-append.
//! - `stripe` – `odd` / `first` / `last` banding.
//! - `controller` – wires the above to a header click.

pub mod column;
pub mod compare;
pub mod controller;
pub mod extract;
pub mod order;
pub mod reorder;
pub mod stripe;

pub use column::{Column, Direction};
pub use compare::make_compare;
pub use controller::{attach, SortBy, TableSorter};
pub use extract::{ColumnDef, Registry, MODEL};
pub use order::SortOrder;
pub use reorder::{reorder, RowContainer, TableRow};
pub use stripe::restripe;
