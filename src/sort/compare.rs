// src/sort/compare.rs
use std::cmp::Ordering;

use super::column::Direction;
use super::extract::ColumnDef;
use super::reorder::TableRow;

/// Comparator over rows for `def`'s key in direction `dir`.
/// Equal keys compare `Equal`, so a stable sort keeps their order.
pub fn make_compare<R: TableRow + ?Sized>(
    def: &ColumnDef,
    dir: Direction,
) -> impl Fn(&R, &R) -> Ordering + '_ {
    move |a, b| dir.apply(def.extract(a).cmp(&def.extract(b)))
}
