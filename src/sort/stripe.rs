// src/sort/stripe.rs
use crate::config::consts::{STRIPE_FIRST, STRIPE_LAST, STRIPE_ODD};

use super::reorder::TableRow;

/// Recompute banding after a reorder: `odd` on every other row starting
/// with the first, plus `first` / `last` on the ends.
pub fn restripe<R: TableRow>(rows: &mut [R]) {
    for (i, row) in rows.iter_mut().enumerate() {
        row.remove_class(STRIPE_FIRST);
        row.remove_class(STRIPE_LAST);
        row.remove_class(STRIPE_ODD);

        if i % 2 == 0 {
            row.add_class(STRIPE_ODD);
        }
    }
    if let Some(first) = rows.first_mut() {
        first.add_class(STRIPE_FIRST);
    }
    if let Some(last) = rows.last_mut() {
        last.add_class(STRIPE_LAST);
    }
}
