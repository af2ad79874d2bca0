//! Seat grid construction.
//!
//! The editor stores a plan as a row-major cell matrix. When the configured
//! row or column count changes, the matrix is rebuilt to the new bounds:
//! surplus cells are dropped, missing ones filled with blank seats, and
//! every cell restamped with its coordinates.

use crate::alpha;
use crate::models::{SeatItem, SeatLayout};

/// Rebuild the cell matrix of `layout` to exactly `rows x cols`.
///
/// Cells that survive the resize keep their id, state, kind, and tags; only
/// the `row`/`column` stamps are refreshed.
pub fn calc_items(layout: &SeatLayout) -> Vec<Vec<SeatItem>> {
    let mut items = layout.items.clone();
    items.truncate(layout.rows);
    items.resize_with(layout.rows, Vec::new);

    for (r, row) in items.iter_mut().enumerate() {
        row.truncate(layout.cols);
        row.resize_with(layout.cols, SeatItem::default);
        for (c, item) in row.iter_mut().enumerate() {
            item.row = Some(r);
            item.column = Some(c);
        }
    }
    items
}

/// Row header labels for `layout`, `"A"` through the last configured row.
pub fn row_keys(layout: &SeatLayout) -> Vec<String> {
    (0..layout.rows).map(alpha::encode).collect()
}

/// Column header labels, same alphabet as the rows.
pub fn col_keys(layout: &SeatLayout) -> Vec<String> {
    (0..layout.cols).map(alpha::encode).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_layout_yields_empty_matrix() {
        assert!(calc_items(&SeatLayout::default()).is_empty());
        assert!(row_keys(&SeatLayout::default()).is_empty());
    }
}
