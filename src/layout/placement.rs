//! # Placement
//!
//! Finds the first free cell for an item of a given shape. The scan is
//! row-major (top to bottom, then left to right within a row) over the
//! current grid extent, clamped to the grid's bounds when it has them. The
//! first position with no collisions wins; there is no search for a "best"
//! slot.
//!
//! When the scan comes up empty an unbounded grid simply grows: a new row
//! if rows are unbounded, else a new column. A grid bounded both ways is
//! full, and the caller gets `None`. Folded items make the extent
//! fractional, so the grown row or column is rounded up to a whole cell.

use crate::config::CollisionMode;
use crate::model::{GridDimensions, Item, PixelMetrics, Position};

use super::collision::has_collision;
use super::geometry::effective_rect;

/// Extent of the visible items' effective rectangles.
pub fn grid_dimensions(items: &[Item], mode: CollisionMode, metrics: Option<&PixelMetrics>) -> GridDimensions {
    items
        .iter()
        .filter(|item| !item.is_hidden())
        .map(|item| effective_rect(item, mode, metrics))
        .fold(GridDimensions::default(), |dims, rect| GridDimensions {
            cols: dims.cols.max(rect.right()),
            rows: dims.rows.max(rect.bottom()),
        })
}

/// First collision-free position for `item` among `items`.
pub fn available_position(
    item: &Item,
    items: &[Item],
    max_cols: Option<u32>,
    max_rows: Option<u32>,
    mode: CollisionMode,
    metrics: Option<&PixelMetrics>,
) -> Option<Position> {
    let GridDimensions { mut cols, mut rows } = grid_dimensions(items, mode, metrics);
    if let Some(max) = max_cols {
        cols = f64::from(max);
    }
    if let Some(max) = max_rows {
        rows = f64::from(max);
    }

    let mut candidate = item.clone();
    let mut y = 0.0;
    while y <= rows - item.h {
        let mut x = 0.0;
        while x <= cols - item.w {
            candidate.x = x;
            candidate.y = y;
            if !has_collision(&candidate, items, mode, metrics) {
                tracing::trace!(target: "pagegrid::placement", id = %item.id, x, y, "slot_found");
                return Some(Position { x, y });
            }
            x += 1.0;
        }
        y += 1.0;
    }

    let grown = match (max_cols, max_rows) {
        (_, None) => Some(Position { x: 0.0, y: rows.ceil() }),
        (None, Some(_)) => Some(Position { x: cols.ceil(), y: 0.0 }),
        (Some(_), Some(_)) => None,
    };
    tracing::debug!(target: "pagegrid::placement", id = %item.id, cols, rows, grown = ?grown, "scan_exhausted");
    grown
}

#[cfg(test)]
mod tests {
    use super::*;

    const LEGACY: CollisionMode = CollisionMode::Legacy;

    #[test]
    fn test_grid_dimensions_skip_hidden() {
        let items = vec![
            Item::new("a", 0.0, 0.0, 2.0, 3.0),
            Item::new("b", 2.0, 1.0, 1.0, 1.0),
            Item::new("c", 10.0, 10.0, 1.0, 1.0).with_visible(false),
        ];
        let dims = grid_dimensions(&items, LEGACY, None);
        assert_eq!(dims, GridDimensions { cols: 3.0, rows: 3.0 });
    }

    #[test]
    fn test_places_below_full_width_item() {
        let items = vec![Item::new("a", 0.0, 0.0, 4.0, 2.0)];
        let new_item = Item::new("n", 0.0, 0.0, 2.0, 2.0);
        let pos = available_position(&new_item, &items, Some(4), None, LEGACY, None);
        assert_eq!(pos, Some(Position { x: 0.0, y: 2.0 }));
    }

    #[test]
    fn test_finds_gap_in_row() {
        let items = vec![
            Item::new("a", 0.0, 0.0, 1.0, 1.0),
            Item::new("b", 2.0, 0.0, 1.0, 1.0),
        ];
        let new_item = Item::new("n", 0.0, 0.0, 1.0, 1.0);
        let pos = available_position(&new_item, &items, Some(3), Some(3), LEGACY, None);
        assert_eq!(pos, Some(Position { x: 1.0, y: 0.0 }));
    }

    #[test]
    fn test_empty_grid_bounded() {
        let new_item = Item::new("n", 0.0, 0.0, 2.0, 2.0);
        let pos = available_position(&new_item, &[], Some(4), Some(4), LEGACY, None);
        assert_eq!(pos, Some(Position { x: 0.0, y: 0.0 }));
    }

    #[test]
    fn test_unbounded_columns_grow_sideways() {
        let items = vec![Item::new("a", 0.0, 0.0, 2.0, 2.0)];
        let new_item = Item::new("n", 0.0, 0.0, 1.0, 2.0);
        let pos = available_position(&new_item, &items, None, Some(2), LEGACY, None);
        assert_eq!(pos, Some(Position { x: 2.0, y: 0.0 }));
    }

    #[test]
    fn test_full_grid_returns_none() {
        let items = vec![Item::new("a", 0.0, 0.0, 2.0, 2.0)];
        let new_item = Item::new("n", 0.0, 0.0, 1.0, 1.0);
        assert_eq!(available_position(&new_item, &items, Some(2), Some(2), LEGACY, None), None);
    }

    #[test]
    fn test_hidden_items_do_not_block() {
        let items = vec![Item::new("a", 0.0, 0.0, 2.0, 2.0).with_visible(false)];
        let new_item = Item::new("n", 0.0, 0.0, 2.0, 2.0);
        let pos = available_position(&new_item, &items, Some(2), Some(2), LEGACY, None);
        assert_eq!(pos, Some(Position { x: 0.0, y: 0.0 }));
    }

    #[test]
    fn test_grown_row_is_whole_cell_below_folded_item() {
        // The folded item only reaches y = 0.4.
        let folded = Item::page("a", "A", 0.0, 0.0, 2.0, 0.4).with_headed(true).with_folded(true);
        let new_item = Item::new("n", 0.0, 0.0, 2.0, 1.0);
        let pos = available_position(&new_item, &[folded], Some(2), None, LEGACY, None);
        assert_eq!(pos, Some(Position { x: 0.0, y: 1.0 }));
    }

    #[test]
    fn test_grown_column_is_whole_cell() {
        let folded = Item::page("a", "A", 0.0, 0.0, 2.0, 0.4).with_headed(true).with_folded(true);
        let wide = Item::new("b", 2.0, 1.0, 1.5, 1.0);
        let new_item = Item::new("n", 0.0, 0.0, 1.0, 2.0);
        let pos = available_position(&new_item, &[folded, wide], None, Some(2), LEGACY, None);
        assert_eq!(pos, Some(Position { x: 4.0, y: 0.0 }));
    }
}
