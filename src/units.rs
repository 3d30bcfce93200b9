//! # Grid ↔ Pixel Conversion
//!
//! Linear conversions between grid coordinates and pixels. A grid of cells
//! of size `cell` separated by `gap` pixels puts cell `c` at
//! `c * cell + (c + 1) * gap`, i.e. every cell is preceded by a gap
//! (including the first, which acts as an outer margin).
//!
//! The snap functions turn a pixel offset or size coming out of a drag or
//! resize into grid units, clamped so the item stays inside the grid.

use serde::Serialize;

use crate::layout::LayoutEngine;
use crate::model::{Item, PixelMetrics, Position, Size};

/// Pixel offset of grid coordinate `coordinate`.
pub fn coordinate_to_position(coordinate: f64, cell_size: f64, gap: f64) -> f64 {
    coordinate * cell_size + (coordinate + 1.0) * gap
}

/// Pixel length of a span of `coordinate` cells, counting inner gaps.
pub fn coordinate_to_size(coordinate: f64, cell_size: f64, gap: f64) -> f64 {
    coordinate * cell_size + (coordinate - 1.0) * gap
}

/// Nearest grid coordinate for a pixel offset.
pub fn position_to_coordinate(position: f64, cell_size: f64, gap: f64) -> f64 {
    (position / (cell_size + gap)).round()
}

/// Nearest span of cells for a pixel length.
pub fn size_to_coordinate(size: f64, cell_size: f64, gap: f64) -> f64 {
    position_to_coordinate(size + gap * 2.0, cell_size, gap)
}

/// Clamp that prefers `min` when the range is empty.
pub fn clamp(num: f64, min: f64, max: f64) -> f64 {
    num.min(max).max(min)
}

/// What the snap functions need to know about the grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapParams {
    pub cell_size: PixelMetrics,
    pub gap: f64,
    pub max_cols: Option<u32>,
    pub max_rows: Option<u32>,
}

impl SnapParams {
    /// Snap parameters from a configured engine; `None` without a cell size.
    pub fn from_engine(engine: &LayoutEngine) -> Option<Self> {
        let config = engine.config();
        config.cell_size.map(|cell_size| SnapParams {
            cell_size,
            gap: config.gap,
            max_cols: config.max_cols,
            max_rows: config.max_rows,
        })
    }

    fn max_cols(&self) -> f64 {
        self.max_cols.map_or(f64::INFINITY, f64::from)
    }

    fn max_rows(&self) -> f64 {
        self.max_rows.map_or(f64::INFINITY, f64::from)
    }
}

/// Grid position for an item dragged to pixel offset (`left`, `top`).
pub fn snap_on_move(left: f64, top: f64, item: &Item, params: &SnapParams) -> Position {
    let x = position_to_coordinate(left, params.cell_size.width, params.gap);
    let y = position_to_coordinate(top, params.cell_size.height, params.gap);

    Position {
        x: clamp(x, 0.0, params.max_cols() - item.w),
        y: clamp(y, 0.0, params.max_rows() - item.h),
    }
}

/// Grid size for an item resized to `width` x `height` pixels.
///
/// The item's own `min`/`max` limits apply before the grid bounds.
pub fn snap_on_resize(width: f64, height: f64, item: &Item, params: &SnapParams) -> Size {
    let mut w = size_to_coordinate(width, params.cell_size.width, params.gap);
    let mut h = size_to_coordinate(height, params.cell_size.height, params.gap);

    if let Some(min) = item.min {
        w = w.max(min.w);
        h = h.max(min.h);
    }
    if let Some(max) = item.max {
        w = w.min(max.w);
        h = h.min(max.h);
    }

    Size {
        w: clamp(w, 0.0, params.max_cols() - item.x),
        h: clamp(h, 0.0, params.max_rows() - item.y),
    }
}

/// An item's box in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PixelRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// An item's box in pixels, with its height split by role.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemPixelRect {
    #[serde(flatten)]
    pub rect: PixelRect,
    pub effective_height: f64,
    pub header_height: f64,
    pub content_height: f64,
}

pub fn calc_position(item: &Item, cell_size: &PixelMetrics, gap: f64) -> PixelRect {
    PixelRect {
        left: coordinate_to_position(item.x, cell_size.width, gap),
        top: coordinate_to_position(item.y, cell_size.height, gap),
        width: coordinate_to_size(item.w, cell_size.width, gap),
        height: coordinate_to_size(item.h, cell_size.height, gap),
    }
}

/// Pixel box of an item, accounting for its fold and header state.
///
/// Heights derived from the engine are estimated without pixel metrics, so
/// the numbers match the grid-unit values callers see elsewhere.
pub fn calc_item_position(engine: &LayoutEngine, item: &Item, cell_size: &PixelMetrics, gap: f64) -> ItemPixelRect {
    use crate::layout::{geometry, header};

    let mode = engine.collision_mode();
    let effective = geometry::effective_height(item, mode, None);
    let header_h = header::header_height(item, None);
    let content = header::content_only_height(item);

    ItemPixelRect {
        rect: calc_position(item, cell_size, gap),
        effective_height: effective * cell_size.height + (effective - 1.0) * gap,
        header_height: header_h * cell_size.height,
        content_height: if content > 0.0 {
            content * cell_size.height + (content - 1.0) * gap
        } else {
            0.0
        },
    }
}
