//! # Effective Geometry
//!
//! The rectangle an item *stores* is not always the rectangle that should
//! take part in collisions. A folded item only occupies its header strip. In
//! modern mode an unfolded movable item lets its header hang over whatever
//! is above it. A locked headed item, when pixel metrics are known, claims
//! a little extra room for its visual padding.
//!
//! Every function here is pure; the collision mode is passed in explicitly.

use crate::config::CollisionMode;
use crate::model::{Item, PixelMetrics};

use super::header::{content_only_height, header_height};

/// Vertical padding (top + bottom) drawn around locked, headed items, in pixels.
const LOCKED_PADDING_PX: f64 = 16.0;

/// An axis-aligned rectangle in grid units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    /// Strict overlap: rectangles that only share an edge do not intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.x + other.w
            && self.x + self.w > other.x
            && self.y < other.y + other.h
            && self.y + self.h > other.y
    }

    pub fn right(&self) -> f64 {
        self.x + self.w
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.h
    }
}

/// Width never depends on fold or header state.
pub fn effective_width(item: &Item) -> f64 {
    item.w
}

/// Height used for collision math under the given mode.
pub fn effective_height(item: &Item, mode: CollisionMode, metrics: Option<&PixelMetrics>) -> f64 {
    if !item.has_fold_state() {
        return item.h;
    }
    if item.is_folded() {
        return header_height(item, metrics);
    }

    match mode {
        // Locked or headed, the stored height already covers header + content.
        CollisionMode::Legacy => item.h,
        CollisionMode::Modern => {
            if item.movable {
                return content_only_height(item);
            }
            match metrics {
                Some(metrics) => item.h + LOCKED_PADDING_PX / metrics.height,
                None => item.h,
            }
        }
    }
}

/// The item's rectangle with effective width and height.
pub fn effective_rect(item: &Item, mode: CollisionMode, metrics: Option<&PixelMetrics>) -> Rect {
    Rect {
        x: item.x,
        y: item.y,
        w: effective_width(item),
        h: effective_height(item, mode, metrics),
    }
}

/// A copy of the item carrying its effective dimensions.
pub fn effective_item(item: &Item, mode: CollisionMode, metrics: Option<&PixelMetrics>) -> Item {
    Item {
        w: effective_width(item),
        h: effective_height(item, mode, metrics),
        ..item.clone()
    }
}

/// The content region of the effective rectangle: the header strip is cut
/// off the top.
pub fn body_rect(item: &Item, mode: CollisionMode, metrics: Option<&PixelMetrics>) -> Rect {
    let rect = effective_rect(item, mode, metrics);
    let header = header_height(item, metrics);
    Rect {
        y: rect.y + header,
        h: rect.h - header,
        ..rect
    }
}
