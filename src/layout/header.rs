//! # Header Metrics
//!
//! Estimates how tall an item's header strip is, in grid units, from the
//! length of its title and the width available to it. There is no real text
//! shaping here: a header is a fixed-height line box, and the only question
//! is how many lines the title wraps onto.
//!
//! Two estimators exist. Without pixel metrics we fall back to a coarse
//! character-count heuristic (about 100px per column, 8px per character).
//! With pixel metrics we measure against the actual cell size.

use crate::model::{Item, PixelMetrics};

/// Height of one header line in the heuristic estimator, in grid units.
const HEURISTIC_LINE_HEIGHT: f64 = 0.4;
/// Tallest header the heuristic estimator will report.
const HEURISTIC_MAX_HEIGHT: f64 = 1.6;
/// Assumed pixel width of a column when no metrics are known.
const HEURISTIC_COLUMN_WIDTH: f64 = 100.0;
/// Assumed pixel width of a character when no metrics are known.
const HEURISTIC_CHAR_WIDTH: f64 = 8.0;

/// Pixels reserved in the header for its buttons.
const RESERVED_BUTTON_WIDTH: f64 = 120.0;
/// Horizontal padding of the header, in pixels.
const HEADER_PADDING: f64 = 16.0;
const MIN_TEXT_WIDTH: f64 = 100.0;
const FONT_SIZE: f64 = 14.0;
const LINE_HEIGHT_PX: f64 = 20.0;
const MIN_HEADER_PX: f64 = 40.0;
/// Tallest header the measured estimator will report.
const MEASURED_MAX_HEIGHT: f64 = 2.0;

/// Folded items never shrink below this, or they would vanish.
pub const MIN_FOLDED_HEIGHT: f64 = 0.3;

/// Height of the item's header strip in grid units; 0 without a header.
pub fn header_height(item: &Item, metrics: Option<&PixelMetrics>) -> f64 {
    if !item.has_visible_header() {
        return 0.0;
    }

    let label_len = item.label().chars().count() as f64;

    let Some(metrics) = metrics else {
        let available = item.w * HEURISTIC_COLUMN_WIDTH - RESERVED_BUTTON_WIDTH - HEADER_PADDING;
        let chars_per_line = (available / HEURISTIC_CHAR_WIDTH).floor().max(10.0);
        if label_len <= chars_per_line {
            return HEURISTIC_LINE_HEIGHT;
        }
        let lines = (label_len / chars_per_line).ceil();
        return (lines * HEURISTIC_LINE_HEIGHT).min(HEURISTIC_MAX_HEIGHT);
    };

    let available = (item.w * metrics.width - RESERVED_BUTTON_WIDTH - HEADER_PADDING).max(MIN_TEXT_WIDTH);
    let avg_char_width = FONT_SIZE * 0.6;
    let chars_per_line = (available / avg_char_width).floor().max(5.0);
    let lines = (label_len / chars_per_line).ceil();

    let pixel_height = (lines * LINE_HEIGHT_PX + HEADER_PADDING).max(MIN_HEADER_PX);
    (pixel_height / metrics.height).min(MEASURED_MAX_HEIGHT)
}

/// Header height, or 0 when the item is neither headed nor movable.
pub fn header_only_height(item: &Item, metrics: Option<&PixelMetrics>) -> f64 {
    if !item.has_visible_header() {
        return 0.0;
    }
    header_height(item, metrics)
}

/// The part of `h` left for content once the header is taken out.
///
/// Always estimated without pixel metrics, floored at zero.
pub fn content_only_height(item: &Item) -> f64 {
    if item.has_visible_header() {
        (item.h - header_only_height(item, None)).max(0.0)
    } else {
        item.h
    }
}

/// Stored height of an item while it is folded: its header, with a floor.
pub fn optimal_folded_height(item: &Item, metrics: Option<&PixelMetrics>) -> f64 {
    header_height(item, metrics).max(MIN_FOLDED_HEIGHT)
}
