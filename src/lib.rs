//! # pagegrid
//!
//! A grid layout engine for pages made of rectangular, foldable items.
//!
//! Items live on an integer grid. Each one may carry a header strip (a title
//! bar) and may be folded down to just that strip. The engine answers the
//! questions a page editor keeps asking while the user drags, resizes and
//! folds things:
//!
//! - Which rectangle does this item *really* occupy, given its fold and
//!   header state?
//! - Does it overlap anything?
//! - Where is the first free spot for a new item?
//! - Something just changed shape: how should everything else move?
//!
//! ## Architecture
//!
//! ```text
//! Input (JSON/API)
//!       ↓
//!   [model]    — Items, sizes, positions, layout documents
//!       ↓
//!   [config]   — Collision mode, re-flow strategy, grid bounds
//!       ↓
//!   [layout]   — Geometry, collisions, placement, re-flow, folding
//!       ↓
//!   [units]    — Grid ↔ pixel conversion for the rendering side
//! ```
//!
//! All layout operations are pure: they take item slices and return new
//! values. Holding the authoritative list is the caller's job ([`store`]
//! offers a simple container for that).

pub mod config;
pub mod error;
pub mod layout;
pub mod model;
pub mod store;
pub mod units;

pub use error::GridError;

use config::ResolveStrategy;
use layout::LayoutEngine;
use model::{validate_items, Item, LayoutDocument, Position};

/// Parse and validate a layout document.
pub fn parse_document(json: &str) -> Result<LayoutDocument, GridError> {
    let document: LayoutDocument = serde_json::from_str(json)?;
    validate_items(&document.items)?;
    Ok(document)
}

/// Re-flow a JSON layout after `changed_id` changed shape.
///
/// Uses the strategy from the document's config unless one is given.
pub fn resolve_json(json: &str, changed_id: &str, strategy: Option<ResolveStrategy>) -> Result<Vec<Item>, GridError> {
    let document = parse_document(json)?;
    let engine = LayoutEngine::new(document.config);
    let strategy = strategy.unwrap_or(engine.config().strategy);
    Ok(engine.resolve_with(&document.items, changed_id, strategy))
}

/// Find the first free position for a `w` x `h` item in a JSON layout.
pub fn place_json(json: &str, w: f64, h: f64) -> Result<Option<Position>, GridError> {
    let document = parse_document(json)?;
    let engine = LayoutEngine::new(document.config);
    Ok(engine.first_available_position(w, h, &document.items))
}
