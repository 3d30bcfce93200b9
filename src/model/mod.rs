//! # Layout Model
//!
//! The input representation for the grid engine. A layout is a flat list of
//! items, each a rectangle in grid units with a few capability flags. Items
//! that belong to a page may also carry fold and header state: a header
//! strip with a title, and the ability to collapse down to that strip.
//!
//! Rather than two overlapping item shapes, there is a single [`Item`] with
//! explicit optional fields. An item with neither `folded` nor `headed` set
//! is a plain layout item, and the geometry rules treat it as such.

use serde::{Deserialize, Serialize};

use crate::config::EngineConfig;
use crate::error::GridError;

/// A rectangular region placed on the grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Unique within a list.
    pub id: String,

    /// Column of the left edge, in grid units.
    #[serde(default)]
    pub x: f64,
    /// Row of the top edge, in grid units.
    #[serde(default)]
    pub y: f64,
    /// Width in grid units.
    #[serde(default = "default_extent")]
    pub w: f64,
    /// Height in grid units. Fractional while the item is folded.
    #[serde(default = "default_extent")]
    pub h: f64,

    /// Lower size bound applied when snapping a resize.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<Size>,
    /// Upper size bound applied when snapping a resize.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<Size>,

    #[serde(default)]
    pub movable: bool,
    #[serde(default = "default_true")]
    pub resizable: bool,
    /// Hidden items are skipped by every collision and placement computation.
    #[serde(default = "default_true")]
    pub visible: bool,

    /// Whether only the header strip is shown.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub folded: Option<bool>,
    /// Height to restore when the item is unfolded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nfh: Option<f64>,
    /// Forces the header strip on even when the item is not movable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headed: Option<bool>,
    /// Title shown in the header; its length drives the header height.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

fn default_extent() -> f64 {
    1.0
}

fn default_true() -> bool {
    true
}

impl Item {
    /// A plain layout item with no fold or header state.
    pub fn new(id: impl Into<String>, x: f64, y: f64, w: f64, h: f64) -> Self {
        Item {
            id: id.into(),
            x,
            y,
            w,
            h,
            min: None,
            max: None,
            movable: false,
            resizable: true,
            visible: true,
            folded: None,
            nfh: None,
            headed: None,
            name: None,
        }
    }

    /// A page item: an item that carries fold and header state.
    pub fn page(id: impl Into<String>, name: impl Into<String>, x: f64, y: f64, w: f64, h: f64) -> Self {
        Item {
            folded: Some(false),
            headed: Some(false),
            name: Some(name.into()),
            ..Item::new(id, x, y, w, h)
        }
    }

    pub fn with_movable(mut self, movable: bool) -> Self {
        self.movable = movable;
        self
    }

    pub fn with_headed(mut self, headed: bool) -> Self {
        self.headed = Some(headed);
        self
    }

    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    pub fn with_folded(mut self, folded: bool) -> Self {
        self.folded = Some(folded);
        self
    }

    /// A header strip is shown iff the item is headed or movable.
    pub fn has_visible_header(&self) -> bool {
        self.headed == Some(true) || self.movable
    }

    pub fn is_folded(&self) -> bool {
        self.folded == Some(true)
    }

    pub fn is_hidden(&self) -> bool {
        !self.visible
    }

    /// True for page items. Plain layout items set neither `folded` nor `headed`.
    pub fn has_fold_state(&self) -> bool {
        self.folded.is_some() || self.headed.is_some()
    }

    /// The text the header displays: the name, else the id, else a placeholder.
    pub fn label(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ if !self.id.is_empty() => self.id.as_str(),
            _ => "Item",
        }
    }

    /// Reject geometry the engine does not handle.
    ///
    /// The core algorithms assume positive, finite sizes and never check;
    /// callers run this on untrusted input before handing it over.
    pub fn validate(&self) -> Result<(), GridError> {
        let invalid = |reason: &str| GridError::InvalidItem {
            id: self.id.clone(),
            reason: reason.to_string(),
        };
        if !(self.x.is_finite() && self.y.is_finite()) {
            return Err(invalid("position must be finite"));
        }
        if !(self.w.is_finite() && self.w > 0.0) {
            return Err(invalid("width must be positive"));
        }
        if !(self.h.is_finite() && self.h > 0.0) {
            return Err(invalid("height must be positive"));
        }
        if self.x < 0.0 || self.y < 0.0 {
            return Err(invalid("position must not be negative"));
        }
        Ok(())
    }
}

/// Validate every item and check that ids are unique.
pub fn validate_items(items: &[Item]) -> Result<(), GridError> {
    let mut seen = std::collections::HashSet::new();
    for item in items {
        item.validate()?;
        if !seen.insert(item.id.as_str()) {
            return Err(GridError::DuplicateId(item.id.clone()));
        }
    }
    Ok(())
}

/// A position in grid units.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// A size in grid units.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub w: f64,
    pub h: f64,
}

/// Size of one grid cell in pixels.
///
/// Optional everywhere. When present it sharpens header height estimates
/// and the visual padding of locked, headed items.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PixelMetrics {
    pub width: f64,
    pub height: f64,
}

/// Extent of the occupied grid.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GridDimensions {
    pub cols: f64,
    pub rows: f64,
}

/// A layout as read from JSON: engine configuration plus the item list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutDocument {
    #[serde(default)]
    pub config: EngineConfig,
    #[serde(default)]
    pub items: Vec<Item>,
}
