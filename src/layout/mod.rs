//! # Grid Layout Engine
//!
//! The geometric core of pagegrid. Everything that decides where an item
//! sits, or whether two items overlap, lives under this module:
//!
//! ```text
//!   [header]     — how tall is an item's header strip?
//!       ↓
//!   [geometry]   — which rectangle takes part in collisions?
//!       ↓
//!   [collision]  — do two items' bodies overlap?
//!       ↓
//!   [placement]  — where is the first free cell?
//!   [resolve]    — how does the grid re-flow after a change?
//!
//!   [fold]       — fold / unfold an item (callers resolve afterwards)
//! ```
//!
//! The submodules are plain functions that take the collision mode and the
//! optional pixel metrics as arguments. [`LayoutEngine`] bundles those two
//! with the rest of an [`EngineConfig`], so that callers configure once and
//! then just pass items around. Two engines with different modes can live
//! side by side; nothing is process-global.

pub mod collision;
pub mod fold;
pub mod geometry;
pub mod header;
pub mod placement;
pub mod resolve;

use serde::Serialize;

use crate::config::{CollisionMode, EngineConfig, ResolveStrategy};
use crate::model::{GridDimensions, Item, PixelMetrics, Position};

/// A configured grid engine.
#[derive(Debug, Clone, Default)]
pub struct LayoutEngine {
    config: EngineConfig,
}

impl LayoutEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn collision_mode(&self) -> CollisionMode {
        self.config.collision_mode
    }

    /// Switch collision modes. Affects every later call on this engine.
    pub fn set_collision_mode(&mut self, mode: CollisionMode) {
        if self.config.collision_mode != mode {
            tracing::info!(target: "pagegrid::engine", from = %self.config.collision_mode, to = %mode, "collision_mode_changed");
        }
        self.config.collision_mode = mode;
    }

    pub fn set_strategy(&mut self, strategy: ResolveStrategy) {
        self.config.strategy = strategy;
    }

    fn metrics(&self) -> Option<&PixelMetrics> {
        self.config.cell_size.as_ref()
    }

    // ── Geometry ────────────────────────────────────────────────

    pub fn header_height(&self, item: &Item) -> f64 {
        header::header_height(item, self.metrics())
    }

    pub fn effective_height(&self, item: &Item) -> f64 {
        geometry::effective_height(item, self.config.collision_mode, self.metrics())
    }

    pub fn effective_item(&self, item: &Item) -> Item {
        geometry::effective_item(item, self.config.collision_mode, self.metrics())
    }

    // ── Collisions ──────────────────────────────────────────────

    pub fn is_colliding(&self, a: &Item, b: &Item) -> bool {
        collision::is_colliding(a, b, self.config.collision_mode, self.metrics())
    }

    pub fn collisions<'a>(&self, item: &Item, items: &'a [Item]) -> Vec<&'a Item> {
        collision::collisions(item, items, self.config.collision_mode, self.metrics())
    }

    pub fn has_collision(&self, item: &Item, items: &[Item]) -> bool {
        collision::has_collision(item, items, self.config.collision_mode, self.metrics())
    }

    // ── Placement ───────────────────────────────────────────────

    pub fn grid_dimensions(&self, items: &[Item]) -> GridDimensions {
        placement::grid_dimensions(items, self.config.collision_mode, self.metrics())
    }

    /// First free position for `item`, within the configured grid bounds.
    pub fn available_position(&self, item: &Item, items: &[Item]) -> Option<Position> {
        placement::available_position(
            item,
            items,
            self.config.max_cols,
            self.config.max_rows,
            self.config.collision_mode,
            self.metrics(),
        )
    }

    /// First free position for a new plain item of size `w` x `h`.
    pub fn first_available_position(&self, w: f64, h: f64, items: &[Item]) -> Option<Position> {
        let probe = Item::new("", 0.0, 0.0, w, h);
        self.available_position(&probe, items)
    }

    // ── Resolution ──────────────────────────────────────────────

    /// Re-flow after `changed_id` changed shape, using the configured strategy.
    pub fn resolve(&self, items: &[Item], changed_id: &str) -> Vec<Item> {
        self.resolve_with(items, changed_id, self.config.strategy)
    }

    pub fn resolve_with(&self, items: &[Item], changed_id: &str, strategy: ResolveStrategy) -> Vec<Item> {
        resolve::resolve_after_shape_change(items, changed_id, strategy, self.config.collision_mode, self.metrics())
    }

    pub fn compress(&self, items: &[Item]) -> Vec<Item> {
        resolve::compress(items, self.config.collision_mode, self.metrics())
    }

    // ── Folding ─────────────────────────────────────────────────

    pub fn toggle_folded(&self, item: &Item) -> Item {
        fold::toggle_folded(item, self.metrics())
    }

    pub fn set_folded(&self, item: &Item, folded: bool) -> Item {
        fold::set_folded(item, folded, self.metrics())
    }

    pub fn normalize_fold_state(&self, item: &Item) -> Item {
        fold::normalize_fold_state(item, self.metrics())
    }

    /// Snapshot of how the engine sees an item's height.
    pub fn inspect(&self, item: &Item) -> HeightReport {
        let has_header = item.has_visible_header();
        HeightReport {
            id: item.id.clone(),
            collision_mode: self.config.collision_mode,
            w: item.w,
            h: item.h,
            folded: item.is_folded(),
            headed: item.headed == Some(true),
            movable: item.movable,
            visible: item.visible,
            nfh: item.nfh,
            has_visible_header: has_header,
            header_height: has_header.then(|| self.header_height(item)),
            effective_height: self.effective_height(item),
            optimal_folded_height: item
                .is_folded()
                .then(|| header::optimal_folded_height(item, self.metrics())),
        }
    }
}

/// Serializable height breakdown for one item, for debugging layouts.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeightReport {
    pub id: String,
    pub collision_mode: CollisionMode,
    pub w: f64,
    pub h: f64,
    pub folded: bool,
    pub headed: bool,
    pub movable: bool,
    pub visible: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nfh: Option<f64>,
    pub has_visible_header: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header_height: Option<f64>,
    pub effective_height: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub optimal_folded_height: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_engine_is_legacy_unbounded() {
        let engine = LayoutEngine::default();
        assert_eq!(engine.collision_mode(), CollisionMode::Legacy);
        assert_eq!(engine.config().strategy, ResolveStrategy::None);
        assert!(engine.config().max_rows.is_none());
    }

    #[test]
    fn test_mode_switch_changes_effective_height() {
        let item = Item::page("a", "A", 0.0, 0.0, 2.0, 3.0).with_movable(true);
        let mut engine = LayoutEngine::default();
        assert_eq!(engine.effective_height(&item), 3.0);
        engine.set_collision_mode(CollisionMode::Modern);
        assert!((engine.effective_height(&item) - 2.6).abs() < 0.001);
    }

    #[test]
    fn test_engines_with_different_modes_coexist() {
        let legacy = LayoutEngine::default();
        let modern = LayoutEngine::new(EngineConfig {
            collision_mode: CollisionMode::Modern,
            ..Default::default()
        });
        let item = Item::page("a", "A", 0.0, 0.0, 2.0, 3.0).with_movable(true);
        assert_ne!(legacy.effective_height(&item), modern.effective_height(&item));
    }

    #[test]
    fn test_first_available_position_respects_bounds() {
        let engine = LayoutEngine::new(EngineConfig {
            max_cols: Some(4),
            ..Default::default()
        });
        let items = vec![Item::new("a", 0.0, 0.0, 4.0, 2.0)];
        assert_eq!(
            engine.first_available_position(2.0, 2.0, &items),
            Some(Position { x: 0.0, y: 2.0 })
        );
    }

    #[test]
    fn test_resolve_uses_configured_strategy() {
        let engine = LayoutEngine::new(EngineConfig {
            strategy: ResolveStrategy::Push,
            ..Default::default()
        });
        let items = vec![
            Item::new("a", 0.0, 0.0, 2.0, 2.0),
            Item::new("b", 0.0, 1.0, 2.0, 2.0),
        ];
        let out = engine.resolve(&items, "a");
        assert_eq!(out[1].y, 2.0);
    }

    #[test]
    fn test_inspect_folded_item() {
        let engine = LayoutEngine::default();
        let item = engine.toggle_folded(&Item::page("a", "A", 0.0, 0.0, 2.0, 5.0).with_headed(true));
        let report = engine.inspect(&item);
        assert!(report.folded);
        assert_eq!(report.nfh, Some(5.0));
        assert!((report.effective_height - 0.4).abs() < 0.001);
        assert!(report.optimal_folded_height.is_some());
    }

    #[test]
    fn test_inspect_serializes_camel_case() {
        let engine = LayoutEngine::default();
        let json = serde_json::to_string(&engine.inspect(&Item::new("a", 0.0, 0.0, 1.0, 1.0))).unwrap();
        assert!(json.contains("\"effectiveHeight\":1.0"));
        assert!(json.contains("\"collisionMode\":\"legacy\""));
        assert!(!json.contains("headerHeight"));
    }
}
