//! Engine configuration.
//!
//! Every setting has a default, so an empty JSON object (or a document with
//! no `config` key at all) yields a working engine: legacy collisions, no
//! automatic re-flow, and a grid that grows without bound.

use serde::{Deserialize, Serialize};

use crate::model::PixelMetrics;

/// Whether an item's header strip takes part in collision detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CollisionMode {
    /// Headers always count toward the collision footprint.
    #[default]
    Legacy,
    /// Unfolded movable items drop their header from the footprint, so the
    /// header may visually overlap a neighbor.
    #[serde(alias = "new")]
    Modern,
}

impl std::fmt::Display for CollisionMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CollisionMode::Legacy => write!(f, "legacy"),
            CollisionMode::Modern => write!(f, "modern"),
        }
    }
}

/// How the layout re-flows after an item changes shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ResolveStrategy {
    /// Leave overlaps in place.
    #[default]
    None,
    /// Move items directly colliding with the changed one below it.
    Push,
    /// Gravity-compact the whole grid upward.
    Compress,
}

impl std::str::FromStr for ResolveStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(ResolveStrategy::None),
            "push" => Ok(ResolveStrategy::Push),
            "compress" => Ok(ResolveStrategy::Compress),
            other => Err(format!("unknown strategy '{}'", other)),
        }
    }
}

/// Configuration owned by a [`crate::layout::LayoutEngine`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EngineConfig {
    pub collision_mode: CollisionMode,
    pub strategy: ResolveStrategy,
    /// Column bound; `None` lets the grid grow sideways.
    pub max_cols: Option<u32>,
    /// Row bound; `None` lets the grid grow downward.
    pub max_rows: Option<u32>,
    /// Cell size in pixels, when the caller knows it.
    pub cell_size: Option<PixelMetrics>,
    /// Gap between cells in pixels, used by the unit conversions.
    pub gap: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            collision_mode: CollisionMode::Legacy,
            strategy: ResolveStrategy::None,
            max_cols: None,
            max_rows: None,
            cell_size: None,
            gap: 10.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_gives_defaults() {
        let config: EngineConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn test_camel_case_fields() {
        let config: EngineConfig = serde_json::from_str(
            r#"{ "collisionMode": "new", "strategy": "push", "maxCols": 12, "cellSize": { "width": 100, "height": 50 } }"#,
        )
        .unwrap();
        assert_eq!(config.collision_mode, CollisionMode::Modern);
        assert_eq!(config.strategy, ResolveStrategy::Push);
        assert_eq!(config.max_cols, Some(12));
        assert_eq!(config.max_rows, None);
        assert_eq!(config.cell_size.map(|m| m.height), Some(50.0));
    }

    #[test]
    fn test_strategy_from_str() {
        assert_eq!("compress".parse::<ResolveStrategy>(), Ok(ResolveStrategy::Compress));
        assert!("shuffle".parse::<ResolveStrategy>().is_err());
    }
}
