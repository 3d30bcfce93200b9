//! # Collision Detection
//!
//! Two items collide when their *bodies* overlap. The body is the effective
//! rectangle minus the header strip, so headers never block each other or
//! the content of a neighbor. Hidden items and an item compared against
//! itself (same id) never collide.
//!
//! The test is irreflexive and symmetric.

use crate::config::CollisionMode;
use crate::model::{Item, PixelMetrics};

use super::geometry::body_rect;

pub fn is_colliding(a: &Item, b: &Item, mode: CollisionMode, metrics: Option<&PixelMetrics>) -> bool {
    if a.is_hidden() || b.is_hidden() || a.id == b.id {
        return false;
    }
    body_rect(a, mode, metrics).intersects(&body_rect(b, mode, metrics))
}

/// Every item in `items` that collides with `item`.
pub fn collisions<'a>(
    item: &Item,
    items: &'a [Item],
    mode: CollisionMode,
    metrics: Option<&PixelMetrics>,
) -> Vec<&'a Item> {
    items
        .iter()
        .filter(|other| is_colliding(item, other, mode, metrics))
        .collect()
}

pub fn has_collision(item: &Item, items: &[Item], mode: CollisionMode, metrics: Option<&PixelMetrics>) -> bool {
    items.iter().any(|other| is_colliding(item, other, mode, metrics))
}

#[cfg(test)]
mod tests {
    use super::*;

    const LEGACY: CollisionMode = CollisionMode::Legacy;

    #[test]
    fn test_overlapping_items_collide() {
        let a = Item::new("a", 0.0, 0.0, 2.0, 2.0);
        let b = Item::new("b", 1.0, 1.0, 2.0, 2.0);
        assert!(is_colliding(&a, &b, LEGACY, None));
        assert!(is_colliding(&b, &a, LEGACY, None));
    }

    #[test]
    fn test_adjacent_items_do_not_collide() {
        let a = Item::new("a", 0.0, 0.0, 2.0, 2.0);
        let right = Item::new("b", 2.0, 0.0, 2.0, 2.0);
        let below = Item::new("c", 0.0, 2.0, 2.0, 2.0);
        assert!(!is_colliding(&a, &right, LEGACY, None));
        assert!(!is_colliding(&a, &below, LEGACY, None));
    }

    #[test]
    fn test_same_id_never_collides() {
        let a = Item::new("a", 0.0, 0.0, 2.0, 2.0);
        let moved = Item::new("a", 1.0, 0.0, 2.0, 2.0);
        assert!(!is_colliding(&a, &a, LEGACY, None));
        assert!(!is_colliding(&a, &moved, LEGACY, None));
    }

    #[test]
    fn test_hidden_never_collides() {
        let a = Item::new("a", 0.0, 0.0, 2.0, 2.0);
        let hidden = Item::new("b", 0.0, 0.0, 2.0, 2.0).with_visible(false);
        assert!(!is_colliding(&a, &hidden, LEGACY, None));
        assert!(!is_colliding(&hidden, &a, LEGACY, None));
    }

    #[test]
    fn test_header_overlap_is_not_a_collision() {
        // The header of `b` (0.4 tall) sits over the bottom of `a`.
        let a = Item::new("a", 0.0, 0.0, 2.0, 2.2);
        let b = Item::page("b", "B", 0.0, 2.0, 2.0, 2.0).with_movable(true);
        assert!(!is_colliding(&a, &b, LEGACY, None));
        assert!(!is_colliding(&b, &a, LEGACY, None));
    }

    #[test]
    fn test_collisions_and_has_collision() {
        let target = Item::new("t", 0.0, 0.0, 3.0, 1.0);
        let items = vec![
            Item::new("a", 0.0, 0.0, 1.0, 1.0),
            Item::new("b", 2.0, 0.0, 1.0, 1.0),
            Item::new("c", 0.0, 1.0, 1.0, 1.0),
            Item::new("t", 0.0, 0.0, 3.0, 1.0),
        ];
        let ids: Vec<&str> = collisions(&target, &items, LEGACY, None)
            .iter()
            .map(|i| i.id.as_str())
            .collect();
        assert_eq!(ids, vec!["a", "b"]);
        assert!(has_collision(&target, &items, LEGACY, None));
        assert!(!has_collision(&target, &items[2..], LEGACY, None));
    }

    #[test]
    fn test_symmetry_across_mixed_items() {
        let items = vec![
            Item::new("a", 0.0, 0.0, 2.0, 2.0),
            Item::page("b", "B", 1.0, 1.0, 2.0, 3.0).with_movable(true),
            Item::page("c", "C", 0.0, 1.5, 3.0, 0.4).with_headed(true).with_folded(true),
            Item::page("d", "D", 2.0, 0.0, 1.0, 4.0),
        ];
        for mode in [CollisionMode::Legacy, CollisionMode::Modern] {
            for a in &items {
                for b in &items {
                    assert_eq!(
                        is_colliding(a, b, mode, None),
                        is_colliding(b, a, mode, None),
                        "{} vs {} in {} mode",
                        a.id,
                        b.id,
                        mode
                    );
                }
            }
        }
    }
}
