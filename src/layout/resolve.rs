//! # Collision Resolution
//!
//! Re-flows a layout after one item changed shape (moved, resized, folded
//! or unfolded). The input list is never modified; a new list comes back.
//!
//! Strategies:
//! - **None**: overlaps are left as they are.
//! - **Push**: each item overlapping the changed one is dropped to just
//!   below it. Only first-order collisions move; a pushed item may land on
//!   a third item and stay there.
//! - **Compress**: gravity compaction of the whole grid. Items are visited
//!   top to bottom and floated upward as far as the items already settled
//!   allow. This can move items that have nothing to do with the change.
//!   Settling is stricter than collision: a settled item's whole effective
//!   rectangle is taken, header strip included, so nothing lands on a
//!   folded item's header.
//!
//! Hidden items never take part and are appended after the visible ones.

use crate::config::{CollisionMode, ResolveStrategy};
use crate::model::{Item, PixelMetrics};

use super::collision::collisions;
use super::geometry::{effective_height, effective_rect};

/// Re-flow `items` after the item with `changed_id` changed shape.
///
/// An unknown id, or a changed item that overlaps nothing, returns the
/// list as given.
pub fn resolve_after_shape_change(
    items: &[Item],
    changed_id: &str,
    strategy: ResolveStrategy,
    mode: CollisionMode,
    metrics: Option<&PixelMetrics>,
) -> Vec<Item> {
    let Some(changed) = items.iter().find(|item| item.id == changed_id) else {
        tracing::debug!(target: "pagegrid::resolve", id = changed_id, "changed_item_not_found");
        return items.to_vec();
    };

    let colliding: Vec<&str> = collisions(changed, items, mode, metrics)
        .into_iter()
        .map(|item| item.id.as_str())
        .collect();
    if colliding.is_empty() {
        return items.to_vec();
    }

    tracing::debug!(
        target: "pagegrid::resolve",
        id = changed_id,
        strategy = ?strategy,
        collisions = colliding.len(),
        "resolve"
    );

    match strategy {
        ResolveStrategy::None => items.to_vec(),
        ResolveStrategy::Compress => compress(items, mode, metrics),
        ResolveStrategy::Push => {
            let below = changed.y + effective_height(changed, mode, metrics);
            items
                .iter()
                .map(|item| {
                    let mut item = item.clone();
                    if colliding.contains(&item.id.as_str()) {
                        tracing::trace!(target: "pagegrid::resolve", id = %item.id, from_y = item.y, to_y = below, "push");
                        item.y = below;
                    }
                    item
                })
                .collect()
        }
    }
}

/// Gravity-compact every visible item upward.
///
/// Visible items are visited in `(y, x)` order. Each one rises a unit at a
/// time while it stays on the grid and clear of the items settled before
/// it. If it still overlaps a settled item where it stops, it sinks until
/// it is clear. Hidden items are appended unchanged.
///
/// No two visible effective rectangles overlap in the result.
pub fn compress(items: &[Item], mode: CollisionMode, metrics: Option<&PixelMetrics>) -> Vec<Item> {
    let (mut visible, hidden): (Vec<Item>, Vec<Item>) =
        items.iter().cloned().partition(|item| !item.is_hidden());
    visible.sort_by(|a, b| a.y.total_cmp(&b.y).then(a.x.total_cmp(&b.x)));

    let mut settled: Vec<Item> = Vec::with_capacity(items.len());
    for mut item in visible {
        let start_y = item.y;
        loop {
            let mut probe = item.clone();
            probe.y -= 1.0;
            if probe.y < 0.0 || occupied(&probe, &settled, mode, metrics) {
                break;
            }
            item = probe;
        }
        while occupied(&item, &settled, mode, metrics) {
            item.y += 1.0;
        }
        if item.y != start_y {
            tracing::trace!(target: "pagegrid::resolve", id = %item.id, from_y = start_y, to_y = item.y, "compress");
        }
        settled.push(item);
    }

    settled.extend(hidden);
    settled
}

/// Whether `item`'s effective rectangle overlaps any settled item's.
///
/// Bodies sit inside effective rectangles, so a clear position is also
/// collision-free.
fn occupied(item: &Item, settled: &[Item], mode: CollisionMode, metrics: Option<&PixelMetrics>) -> bool {
    let rect = effective_rect(item, mode, metrics);
    settled
        .iter()
        .any(|other| other.id != item.id && rect.intersects(&effective_rect(other, mode, metrics)))
}
