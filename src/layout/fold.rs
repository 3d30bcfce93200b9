//! # Fold State Machine
//!
//! An item is either unfolded (header + content) or folded (header only).
//! Folding stashes the current height in `nfh` and shrinks the item to its
//! header; unfolding brings the stashed height back and clears `nfh` so a
//! later fold never restores a stale value.
//!
//! These functions return new items and never touch the surrounding
//! layout. Callers that want neighbors re-flowed run the resolver after.

use crate::model::{Item, PixelMetrics};

use super::header::optimal_folded_height;

/// Height restored on unfold when no usable stashed height exists.
pub const DEFAULT_UNFOLDED_HEIGHT: f64 = 3.0;

/// Flip an item between folded and unfolded.
pub fn toggle_folded(item: &Item, metrics: Option<&PixelMetrics>) -> Item {
    let mut next = item.clone();
    if item.is_folded() {
        next.h = match item.nfh {
            Some(nfh) if nfh > 1.0 => nfh,
            _ => DEFAULT_UNFOLDED_HEIGHT,
        };
        next.nfh = None;
        next.folded = Some(false);
    } else {
        next.nfh = Some(item.h);
        next.h = optimal_folded_height(item, metrics);
        next.folded = Some(true);
    }
    tracing::debug!(
        target: "pagegrid::fold",
        id = %item.id,
        folded = next.is_folded(),
        from_h = item.h,
        to_h = next.h,
        "toggle_folded"
    );
    next
}

/// Force a folded or unfolded state, toggling only when it differs.
pub fn set_folded(item: &Item, folded: bool, metrics: Option<&PixelMetrics>) -> Item {
    if item.is_folded() == folded {
        item.clone()
    } else {
        toggle_folded(item, metrics)
    }
}

/// Bring a stored item's height in line with its fold flag.
///
/// Layouts saved with `folded: true` may still carry the full height; this
/// moves it into `nfh`. An unfolded item that still holds a stashed height
/// gets it back.
pub fn normalize_fold_state(item: &Item, metrics: Option<&PixelMetrics>) -> Item {
    let mut next = item.clone();
    if item.is_folded() {
        let optimal = optimal_folded_height(item, metrics);
        if (item.h - optimal).abs() > f64::EPSILON {
            next.nfh = Some(item.h);
            next.h = optimal;
        }
    } else if let Some(nfh) = item.nfh.filter(|nfh| *nfh > 0.0) {
        next.h = nfh;
        next.nfh = None;
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movable(h: f64) -> Item {
        Item::page("a", "Card", 0.0, 0.0, 2.0, h).with_movable(true)
    }

    #[test]
    fn test_fold_then_unfold_round_trip() {
        let item = movable(5.0);
        let folded = toggle_folded(&item, None);
        assert!(folded.is_folded());
        assert!((folded.h - 0.4).abs() < 0.001);
        assert_eq!(folded.nfh, Some(5.0));

        let unfolded = toggle_folded(&folded, None);
        assert!(!unfolded.is_folded());
        assert_eq!(unfolded.h, 5.0);
        assert_eq!(unfolded.nfh, None);
    }

    #[test]
    fn test_unfold_small_stash_defaults() {
        let mut item = movable(0.4).with_folded(true);
        item.nfh = Some(1.0);
        assert_eq!(toggle_folded(&item, None).h, DEFAULT_UNFOLDED_HEIGHT);
        item.nfh = None;
        assert_eq!(toggle_folded(&item, None).h, DEFAULT_UNFOLDED_HEIGHT);
    }

    #[test]
    fn test_fold_without_header_uses_floor() {
        let locked = Item::page("a", "Card", 0.0, 0.0, 2.0, 4.0);
        let folded = toggle_folded(&locked, None);
        assert!((folded.h - 0.3).abs() < 0.001);
        assert_eq!(folded.nfh, Some(4.0));
    }

    #[test]
    fn test_toggle_does_not_mutate_input() {
        let item = movable(5.0);
        let _ = toggle_folded(&item, None);
        assert_eq!(item.h, 5.0);
        assert!(!item.is_folded());
    }

    #[test]
    fn test_set_folded_is_idempotent() {
        let item = movable(5.0);
        let once = set_folded(&item, true, None);
        let twice = set_folded(&once, true, None);
        assert_eq!(once, twice);
        assert_eq!(set_folded(&item, false, None), item);
    }

    #[test]
    fn test_normalize_folded_full_height() {
        let item = movable(6.0).with_folded(true);
        let normalized = normalize_fold_state(&item, None);
        assert_eq!(normalized.nfh, Some(6.0));
        assert!((normalized.h - 0.4).abs() < 0.001);
        assert_eq!(normalize_fold_state(&normalized, None), normalized);
    }

    #[test]
    fn test_normalize_unfolded_restores_stash() {
        let mut item = movable(0.4);
        item.nfh = Some(4.0);
        let normalized = normalize_fold_state(&item, None);
        assert_eq!(normalized.h, 4.0);
        assert_eq!(normalized.nfh, None);
    }
}
