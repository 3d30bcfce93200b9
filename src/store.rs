//! Item collections, one per page.
//!
//! [`PageItems`] holds the authoritative item list plus a backup of the list
//! it was initialized with, so a page can be reset after the user rearranged
//! it. Operations on unknown ids are silent no-ops. [`PageRegistry`] keys
//! several of them by page name.

use std::collections::HashMap;

use crate::config::ResolveStrategy;
use crate::layout::LayoutEngine;
use crate::model::Item;

#[derive(Debug, Clone, Default)]
pub struct PageItems {
    items: Vec<Item>,
    backup: Vec<Item>,
    /// Overrides the engine's strategy for this page.
    strategy: Option<ResolveStrategy>,
}

impl PageItems {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the list and the backup.
    ///
    /// Folded items stored with their full height are normalized so they
    /// occupy only their header.
    pub fn set_initial_items(&mut self, engine: &LayoutEngine, items: Vec<Item>) {
        self.items = items.iter().map(|item| engine.normalize_fold_state(item)).collect();
        self.backup = self.items.clone();
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn into_items(self) -> Vec<Item> {
        self.items
    }

    pub fn set_items(&mut self, items: Vec<Item>) {
        self.items = items;
    }

    pub fn hidden_items(&self) -> Vec<&Item> {
        self.items.iter().filter(|item| item.is_hidden()).collect()
    }

    pub fn get(&self, id: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn has_item(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn add_item(&mut self, item: Item) {
        self.items.push(item);
    }

    pub fn remove_item(&mut self, id: &str) {
        self.items.retain(|item| item.id != id);
    }

    /// Replace the item with the same id.
    pub fn update_item(&mut self, updated: Item) {
        if let Some(slot) = self.items.iter_mut().find(|item| item.id == updated.id) {
            *slot = updated;
        }
    }

    pub fn reset_to_backup(&mut self) {
        self.items = self.backup.clone();
    }

    /// Flip `movable`, or set it to `force` when given.
    pub fn swap_movable(&mut self, id: &str, force: Option<bool>) {
        if let Some(item) = self.items.iter_mut().find(|item| item.id == id) {
            item.movable = force.unwrap_or(!item.movable);
        }
    }

    pub fn swap_all_movable(&mut self, force: Option<bool>) {
        for item in &mut self.items {
            item.movable = force.unwrap_or(!item.movable);
        }
    }

    /// Fold or unfold one item, adjusting its height.
    pub fn swap_folded(&mut self, engine: &LayoutEngine, id: &str, force: Option<bool>) {
        if let Some(item) = self.items.iter_mut().find(|item| item.id == id) {
            *item = fold_to(engine, item, force);
        }
    }

    pub fn swap_all_folded(&mut self, engine: &LayoutEngine, force: Option<bool>) {
        for item in &mut self.items {
            *item = fold_to(engine, item, force);
        }
    }

    pub fn strategy(&self) -> Option<ResolveStrategy> {
        self.strategy
    }

    pub fn set_strategy(&mut self, strategy: Option<ResolveStrategy>) {
        self.strategy = strategy;
    }

    /// Re-flow the list after `changed_id` changed, with the page's strategy
    /// or else the engine's.
    pub fn resolve(&mut self, engine: &LayoutEngine, changed_id: &str) {
        self.items = match self.strategy {
            Some(strategy) => engine.resolve_with(&self.items, changed_id, strategy),
            None => engine.resolve(&self.items, changed_id),
        };
    }
}

/// Item collections keyed by page name.
#[derive(Debug, Clone, Default)]
pub struct PageRegistry {
    pages: HashMap<String, PageItems>,
}

impl PageRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(&self, name: &str) -> Option<&PageItems> {
        self.pages.get(name)
    }

    /// The named page, created empty on first use.
    pub fn page_mut(&mut self, name: &str) -> &mut PageItems {
        self.pages.entry(name.to_string()).or_default()
    }

    pub fn remove_page(&mut self, name: &str) -> Option<PageItems> {
        self.pages.remove(name)
    }

    /// Page names in sorted order.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.pages.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

fn fold_to(engine: &LayoutEngine, item: &Item, force: Option<bool>) -> Item {
    match force {
        Some(folded) => engine.set_folded(item, folded),
        None => engine.toggle_folded(item),
    }
}
