//! Ordered store of asset items supplied by the external data source

use std::collections::HashMap;

use picker_core::prelude::*;
use picker_core::{AssetId, AssetItem, ItemError};

/// Holds the asset list in display order.
///
/// Items are indexed by id for lookups; `order` is the externally supplied
/// sequence that range picks walk over.
#[derive(Debug, Default, Clone)]
pub struct AssetStore {
    items: HashMap<AssetId, AssetItem>,
    order: Vec<AssetId>,
}

impl AssetStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from an ordered list of items
    pub fn from_items(items: impl IntoIterator<Item = AssetItem>) -> Self {
        let mut store = Self::new();
        store.append_items(items);
        store
    }

    /// Replace the whole list, returning the ids that disappeared
    pub fn replace_items(&mut self, items: impl IntoIterator<Item = AssetItem>) -> Vec<AssetId> {
        let previous = std::mem::take(&mut self.order);
        self.items.clear();
        self.append_items(items);

        previous
            .into_iter()
            .filter(|id| !self.items.contains_key(id))
            .collect()
    }

    /// Append items at the end of the list.
    ///
    /// An id that is already present keeps its first position; the duplicate
    /// is dropped.
    pub fn append_items(&mut self, items: impl IntoIterator<Item = AssetItem>) {
        for item in items {
            if self.items.contains_key(&item.id) {
                warn!("Duplicate asset id {} in supplied list, ignoring", item.id);
                continue;
            }
            self.order.push(item.id.clone());
            self.items.insert(item.id.clone(), item);
        }
    }

    /// Remove items by id, returning the ids that were actually present
    pub fn remove_items<'a>(&mut self, ids: impl IntoIterator<Item = &'a AssetId>) -> Vec<AssetId> {
        let removed: Vec<AssetId> = ids
            .into_iter()
            .filter_map(|id| self.items.remove_entry(id).map(|(id, _)| id))
            .collect();

        if !removed.is_empty() {
            self.order.retain(|id| self.items.contains_key(id));
        }
        removed
    }

    pub fn get(&self, id: &AssetId) -> Result<&AssetItem> {
        self.items.get(id).ok_or_else(|| Error::asset_not_found(id))
    }

    fn get_mut(&mut self, id: &AssetId) -> Result<&mut AssetItem> {
        self.items
            .get_mut(id)
            .ok_or_else(|| Error::asset_not_found(id))
    }

    pub fn contains(&self, id: &AssetId) -> bool {
        self.items.contains_key(id)
    }

    pub fn set_picked(&mut self, id: &AssetId, picked: bool) -> Result<()> {
        self.get_mut(id)?.picked = picked;
        Ok(())
    }

    pub fn set_updating(&mut self, id: &AssetId, updating: bool) -> Result<()> {
        self.get_mut(id)?.updating = updating;
        Ok(())
    }

    pub fn set_error(&mut self, id: &AssetId, error: Option<ItemError>) -> Result<()> {
        self.get_mut(id)?.error = error;
        Ok(())
    }

    /// Visit every item mutably, in display order, with its position
    pub fn update_in_order(&mut self, mut f: impl FnMut(usize, &mut AssetItem)) {
        for (index, id) in self.order.iter().enumerate() {
            if let Some(item) = self.items.get_mut(id) {
                f(index, item);
            }
        }
    }

    /// Position of an item in display order
    pub fn index_of(&self, id: &AssetId) -> Option<usize> {
        if !self.items.contains_key(id) {
            return None;
        }
        self.order.iter().position(|candidate| candidate == id)
    }

    /// Items in display order
    pub fn items(&self) -> impl Iterator<Item = &AssetItem> {
        self.order.iter().filter_map(|id| self.items.get(id))
    }

    /// Ids in display order
    pub fn ids(&self) -> &[AssetId] {
        &self.order
    }

    /// Ids of picked items, in display order
    pub fn picked_ids(&self) -> Vec<AssetId> {
        self.items()
            .filter(|item| item.picked)
            .map(|item| item.id.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
