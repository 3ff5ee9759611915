//! Selection engine: pick, unpick and shift-range picks over the asset store
//!
//! The anchor (`last_picked`) only moves on single-item picks that select.
//! Unpicking never relocates it, and range picks leave it where it is so
//! repeated shift-clicks extend from the same origin.

use serde::{Deserialize, Serialize};

use picker_core::prelude::*;
use picker_core::AssetId;

use crate::store::AssetStore;

/// What a range pick does to picked items outside the computed range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RangeMode {
    /// Only adds picks; items outside the range keep their state
    #[default]
    Additive,
    /// The range becomes the exact selection; items outside it are unpicked
    Replace,
}

/// Selection state tracked next to the store
#[derive(Debug, Clone, Default)]
pub struct Selection {
    last_picked: Option<AssetId>,
    range_mode: RangeMode,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_range_mode(range_mode: RangeMode) -> Self {
        Self {
            last_picked: None,
            range_mode,
        }
    }

    /// Anchor for the next shift-range pick
    pub fn last_picked(&self) -> Option<&AssetId> {
        self.last_picked.as_ref()
    }

    pub fn range_mode(&self) -> RangeMode {
        self.range_mode
    }

    pub fn set_range_mode(&mut self, range_mode: RangeMode) {
        self.range_mode = range_mode;
    }

    /// Pick or unpick a single item.
    ///
    /// Picking moves the anchor to `id`; unpicking leaves the anchor alone.
    pub fn pick(&mut self, store: &mut AssetStore, id: &AssetId, picked: bool) -> Result<()> {
        store.set_picked(id, picked)?;
        if picked {
            self.last_picked = Some(id.clone());
        }
        trace!("pick {} -> {} (anchor: {:?})", id, picked, self.last_picked);
        Ok(())
    }

    /// Pick every item between the anchor and `end`, inclusive, in store order.
    ///
    /// The anchor is `start`, else the current `last_picked`, else `end`
    /// itself. When the anchor equals `end` this is exactly `pick(end, true)`.
    /// Returns `false` without touching anything when either endpoint is
    /// absent from the store.
    pub fn pick_range(
        &mut self,
        store: &mut AssetStore,
        start: Option<&AssetId>,
        end: &AssetId,
    ) -> bool {
        let anchor = start.or(self.last_picked.as_ref()).unwrap_or(end).clone();

        if &anchor == end {
            return self.pick(store, end, true).is_ok();
        }

        let (Some(from), Some(to)) = (store.index_of(&anchor), store.index_of(end)) else {
            debug!("pick_range ignored, {} or {} not in store", anchor, end);
            return false;
        };

        let range = from.min(to)..=from.max(to);
        let mode = self.range_mode;
        store.update_in_order(|index, item| {
            if range.contains(&index) {
                item.picked = true;
            } else if mode == RangeMode::Replace {
                item.picked = false;
            }
        });

        debug!("pick_range {}..={} ({:?})", anchor, end, mode);
        true
    }

    /// Pick every item in the store; the anchor is unchanged
    pub fn pick_all(&mut self, store: &mut AssetStore) {
        store.update_in_order(|_, item| item.picked = true);
    }

    /// Unpick every item and forget the anchor
    pub fn pick_clear(&mut self, store: &mut AssetStore) {
        store.update_in_order(|_, item| item.picked = false);
        self.last_picked = None;
    }

    /// Drop the anchor if its item left the store
    pub fn retain(&mut self, store: &AssetStore) {
        if let Some(anchor) = &self.last_picked {
            if !store.contains(anchor) {
                debug!("Anchor {} removed from store, clearing", anchor);
                self.last_picked = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use picker_core::AssetItem;

    fn store(ids: &[&str]) -> AssetStore {
        AssetStore::from_items(ids.iter().map(|id| AssetItem::new(*id)))
    }

    fn id(s: &str) -> AssetId {
        AssetId::from(s)
    }

    fn picked(store: &AssetStore) -> Vec<String> {
        store
            .picked_ids()
            .into_iter()
            .map(|id| id.as_str().to_string())
            .collect()
    }

    #[test]
    fn test_pick_sets_anchor() {
        let mut store = store(&["a", "b"]);
        let mut selection = Selection::new();

        selection.pick(&mut store, &id("b"), true).unwrap();

        assert_eq!(picked(&store), vec!["b"]);
        assert_eq!(selection.last_picked(), Some(&id("b")));
    }

    #[test]
    fn test_unpick_keeps_previous_anchor() {
        let mut store = store(&["a", "b", "c"]);
        let mut selection = Selection::new();

        selection.pick(&mut store, &id("a"), true).unwrap();
        selection.pick(&mut store, &id("c"), true).unwrap();
        selection.pick(&mut store, &id("c"), false).unwrap();

        assert!(!store.get(&id("c")).unwrap().picked);
        assert_eq!(selection.last_picked(), Some(&id("c")));
    }

    #[test]
    fn test_pick_missing_id_is_not_found() {
        let mut store = store(&["a"]);
        let mut selection = Selection::new();

        let err = selection.pick(&mut store, &id("x"), true).unwrap_err();

        assert!(err.is_not_found());
        assert_eq!(selection.last_picked(), None);
    }

    #[test]
    fn test_pick_range_is_direction_agnostic() {
        let mut forward = store(&["a", "b", "c", "d", "e"]);
        let mut backward = forward.clone();

        Selection::new().pick_range(&mut forward, Some(&id("b")), &id("d"));
        Selection::new().pick_range(&mut backward, Some(&id("d")), &id("b"));

        assert_eq!(picked(&forward), vec!["b", "c", "d"]);
        assert_eq!(picked(&forward), picked(&backward));
    }

    #[test]
    fn test_pick_range_same_endpoints_equals_pick() {
        let mut ranged = store(&["a", "b", "c"]);
        let mut single = ranged.clone();
        let mut by_range = Selection::new();
        let mut by_pick = Selection::new();

        assert!(by_range.pick_range(&mut ranged, Some(&id("b")), &id("b")));
        by_pick.pick(&mut single, &id("b"), true).unwrap();

        assert_eq!(picked(&ranged), picked(&single));
        assert_eq!(by_range.last_picked(), by_pick.last_picked());
    }

    #[test]
    fn test_pick_range_without_anchor_picks_only_target() {
        let mut store = store(&["a", "b", "c"]);
        let mut selection = Selection::new();

        selection.pick_range(&mut store, None, &id("c"));

        assert_eq!(picked(&store), vec!["c"]);
    }

    #[test]
    fn test_pick_range_defaults_to_last_picked_and_keeps_it() {
        let mut store = store(&["a", "b", "c", "d"]);
        let mut selection = Selection::new();

        selection.pick(&mut store, &id("b"), true).unwrap();
        selection.pick_range(&mut store, None, &id("d"));

        assert_eq!(picked(&store), vec!["b", "c", "d"]);
        assert_eq!(selection.last_picked(), Some(&id("b")));
    }

    #[test]
    fn test_pick_range_missing_endpoint_is_noop() {
        let mut store = store(&["a", "b", "c"]);
        let mut selection = Selection::new();

        assert!(!selection.pick_range(&mut store, Some(&id("a")), &id("zz")));
        assert!(!selection.pick_range(&mut store, Some(&id("zz")), &id("c")));

        assert!(store.picked_ids().is_empty());
    }

    #[test]
    fn test_scenario_additive_extension_from_fixed_anchor() {
        let mut store = store(&["A", "B", "C", "D", "E"]);
        let mut selection = Selection::new();

        selection.pick(&mut store, &id("C"), true).unwrap();
        assert_eq!(picked(&store), vec!["C"]);

        selection.pick_range(&mut store, Some(&id("C")), &id("A"));
        assert_eq!(picked(&store), vec!["A", "B", "C"]);

        selection.pick_range(&mut store, Some(&id("C")), &id("E"));
        assert_eq!(picked(&store), vec!["A", "B", "C", "D", "E"]);
        assert_eq!(selection.last_picked(), Some(&id("C")));
    }

    #[test]
    fn test_scenario_replace_mode_contracts_to_range() {
        let mut store = store(&["A", "B", "C", "D", "E"]);
        let mut selection = Selection::with_range_mode(RangeMode::Replace);

        selection.pick(&mut store, &id("C"), true).unwrap();
        selection.pick_range(&mut store, None, &id("A"));
        assert_eq!(picked(&store), vec!["A", "B", "C"]);

        selection.pick_range(&mut store, None, &id("E"));
        assert_eq!(picked(&store), vec!["C", "D", "E"]);
    }

    #[test]
    fn test_pick_all_and_clear() {
        let mut store = store(&["a", "b", "c"]);
        let mut selection = Selection::new();
        selection.pick(&mut store, &id("a"), true).unwrap();

        selection.pick_all(&mut store);
        assert_eq!(picked(&store), vec!["a", "b", "c"]);
        assert_eq!(selection.last_picked(), Some(&id("a")));

        selection.pick_clear(&mut store);
        assert!(store.picked_ids().is_empty());
        assert_eq!(selection.last_picked(), None);
    }

    #[test]
    fn test_retain_clears_removed_anchor() {
        let mut store = store(&["a", "b"]);
        let mut selection = Selection::new();
        selection.pick(&mut store, &id("a"), true).unwrap();

        store.remove_items(&[id("b")]);
        selection.retain(&store);
        assert_eq!(selection.last_picked(), Some(&id("a")));

        store.remove_items(&[id("a")]);
        selection.retain(&store);
        assert_eq!(selection.last_picked(), None);
    }
}
