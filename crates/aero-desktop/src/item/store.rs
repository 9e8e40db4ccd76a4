//! Ordered item store

use super::{default_items, Item, ItemDraft, ItemId, ItemPatch};
use crate::math::Vec2;

/// Ordered collection of desktop items
///
/// Store order is insertion order and is what the reconciler paginates by.
/// Ids come from a counter that only moves forward, so a deleted id is
/// never handed out again.
#[derive(Clone, Debug)]
pub struct ItemStore {
    items: Vec<Item>,
    next_id: u64,
}

impl Default for ItemStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ItemStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self { items: Vec::new(), next_id: 1 }
    }

    /// Create a store holding the factory defaults
    pub fn with_defaults() -> Self {
        Self::from_parts(default_items(), 0)
    }

    /// Rebuild a store from persisted parts
    ///
    /// `next_id` is raised past every id present, so stale counters can't
    /// cause reuse. An item holding `u64::MAX` leaves the counter exhausted.
    pub fn from_parts(items: Vec<Item>, next_id: u64) -> Self {
        let floor = items.iter().map(|i| i.id.0.saturating_add(1)).max().unwrap_or(1);
        Self { items, next_id: next_id.max(floor) }
    }

    /// Next id that will be allocated
    #[inline]
    pub fn next_id(&self) -> u64 {
        self.next_id
    }

    /// Items in store order
    #[inline]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Number of items
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the store is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get an item by ID
    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|i| i.id == id)
    }

    /// Whether `count` more ids can be handed out
    pub fn can_allocate(&self, count: u64) -> bool {
        self.next_id.checked_add(count).is_some()
    }

    fn allocate(&mut self) -> Option<ItemId> {
        let id = ItemId(self.next_id);
        self.next_id = self.next_id.checked_add(1)?;
        Some(id)
    }

    /// Append a new item at the origin of page 0
    ///
    /// Returns `None` once the id space is exhausted.
    pub fn create(&mut self, draft: ItemDraft) -> Option<ItemId> {
        let id = self.allocate()?;

        self.items.push(Item {
            id,
            kind: draft.kind,
            x: 0.0,
            y: 0.0,
            page: 0,
            payload: draft.payload,
        });

        Some(id)
    }

    /// Apply a patch; returns false for unknown ids
    pub fn update(&mut self, id: ItemId, patch: &ItemPatch) -> bool {
        match self.items.iter_mut().find(|i| i.id == id) {
            Some(item) => {
                patch.apply(item);
                true
            }
            None => false,
        }
    }

    /// Remove an item; returns false for unknown ids
    pub fn delete(&mut self, id: ItemId) -> bool {
        let before = self.items.len();
        self.items.retain(|i| i.id != id);
        self.items.len() != before
    }

    /// Set an item's absolute anchor
    ///
    /// Non-finite coordinates are rejected.
    pub fn move_to(&mut self, id: ItemId, position: Vec2) -> bool {
        if !position.is_finite() {
            return false;
        }
        match self.items.iter_mut().find(|i| i.id == id) {
            Some(item) => {
                item.set_position(position);
                true
            }
            None => false,
        }
    }

    /// Swap in a reconciled collection
    pub fn replace_all(&mut self, items: Vec<Item>) {
        self.items = items;
    }

    /// Replace every item with the factory defaults
    ///
    /// The defaults get freshly allocated ids; the counter keeps moving
    /// forward. Returns false, leaving the store untouched, when there are
    /// not enough ids left.
    pub fn reset_to_defaults(&mut self) -> bool {
        let mut defaults = default_items();
        if !self.can_allocate(defaults.len() as u64) {
            return false;
        }
        for item in &mut defaults {
            item.id = ItemId(self.next_id);
            self.next_id += 1;
        }
        self.items = defaults;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::ItemKind;

    #[test]
    fn test_create_appends_in_order() {
        let mut store = ItemStore::new();
        let a = store.create(ItemDraft::default()).unwrap();
        let b = store.create(ItemDraft { kind: ItemKind::Native, ..Default::default() }).unwrap();

        assert_eq!(store.len(), 2);
        assert_eq!(store.items()[0].id, a);
        assert_eq!(store.items()[1].id, b);
        assert_eq!(store.get(b).map(|i| i.kind), Some(ItemKind::Native));
    }

    #[test]
    fn test_ids_are_never_reused() {
        let mut store = ItemStore::new();
        let a = store.create(ItemDraft::default()).unwrap();
        let b = store.create(ItemDraft::default()).unwrap();
        assert!(store.delete(b));
        let c = store.create(ItemDraft::default()).unwrap();

        assert!(c > b);
        assert!(b > a);
    }

    #[test]
    fn test_delete_unknown() {
        let mut store = ItemStore::with_defaults();
        assert!(!store.delete(ItemId(999)));
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_move_to() {
        let mut store = ItemStore::with_defaults();
        assert!(store.move_to(ItemId(2), Vec2::new(160.0, 10.0)));
        assert_eq!(store.get(ItemId(2)).map(|i| i.position()), Some(Vec2::new(160.0, 10.0)));

        assert!(!store.move_to(ItemId(2), Vec2::new(f32::NAN, 0.0)));
        assert!(!store.move_to(ItemId(42), Vec2::ZERO));
    }

    #[test]
    fn test_update_unknown() {
        let mut store = ItemStore::with_defaults();
        assert!(!store.update(ItemId(42), &ItemPatch::page(1)));
        assert!(store.update(ItemId(1), &ItemPatch::page(1)));
        assert_eq!(store.get(ItemId(1)).map(|i| i.page), Some(1));
    }

    #[test]
    fn test_from_parts_raises_stale_counter() {
        let store = ItemStore::from_parts(default_items(), 2);
        assert_eq!(store.next_id(), 4);

        let store = ItemStore::from_parts(Vec::new(), 0);
        assert_eq!(store.next_id(), 1);

        let store = ItemStore::from_parts(default_items(), 50);
        assert_eq!(store.next_id(), 50);
    }

    #[test]
    fn test_reset_keeps_counter_forward() {
        let mut store = ItemStore::with_defaults();
        for _ in 0..5 {
            store.create(ItemDraft::default());
        }
        let before = store.next_id();
        assert!(store.reset_to_defaults());

        assert_eq!(store.len(), 3);
        assert_eq!(store.next_id(), before + 3);
        assert!(store.items().iter().all(|i| i.id.0 >= before));
    }

    #[test]
    fn test_exhausted_counter_does_not_panic() {
        let max = Item { id: ItemId(u64::MAX), ..default_items().remove(0) };
        let mut store = ItemStore::from_parts(vec![max], 1);
        assert_eq!(store.next_id(), u64::MAX);
        assert!(!store.can_allocate(1));
        assert_eq!(store.create(ItemDraft::default()), None);
        assert_eq!(store.len(), 1);

        assert!(!store.reset_to_defaults());
        assert_eq!(store.items()[0].id, ItemId(u64::MAX));
    }

    #[test]
    fn test_last_id_is_allocatable_once() {
        let mut store = ItemStore::from_parts(Vec::new(), u64::MAX - 1);
        assert_eq!(store.create(ItemDraft::default()), Some(ItemId(u64::MAX - 1)));
        assert_eq!(store.create(ItemDraft::default()), None);
    }
}
