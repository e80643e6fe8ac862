//! The player's inventory.

use super::Item;

/// Ordered collection of collected items.
///
/// Insertion order is meaningful for display. No capacity is enforced here;
/// if a frontend wants a bound, that is a presentation concern. Duplicates
/// are permitted.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Backpack {
    items: Vec<Item>,
}

impl Backpack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an item. Always succeeds.
    pub fn add_item(&mut self, item: Item) {
        self.items.push(item);
    }

    /// Read-only snapshot copy, used to build a transfer state.
    pub fn all_items(&self) -> Vec<Item> {
        self.items.clone()
    }

    /// Empties the backpack. Used before restoring a snapshot so that
    /// repeated pause/resume cycles never accumulate duplicates.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Clears, then re-adds every item of the snapshot in order.
    /// Idempotent for a fixed snapshot.
    pub fn restore_from(&mut self, items: &[Item]) {
        self.clear();
        self.items.extend_from_slice(items);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Item> + '_ {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
