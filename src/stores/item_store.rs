use std::collections::BTreeMap;

use tokio::sync::RwLock;

use crate::services::item_filter;
use crate::types::internal::filter::ItemsFilter;
use crate::types::internal::item::{Item, NewItem};
use crate::types::internal::timestamp;

/// Table state guarded by the store's lock
struct ItemTable {
    /// Next id to hand out, never reused after deletion
    next_id: i64,
    items: BTreeMap<i64, Item>,
}

/// ItemStore keeps every item in memory, keyed by id
///
/// Ids start at 1 and increase by one per insertion. Reads return clones so
/// the lock is never held across an await point outside the store.
pub struct ItemStore {
    table: RwLock<ItemTable>,
}

impl Default for ItemStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ItemStore {
    pub fn new() -> Self {
        Self {
            table: RwLock::new(ItemTable {
                next_id: 1,
                items: BTreeMap::new(),
            }),
        }
    }

    /// Store a new item
    ///
    /// Assigns the next id and opens the validity window at the current
    /// server time.
    ///
    /// # Returns
    /// The stored item
    pub async fn insert(&self, new_item: NewItem) -> Item {
        let mut table = self.table.write().await;

        let id = table.next_id;
        let item = Item::from_new(id, new_item, timestamp::now());
        table.items.insert(id, item.clone());
        table.next_id += 1;

        tracing::info!(item_id = id, user_id = %item.user_id, "Item created");
        item
    }

    /// Get a single item by id
    ///
    /// # Returns
    /// * `Some(Item)` - The stored item
    /// * `None` - No item with that id
    pub async fn get_by_id(&self, item_id: i64) -> Option<Item> {
        let table = self.table.read().await;
        let item = table.items.get(&item_id).cloned();

        tracing::debug!(item_id, found = item.is_some(), "Item lookup");
        item
    }

    /// Get all items, sorted by id ascending
    pub async fn list_all(&self) -> Vec<Item> {
        let table = self.table.read().await;
        table.items.values().cloned().collect()
    }

    /// Get all items matching `filter`, sorted by id ascending
    ///
    /// The filter's end date defaults to the current server time.
    pub async fn list_filtered(&self, filter: &ItemsFilter) -> Vec<Item> {
        let items = self.list_all().await;
        let total = items.len();

        let matched = item_filter::apply(items, filter, timestamp::now());
        tracing::debug!(total, matched = matched.len(), "Items filtered");
        matched
    }

    /// Delete an item by id
    ///
    /// # Returns
    /// * `true` - The item existed and was removed
    /// * `false` - No item with that id
    pub async fn delete_by_id(&self, item_id: i64) -> bool {
        let mut table = self.table.write().await;
        let removed = table.items.remove(&item_id).is_some();

        if removed {
            tracing::info!(item_id, "Item deleted");
        }
        removed
    }

    /// Number of stored items
    pub async fn len(&self) -> usize {
        self.table.read().await.items.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
