//! Store Layer - Core Trait
//!
//! Defines the abstract interface to the hosted row service backing one
//! list kind. Implementations can use a REST row endpoint, in-memory
//! tables, etc.

use async_trait::async_trait;

use crate::domain::{Group, ListItem, StoreResult};

/// Remote CRUD contract for one collaborative list.
///
/// The durable owner of record. All operations are async; implementations
/// must be shareable across concurrent calls.
#[async_trait]
pub trait ListStore<G: Group>: Send + Sync {
    /// Full load, ordered by (group asc, order asc)
    async fn fetch_all(&self) -> StoreResult<Vec<ListItem<G>>>;

    /// Single-row fetch
    async fn fetch_by_id(&self, id: i64) -> StoreResult<ListItem<G>>;

    /// Highest order currently used in a group; None when the group is empty
    async fn max_order(&self, group: G) -> StoreResult<Option<i32>>;

    /// Insert an unchecked row and return it with its store-assigned id
    async fn insert(&self, text: &str, group: G, order: i32) -> StoreResult<ListItem<G>>;

    /// Update the checked flag
    async fn set_checked(&self, id: i64, checked: bool) -> StoreResult<ListItem<G>>;

    /// Rewrite the text
    async fn set_text(&self, id: i64, text: &str) -> StoreResult<ListItem<G>>;

    /// Reassign group and order in one update (cross-group move)
    async fn set_position(&self, id: i64, group: G, order: i32) -> StoreResult<ListItem<G>>;

    /// Update only the order; N of these issued concurrently form a
    /// reorder batch, treated by the caller as one logical unit
    async fn set_order(&self, id: i64, order: i32) -> StoreResult<()>;

    /// Delete the row
    async fn delete(&self, id: i64) -> StoreResult<()>;
}
