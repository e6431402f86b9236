//! In-Memory List Store
//!
//! Keeps rows in a mutex-guarded table. Primary test double for the engine
//! and a working backend for demo hosts without a configured remote
//! service.

use chrono::Utc;
use tokio::sync::Mutex;

use async_trait::async_trait;

use super::traits::ListStore;
use crate::domain::{Group, ListItem, StoreError, StoreResult};

/// In-memory implementation of the remote list store contract
pub struct MemoryListStore<G> {
    table: Mutex<Table<G>>,
}

struct Table<G> {
    rows: Vec<ListItem<G>>,
    next_id: i64,
}

impl<G: Group> MemoryListStore<G> {
    pub fn new() -> Self {
        Self {
            table: Mutex::new(Table {
                rows: Vec::new(),
                next_id: 1,
            }),
        }
    }
}

impl<G: Group> Default for MemoryListStore<G> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<G: Group> ListStore<G> for MemoryListStore<G> {
    async fn fetch_all(&self) -> StoreResult<Vec<ListItem<G>>> {
        let table = self.table.lock().await;
        let mut rows = table.rows.clone();
        // same sequencing the remote endpoint returns: owner asc, sort_order asc
        rows.sort_by(|a, b| {
            a.group
                .as_str()
                .cmp(b.group.as_str())
                .then(a.order.cmp(&b.order))
                .then(a.id.cmp(&b.id))
        });
        Ok(rows)
    }

    async fn fetch_by_id(&self, id: i64) -> StoreResult<ListItem<G>> {
        let table = self.table.lock().await;
        table
            .rows
            .iter()
            .find(|row| row.id == id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(format!("row {}", id)))
    }

    async fn max_order(&self, group: G) -> StoreResult<Option<i32>> {
        let table = self.table.lock().await;
        Ok(table
            .rows
            .iter()
            .filter(|row| row.group == group)
            .map(|row| row.order)
            .max())
    }

    async fn insert(&self, text: &str, group: G, order: i32) -> StoreResult<ListItem<G>> {
        let mut table = self.table.lock().await;
        let now = Utc::now();
        let row = ListItem {
            id: table.next_id,
            text: text.to_string(),
            checked: false,
            group,
            order,
            created_at: now,
            updated_at: now,
        };
        table.next_id += 1;
        table.rows.push(row.clone());
        Ok(row)
    }

    async fn set_checked(&self, id: i64, checked: bool) -> StoreResult<ListItem<G>> {
        self.update_row(id, |row| row.checked = checked).await
    }

    async fn set_text(&self, id: i64, text: &str) -> StoreResult<ListItem<G>> {
        self.update_row(id, |row| row.text = text.to_string()).await
    }

    async fn set_position(&self, id: i64, group: G, order: i32) -> StoreResult<ListItem<G>> {
        self.update_row(id, |row| {
            row.group = group;
            row.order = order;
        })
        .await
    }

    async fn set_order(&self, id: i64, order: i32) -> StoreResult<()> {
        self.update_row(id, |row| row.order = order).await?;
        Ok(())
    }

    async fn delete(&self, id: i64) -> StoreResult<()> {
        let mut table = self.table.lock().await;
        table.rows.retain(|row| row.id != id);
        Ok(())
    }
}

impl<G: Group> MemoryListStore<G> {
    async fn update_row(
        &self,
        id: i64,
        mutate: impl FnOnce(&mut ListItem<G>) + Send,
    ) -> StoreResult<ListItem<G>> {
        let mut table = self.table.lock().await;
        let row = table
            .rows
            .iter_mut()
            .find(|row| row.id == id)
            .ok_or_else(|| StoreError::NotFound(format!("row {}", id)))?;
        mutate(row);
        row.updated_at = Utc::now();
        Ok(row.clone())
    }
}
