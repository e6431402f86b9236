//! List Synchronization Engine
//!
//! Single source of truth for one collaborative list's in-memory state.
//! Every mutation runs through here: applied optimistically where the
//! product allows it, committed to the remote store, reconciled by reload.
//! The host never mutates the cache directly; it invokes operations and
//! re-renders from the engine's current snapshot.

mod ordering;


use std::sync::Arc;

use futures_util::future::join_all;

use crate::domain::{EngineError, EngineResult, Group, ListItem, MoveIntent};
use crate::notify::ErrorSink;
use crate::store::ListStore;
use ordering::{array_move, display_cmp, group_ids, max_order_in, renormalize};

/// What a move intent amounts to against current state
enum PlannedMove {
    /// The item is gone; nothing to do
    Missing,
    /// Same group, same index; nothing to do
    Unchanged,
    /// Append to another group at this order
    CrossGroup { order: i32 },
    /// Same-group reorder; the (id, order) rows to persist
    Reorder { changed: Vec<(i64, i32)> },
}

/// Synchronization engine for one collaborative list
pub struct ListEngine<G: Group> {
    store: Arc<dyn ListStore<G>>,
    items: Vec<ListItem<G>>,
    /// Last-loaded truth while a drag preview is active
    preview_base: Option<Vec<ListItem<G>>>,
    errors: ErrorSink,
}

impl<G: Group> ListEngine<G> {
    pub fn new(store: Arc<dyn ListStore<G>>, errors: ErrorSink) -> Self {
        Self {
            store,
            items: Vec::new(),
            preview_base: None,
            errors,
        }
    }

    /// Current snapshot across all groups
    pub fn items(&self) -> &[ListItem<G>] {
        &self.items
    }

    /// One group's items in display order (order asc, ties by id)
    pub fn group_items(&self, group: G) -> Vec<&ListItem<G>> {
        let mut rows: Vec<&ListItem<G>> =
            self.items.iter().filter(|item| item.group == group).collect();
        rows.sort_by(|a, b| display_cmp(a, b));
        rows
    }

    /// Last-loaded truth, ignoring any active preview
    pub(crate) fn committed_items(&self) -> &[ListItem<G>] {
        self.preview_base.as_deref().unwrap_or(&self.items)
    }

    /// Replace the cache wholesale from the remote store.
    ///
    /// On failure the previous cache is kept as last-known-good.
    pub async fn load(&mut self) -> EngineResult<()> {
        self.preview_base = None;
        match self.store.fetch_all().await {
            Ok(rows) => {
                log::debug!("loaded {} rows from {}", rows.len(), G::TABLE);
                self.items = rows;
                Ok(())
            }
            Err(err) => {
                self.errors.emit("Failed to load the list");
                Err(err.into())
            }
        }
    }

    /// Flip an item's checked state.
    ///
    /// The local flip lands before the remote round-trip. A remote failure
    /// is surfaced but the flip is not rolled back; the next load overwrites
    /// the drift.
    pub async fn toggle(&mut self, id: i64) -> EngineResult<()> {
        let Some(item) = self.items.iter_mut().find(|item| item.id == id) else {
            return Ok(());
        };
        item.checked = !item.checked;

        if let Err(err) = self.persist_toggle(id).await {
            self.errors.emit("Failed to update the check state");
            return Err(err);
        }
        Ok(())
    }

    async fn persist_toggle(&self, id: i64) -> EngineResult<()> {
        let current = self.store.fetch_by_id(id).await?;
        self.store.set_checked(id, !current.checked).await?;
        Ok(())
    }

    /// Add a new item at the end of a group.
    ///
    /// Whitespace-only text is skipped silently. The row joins the cache
    /// only once the store confirms it and assigns the id.
    pub async fn add(&mut self, text: &str, group: G) -> EngineResult<Option<ListItem<G>>> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(None);
        }
        match self.persist_add(text, group).await {
            Ok(row) => {
                self.items.push(row.clone());
                Ok(Some(row))
            }
            Err(err) => {
                self.errors.emit("Failed to add the item");
                Err(err)
            }
        }
    }

    async fn persist_add(&self, text: &str, group: G) -> EngineResult<ListItem<G>> {
        let max = self.store.max_order(group).await?;
        let order = max.unwrap_or(0) + 1;
        Ok(self.store.insert(text, group, order).await?)
    }

    /// Delete an item. Confirmation happens host-side before this call.
    pub async fn remove(&mut self, id: i64) -> EngineResult<()> {
        if let Err(err) = self.store.delete(id).await {
            self.errors.emit("Failed to delete the item");
            return Err(err.into());
        }
        self.items.retain(|item| item.id != id);
        Ok(())
    }

    /// Rewrite an item's text. Whitespace-only input is skipped silently.
    pub async fn update_text(&mut self, id: i64, text: &str) -> EngineResult<()> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(());
        }
        match self.store.set_text(id, text).await {
            Ok(row) => {
                if let Some(item) = self.items.iter_mut().find(|item| item.id == id) {
                    *item = row;
                }
                Ok(())
            }
            Err(err) => {
                self.errors.emit("Failed to update the item");
                Err(err.into())
            }
        }
    }

    /// Apply a move to the local cache only, for live feedback during a
    /// drag. Each call supersedes the previous preview of the gesture.
    pub fn preview_move(&mut self, intent: MoveIntent<G>) {
        let base = self
            .preview_base
            .get_or_insert_with(|| self.items.clone())
            .clone();
        self.items = base;
        self.plan_and_apply_local(&intent);
    }

    /// Discard any active preview, restoring last-loaded truth
    pub fn clear_preview(&mut self) {
        if let Some(base) = self.preview_base.take() {
            self.items = base;
        }
    }

    /// Resolve one drag gesture against the store.
    ///
    /// Cross-group moves append to the target group with a single update;
    /// same-group moves re-normalize the whole group to 1..=N and persist
    /// the changed rows concurrently as one logical unit. Either kind ends
    /// with a wholesale reload so the view matches durable state exactly,
    /// including order values assigned concurrently by other clients.
    pub async fn apply_move(&mut self, intent: MoveIntent<G>) -> EngineResult<()> {
        self.clear_preview();

        let persist = match self.plan_and_apply_local(&intent) {
            PlannedMove::Missing | PlannedMove::Unchanged => return Ok(()),
            PlannedMove::CrossGroup { order } => self
                .store
                .set_position(intent.item_id, intent.target_group, order)
                .await
                .map(|_| ())
                .map_err(EngineError::from),
            PlannedMove::Reorder { changed } => self.persist_reorder(&changed).await,
        };

        match persist {
            Ok(()) => self.reload_after_move().await,
            Err(err) => {
                self.errors.emit("Failed to move the item");
                // resynchronize with durable truth; the error is already surfaced
                let _ = self.reload_after_move().await;
                Err(err)
            }
        }
    }

    /// Plan the move and optimistically mutate the cache when it changes
    /// anything. No store calls.
    fn plan_and_apply_local(&mut self, intent: &MoveIntent<G>) -> PlannedMove {
        let Some(position) = self.items.iter().position(|item| item.id == intent.item_id) else {
            return PlannedMove::Missing;
        };

        if intent.target_group != intent.source_group {
            let order = max_order_in(&self.items, intent.target_group).unwrap_or(0) + 1;
            let item = &mut self.items[position];
            item.group = intent.target_group;
            item.order = order;
            return PlannedMove::CrossGroup { order };
        }

        let mut ids = group_ids(&self.items, intent.source_group);
        let Some(from) = ids.iter().position(|id| *id == intent.item_id) else {
            return PlannedMove::Missing;
        };
        let to = intent.target_index.min(ids.len() - 1);
        if from == to {
            return PlannedMove::Unchanged;
        }

        array_move(&mut ids, from, to);
        let changed = renormalize(&self.items, &ids);
        for (id, order) in &changed {
            if let Some(item) = self.items.iter_mut().find(|item| item.id == *id) {
                item.order = *order;
            }
        }
        PlannedMove::Reorder { changed }
    }

    /// Persist a reorder batch: one order update per changed row, issued
    /// concurrently, failure of any one fails the unit.
    async fn persist_reorder(&self, changed: &[(i64, i32)]) -> EngineResult<()> {
        let updates = changed
            .iter()
            .map(|(id, order)| self.store.set_order(*id, *order));
        let results = join_all(updates).await;

        let failed = results.iter().filter(|result| result.is_err()).count();
        if failed > 0 {
            Err(EngineError::PartialReorderFailure {
                failed,
                total: results.len(),
            })
        } else {
            Ok(())
        }
    }

    async fn reload_after_move(&mut self) -> EngineResult<()> {
        match self.store.fetch_all().await {
            Ok(rows) => {
                self.items = rows;
                Ok(())
            }
            Err(err) => {
                self.errors.emit("Failed to load the list");
                Err(err.into())
            }
        }
    }
}
