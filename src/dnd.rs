//! Drag Session Wiring
//!
//! Binds the pointer-drag state machine to the engine for one gesture
//! stream: hovering previews the move locally, releasing persists it,
//! cancelling restores last-loaded truth.

use list_dnd::{DragController, DropTarget};

use crate::domain::{EngineResult, Group, ListItem, MoveIntent};
use crate::engine::ListEngine;

/// Drives a [`ListEngine`] from raw pointer events.
///
/// Per completed gesture the engine sees any number of `preview_move`
/// calls and at most one `apply_move`.
pub struct DragSession<'a, G: Group> {
    engine: &'a mut ListEngine<G>,
    controller: DragController<G>,
}

impl<'a, G: Group> DragSession<'a, G> {
    pub fn new(engine: &'a mut ListEngine<G>) -> Self {
        Self {
            engine,
            controller: DragController::new(),
        }
    }

    /// Item id currently being dragged, for the host's drag overlay
    pub fn dragging_id(&self) -> Option<i64> {
        self.controller.dragging_id()
    }

    pub fn pointer_down(&mut self, item_id: i64, x: i32, y: i32) {
        self.controller.pointer_down(item_id, x, y);
    }

    pub fn pointer_move(&mut self, x: i32, y: i32) {
        self.controller.pointer_move(x, y);
    }

    /// Pointer entered an item row. Same-group items preview an insertion
    /// at that item's display position; items of other groups are not
    /// item-level targets (cross-group drops are section-level).
    pub fn hover_item(&mut self, item_id: i64) {
        self.controller.enter_item(item_id);
        self.preview_current_target();
    }

    /// Pointer entered a group section. A section other than the dragged
    /// item's own previews an append to that group.
    pub fn hover_group(&mut self, group: G) {
        self.controller.enter_group(group);
        self.preview_current_target();
    }

    /// Pointer left the current target
    pub fn hover_leave(&mut self) {
        self.controller.leave();
        self.engine.clear_preview();
    }

    /// Finish the gesture: at most one persisted move. With no valid
    /// target, or no net change, the preview is discarded and nothing is
    /// persisted.
    pub async fn pointer_up(&mut self) -> EngineResult<()> {
        let dropped = self.controller.pointer_up();
        match dropped.and_then(|(dragged, target)| self.resolve(dragged, target)) {
            Some(intent) => self.engine.apply_move(intent).await,
            None => {
                self.engine.clear_preview();
                Ok(())
            }
        }
    }

    /// Abort the gesture and restore last-loaded truth
    pub fn cancel(&mut self) {
        self.controller.cancel();
        self.engine.clear_preview();
    }

    fn preview_current_target(&mut self) {
        let (Some(dragged), Some(target)) =
            (self.controller.dragging_id(), self.controller.drop_target())
        else {
            return;
        };
        if let Some(intent) = self.resolve(dragged, target) {
            self.engine.preview_move(intent);
        }
    }

    /// Translate a drop target into a move intent against last-loaded
    /// truth (not the previewed cache, which may already show the move).
    fn resolve(&self, dragged: i64, target: DropTarget<G>) -> Option<MoveIntent<G>> {
        let truth = self.engine.committed_items();
        let source_group = truth.iter().find(|item| item.id == dragged)?.group;

        match target {
            DropTarget::Group(group) => {
                if group == source_group {
                    return None;
                }
                let target_len = truth.iter().filter(|item| item.group == group).count();
                Some(MoveIntent {
                    item_id: dragged,
                    source_group,
                    target_group: group,
                    target_index: target_len,
                })
            }
            DropTarget::Item(over_id) => {
                let over = truth.iter().find(|item| item.id == over_id)?;
                if over.group != source_group {
                    return None;
                }
                let mut rows: Vec<&ListItem<G>> = truth
                    .iter()
                    .filter(|item| item.group == source_group)
                    .collect();
                rows.sort_by(|a, b| a.order.cmp(&b.order).then(a.id.cmp(&b.id)));
                let target_index = rows.iter().position(|item| item.id == over_id)?;
                Some(MoveIntent {
                    item_id: dragged,
                    source_group,
                    target_group: source_group,
                    target_index,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::domain::WishlistGroup::{self, Mine, Partner};
    use crate::notify::ErrorSink;
    use crate::store::{ListStore, MemoryListStore};

    async fn seeded_engine(
        rows: &[(&str, WishlistGroup)],
    ) -> (ListEngine<WishlistGroup>, Arc<MemoryListStore<WishlistGroup>>) {
        let store = Arc::new(MemoryListStore::new());
        for (text, group) in rows {
            let max = store.max_order(*group).await.unwrap();
            store
                .insert(text, *group, max.unwrap_or(0) + 1)
                .await
                .unwrap();
        }
        let mut engine = ListEngine::new(store.clone(), ErrorSink::disabled());
        engine.load().await.unwrap();
        (engine, store)
    }

    fn sequence(engine: &ListEngine<WishlistGroup>, group: WishlistGroup) -> Vec<i64> {
        engine.group_items(group).iter().map(|i| i.id).collect()
    }

    #[tokio::test]
    async fn full_gesture_previews_then_persists_once() {
        let (mut engine, store) = seeded_engine(&[("a", Mine), ("b", Mine), ("c", Mine)]).await;
        let mut session = DragSession::new(&mut engine);

        session.pointer_down(1, 0, 0);
        session.pointer_move(10, 0);
        session.hover_item(2);
        assert_eq!(sequence(session.engine, Mine), vec![2, 1, 3]);

        session.pointer_up().await.unwrap();
        drop(session);

        assert_eq!(sequence(&engine, Mine), vec![2, 1, 3]);
        let persisted: Vec<i64> = store
            .fetch_all()
            .await
            .unwrap()
            .iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(persisted, vec![2, 1, 3]);
    }

    #[tokio::test]
    async fn section_hover_previews_append_and_drop_persists() {
        let (mut engine, store) = seeded_engine(&[("a", Mine), ("b", Partner)]).await;
        let mut session = DragSession::new(&mut engine);

        session.pointer_down(1, 0, 0);
        session.pointer_move(0, 10);
        session.hover_group(Partner);
        assert_eq!(sequence(session.engine, Partner), vec![2, 1]);

        session.pointer_up().await.unwrap();
        drop(session);

        let moved = store.fetch_by_id(1).await.unwrap();
        assert_eq!(moved.group, Partner);
        assert_eq!(moved.order, 2);
    }

    #[tokio::test]
    async fn own_section_is_not_a_cross_group_target() {
        let (mut engine, store) = seeded_engine(&[("a", Mine), ("b", Mine)]).await;
        let mut session = DragSession::new(&mut engine);

        session.pointer_down(1, 0, 0);
        session.pointer_move(10, 0);
        session.hover_group(Mine);
        assert_eq!(sequence(session.engine, Mine), vec![1, 2]);

        session.pointer_up().await.unwrap();
        drop(session);

        let row = store.fetch_by_id(1).await.unwrap();
        assert_eq!(row.order, 1);
    }

    #[tokio::test]
    async fn item_in_another_group_is_not_a_target() {
        let (mut engine, _store) = seeded_engine(&[("a", Mine), ("b", Partner)]).await;
        let mut session = DragSession::new(&mut engine);

        session.pointer_down(1, 0, 0);
        session.pointer_move(10, 0);
        session.hover_item(2);
        assert_eq!(sequence(session.engine, Mine), vec![1]);
        assert_eq!(sequence(session.engine, Partner), vec![2]);
    }

    #[tokio::test]
    async fn cancel_discards_preview_and_persists_nothing() {
        let (mut engine, store) = seeded_engine(&[("a", Mine), ("b", Mine), ("c", Mine)]).await;
        let mut session = DragSession::new(&mut engine);

        session.pointer_down(1, 0, 0);
        session.pointer_move(10, 0);
        session.hover_item(3);
        session.cancel();
        drop(session);

        assert_eq!(sequence(&engine, Mine), vec![1, 2, 3]);
        let persisted: Vec<i32> = store
            .fetch_all()
            .await
            .unwrap()
            .iter()
            .map(|r| r.order)
            .collect();
        assert_eq!(persisted, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn release_without_target_discards_preview() {
        let (mut engine, _store) = seeded_engine(&[("a", Mine), ("b", Mine)]).await;
        let mut session = DragSession::new(&mut engine);

        session.pointer_down(2, 0, 0);
        session.pointer_move(10, 0);
        session.hover_item(1);
        session.hover_leave();
        session.pointer_up().await.unwrap();
        drop(session);

        assert_eq!(sequence(&engine, Mine), vec![1, 2]);
    }
}
