//! List DragDrop State Machine
//!
//! UI-toolkit-agnostic drag-and-drop tracking for list widgets.
//! Uses movement threshold to distinguish click from drag.

/// Drop target types
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DropTarget<G> {
    /// Drop on a specific item (insert at its position)
    Item(i64),
    /// Drop on a whole group section (append to that group)
    Group(G),
}

/// Movement threshold in pixels to start dragging
const DRAG_THRESHOLD_PX: i32 = 5;

/// Pressed item waiting to cross the movement threshold
#[derive(Clone, Copy, Debug)]
struct Pending {
    item_id: i64,
    start_x: i32,
    start_y: i32,
}

/// Pointer-drag state machine.
///
/// The host forwards raw pointer events; the machine reports at most one
/// `(dragged_id, target)` per completed gesture via [`DragController::pointer_up`].
/// A press that never crosses the threshold stays a click and reports nothing.
#[derive(Debug)]
pub struct DragController<G> {
    /// Pending item id (pointer down but not yet dragging)
    pending: Option<Pending>,
    dragging_id: Option<i64>,
    drop_target: Option<DropTarget<G>>,
}

impl<G> Default for DragController<G> {
    fn default() -> Self {
        Self {
            pending: None,
            dragging_id: None,
            drop_target: None,
        }
    }
}

impl<G: Copy + PartialEq> DragController<G> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Item id currently being dragged, if the threshold has been crossed.
    pub fn dragging_id(&self) -> Option<i64> {
        self.dragging_id
    }

    /// Current drop target under the pointer, if any.
    pub fn drop_target(&self) -> Option<DropTarget<G>> {
        self.drop_target
    }

    /// Primary-button press on an item. Records a pending drag with the
    /// start position; nothing is dragged until the pointer moves far enough.
    pub fn pointer_down(&mut self, item_id: i64, x: i32, y: i32) {
        self.pending = Some(Pending {
            item_id,
            start_x: x,
            start_y: y,
        });
    }

    /// Pointer movement. Promotes a pending press to a live drag once the
    /// pointer moves beyond the threshold. Returns true when a drag starts
    /// on this event.
    pub fn pointer_move(&mut self, x: i32, y: i32) -> bool {
        if self.dragging_id.is_some() {
            return false;
        }
        let Some(pending) = self.pending else {
            return false;
        };
        let dx = (x - pending.start_x).abs();
        let dy = (y - pending.start_y).abs();
        if dx > DRAG_THRESHOLD_PX || dy > DRAG_THRESHOLD_PX {
            self.dragging_id = Some(pending.item_id);
            true
        } else {
            false
        }
    }

    /// Pointer entered an item row. Dropping on self is not a target.
    pub fn enter_item(&mut self, item_id: i64) {
        if let Some(dragging) = self.dragging_id {
            if dragging != item_id {
                self.drop_target = Some(DropTarget::Item(item_id));
            }
        }
    }

    /// Pointer entered a group section header/body.
    pub fn enter_group(&mut self, group: G) {
        if self.dragging_id.is_some() {
            self.drop_target = Some(DropTarget::Group(group));
        }
    }

    /// Pointer left the current target.
    pub fn leave(&mut self) {
        if self.dragging_id.is_some() {
            self.drop_target = None;
        }
    }

    /// Pointer released. Yields the drop exactly once when an actual drag
    /// was in flight over a valid target; always resets the machine.
    pub fn pointer_up(&mut self) -> Option<(i64, DropTarget<G>)> {
        let dropped = match (self.dragging_id, self.drop_target) {
            (Some(dragged), Some(target)) => Some((dragged, target)),
            _ => None,
        };
        self.reset();
        dropped
    }

    /// Abort the gesture (e.g. Escape pressed or the widget unmounted).
    pub fn cancel(&mut self) {
        self.reset();
    }

    fn reset(&mut self) {
        self.pending = None;
        self.dragging_id = None;
        self.drop_target = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    enum Section {
        Left,
        Right,
    }

    #[test]
    fn press_without_movement_stays_a_click() {
        let mut dnd: DragController<Section> = DragController::new();
        dnd.pointer_down(1, 10, 10);
        assert!(!dnd.pointer_move(12, 11));
        assert_eq!(dnd.dragging_id(), None);
        assert_eq!(dnd.pointer_up(), None);
    }

    #[test]
    fn movement_past_threshold_starts_drag() {
        let mut dnd: DragController<Section> = DragController::new();
        dnd.pointer_down(1, 10, 10);
        assert!(dnd.pointer_move(20, 10));
        assert_eq!(dnd.dragging_id(), Some(1));
        // subsequent movement does not re-report the start
        assert!(!dnd.pointer_move(25, 10));
    }

    #[test]
    fn drop_on_item_reports_once_and_resets() {
        let mut dnd: DragController<Section> = DragController::new();
        dnd.pointer_down(1, 0, 0);
        dnd.pointer_move(10, 0);
        dnd.enter_item(2);
        assert_eq!(dnd.pointer_up(), Some((1, DropTarget::Item(2))));
        assert_eq!(dnd.pointer_up(), None);
        assert_eq!(dnd.dragging_id(), None);
    }

    #[test]
    fn self_is_not_a_drop_target() {
        let mut dnd: DragController<Section> = DragController::new();
        dnd.pointer_down(1, 0, 0);
        dnd.pointer_move(10, 0);
        dnd.enter_item(1);
        assert_eq!(dnd.drop_target(), None);
    }

    #[test]
    fn group_target_and_leave() {
        let mut dnd: DragController<Section> = DragController::new();
        dnd.pointer_down(3, 0, 0);
        dnd.pointer_move(0, 10);
        dnd.enter_group(Section::Right);
        assert_eq!(dnd.drop_target(), Some(DropTarget::Group(Section::Right)));
        dnd.leave();
        assert_eq!(dnd.drop_target(), None);
        assert_eq!(dnd.pointer_up(), None);
    }

    #[test]
    fn hover_without_drag_sets_no_target() {
        let mut dnd: DragController<Section> = DragController::new();
        dnd.enter_item(2);
        dnd.enter_group(Section::Left);
        assert_eq!(dnd.drop_target(), None);
    }

    #[test]
    fn cancel_discards_gesture() {
        let mut dnd: DragController<Section> = DragController::new();
        dnd.pointer_down(1, 0, 0);
        dnd.pointer_move(10, 0);
        dnd.enter_group(Section::Left);
        dnd.cancel();
        assert_eq!(dnd.pointer_up(), None);
    }
}
