//! Move Intent
//!
//! The discrete transition a drag gesture asks for.

/// A requested item transition: reorder within a group or relocate to
/// another group. Produced by the drag session, consumed once by the
/// engine, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveIntent<G> {
    pub item_id: i64,
    pub source_group: G,
    pub target_group: G,
    /// Zero-based insertion index inside the target group's display order.
    /// Ignored for cross-group moves, which always append.
    pub target_index: usize,
}
