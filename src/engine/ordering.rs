//! Ordering Helpers
//!
//! Pure index arithmetic shared by drag previews and persisted moves.

use std::cmp::Ordering;

use crate::domain::{Group, ListItem};

/// Display comparator inside a group: order asc, ties broken by id
pub(crate) fn display_cmp<G>(a: &ListItem<G>, b: &ListItem<G>) -> Ordering {
    a.order.cmp(&b.order).then(a.id.cmp(&b.id))
}

/// Ids of a group's items in display order
pub(crate) fn group_ids<G: Group>(items: &[ListItem<G>], group: G) -> Vec<i64> {
    let mut rows: Vec<&ListItem<G>> = items.iter().filter(|item| item.group == group).collect();
    rows.sort_by(|a, b| display_cmp(a, b));
    rows.into_iter().map(|item| item.id).collect()
}

/// Highest order used in a group, None when the group is empty
pub(crate) fn max_order_in<G: Group>(items: &[ListItem<G>], group: G) -> Option<i32> {
    items
        .iter()
        .filter(|item| item.group == group)
        .map(|item| item.order)
        .max()
}

/// Array-move semantics: remove at `from`, insert at `to`, so the entries
/// between the two slots shift by one.
pub(crate) fn array_move<T>(entries: &mut Vec<T>, from: usize, to: usize) {
    let entry = entries.remove(from);
    let to = to.min(entries.len());
    entries.insert(to, entry);
}

/// Contiguous 1..=N orders for the given display sequence. Returns the
/// (id, new_order) pairs of rows whose order actually changes.
pub(crate) fn renormalize<G: Group>(items: &[ListItem<G>], ordered_ids: &[i64]) -> Vec<(i64, i32)> {
    ordered_ids
        .iter()
        .enumerate()
        .filter_map(|(index, id)| {
            let new_order = index as i32 + 1;
            match items.iter().find(|item| item.id == *id) {
                Some(row) if row.order != new_order => Some((*id, new_order)),
                _ => None,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::WishlistGroup;
    use chrono::Utc;

    fn item(id: i64, group: WishlistGroup, order: i32) -> ListItem<WishlistGroup> {
        let now = Utc::now();
        ListItem {
            id,
            text: format!("item {}", id),
            checked: false,
            group,
            order,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn display_order_breaks_ties_by_id() {
        let items = vec![
            item(9, WishlistGroup::Mine, 2),
            item(3, WishlistGroup::Mine, 2),
            item(5, WishlistGroup::Mine, 1),
        ];
        assert_eq!(group_ids(&items, WishlistGroup::Mine), vec![5, 3, 9]);
    }

    #[test]
    fn array_move_shifts_intermediate_entries() {
        let mut ids = vec![1, 2, 3, 4];
        array_move(&mut ids, 0, 2);
        assert_eq!(ids, vec![2, 3, 1, 4]);

        let mut ids = vec![1, 2, 3, 4];
        array_move(&mut ids, 3, 0);
        assert_eq!(ids, vec![4, 1, 2, 3]);
    }

    #[test]
    fn renormalize_reports_only_changed_rows() {
        let items = vec![
            item(1, WishlistGroup::Mine, 1),
            item(2, WishlistGroup::Mine, 5),
            item(3, WishlistGroup::Mine, 9),
        ];
        // display sequence unchanged; gaps collapse to 1..=3
        let changed = renormalize(&items, &[1, 2, 3]);
        assert_eq!(changed, vec![(2, 2), (3, 3)]);
    }
}
