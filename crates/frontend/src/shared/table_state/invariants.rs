//! Structural rules for column order and sizing.

use std::collections::BTreeMap;

pub type ColumnVisibility = BTreeMap<String, bool>;
pub type ColumnOrder = Vec<String>;
pub type ColumnSizing = BTreeMap<String, f64>;

/// Puts pinned-left columns first and pinned-right columns last (each group
/// in its declared order); every other column keeps its relative position
/// from `order`. An empty order stays empty, meaning "definition order".
pub fn enforce_column_order(
    order: &[String],
    pinned_left: &[String],
    pinned_right: &[String],
) -> ColumnOrder {
    if order.is_empty() {
        return Vec::new();
    }

    let middle = order
        .iter()
        .filter(|col| !pinned_left.contains(*col) && !pinned_right.contains(*col))
        .cloned();

    pinned_left
        .iter()
        .cloned()
        .chain(middle)
        .chain(pinned_right.iter().cloned())
        .collect()
}

/// Clamps every width up to `min_size`.
pub fn enforce_min_column_size(sizing: &ColumnSizing, min_size: f64) -> ColumnSizing {
    sizing
        .iter()
        .map(|(col, size)| (col.clone(), size.max(min_size)))
        .collect()
}

/// Drag-and-drop reorder: removes `dragged` and inserts it at the index
/// `target` had. Unknown ids leave the order unchanged.
pub fn move_column(order: &[String], dragged: &str, target: &str) -> ColumnOrder {
    let mut next = order.to_vec();
    if dragged == target {
        return next;
    }
    let (Some(from), Some(to)) = (
        order.iter().position(|c| c == dragged),
        order.iter().position(|c| c == target),
    ) else {
        return next;
    };
    let column = next.remove(from);
    next.insert(to, column);
    next
}

/// Effective render order: columns named in `order` first (unknown ids are
/// skipped), then the remaining columns in definition order.
pub fn resolve_column_order<'a>(all_columns: &[&'a str], order: &[String]) -> Vec<&'a str> {
    let mut resolved: Vec<&'a str> = Vec::with_capacity(all_columns.len());
    let named = order
        .iter()
        .filter_map(|id| all_columns.iter().copied().find(|c| *c == id));
    for column in named.chain(all_columns.iter().copied()) {
        if !resolved.contains(&column) {
            resolved.push(column);
        }
    }
    resolved
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn ids(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_pins_pulled_to_edges() {
        let order = ids(&["price", "actions", "sku", "select", "vendor"]);
        let enforced = enforce_column_order(&order, &ids(&["select"]), &ids(&["actions"]));
        assert_eq!(enforced, ids(&["select", "price", "sku", "vendor", "actions"]));
    }

    #[test]
    fn test_empty_order_stays_empty() {
        assert!(enforce_column_order(&[], &ids(&["select"]), &[]).is_empty());
    }

    #[test]
    fn test_pinned_group_uses_declared_order() {
        let order = ids(&["b", "x", "a"]);
        let enforced = enforce_column_order(&order, &ids(&["a", "b"]), &[]);
        assert_eq!(enforced, ids(&["a", "b", "x"]));
    }

    #[test]
    fn test_min_size_clamps_up_only() {
        let sizing: ColumnSizing = [("sku".to_string(), 10.0), ("vendor".to_string(), 180.0)]
            .into_iter()
            .collect();
        let enforced = enforce_min_column_size(&sizing, 60.0);
        assert_eq!(enforced["sku"], 60.0);
        assert_eq!(enforced["vendor"], 180.0);
    }

    #[test]
    fn test_move_column() {
        let order = ids(&["a", "b", "c", "d"]);
        assert_eq!(move_column(&order, "a", "c"), ids(&["b", "c", "a", "d"]));
        assert_eq!(move_column(&order, "d", "b"), ids(&["a", "d", "b", "c"]));
        assert_eq!(move_column(&order, "zz", "b"), order);
    }

    #[test]
    fn test_resolve_column_order() {
        let all = ["id", "sku", "vendor", "price"];
        assert_eq!(resolve_column_order(&all, &[]), all.to_vec());
        assert_eq!(
            resolve_column_order(&all, &ids(&["price", "gone", "sku"])),
            vec!["price", "sku", "id", "vendor"]
        );
    }

    proptest! {
        #[test]
        fn pinned_columns_always_at_edges(
            middle in Just(ids(&["c1", "c2", "c3", "c4", "c5"])).prop_shuffle(),
            left_len in 0usize..3,
            right_len in 0usize..3,
        ) {
            let pinned_left = ids(&["l1", "l2"])[..left_len.min(2)].to_vec();
            let pinned_right = ids(&["r1", "r2"])[..right_len.min(2)].to_vec();

            let mut candidate = middle.clone();
            // Scatter the pinned ids through the candidate.
            for (i, id) in pinned_right.iter().chain(pinned_left.iter()).enumerate() {
                let at = (i * 2).min(candidate.len());
                candidate.insert(at, id.clone());
            }

            let enforced = enforce_column_order(&candidate, &pinned_left, &pinned_right);
            prop_assert!(enforced.starts_with(&pinned_left));
            prop_assert!(enforced.ends_with(&pinned_right));
            let inner = &enforced[pinned_left.len()..enforced.len() - pinned_right.len()];
            prop_assert_eq!(inner, &middle[..]);
        }

        #[test]
        fn sizes_respect_floor(
            sizing in prop::collection::btree_map("[a-z]{1,6}", 0.0f64..1000.0, 0..12),
            min in 1.0f64..200.0,
        ) {
            let enforced = enforce_min_column_size(&sizing, min);
            prop_assert_eq!(enforced.len(), sizing.len());
            for (col, size) in &enforced {
                prop_assert!(*size >= min);
                if sizing[col] >= min {
                    prop_assert_eq!(*size, sizing[col]);
                }
            }
        }
    }
}
