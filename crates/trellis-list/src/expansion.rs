//! Expansion state over an item sequence.
//!
//! Expansion is membership only: an item is expanded iff a comparator match
//! for it is present in the expansion sequence. There is no range concept
//! and no anchor; the only operations are a per-item toggle and the two
//! batch forms.
//!
//! Like selection, these are pure snapshot transforms: the caller owns the
//! expansion sequence and replaces it with the returned one.

use crate::comparator::Comparator;

/// Toggles the target's membership in the expansion sequence.
///
/// Removes the first comparator match if present, appends the target
/// otherwise.
pub fn toggle<T: Clone>(expanded: &[T], target: &T, comparator: &Comparator<T>) -> Vec<T> {
    let mut new_expanded = expanded.to_vec();
    match new_expanded.iter().position(|member| comparator(member, target)) {
        Some(index) => {
            new_expanded.remove(index);
        }
        None => new_expanded.push(target.clone()),
    }
    new_expanded
}

/// Expands every item: returns a copy of the full item sequence.
pub fn expand_all<T: Clone>(items: &[T]) -> Vec<T> {
    items.to_vec()
}

/// Collapses everything: returns an empty expansion sequence.
pub fn collapse_all<T>() -> Vec<T> {
    Vec::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comparator;

    #[test]
    fn test_toggle_adds_then_removes() {
        let cmp = comparator::by_value::<&str>();
        let expanded = toggle(&[], &"a", &cmp);
        assert_eq!(expanded, vec!["a"]);
        let expanded = toggle(&expanded, &"b", &cmp);
        assert_eq!(expanded, vec!["a", "b"]);
        let expanded = toggle(&expanded, &"a", &cmp);
        assert_eq!(expanded, vec!["b"]);
    }

    #[test]
    fn test_expand_all_then_collapse_all() {
        let items = vec![1, 2, 3];
        let expanded = expand_all(&items);
        assert_eq!(expanded, items);
        let expanded: Vec<i32> = collapse_all();
        assert!(expanded.is_empty());
    }
}
