//! Selection gestures over an ordered item sequence.
//!
//! This module implements the three selection gestures a list view supports:
//!
//! - **Basic**: plain activation; exclusive single selection.
//! - **Specific**: additive toggle that leaves unrelated members alone.
//! - **Range**: selects the contiguous span between the anchor and the
//!   target in items order.
//!
//! Every gesture is a pure function from one snapshot to the next: it takes
//! the current selection and [`RangeState`] by reference and returns the new
//! selection and the new range state. Nothing here holds state between
//! calls; the caller owns both sequences and threads the range state through
//! gesture after gesture, applying gestures one at a time in the order the
//! user produced them.
//!
//! The shell classifies each raw input event into exactly one [`Gesture`]
//! before calling in (modifier-key detection is its problem, not ours), with
//! specific taking precedence over range, and range over basic.

use crate::comparator::Comparator;

/// The selection gesture a raw input event was classified as.
///
/// Exactly one variant per event; the caller resolves precedence
/// (specific > range > basic) before dispatching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    /// Plain activation: exclusive single selection.
    Basic,
    /// Additive toggle (e.g. a modifier-key click).
    Specific,
    /// Span selection between the anchor and the target (e.g. shift-click).
    Range,
}

/// Boundary state of the most recent range gesture.
///
/// `anchor` is the item that started the current range interaction;
/// `endpoint` is the other boundary of the last committed range. Both start
/// out absent. After any range gesture the two together describe a
/// contiguous span in items order and the selection equals exactly that
/// span.
///
/// The caller stores this value and passes it back into the next gesture;
/// it is never hidden inside a component.
#[derive(Debug, Clone, PartialEq)]
pub struct RangeState<T> {
    anchor: Option<T>,
    endpoint: Option<T>,
}

impl<T> Default for RangeState<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> RangeState<T> {
    /// Creates an empty range state, as before any gesture has occurred.
    pub const fn new() -> Self {
        Self {
            anchor: None,
            endpoint: None,
        }
    }

    /// The item that started the current range interaction, if any.
    pub fn anchor(&self) -> Option<&T> {
        self.anchor.as_ref()
    }

    /// The far boundary of the last committed range, if any.
    pub fn endpoint(&self) -> Option<&T> {
        self.endpoint.as_ref()
    }

    /// Returns `true` if a range gesture can extend from here.
    pub fn is_anchored(&self) -> bool {
        self.anchor.is_some()
    }
}

/// Applies one classified gesture to a selection snapshot.
///
/// Returns the new selection (in the order described by the gesture) and
/// the new range state to carry into the next gesture.
pub fn apply<T: Clone>(
    gesture: Gesture,
    items: &[T],
    selection: &[T],
    target: &T,
    range_state: &RangeState<T>,
    comparator: &Comparator<T>,
) -> (Vec<T>, RangeState<T>) {
    tracing::trace!(
        target: "trellis_list::selection",
        ?gesture,
        selected = selection.len(),
        "applying selection gesture"
    );
    match gesture {
        Gesture::Basic => basic(selection, target, comparator),
        Gesture::Specific => specific(selection, target, range_state, comparator),
        Gesture::Range => range(items, selection, target, range_state, comparator),
    }
}

/// Basic gesture: exclusive single selection.
///
/// If the target is already the *only* selected item, it is deselected and
/// the selection becomes empty; otherwise the selection becomes exactly
/// `[target]`. Either way the target becomes the fresh range anchor and any
/// pending endpoint is discarded.
pub fn basic<T: Clone>(
    selection: &[T],
    target: &T,
    comparator: &Comparator<T>,
) -> (Vec<T>, RangeState<T>) {
    let sole_selected = selection.len() == 1 && comparator(&selection[0], target);
    let new_selection = if sole_selected {
        Vec::new()
    } else {
        vec![target.clone()]
    };
    let new_range = RangeState {
        anchor: Some(target.clone()),
        endpoint: None,
    };
    (new_selection, new_range)
}

/// Specific gesture: toggle the target without disturbing other members.
///
/// Removes the first comparator match if present, appends the target
/// otherwise. A live anchor survives the toggle so an in-progress range
/// interaction can continue from it; the target only becomes the anchor
/// when none exists yet and the resulting selection is non-empty. An empty
/// selection clears the anchor, and the endpoint is always cleared.
pub fn specific<T: Clone>(
    selection: &[T],
    target: &T,
    range_state: &RangeState<T>,
    comparator: &Comparator<T>,
) -> (Vec<T>, RangeState<T>) {
    let mut new_selection = selection.to_vec();
    match new_selection.iter().position(|member| comparator(member, target)) {
        Some(index) => {
            new_selection.remove(index);
        }
        None => new_selection.push(target.clone()),
    }
    let anchor = if new_selection.is_empty() {
        None
    } else {
        range_state
            .anchor
            .clone()
            .or_else(|| Some(target.clone()))
    };
    (
        new_selection,
        RangeState {
            anchor,
            endpoint: None,
        },
    )
}

/// Range gesture: select the contiguous span between anchor and target.
///
/// Both boundaries are located in `items` by first comparator match. The
/// selection is *replaced* by the inclusive span in items order; a range
/// means "select exactly this visible span", not "extend whatever was
/// selected before". The target becomes the endpoint; the anchor is
/// unchanged.
///
/// Degrades soft to [`basic`] when no anchor exists yet, when the anchor is
/// stale (no longer found in `items`), or when the target cannot be
/// located.
pub fn range<T: Clone>(
    items: &[T],
    selection: &[T],
    target: &T,
    range_state: &RangeState<T>,
    comparator: &Comparator<T>,
) -> (Vec<T>, RangeState<T>) {
    let anchor_index = range_state
        .anchor
        .as_ref()
        .and_then(|anchor| items.iter().position(|item| comparator(item, anchor)));
    let target_index = items.iter().position(|item| comparator(item, target));

    let (Some(anchor_index), Some(target_index)) = (anchor_index, target_index) else {
        tracing::debug!(
            target: "trellis_list::selection",
            anchored = range_state.is_anchored(),
            "range gesture without a locatable anchor or target; degrading to basic"
        );
        return basic(selection, target, comparator);
    };

    let (first, last) = if anchor_index <= target_index {
        (anchor_index, target_index)
    } else {
        (target_index, anchor_index)
    };
    let new_selection = items[first..=last].to_vec();
    let new_range = RangeState {
        anchor: range_state.anchor.clone(),
        endpoint: Some(target.clone()),
    };
    (new_selection, new_range)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comparator;

    fn items() -> Vec<&'static str> {
        vec!["a", "b", "c", "d", "e"]
    }

    fn cmp() -> Comparator<&'static str> {
        comparator::by_value()
    }

    #[test]
    fn test_basic_selects_exactly_target() {
        let (selection, range_state) = basic(&["a", "c"], &"b", &cmp());
        assert_eq!(selection, vec!["b"]);
        assert_eq!(range_state.anchor(), Some(&"b"));
        assert_eq!(range_state.endpoint(), None);
    }

    #[test]
    fn test_basic_deselects_sole_selected_item() {
        let (selection, range_state) = basic(&["b"], &"b", &cmp());
        assert!(selection.is_empty());
        // Even a deselect re-anchors; the next range starts here.
        assert_eq!(range_state.anchor(), Some(&"b"));
    }

    #[test]
    fn test_basic_collapses_multi_selection_to_target() {
        let (selection, _) = basic(&["b", "c", "d"], &"c", &cmp());
        assert_eq!(selection, vec!["c"]);
    }

    #[test]
    fn test_specific_toggle_is_idempotent_over_two_applications() {
        let start = vec!["a", "d"];
        let range_state = RangeState::new();
        let (once, range_state) = specific(&start, &"b", &range_state, &cmp());
        assert_eq!(once, vec!["a", "d", "b"]);
        let (twice, _) = specific(&once, &"b", &range_state, &cmp());
        assert_eq!(twice, start);
    }

    #[test]
    fn test_specific_clears_anchor_when_selection_empties() {
        let (_, anchored) = basic(&[], &"b", &cmp());
        let (selection, range_state) = specific(&["b"], &"b", &anchored, &cmp());
        assert!(selection.is_empty());
        assert!(!range_state.is_anchored());
    }

    #[test]
    fn test_specific_preserves_live_anchor() {
        let (_, anchored) = basic(&[], &"b", &cmp());
        let (selection, range_state) = specific(&["b", "c"], &"e", &anchored, &cmp());
        assert_eq!(selection, vec!["b", "c", "e"]);
        assert_eq!(range_state.anchor(), Some(&"b"));
        assert_eq!(range_state.endpoint(), None);
    }

    #[test]
    fn test_specific_anchors_target_when_no_anchor_exists() {
        let (selection, range_state) =
            specific(&["a"], &"b", &RangeState::new(), &cmp());
        assert_eq!(selection, vec!["a", "b"]);
        assert_eq!(range_state.anchor(), Some(&"b"));
    }

    #[test]
    fn test_range_selects_inclusive_span_in_items_order() {
        let items = items();
        let (_, anchored) = basic(&[], &"b", &cmp());
        let (selection, range_state) = range(&items, &["b"], &"d", &anchored, &cmp());
        assert_eq!(selection, vec!["b", "c", "d"]);
        assert_eq!(range_state.anchor(), Some(&"b"));
        assert_eq!(range_state.endpoint(), Some(&"d"));
    }

    #[test]
    fn test_range_backwards_span() {
        let items = items();
        let (_, anchored) = basic(&[], &"d", &cmp());
        let (selection, _) = range(&items, &["d"], &"a", &anchored, &cmp());
        assert_eq!(selection, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_range_replaces_unrelated_prior_selection() {
        let items = items();
        let (_, anchored) = basic(&[], &"c", &cmp());
        let (selection, _) = range(&items, &["a", "e", "c"], &"d", &anchored, &cmp());
        assert_eq!(selection, vec!["c", "d"]);
    }

    #[test]
    fn test_range_on_anchor_collapses_to_single_item() {
        let items = items();
        let (_, anchored) = basic(&[], &"b", &cmp());
        let (selection, range_state) = range(&items, &["b", "c", "d"], &"b", &anchored, &cmp());
        assert_eq!(selection, vec!["b"]);
        assert_eq!(range_state.endpoint(), Some(&"b"));
    }

    #[test]
    fn test_range_without_anchor_degrades_to_basic() {
        let items = items();
        let (selection, range_state) =
            range(&items, &["a", "e"], &"c", &RangeState::new(), &cmp());
        assert_eq!(selection, vec!["c"]);
        assert_eq!(range_state.anchor(), Some(&"c"));
        assert_eq!(range_state.endpoint(), None);
    }

    #[test]
    fn test_range_with_stale_anchor_degrades_to_basic() {
        let items = items();
        let (_, anchored) = basic(&[], &"z", &cmp());
        let (selection, range_state) = range(&items, &["z"], &"c", &anchored, &cmp());
        assert_eq!(selection, vec!["c"]);
        assert_eq!(range_state.anchor(), Some(&"c"));
    }

    #[test]
    fn test_range_determinism_regardless_of_intermediate_endpoint() {
        let items = items();
        let (_, anchored) = basic(&[], &"a", &cmp());
        let (via_d, after_d) = range(&items, &["a"], &"d", &anchored, &cmp());
        let (settled, _) = range(&items, &via_d, &"c", &after_d, &cmp());
        let (direct, _) = range(&items, &["a"], &"c", &anchored, &cmp());
        assert_eq!(settled, direct);
        assert_eq!(settled, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_duplicate_items_use_first_matching_index() {
        let items = vec!["a", "b", "a", "c"];
        let (_, anchored) = basic(&[], &"a", &cmp());
        // Anchor "a" resolves to index 0, not 2, so the span is [0..=3].
        let (selection, _) = range(&items, &["a"], &"c", &anchored, &cmp());
        assert_eq!(selection, vec!["a", "b", "a", "c"]);
    }

    #[test]
    fn test_apply_dispatches_by_gesture() {
        let items = items();
        let range_state = RangeState::new();
        let (selection, range_state) = apply(
            Gesture::Basic,
            &items,
            &[],
            &"b",
            &range_state,
            &cmp(),
        );
        let (selection, range_state) = apply(
            Gesture::Range,
            &items,
            &selection,
            &"d",
            &range_state,
            &cmp(),
        );
        let (selection, _) = apply(
            Gesture::Specific,
            &items,
            &selection,
            &"a",
            &range_state,
            &cmp(),
        );
        assert_eq!(selection, vec!["b", "c", "d", "a"]);
    }
}
