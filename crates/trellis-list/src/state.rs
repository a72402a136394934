//! Caller-owned list state.
//!
//! The pure modules ([`crate::selection`], [`crate::expansion`],
//! [`crate::view_model`], [`crate::controls`]) each transform one snapshot
//! into the next. [`ListState`] is the convenience layer that owns those
//! snapshots (the selection sequence, the expansion sequence, and the
//! [`RangeState`] carried between gestures) and wires a classified gesture
//! through to a [`SelectionOutcome`].
//!
//! The item sequence itself stays with the caller and is passed in per
//! call; items may be reloaded, filtered, or re-sorted between gestures
//! without this state being told.

use crate::config::ListConfig;
use crate::controls::{self, ControlsByType};
use crate::expansion;
use crate::selection::{self, Gesture, RangeState};
use crate::view_model::{self, ItemViewModel};

/// What a selection-affecting gesture surfaces to the shell: the new
/// selection and, when type resolution is configured, the per-type control
/// mapping.
///
/// `controls_by_type` is `None` when no registry or type key is
/// configured, which is distinct from `Some` of an empty mapping.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionOutcome<T> {
    /// The new selection sequence, in gesture order.
    pub selection: Vec<T>,
    /// Controls applicable to each selected type, if resolvable.
    pub controls_by_type: Option<ControlsByType>,
}

/// Selection, expansion, and range state for one list.
///
/// # Example
///
/// ```
/// use trellis_list::{Gesture, ListConfig, ListState};
///
/// let config = ListConfig::by_value();
/// let items = vec!["alpha", "beta", "gamma", "delta"];
/// let mut state = ListState::new();
///
/// state.select(&items, Gesture::Basic, &items[1], &config);
/// state.select(&items, Gesture::Range, &items[3], &config);
/// assert_eq!(state.selection(), &items[1..=3]);
///
/// let models = state.view_models(&items, &config);
/// assert!(models[1].is_selected() && models[3].is_selected());
/// assert!(!models[0].is_selected());
/// ```
#[derive(Debug, Clone)]
pub struct ListState<T> {
    selection: Vec<T>,
    expanded: Vec<T>,
    range: RangeState<T>,
}

impl<T> Default for ListState<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ListState<T> {
    /// Creates state with nothing selected and nothing expanded.
    pub const fn new() -> Self {
        Self {
            selection: Vec::new(),
            expanded: Vec::new(),
            range: RangeState::new(),
        }
    }

    /// The current selection sequence, in gesture order.
    pub fn selection(&self) -> &[T] {
        &self.selection
    }

    /// The current expansion sequence.
    pub fn expanded(&self) -> &[T] {
        &self.expanded
    }

    /// The range state carried between gestures.
    pub fn range(&self) -> &RangeState<T> {
        &self.range
    }
}

impl<T: Clone> ListState<T> {
    /// Applies one classified selection gesture.
    ///
    /// Stores the new selection and range state, then resolves the per-type
    /// control mapping for the shell.
    pub fn select(
        &mut self,
        items: &[T],
        gesture: Gesture,
        target: &T,
        config: &ListConfig<T>,
    ) -> SelectionOutcome<T> {
        let (new_selection, new_range) = selection::apply(
            gesture,
            items,
            &self.selection,
            target,
            &self.range,
            config.comparator(),
        );
        self.selection = new_selection;
        self.range = new_range;

        let controls_by_type =
            controls::resolve(&self.selection, config.registry(), config.type_key());
        tracing::trace!(
            target: "trellis_list::state",
            selected = self.selection.len(),
            resolved_types = controls_by_type.as_ref().map(|map| map.len()),
            "selection gesture settled"
        );

        SelectionOutcome {
            selection: self.selection.clone(),
            controls_by_type,
        }
    }

    /// Toggles the target's expansion.
    pub fn toggle_expansion(&mut self, target: &T, config: &ListConfig<T>) -> &[T] {
        self.expanded = expansion::toggle(&self.expanded, target, config.comparator());
        &self.expanded
    }

    /// Expands every item in the sequence.
    pub fn expand_all(&mut self, items: &[T]) -> &[T] {
        self.expanded = expansion::expand_all(items);
        &self.expanded
    }

    /// Collapses everything.
    pub fn collapse_all(&mut self) -> &[T] {
        self.expanded = expansion::collapse_all();
        &self.expanded
    }

    /// Synthesizes the per-item view models for the current state.
    pub fn view_models<'a>(
        &self,
        items: &'a [T],
        config: &ListConfig<T>,
    ) -> Vec<ItemViewModel<'a, T>> {
        view_model::synthesize(items, &self.selection, &self.expanded, config.comparator())
    }
}
