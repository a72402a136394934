//! Per-item view models.
//!
//! Rendering never consults the selection or expansion sequences directly;
//! it consumes one [`ItemViewModel`] per item, synthesized fresh whenever
//! items, selection, expansion, or the comparator change. The view model
//! borrows the item and carries the two derived flags; consumers read it
//! and never mutate it.

use crate::comparator::Comparator;

/// A raw item annotated with its derived selection and expansion flags.
///
/// Produced by [`synthesize`]; read-only by construction.
#[derive(Debug, PartialEq)]
pub struct ItemViewModel<'a, T> {
    item: &'a T,
    is_selected: bool,
    is_expanded: bool,
}

impl<T> Clone for ItemViewModel<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ItemViewModel<'_, T> {}

impl<'a, T> ItemViewModel<'a, T> {
    /// The underlying item.
    pub fn item(&self) -> &'a T {
        self.item
    }

    /// `true` iff a comparator match for the item was present in the
    /// selection sequence at synthesis time.
    pub fn is_selected(&self) -> bool {
        self.is_selected
    }

    /// `true` iff a comparator match for the item was present in the
    /// expansion sequence at synthesis time.
    pub fn is_expanded(&self) -> bool {
        self.is_expanded
    }
}

/// Synthesizes a view model per item, in items order.
///
/// An item is flagged selected or expanded iff any member of the respective
/// sequence matches it via the comparator; the sequences may hold distinct
/// values representing the same records. An empty item sequence yields an
/// empty result.
///
/// Each call scans both sequences per item; callers that need better
/// asymptotics on very large collections should index the sequences by the
/// comparator's key themselves.
pub fn synthesize<'a, T>(
    items: &'a [T],
    selection: &[T],
    expansion: &[T],
    comparator: &Comparator<T>,
) -> Vec<ItemViewModel<'a, T>> {
    items
        .iter()
        .map(|item| ItemViewModel {
            item,
            is_selected: selection.iter().any(|member| comparator(member, item)),
            is_expanded: expansion.iter().any(|member| comparator(member, item)),
        })
        .collect()
}
