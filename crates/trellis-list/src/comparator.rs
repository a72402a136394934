//! Item equality resolution.
//!
//! Views, selection, and expansion all need one consistent answer to the
//! question "are these two items the same record?". Items may be distinct
//! values representing the same domain record (a selection snapshot taken
//! before a reload, say), so plain value equality is not always enough.
//!
//! A [`Comparator`] is resolved once, from an optional key rule, and then
//! threaded through every operation that matches items:
//!
//! - [`by_key`] compares the values produced by a key-extraction closure.
//!   Items missing their key compare unequal rather than panicking.
//! - [`by_value`] is the fallback when no key rule is configured and
//!   compares whole items via `PartialEq`.
//! - [`from_fn`] wraps an arbitrary predicate for callers with their own
//!   notion of identity.
//!
//! A comparator must be reflexive and symmetric over the item domain in use;
//! every matching operation in this crate assumes that.

use std::sync::Arc;

/// Type alias for an item-equality predicate.
///
/// Cheap to clone; shared between the configuration and any state that
/// outlives it.
pub type Comparator<T> = Arc<dyn Fn(&T, &T) -> bool + Send + Sync>;

/// Builds a comparator from a key-extraction closure.
///
/// Two items are equal iff **both** extractions yield `Some` and the keys
/// are equal. A missing key on either side compares unequal, so partially
/// constructed records never match anything.
///
/// # Example
///
/// ```
/// use trellis_list::comparator;
///
/// struct Record { id: Option<u64>, label: String }
///
/// let cmp = comparator::by_key(|r: &Record| r.id);
/// let a = Record { id: Some(1), label: "one".into() };
/// let b = Record { id: Some(1), label: "1".into() };
/// let c = Record { id: None, label: "draft".into() };
///
/// assert!(cmp(&a, &b));
/// assert!(!cmp(&a, &c));
/// assert!(!cmp(&c, &c));
/// ```
pub fn by_key<T, K, F>(extract: F) -> Comparator<T>
where
    T: 'static,
    K: PartialEq,
    F: Fn(&T) -> Option<K> + Send + Sync + 'static,
{
    Arc::new(move |lhs, rhs| match (extract(lhs), extract(rhs)) {
        (Some(lhs), Some(rhs)) => lhs == rhs,
        _ => false,
    })
}

/// Builds the fallback comparator: whole-item value equality.
///
/// Used when no key rule is configured. Callers whose items carry identity
/// outside their value (shared handles, interned records) should configure
/// a key or supply [`from_fn`] instead.
pub fn by_value<T>() -> Comparator<T>
where
    T: PartialEq + 'static,
{
    Arc::new(|lhs, rhs| lhs == rhs)
}

/// Wraps an arbitrary equality predicate as a [`Comparator`].
pub fn from_fn<T, F>(predicate: F) -> Comparator<T>
where
    T: 'static,
    F: Fn(&T, &T) -> bool + Send + Sync + 'static,
{
    Arc::new(predicate)
}
