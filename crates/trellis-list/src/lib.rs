//! Trellis List - selection and expansion state for list views.
//!
//! This crate is the interaction core of a virtualized list: given an
//! ordered item collection and the caller-owned selection/expansion
//! snapshots, it applies classified selection gestures (basic, specific,
//! range), maintains the range anchor between gestures, synthesizes a
//! read-only view model per item, and resolves which bulk-action controls
//! apply to the selected item types.
//!
//! Rendering, virtualization, scroll restoration, and event classification
//! live in the shell around this crate. Every operation here is a
//! synchronous, pure transform of one snapshot into the next; the only
//! state carried between gestures is the [`RangeState`] the caller threads
//! through (or lets [`ListState`] hold for it).
//!
//! # Example
//!
//! ```
//! use trellis_list::{Gesture, ListConfig, ListState};
//!
//! let items = vec!["a", "b", "c", "d", "e"];
//! let config = ListConfig::by_value();
//! let mut state = ListState::new();
//!
//! // Click "b", then shift-click "d": the span b..=d is selected.
//! state.select(&items, Gesture::Basic, &"b", &config);
//! let outcome = state.select(&items, Gesture::Range, &"d", &config);
//! assert_eq!(outcome.selection, vec!["b", "c", "d"]);
//!
//! // Ctrl-click "a" adds it without disturbing the span.
//! let outcome = state.select(&items, Gesture::Specific, &"a", &config);
//! assert_eq!(outcome.selection, vec!["b", "c", "d", "a"]);
//! ```
//!
//! # Architecture
//!
//! ```text
//! items + selection + expansion ──> view_model::synthesize ──> ItemViewModel*
//!
//! gesture ──> selection::apply ──┬──> new selection + RangeState
//!                                └──> controls::resolve ──> ControlsByType
//! ```
//!
//! Item equality is resolved once from the configured key rule (see
//! [`comparator`]) and threaded through every matching operation, so
//! distinct values representing the same record behave as the same item.

pub mod comparator;
pub mod config;
pub mod controls;
pub mod expansion;
pub mod selection;
pub mod state;
pub mod view_model;

pub use comparator::Comparator;
pub use config::{ListConfig, Windowing};
pub use controls::{ControlsByType, TypeDescriptor, TypeKeyFn, TypeRegistry};
pub use selection::{Gesture, RangeState};
pub use state::{ListState, SelectionOutcome};
pub use view_model::ItemViewModel;
