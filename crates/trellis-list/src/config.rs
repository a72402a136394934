//! List configuration.
//!
//! [`ListConfig`] bundles everything the shell configures once per list and
//! then passes into every core operation: the resolved item comparator, the
//! optional type-discriminator extractor and [`TypeRegistry`], and the
//! [`Windowing`] hints the core passes through untouched.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::comparator::{self, Comparator};
use crate::controls::{TypeKeyFn, TypeRegistry};

/// Windowing hints consumed by the rendering shell.
///
/// The core performs no computation on these; they travel with the rest of
/// the list configuration so a single settings blob can describe a list.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Windowing {
    /// Rows rendered beyond the visible viewport on each side.
    pub buffer_size: usize,
    /// Row height assumed before a row has been measured.
    pub default_height: f32,
    /// Skip per-row measurement and always use the default height.
    pub always_use_default_height: bool,
}

impl Default for Windowing {
    fn default() -> Self {
        Self {
            buffer_size: 10,
            default_height: 50.0,
            always_use_default_height: false,
        }
    }
}

/// Per-list configuration: comparator, type information, windowing hints.
///
/// Built once, in the builder style, and borrowed by every operation:
///
/// ```
/// use trellis_list::{ListConfig, TypeDescriptor, TypeRegistry};
///
/// #[derive(Clone)]
/// struct Row { id: u64, kind: &'static str }
///
/// let config = ListConfig::by_item_key(|row: &Row| Some(row.id))
///     .with_type_key(|row: &Row| Some(row.kind.to_owned()))
///     .with_registry(
///         TypeRegistry::new()
///             .insert("alert", TypeDescriptor::new().with_controls(["ack"])),
///     );
/// assert!(config.registry().is_some());
/// ```
pub struct ListConfig<T> {
    comparator: Comparator<T>,
    keyed: bool,
    type_key: Option<TypeKeyFn<T>>,
    registry: Option<TypeRegistry>,
    windowing: Windowing,
}

impl<T: PartialEq + 'static> ListConfig<T> {
    /// Configuration without an item key: items match by value equality.
    pub fn by_value() -> Self {
        Self {
            comparator: comparator::by_value(),
            keyed: false,
            type_key: None,
            registry: None,
            windowing: Windowing::default(),
        }
    }
}

impl<T: 'static> ListConfig<T> {
    /// Configuration with an item key: items match by extracted key value.
    pub fn by_item_key<K, F>(extract: F) -> Self
    where
        K: PartialEq,
        F: Fn(&T) -> Option<K> + Send + Sync + 'static,
    {
        Self::with_comparator(comparator::by_key(extract))
    }

    /// Configuration with a caller-supplied comparator.
    pub fn with_comparator(comparator: Comparator<T>) -> Self {
        Self {
            comparator,
            keyed: true,
            type_key: None,
            registry: None,
            windowing: Windowing::default(),
        }
    }

    /// Sets the type-discriminator extractor.
    ///
    /// Warns (non-fatally) when no item key is configured: type-based
    /// behavior then matches items by value equality, which silently breaks
    /// down once the same record appears as distinct values.
    pub fn with_type_key<F>(mut self, extract: F) -> Self
    where
        F: Fn(&T) -> Option<String> + Send + Sync + 'static,
    {
        if !self.keyed {
            tracing::warn!(
                target: "trellis_list::config",
                "a type key is configured without an item key; item matching falls back to value equality"
            );
        }
        self.type_key = Some(Arc::new(extract));
        self
    }

    /// Sets the type registry.
    pub fn with_registry(mut self, registry: TypeRegistry) -> Self {
        self.registry = Some(registry);
        self
    }

    /// Sets the windowing hints.
    pub fn with_windowing(mut self, windowing: Windowing) -> Self {
        self.windowing = windowing;
        self
    }
}

impl<T> ListConfig<T> {
    /// The resolved item comparator.
    pub fn comparator(&self) -> &Comparator<T> {
        &self.comparator
    }

    /// The type-discriminator extractor, if configured.
    pub fn type_key(&self) -> Option<&TypeKeyFn<T>> {
        self.type_key.as_ref()
    }

    /// The type registry, if configured.
    pub fn registry(&self) -> Option<&TypeRegistry> {
        self.registry.as_ref()
    }

    /// The windowing hints (always present; defaults apply).
    pub fn windowing(&self) -> &Windowing {
        &self.windowing
    }
}
