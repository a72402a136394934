//! Type-aware bulk-action control resolution.
//!
//! Lists that mix item types (alerts next to devices next to users, say)
//! surface bulk actions per type: the controls that apply to the selected
//! alerts are not the ones that apply to the selected devices. The
//! [`TypeRegistry`] declares, per type discriminator, which control
//! identifiers are valid; [`resolve`] groups the current selection by
//! discriminator and reports each type's control list.
//!
//! Registries are plain data; applications typically deserialize them from
//! settings alongside the rest of their list configuration.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Type alias for a type-discriminator extractor.
///
/// Returns the item's type discriminator, or `None` for items that carry no
/// type information.
pub type TypeKeyFn<T> = Arc<dyn Fn(&T) -> Option<String> + Send + Sync>;

/// The per-type control mapping surfaced after a selection gesture.
pub type ControlsByType = BTreeMap<String, Vec<String>>;

/// What one item type supports.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDescriptor {
    /// Identifiers of the bulk-action controls valid for this type.
    #[serde(default)]
    pub controls: Vec<String>,
    /// Whether items of this type have an expansion.
    #[serde(default)]
    pub expandable: bool,
}

impl TypeDescriptor {
    /// Creates a descriptor with no controls and no expansion.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the control identifiers for this type.
    pub fn with_controls<I, S>(mut self, controls: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.controls = controls.into_iter().map(Into::into).collect();
        self
    }

    /// Marks items of this type as carrying an expansion.
    pub fn with_expandable(mut self, expandable: bool) -> Self {
        self.expandable = expandable;
        self
    }
}

/// Mapping from type discriminator to [`TypeDescriptor`].
///
/// Lookup of an unknown discriminator yields "no controls" rather than an
/// error; a list can always contain items the registry never heard of.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeRegistry {
    types: BTreeMap<String, TypeDescriptor>,
}

impl TypeRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a descriptor for a type discriminator.
    pub fn insert(mut self, discriminator: impl Into<String>, descriptor: TypeDescriptor) -> Self {
        self.types.insert(discriminator.into(), descriptor);
        self
    }

    /// Looks up the descriptor for a discriminator.
    pub fn descriptor(&self, discriminator: &str) -> Option<&TypeDescriptor> {
        self.types.get(discriminator)
    }

    /// The control identifiers valid for a discriminator.
    ///
    /// Unknown discriminators get the empty list.
    pub fn controls_for(&self, discriminator: &str) -> &[String] {
        self.types
            .get(discriminator)
            .map(|descriptor| descriptor.controls.as_slice())
            .unwrap_or(&[])
    }

    /// Returns `true` if any registered type carries an expansion.
    ///
    /// Shells use this to decide whether an expand-all affordance applies.
    pub fn any_expandable(&self) -> bool {
        self.types.values().any(|descriptor| descriptor.expandable)
    }

    /// Number of registered types.
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Returns `true` if no types are registered.
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

/// Groups the selection by type discriminator and resolves each type's
/// control list.
///
/// Yields `None` (no mapping at all) when the registry or the extractor
/// is absent; callers must treat that distinctly from an empty mapping.
/// Items whose extractor yields no discriminator are skipped. The control
/// list is per-type, so repeated discriminators simply overwrite with the
/// same value.
pub fn resolve<T>(
    selection: &[T],
    registry: Option<&TypeRegistry>,
    type_key: Option<&TypeKeyFn<T>>,
) -> Option<ControlsByType> {
    let registry = registry?;
    let type_key = type_key?;

    let mut by_type = ControlsByType::new();
    for item in selection {
        let Some(discriminator) = type_key(item) else {
            continue;
        };
        let controls = registry.controls_for(&discriminator).to_vec();
        by_type.insert(discriminator, controls);
    }
    Some(by_type)
}
