//! Record member descriptors.

use serde::Serialize;

/// Describes one declared member of a [`Record`](crate::Record).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Field {
    /// Member name as declared.
    pub name: &'static str,
    /// Fully qualified name of the declared type.
    pub type_name: &'static str,
    /// Whether the member is embedded (its own members are promoted).
    pub embedded: bool,
    /// Whether the member is visible outside its defining module.
    pub exported: bool,
}

impl Field {
    /// Creates an exported, non-embedded member descriptor.
    #[inline]
    pub const fn new(name: &'static str, type_name: &'static str) -> Self {
        Self {
            name,
            type_name,
            embedded: false,
            exported: true,
        }
    }

    /// Sets whether the member is embedded.
    #[inline]
    pub const fn embedded(mut self, yes: bool) -> Self {
        self.embedded = yes;
        self
    }

    /// Sets whether the member is exported.
    #[inline]
    pub const fn exported(mut self, yes: bool) -> Self {
        self.exported = yes;
        self
    }
}
