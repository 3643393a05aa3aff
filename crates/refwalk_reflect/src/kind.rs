//! Kind classification for reflected values.

use serde::{Deserialize, Serialize};

/// The shape of a reflected value.
///
/// Every [`ReflectRef`](crate::ReflectRef) maps to exactly one kind. `Invalid`
/// describes a [`Value`](crate::Value) handle that holds nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    /// No value at all.
    Invalid,

    // Composites
    /// Ordered elements addressed by index.
    Sequence,
    /// Key/value entries without a defined order.
    Map,
    /// Named members in declaration order.
    Record,
    /// A source that yields values on receive.
    Channel,

    // Indirection
    /// A reference to another value, possibly null.
    Pointer,

    // Terminals
    /// A primitive with a textual form.
    Scalar,
    /// A value that exposes nothing about its contents.
    Opaque,
}

impl Kind {
    /// Returns true if values of this kind have children a walker descends into.
    #[inline]
    pub const fn is_composite(self) -> bool {
        matches!(
            self,
            Kind::Sequence | Kind::Map | Kind::Record | Kind::Channel
        )
    }

    /// Returns true if values of this kind are reported to a visit function.
    #[inline]
    pub const fn is_terminal(self) -> bool {
        !self.is_composite()
    }

    /// Returns the lowercase name of this kind.
    pub const fn as_str(self) -> &'static str {
        match self {
            Kind::Invalid => "invalid",
            Kind::Sequence => "sequence",
            Kind::Map => "map",
            Kind::Record => "record",
            Kind::Channel => "channel",
            Kind::Pointer => "pointer",
            Kind::Scalar => "scalar",
            Kind::Opaque => "opaque",
        }
    }
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
