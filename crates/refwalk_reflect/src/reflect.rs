//! The reflection capability and per-kind enumeration traits.

use std::fmt;

use crate::{Field, Kind};

/// A value whose shape can be inspected at runtime.
///
/// Implementations classify themselves by returning one [`ReflectRef`]
/// variant. Composite variants borrow `self` through the matching
/// enumeration trait, so a walker can visit children without knowing the
/// concrete type.
pub trait Reflect {
    /// Returns the fully qualified name of the concrete type.
    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    /// Classifies this value.
    fn reflect(&self) -> ReflectRef<'_>;
}

/// The classification of a reflected value.
#[derive(Clone, Copy)]
pub enum ReflectRef<'a> {
    Sequence(&'a dyn Sequence),
    Map(&'a dyn Map),
    Record(&'a dyn Record),
    Channel(&'a dyn Channel),
    Pointer(&'a dyn Pointer),
    Scalar(Scalar<'a>),
    Opaque,
}

impl ReflectRef<'_> {
    /// Returns the kind tag of this classification.
    pub const fn kind(&self) -> Kind {
        match self {
            ReflectRef::Sequence(_) => Kind::Sequence,
            ReflectRef::Map(_) => Kind::Map,
            ReflectRef::Record(_) => Kind::Record,
            ReflectRef::Channel(_) => Kind::Channel,
            ReflectRef::Pointer(_) => Kind::Pointer,
            ReflectRef::Scalar(_) => Kind::Scalar,
            ReflectRef::Opaque => Kind::Opaque,
        }
    }
}

impl fmt::Debug for ReflectRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReflectRef::Scalar(scalar) => f.debug_tuple("Scalar").field(scalar).finish(),
            other => f.write_str(other.kind().as_str()),
        }
    }
}

/// A primitive value with a textual form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scalar<'a> {
    Unit,
    Bool(bool),
    Char(char),
    Int(i128),
    Uint(u128),
    Float(f64),
    Str(&'a str),
}

impl fmt::Display for Scalar<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Unit => f.write_str("()"),
            Scalar::Bool(v) => write!(f, "{v}"),
            Scalar::Char(v) => write!(f, "{v}"),
            Scalar::Int(v) => write!(f, "{v}"),
            Scalar::Uint(v) => write!(f, "{v}"),
            Scalar::Float(v) => write!(f, "{v}"),
            Scalar::Str(v) => f.write_str(v),
        }
    }
}

/// Ordered elements addressed by index.
pub trait Sequence {
    /// Returns the number of elements.
    fn len(&self) -> usize;

    /// Returns true if the sequence has no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the element at `index`, or `None` if it cannot be produced.
    fn get(&self, index: usize) -> Option<&dyn Reflect>;
}

/// Key/value entries. Enumeration order is unspecified.
pub trait Map {
    /// Returns the number of entries.
    fn len(&self) -> usize;

    /// Returns true if the map has no entries.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns an iterator over all entries.
    fn entries(&self) -> Box<dyn Iterator<Item = (&dyn Reflect, &dyn Reflect)> + '_>;
}

/// Named members in declaration order.
///
/// Most types should use [`impl_record!`](crate::impl_record) instead of
/// implementing this by hand.
pub trait Record {
    /// Returns every declared member with its descriptor.
    fn fields(&self) -> Vec<(Field, &dyn Reflect)>;
}

/// A sequential source of owned values.
pub trait Channel {
    /// Blocks until a value arrives. Returns `None` once the source is closed.
    fn recv(&self) -> Option<Box<dyn Reflect>>;

    /// Returns a value only if one is immediately available.
    fn try_recv(&self) -> Option<Box<dyn Reflect>>;
}

/// A reference to another value.
pub trait Pointer {
    /// Returns the referenced value, or `None` for a null pointer.
    fn target(&self) -> Option<&dyn Reflect>;
}
