//! Visited key/value pairs and their lineage.

use std::fmt;

use refwalk_reflect::{Field, NIL, Reflect, Value, short_type_name, summarize};

use crate::WalkError;

/// Maximum number of characters rendered for a key or value.
const SUMMARY_LIMIT: usize = 12;

/// Identifies a child within its parent.
#[derive(Debug)]
pub enum Key<'a> {
    /// Position within a sequence, or the receive counter for a channel.
    Index(usize),
    /// Map key.
    Entry(Value<'a>),
    /// Record member.
    Field(Field),
}

impl Key<'_> {
    /// Returns the type name used when rendering this key.
    pub fn type_name(&self) -> String {
        match self {
            Key::Index(_) => "usize".to_string(),
            Key::Entry(value) => value
                .type_name()
                .map_or_else(|| NIL.to_string(), short_type_name),
            Key::Field(_) => "Field".to_string(),
        }
    }

    /// Returns the sequence position or receive counter, if this is one.
    pub fn as_index(&self) -> Option<usize> {
        match self {
            Key::Index(index) => Some(*index),
            _ => None,
        }
    }

    /// Returns the record member descriptor, if this is one.
    pub fn as_field(&self) -> Option<&Field> {
        match self {
            Key::Field(field) => Some(field),
            _ => None,
        }
    }

    /// Returns the map key, if this is one.
    pub fn as_entry(&self) -> Option<&dyn Reflect> {
        match self {
            Key::Entry(value) => value.get(),
            _ => None,
        }
    }
}

impl fmt::Display for Key<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Index(index) => write!(f, "{index}"),
            Key::Entry(value) => write!(f, "{value}"),
            Key::Field(field) => f.write_str(field.name),
        }
    }
}

/// A key/value pair reported by a walk.
///
/// The root pair has no key and no parent. Each descendant links to the pair
/// it was reached from, so the whole lineage is available to the visit
/// function without copying.
#[derive(Debug)]
pub struct Pair<'a> {
    key: Option<Key<'a>>,
    value: Value<'a>,
    parent: Option<&'a Pair<'a>>,
    error: Option<WalkError>,
}

impl<'a> Pair<'a> {
    /// Creates a new pair.
    pub fn new(
        parent: Option<&'a Pair<'a>>,
        key: Option<Key<'a>>,
        value: Value<'a>,
        error: Option<WalkError>,
    ) -> Self {
        Self {
            key,
            value,
            parent,
            error,
        }
    }

    /// Creates a root pair over `value`.
    pub fn root(value: &'a dyn Reflect) -> Self {
        Self::new(None, None, Value::borrowed(value), None)
    }

    /// Returns the error associated with this pair.
    pub fn err(&self) -> Option<&WalkError> {
        self.error.as_ref()
    }

    /// Returns how many composite values this pair is nested within.
    pub fn depth(&self) -> usize {
        self.ancestors().count()
    }

    /// Returns the pair this one was reached from.
    pub fn parent(&self) -> Option<&'a Pair<'a>> {
        self.parent
    }

    /// Returns the key identifying this pair within its parent.
    pub fn key(&self) -> Option<&Key<'a>> {
        self.key.as_ref()
    }

    /// Returns the value, or `None` if the handle is invalid.
    pub fn val(&self) -> Option<&dyn Reflect> {
        self.value.get()
    }

    /// Returns the value handle.
    pub fn value(&self) -> &Value<'a> {
        &self.value
    }

    /// Returns the key and the value.
    pub fn pair(&self) -> (Option<&Key<'a>>, Option<&dyn Reflect>) {
        (self.key(), self.val())
    }

    /// Iterates over the lineage, nearest ancestor first.
    pub fn ancestors(&self) -> impl Iterator<Item = &'a Pair<'a>> + 'a {
        std::iter::successors(self.parent, |pair| pair.parent)
    }

    /// Returns true if this pair has no parent.
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

impl fmt::Display for Pair<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (key_type, key) = match &self.key {
            Some(key) => (key.type_name(), key.summary()),
            None => (NIL.to_string(), NIL.to_string()),
        };
        let (val, val_type) = match self.value.get() {
            Some(value) => (
                summarize(value, SUMMARY_LIMIT),
                short_type_name(value.type_name()),
            ),
            None => (NIL.to_string(), NIL.to_string()),
        };
        write!(f, "Pair{{({key_type}) {key} => {val} ({val_type})}}")
    }
}

impl Key<'_> {
    /// Renders at most [`SUMMARY_LIMIT`] characters. Map keys are summarized
    /// lazily so large keys are never rendered in full.
    fn summary(&self) -> String {
        match self {
            Key::Entry(value) => value
                .get()
                .map_or_else(|| NIL.to_string(), |value| summarize(value, SUMMARY_LIMIT)),
            key => key.to_string().chars().take(SUMMARY_LIMIT).collect(),
        }
    }
}
