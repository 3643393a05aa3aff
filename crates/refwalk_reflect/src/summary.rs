//! Textual summaries of reflected values.

use std::fmt::{self, Write};

use crate::{Reflect, ReflectRef, indirect, short_type_name};

/// Rendering used for absent keys, absent values and null pointers.
pub const NIL: &str = "<nil>";

/// Displays a reflected value.
///
/// Pointers are followed, sequences render as `[a, b]`, maps as `{k: v}`
/// and records as `Name { field: value }`. Channels and opaque values
/// render as their short type name.
#[derive(Clone, Copy)]
pub struct Summary<'a>(pub &'a dyn Reflect);

impl fmt::Display for Summary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = indirect(self.0);

        match value.reflect() {
            ReflectRef::Scalar(scalar) => write!(f, "{scalar}"),
            ReflectRef::Sequence(seq) => {
                f.write_char('[')?;
                for index in 0..seq.len() {
                    if index > 0 {
                        f.write_str(", ")?;
                    }
                    match seq.get(index) {
                        Some(element) => write!(f, "{}", Summary(element))?,
                        None => f.write_str(NIL)?,
                    }
                }
                f.write_char(']')
            }
            ReflectRef::Map(map) => {
                f.write_char('{')?;
                for (index, (key, element)) in map.entries().enumerate() {
                    if index > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}: {}", Summary(key), Summary(element))?;
                }
                f.write_char('}')
            }
            ReflectRef::Record(record) => {
                f.write_str(&short_type_name(value.type_name()))?;
                let fields = record.fields();
                if fields.is_empty() {
                    return Ok(());
                }
                f.write_str(" { ")?;
                for (index, (field, member)) in fields.into_iter().enumerate() {
                    if index > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}: {}", field.name, Summary(member))?;
                }
                f.write_str(" }")
            }
            ReflectRef::Pointer(pointer) if pointer.target().is_none() => f.write_str(NIL),
            ReflectRef::Pointer(_) | ReflectRef::Channel(_) | ReflectRef::Opaque => {
                f.write_str(&short_type_name(value.type_name()))
            }
        }
    }
}

/// Renders at most `limit` characters of a value's [`Summary`].
///
/// Rendering stops as soon as the limit is reached, so large values cost
/// no more than their prefix.
pub fn summarize(value: &dyn Reflect, limit: usize) -> String {
    let mut out = Truncate {
        buf: String::new(),
        remaining: limit,
    };
    // An error only signals that the limit was reached.
    let _ = write!(out, "{}", Summary(value));
    out.buf
}

struct Truncate {
    buf: String,
    remaining: usize,
}

impl Write for Truncate {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for c in s.chars() {
            if self.remaining == 0 {
                return Err(fmt::Error);
            }
            self.buf.push(c);
            self.remaining -= 1;
        }
        Ok(())
    }
}
