//! Single-level iteration over composite values.
//!
//! An [`Iterate`] implementation visits the immediate children of one
//! composite value and never recurses. Each operation checks the value's
//! kind, invokes the continuation once per child, and stops at the first
//! error the continuation returns.

use refwalk_reflect::{Field, Kind, Reflect, ReflectRef, Value};
use tracing::trace;

use crate::{IterConfig, RecoverIter, Result, WalkError};

/// Continuation for sequence elements and channel receives.
pub type SeqFn<'f, 'a> = dyn FnMut(usize, Value<'a>) -> Result<()> + 'f;

/// Continuation for map entries.
pub type MapFn<'f, 'a> = dyn FnMut(Value<'a>, Value<'a>) -> Result<()> + 'f;

/// Continuation for record members.
pub type RecordFn<'f, 'a> = dyn FnMut(Field, Value<'a>) -> Result<()> + 'f;

/// Visits the immediate children of a composite value.
///
/// Implementations are shared by reference across walks and must not keep
/// per-walk state. The children handed to a continuation may be invalid or
/// not observable; deciding what to do with those is up to the caller.
pub trait Iterate {
    /// Visits each element of a sequence in ascending index order.
    fn iter_seq<'a>(&self, value: &'a dyn Reflect, f: &mut SeqFn<'_, 'a>) -> Result<()>;

    /// Visits each entry of a map in unspecified order.
    fn iter_map<'a>(&self, value: &'a dyn Reflect, f: &mut MapFn<'_, 'a>) -> Result<()>;

    /// Visits each member of a record in declaration order.
    fn iter_record<'a>(&self, value: &'a dyn Reflect, f: &mut RecordFn<'_, 'a>) -> Result<()>;

    /// Visits each value received from a channel.
    fn iter_chan<'a>(&self, value: &'a dyn Reflect, f: &mut SeqFn<'_, 'a>) -> Result<()>;
}

impl<I: Iterate + ?Sized> Iterate for &I {
    fn iter_seq<'a>(&self, value: &'a dyn Reflect, f: &mut SeqFn<'_, 'a>) -> Result<()> {
        (**self).iter_seq(value, f)
    }

    fn iter_map<'a>(&self, value: &'a dyn Reflect, f: &mut MapFn<'_, 'a>) -> Result<()> {
        (**self).iter_map(value, f)
    }

    fn iter_record<'a>(&self, value: &'a dyn Reflect, f: &mut RecordFn<'_, 'a>) -> Result<()> {
        (**self).iter_record(value, f)
    }

    fn iter_chan<'a>(&self, value: &'a dyn Reflect, f: &mut SeqFn<'_, 'a>) -> Result<()> {
        (**self).iter_chan(value, f)
    }
}

impl<I: Iterate + ?Sized> Iterate for Box<I> {
    fn iter_seq<'a>(&self, value: &'a dyn Reflect, f: &mut SeqFn<'_, 'a>) -> Result<()> {
        (**self).iter_seq(value, f)
    }

    fn iter_map<'a>(&self, value: &'a dyn Reflect, f: &mut MapFn<'_, 'a>) -> Result<()> {
        (**self).iter_map(value, f)
    }

    fn iter_record<'a>(&self, value: &'a dyn Reflect, f: &mut RecordFn<'_, 'a>) -> Result<()> {
        (**self).iter_record(value, f)
    }

    fn iter_chan<'a>(&self, value: &'a dyn Reflect, f: &mut SeqFn<'_, 'a>) -> Result<()> {
        (**self).iter_chan(value, f)
    }
}

/// The standard [`Iterate`] implementation.
///
/// Panics raised by the enumeration primitives or by a continuation unwind
/// through `Iter`. Wrap it with [`Iter::recovering`] to turn them into errors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Iter {
    config: IterConfig,
}

impl Iter {
    /// Creates a new `Iter` with the given configuration.
    pub fn new(config: IterConfig) -> Self {
        Self { config }
    }

    /// Creates a new `Iter` wrapped so that panics become errors.
    pub fn recovering(config: IterConfig) -> RecoverIter<Self> {
        RecoverIter::new(Self::new(config))
    }

    /// Returns the configuration.
    pub fn config(&self) -> &IterConfig {
        &self.config
    }
}

impl Iterate for Iter {
    fn iter_seq<'a>(&self, value: &'a dyn Reflect, f: &mut SeqFn<'_, 'a>) -> Result<()> {
        let seq = match value.reflect() {
            ReflectRef::Sequence(seq) => seq,
            other => return Err(WalkError::kind_mismatch(Kind::Sequence, other.kind())),
        };

        let len = seq.len();
        trace!("Iterating sequence of {} elements", len);
        for index in 0..len {
            let element = seq.get(index).map_or_else(Value::invalid, Value::borrowed);
            f(index, element)?;
        }
        Ok(())
    }

    fn iter_map<'a>(&self, value: &'a dyn Reflect, f: &mut MapFn<'_, 'a>) -> Result<()> {
        let map = match value.reflect() {
            ReflectRef::Map(map) => map,
            other => return Err(WalkError::kind_mismatch(Kind::Map, other.kind())),
        };

        trace!("Iterating map of {} entries", map.len());
        for (key, element) in map.entries() {
            f(Value::borrowed(key), Value::borrowed(element))?;
        }
        Ok(())
    }

    fn iter_record<'a>(&self, value: &'a dyn Reflect, f: &mut RecordFn<'_, 'a>) -> Result<()> {
        let record = match value.reflect() {
            ReflectRef::Record(record) => record,
            other => return Err(WalkError::kind_mismatch(Kind::Record, other.kind())),
        };

        for (field, member) in record.fields() {
            if field.embedded && self.config.exclude_embedded {
                continue;
            }
            if !field.exported && self.config.exclude_unexported {
                continue;
            }
            f(field, Value::member(&field, member))?;
        }
        Ok(())
    }

    fn iter_chan<'a>(&self, value: &'a dyn Reflect, f: &mut SeqFn<'_, 'a>) -> Result<()> {
        if !self.config.chan_recv {
            return Ok(());
        }
        let chan = match value.reflect() {
            ReflectRef::Channel(chan) => chan,
            other => return Err(WalkError::kind_mismatch(Kind::Channel, other.kind())),
        };

        let mut seq = 0;
        loop {
            let received = if self.config.chan_block {
                chan.recv()
            } else {
                chan.try_recv()
            };
            let Some(received) = received else {
                trace!("Channel drained after {} receives", seq);
                return Ok(());
            };
            f(seq, Value::owned(received))?;
            seq += 1;
        }
    }
}
