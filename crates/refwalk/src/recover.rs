//! Panic containment for iterators.

use std::any::Any;
use std::panic::{AssertUnwindSafe, catch_unwind};

use refwalk_reflect::Reflect;
use tracing::warn;

use crate::iter::{MapFn, RecordFn, SeqFn};
use crate::{Iterate, Result, WalkError};

/// Wraps an [`Iterate`] so that a panic inside any operation, including
/// one raised by a continuation, is returned as an error.
///
/// A panic whose payload is a [`WalkError`] is returned unchanged. A boxed
/// error payload becomes [`WalkError::Halt`] and anything else becomes
/// [`WalkError::Panic`].
///
/// A payload is only recognized as an error when it is a `WalkError` or a
/// `Box<dyn Error + Send + Sync>`. Code that wants its error back must raise
/// it through [`std::panic::panic_any`] in one of those two forms; a bare
/// `panic_any(MyError)` loses its type and message.
///
/// Containment happens after the panic hook runs, so the installed hook
/// (by default the one printing to stderr) still reports every contained
/// panic. Install a quieter hook with [`std::panic::set_hook`] if needed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RecoverIter<I> {
    inner: I,
}

impl<I: Iterate> RecoverIter<I> {
    /// Wraps `inner`.
    pub fn new(inner: I) -> Self {
        Self { inner }
    }

    /// Returns the wrapped iterator.
    pub fn inner(&self) -> &I {
        &self.inner
    }

    /// Unwraps this `RecoverIter`, returning the wrapped iterator.
    pub fn into_inner(self) -> I {
        self.inner
    }
}

impl<I: Iterate> Iterate for RecoverIter<I> {
    fn iter_seq<'a>(&self, value: &'a dyn Reflect, f: &mut SeqFn<'_, 'a>) -> Result<()> {
        recover(|| self.inner.iter_seq(value, f))
    }

    fn iter_map<'a>(&self, value: &'a dyn Reflect, f: &mut MapFn<'_, 'a>) -> Result<()> {
        recover(|| self.inner.iter_map(value, f))
    }

    fn iter_record<'a>(&self, value: &'a dyn Reflect, f: &mut RecordFn<'_, 'a>) -> Result<()> {
        recover(|| self.inner.iter_record(value, f))
    }

    fn iter_chan<'a>(&self, value: &'a dyn Reflect, f: &mut SeqFn<'_, 'a>) -> Result<()> {
        recover(|| self.inner.iter_chan(value, f))
    }
}

/// Runs `f`, converting a panic into an error.
///
/// Whatever `f` touched may be left half-updated when it panics; the
/// caller decides whether that state is still usable.
pub fn recover<T>(f: impl FnOnce() -> Result<T>) -> Result<T> {
    match catch_unwind(AssertUnwindSafe(f)) {
        Ok(result) => result,
        Err(payload) => Err(from_panic(payload)),
    }
}

fn from_panic(payload: Box<dyn Any + Send>) -> WalkError {
    let payload = match payload.downcast::<WalkError>() {
        Ok(error) => return *error,
        Err(payload) => payload,
    };
    let payload = match payload.downcast::<Box<dyn std::error::Error + Send + Sync>>() {
        Ok(error) => return WalkError::Halt(*error),
        Err(payload) => payload,
    };

    let message = if let Some(message) = payload.downcast_ref::<&'static str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "non-string panic payload".to_string()
    };
    warn!("Contained panic during iteration: {}", message);
    WalkError::Panic(message)
}
