//! Walk error types.

use refwalk_reflect::Kind;
use thiserror::Error;

/// Errors that can stop a walk.
#[derive(Debug, Error)]
pub enum WalkError {
    /// An iterator operation was given a value of the wrong kind.
    #[error("expected {expected} kind, not {actual}")]
    KindMismatch { expected: Kind, actual: Kind },

    /// A visit function or continuation asked to stop.
    #[error(transparent)]
    Halt(Box<dyn std::error::Error + Send + Sync>),

    /// A panic contained by a recovering iterator.
    #[error("panic: {0}")]
    Panic(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl WalkError {
    /// Creates a kind mismatch error.
    pub fn kind_mismatch(expected: Kind, actual: Kind) -> Self {
        Self::KindMismatch { expected, actual }
    }

    /// Wraps a caller error that halts the walk.
    pub fn halt(error: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self::Halt(error.into())
    }

    /// Creates a contained panic error.
    pub fn panic(message: impl Into<String>) -> Self {
        Self::Panic(message.into())
    }

    /// Creates a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Returns true if this error was raised by caller code.
    pub fn is_halt(&self) -> bool {
        matches!(self, Self::Halt(_))
    }

    /// Returns the caller error carried by [`WalkError::Halt`] if it has type `E`.
    pub fn downcast_ref<E>(&self) -> Option<&E>
    where
        E: std::error::Error + 'static,
    {
        match self {
            Self::Halt(error) => error.downcast_ref::<E>(),
            _ => None,
        }
    }
}

/// Result alias used throughout the walker.
pub type Result<T> = std::result::Result<T, WalkError>;
