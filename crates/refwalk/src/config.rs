//! Iterator configuration.

use serde::{Deserialize, Serialize};

use crate::WalkError;

/// Toggles that shape what an [`Iter`](crate::Iter) visits.
///
/// Every toggle defaults to `false`, so channels are left untouched unless
/// receiving is enabled explicitly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IterConfig {
    /// Skip embedded record members.
    pub exclude_embedded: bool,

    /// Skip record members that are not exported.
    pub exclude_unexported: bool,

    /// Receive values from channels.
    pub chan_recv: bool,

    /// Block on each receive until the channel is closed.
    ///
    /// A channel that is never closed and never sent to blocks the walk
    /// forever. Only meaningful with `chan_recv`.
    pub chan_block: bool,
}

impl IterConfig {
    /// Creates a new `IterConfig` with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a configuration from a JSON object. Missing keys keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, WalkError> {
        let value: serde_json::Value = serde_json::from_str(json)
            .map_err(|e| WalkError::config(format!("Failed to parse iterator config: {}", e)))?;
        if !value.is_object() {
            return Err(WalkError::config(
                "Failed to parse iterator config: expected a JSON object",
            ));
        }
        serde_json::from_value(value)
            .map_err(|e| WalkError::config(format!("Failed to parse iterator config: {}", e)))
    }

    /// Enables or disables skipping embedded members.
    pub fn exclude_embedded(mut self, yes: bool) -> Self {
        self.exclude_embedded = yes;
        self
    }

    /// Enables or disables skipping non-exported members.
    pub fn exclude_unexported(mut self, yes: bool) -> Self {
        self.exclude_unexported = yes;
        self
    }

    /// Enables or disables receiving from channels.
    pub fn chan_recv(mut self, yes: bool) -> Self {
        self.chan_recv = yes;
        self
    }

    /// Enables or disables blocking receives.
    pub fn chan_block(mut self, yes: bool) -> Self {
        self.chan_block = yes;
        self
    }
}
