//! Configuration types for stage workers

use serde::{Deserialize, Serialize};

use crate::error::StreamResult;

/// Queue depth used by every operator unless re-staged with `prefetch`.
pub const DEFAULT_DEPTH: usize = 1;

/// Configuration for a single stage worker
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StageConfig {
    /// Number of values the worker may push ahead of its consumer.
    /// Zero is treated as one; a tokio channel cannot be unbuffered.
    pub depth: usize,
    /// Label attached to the worker's log lines
    pub name: Option<String>,
}

impl Default for StageConfig {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
            name: None,
        }
    }
}

impl StageConfig {
    /// Create a new stage configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the queue depth
    pub fn depth(mut self, depth: usize) -> Self {
        self.depth = depth;
        self
    }

    /// Set the log label
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Parse a configuration from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> StreamResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub(crate) fn channel_depth(&self) -> usize {
        self.depth.max(1)
    }

    pub(crate) fn label(&self) -> &str {
        self.name.as_deref().unwrap_or("stage")
    }
}
