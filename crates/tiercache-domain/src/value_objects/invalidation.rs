//! Invalidation log entries
//!
//! A write returns the ordered list of steps its invalidation sequence took.
//! The list is for callers and observability; correctness never depends on it.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Cache tier identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tier {
    /// In-process bounded cache
    L1,
    /// Shared networked cache
    L2,
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::L1 => f.write_str("L1"),
            Self::L2 => f.write_str("L2"),
        }
    }
}

/// What happened to a key during invalidation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "lowercase")]
pub enum InvalidationOutcome {
    /// The key was present and has been deleted
    Removed,
    /// The key was not present
    Absent,
    /// The cached collection was replaced by a patched snapshot
    Patched,
    /// The tier call failed; the key's state is unknown
    Failed {
        /// Error description
        reason: String,
    },
}

/// One step of a write's invalidation sequence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvalidationAction {
    /// Tier the step touched
    pub tier: Tier,
    /// Key the step touched
    pub key: String,
    /// Result of the step
    #[serde(flatten)]
    pub outcome: InvalidationOutcome,
}

impl InvalidationAction {
    /// Build an action for `key` in `tier`
    pub fn new<S: Into<String>>(tier: Tier, key: S, outcome: InvalidationOutcome) -> Self {
        Self {
            tier,
            key: key.into(),
            outcome,
        }
    }

    /// Record a delete, mapping presence to `Removed`/`Absent`
    pub fn deleted<S: Into<String>>(tier: Tier, key: S, was_present: bool) -> Self {
        let outcome = if was_present {
            InvalidationOutcome::Removed
        } else {
            InvalidationOutcome::Absent
        };
        Self::new(tier, key, outcome)
    }

    /// Record a failed tier call
    pub fn failed<S: Into<String>, R: fmt::Display>(tier: Tier, key: S, reason: R) -> Self {
        Self::new(
            tier,
            key,
            InvalidationOutcome::Failed {
                reason: reason.to_string(),
            },
        )
    }

    /// True if the step changed cached state
    pub fn took_effect(&self) -> bool {
        matches!(
            self.outcome,
            InvalidationOutcome::Removed | InvalidationOutcome::Patched
        )
    }
}

impl fmt::Display for InvalidationAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.tier, self.key)?;
        match &self.outcome {
            InvalidationOutcome::Removed => Ok(()),
            InvalidationOutcome::Absent => f.write_str("[absent]"),
            InvalidationOutcome::Patched => f.write_str("[patched]"),
            InvalidationOutcome::Failed { reason } => write!(f, "[failed: {reason}]"),
        }
    }
}
