//! Outcome of an operation that was submitted to the network.
//!
//! Operations return `Result<Outcome<T>, _>`: `Err` means the operation
//! definitely did not complete, `Completed` means it did, and
//! `Indeterminate` means it was submitted but its fate is unknown (for
//! example, the confirmation wait timed out). Callers decide whether and how
//! to poll an indeterminate operation.

/// Success or unknown status of a submitted operation.
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    /// The operation completed and produced `T`.
    Completed(T),
    /// The operation was submitted but its status is unknown.
    Indeterminate {
        /// Hash of the submitted operation, usable for status polling
        tx_hash: String,
        /// Why the status could not be determined
        reason: String,
    },
}

impl<T> Outcome<T> {
    /// Whether the operation completed.
    pub fn is_completed(&self) -> bool {
        matches!(self, Outcome::Completed(_))
    }

    /// Whether the operation's status is unknown.
    pub fn is_indeterminate(&self) -> bool {
        matches!(self, Outcome::Indeterminate { .. })
    }

    /// Returns the completed value, discarding an indeterminate status.
    pub fn completed(self) -> Option<T> {
        match self {
            Outcome::Completed(value) => Some(value),
            Outcome::Indeterminate { .. } => None,
        }
    }

    /// Maps the completed value.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Outcome<U> {
        match self {
            Outcome::Completed(value) => Outcome::Completed(f(value)),
            Outcome::Indeterminate { tx_hash, reason } => Outcome::Indeterminate { tx_hash, reason },
        }
    }
}
