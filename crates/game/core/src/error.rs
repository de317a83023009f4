//! Common error infrastructure for game-core.
//!
//! Gameplay itself is total: blocked moves and invalid targets are ordinary
//! results, not errors. The error types in this crate cover the few places
//! where a caller can ask for something impossible (spawning on a full map,
//! binding onto a taken tile, an unusable configuration).
//!
//! Domain errors live next to the code that produces them
//! ([`crate::SpawnError`], [`crate::OccupancyError`], [`crate::ConfigError`])
//! and all implement [`GameError`].

/// Severity level of an error, used for categorization and recovery strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Recoverable error - can retry with a different seed or input.
    ///
    /// Examples: no free tile found around a spawn point
    Recoverable,

    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: zero tile size, map smaller than its border
    Validation,

    /// Internal error - unexpected state inconsistency.
    ///
    /// Examples: occupancy desync, binding onto a taken tile
    /// These indicate bugs and should be investigated.
    Internal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal)
    }
}

/// Common trait for all game-core errors.
///
/// # Implementation Guidelines
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_internal_flags_a_bug() {
        assert!(ErrorSeverity::Internal.is_internal());
        assert!(!ErrorSeverity::Recoverable.is_internal());
        assert!(!ErrorSeverity::Validation.is_internal());
        assert!(ErrorSeverity::Recoverable.is_recoverable());
        assert_eq!(ErrorSeverity::Validation.as_str(), "validation");
    }
}
