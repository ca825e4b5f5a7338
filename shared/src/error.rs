use std::fmt;

use crate::constants::{CONFETTI_MAX_COUNT, CONFETTI_MAX_DURATION_MS};

/// A request the current state does not allow.
///
/// Every variant is a guard, not a failure: callers log it and carry on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardError {
    ModalNotClosed,
    ModalNotOpen,
    SpinInProgress,
    AlreadySpun,
    NothingToReset,
    StaleTransition,
    SurfaceMissing,
}

impl fmt::Display for GuardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            GuardError::ModalNotClosed => "modal can only open from the closed state",
            GuardError::ModalNotOpen => "modal can only close from the open state",
            GuardError::SpinInProgress => "wheel is still spinning",
            GuardError::AlreadySpun => "wheel was already spun this cycle",
            GuardError::NothingToReset => "wheel has not been spun",
            GuardError::StaleTransition => "transition was superseded",
            GuardError::SurfaceMissing => "modal surface is not on this page",
        };
        f.write_str(message)
    }
}

impl std::error::Error for GuardError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    EmptyWheel,
    InvalidSpinRange,
    InvalidConfetti,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EmptyWheel => write!(f, "wheel needs at least one segment"),
            ConfigError::InvalidSpinRange => write!(f, "min_spins must be below max_spins"),
            ConfigError::InvalidConfetti => write!(
                f,
                "confetti needs at most {} pieces falling for at most {} ms",
                CONFETTI_MAX_COUNT, CONFETTI_MAX_DURATION_MS
            ),
        }
    }
}

impl std::error::Error for ConfigError {}
