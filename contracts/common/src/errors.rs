//! Error Types for the Clear Token
//!
//! Every rejected call maps to exactly one variant, and every variant
//! carries the numeric code reported in the call receipt.

use thiserror::Error;

use crate::constants::error_codes;
use crate::types::{Amount, Principal};

/// Result type alias for token operations
pub type ClearResult<T> = Result<T, ClearTokenError>;

/// Errors raised by token operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClearTokenError {
    /// Mint attempted by someone other than the owner
    #[error("principal {caller} is not authorized to mint")]
    NotAuthorized { caller: Principal },

    /// Crediting the amount would overflow a balance or the supply
    #[error("minting {amount} would overflow the ledger")]
    Overflow { amount: Amount },

    /// A state-changing call reached a read-only entry point
    #[error("call writes state and cannot run read-only")]
    ReadOnlyViolation,
}

impl ClearTokenError {
    /// Numeric code reported at the call boundary
    pub fn code(&self) -> u32 {
        match self {
            Self::NotAuthorized { .. } => error_codes::ERR_NOT_AUTHORIZED,
            Self::Overflow { .. } => error_codes::ERR_OVERFLOW,
            Self::ReadOnlyViolation => error_codes::ERR_READ_ONLY,
        }
    }

    /// Human-readable error label for logging/debugging
    pub fn name(&self) -> &'static str {
        match self {
            Self::NotAuthorized { .. } => "E100_NOT_AUTHORIZED",
            Self::Overflow { .. } => "E101_OVERFLOW",
            Self::ReadOnlyViolation => "E102_READ_ONLY",
        }
    }
}
