//! Token Constants
//!
//! Token symbol and boundary error codes for the Clear token.
//! The error codes are part of the contract's external interface and
//! must never be renumbered.

/// Token Metadata
pub mod token {
    /// Token symbol
    pub const SYMBOL: &str = "CLR";
}

/// Numeric error codes surfaced in call receipts
pub mod error_codes {
    /// Caller is not the token owner
    pub const ERR_NOT_AUTHORIZED: u32 = 100;
    /// Balance or supply would exceed `u128::MAX`
    pub const ERR_OVERFLOW: u32 = 101;
    /// A state-changing call was submitted as read-only
    pub const ERR_READ_ONLY: u32 = 102;
}
