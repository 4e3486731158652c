//! Core Types for the Clear Token
//!
//! Account identifiers, amounts, and the calls a token contract accepts.

use core::fmt;

use crate::String;
use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Deserialize, Serialize};

/// Token amount in base units
pub type Amount = u128;

/// Account identifier
///
/// Opaque to the ledger: two principals are the same account exactly when
/// their strings are equal.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash,
    Serialize, Deserialize, BorshSerialize, BorshDeserialize,
)]
#[serde(transparent)]
pub struct Principal(String);

impl Principal {
    /// Wrap an account identifier
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the identifier
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Principal {
    fn from(id: &str) -> Self {
        Self(String::from(id))
    }
}

impl From<String> for Principal {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl fmt::Display for Principal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ============ Calls ============

/// Calls accepted by the token contract
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, BorshSerialize, BorshDeserialize)]
pub enum TokenCall {
    /// Read the token symbol
    GetSymbol,
    /// Read a principal's balance
    GetBalance { principal: Principal },
    /// Read the total supply
    GetTotalSupply,
    /// Create `amount` new tokens for `recipient` (owner only)
    Mint { amount: Amount, recipient: Principal },
}

impl TokenCall {
    /// Contract function name, as seen by callers
    pub fn function_name(&self) -> &'static str {
        match self {
            TokenCall::GetSymbol => "get-symbol",
            TokenCall::GetBalance { .. } => "get-balance",
            TokenCall::GetTotalSupply => "get-total-supply",
            TokenCall::Mint { .. } => "mint",
        }
    }
}

/// Value returned by a successful call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, BorshSerialize, BorshDeserialize)]
pub enum CallValue {
    /// Unsigned integer result
    Uint(Amount),
    /// ASCII string result
    Ascii(String),
}

impl CallValue {
    /// The integer payload, if this is a `Uint`
    pub fn expect_uint(&self) -> Option<Amount> {
        match self {
            CallValue::Uint(v) => Some(*v),
            CallValue::Ascii(_) => None,
        }
    }

    /// The string payload, if this is an `Ascii`
    pub fn expect_ascii(&self) -> Option<&str> {
        match self {
            CallValue::Ascii(s) => Some(s.as_str()),
            CallValue::Uint(_) => None,
        }
    }
}

/// A contract call submitted by `sender`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, BorshSerialize, BorshDeserialize)]
pub struct Tx {
    /// Principal signing the call
    pub sender: Principal,
    /// The call itself
    pub call: TokenCall,
}

impl Tx {
    /// Build a transaction from a sender and a call
    pub fn new(sender: Principal, call: TokenCall) -> Self {
        Self { sender, call }
    }

    /// Shorthand for a mint call
    pub fn mint(sender: &Principal, amount: Amount, recipient: &Principal) -> Self {
        Self::new(
            sender.clone(),
            TokenCall::Mint {
                amount,
                recipient: recipient.clone(),
            },
        )
    }
}
