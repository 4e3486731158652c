//! Clear Token Contract
//!
//! Fungible token ledger for the Clear token (`CLR`).
//! Only the owner fixed at deployment can mint.
//!
//! The ledger is an explicitly owned value: every caller holds its own
//! `TokenLedger` and mutation requires `&mut self`, so calls are applied
//! one at a time in program order.
//!
//! ## Call Driver
//!
//! The `chain` module wraps a deployed ledger in a small in-process
//! driver that runs read-only calls and mines ordered blocks of
//! transactions into receipts.

use std::collections::BTreeMap;

use borsh::{BorshDeserialize, BorshSerialize};
use log::{debug, warn};
use serde::{Deserialize, Serialize};

pub mod chain;


use clear_common::{
    constants::token,
    errors::{ClearResult, ClearTokenError},
    types::{Amount, CallValue, Principal, TokenCall},
};

// ============ Token Ledger ============

/// Balances, supply and mint authority of one deployed token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, BorshSerialize, BorshDeserialize)]
pub struct TokenLedger {
    /// Only principal allowed to mint
    owner: Principal,
    /// Immutable token symbol
    symbol: String,
    /// Non-zero balances; absent means zero
    balances: BTreeMap<Principal, Amount>,
    /// Sum of all balances
    total_supply: Amount,
}

// NOTE: Default trait intentionally NOT implemented: a ledger without an
// explicit owner has nobody who can mint.

impl TokenLedger {
    /// Create an empty ledger owned by `owner`
    pub fn new(owner: Principal, symbol: impl Into<String>) -> Self {
        Self {
            owner,
            symbol: symbol.into(),
            balances: BTreeMap::new(),
            total_supply: 0,
        }
    }

    /// Create an empty ledger with the standard `CLR` symbol
    pub fn with_default_symbol(owner: Principal) -> Self {
        Self::new(owner, token::SYMBOL)
    }

    /// Principal allowed to mint
    pub fn owner(&self) -> &Principal {
        &self.owner
    }

    /// Token symbol
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Balance of `principal`, zero if it never received tokens
    pub fn balance_of(&self, principal: &Principal) -> Amount {
        self.balances.get(principal).copied().unwrap_or(0)
    }

    /// Total tokens in existence
    pub fn total_supply(&self) -> Amount {
        self.total_supply
    }

    /// Mint `amount` new tokens to `recipient`.
    ///
    /// Returns the recipient's new balance. Fails with `NotAuthorized`
    /// (code 100) unless `caller` is the owner, and with `Overflow` if the
    /// balance or supply would exceed `u128::MAX`. A failed mint leaves the
    /// ledger untouched.
    pub fn mint(
        &mut self,
        caller: &Principal,
        amount: Amount,
        recipient: &Principal,
    ) -> ClearResult<Amount> {
        if *caller != self.owner {
            warn!("rejected mint of {} by {}: not the owner", amount, caller);
            return Err(ClearTokenError::NotAuthorized {
                caller: caller.clone(),
            });
        }

        // Compute both sums before writing so a failure changes nothing
        let new_balance = self
            .balance_of(recipient)
            .checked_add(amount)
            .ok_or(ClearTokenError::Overflow { amount })?;
        let new_supply = self
            .total_supply
            .checked_add(amount)
            .ok_or(ClearTokenError::Overflow { amount })?;

        if new_balance > 0 {
            self.balances.insert(recipient.clone(), new_balance);
        }
        self.total_supply = new_supply;

        debug!(
            "minted {} {} to {} (balance {}, supply {})",
            amount, self.symbol, recipient, new_balance, new_supply
        );
        Ok(new_balance)
    }

    /// Dispatch a call on behalf of `caller`
    pub fn execute(&mut self, caller: &Principal, call: &TokenCall) -> ClearResult<CallValue> {
        match call {
            TokenCall::Mint { amount, recipient } => {
                self.mint(caller, *amount, recipient).map(CallValue::Uint)
            }
            _ => self.query(call),
        }
    }

    /// Evaluate a call without the ability to write
    pub fn query(&self, call: &TokenCall) -> ClearResult<CallValue> {
        match call {
            TokenCall::GetSymbol => Ok(CallValue::Ascii(self.symbol.clone())),
            TokenCall::GetBalance { principal } => Ok(CallValue::Uint(self.balance_of(principal))),
            TokenCall::GetTotalSupply => Ok(CallValue::Uint(self.total_supply)),
            TokenCall::Mint { .. } => Err(ClearTokenError::ReadOnlyViolation),
        }
    }

    /// Holders with a non-zero balance, ordered by principal
    pub fn holders(&self) -> impl Iterator<Item = (&Principal, Amount)> {
        self.balances.iter().map(|(p, b)| (p, *b))
    }

    /// Whether the supply equals the sum of all balances
    pub fn check_supply_invariant(&self) -> bool {
        self.balances
            .values()
            .try_fold(0u128, |acc, b| acc.checked_add(*b))
            == Some(self.total_supply)
    }
}

// ============ Tests ============

#[cfg(test)]
mod tests {
    use super::*;

    fn owner() -> Principal {
        Principal::from("deployer")
    }

    fn wallet1() -> Principal {
        Principal::from("wallet_1")
    }

    fn create_test_ledger() -> TokenLedger {
        TokenLedger::with_default_symbol(owner())
    }

    #[test]
    fn test_symbol() {
        let ledger = create_test_ledger();
        assert_eq!(ledger.symbol(), "CLR");

        let custom = TokenLedger::new(owner(), "XYZ");
        assert_eq!(custom.symbol(), "XYZ");
    }

    #[test]
    fn test_unknown_principal_has_zero_balance() {
        let ledger = create_test_ledger();
        assert_eq!(ledger.balance_of(&owner()), 0);
        assert_eq!(ledger.balance_of(&Principal::from("nobody")), 0);
        assert_eq!(ledger.total_supply(), 0);
        assert_eq!(ledger.holders().count(), 0);
    }

    #[test]
    fn test_mint_authorized() {
        let mut ledger = create_test_ledger();

        assert_eq!(ledger.mint(&owner(), 1000, &owner()), Ok(1000));
        assert_eq!(ledger.mint(&owner(), 8, &wallet1()), Ok(8));
        assert_eq!(ledger.mint(&owner(), 2, &wallet1()), Ok(10));

        assert_eq!(ledger.balance_of(&owner()), 1000);
        assert_eq!(ledger.balance_of(&wallet1()), 10);
        assert_eq!(ledger.total_supply(), 1010);
        assert!(ledger.check_supply_invariant());
    }

    #[test]
    fn test_mint_unauthorized() {
        let mut ledger = create_test_ledger();
        ledger.mint(&owner(), 8, &wallet1()).unwrap();
        let before = ledger.clone();

        let result = ledger.mint(&wallet1(), 10_000_000, &wallet1());

        assert!(matches!(result, Err(ClearTokenError::NotAuthorized { .. })));
        assert_eq!(result.unwrap_err().code(), 100);
        assert_eq!(ledger, before);
    }

    #[test]
    fn test_mint_zero_creates_no_holder() {
        let mut ledger = create_test_ledger();

        assert_eq!(ledger.mint(&owner(), 0, &wallet1()), Ok(0));
        assert_eq!(ledger.holders().count(), 0);
        assert_eq!(ledger.total_supply(), 0);
    }

    #[test]
    fn test_mint_overflow_balance() {
        let mut ledger = create_test_ledger();
        ledger.mint(&owner(), u128::MAX, &wallet1()).unwrap();
        let before = ledger.clone();

        let result = ledger.mint(&owner(), 1, &wallet1());

        assert_eq!(result, Err(ClearTokenError::Overflow { amount: 1 }));
        assert_eq!(ledger, before);
    }

    #[test]
    fn test_mint_overflow_supply() {
        let mut ledger = create_test_ledger();
        ledger.mint(&owner(), u128::MAX - 5, &wallet1()).unwrap();
        let before = ledger.clone();

        // Recipient balance alone would fit, the supply would not
        let result = ledger.mint(&owner(), 10, &owner());

        assert_eq!(result.map_err(|e| e.code()), Err(101));
        assert_eq!(ledger, before);
        assert_eq!(ledger.balance_of(&owner()), 0);
    }

    #[test]
    fn test_execute_dispatch() {
        let mut ledger = create_test_ledger();

        let minted = ledger.execute(
            &owner(),
            &TokenCall::Mint { amount: 1000, recipient: owner() },
        );
        assert_eq!(minted, Ok(CallValue::Uint(1000)));

        let symbol = ledger.execute(&wallet1(), &TokenCall::GetSymbol);
        assert_eq!(symbol, Ok(CallValue::Ascii("CLR".to_string())));

        let balance = ledger.execute(&wallet1(), &TokenCall::GetBalance { principal: owner() });
        assert_eq!(balance, Ok(CallValue::Uint(1000)));

        let supply = ledger.execute(&wallet1(), &TokenCall::GetTotalSupply);
        assert_eq!(supply, Ok(CallValue::Uint(1000)));
    }

    #[test]
    fn test_query_refuses_writes() {
        let ledger = create_test_ledger();

        let result = ledger.query(&TokenCall::Mint { amount: 1, recipient: owner() });

        assert_eq!(result, Err(ClearTokenError::ReadOnlyViolation));
        assert_eq!(ledger.total_supply(), 0);
    }

    #[test]
    fn test_holders_ordered() {
        let mut ledger = create_test_ledger();
        ledger.mint(&owner(), 3, &Principal::from("c")).unwrap();
        ledger.mint(&owner(), 1, &Principal::from("a")).unwrap();
        ledger.mint(&owner(), 2, &Principal::from("b")).unwrap();

        let holders: Vec<_> = ledger.holders().map(|(p, b)| (p.as_str().to_string(), b)).collect();

        assert_eq!(
            holders,
            vec![("a".to_string(), 1), ("b".to_string(), 2), ("c".to_string(), 3)]
        );
    }

    #[test]
    fn test_ledger_borsh_encoding() {
        let mut ledger = create_test_ledger();
        ledger.mint(&owner(), 1000, &owner()).unwrap();
        ledger.mint(&owner(), 8, &wallet1()).unwrap();

        let bytes = borsh::to_vec(&ledger).unwrap();
        let mut restored: TokenLedger = borsh::from_slice(&bytes).unwrap();

        assert_eq!(restored, ledger);
        assert!(restored.check_supply_invariant());
        // Mint authority survives encoding
        assert!(restored.mint(&wallet1(), 1, &wallet1()).is_err());
        assert_eq!(restored.mint(&owner(), 2, &wallet1()), Ok(10));
    }
}
