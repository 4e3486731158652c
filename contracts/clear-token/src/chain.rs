//! In-process call driver for the Clear token
//!
//! Holds one deployed `TokenLedger` and a block height. Read-only calls
//! are evaluated against the current state; transactions are applied in
//! blocks, strictly in submission order, each producing a receipt.
//!
//! ## Receipts
//!
//! - **Ok**: the call's return value plus the events it emitted
//! - **Err**: the numeric error code; the ledger is unchanged and no
//!   events are recorded

use borsh::{BorshDeserialize, BorshSerialize};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::TokenLedger;
use clear_common::{
    events::{EventLog, TokenEvent},
    types::{CallValue, Principal, TokenCall, Tx},
};

/// Outcome of a single call as reported to the caller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, BorshSerialize, BorshDeserialize)]
pub enum CallResult {
    Ok(CallValue),
    Err(u32),
}

impl CallResult {
    /// The success value, if the call succeeded
    pub fn expect_ok(&self) -> Option<&CallValue> {
        match self {
            CallResult::Ok(value) => Some(value),
            CallResult::Err(_) => None,
        }
    }

    /// The error code, if the call failed
    pub fn expect_err(&self) -> Option<u32> {
        match self {
            CallResult::Ok(_) => None,
            CallResult::Err(code) => Some(*code),
        }
    }

    /// Whether the call succeeded
    pub fn is_ok(&self) -> bool {
        matches!(self, CallResult::Ok(_))
    }
}

/// Receipt for one transaction in a mined block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, BorshSerialize, BorshDeserialize)]
pub struct Receipt {
    pub result: CallResult,
    pub events: Vec<TokenEvent>,
}

/// A mined block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, BorshSerialize, BorshDeserialize)]
pub struct Block {
    pub height: u64,
    /// One receipt per transaction, in submission order
    pub receipts: Vec<Receipt>,
}

/// A deployed token plus the chain height it lives at
#[derive(Debug, Clone)]
pub struct Chain {
    ledger: TokenLedger,
    block_height: u64,
}

impl Chain {
    /// Deploy a fresh token owned by `deployer`
    pub fn deploy(deployer: Principal) -> Self {
        Self::with_ledger(TokenLedger::with_default_symbol(deployer))
    }

    /// Start from an already constructed ledger
    pub fn with_ledger(ledger: TokenLedger) -> Self {
        Self {
            ledger,
            block_height: 0,
        }
    }

    pub fn ledger(&self) -> &TokenLedger {
        &self.ledger
    }

    pub fn block_height(&self) -> u64 {
        self.block_height
    }

    /// Evaluate `call` without changing state
    pub fn call_read_only(&self, sender: &Principal, call: &TokenCall) -> CallResult {
        debug!("read-only {} from {}", call.function_name(), sender);
        match self.ledger.query(call) {
            Ok(value) => CallResult::Ok(value),
            Err(err) => CallResult::Err(err.code()),
        }
    }

    /// Apply `txs` in order as the next block
    pub fn mine_block(&mut self, txs: Vec<Tx>) -> Block {
        self.block_height += 1;
        let height = self.block_height;

        let receipts: Vec<Receipt> = txs.iter().map(|tx| self.apply(tx, height)).collect();

        debug!(
            "mined block {} with {} txs ({} ok)",
            height,
            receipts.len(),
            receipts.iter().filter(|r| r.result.is_ok()).count()
        );
        Block { height, receipts }
    }

    fn apply(&mut self, tx: &Tx, block_height: u64) -> Receipt {
        let mut events = EventLog::new();

        let result = match self.ledger.execute(&tx.sender, &tx.call) {
            Ok(value) => {
                if let (TokenCall::Mint { amount, recipient }, CallValue::Uint(new_balance)) =
                    (&tx.call, &value)
                {
                    events.emit(TokenEvent::TokenMint {
                        recipient: recipient.clone(),
                        amount: *amount,
                        new_balance: *new_balance,
                        new_total_supply: self.ledger.total_supply(),
                        block_height,
                    });
                }
                CallResult::Ok(value)
            }
            Err(err) => {
                debug!("tx {} from {} failed: {}", tx.call.function_name(), tx.sender, err.name());
                CallResult::Err(err.code())
            }
        };

        Receipt {
            result,
            events: events.into_events(),
        }
    }
}
