//! Clear Token Common Library
//!
//! Shared types, constants, errors and events for the Clear token
//! contract.
//!
//! - **constants**: token metadata and boundary error codes
//! - **errors**: `ClearTokenError` and its numeric codes
//! - **types**: principals, amounts and contract calls
//! - **events**: events emitted by state-changing calls
//!
//! This crate is `no_std` compatible (with `alloc`) when built without
//! the default `std` feature.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Re-export collection types for submodules based on feature
#[cfg(not(feature = "std"))]
pub use alloc::{string::String, vec::Vec};
#[cfg(feature = "std")]
pub use std::{string::String, vec::Vec};

pub mod constants;
pub mod errors;
pub mod types;
pub mod events;

// Re-exports for convenience
pub use constants::*;
pub use errors::*;
pub use types::*;
pub use events::*;
