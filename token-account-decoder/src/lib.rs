//! Fixed-layout decoder for SPL token account data.
//!
//! An SPL token account is a flat, versionless 165-byte record. This crate
//! reads one out of a raw byte buffer into a typed [`TokenAccount`] without
//! any schema machinery: every field lives at a fixed offset, multi-byte
//! integers are little-endian, and the three `COption` pairs keep their raw
//! 4-byte tags so the original bytes stay recoverable.
//!
//! Provides:
//! - [`TokenAccount::decode`] -- decode at least 165 bytes into a [`TokenAccount`]
//! - [`TokenAccount::to_bytes`] -- bit-exact inverse, mainly for round-trip checks
//! - [`Address`] -- opaque 32-byte identifier, base58 `Display`
//! - [`render_token_account`] -- field/value table for logs and debugging
//!
//! ```
//! use token_account_decoder::TokenAccount;
//!
//! let data = [0u8; 165];
//! let account = TokenAccount::decode(&data).unwrap();
//! assert_eq!(account.amount, 0);
//! assert!(account.delegate.is_none());
//! ```
//!
//! Decoding is pure: identical input bytes always produce an identical
//! record, and the buffer is never mutated. The only failure mode is a
//! buffer shorter than 165 bytes ([`DecodeError::InsufficientData`]).

pub mod account;
pub mod address;
pub mod error;
pub mod formatter;

pub use account::{
    COption, TokenAccount, ACCOUNT_STATE_FROZEN, ACCOUNT_STATE_INITIALIZED,
    ACCOUNT_STATE_UNINITIALIZED, TOKEN_ACCOUNT_LEN,
};
pub use address::Address;
pub use error::DecodeError;
pub use formatter::render_token_account;
