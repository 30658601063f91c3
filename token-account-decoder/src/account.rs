//! The SPL token account record and its fixed 165-byte layout.
//!
//! Layout (all integers little-endian):
//! ```text
//! 0..32    mint                  (32 raw bytes)
//! 32..64   owner                 (32 raw bytes)
//! 64..72   amount                (u64)
//! 72..76   delegate tag          (u32, 0 = absent)
//! 76..108  delegate              (32 raw bytes)
//! 108..109 state                 (u8)
//! 109..113 is_native tag         (u32, 0 = absent)
//! 113..121 is_native value       (u64)
//! 121..129 delegated_amount      (u64)
//! 129..133 close_authority tag   (u32, 0 = absent)
//! 133..165 close_authority       (32 raw bytes)
//! ```
//!
//! Every field is decoded from its offset unconditionally; the tags gate how
//! consumers interpret the adjacent field, never whether it is read.

use serde::Serialize;

use crate::address::Address;
use crate::error::DecodeError;

/// Minimum size of an SPL token account. Bytes past this are ignored.
pub const TOKEN_ACCOUNT_LEN: usize = 165;

/// `state` value for an account that was never initialized.
pub const ACCOUNT_STATE_UNINITIALIZED: u8 = 0;
/// `state` value for a usable account.
pub const ACCOUNT_STATE_INITIALIZED: u8 = 1;
/// `state` value for an account frozen by the mint's freeze authority.
pub const ACCOUNT_STATE_FROZEN: u8 = 2;

const MINT_OFFSET: usize = 0;
const OWNER_OFFSET: usize = 32;
const AMOUNT_OFFSET: usize = 64;
const DELEGATE_TAG_OFFSET: usize = 72;
const DELEGATE_OFFSET: usize = 76;
const STATE_OFFSET: usize = 108;
const IS_NATIVE_TAG_OFFSET: usize = 109;
const IS_NATIVE_OFFSET: usize = 113;
const DELEGATED_AMOUNT_OFFSET: usize = 121;
const CLOSE_AUTHORITY_TAG_OFFSET: usize = 129;
const CLOSE_AUTHORITY_OFFSET: usize = 133;

/// On-chain optional: a 4-byte little-endian tag next to its value.
///
/// The wire format stores the discriminant and the gated value as two plain
/// adjacent fields, so both are kept here as decoded. A tag of `0` means the
/// value is semantically absent; any nonzero tag means present. Tags outside
/// `{0, 1}` pass through unchanged, and `to_bytes` re-emits tag and value
/// bit-exactly, so nothing is lost by the typed view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct COption<T> {
    /// Raw discriminant as stored on chain.
    pub tag: u32,
    /// Raw gated value; undefined to consumers when `tag == 0`.
    pub value: T,
}

impl<T> COption<T> {
    pub fn is_some(&self) -> bool {
        self.tag != 0
    }

    pub fn is_none(&self) -> bool {
        self.tag == 0
    }

    /// Tagged-variant view for consumers that only care about presence.
    pub fn as_option(&self) -> Option<&T> {
        if self.is_some() {
            Some(&self.value)
        } else {
            None
        }
    }

    pub fn into_option(self) -> Option<T> {
        if self.is_some() {
            Some(self.value)
        } else {
            None
        }
    }
}

/// A decoded SPL token account.
///
/// Constructed once per [`decode`](TokenAccount::decode) call and never
/// mutated afterwards. Field order matches the wire layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TokenAccount {
    /// The mint this account holds tokens for.
    pub mint: Address,
    /// The wallet that controls this account.
    pub owner: Address,
    /// Token balance, in the mint's base units.
    pub amount: u64,
    /// Authority allowed to transfer up to `delegated_amount`, if set.
    pub delegate: COption<Address>,
    /// Lifecycle state byte; see the `ACCOUNT_STATE_*` constants for the
    /// well-known values. Decoded as-is, never reinterpreted.
    pub state: u8,
    /// Rent-exempt reserve in lamports when this account wraps native SOL.
    pub is_native: COption<u64>,
    /// Amount the delegate may still transfer. Meaningful only while a
    /// delegate is set.
    pub delegated_amount: u64,
    /// Authority allowed to close this account, if set.
    pub close_authority: COption<Address>,
}

impl TokenAccount {
    /// Decode a token account from raw account data.
    ///
    /// Requires at least [`TOKEN_ACCOUNT_LEN`] bytes; anything past that is
    /// ignored (Token-2022 accounts carry extensions there). The input is
    /// only read, never mutated, and every field -- including tag-gated ones
    /// -- is decoded from its fixed offset regardless of the tag values.
    ///
    /// # Errors
    ///
    /// [`DecodeError::InsufficientData`] if `data` is shorter than 165 bytes.
    pub fn decode(data: &[u8]) -> Result<Self, DecodeError> {
        if data.len() < TOKEN_ACCOUNT_LEN {
            return Err(DecodeError::InsufficientData {
                required: TOKEN_ACCOUNT_LEN,
                actual: data.len(),
            });
        }
        Ok(TokenAccount {
            mint: read_address_at(data, MINT_OFFSET)?,
            owner: read_address_at(data, OWNER_OFFSET)?,
            amount: read_u64_at(data, AMOUNT_OFFSET)?,
            delegate: COption {
                tag: read_u32_at(data, DELEGATE_TAG_OFFSET)?,
                value: read_address_at(data, DELEGATE_OFFSET)?,
            },
            state: read_u8_at(data, STATE_OFFSET)?,
            is_native: COption {
                tag: read_u32_at(data, IS_NATIVE_TAG_OFFSET)?,
                value: read_u64_at(data, IS_NATIVE_OFFSET)?,
            },
            delegated_amount: read_u64_at(data, DELEGATED_AMOUNT_OFFSET)?,
            close_authority: COption {
                tag: read_u32_at(data, CLOSE_AUTHORITY_TAG_OFFSET)?,
                value: read_address_at(data, CLOSE_AUTHORITY_OFFSET)?,
            },
        })
    }

    /// Re-encode the record into its 165-byte wire form.
    ///
    /// Bit-exact inverse of [`decode`](TokenAccount::decode): raw tags and
    /// tag-gated values are written back verbatim, so
    /// `decode(&r.to_bytes())` reproduces `r` field for field.
    pub fn to_bytes(&self) -> [u8; TOKEN_ACCOUNT_LEN] {
        let mut out = [0u8; TOKEN_ACCOUNT_LEN];
        out[MINT_OFFSET..MINT_OFFSET + Address::LEN].copy_from_slice(self.mint.as_bytes());
        out[OWNER_OFFSET..OWNER_OFFSET + Address::LEN].copy_from_slice(self.owner.as_bytes());
        out[AMOUNT_OFFSET..AMOUNT_OFFSET + 8].copy_from_slice(&self.amount.to_le_bytes());
        out[DELEGATE_TAG_OFFSET..DELEGATE_TAG_OFFSET + 4]
            .copy_from_slice(&self.delegate.tag.to_le_bytes());
        out[DELEGATE_OFFSET..DELEGATE_OFFSET + Address::LEN]
            .copy_from_slice(self.delegate.value.as_bytes());
        out[STATE_OFFSET] = self.state;
        out[IS_NATIVE_TAG_OFFSET..IS_NATIVE_TAG_OFFSET + 4]
            .copy_from_slice(&self.is_native.tag.to_le_bytes());
        out[IS_NATIVE_OFFSET..IS_NATIVE_OFFSET + 8]
            .copy_from_slice(&self.is_native.value.to_le_bytes());
        out[DELEGATED_AMOUNT_OFFSET..DELEGATED_AMOUNT_OFFSET + 8]
            .copy_from_slice(&self.delegated_amount.to_le_bytes());
        out[CLOSE_AUTHORITY_TAG_OFFSET..CLOSE_AUTHORITY_TAG_OFFSET + 4]
            .copy_from_slice(&self.close_authority.tag.to_le_bytes());
        out[CLOSE_AUTHORITY_OFFSET..CLOSE_AUTHORITY_OFFSET + Address::LEN]
            .copy_from_slice(self.close_authority.value.as_bytes());
        out
    }

    /// Whether a delegate is currently set.
    pub fn has_delegate(&self) -> bool {
        self.delegate.is_some()
    }

    /// Whether this account wraps native SOL.
    pub fn is_native(&self) -> bool {
        self.is_native.is_some()
    }

    /// Rent-exempt reserve in lamports, for native accounts only.
    pub fn native_reserve(&self) -> Option<u64> {
        self.is_native.into_option()
    }

    /// Whether a close authority is currently set.
    pub fn has_close_authority(&self) -> bool {
        self.close_authority.is_some()
    }

    pub fn is_initialized(&self) -> bool {
        self.state != ACCOUNT_STATE_UNINITIALIZED
    }

    pub fn is_frozen(&self) -> bool {
        self.state == ACCOUNT_STATE_FROZEN
    }
}

fn too_short(actual: usize) -> DecodeError {
    DecodeError::InsufficientData {
        required: TOKEN_ACCOUNT_LEN,
        actual,
    }
}

fn read_u8_at(data: &[u8], offset: usize) -> Result<u8, DecodeError> {
    data.get(offset).copied().ok_or_else(|| too_short(data.len()))
}

fn read_u32_at(data: &[u8], offset: usize) -> Result<u32, DecodeError> {
    if data.len() < offset + 4 {
        return Err(too_short(data.len()));
    }
    Ok(u32::from_le_bytes([
        data[offset],
        data[offset + 1],
        data[offset + 2],
        data[offset + 3],
    ]))
}

fn read_u64_at(data: &[u8], offset: usize) -> Result<u64, DecodeError> {
    if data.len() < offset + 8 {
        return Err(too_short(data.len()));
    }
    Ok(u64::from_le_bytes([
        data[offset],
        data[offset + 1],
        data[offset + 2],
        data[offset + 3],
        data[offset + 4],
        data[offset + 5],
        data[offset + 6],
        data[offset + 7],
    ]))
}

fn read_address_at(data: &[u8], offset: usize) -> Result<Address, DecodeError> {
    if data.len() < offset + Address::LEN {
        return Err(too_short(data.len()));
    }
    let mut out = [0u8; Address::LEN];
    out.copy_from_slice(&data[offset..offset + Address::LEN]);
    Ok(Address::new(out))
}
