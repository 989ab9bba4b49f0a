//! # Account & Instance Addresses
//!
//! Every participant in AEGIS — a signer, a wallet instance, a deployed
//! token ledger — is identified by a 20-byte [`Address`]. Signer addresses
//! come from the outside world; instance addresses are derived
//! deterministically by whichever registry deploys the instance (see
//! [`Address::derive`]).
//!
//! The all-zero address is reserved as the null sentinel. It is never a
//! valid signer, recipient, or instance identity — validation layers reject
//! it everywhere it would otherwise leak in.
//!
//! Addresses serialize as lowercase `0x`-prefixed hex strings rather than
//! byte arrays, so that `HashMap<Address, _>` state serializes to a plain
//! JSON object.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Length of an address in bytes.
pub const ADDRESS_LENGTH: usize = 20;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors from parsing an address out of its hex representation.
#[derive(Debug, Error, PartialEq)]
pub enum AddressParseError {
    /// The string was not valid hex.
    #[error("invalid hex: {0}")]
    Hex(#[from] hex::FromHexError),

    /// The decoded payload was not exactly 20 bytes.
    #[error("wrong length: expected {ADDRESS_LENGTH} bytes, got {0}")]
    Length(usize),
}

// ---------------------------------------------------------------------------
// Address
// ---------------------------------------------------------------------------

/// A 20-byte account or instance identifier.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Address([u8; ADDRESS_LENGTH]);

impl Address {
    /// The null address. Reserved — never a valid signer, recipient, or
    /// instance identity.
    pub const ZERO: Address = Address([0u8; ADDRESS_LENGTH]);

    /// Creates an `Address` from raw bytes.
    pub fn from_bytes(bytes: [u8; ADDRESS_LENGTH]) -> Self {
        Self(bytes)
    }

    /// Returns the raw 20-byte identifier.
    pub fn as_bytes(&self) -> &[u8; ADDRESS_LENGTH] {
        &self.0
    }

    /// Returns `true` if this is the null address.
    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; ADDRESS_LENGTH]
    }

    /// Returns the lowercase `0x`-prefixed hex rendering.
    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }

    /// Parses a hex-encoded address. The `0x` prefix is optional.
    pub fn from_hex(s: &str) -> Result<Self, AddressParseError> {
        let stripped = s.strip_prefix("0x").unwrap_or(s);
        let bytes = hex::decode(stripped)?;
        if bytes.len() != ADDRESS_LENGTH {
            return Err(AddressParseError::Length(bytes.len()));
        }
        let mut arr = [0u8; ADDRESS_LENGTH];
        arr.copy_from_slice(&bytes);
        Ok(Self(arr))
    }

    /// Derives a fresh instance address from a domain-separation tag and a
    /// deployment nonce.
    ///
    /// The address is the first 20 bytes of `BLAKE3(tag || 0x00 || nonce)`.
    /// The separator byte keeps tag/nonce boundaries unambiguous. Registries
    /// bump their nonce per deployment, so two deployments — even with
    /// identical configuration — always receive distinct addresses.
    pub fn derive(tag: &str, nonce: u64) -> Self {
        let mut preimage = Vec::with_capacity(tag.len() + 9);
        preimage.extend_from_slice(tag.as_bytes());
        preimage.push(0x00);
        preimage.extend_from_slice(&nonce.to_le_bytes());

        let digest = blake3::hash(&preimage);
        let mut bytes = [0u8; ADDRESS_LENGTH];
        bytes.copy_from_slice(&digest.as_bytes()[..ADDRESS_LENGTH]);
        Self(bytes)
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({}...)", &self.to_hex()[..10])
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl FromStr for Address {
    type Err = AddressParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

// Hex-string serde so addresses can key JSON objects.

impl Serialize for Address {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Address::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
