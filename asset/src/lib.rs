// Copyright (c) 2026 ALAS Technology. MIT License.
// See LICENSE for details.

//! # AEGIS Asset Layer
//!
//! Where value lives. This crate provides the primitives the custody layer
//! builds on:
//!
//! - **address** — the 20-byte [`Address`] identifying every account,
//!   wallet instance, and deployed ledger. The all-zero address is the
//!   reserved null sentinel.
//! - **token** — the ERC20-shaped [`TokenLedger`]: one fungible asset,
//!   checked arithmetic, approve/transfer_from funding flows.
//! - **bank** — the [`AssetBank`] hosting deployed ledgers and dispatching
//!   `balance_of`/`transfer` calls by asset address.
//!
//! ## Design Principles
//!
//! 1. All amounts are `u64` in smallest-unit denomination. No floating
//!    point, no division — `decimals` is display metadata only.
//! 2. Money arithmetic is checked everywhere. Wrapping and money do not mix.
//! 3. Every public state type is serde-serializable; addresses render as
//!    `0x`-hex strings so maps keyed by them serialize as JSON objects.
//! 4. Instance addresses are derived, not random: `BLAKE3(tag || nonce)`,
//!    one nonce per deployment, so identity is reproducible and distinct.

pub mod address;
pub mod bank;
pub mod token;

pub use address::{Address, AddressParseError, ADDRESS_LENGTH};
pub use bank::{AssetBank, AssetError};
pub use token::{TokenError, TokenLedger};
