//! # Fungible Token Ledger
//!
//! A [`TokenLedger`] is one fungible asset: metadata, total supply, and the
//! per-holder balance book. The surface is deliberately ERC20-shaped —
//! `balance_of`, `transfer`, `approve`/`allowance`/`transfer_from` — because
//! that is the interface custody wallets rely on, and the interface external
//! funders use to move value into a wallet.
//!
//! All amounts are `u64` in smallest-unit denomination and all arithmetic is
//! checked. The `decimals` field is display metadata only — the ledger never
//! divides.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::address::Address;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors that can occur during token ledger operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TokenError {
    /// The zero address appeared where a real account is required.
    #[error("zero address is not a valid account")]
    NullAddress,

    /// Attempted to move more than the holder's balance.
    #[error("insufficient balance: available {available}, requested {requested}")]
    InsufficientBalance {
        /// Current balance of the debited account.
        available: u64,
        /// Amount the caller tried to move.
        requested: u64,
    },

    /// A spender tried to move more than the owner approved.
    #[error("insufficient allowance: approved {approved}, requested {requested}")]
    InsufficientAllowance {
        /// The remaining approved amount.
        approved: u64,
        /// Amount the spender tried to move.
        requested: u64,
    },

    /// A mint or credit would overflow `u64`.
    #[error("supply overflow: current {current}, credit {credit}")]
    Overflow {
        /// The value before the failed credit.
        current: u64,
        /// The amount that caused the overflow.
        credit: u64,
    },
}

// ---------------------------------------------------------------------------
// TokenLedger
// ---------------------------------------------------------------------------

/// One fungible asset and its balance book.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TokenLedger {
    /// Human-readable token name (e.g., "AEGIS Test Token").
    name: String,

    /// Ticker symbol (e.g., "AGT").
    symbol: String,

    /// Display decimal places. Metadata only — never used in arithmetic.
    decimals: u8,

    /// Current total supply in smallest units. Tracks mints exactly.
    total_supply: u64,

    /// Per-holder balances. Absent entry means zero.
    balances: HashMap<Address, u64>,

    /// Spending approvals: owner -> spender -> remaining amount.
    allowances: HashMap<Address, HashMap<Address, u64>>,

    /// Timestamp when the ledger was deployed.
    created_at: DateTime<Utc>,
}

impl TokenLedger {
    /// Creates a new ledger with zero supply.
    pub fn new(name: &str, symbol: &str, decimals: u8) -> Self {
        Self {
            name: name.to_string(),
            symbol: symbol.to_string(),
            decimals,
            total_supply: 0,
            balances: HashMap::new(),
            allowances: HashMap::new(),
            created_at: Utc::now(),
        }
    }

    /// Returns the token name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the ticker symbol.
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Returns the display decimal places.
    pub fn decimals(&self) -> u8 {
        self.decimals
    }

    /// Returns the current total supply.
    pub fn total_supply(&self) -> u64 {
        self.total_supply
    }

    /// Returns when the ledger was deployed.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the balance of `owner`, zero if no entry exists.
    pub fn balance_of(&self, owner: &Address) -> u64 {
        self.balances.get(owner).copied().unwrap_or(0)
    }

    /// Mints new supply to `to`.
    ///
    /// Returns the recipient's new balance.
    ///
    /// # Errors
    ///
    /// Returns [`TokenError::NullAddress`] if `to` is the zero address.
    /// Returns [`TokenError::Overflow`] if supply or balance would overflow.
    pub fn mint(&mut self, to: &Address, amount: u64) -> Result<u64, TokenError> {
        if to.is_zero() {
            return Err(TokenError::NullAddress);
        }

        let new_supply = self
            .total_supply
            .checked_add(amount)
            .ok_or(TokenError::Overflow {
                current: self.total_supply,
                credit: amount,
            })?;

        let balance = self.balances.entry(*to).or_insert(0);
        let new_balance = balance.checked_add(amount).ok_or(TokenError::Overflow {
            current: *balance,
            credit: amount,
        })?;

        *balance = new_balance;
        self.total_supply = new_supply;
        Ok(new_balance)
    }

    /// Moves `amount` from `from` to `to`.
    ///
    /// # Errors
    ///
    /// Returns [`TokenError::NullAddress`] if `to` is the zero address.
    /// Returns [`TokenError::InsufficientBalance`] if `from` holds less
    /// than `amount`.
    pub fn transfer(&mut self, from: &Address, to: &Address, amount: u64) -> Result<(), TokenError> {
        if to.is_zero() {
            return Err(TokenError::NullAddress);
        }

        let available = self.balance_of(from);
        if available < amount {
            return Err(TokenError::InsufficientBalance {
                available,
                requested: amount,
            });
        }

        // All checks before any mutation, so a rejection never leaves a
        // half-applied transfer. Self-transfers net out.
        let recipient_balance = if to == from {
            available - amount
        } else {
            self.balance_of(to)
        };
        let credited = recipient_balance
            .checked_add(amount)
            .ok_or(TokenError::Overflow {
                current: recipient_balance,
                credit: amount,
            })?;

        self.balances.insert(*from, available - amount);
        self.balances.insert(*to, credited);
        Ok(())
    }

    /// Sets `spender`'s allowance over `owner`'s funds to exactly `amount`.
    pub fn approve(&mut self, owner: &Address, spender: &Address, amount: u64) {
        self.allowances.entry(*owner).or_default().insert(*spender, amount);
    }

    /// Returns the remaining amount `spender` may move on `owner`'s behalf.
    pub fn allowance(&self, owner: &Address, spender: &Address) -> u64 {
        self.allowances
            .get(owner)
            .and_then(|per_spender| per_spender.get(spender))
            .copied()
            .unwrap_or(0)
    }

    /// Moves `amount` from `from` to `to` on behalf of `spender`, consuming
    /// allowance.
    ///
    /// This is the funding path for custody wallets: an external holder
    /// approves the mover, who then pulls funds into the wallet's balance.
    ///
    /// # Errors
    ///
    /// Returns [`TokenError::InsufficientAllowance`] if the approval does
    /// not cover `amount`; otherwise the same errors as
    /// [`transfer`](Self::transfer).
    pub fn transfer_from(
        &mut self,
        spender: &Address,
        from: &Address,
        to: &Address,
        amount: u64,
    ) -> Result<(), TokenError> {
        let approved = self.allowance(from, spender);
        if approved < amount {
            return Err(TokenError::InsufficientAllowance {
                approved,
                requested: amount,
            });
        }

        self.transfer(from, to, amount)?;

        if let Some(per_spender) = self.allowances.get_mut(from) {
            per_spender.insert(*spender, approved - amount);
        }
        Ok(())
    }

    /// Returns the number of accounts with a balance entry.
    pub fn holder_count(&self) -> usize {
        self.balances.len()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
