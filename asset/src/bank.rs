//! # Asset Bank
//!
//! The [`AssetBank`] hosts deployed [`TokenLedger`]s and dispatches calls to
//! them by asset address. It plays the role the chain itself plays for an
//! on-chain custody wallet: given an asset address, route the
//! `balance_of`/`transfer` call to the right ledger, and fail loudly when
//! the address points at nothing.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::address::Address;
use crate::token::{TokenError, TokenLedger};

/// Domain-separation tag for deriving token ledger addresses.
const TOKEN_ADDRESS_TAG: &str = "aegis:token";

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors that can occur when calling into the asset layer.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AssetError {
    /// No ledger is deployed at the given address — the analogue of calling
    /// into an account with no contract behind it.
    #[error("unknown asset: no ledger deployed at {0}")]
    UnknownAsset(Address),

    /// The targeted ledger rejected the operation.
    #[error("token error: {0}")]
    Token(#[from] TokenError),
}

// ---------------------------------------------------------------------------
// AssetBank
// ---------------------------------------------------------------------------

/// Host for deployed token ledgers, keyed by asset address.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct AssetBank {
    /// Deployed ledgers by address.
    tokens: HashMap<Address, TokenLedger>,

    /// Feeds [`Address::derive`] so every deployment gets a fresh address.
    deploy_nonce: u64,
}

impl AssetBank {
    /// Creates an empty bank.
    pub fn new() -> Self {
        Self::default()
    }

    /// Deploys a new token ledger and returns its address.
    pub fn deploy_token(&mut self, name: &str, symbol: &str, decimals: u8) -> Address {
        let address = Address::derive(TOKEN_ADDRESS_TAG, self.deploy_nonce);
        self.deploy_nonce += 1;

        self.tokens.insert(address, TokenLedger::new(name, symbol, decimals));
        info!(%address, symbol, "token ledger deployed");
        address
    }

    /// Returns the ledger deployed at `asset`, if any.
    pub fn token(&self, asset: &Address) -> Option<&TokenLedger> {
        self.tokens.get(asset)
    }

    /// Returns a mutable handle to the ledger deployed at `asset`, if any.
    ///
    /// This is the funding path: embedding code (and tests) mint and move
    /// balances directly on the ledger.
    pub fn token_mut(&mut self, asset: &Address) -> Option<&mut TokenLedger> {
        self.tokens.get_mut(asset)
    }

    /// Returns `owner`'s balance on the ledger at `asset`.
    ///
    /// # Errors
    ///
    /// Returns [`AssetError::UnknownAsset`] if no ledger is deployed there.
    pub fn balance_of(&self, asset: &Address, owner: &Address) -> Result<u64, AssetError> {
        let ledger = self.tokens.get(asset).ok_or(AssetError::UnknownAsset(*asset))?;
        Ok(ledger.balance_of(owner))
    }

    /// Moves `amount` from `from` to `to` on the ledger at `asset`.
    ///
    /// # Errors
    ///
    /// Returns [`AssetError::UnknownAsset`] if no ledger is deployed there,
    /// or the ledger's own rejection wrapped as [`AssetError::Token`].
    pub fn transfer(
        &mut self,
        asset: &Address,
        from: &Address,
        to: &Address,
        amount: u64,
    ) -> Result<(), AssetError> {
        let ledger = self
            .tokens
            .get_mut(asset)
            .ok_or(AssetError::UnknownAsset(*asset))?;
        ledger.transfer(from, to, amount)?;
        Ok(())
    }

    /// Returns the number of deployed ledgers.
    pub fn token_count(&self) -> usize {
        self.tokens.len()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn addr(n: u64) -> Address {
        Address::derive("test:account", n)
    }

    #[test]
    fn deploy_assigns_distinct_addresses() {
        let mut bank = AssetBank::new();
        let a = bank.deploy_token("Token A", "A", 8);
        let b = bank.deploy_token("Token B", "B", 8);
        assert_ne!(a, b);
        assert_eq!(bank.token_count(), 2);
    }

    #[test]
    fn dispatch_by_asset_address() {
        let (alice, bob) = (addr(1), addr(2));
        let mut bank = AssetBank::new();
        let asset = bank.deploy_token("AEGIS Test Token", "AGT", 8);

        bank.token_mut(&asset).unwrap().mint(&alice, 1_000).unwrap();
        assert_eq!(bank.balance_of(&asset, &alice).unwrap(), 1_000);

        bank.transfer(&asset, &alice, &bob, 300).unwrap();
        assert_eq!(bank.balance_of(&asset, &alice).unwrap(), 700);
        assert_eq!(bank.balance_of(&asset, &bob).unwrap(), 300);
    }

    #[test]
    fn unknown_asset_rejected() {
        let bank = AssetBank::new();
        let ghost = Address::derive("test:ghost", 0);
        let result = bank.balance_of(&ghost, &addr(1));
        assert_eq!(result, Err(AssetError::UnknownAsset(ghost)));
    }

    #[test]
    fn transfer_on_unknown_asset_rejected() {
        let mut bank = AssetBank::new();
        let ghost = Address::derive("test:ghost", 0);
        let result = bank.transfer(&ghost, &addr(1), &addr(2), 10);
        assert_eq!(result, Err(AssetError::UnknownAsset(ghost)));
    }

    #[test]
    fn ledger_rejection_surfaces_as_token_error() {
        let (alice, bob) = (addr(1), addr(2));
        let mut bank = AssetBank::new();
        let asset = bank.deploy_token("T", "T", 0);

        let result = bank.transfer(&asset, &alice, &bob, 10);
        assert!(matches!(result, Err(AssetError::Token(_))));
    }

    #[test]
    fn bank_serialization_roundtrip() {
        let alice = addr(1);
        let mut bank = AssetBank::new();
        let asset = bank.deploy_token("AEGIS Test Token", "AGT", 8);
        bank.token_mut(&asset).unwrap().mint(&alice, 5_000).unwrap();

        let json = serde_json::to_string(&bank).expect("serialize");
        let recovered: AssetBank = serde_json::from_str(&json).expect("deserialize");

        assert_eq!(recovered.balance_of(&asset, &alice).unwrap(), 5_000);
        // The nonce survives, so future deployments stay distinct.
        let mut recovered = recovered;
        let next = recovered.deploy_token("Other", "O", 8);
        assert_ne!(next, asset);
    }
}
