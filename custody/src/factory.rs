//! # Wallet Factory
//!
//! Deploys independent [`Wallet`] instances and keeps the registry of
//! everything it created. The factory is orthogonal to the wallets' approval
//! flow — it validates the initial configuration, hands each instance a
//! fresh derived address, and never touches a wallet's internals again.
//!
//! Instances are held behind one `parking_lot::Mutex` each, so concurrent
//! callers serialize per wallet and operations on distinct wallets never
//! contend.

use std::collections::HashMap;
use std::sync::Arc;

use aegis_asset::Address;
use parking_lot::Mutex;
use tracing::info;

use crate::signers::ConfigError;
use crate::wallet::Wallet;

/// Domain-separation tag for deriving wallet instance addresses.
const WALLET_ADDRESS_TAG: &str = "aegis:wallet";

/// A shared handle to one deployed wallet.
pub type WalletHandle = Arc<Mutex<Wallet>>;

// ---------------------------------------------------------------------------
// WalletFactory
// ---------------------------------------------------------------------------

/// Creates wallets on demand and tracks every instance it created.
#[derive(Debug, Default)]
pub struct WalletFactory {
    /// Deployed instances by address. The locks are the storage-layer
    /// coordination point for concurrent callers.
    wallets: HashMap<Address, WalletHandle>,

    /// Every created address, in creation order. Append-only.
    created: Vec<Address>,

    /// Feeds [`Address::derive`]; bumped only on successful deployments, so
    /// a rejected configuration consumes nothing.
    deploy_nonce: u64,
}

impl WalletFactory {
    /// Creates an empty factory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Deploys a new, fully independent wallet and returns its address.
    ///
    /// The configuration is validated under the registry rules. Every
    /// deployment — including one repeating an earlier configuration — gets
    /// its own address, its own registry, and its own ledgers; no mutable
    /// state is shared between instances.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the `(quorum, signers)` configuration is
    /// malformed. Nothing is recorded in that case.
    pub fn create_wallet(&mut self, quorum: u32, signers: Vec<Address>) -> Result<Address, ConfigError> {
        let address = Address::derive(WALLET_ADDRESS_TAG, self.deploy_nonce);
        let wallet = Wallet::new(address, quorum, signers)?;

        self.deploy_nonce += 1;
        self.wallets.insert(address, Arc::new(Mutex::new(wallet)));
        self.created.push(address);

        info!(%address, quorum, "wallet deployed");
        Ok(address)
    }

    /// Returns every wallet created by this factory, in creation order.
    pub fn wallets(&self) -> &[Address] {
        &self.created
    }

    /// Returns a handle to the wallet at `address`, if this factory created
    /// it.
    pub fn get(&self, address: &Address) -> Option<WalletHandle> {
        self.wallets.get(address).cloned()
    }

    /// Returns the number of wallets created.
    pub fn len(&self) -> usize {
        self.created.len()
    }

    /// Returns `true` if no wallet has been created yet.
    pub fn is_empty(&self) -> bool {
        self.created.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn addr(n: u64) -> Address {
        Address::derive("test:signer", n)
    }

    #[test]
    fn new_factory_is_empty() {
        let factory = WalletFactory::new();
        assert!(factory.is_empty());
        assert!(factory.wallets().is_empty());
    }

    #[test]
    fn create_wallet_registers_instance() {
        let mut factory = WalletFactory::new();
        let address = factory.create_wallet(2, vec![addr(1), addr(2)]).unwrap();

        assert_eq!(factory.len(), 1);
        assert_eq!(factory.wallets(), &[address]);

        let handle = factory.get(&address).unwrap();
        let wallet = handle.lock();
        assert_eq!(wallet.address(), address);
        assert_eq!(wallet.quorum(), 2);
    }

    #[test]
    fn addresses_are_distinct_even_for_identical_configs() {
        let mut factory = WalletFactory::new();
        let signers = vec![addr(1), addr(2)];

        let a = factory.create_wallet(2, signers.clone()).unwrap();
        let b = factory.create_wallet(2, signers).unwrap();

        assert_ne!(a, b);
        assert_eq!(factory.wallets(), &[a, b]);
    }

    #[test]
    fn invalid_config_records_nothing() {
        let mut factory = WalletFactory::new();
        let result = factory.create_wallet(3, vec![addr(1), addr(2)]);

        assert!(result.is_err());
        assert!(factory.is_empty());

        // The next successful deployment starts from the untouched nonce.
        let address = factory.create_wallet(1, vec![addr(1)]).unwrap();
        assert_eq!(address, Address::derive(WALLET_ADDRESS_TAG, 0));
    }

    #[test]
    fn unknown_address_yields_no_handle() {
        let factory = WalletFactory::new();
        assert!(factory.get(&addr(1)).is_none());
    }
}
