//! # Custody Wallet
//!
//! One independent instance of the quorum authorization state machine. A
//! [`Wallet`] composes a [`SignerRegistry`] with two append-only ledgers —
//! transfer proposals and governance proposals — and exposes the public
//! operations: propose, approve, and (implicitly, at quorum) execute.
//!
//! ## Finalization Model
//!
//! A proposal finalizes at the first moment its approval count reaches the
//! quorum in effect. Because the proposer counts as the first approver, a
//! quorum-1 wallet finalizes synchronously inside the propose call itself.
//!
//! Finalization of a transfer is transactional with the external asset
//! ledger: the approval that crosses the threshold is *staged*, the external
//! transfer runs, and only on success are the approval and the `finalized`
//! flag committed. A rejected external transfer aborts the whole call and
//! leaves the proposal exactly as it was — the transfer fires at most once
//! per proposal, and exactly once for every proposal that ever finalizes.
//!
//! ## Governance Thresholds
//!
//! Governance proposals are measured against the *live* quorum — the value
//! in effect when an approval arrives, not a snapshot from proposal time.
//! This is a deliberate policy choice: interleaved registry changes re-price
//! every pending proposal. A signer the pending change would remove can
//! still approve it while still current; once the registry is replaced,
//! authorization checks use the new set.
//!
//! ## Concurrency
//!
//! Every mutating operation takes `&mut self`, so no partial update is ever
//! observable. Cross-thread coordination is the storage layer's job — the
//! factory hands out one `parking_lot::Mutex` per wallet (see
//! [`crate::factory`]).

use aegis_asset::{Address, AssetBank, AssetError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::governance::{GovernanceLedger, GovernanceProposal};
use crate::signers::{ConfigError, SignerRegistry};
use crate::transfer::{TransferLedger, TransferProposal};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Rejections of wallet operations. None are recoverable automatically, and
/// no operation partially applies its effects before failing.
#[derive(Debug, Error)]
pub enum WalletError {
    /// Malformed `(quorum, signers)` parameters at construction or in a
    /// governance proposal.
    #[error("invalid signer configuration: {0}")]
    Config(#[from] ConfigError),

    /// The caller is not in the current signer set.
    #[error("unauthorized: {caller} is not a signer of this wallet")]
    Unauthorized {
        /// The address that attempted the operation.
        caller: Address,
    },

    /// Zero-amount transfers are rejected outright.
    #[error("zero-amount transfers are not permitted")]
    ZeroAmount,

    /// The transfer recipient is the zero address.
    #[error("recipient is the zero address")]
    NullRecipient,

    /// The wallet's held balance cannot cover the proposed amount.
    #[error("insufficient funds: requested {requested}, wallet holds {available}")]
    InsufficientFunds {
        /// Amount the proposal asked for.
        requested: u64,
        /// The wallet's balance on the asset at proposal time.
        available: u64,
    },

    /// The referenced proposal id does not exist in its namespace.
    #[error("proposal not found: {0}")]
    NotFound(u64),

    /// The proposal has already executed; no further state change is
    /// permitted.
    #[error("proposal {0} is already finalized")]
    AlreadyFinalized(u64),

    /// The caller already approved this specific proposal.
    #[error("{signer} has already approved this proposal")]
    DuplicateApproval {
        /// The double-voting signer.
        signer: Address,
    },

    /// The asset ledger rejected the transfer during finalization. The
    /// approval that would have crossed the threshold was rolled back.
    #[error("external transfer failed: {0}")]
    ExternalTransferFailed(AssetError),

    /// A proposal-time balance query failed (e.g. no ledger is deployed at
    /// the given asset address).
    #[error("asset ledger error: {0}")]
    Asset(#[from] AssetError),
}

// ---------------------------------------------------------------------------
// Wallet
// ---------------------------------------------------------------------------

/// One quorum-governed custody wallet.
///
/// Holds its own identity (the address external ledgers see as the asset
/// holder), its approval policy, and its two proposal logs. Never shares
/// mutable state with any other wallet.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Wallet {
    /// This wallet's account identity on external asset ledgers.
    address: Address,

    /// The current approval policy.
    registry: SignerRegistry,

    /// Append-only transfer proposal log.
    transfers: TransferLedger,

    /// Append-only governance proposal log.
    governance: GovernanceLedger,

    /// Timestamp when the wallet was created.
    created_at: DateTime<Utc>,
}

impl Wallet {
    /// Creates a wallet with the given identity and approval policy.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the `(quorum, signers)` configuration is
    /// malformed.
    pub fn new(address: Address, quorum: u32, signers: Vec<Address>) -> Result<Self, ConfigError> {
        let registry = SignerRegistry::new(quorum, signers)?;
        Ok(Self {
            address,
            registry,
            transfers: TransferLedger::new(),
            governance: GovernanceLedger::new(),
            created_at: Utc::now(),
        })
    }

    // -----------------------------------------------------------------------
    // Reads
    // -----------------------------------------------------------------------

    /// Returns this wallet's account identity.
    pub fn address(&self) -> Address {
        self.address
    }

    /// Returns the quorum currently in effect.
    pub fn quorum(&self) -> u32 {
        self.registry.quorum()
    }

    /// Returns the number of authorized signers.
    pub fn signer_count(&self) -> u32 {
        self.registry.signer_count()
    }

    /// Returns `true` if `address` is currently an authorized signer.
    pub fn is_signer(&self, address: &Address) -> bool {
        self.registry.is_signer(address)
    }

    /// Returns the current signer registry.
    pub fn registry(&self) -> &SignerRegistry {
        &self.registry
    }

    /// Returns the transfer proposal with the given id, if it exists.
    pub fn transfer_proposal(&self, id: u64) -> Option<&TransferProposal> {
        self.transfers.get(id)
    }

    /// Returns the number of transfer proposals ever created.
    pub fn transfer_count(&self) -> usize {
        self.transfers.len()
    }

    /// Returns the governance proposal with the given id, if it exists.
    pub fn governance_proposal(&self, id: u64) -> Option<&GovernanceProposal> {
        self.governance.get(id)
    }

    /// Returns the number of governance proposals ever created.
    pub fn governance_count(&self) -> usize {
        self.governance.len()
    }

    /// Returns when the wallet was created.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    // -----------------------------------------------------------------------
    // Transfer path
    // -----------------------------------------------------------------------

    /// Proposes moving `amount` of `asset` from the wallet to `recipient`.
    ///
    /// The proposer's implicit self-approval counts toward the quorum, so on
    /// a quorum-1 wallet the proposal finalizes inside this call: the
    /// external transfer runs first and the finalized proposal is recorded
    /// only on success.
    ///
    /// Returns the new proposal's id. A rejected proposal consumes no id.
    ///
    /// # Errors
    ///
    /// In check order: [`WalletError::Unauthorized`] if `caller` is not a
    /// signer, [`WalletError::ZeroAmount`], [`WalletError::NullRecipient`],
    /// [`WalletError::Asset`] if the balance query fails, and
    /// [`WalletError::InsufficientFunds`] if the wallet's held balance is
    /// below `amount`. On a quorum-1 wallet,
    /// [`WalletError::ExternalTransferFailed`] if the ledger rejects the
    /// transfer — in which case no proposal exists afterwards.
    pub fn propose_transfer(
        &mut self,
        amount: u64,
        recipient: Address,
        asset: Address,
        caller: Address,
        assets: &mut AssetBank,
    ) -> Result<u64, WalletError> {
        if !self.registry.is_signer(&caller) {
            return Err(WalletError::Unauthorized { caller });
        }
        if amount == 0 {
            return Err(WalletError::ZeroAmount);
        }
        if recipient.is_zero() {
            return Err(WalletError::NullRecipient);
        }
        let available = assets.balance_of(&asset, &self.address)?;
        if available < amount {
            return Err(WalletError::InsufficientFunds {
                requested: amount,
                available,
            });
        }

        let id = self.transfers.next_id();
        let mut proposal = TransferProposal::open(id, amount, recipient, asset, caller);

        if proposal.approval_count() >= self.registry.quorum() {
            // Quorum reached at creation: external effect first, record only
            // on success.
            if let Err(source) = assets.transfer(&asset, &self.address, &recipient, amount) {
                warn!(wallet = %self.address, id, %source, "external transfer rejected at proposal");
                return Err(WalletError::ExternalTransferFailed(source));
            }
            proposal.finalize();
            info!(wallet = %self.address, id, amount, recipient = %recipient, "transfer finalized at proposal");
        } else {
            debug!(wallet = %self.address, id, amount, recipient = %recipient, "transfer proposed");
        }

        self.transfers.push(proposal);
        Ok(id)
    }

    /// Records `caller`'s approval of transfer proposal `id`, executing the
    /// transfer if this approval reaches the quorum in effect.
    ///
    /// Two-phase apply at the threshold: the external transfer runs first,
    /// and the approval plus the `finalized` flag are committed only if it
    /// succeeds. On failure the proposal is left exactly as it was.
    ///
    /// # Errors
    ///
    /// In check order: [`WalletError::NotFound`],
    /// [`WalletError::AlreadyFinalized`], [`WalletError::Unauthorized`],
    /// [`WalletError::DuplicateApproval`], and
    /// [`WalletError::ExternalTransferFailed`] if the ledger rejects the
    /// transfer at the threshold.
    pub fn approve_transfer(
        &mut self,
        id: u64,
        caller: Address,
        assets: &mut AssetBank,
    ) -> Result<(), WalletError> {
        let quorum = self.registry.quorum();

        let proposal = self.transfers.get(id).ok_or(WalletError::NotFound(id))?;
        if proposal.is_finalized() {
            return Err(WalletError::AlreadyFinalized(id));
        }
        if !self.registry.is_signer(&caller) {
            return Err(WalletError::Unauthorized { caller });
        }
        if proposal.has_approved(&caller) {
            return Err(WalletError::DuplicateApproval { signer: caller });
        }

        let staged = proposal.approval_count() + 1;
        let amount = proposal.amount();
        let recipient = proposal.recipient();
        let asset = proposal.asset();

        if staged < quorum {
            let proposal = self.transfers.get_mut(id).ok_or(WalletError::NotFound(id))?;
            proposal.record_approval(caller);
            debug!(wallet = %self.address, id, approvals = staged, quorum, "transfer approval recorded");
            return Ok(());
        }

        // Threshold reached: external effect first, commit only on success.
        if let Err(source) = assets.transfer(&asset, &self.address, &recipient, amount) {
            warn!(wallet = %self.address, id, %source, "external transfer rejected, approval rolled back");
            return Err(WalletError::ExternalTransferFailed(source));
        }

        let proposal = self.transfers.get_mut(id).ok_or(WalletError::NotFound(id))?;
        proposal.record_approval(caller);
        proposal.finalize();
        info!(wallet = %self.address, id, amount, recipient = %recipient, "transfer finalized");
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Governance path
    // -----------------------------------------------------------------------

    /// Proposes replacing the approval policy with `(new_quorum, new_signers)`.
    ///
    /// The replacement configuration is validated up front under the same
    /// rules as wallet construction. On a quorum-1 wallet the registry is
    /// replaced inside this call.
    ///
    /// Returns the new proposal's id (governance namespace). A rejected
    /// proposal consumes no id.
    ///
    /// # Errors
    ///
    /// [`WalletError::Unauthorized`] if `caller` is not a current signer;
    /// [`WalletError::Config`] if the replacement configuration is
    /// malformed.
    pub fn propose_update(
        &mut self,
        new_quorum: u32,
        new_signers: Vec<Address>,
        caller: Address,
    ) -> Result<u64, WalletError> {
        if !self.registry.is_signer(&caller) {
            return Err(WalletError::Unauthorized { caller });
        }
        SignerRegistry::validate(new_quorum, &new_signers)?;

        let id = self.governance.next_id();
        let mut proposal = GovernanceProposal::open(id, new_quorum, new_signers, caller);

        if proposal.approval_count() >= self.registry.quorum() {
            self.registry
                .apply(proposal.new_quorum(), proposal.new_signers().to_vec())?;
            proposal.finalize();
            info!(wallet = %self.address, id, quorum = new_quorum, "signer registry replaced at proposal");
        } else {
            debug!(wallet = %self.address, id, quorum = new_quorum, "governance update proposed");
        }

        self.governance.push(proposal);
        Ok(id)
    }

    /// Records `caller`'s approval of governance proposal `id`, replacing
    /// the signer registry if this approval reaches the quorum currently in
    /// effect.
    ///
    /// The threshold is re-read from the live registry on every call. A
    /// signer the pending proposal would remove may still approve while
    /// still current.
    ///
    /// # Errors
    ///
    /// In check order: [`WalletError::NotFound`],
    /// [`WalletError::AlreadyFinalized`], [`WalletError::Unauthorized`],
    /// [`WalletError::DuplicateApproval`]. [`WalletError::Config`] if the
    /// replacement fails re-validation at apply time — the prior registry
    /// and the proposal are left untouched.
    pub fn approve_update(&mut self, id: u64, caller: Address) -> Result<(), WalletError> {
        // Live threshold: the quorum in effect now, not at proposal time.
        let quorum = self.registry.quorum();

        let proposal = self.governance.get(id).ok_or(WalletError::NotFound(id))?;
        if proposal.is_finalized() {
            return Err(WalletError::AlreadyFinalized(id));
        }
        if !self.registry.is_signer(&caller) {
            return Err(WalletError::Unauthorized { caller });
        }
        if proposal.has_approved(&caller) {
            return Err(WalletError::DuplicateApproval { signer: caller });
        }

        let staged = proposal.approval_count() + 1;

        if staged < quorum {
            let proposal = self.governance.get_mut(id).ok_or(WalletError::NotFound(id))?;
            proposal.record_approval(caller);
            debug!(wallet = %self.address, id, approvals = staged, quorum, "governance approval recorded");
            return Ok(());
        }

        let new_quorum = proposal.new_quorum();
        let new_signers = proposal.new_signers().to_vec();

        // Replacement re-validates; on failure nothing below runs and the
        // prior registry survives.
        self.registry.apply(new_quorum, new_signers)?;

        let proposal = self.governance.get_mut(id).ok_or(WalletError::NotFound(id))?;
        proposal.record_approval(caller);
        proposal.finalize();
        info!(wallet = %self.address, id, quorum = new_quorum, "signer registry replaced");
        Ok(())
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

    /// Wallet with quorum 2 over signers 1..=3, funded with 1_000 units.
    fn funded_wallet() -> (Wallet, AssetBank, Address) {
        let mut bank = AssetBank::new();
        let asset = bank.deploy_token("AEGIS Test Token", "AGT", 8);

        let wallet_address = Address::derive("test:wallet", 0);
        let wallet = Wallet::new(wallet_address, 2, vec![addr(1), addr(2), addr(3)]).unwrap();

        bank.token_mut(&asset).unwrap().mint(&wallet_address, 1_000).unwrap();
        (wallet, bank, asset)
    }

    #[test]
    fn construction_sets_policy() {
        let (wallet, _, _) = funded_wallet();
        assert_eq!(wallet.quorum(), 2);
        assert_eq!(wallet.signer_count(), 3);
        assert!(wallet.is_signer(&addr(1)));
        assert!(!wallet.is_signer(&addr(4)));
        assert_eq!(wallet.transfer_count(), 0);
        assert_eq!(wallet.governance_count(), 0);
    }

    #[test]
    fn construction_rejects_bad_config() {
        let result = Wallet::new(Address::derive("test:wallet", 0), 0, vec![addr(1)]);
        assert!(result.is_err());
    }

    #[test]
    fn propose_records_implicit_approval() {
        let (mut wallet, mut bank, asset) = funded_wallet();

        let id = wallet
            .propose_transfer(100, addr(9), asset, addr(1), &mut bank)
            .unwrap();
        assert_eq!(id, 1);

        let proposal = wallet.transfer_proposal(id).unwrap();
        assert_eq!(proposal.approval_count(), 1);
        assert!(proposal.has_approved(&addr(1)));
        assert!(!proposal.is_finalized());
        // No asset movement below quorum.
        assert_eq!(bank.balance_of(&asset, &wallet.address()).unwrap(), 1_000);
    }

    #[test]
    fn non_signer_cannot_propose() {
        let (mut wallet, mut bank, asset) = funded_wallet();

        let result = wallet.propose_transfer(100, addr(9), asset, addr(7), &mut bank);
        assert!(matches!(result, Err(WalletError::Unauthorized { .. })));
        // Ledger untouched: no id consumed, no proposal recorded.
        assert_eq!(wallet.transfer_count(), 0);
    }

    #[test]
    fn zero_amount_rejected() {
        let (mut wallet, mut bank, asset) = funded_wallet();
        let result = wallet.propose_transfer(0, addr(9), asset, addr(1), &mut bank);
        assert!(matches!(result, Err(WalletError::ZeroAmount)));
        assert_eq!(wallet.transfer_count(), 0);
    }

    #[test]
    fn zero_recipient_rejected() {
        let (mut wallet, mut bank, asset) = funded_wallet();
        let result = wallet.propose_transfer(100, Address::ZERO, asset, addr(1), &mut bank);
        assert!(matches!(result, Err(WalletError::NullRecipient)));
    }

    #[test]
    fn over_balance_proposal_rejected() {
        let (mut wallet, mut bank, asset) = funded_wallet();
        let result = wallet.propose_transfer(1_001, addr(9), asset, addr(1), &mut bank);
        assert!(matches!(
            result,
            Err(WalletError::InsufficientFunds { requested: 1_001, available: 1_000 })
        ));
    }

    #[test]
    fn unknown_asset_proposal_rejected() {
        let (mut wallet, mut bank, _) = funded_wallet();
        let ghost = Address::derive("test:ghost", 0);
        let result = wallet.propose_transfer(100, addr(9), ghost, addr(1), &mut bank);
        assert!(matches!(result, Err(WalletError::Asset(_))));
    }

    #[test]
    fn second_approval_finalizes_and_moves_funds() {
        let (mut wallet, mut bank, asset) = funded_wallet();
        let recipient = addr(9);

        let id = wallet
            .propose_transfer(100, recipient, asset, addr(1), &mut bank)
            .unwrap();
        wallet.approve_transfer(id, addr(2), &mut bank).unwrap();

        let proposal = wallet.transfer_proposal(id).unwrap();
        assert_eq!(proposal.approval_count(), 2);
        assert!(proposal.is_finalized());
        assert_eq!(bank.balance_of(&asset, &wallet.address()).unwrap(), 900);
        assert_eq!(bank.balance_of(&asset, &recipient).unwrap(), 100);
    }

    #[test]
    fn duplicate_approval_rejected() {
        let (mut wallet, mut bank, asset) = funded_wallet();
        let wallet_address = wallet.address();

        let id = wallet
            .propose_transfer(100, addr(9), asset, addr(1), &mut bank)
            .unwrap();
        let result = wallet.approve_transfer(id, addr(1), &mut bank);

        assert!(matches!(result, Err(WalletError::DuplicateApproval { .. })));
        assert_eq!(wallet.transfer_proposal(id).unwrap().approval_count(), 1);
        assert_eq!(bank.balance_of(&asset, &wallet_address).unwrap(), 1_000);
    }

    #[test]
    fn approval_of_unknown_id_rejected() {
        let (mut wallet, mut bank, _) = funded_wallet();
        let result = wallet.approve_transfer(42, addr(1), &mut bank);
        assert!(matches!(result, Err(WalletError::NotFound(42))));
    }

    #[test]
    fn finalized_proposal_rejects_further_approvals() {
        let (mut wallet, mut bank, asset) = funded_wallet();

        let id = wallet
            .propose_transfer(100, addr(9), asset, addr(1), &mut bank)
            .unwrap();
        wallet.approve_transfer(id, addr(2), &mut bank).unwrap();

        let result = wallet.approve_transfer(id, addr(3), &mut bank);
        assert!(matches!(result, Err(WalletError::AlreadyFinalized(_))));
        // The transfer fired exactly once.
        assert_eq!(bank.balance_of(&asset, &addr(9)).unwrap(), 100);
    }

    #[test]
    fn quorum_one_finalizes_on_propose() {
        let mut bank = AssetBank::new();
        let asset = bank.deploy_token("AGT", "AGT", 8);
        let wallet_address = Address::derive("test:wallet", 1);
        let mut wallet = Wallet::new(wallet_address, 1, vec![addr(1)]).unwrap();
        bank.token_mut(&asset).unwrap().mint(&wallet_address, 500).unwrap();

        let id = wallet
            .propose_transfer(200, addr(9), asset, addr(1), &mut bank)
            .unwrap();

        assert!(wallet.transfer_proposal(id).unwrap().is_finalized());
        assert_eq!(bank.balance_of(&asset, &wallet_address).unwrap(), 300);
        assert_eq!(bank.balance_of(&asset, &addr(9)).unwrap(), 200);
    }

    #[test]
    fn failed_external_transfer_rolls_back_approval() {
        let (mut wallet, mut bank, asset) = funded_wallet();
        let wallet_address = wallet.address();

        let id = wallet
            .propose_transfer(800, addr(9), asset, addr(1), &mut bank)
            .unwrap();

        // Drain the wallet below the proposed amount out-of-band.
        bank.transfer(&asset, &wallet_address, &addr(8), 900).unwrap();

        let result = wallet.approve_transfer(id, addr(2), &mut bank);
        assert!(matches!(result, Err(WalletError::ExternalTransferFailed(_))));

        // The threshold-crossing approval was not recorded.
        let proposal = wallet.transfer_proposal(id).unwrap();
        assert_eq!(proposal.approval_count(), 1);
        assert!(!proposal.is_finalized());

        // Re-fund and retry: finalizes, and the transfer fires exactly once.
        bank.token_mut(&asset).unwrap().mint(&wallet_address, 1_000).unwrap();
        wallet.approve_transfer(id, addr(2), &mut bank).unwrap();
        assert!(wallet.transfer_proposal(id).unwrap().is_finalized());
        assert_eq!(bank.balance_of(&asset, &addr(9)).unwrap(), 800);
    }

    #[test]
    fn governance_update_replaces_registry() {
        let (mut wallet, _, _) = funded_wallet();
        let new_signers = vec![addr(1), addr(2), addr(3), addr(4)];

        let id = wallet.propose_update(3, new_signers, addr(1)).unwrap();
        assert_eq!(id, 1);
        assert_eq!(wallet.quorum(), 2);

        wallet.approve_update(id, addr(2)).unwrap();

        assert!(wallet.governance_proposal(id).unwrap().is_finalized());
        assert_eq!(wallet.quorum(), 3);
        assert_eq!(wallet.signer_count(), 4);
        assert!(wallet.is_signer(&addr(4)));
    }

    #[test]
    fn governance_ids_are_independent_of_transfer_ids() {
        let (mut wallet, mut bank, asset) = funded_wallet();

        let transfer_id = wallet
            .propose_transfer(100, addr(9), asset, addr(1), &mut bank)
            .unwrap();
        let governance_id = wallet
            .propose_update(2, vec![addr(1), addr(2)], addr(1))
            .unwrap();

        assert_eq!(transfer_id, 1);
        assert_eq!(governance_id, 1);
        assert_eq!(wallet.transfer_count(), 1);
        assert_eq!(wallet.governance_count(), 1);
    }

    #[test]
    fn invalid_replacement_configuration_rejected() {
        let (mut wallet, _, _) = funded_wallet();

        let result = wallet.propose_update(0, vec![addr(1)], addr(1));
        assert!(matches!(result, Err(WalletError::Config(_))));
        assert_eq!(wallet.governance_count(), 0);

        let result = wallet.propose_update(2, vec![addr(1), Address::ZERO], addr(1));
        assert!(matches!(result, Err(WalletError::Config(ConfigError::NullSigner))));
    }

    #[test]
    fn removed_signer_loses_authorization_after_replacement() {
        let (mut wallet, mut bank, asset) = funded_wallet();

        // Shrink the set to signers 1 and 2; signer 3 approves while still
        // current even though the change removes them.
        let id = wallet.propose_update(2, vec![addr(1), addr(2)], addr(1)).unwrap();
        wallet.approve_update(id, addr(3)).unwrap();

        assert!(!wallet.is_signer(&addr(3)));
        let result = wallet.propose_transfer(100, addr(9), asset, addr(3), &mut bank);
        assert!(matches!(result, Err(WalletError::Unauthorized { .. })));
    }

    #[test]
    fn wallet_serialization_roundtrip() {
        let (mut wallet, mut bank, asset) = funded_wallet();
        wallet.propose_transfer(100, addr(9), asset, addr(1), &mut bank).unwrap();

        let json = serde_json::to_string(&wallet).expect("serialize");
        let recovered: Wallet = serde_json::from_str(&json).expect("deserialize");

        assert_eq!(recovered.address(), wallet.address());
        assert_eq!(recovered.quorum(), 2);
        assert_eq!(recovered.transfer_count(), 1);
        assert_eq!(recovered.transfer_proposal(1).unwrap().amount(), 100);
    }
}
