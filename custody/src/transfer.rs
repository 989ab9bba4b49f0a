//! # Transfer Ledger
//!
//! The append-only log of asset transfer proposals for one wallet. Each
//! proposal is independently tracked from creation through approval to
//! finalization; entries are never removed and ids are never reused.
//!
//! The ledger itself is bookkeeping only. Authorization, quorum evaluation,
//! and the external asset movement live in [`crate::wallet`] — the ledger
//! just guarantees that what was recorded stays recorded.

use aegis_asset::Address;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// TransferProposal
// ---------------------------------------------------------------------------

/// A pending or finalized request to move wallet-held assets.
///
/// The proposer counts as the first approver from the moment of creation —
/// that is a governance policy choice, not an accident. Once `finalized`
/// flips, the proposal is immutable.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TransferProposal {
    /// Wallet-local id, monotonically increasing from 1.
    id: u64,

    /// Amount to move, in smallest units. Always > 0.
    amount: u64,

    /// Destination account. Never the zero address.
    recipient: Address,

    /// Address of the external asset ledger to draw from.
    asset: Address,

    /// The signer who created the proposal.
    proposer: Address,

    /// Signers who have approved, in approval order. Contains the proposer
    /// from creation.
    approvals: Vec<Address>,

    /// `true` once the external transfer has executed. Terminal.
    finalized: bool,

    /// Timestamp when the proposal was created.
    created_at: DateTime<Utc>,
}

impl TransferProposal {
    /// Opens a new proposal with the proposer's implicit self-approval.
    pub(crate) fn open(
        id: u64,
        amount: u64,
        recipient: Address,
        asset: Address,
        proposer: Address,
    ) -> Self {
        Self {
            id,
            amount,
            recipient,
            asset,
            proposer,
            approvals: vec![proposer],
            finalized: false,
            created_at: Utc::now(),
        }
    }

    /// Returns the wallet-local proposal id.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Returns the proposed amount.
    pub fn amount(&self) -> u64 {
        self.amount
    }

    /// Returns the destination account.
    pub fn recipient(&self) -> Address {
        self.recipient
    }

    /// Returns the asset ledger address.
    pub fn asset(&self) -> Address {
        self.asset
    }

    /// Returns the signer who created the proposal.
    pub fn proposer(&self) -> Address {
        self.proposer
    }

    /// Returns the approving signers in approval order.
    pub fn approvals(&self) -> &[Address] {
        &self.approvals
    }

    /// Returns the number of recorded approvals. Always consistent with
    /// [`approvals`](Self::approvals) — it is derived, not stored.
    pub fn approval_count(&self) -> u32 {
        self.approvals.len() as u32
    }

    /// Returns `true` if `signer` has already approved.
    pub fn has_approved(&self, signer: &Address) -> bool {
        self.approvals.contains(signer)
    }

    /// Returns `true` once the proposal has executed.
    pub fn is_finalized(&self) -> bool {
        self.finalized
    }

    /// Returns when the proposal was created.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub(crate) fn record_approval(&mut self, signer: Address) {
        self.approvals.push(signer);
    }

    pub(crate) fn finalize(&mut self) {
        self.finalized = true;
    }
}

// ---------------------------------------------------------------------------
// TransferLedger
// ---------------------------------------------------------------------------

/// Append-only log of one wallet's transfer proposals.
///
/// Ids are positional: proposal `n` lives at index `n - 1`, so lookup is
/// O(1) and the id counter is simply the log length.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct TransferLedger {
    proposals: Vec<TransferProposal>,
}

impl TransferLedger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the id the next successful proposal will receive.
    pub(crate) fn next_id(&self) -> u64 {
        self.proposals.len() as u64 + 1
    }

    /// Appends a proposal. The caller assigns ids via [`next_id`](Self::next_id).
    pub(crate) fn push(&mut self, proposal: TransferProposal) {
        self.proposals.push(proposal);
    }

    /// Returns the proposal with the given id, if it exists.
    pub fn get(&self, id: u64) -> Option<&TransferProposal> {
        let index = id.checked_sub(1)?;
        self.proposals.get(index as usize)
    }

    pub(crate) fn get_mut(&mut self, id: u64) -> Option<&mut TransferProposal> {
        let index = id.checked_sub(1)?;
        self.proposals.get_mut(index as usize)
    }

    /// Returns the number of proposals ever created.
    pub fn len(&self) -> usize {
        self.proposals.len()
    }

    /// Returns `true` if no proposal has been created yet.
    pub fn is_empty(&self) -> bool {
        self.proposals.is_empty()
    }

    /// Iterates over all proposals in creation order.
    pub fn iter(&self) -> impl Iterator<Item = &TransferProposal> {
        self.proposals.iter()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
