//! # Governance Ledger
//!
//! The append-only log of approval-policy change proposals for one wallet.
//! Structurally a mirror of [`crate::transfer`], but a finalized entry
//! replaces the wallet's signer registry instead of moving assets.
//!
//! Ids live in their own namespace — governance proposal 1 and transfer
//! proposal 1 are unrelated objects with independent monotonic counters.
//! Multiple governance proposals may be pending at once; each is evaluated
//! against the quorum in effect when an approval arrives, not a snapshot
//! taken at proposal time.

use aegis_asset::Address;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// GovernanceProposal
// ---------------------------------------------------------------------------

/// A pending or finalized request to replace the wallet's approval policy.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GovernanceProposal {
    /// Wallet-local id in the governance namespace, monotonic from 1.
    id: u64,

    /// The replacement quorum.
    new_quorum: u32,

    /// The replacement signer set. Validated against the registry rules at
    /// proposal time and again when applied.
    new_signers: Vec<Address>,

    /// The signer who created the proposal.
    proposer: Address,

    /// Signers who have approved, in approval order. Contains the proposer
    /// from creation.
    approvals: Vec<Address>,

    /// `true` once the registry has been replaced. Terminal.
    finalized: bool,

    /// Timestamp when the proposal was created.
    created_at: DateTime<Utc>,
}

impl GovernanceProposal {
    /// Opens a new proposal with the proposer's implicit self-approval.
    pub(crate) fn open(
        id: u64,
        new_quorum: u32,
        new_signers: Vec<Address>,
        proposer: Address,
    ) -> Self {
        Self {
            id,
            new_quorum,
            new_signers,
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

    /// Returns the proposed replacement quorum.
    pub fn new_quorum(&self) -> u32 {
        self.new_quorum
    }

    /// Returns the proposed replacement signer set.
    pub fn new_signers(&self) -> &[Address] {
        &self.new_signers
    }

    /// Returns the signer who created the proposal.
    pub fn proposer(&self) -> Address {
        self.proposer
    }

    /// Returns the approving signers in approval order.
    pub fn approvals(&self) -> &[Address] {
        &self.approvals
    }

    /// Returns the number of recorded approvals.
    pub fn approval_count(&self) -> u32 {
        self.approvals.len() as u32
    }

    /// Returns `true` if `signer` has already approved.
    pub fn has_approved(&self, signer: &Address) -> bool {
        self.approvals.contains(signer)
    }

    /// Returns `true` once the registry replacement has executed.
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
// GovernanceLedger
// ---------------------------------------------------------------------------

/// Append-only log of one wallet's governance proposals.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct GovernanceLedger {
    proposals: Vec<GovernanceProposal>,
}

impl GovernanceLedger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the id the next successful proposal will receive.
    pub(crate) fn next_id(&self) -> u64 {
        self.proposals.len() as u64 + 1
    }

    /// Appends a proposal. The caller assigns ids via [`next_id`](Self::next_id).
    pub(crate) fn push(&mut self, proposal: GovernanceProposal) {
        self.proposals.push(proposal);
    }

    /// Returns the proposal with the given id, if it exists.
    pub fn get(&self, id: u64) -> Option<&GovernanceProposal> {
        let index = id.checked_sub(1)?;
        self.proposals.get(index as usize)
    }

    pub(crate) fn get_mut(&mut self, id: u64) -> Option<&mut GovernanceProposal> {
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
    pub fn iter(&self) -> impl Iterator<Item = &GovernanceProposal> {
        self.proposals.iter()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
