//! # AEGIS Quorum Custody
//!
//! Multi-party authorization for asset custody: nothing leaves a wallet,
//! and no approval policy changes, until enough of the designated signers
//! agree. This crate is the authorization state machine itself:
//!
//! - **signers** — the [`SignerRegistry`]: who may act, and how many must
//!   agree. Replaced wholesale by finalized governance proposals, validated
//!   identically at construction and at every replacement.
//! - **transfer** — the append-only [`TransferLedger`] of asset transfer
//!   proposals, each tracked independently from creation to finalization.
//! - **governance** — the append-only [`GovernanceLedger`] of policy change
//!   proposals, in its own id namespace.
//! - **wallet** — the [`Wallet`] aggregate wiring registry and ledgers
//!   together: authorization checks, quorum evaluation, and the
//!   transactional external transfer at finalization.
//! - **factory** — the [`WalletFactory`] deploying independent instances
//!   and tracking them in creation order.
//!
//! ## Design Principles
//!
//! 1. A proposal finalizes at the first moment its approval count reaches
//!    the quorum in effect — which, with the proposer's implicit
//!    self-approval, can be at creation time.
//! 2. The external asset transfer is transactional with the approval that
//!    triggers it: effect first, commit on success, nothing recorded on
//!    failure. It fires exactly once per finalized proposal.
//! 3. Every rejection is a typed error surfaced to the caller; no operation
//!    partially applies, and nothing is logged-and-swallowed.
//! 4. Wallets share no mutable state. Cross-thread coordination is one lock
//!    per instance at the factory, never anything global.

pub mod factory;
pub mod governance;
pub mod signers;
pub mod transfer;
pub mod wallet;

pub use factory::{WalletFactory, WalletHandle};
pub use governance::{GovernanceLedger, GovernanceProposal};
pub use signers::{ConfigError, SignerRegistry};
pub use transfer::{TransferLedger, TransferProposal};
pub use wallet::{Wallet, WalletError};
