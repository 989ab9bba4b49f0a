//! # Signer Registry
//!
//! The approval policy of a single wallet: who may act, and how many of
//! them must agree. The registry is initialized at wallet creation, replaced
//! wholesale when a governance proposal reaches quorum, and immutable in
//! between.
//!
//! Construction and replacement run the same validation. A configuration
//! that would let the zero address vote, leave nobody in charge, count the
//! same signer twice, or set a threshold nobody can reach is rejected before
//! it touches live state.

use aegis_asset::Address;
use serde::{Deserialize, Serialize};
use thiserror::Error;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Rejections of a malformed `(quorum, signers)` configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The zero address appeared in the signer set.
    #[error("zero address is not a valid signer")]
    NullSigner,

    /// The signer set is empty.
    #[error("signer set is empty")]
    NoSigners,

    /// The same address appears more than once. A repeated signer would
    /// silently lower the effective quorum, so it is malformed input.
    #[error("duplicate signer: {0}")]
    DuplicateSigner(Address),

    /// The quorum is zero or exceeds the signer count.
    #[error("quorum {quorum} out of range: must be between 1 and {signers}")]
    QuorumOutOfRange {
        /// The requested quorum.
        quorum: u32,
        /// The size of the signer set it was checked against.
        signers: u32,
    },
}

// ---------------------------------------------------------------------------
// SignerRegistry
// ---------------------------------------------------------------------------

/// The current approval policy: the authorized signer set and the quorum.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignerRegistry {
    /// Number of distinct approvals required to finalize any proposal.
    quorum: u32,

    /// Authorized approvers, insertion-ordered, no duplicates.
    signers: Vec<Address>,
}

impl SignerRegistry {
    /// Validates and constructs a registry.
    pub fn new(quorum: u32, signers: Vec<Address>) -> Result<Self, ConfigError> {
        Self::validate(quorum, &signers)?;
        Ok(Self { quorum, signers })
    }

    /// Checks a `(quorum, signers)` pair against the registry invariants
    /// without constructing anything. Used by the factory and by the
    /// governance path to reject malformed proposals up front.
    pub fn validate(quorum: u32, signers: &[Address]) -> Result<(), ConfigError> {
        if signers.is_empty() {
            return Err(ConfigError::NoSigners);
        }
        for (i, signer) in signers.iter().enumerate() {
            if signer.is_zero() {
                return Err(ConfigError::NullSigner);
            }
            if signers[..i].contains(signer) {
                return Err(ConfigError::DuplicateSigner(*signer));
            }
        }
        if quorum == 0 || quorum as usize > signers.len() {
            return Err(ConfigError::QuorumOutOfRange {
                quorum,
                signers: signers.len() as u32,
            });
        }
        Ok(())
    }

    /// Replaces the registry wholesale with a new configuration.
    ///
    /// Re-validates under the same rules as construction. On failure the
    /// prior registry state is untouched.
    pub fn apply(&mut self, quorum: u32, signers: Vec<Address>) -> Result<(), ConfigError> {
        Self::validate(quorum, &signers)?;
        self.quorum = quorum;
        self.signers = signers;
        Ok(())
    }

    /// Returns `true` if `address` is an authorized signer.
    pub fn is_signer(&self, address: &Address) -> bool {
        self.signers.contains(address)
    }

    /// Returns the current quorum.
    pub fn quorum(&self) -> u32 {
        self.quorum
    }

    /// Returns the number of authorized signers.
    pub fn signer_count(&self) -> u32 {
        self.signers.len() as u32
    }

    /// Returns the authorized signers in insertion order.
    pub fn signers(&self) -> &[Address] {
        &self.signers
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
