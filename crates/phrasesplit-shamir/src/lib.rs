//! PhraseSplit Shamir Module
//!
//! Split an arbitrary secret into N shares over GF(256) such that any K of
//! them reconstruct it, while K-1 reveal nothing.
//!
//! # Layers
//!
//! - [`gf256`]: field arithmetic (reduction polynomial 0x11B)
//! - [`shamir`]: splitting and Lagrange reconstruction on raw [`Share`]s
//! - [`codec`]: base64 transport strings for shares
//!
//! The two boundary entry points, [`split`] and [`combine`], work on
//! transport strings and raw secret bytes. Converting a phrase to bytes is
//! the caller's job.
//!
//! # Example
//!
//! ```
//! use phrasesplit_shamir::{combine, split};
//!
//! let secret = b"correct horse battery staple";
//!
//! // Split into 3-of-5 shares
//! let shares = split(secret, 5, 3).unwrap();
//! assert_eq!(shares.len(), 5);
//!
//! // Any 3 shares recover the secret
//! let recovered = combine(&shares[1..4]).unwrap();
//! assert_eq!(recovered, secret);
//! ```
//!
//! # Limitations
//!
//! The threshold is not stored in the shares. Combining fewer than K shares
//! yields a wrong secret rather than an error, and shares carry no integrity
//! tag: a corrupted share is only caught if it changes the decoded length.

pub mod codec;
pub mod gf256;
pub mod shamir;

// Re-exports
pub use codec::{decode_share, encode_share, format_share_list, parse_share_list};
pub use shamir::{reconstruct_secret, split_secret, split_secret_with_rng, verify_shares, Share};

use rand::{CryptoRng, RngCore};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Largest share count: one share per nonzero field element.
pub const MAX_SHARES: usize = 255;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShamirError {
    #[error("The secret must not be empty")]
    EmptySecret,
    #[error(
        "Invalid threshold {threshold} for {total} shares: need 2 <= threshold <= number of shares"
    )]
    InvalidThreshold { threshold: usize, total: usize },
    #[error("The number of shares cannot exceed 255 (got {0})")]
    TooManyShares(usize),
    #[error("Shares of different lengths")]
    LengthMismatch,
    #[error("Duplicate shares")]
    DuplicateShares,
    #[error("Empty input: no share data to combine")]
    EmptyInput,
    #[error("Not enough shares to verify: need {needed}, got {got}")]
    InsufficientShares { needed: usize, got: usize },
    #[error("Invalid share format: {0}")]
    InvalidFormat(String),
    #[error("Zero has no inverse in GF(256)")]
    ZeroInverse,
}

/// Error categories callers are expected to handle distinctly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad parameters or an inconsistent share set
    Validation,
    /// A transport string that does not decode to a share
    Format,
    /// A field operation outside its domain
    Domain,
}

impl ShamirError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ShamirError::EmptySecret
            | ShamirError::InvalidThreshold { .. }
            | ShamirError::TooManyShares(_)
            | ShamirError::LengthMismatch
            | ShamirError::DuplicateShares
            | ShamirError::EmptyInput
            | ShamirError::InsufficientShares { .. } => ErrorKind::Validation,
            ShamirError::InvalidFormat(_) => ErrorKind::Format,
            ShamirError::ZeroInverse => ErrorKind::Domain,
        }
    }
}

/// Split `secret` into `total` base64 shares, any `threshold` of which
/// reconstruct it. Uses the operating system's CSPRNG.
pub fn split(secret: &[u8], total: usize, threshold: usize) -> Result<Vec<String>, ShamirError> {
    let shares = split_secret(secret, total, threshold)?;
    Ok(shares.iter().map(encode_share).collect())
}

/// Same as [`split`] with an injected random source.
pub fn split_with_rng<R: RngCore + CryptoRng>(
    secret: &[u8],
    total: usize,
    threshold: usize,
    rng: &mut R,
) -> Result<Vec<String>, ShamirError> {
    let shares = split_secret_with_rng(secret, total, threshold, rng)?;
    Ok(shares.iter().map(encode_share).collect())
}

/// Decode base64 shares and reconstruct the secret bytes.
///
/// No strings, or a single string without payload, is
/// [`ShamirError::EmptyInput`]; other undecodable strings are format errors.
pub fn combine<S: AsRef<str>>(shares: &[S]) -> Result<Vec<u8>, ShamirError> {
    match shares {
        [] => return Err(ShamirError::EmptyInput),
        [only] if codec::lacks_payload(only.as_ref()) => return Err(ShamirError::EmptyInput),
        _ => {}
    }
    let decoded = shares
        .iter()
        .map(|s| decode_share(s.as_ref()))
        .collect::<Result<Vec<_>, _>>()?;
    reconstruct_secret(&decoded)
}

/// Share count and threshold for a split
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitConfig {
    /// Total shares to generate (N)
    pub total_shares: u8,
    /// Minimum shares needed to reconstruct (K)
    pub threshold: u8,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self::three_of_five()
    }
}

impl SplitConfig {
    /// Common 2-of-3 setup
    pub fn two_of_three() -> Self {
        Self {
            total_shares: 3,
            threshold: 2,
        }
    }

    /// Common 3-of-5 setup
    pub fn three_of_five() -> Self {
        Self {
            total_shares: 5,
            threshold: 3,
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ShamirError> {
        shamir::check_parameters(self.total_shares as usize, self.threshold as usize)
    }
}
