//! Core Shamir's Secret Sharing implementation
//!
//! Split a secret into N shares where any K can reconstruct it.

use crate::gf256::{interpolate_at_zero, lagrange_weights, poly_eval};
use crate::{ShamirError, MAX_SHARES};
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use zeroize::Zeroizing;

/// A single share of a secret
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Share {
    /// x-coordinate (1..=N when produced by a split, never 0)
    pub x: u8,
    /// One polynomial evaluation per secret byte
    pub ys: Vec<u8>,
}

impl Share {
    /// Length of the secret this share belongs to
    pub fn secret_len(&self) -> usize {
        self.ys.len()
    }
}

/// Check share count and threshold against the field's limits
pub(crate) fn check_parameters(total: usize, threshold: usize) -> Result<(), ShamirError> {
    if threshold < 2 || threshold > total {
        return Err(ShamirError::InvalidThreshold { threshold, total });
    }
    if total > MAX_SHARES {
        return Err(ShamirError::TooManyShares(total));
    }
    Ok(())
}

/// Split a secret into shares using the operating system's CSPRNG
///
/// # Arguments
/// * `secret` - The secret bytes to split
/// * `total` - Total shares to generate (N, at most 255)
/// * `threshold` - Minimum shares needed to reconstruct (K)
///
/// # Returns
/// Vector of N shares with x = 1..=N, any K of which reconstruct the secret
pub fn split_secret(
    secret: &[u8],
    total: usize,
    threshold: usize,
) -> Result<Vec<Share>, ShamirError> {
    split_secret_with_rng(secret, total, threshold, &mut OsRng)
}

/// Split a secret into shares drawing coefficients from `rng`
pub fn split_secret_with_rng<R: RngCore + CryptoRng>(
    secret: &[u8],
    total: usize,
    threshold: usize,
    rng: &mut R,
) -> Result<Vec<Share>, ShamirError> {
    if secret.is_empty() {
        return Err(ShamirError::EmptySecret);
    }
    check_parameters(total, threshold)?;

    log::debug!(
        "splitting {}-byte secret into {} shares (threshold {})",
        secret.len(),
        total,
        threshold
    );

    // total <= 255, so every x fits in a u8
    let mut shares: Vec<Share> = (1..=total as u8)
        .map(|x| Share {
            x,
            ys: Vec::with_capacity(secret.len()),
        })
        .collect();

    // p(x) = secret + c1*x + c2*x^2 + ... + c_{k-1}*x^{k-1}
    let mut coefficients = Zeroizing::new(vec![0u8; threshold]);
    for &secret_byte in secret {
        // Fresh coefficients for every byte position
        coefficients[0] = secret_byte;
        rng.fill_bytes(&mut coefficients[1..]);

        for share in &mut shares {
            share.ys.push(poly_eval(&coefficients, share.x));
        }
    }

    Ok(shares)
}

/// Reconstruct a secret from shares
///
/// The threshold is not known here: passing fewer shares than were required
/// at split time returns a wrong secret, not an error.
///
/// # Arguments
/// * `shares` - At least threshold shares with distinct x-coordinates
///
/// # Returns
/// The original secret bytes
pub fn reconstruct_secret(shares: &[Share]) -> Result<Vec<u8>, ShamirError> {
    let Some(first) = shares.first() else {
        return Err(ShamirError::EmptyInput);
    };

    let secret_len = first.ys.len();
    if secret_len == 0 {
        return Err(ShamirError::EmptyInput);
    }

    // All shares must have the same length
    if shares.iter().any(|s| s.ys.len() != secret_len) {
        return Err(ShamirError::LengthMismatch);
    }

    let mut seen = HashSet::with_capacity(shares.len());
    if !shares.iter().all(|s| seen.insert(s.x)) {
        return Err(ShamirError::DuplicateShares);
    }

    // Weights depend only on the x-coordinates
    let xs: Vec<u8> = shares.iter().map(|s| s.x).collect();
    let weights = lagrange_weights(&xs)?;

    log::debug!(
        "reconstructing {}-byte secret from {} shares",
        secret_len,
        shares.len()
    );

    let secret = (0..secret_len)
        .map(|byte_idx| interpolate_at_zero(&weights, shares.iter().map(|s| s.ys[byte_idx])))
        .collect();

    Ok(secret)
}

/// Verify that shares are consistent (reconstruct to the same secret)
///
/// Compares the reconstruction from the first `threshold` shares with the one
/// from the last `threshold` shares. Useful for spotting a corrupted share in
/// a larger set; it is not an integrity check.
pub fn verify_shares(shares: &[Share], threshold: usize) -> Result<bool, ShamirError> {
    if threshold == 0 || shares.len() < threshold {
        return Err(ShamirError::InsufficientShares {
            needed: threshold,
            got: shares.len(),
        });
    }

    let expected = Zeroizing::new(reconstruct_secret(&shares[..threshold])?);

    if shares.len() > threshold {
        let result = Zeroizing::new(reconstruct_secret(&shares[shares.len() - threshold..])?);
        if *result != *expected {
            return Ok(false);
        }
    }

    Ok(true)
}
