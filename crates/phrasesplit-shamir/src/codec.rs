//! Share transport encoding
//!
//! A share travels as standard base64 (padded, no line wraps) of
//! `[x, y_0, y_1, ..., y_{len-1}]`.

use crate::shamir::Share;
use crate::ShamirError;
use base64::prelude::*;

/// Encode a share as a base64 transport string
pub fn encode_share(share: &Share) -> String {
    let mut bytes = Vec::with_capacity(share.ys.len() + 1);
    bytes.push(share.x);
    bytes.extend_from_slice(&share.ys);
    BASE64_STANDARD.encode(&bytes)
}

/// Decode a base64 transport string into a share
///
/// Decoding is strict: a hand-edited share whose last symbol carries
/// non-zero padding bits (e.g. `Av9=`) is rejected.
pub fn decode_share(encoded: &str) -> Result<Share, ShamirError> {
    let bytes = BASE64_STANDARD
        .decode(encoded.trim())
        .map_err(|e| ShamirError::InvalidFormat(format!("not valid base64: {}", e)))?;

    match bytes.split_first() {
        Some((&x, ys)) if !ys.is_empty() => Ok(Share { x, ys: ys.to_vec() }),
        _ => Err(ShamirError::InvalidFormat(format!(
            "share decodes to {} bytes, need at least 2",
            bytes.len()
        ))),
    }
}

/// True when a lone share string carries no payload: blank, or valid base64
/// of fewer than 2 bytes
pub(crate) fn lacks_payload(encoded: &str) -> bool {
    let trimmed = encoded.trim();
    trimmed.is_empty()
        || matches!(BASE64_STANDARD.decode(trimmed), Ok(bytes) if bytes.len() < 2)
}

/// Parse whitespace-separated base64 shares, as pasted into a recovery field
///
/// An input with no tokens, or a single token without payload, is
/// [`ShamirError::EmptyInput`] rather than a format error.
pub fn parse_share_list(input: &str) -> Result<Vec<Share>, ShamirError> {
    let tokens: Vec<&str> = input.split_whitespace().collect();
    match tokens.as_slice() {
        [] => return Err(ShamirError::EmptyInput),
        [only] if lacks_payload(only) => return Err(ShamirError::EmptyInput),
        _ => {}
    }

    tokens.into_iter().map(decode_share).collect()
}

/// Join encoded shares for display, separated by blank lines
pub fn format_share_list<S: AsRef<str>>(shares: &[S]) -> String {
    shares
        .iter()
        .map(|s| s.as_ref())
        .collect::<Vec<_>>()
        .join("\n\n")
}
