//! `split` and `combine` subcommands over arbitrary readers and writers.

use anyhow::{Context, Result};
use phrasesplit_shamir::{
    format_share_list, parse_share_list, reconstruct_secret, split, SplitConfig,
};
use std::io::{Read, Write};
use thiserror::Error;
use zeroize::Zeroizing;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum InputError {
    #[error("The secret phrase must not be empty")]
    EmptyPhrase,
    #[error("Recovery field is empty")]
    EmptyRecovery,
}

/// Read a phrase, split it, and write the shares separated by blank lines.
pub fn run_split<R: Read, W: Write>(
    input: &mut R,
    output: &mut W,
    config: &SplitConfig,
) -> Result<()> {
    let mut raw = Zeroizing::new(String::new());
    input
        .read_to_string(&mut raw)
        .context("Failed to read secret phrase from stdin")?;

    let phrase = raw.trim();
    if phrase.is_empty() {
        return Err(InputError::EmptyPhrase.into());
    }

    let shares = split(
        phrase.as_bytes(),
        config.total_shares as usize,
        config.threshold as usize,
    )?;
    log::info!(
        "Split phrase into {} shares (any {} recover it)",
        shares.len(),
        config.threshold
    );

    writeln!(output, "{}", format_share_list(&shares)).context("Failed to write shares")?;
    Ok(())
}

/// Read whitespace-separated shares and write the recovered phrase.
pub fn run_combine<R: Read, W: Write>(input: &mut R, output: &mut W) -> Result<()> {
    let mut raw = String::new();
    input
        .read_to_string(&mut raw)
        .context("Failed to read shares from stdin")?;

    if raw.trim().is_empty() {
        return Err(InputError::EmptyRecovery.into());
    }

    let shares = parse_share_list(&raw)?;
    log::info!("Combining {} shares", shares.len());

    let secret = Zeroizing::new(reconstruct_secret(&shares)?);
    // Invalid UTF-8 becomes U+FFFD rather than failing
    let phrase = Zeroizing::new(String::from_utf8_lossy(&secret).into_owned());

    writeln!(output, "{}", phrase.as_str()).context("Failed to write recovered phrase")?;
    Ok(())
}
