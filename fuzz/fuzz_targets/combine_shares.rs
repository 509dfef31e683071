#![no_main]

use libfuzzer_sys::fuzz_target;
use phrasesplit_shamir::{reconstruct_secret, ErrorKind, Share};

fuzz_target!(|data: &[u8]| {
    // First byte picks the payload length, the rest is cut into raw shares.
    let Some((&len, rest)) = data.split_first() else {
        return;
    };
    let chunk = (len as usize % 32) + 2;

    let shares: Vec<Share> = rest
        .chunks(chunk)
        .map(|c| Share {
            x: c[0],
            ys: c[1..].to_vec(),
        })
        .collect();

    // Distinct-x validation must keep the zero inverse unreachable
    if let Err(e) = reconstruct_secret(&shares) {
        assert_ne!(e.kind(), ErrorKind::Domain);
    }
});
