#![no_main]

use libfuzzer_sys::fuzz_target;
use phrasesplit_shamir::{decode_share, encode_share, parse_share_list};

fuzz_target!(|data: &[u8]| {
    // decode_share must never panic — it should always return Ok or Err.
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(share) = decode_share(s) {
            // Anything that decodes re-encodes to the canonical form
            let reencoded = encode_share(&share);
            assert_eq!(decode_share(&reencoded).as_ref(), Ok(&share));
        }
        let _ = parse_share_list(s);
    }
});
