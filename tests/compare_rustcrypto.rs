//! Byte-for-byte comparison against the RustCrypto `sha3` crate, with random
//! message lengths and random chunking.

use keccak_sponge::{Keccak, Sha3, Shake};
use rand::{Rng, RngCore, SeedableRng, rngs::SmallRng};

fn random_message(rng: &mut SmallRng, max_len: usize) -> Vec<u8> {
    let len = rng.gen_range(0..max_len);
    let mut buf = vec![0u8; len];
    rng.fill_bytes(&mut buf);
    buf
}

/// Feed `data` in random-sized chunks.
fn update_chunked(data: &[u8], rng: &mut SmallRng, mut update: impl FnMut(&[u8])) {
    let mut rest = data;
    while !rest.is_empty() {
        let n = rng.gen_range(1..=rest.len().min(300));
        let (head, tail) = rest.split_at(n);
        update(head);
        rest = tail;
    }
}

fn rustcrypto_shake(bits: usize, data: &[u8], out: &mut [u8]) {
    use sha3::digest::{ExtendableOutput, Update, XofReader};
    match bits {
        128 => {
            let mut h = sha3::Shake128::default();
            h.update(data);
            h.finalize_xof().read(out);
        }
        256 => {
            let mut h = sha3::Shake256::default();
            h.update(data);
            h.finalize_xof().read(out);
        }
        _ => unreachable!(),
    }
}

macro_rules! compare_fixed {
    ($name:ident, $ours:ident, $bits:expr, $theirs:ty) => {
        #[test]
        fn $name() {
            let mut rng = SmallRng::seed_from_u64($bits as u64);
            for _ in 0..64 {
                let msg = random_message(&mut rng, 1200);
                let expected = <$theirs as sha3::Digest>::digest(&msg);

                let mut ours = $ours::new($bits).unwrap();
                update_chunked(&msg, &mut rng, |chunk| ours.update(chunk).unwrap());
                let got = ours.finalize();
                assert_eq!(&got[..], &expected[..], "len {}", msg.len());
            }
        }
    };
}

compare_fixed!(sha3_224_matches, Sha3, 224, sha3::Sha3_224);
compare_fixed!(sha3_256_matches, Sha3, 256, sha3::Sha3_256);
compare_fixed!(sha3_384_matches, Sha3, 384, sha3::Sha3_384);
compare_fixed!(sha3_512_matches, Sha3, 512, sha3::Sha3_512);
compare_fixed!(keccak_224_matches, Keccak, 224, sha3::Keccak224);
compare_fixed!(keccak_256_matches, Keccak, 256, sha3::Keccak256);
compare_fixed!(keccak_384_matches, Keccak, 384, sha3::Keccak384);
compare_fixed!(keccak_512_matches, Keccak, 512, sha3::Keccak512);

#[test]
fn shake_matches_with_incremental_output() {
    let mut rng = SmallRng::seed_from_u64(0x5ead);
    for bits in [128, 256] {
        for _ in 0..32 {
            let msg = random_message(&mut rng, 800);
            let total = rng.gen_range(1..1000);
            let mut expected = vec![0u8; total];
            rustcrypto_shake(bits, &msg, &mut expected);

            let mut ours = Shake::new(bits).unwrap();
            update_chunked(&msg, &mut rng, |chunk| ours.update(chunk).unwrap());
            let mut got = vec![0u8; total];
            let mut pos = 0;
            while pos < total {
                let n = rng.gen_range(1..=total - pos);
                ours.output_into(&mut got[pos..pos + n]);
                pos += n;
            }
            assert_eq!(got, expected, "SHAKE{bits}, len {}", msg.len());
        }
    }
}
