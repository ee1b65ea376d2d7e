//! Seeded roll streams
//!
//! Reproducible callers thread an explicit seed end-to-end; ambient entropy
//! is only used when no seed is given.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// A seeded stream, or an ambient one when the caller passes `None`.
pub fn rng_for(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    }
}

/// Mix a base seed with a stream tag and a roll index into an independent
/// sub-seed. Splitmix-style finalization so consecutive indices land far
/// apart.
pub fn derive_seed(base: u64, stream: u64, index: u64) -> u64 {
    let mut z = base
        ^ stream.wrapping_mul(0x9e37_79b9_7f4a_7c15)
        ^ index.wrapping_mul(0xd1b5_4a32_d192_ed03);
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^ (z >> 31)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_derive_seed_is_stable() {
        assert_eq!(derive_seed(1, 2, 3), derive_seed(1, 2, 3));
    }

    #[test]
    fn test_derive_seed_separates_streams_and_indices() {
        let base = 42;
        assert_ne!(derive_seed(base, 1, 0), derive_seed(base, 2, 0));
        assert_ne!(derive_seed(base, 1, 0), derive_seed(base, 1, 1));
    }

    #[test]
    fn test_seeded_rng_reproduces() {
        let mut a = rng_for(Some(7));
        let mut b = rng_for(Some(7));
        for _ in 0..16 {
            assert_eq!(a.gen::<u64>(), b.gen::<u64>());
        }
    }
}
