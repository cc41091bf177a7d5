//! Deterministic RNG for upgrade card selection.
//!
//! Selection must be reproducible: given the same session seed and the same
//! offer sequence, the same cards come up. The oracle is seed-driven rather
//! than stateful so callers control exactly which roll gets which entropy.

/// Seed-driven random oracle.
pub trait RngOracle {
    /// Generate a random u32 from a seed.
    fn next_u32(&self, seed: u64) -> u32;

    /// Pick an index from `weights` proportionally to each weight.
    ///
    /// Zero-weight entries are never picked unless every weight is zero, in
    /// which case the pick is uniform over indexes.
    fn weighted_index(&self, seed: u64, weights: &[u32]) -> usize {
        debug_assert!(!weights.is_empty());
        let total: u64 = weights.iter().map(|w| u64::from(*w)).sum();
        if total == 0 {
            return (self.next_u32(seed) as usize) % weights.len();
        }
        let mut roll = u64::from(self.next_u32(seed)) % total;
        for (index, weight) in weights.iter().enumerate() {
            let weight = u64::from(*weight);
            if roll < weight {
                return index;
            }
            roll -= weight;
        }
        weights.len() - 1
    }
}

/// PCG-XSH-RR: 32-bit output permuted from 64-bit state.
///
/// Small and statistically solid. See <https://www.pcg-random.org/>.
#[derive(Clone, Copy, Debug, Default)]
pub struct PcgRng;

impl PcgRng {
    const MULTIPLIER: u64 = 6364136223846793005;
    const INCREMENT: u64 = 1442695040888963407;

    #[inline]
    fn step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    #[inline]
    fn output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl RngOracle for PcgRng {
    fn next_u32(&self, seed: u64) -> u32 {
        Self::output(Self::step(seed))
    }
}

/// Mix session seed, offer sequence number, and round index into one seed, so
/// every sampling round of every offer draws independent entropy.
pub fn selection_seed(session_seed: u64, offer_nonce: u64, round: u32) -> u64 {
    // SplitMix64-style combiners and avalanche.
    let mut hash = session_seed;
    hash ^= offer_nonce.wrapping_mul(0x9e3779b97f4a7c15);
    hash ^= u64::from(round).wrapping_mul(0x517cc1b727220a95);
    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xff51afd7ed558ccd);
    hash ^= hash >> 33;
    hash
}
