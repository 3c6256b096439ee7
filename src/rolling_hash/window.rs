use static_assertions::const_assert;

use super::Fingerprint;
use crate::traits::{ElementHash, IndexedSequence};

/// The number of independent (base, modulus) pairs in a fingerprint.
pub(crate) const NUM_COMPONENTS: usize = 2;

/// Bases of the two polynomial hashes.
const BASES: [u64; NUM_COMPONENTS] = [65_537, 65_539];
/// Prime moduli of the two polynomial hashes.
const MODULI: [u64; NUM_COMPONENTS] = [1_000_000_007, 1_000_000_009];

// Every intermediate value must fit into a u64: the Horner step multiplies a
// residue by a base, the roll step multiplies two residues. Checked against
// the larger pair, which bounds both.
const_assert!((MODULI[1] - 1) as u128 * BASES[1] as u128 + MODULI[1] as u128 <= u64::MAX as u128);
const_assert!((MODULI[1] - 1) as u128 * (MODULI[1] - 1) as u128 <= u64::MAX as u128);
const_assert!(BASES[0] < MODULI[0] && BASES[1] < MODULI[1]);

/// The incremental strategy for windows of at least two elements.
///
/// A window's hash is a Horner-scheme polynomial over its element codes,
/// evaluated under both (base, modulus) pairs. Sliding the window forward
/// subtracts the outgoing element's weighted contribution and folds in the
/// incoming one, so a step costs O(1) instead of O(window).
#[derive(Debug, Clone, Copy)]
pub(crate) struct WindowStrategy {
    /// `base^(window_len - 1) mod m` per pair: the weight the outgoing
    /// (leftmost) element carries in the current window's polynomial.
    drop_factors: [u64; NUM_COMPONENTS],
}

impl WindowStrategy {
    pub(crate) fn new(window_len: usize) -> Self {
        debug_assert!(
            window_len > 1,
            "window length is {window_len} but the incremental strategy needs at least 2"
        );

        let mut drop_factors = [1u64; NUM_COMPONENTS];
        for (k, factor) in drop_factors.iter_mut().enumerate() {
            for _ in 1..window_len {
                *factor = *factor * BASES[k] % MODULI[k];
            }
        }

        Self { drop_factors }
    }

    /// The ground-truth hash of `source[offset..offset + length]`: plain
    /// Horner accumulation, independently under both pairs.
    pub(crate) fn compute<S>(&self, source: &S, offset: usize, length: usize) -> Fingerprint
    where
        S: IndexedSequence + ?Sized,
        S::Item: ElementHash,
    {
        let mut h = [0u64; NUM_COMPONENTS];
        for i in offset..offset + length {
            let code = source.get(i).hash_code();
            for k in 0..NUM_COMPONENTS {
                h[k] = (h[k] * BASES[k] + reduce(code, MODULI[k])) % MODULI[k];
            }
        }

        Fingerprint::new(h[0] as i64, h[1] as i64)
    }

    /// Slides the window at `old_offset` one step forward given its hash:
    /// removes `source[old_offset]`, folds in `source[old_offset + window_len]`.
    /// Requires `old_offset + window_len < source.len()`.
    pub(crate) fn roll<S>(
        &self,
        source: &S,
        previous: Fingerprint,
        old_offset: usize,
        window_len: usize,
    ) -> Fingerprint
    where
        S: IndexedSequence + ?Sized,
        S::Item: ElementHash,
    {
        let outgoing = source.get(old_offset).hash_code();
        let incoming = source.get(old_offset + window_len).hash_code();
        let previous = [previous.h1() as u64, previous.h2() as u64];

        let mut h = [0u64; NUM_COMPONENTS];
        for k in 0..NUM_COMPONENTS {
            let m = MODULI[k];
            let dropped = self.drop_factors[k] * reduce(outgoing, m) % m;
            let without_outgoing = (previous[k] + m - dropped) % m;
            h[k] = (without_outgoing * BASES[k] + reduce(incoming, m)) % m;
        }

        Fingerprint::new(h[0] as i64, h[1] as i64)
    }
}

/// Canonicalizes an element's hash code into `[0, m)`.
#[inline]
fn reduce(code: i64, modulus: u64) -> u64 {
    code.rem_euclid(modulus as i64) as u64
}
