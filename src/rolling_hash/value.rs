use super::Fingerprint;
use crate::traits::{ElementHash, IndexedSequence};

/// The degenerate strategy for single-element windows.
///
/// There is nothing to roll when the window covers one element, so every
/// step reads the element and fingerprints it from scratch. The second
/// component stays zero; single-element fingerprints are deliberately
/// weaker than windowed ones.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ValueStrategy;

impl ValueStrategy {
    /// The fingerprint of the single element at `offset`: its raw hash code
    /// paired with a zero second component.
    pub(crate) fn compute<S>(&self, source: &S, offset: usize) -> Fingerprint
    where
        S: IndexedSequence + ?Sized,
        S::Item: ElementHash,
    {
        Fingerprint::new(source.get(offset).hash_code(), 0)
    }
}

#[cfg(test)]
mod test {
    use super::ValueStrategy;
    use crate::rolling_hash::Fingerprint;

    #[test]
    fn compute_test() {
        let source = [42i64, -9, 0];

        assert_eq!(
            Fingerprint::new(42, 0),
            ValueStrategy.compute(&source[..], 0)
        );
        assert_eq!(
            Fingerprint::new(-9, 0),
            ValueStrategy.compute(&source[..], 1),
            "raw negative codes pass through unreduced"
        );
        assert!(ValueStrategy.compute(&source[..], 2).is_default());
    }
}
