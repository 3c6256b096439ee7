use multimap::MultiMap;
use nohash_hasher::{BuildNoHashHasher, IntMap, IntSet, IsEnabled};

use std::fmt::{self, Debug, Display};
use std::hash::{Hash, Hasher};

mod cursor;
mod value;
mod window;

pub use cursor::RollingHash;

pub type FingerprintMap<V> = IntMap<Fingerprint, V>;
pub type FingerprintSet = IntSet<Fingerprint>;
pub type FingerprintMultiMap<V> = MultiMap<Fingerprint, V, BuildNoHashHasher<Fingerprint>>;
pub type FingerprintMultiSet = FingerprintMultiMap<()>;

/// A two-component window fingerprint.
///
/// Each component is a polynomial hash of the same window under a distinct
/// (base, modulus) pair; the pairing makes collisions between unrelated
/// windows far less likely than a single modulus would. Get instances
/// through [`RollingHash`].
///
/// The all-zero value doubles as the "no hash yet" sentinel, see
/// [`Fingerprint::is_default`].
///
/// # Examples
///
/// ```
/// use rolling_fingerprint::rolling_hash::{FingerprintSet, RollingHash};
///
/// let s = b"hashhash";
/// let mut rh = RollingHash::from_start(&s[..], 4)?;
///
/// let mut set = FingerprintSet::default();
///
/// // Insert the fingerprint for s[0..4] = "hash"
/// set.insert(rh.try_next().unwrap());
///
/// // Advance to s[4..8] = "hash"
/// let last = rh.try_advance(4).unwrap();
///
/// assert!(set.contains(&last));
/// # Ok::<(), rolling_fingerprint::Error>(())
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Fingerprint {
    h1: i64,
    h2: i64,
}

impl Fingerprint {
    /// A new fingerprint from its two components. Total; no validation.
    #[inline]
    pub const fn new(h1: i64, h2: i64) -> Self {
        Self { h1, h2 }
    }

    /// The first polynomial component.
    #[inline]
    pub const fn h1(&self) -> i64 {
        self.h1
    }

    /// The second polynomial component.
    #[inline]
    pub const fn h2(&self) -> i64 {
        self.h2
    }

    /// Whether both components are exactly zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use rolling_fingerprint::rolling_hash::Fingerprint;
    ///
    /// assert!(Fingerprint::default().is_default());
    /// assert!(!Fingerprint::new(1, 0).is_default());
    /// ```
    #[inline]
    pub const fn is_default(&self) -> bool {
        self.h1 == 0 && self.h2 == 0
    }

    /// Both components folded into one word, used as the map-key hash.
    #[inline]
    fn combined(&self) -> u64 {
        (self.h1 as u64).rotate_left(32) ^ self.h2 as u64
    }
}

impl Debug for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Fingerprint")
            .field("h1", &self.h1)
            .field("h2", &self.h2)
            .finish()
    }
}

/// Renders as `[h1:h2]` in hex, for diagnostics only.
impl Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:x}:{:x}]", self.h1, self.h2)
    }
}

impl Hash for Fingerprint {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.combined())
    }
}

impl IsEnabled for Fingerprint {}

#[cfg(test)]
mod test {
    use super::{Fingerprint, FingerprintMap, FingerprintMultiMap};

    #[test]
    fn default_test() {
        assert!(Fingerprint::default().is_default());
        assert!(Fingerprint::new(0, 0).is_default());
        assert!(!Fingerprint::new(1, 0).is_default());
        assert!(!Fingerprint::new(0, 1).is_default());
    }

    #[test]
    fn eq_test() {
        let a = Fingerprint::new(12, 34);
        let b = Fingerprint::new(12, 34);
        let c = Fingerprint::new(34, 12);

        assert_eq!(a, a, "equality not reflexive");
        assert_eq!(a, b);
        assert_eq!(b, a, "equality not symmetric");
        assert_ne!(a, c, "components must not be interchangeable");
    }

    #[test]
    fn display_test() {
        assert_eq!("[ff:a]", Fingerprint::new(255, 10).to_string());
        assert_eq!("[0:0]", Fingerprint::default().to_string());
    }

    #[test]
    fn map_key_test() {
        let mut map = FingerprintMap::default();
        map.insert(Fingerprint::new(1, 2), "first");
        map.insert(Fingerprint::new(3, 4), "second");
        map.insert(Fingerprint::new(1, 2), "first again");

        assert_eq!(2, map.len());
        assert_eq!(Some(&"first again"), map.get(&Fingerprint::new(1, 2)));
    }

    #[test]
    fn multi_map_test() {
        let mut map = FingerprintMultiMap::default();
        map.insert(Fingerprint::new(7, 7), 0usize);
        map.insert(Fingerprint::new(7, 7), 4usize);

        assert_eq!(Some(&vec![0, 4]), map.get_vec(&Fingerprint::new(7, 7)));
    }
}
