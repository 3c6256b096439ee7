use super::value::ValueStrategy;
use super::window::WindowStrategy;
use super::Fingerprint;
use crate::error::{Error, Result};
use crate::traits::{ElementHash, IndexedSequence};

/// Numeric strategy behind a cursor, selected once by the factory.
#[derive(Debug, Clone, Copy)]
enum Strategy {
    /// Single-element windows, recomputed from scratch each step.
    Value(ValueStrategy),
    /// Windows of length at least two, rolled incrementally.
    Window(WindowStrategy),
}

/// A cursor producing the [`Fingerprint`] of a fixed-width window as it
/// slides forward over a borrowed sequence.
///
/// For windows of length at least two each slide costs O(1): the previous
/// window's hash is reused, the outgoing element removed and the incoming
/// one folded in. A freshly constructed cursor is *unstarted*: it sits one
/// step before its initial offset and the first successful advance yields
/// the window starting there.
///
/// The cursor is a single-writer structure. The advance operations mutate
/// [`offset`](RollingHash::offset) and [`window_hash`](RollingHash::window_hash)
/// in place without internal locking; callers sharing one cursor across
/// threads must serialize access themselves. The borrowed source must not
/// be mutated while the cursor is in use.
///
/// # Examples
///
/// ```
/// use rolling_fingerprint::rolling_hash::RollingHash;
///
/// let text = b"abracadabra";
/// let mut rh = RollingHash::new(&text[..], 0, 4)?;
///
/// // The fingerprint of text[0..4] = "abra"
/// let first = rh.try_next().unwrap();
///
/// // Jump to the last window, text[7..11] = "abra" again
/// let last = rh.try_advance(7).unwrap();
///
/// assert_eq!(first, last);
/// assert_eq!(Some(7), rh.offset());
/// # Ok::<(), rolling_fingerprint::Error>(())
/// ```
pub struct RollingHash<'a, S: ?Sized> {
    source: &'a S,
    window_len: usize,
    initial_offset: usize,
    /// Left edge of the last hashed window; `None` while unstarted.
    offset: Option<usize>,
    /// Hash of the last hashed window; `None` while unstarted.
    window_hash: Option<Fingerprint>,
    strategy: Strategy,
}

impl<'a, S> RollingHash<'a, S>
where
    S: IndexedSequence + ?Sized,
    S::Item: ElementHash,
{
    /// Creates a cursor over `source` whose first advance yields the window
    /// `[offset, offset + window_len)`.
    ///
    /// Windows of length one use a degenerate strategy whose fingerprints
    /// carry the element's raw hash code and a zero second component; longer
    /// windows use the incremental double polynomial strategy.
    ///
    /// # Arguments
    ///
    /// * `source` - The sequence to fingerprint windows of.
    /// * `offset` - The left edge of the first window.
    /// * `window_len` - The width of the sliding window.
    ///
    /// # Errors
    ///
    /// [`Error::EmptySource`] if `source` has no elements,
    /// [`Error::OffsetOutOfBounds`] if `offset` lies outside it,
    /// [`Error::ZeroWindowLength`] for a zero-width window and
    /// [`Error::WindowOutOfBounds`] if the first window sticks out past the
    /// end.
    pub fn new(source: &'a S, offset: usize, window_len: usize) -> Result<Self> {
        let len = source.len();
        if len == 0 {
            return Err(Error::EmptySource);
        }
        if offset >= len {
            return Err(Error::OffsetOutOfBounds { offset, len });
        }
        if window_len == 0 {
            return Err(Error::ZeroWindowLength);
        }
        let fits = offset
            .checked_add(window_len)
            .map_or(false, |end| end <= len);
        if !fits {
            return Err(Error::WindowOutOfBounds {
                offset,
                window_len,
                len,
            });
        }

        let strategy = if window_len == 1 {
            Strategy::Value(ValueStrategy)
        } else {
            Strategy::Window(WindowStrategy::new(window_len))
        };

        Ok(Self {
            source,
            window_len,
            initial_offset: offset,
            offset: None,
            window_hash: None,
            strategy,
        })
    }

    /// Creates a cursor whose first advance yields the window at the start
    /// of the sequence. Shorthand for [`RollingHash::new`] with offset 0.
    #[inline]
    pub fn from_start(source: &'a S, window_len: usize) -> Result<Self> {
        Self::new(source, 0, window_len)
    }

    /// Fingerprints the entire sequence as a single window.
    ///
    /// # Errors
    ///
    /// [`Error::WholeSequenceUnavailable`] - only an empty source can
    /// trigger this.
    ///
    /// # Examples
    ///
    /// ```
    /// use rolling_fingerprint::rolling_hash::RollingHash;
    ///
    /// let text = b"abracadabra";
    /// let whole = RollingHash::hash_whole(&text[..])?;
    /// assert!(!whole.is_default());
    /// # Ok::<(), rolling_fingerprint::Error>(())
    /// ```
    pub fn hash_whole(source: &'a S) -> Result<Fingerprint> {
        let cursor = Self::new(source, 0, source.len())
            .map_err(|_| Error::WholeSequenceUnavailable)?;
        Ok(cursor.compute_hash(0, cursor.window_len))
    }

    /// The borrowed source sequence.
    #[inline]
    pub fn source(&self) -> &'a S {
        self.source
    }

    /// The immutable window width.
    #[inline]
    pub fn window_len(&self) -> usize {
        self.window_len
    }

    /// Left edge of the last successfully hashed window, or `None` if no
    /// advance has succeeded yet.
    #[inline]
    pub fn offset(&self) -> Option<usize> {
        self.offset
    }

    /// Hash of the last successfully hashed window, or `None` if no advance
    /// has succeeded yet.
    #[inline]
    pub fn window_hash(&self) -> Option<Fingerprint> {
        self.window_hash
    }

    /// The sub-range covered by the last hashed window, or `None` if no
    /// advance has succeeded yet.
    #[inline]
    pub fn window(&self) -> Option<&'a S> {
        self.offset
            .map(|offset| self.source.slice(offset..offset + self.window_len))
    }

    /// Left edge of the window the next advance will hash.
    #[inline]
    fn next_offset(&self) -> usize {
        self.offset.map_or(self.initial_offset, |offset| offset + 1)
    }

    /// The largest offset a window may start at.
    #[inline]
    fn last_start(&self) -> usize {
        self.source.len() - self.window_len
    }

    /// Slides the window one position forward and returns its fingerprint.
    ///
    /// Returns `None` without touching the cursor when the next window would
    /// run past the end of the source. That is the normal end-of-stream
    /// signal, not an error, and it is permanent: once exhausted, every
    /// further call returns `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rolling_fingerprint::rolling_hash::RollingHash;
    ///
    /// let values = [4i64, 8, 15, 16, 23, 42];
    /// let mut rh = RollingHash::new(&values[..], 0, 5)?;
    ///
    /// assert!(rh.try_next().is_some()); // [4, 8, 15, 16, 23]
    /// assert!(rh.try_next().is_some()); // [8, 15, 16, 23, 42]
    /// assert!(rh.try_next().is_none()); // nothing left
    /// assert_eq!(Some(1), rh.offset());
    /// # Ok::<(), rolling_fingerprint::Error>(())
    /// ```
    pub fn try_next(&mut self) -> Option<Fingerprint> {
        let next = self.next_offset();
        if next > self.last_start() {
            return None;
        }

        let hash = match (&self.strategy, self.offset, self.window_hash) {
            (Strategy::Window(window), Some(old_offset), Some(previous)) => {
                window.roll(self.source, previous, old_offset, self.window_len)
            }
            (Strategy::Window(window), _, _) => {
                window.compute(self.source, next, self.window_len)
            }
            (Strategy::Value(value), ..) => value.compute(self.source, next),
        };

        self.offset = Some(next);
        self.window_hash = Some(hash);
        Some(hash)
    }

    /// Advances by exactly `count` positions and returns the final window's
    /// fingerprint; intermediate windows are not observable.
    ///
    /// The destination is bound-checked up front, so the operation is atomic
    /// for both strategies: if the final window would run past the end of
    /// the source, `None` is returned and the cursor is left untouched.
    /// `count == 0` reports the current [`window_hash`](RollingHash::window_hash)
    /// without moving.
    pub fn try_advance(&mut self, count: usize) -> Option<Fingerprint> {
        if count == 0 {
            return self.window_hash;
        }
        let destination = self.next_offset().checked_add(count - 1)?;
        if destination > self.last_start() {
            return None;
        }

        match &self.strategy {
            Strategy::Value(value) => {
                let hash = value.compute(self.source, destination);
                self.offset = Some(destination);
                self.window_hash = Some(hash);
                Some(hash)
            }
            Strategy::Window(_) => {
                // Every intermediate window is in bounds once the final one
                // is, so no inner step can fail.
                let mut hash = None;
                for _ in 0..count {
                    hash = self.try_next();
                }
                hash
            }
        }
    }

    /// The from-scratch hash of `source[offset..offset + length]` under this
    /// cursor's strategy: the definition of "the hash of a window" and the
    /// correctness oracle for the incremental updates.
    ///
    /// Does not move the cursor. The single-element strategy ignores
    /// `length` and fingerprints the element at `offset` alone.
    ///
    /// # Panics
    ///
    /// Panics if the requested window lies outside the source.
    pub fn compute_hash(&self, offset: usize, length: usize) -> Fingerprint {
        match &self.strategy {
            Strategy::Window(window) => window.compute(self.source, offset, length),
            Strategy::Value(value) => value.compute(self.source, offset),
        }
    }

    /// The number of windows still ahead of the cursor.
    #[inline]
    fn remaining(&self) -> usize {
        (self.last_start() + 1).saturating_sub(self.next_offset())
    }
}

impl<S: ?Sized> Clone for RollingHash<'_, S> {
    fn clone(&self) -> Self {
        Self {
            source: self.source,
            window_len: self.window_len,
            initial_offset: self.initial_offset,
            offset: self.offset,
            window_hash: self.window_hash,
            strategy: self.strategy,
        }
    }
}

impl<'a, S> Iterator for RollingHash<'a, S>
where
    S: IndexedSequence + ?Sized,
    S::Item: ElementHash,
{
    type Item = Fingerprint;

    fn next(&mut self) -> Option<Self::Item> {
        self.try_next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl<'a, S> ExactSizeIterator for RollingHash<'a, S>
where
    S: IndexedSequence + ?Sized,
    S::Item: ElementHash,
{
    fn len(&self) -> usize {
        self.remaining()
    }
}
