//! Fixed-capacity sample history for recognizers.
//!
//! Recognizers only ever look at a bounded window of recent samples, so the
//! history is a ring buffer: pushing into a full buffer overwrites the oldest
//! entry in O(1) and never allocates.

/// Ring buffer holding at most `N` samples, oldest first.
///
/// # Usage
/// ```
/// use tactus_foundation::History;
///
/// let mut history: History<u32, 3> = History::new();
/// for value in 1..=5 {
///     history.push(value);
/// }
/// assert_eq!(history.iter().collect::<Vec<_>>(), vec![3, 4, 5]);
/// ```
#[derive(Clone, Debug)]
pub struct History<T: Copy, const N: usize> {
    samples: [Option<T>; N],
    /// Slot holding the oldest sample.
    head: usize,
    len: usize,
}

impl<T: Copy, const N: usize> Default for History<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Copy, const N: usize> History<T, N> {
    pub fn new() -> Self {
        Self {
            samples: [None; N],
            head: 0,
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == N
    }

    /// Appends `sample`, evicting the oldest one when the buffer is full.
    pub fn push(&mut self, sample: T) {
        if N == 0 {
            return;
        }
        if self.len < N {
            self.samples[(self.head + self.len) % N] = Some(sample);
            self.len += 1;
        } else {
            self.samples[self.head] = Some(sample);
            self.head = (self.head + 1) % N;
        }
    }

    /// Sample at `index`, counting from the oldest.
    pub fn get(&self, index: usize) -> Option<T> {
        if index >= self.len {
            return None;
        }
        self.samples[(self.head + index) % N]
    }

    pub fn oldest(&self) -> Option<T> {
        self.get(0)
    }

    pub fn newest(&self) -> Option<T> {
        self.len.checked_sub(1).and_then(|last| self.get(last))
    }

    /// Iterates from the oldest sample to the newest.
    pub fn iter(&self) -> impl Iterator<Item = T> + '_ {
        (0..self.len).filter_map(move |index| self.get(index))
    }

    /// Iterates over consecutive `(older, newer)` pairs.
    pub fn pairs(&self) -> impl Iterator<Item = (T, T)> + '_ {
        (1..self.len).filter_map(move |index| Some((self.get(index - 1)?, self.get(index)?)))
    }

    pub fn clear(&mut self) {
        self.samples = [None; N];
        self.head = 0;
        self.len = 0;
    }
}
