use std::{fmt, ops::Deref};

/// The most real roots a supported polynomial can have.
pub const MAX_ROOTS: usize = 4;

/// The real roots of a polynomial, ascending and deduplicated.
///
/// Stored inline with a fixed capacity, so solving never allocates.
#[derive(Clone, Copy, PartialEq)]
pub struct Roots {
    values: [f64; MAX_ROOTS],
    len: usize,
}

impl Roots {
    /// Creates an empty root set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            values: [0.0; MAX_ROOTS],
            len: 0,
        }
    }

    /// Returns the number of roots.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if there are no real roots.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the roots as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.values[..self.len]
    }

    /// Keeps only the roots for which `keep` returns true.
    #[must_use]
    pub fn filter(self, keep: impl Fn(f64) -> bool) -> Self {
        let mut filtered = Self::new();
        for root in self.as_slice().iter().copied().filter(|&root| keep(root)) {
            filtered.push(root);
        }
        filtered
    }

    /// Appends a root; non-finite values and overflow are dropped.
    pub(super) fn push(&mut self, root: f64) {
        if !root.is_finite() {
            log::trace!("discarding non-finite root {root}");
            return;
        }
        if self.len < MAX_ROOTS {
            self.values[self.len] = root;
            self.len += 1;
        }
    }

    /// Appends every root of `other`.
    pub(super) fn extend(&mut self, other: Roots) {
        for &root in other.as_slice() {
            self.push(root);
        }
    }

    /// Applies `f` to every root in place.
    pub(super) fn for_each_mut(&mut self, f: impl Fn(f64) -> f64) {
        for root in &mut self.values[..self.len] {
            *root = f(*root);
        }
    }

    /// Sorts ascending and merges neighbors closer than `dedup_tol`, measured
    /// relative to the larger of one and the root's magnitude.
    pub(super) fn sort_and_dedup(&mut self, dedup_tol: f64) {
        self.values[..self.len].sort_unstable_by(f64::total_cmp);

        let mut kept = 0;
        for i in 0..self.len {
            let root = self.values[i];
            if kept > 0 {
                let previous = self.values[kept - 1];
                if (root - previous).abs() <= dedup_tol * previous.abs().max(1.0) {
                    continue;
                }
            }
            self.values[kept] = root;
            kept += 1;
        }
        self.len = kept;
    }
}

impl Default for Roots {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Roots {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl Deref for Roots {
    type Target = [f64];

    fn deref(&self) -> &[f64] {
        self.as_slice()
    }
}

impl IntoIterator for Roots {
    type Item = f64;
    type IntoIter = IntoIter;

    fn into_iter(self) -> IntoIter {
        IntoIter {
            roots: self,
            next: 0,
        }
    }
}

impl<'a> IntoIterator for &'a Roots {
    type Item = &'a f64;
    type IntoIter = std::slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

/// An owning iterator over [`Roots`], ascending.
#[derive(Debug, Clone)]
pub struct IntoIter {
    roots: Roots,
    next: usize,
}

impl Iterator for IntoIter {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        let root = self.roots.as_slice().get(self.next).copied()?;
        self.next += 1;
        Some(root)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.roots.len() - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for IntoIter {}
