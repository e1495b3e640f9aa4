//! Iterator adapter for sequences with cloneable items.
//!
//! A [`Sequence`] lends each item for one pull only, so it cannot implement
//! [`Iterator`] directly. [`Cloned`] bridges the two by cloning every item
//! out of the node, which lets a pipeline feed `for` loops and the std
//! iterator toolbox.
//!
//! # Examples
//!
//! ```rust
//! use lazy_seq::prelude::*;
//!
//! let data = [1, 2, 3, 4];
//! let mut total = 0;
//! for n in from_slice(&data).filter(|n| *n % 2 == 0).cloned() {
//!     total += n;
//! }
//! assert_eq!(total, 6);
//! ```
//!
//! Borrowing the adapter keeps the underlying sequence around:
//! ```rust
//! use lazy_seq::prelude::*;
//!
//! let mut iter = gen(0).cloned();
//! let head: Vec<_> = iter.by_ref().take(3).collect();
//! assert_eq!(head, vec![0, 1, 2]);
//! assert_eq!(iter.into_inner().get(), Some(&2));
//! ```

use crate::Sequence;

/// Iterator adapter for a [`Sequence`].
///
/// Each call to [`Iterator::next`] pulls the sequence once and clones the
/// item it lands on.
pub struct Cloned<S> {
    seq: S,
}

impl<S> Cloned<S> {
    /// Wrap a sequence.
    pub fn new(seq: S) -> Self {
        Self { seq }
    }

    /// Get a reference to the wrapped sequence.
    pub fn get_ref(&self) -> &S {
        &self.seq
    }

    /// Unwrap the sequence, keeping its position.
    pub fn into_inner(self) -> S {
        self.seq
    }
}

impl<S> Iterator for Cloned<S>
where
    S: Sequence,
    S::Item: Clone,
{
    type Item = S::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.seq.next().cloned()
    }
}
