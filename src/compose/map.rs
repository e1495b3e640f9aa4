//! Transforming and observing items.
//!
//! This module provides [`Map`], which stores a transformed copy of each item
//! in its own slot, and [`Inspect`], which hands items through untouched.

use crate::{Restart, Sequence};

/// Transforms each upstream item.
///
/// The result is kept in a single slot owned by this node and overwritten on
/// every pull. The item type may differ from upstream's.
pub struct Map<S, F, U> {
    upstream: S,
    f: F,
    slot: Option<U>,
}

/// Create a sequence that applies `f` to each item of `upstream`.
///
/// # Examples
///
/// ```
/// use lazy_seq::prelude::*;
///
/// let data = [1, 2, 3];
/// let mut seq = from_slice(&data).map(|x| 2 * x);
/// assert_eq!(seq.next(), Some(&2));
/// assert_eq!(seq.next(), Some(&4));
/// assert_eq!(seq.next(), Some(&6));
/// assert_eq!(seq.next(), None);
/// ```
pub fn map<S, F, U>(upstream: S, f: F) -> Map<S, F, U> {
    Map {
        upstream,
        f,
        slot: None,
    }
}

impl<S, F, U> Sequence for Map<S, F, U>
where
    S: Sequence,
    F: FnMut(&S::Item) -> U,
{
    type Item = U;

    fn advance(&mut self) {
        self.upstream.advance();
        self.slot = self.upstream.get().map(&mut self.f);
    }

    fn get(&self) -> Option<&U> {
        self.slot.as_ref()
    }
}

impl<S, F, U> Restart for Map<S, F, U>
where
    S: Restart,
    F: FnMut(&S::Item) -> U + Clone,
{
    fn restart(&self) -> Self {
        map(self.upstream.restart(), self.f.clone())
    }
}

/// Calls a function on each item, then passes it through unchanged.
///
/// Useful for logging or counting inside a pipeline without changing what it
/// produces.
pub struct Inspect<S, F> {
    upstream: S,
    f: F,
    started: bool,
}

/// Create a sequence that calls `f` on each item of `upstream` as it passes.
///
/// # Examples
///
/// ```
/// use lazy_seq::prelude::*;
///
/// let mut seen = Vec::new();
/// let data = [1, 2, 3];
/// let total = from_slice(&data).inspect(|x| seen.push(*x)).sum();
/// assert_eq!(total, 6);
/// assert_eq!(seen, vec![1, 2, 3]);
/// ```
pub fn inspect<S, F>(upstream: S, f: F) -> Inspect<S, F> {
    Inspect {
        upstream,
        f,
        started: false,
    }
}

impl<S, F> Sequence for Inspect<S, F>
where
    S: Sequence,
    F: FnMut(&S::Item),
{
    type Item = S::Item;

    fn advance(&mut self) {
        self.started = true;
        self.upstream.advance();
        if let Some(item) = self.upstream.get() {
            (self.f)(item);
        }
    }

    fn get(&self) -> Option<&S::Item> {
        if self.started {
            self.upstream.get()
        } else {
            None
        }
    }
}

impl<S, F> Restart for Inspect<S, F>
where
    S: Restart,
    F: FnMut(&S::Item) + Clone,
{
    fn restart(&self) -> Self {
        inspect(self.upstream.restart(), self.f.clone())
    }
}
