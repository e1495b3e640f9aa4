//! Core trait for lazy, pull-driven sequences.
//!
//! This module defines [`Sequence`], the single capability every source,
//! adapter and consumer in this crate is written against, and [`Restart`],
//! the optional capability that lets [`Cycle`](crate::compose::Cycle)
//! rebuild an upstream node from scratch.
//!
//! # The Sequence Trait
//!
//! A [`Sequence`] is driven in two steps:
//! - [`advance`](Sequence::advance) moves to the next item (or to the end)
//! - [`get`](Sequence::get) returns the item it landed on, or `None` for end
//!
//! [`next`](Sequence::next) does both. The returned reference borrows the
//! node, so it is only valid until the next pull.
//!
//! # Examples
//!
//! ```rust
//! use lazy_seq::prelude::*;
//!
//! let data = [1, 2, 3];
//! let mut seq = from_slice(&data).map(|x| x * 10);
//! assert_eq!(seq.next(), Some(&10));
//! assert_eq!(seq.next(), Some(&20));
//! assert_eq!(seq.next(), Some(&30));
//! assert_eq!(seq.next(), None);
//! ```

use std::cmp::Ordering;

use either::Either;
use num_traits::{One, Zero};

use crate::{
    build::{gen, Generator},
    compose::{
        chain, cycle, filter, filter_map, flat_map, fuse, inspect, map, scan, skip, skip_while,
        take, take_while, zip, Chain, Cycle, Filter, FilterMap, FlatMap, Fuse, Inspect, Map, Scan,
        Skip, SkipWhile, Take, TakeWhile, Zip,
    },
    consume,
    iter::Cloned,
};

/// Counter paired with each item by [`Sequence::enumerate`].
pub type Enumerate<S> = Zip<Generator<usize, fn(&mut usize)>, S>;

/// A lazily evaluated sequence of items.
///
/// Nothing is computed until a consumer pulls. Each pull may overwrite the
/// node's internal slot, which is why items are handed out as borrows of the
/// node rather than owned values.
///
/// ```rust
/// use lazy_seq::prelude::*;
///
/// let mut evens = gen(0).filter(|n| n % 2 == 0);
/// assert_eq!(evens.next(), Some(&0));
/// assert_eq!(evens.next(), Some(&2));
/// assert_eq!(evens.get(), Some(&2)); // `get` does not move
/// ```
pub trait Sequence {
    /// Type of the items produced.
    type Item;

    /// Move to the next item, or to the end state.
    fn advance(&mut self);

    /// The item the last [`advance`](Sequence::advance) landed on.
    ///
    /// Returns `None` before the first `advance` and once the sequence has
    /// ended.
    fn get(&self) -> Option<&Self::Item>;

    /// Advance, then return the current item.
    fn next(&mut self) -> Option<&Self::Item> {
        self.advance();
        Self::get(self)
    }

    /// Borrow the sequence so an adapter can be applied without consuming it.
    fn by_ref(&mut self) -> &mut Self
    where
        Self: Sized,
    {
        self
    }

    /// Erase the concrete node type behind a trait object.
    fn boxed<'a>(self) -> Box<dyn Sequence<Item = Self::Item> + 'a>
    where
        Self: Sized + 'a,
    {
        Box::new(self)
    }

    /// Bridge into a std [`Iterator`] that clones each item.
    fn cloned(self) -> Cloned<Self>
    where
        Self: Sized,
        Self::Item: Clone,
    {
        Cloned::new(self)
    }

    // Adapters

    /// Emit at most `n` items. Zero or negative `n` emits nothing.
    fn take(self, n: isize) -> Take<Self>
    where
        Self: Sized,
    {
        take(self, n)
    }

    /// Emit items while `predicate` holds, then end for good.
    fn take_while<P>(self, predicate: P) -> TakeWhile<Self, P>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        take_while(self, predicate)
    }

    /// Discard the first `n` items. Zero or negative `n` discards nothing.
    fn skip(self, n: isize) -> Skip<Self>
    where
        Self: Sized,
    {
        skip(self, n)
    }

    /// Discard items while `predicate` holds, then emit everything.
    fn skip_while<P>(self, predicate: P) -> SkipWhile<Self, P>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        skip_while(self, predicate)
    }

    /// Emit only the items matching `predicate`.
    fn filter<P>(self, predicate: P) -> Filter<Self, P>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        filter(self, predicate)
    }

    /// Transform each item.
    fn map<U, F>(self, f: F) -> Map<Self, F, U>
    where
        Self: Sized,
        F: FnMut(&Self::Item) -> U,
    {
        map(self, f)
    }

    /// Call `f` on each item as it passes through.
    fn inspect<F>(self, f: F) -> Inspect<Self, F>
    where
        Self: Sized,
        F: FnMut(&Self::Item),
    {
        inspect(self, f)
    }

    /// Transform each item, dropping those for which `f` returns `None`.
    fn filter_map<U, F>(self, f: F) -> FilterMap<Self, F, U>
    where
        Self: Sized,
        F: FnMut(&Self::Item) -> Option<U>,
    {
        filter_map(self, f)
    }

    /// Replace each item with the items of the sequence `f` builds from it.
    fn flat_map<U, F>(self, f: F) -> FlatMap<Self, U, F>
    where
        Self: Sized,
        U: Sequence,
        F: FnMut(&Self::Item) -> U,
    {
        flat_map(self, f)
    }

    /// Emit a running accumulator instead of the raw items.
    fn scan<B, F>(self, init: B, f: F) -> Scan<Self, B, F>
    where
        Self: Sized,
        F: FnMut(&B, &Self::Item) -> B,
    {
        scan(self, init, f)
    }

    /// Pair items with another sequence's, ending with the shorter one.
    fn zip<U>(self, other: U) -> Zip<Self, U>
    where
        Self: Sized,
        U: Sequence,
    {
        zip(self, other)
    }

    /// Emit all items of `self`, then all items of `other`.
    fn chain<U>(self, other: U) -> Chain<Self, U>
    where
        Self: Sized,
        U: Sequence<Item = Self::Item>,
    {
        chain(self, other)
    }

    /// Repeat the sequence forever by restarting it whenever it ends.
    fn cycle(self) -> Cycle<Self>
    where
        Self: Restart,
    {
        cycle(self)
    }

    /// Keep signaling end once the sequence has ended.
    fn fuse(self) -> Fuse<Self>
    where
        Self: Sized,
    {
        fuse(self)
    }

    /// Pair each item with its zero-based index.
    fn enumerate(self) -> Enumerate<Self>
    where
        Self: Sized,
    {
        zip(gen(0usize), self)
    }

    // Consumers

    /// Drain the sequence, counting items.
    fn count(self) -> usize
    where
        Self: Sized,
    {
        consume::count(self)
    }

    /// Drain the sequence, returning a copy of the final item.
    fn last(self) -> Option<Self::Item>
    where
        Self: Sized,
        Self::Item: Clone,
    {
        consume::last(self)
    }

    /// Skip `n` items and return the one after. Does not rewind.
    fn nth(&mut self, n: usize) -> Option<&Self::Item>
    where
        Self: Sized,
    {
        consume::nth(self, n)
    }

    /// Copy every item into a container.
    fn collect<C>(self) -> C
    where
        Self: Sized,
        Self::Item: Clone,
        C: FromIterator<Self::Item>,
    {
        consume::collect(self)
    }

    /// Split items into `(matched, unmatched)`, keeping encounter order.
    fn partition<C, P>(self, predicate: P) -> (C, C)
    where
        Self: Sized,
        Self::Item: Clone,
        C: Default + Extend<Self::Item>,
        P: FnMut(&Self::Item) -> bool,
    {
        consume::partition(self, predicate)
    }

    /// Strict left fold over the items.
    fn fold<B, F>(self, init: B, f: F) -> B
    where
        Self: Sized,
        F: FnMut(B, &Self::Item) -> B,
    {
        consume::fold(self, init, f)
    }

    /// Add up the items, starting from zero.
    fn sum(self) -> Self::Item
    where
        Self: Sized,
        Self::Item: Zero + Clone,
    {
        consume::sum(self)
    }

    /// Multiply the items, starting from one.
    fn product(self) -> Self::Item
    where
        Self: Sized,
        Self::Item: One + Clone,
    {
        consume::product(self)
    }

    /// `true` if every item matches. Stops at the first that does not.
    fn all<P>(&mut self, predicate: P) -> bool
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        consume::all(self, predicate)
    }

    /// `true` if some item matches. Stops at the first that does.
    fn any<P>(&mut self, predicate: P) -> bool
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        consume::any(self, predicate)
    }

    /// The first item matching `predicate`.
    fn find<P>(&mut self, predicate: P) -> Option<&Self::Item>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        consume::find(self, predicate)
    }

    /// Index of the first item matching `predicate`.
    fn position<P>(&mut self, predicate: P) -> Option<usize>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        consume::position(self, predicate)
    }

    /// Largest item; the first one seen wins ties.
    fn max(self) -> Option<Self::Item>
    where
        Self: Sized,
        Self::Item: Ord + Clone,
    {
        consume::max(self)
    }

    /// Smallest item; the first one seen wins ties.
    fn min(self) -> Option<Self::Item>
    where
        Self: Sized,
        Self::Item: Ord + Clone,
    {
        consume::min(self)
    }

    /// Largest item according to `compare`; the first one seen wins ties.
    fn max_by<F>(self, compare: F) -> Option<Self::Item>
    where
        Self: Sized,
        Self::Item: Clone,
        F: FnMut(&Self::Item, &Self::Item) -> Ordering,
    {
        consume::max_by(self, compare)
    }

    /// Smallest item according to `compare`; the first one seen wins ties.
    fn min_by<F>(self, compare: F) -> Option<Self::Item>
    where
        Self: Sized,
        Self::Item: Clone,
        F: FnMut(&Self::Item, &Self::Item) -> Ordering,
    {
        consume::min_by(self, compare)
    }

    /// Item with the largest key; the first one seen wins ties.
    fn max_by_key<K, F>(self, key: F) -> Option<Self::Item>
    where
        Self: Sized,
        Self::Item: Clone,
        K: Ord,
        F: FnMut(&Self::Item) -> K,
    {
        consume::max_by_key(self, key)
    }

    /// Item with the smallest key; the first one seen wins ties.
    fn min_by_key<K, F>(self, key: F) -> Option<Self::Item>
    where
        Self: Sized,
        Self::Item: Clone,
        K: Ord,
        F: FnMut(&Self::Item) -> K,
    {
        consume::min_by_key(self, key)
    }

    /// Call `f` on every item.
    fn for_each<F>(self, f: F)
    where
        Self: Sized,
        F: FnMut(&Self::Item),
    {
        consume::for_each(self, f)
    }

    /// Lockstep comparison: same length and pairwise equal items.
    fn eq<U>(self, other: U) -> bool
    where
        Self: Sized,
        U: Sequence,
        Self::Item: PartialEq<U::Item>,
    {
        consume::eq(self, other)
    }

    /// Negation of [`eq`](Sequence::eq).
    fn ne<U>(self, other: U) -> bool
    where
        Self: Sized,
        U: Sequence,
        Self::Item: PartialEq<U::Item>,
    {
        consume::ne(self, other)
    }
}

/// Sequences that can produce a fresh copy of themselves.
///
/// The copy starts from the node's construction-time state and shares no
/// mutable state with the original, so both can be pulled independently.
///
/// ```rust
/// use lazy_seq::prelude::*;
///
/// let data = [1, 2, 3];
/// let mut seq = from_slice(&data).map(|x| x + 1);
/// seq.advance();
/// seq.advance();
///
/// let mut fresh = seq.restart();
/// assert_eq!(fresh.next(), Some(&2));
/// assert_eq!(seq.next(), Some(&4));
/// ```
pub trait Restart: Sequence + Sized {
    /// Build an independent copy reset to construction-time state.
    fn restart(&self) -> Self;
}

impl<S> Sequence for &'_ mut S
where
    S: Sequence + ?Sized,
{
    type Item = S::Item;

    fn advance(&mut self) {
        (**self).advance()
    }

    fn get(&self) -> Option<&Self::Item> {
        (**self).get()
    }
}

impl<S> Sequence for Box<S>
where
    S: Sequence + ?Sized,
{
    type Item = S::Item;

    fn advance(&mut self) {
        (**self).advance()
    }

    fn get(&self) -> Option<&Self::Item> {
        (**self).get()
    }
}

impl<S: Restart> Restart for Box<S> {
    fn restart(&self) -> Self {
        Box::new((**self).restart())
    }
}

impl<L, R> Sequence for Either<L, R>
where
    L: Sequence,
    R: Sequence<Item = L::Item>,
{
    type Item = L::Item;

    fn advance(&mut self) {
        match self {
            Either::Left(l) => l.advance(),
            Either::Right(r) => r.advance(),
        }
    }

    fn get(&self) -> Option<&Self::Item> {
        match self {
            Either::Left(l) => l.get(),
            Either::Right(r) => r.get(),
        }
    }
}

impl<L, R> Restart for Either<L, R>
where
    L: Restart,
    R: Restart<Item = L::Item>,
{
    fn restart(&self) -> Self {
        match self {
            Either::Left(l) => Either::Left(l.restart()),
            Either::Right(r) => Either::Right(r.restart()),
        }
    }
}
