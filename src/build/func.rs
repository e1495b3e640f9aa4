use std::marker::PhantomData;

use crate::{Restart, Sequence};

/// A sequence that never produces anything.
pub struct Empty<T>(PhantomData<fn() -> T>);

/// Create a sequence that is always at its end.
///
/// ```rust
/// use lazy_seq::prelude::*;
///
/// let mut seq = empty::<i32>();
/// assert_eq!(seq.next(), None);
/// ```
pub fn empty<T>() -> Empty<T> {
    Empty(PhantomData)
}

impl<T> Sequence for Empty<T> {
    type Item = T;

    fn advance(&mut self) {}

    fn get(&self) -> Option<&T> {
        None
    }
}

impl<T> Restart for Empty<T> {
    fn restart(&self) -> Self {
        empty()
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Position {
    Before,
    At,
    After,
}

/// Produces a single value, then ends.
pub struct Once<T> {
    value: T,
    position: Position,
}

/// Create a sequence holding exactly one value.
///
/// ```rust
/// use lazy_seq::prelude::*;
///
/// let mut seq = once("only");
/// assert_eq!(seq.next(), Some(&"only"));
/// assert_eq!(seq.next(), None);
/// ```
pub fn once<T>(value: T) -> Once<T> {
    Once {
        value,
        position: Position::Before,
    }
}

impl<T> Sequence for Once<T> {
    type Item = T;

    fn advance(&mut self) {
        self.position = match self.position {
            Position::Before => Position::At,
            Position::At | Position::After => Position::After,
        };
    }

    fn get(&self) -> Option<&T> {
        (self.position == Position::At).then_some(&self.value)
    }
}

impl<T: Clone> Restart for Once<T> {
    fn restart(&self) -> Self {
        once(self.value.clone())
    }
}

/// Produces the same value forever.
///
/// Never ends on its own; bound it with [`take`](Sequence::take) or
/// [`zip`](Sequence::zip) it against something finite.
pub struct Repeat<T> {
    value: T,
    started: bool,
}

/// Create a sequence that yields `value` on every pull.
///
/// ```rust
/// use lazy_seq::prelude::*;
///
/// let items: Vec<_> = repeat('x').take(3).collect();
/// assert_eq!(items, vec!['x', 'x', 'x']);
/// ```
pub fn repeat<T>(value: T) -> Repeat<T> {
    Repeat {
        value,
        started: false,
    }
}

impl<T> Sequence for Repeat<T> {
    type Item = T;

    fn advance(&mut self) {
        self.started = true;
    }

    fn get(&self) -> Option<&T> {
        self.started.then_some(&self.value)
    }
}

impl<T: Clone> Restart for Repeat<T> {
    fn restart(&self) -> Self {
        repeat(self.value.clone())
    }
}

/// Produces whatever a closure returns, until it returns `None`.
pub struct FromFn<T, F> {
    f: F,
    slot: Option<T>,
}

/// Create a sequence from a closure.
///
/// The closure is only called on [`advance`](Sequence::advance); its result
/// is kept in the node's slot until the next pull.
///
/// ```rust
/// use lazy_seq::prelude::*;
///
/// let mut n = 0;
/// let countdown = from_fn(move || {
///     n += 1;
///     (n <= 3).then_some(4 - n)
/// });
/// assert_eq!(countdown.collect::<Vec<_>>(), vec![3, 2, 1]);
/// ```
pub fn from_fn<T, F>(f: F) -> FromFn<T, F>
where
    F: FnMut() -> Option<T>,
{
    FromFn { f, slot: None }
}

impl<T, F> Sequence for FromFn<T, F>
where
    F: FnMut() -> Option<T>,
{
    type Item = T;

    fn advance(&mut self) {
        self.slot = (self.f)();
    }

    fn get(&self) -> Option<&T> {
        self.slot.as_ref()
    }
}
