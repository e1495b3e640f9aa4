//! Generators: infinite sequences described by a start value and a step.
//!
//! [`generate`] is the general form. [`gen`], [`gen_until`] and [`gen_step`]
//! cover the common numeric cases; the bounded ones are a generator wrapped
//! in [`TakeWhile`].

use std::ops::AddAssign;

use num_traits::One;

use crate::{compose::TakeWhile, Restart, Sequence};

/// Yields a start value, then repeatedly applies a step function to it.
///
/// The value lives in a single slot that the step function updates in place.
pub struct Generator<T, F> {
    start: T,
    current: Option<T>,
    step: F,
}

/// Create a generator from a start value and an in-place step function.
///
/// The first pull yields `start` unmodified; every later pull applies `step`
/// and yields the result. Never ends on its own.
///
/// ```rust
/// use lazy_seq::prelude::*;
///
/// let powers: Vec<u32> = generate(1, |n: &mut u32| *n *= 2).take(5).collect();
/// assert_eq!(powers, vec![1, 2, 4, 8, 16]);
/// ```
pub fn generate<T, F>(start: T, step: F) -> Generator<T, F>
where
    T: Clone,
    F: FnMut(&mut T),
{
    Generator {
        start,
        current: None,
        step,
    }
}

impl<T, F> Sequence for Generator<T, F>
where
    T: Clone,
    F: FnMut(&mut T),
{
    type Item = T;

    fn advance(&mut self) {
        match &mut self.current {
            Some(value) => (self.step)(value),
            None => self.current = Some(self.start.clone()),
        }
    }

    fn get(&self) -> Option<&T> {
        self.current.as_ref()
    }
}

impl<T, F> Restart for Generator<T, F>
where
    T: Clone,
    F: FnMut(&mut T) + Clone,
{
    fn restart(&self) -> Self {
        generate(self.start.clone(), self.step.clone())
    }
}

fn increment<T: One + AddAssign>(n: &mut T) {
    *n += T::one();
}

/// Count up by one from `start`, forever.
///
/// ```rust
/// use lazy_seq::prelude::*;
///
/// let mut naturals = gen(0u64);
/// assert_eq!(naturals.nth(10), Some(&10));
/// ```
pub fn gen<T>(start: T) -> Generator<T, fn(&mut T)>
where
    T: Clone + One + AddAssign,
{
    generate(start, increment::<T> as fn(&mut T))
}

/// Count up by one from `start` while the value stays below `end`.
///
/// ```rust
/// use lazy_seq::prelude::*;
///
/// assert_eq!(gen_until(1, 5).collect::<Vec<_>>(), vec![1, 2, 3, 4]);
/// ```
pub fn gen_until<T>(
    start: T,
    end: T,
) -> TakeWhile<Generator<T, fn(&mut T)>, impl FnMut(&T) -> bool + Clone>
where
    T: Clone + One + AddAssign + PartialOrd,
{
    gen(start).take_while(move |n: &T| *n < end)
}

/// Add `step` to `start` repeatedly while the value stays below `end`.
///
/// ```rust
/// use lazy_seq::prelude::*;
///
/// assert_eq!(gen_step(0, 3, 10).collect::<Vec<_>>(), vec![0, 3, 6, 9]);
/// ```
pub fn gen_step<T>(
    start: T,
    step: T,
    end: T,
) -> TakeWhile<Generator<T, impl FnMut(&mut T) + Clone>, impl FnMut(&T) -> bool + Clone>
where
    T: Clone + AddAssign + PartialOrd,
{
    generate(start, move |n: &mut T| *n += step.clone()).take_while(move |n: &T| *n < end)
}
