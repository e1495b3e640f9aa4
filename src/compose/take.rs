use crate::{Restart, Sequence};

/// Emits at most a fixed number of upstream items.
///
/// Created via [`take`] or [`Sequence::take`]. The budget is only spent on
/// items actually emitted; once it is gone the end is latched and upstream is
/// never pulled again.
pub struct Take<S> {
    upstream: S,
    count: usize,
    remaining: usize,
    started: bool,
    exhausted: bool,
}

/// Create a sequence of at most `n` items from `upstream`.
///
/// Zero or negative `n` produces an empty sequence.
///
/// ```rust
/// use lazy_seq::prelude::*;
///
/// let data = [1, 2, 3];
/// assert_eq!(from_slice(&data).take(2).collect::<Vec<_>>(), vec![1, 2]);
/// assert_eq!(from_slice(&data).take(-1).count(), 0);
/// ```
pub fn take<S>(upstream: S, n: isize) -> Take<S> {
    let count = usize::try_from(n).unwrap_or(0);
    Take {
        upstream,
        count,
        remaining: count,
        started: false,
        exhausted: false,
    }
}

impl<S: Sequence> Sequence for Take<S> {
    type Item = S::Item;

    fn advance(&mut self) {
        self.started = true;
        if self.remaining == 0 {
            self.exhausted = true;
            return;
        }
        self.upstream.advance();
        if self.upstream.get().is_some() {
            self.remaining -= 1;
        }
    }

    fn get(&self) -> Option<&S::Item> {
        if self.started && !self.exhausted {
            self.upstream.get()
        } else {
            None
        }
    }
}

impl<S: Restart> Restart for Take<S> {
    fn restart(&self) -> Self {
        Take {
            upstream: self.upstream.restart(),
            count: self.count,
            remaining: self.count,
            started: false,
            exhausted: false,
        }
    }
}

/// Emits upstream items while a predicate holds.
///
/// Created via [`take_while`] or [`Sequence::take_while`]. The first item
/// that fails the predicate is dropped and the end is latched.
pub struct TakeWhile<S, P> {
    upstream: S,
    predicate: P,
    started: bool,
    done: bool,
}

/// Create a sequence that stops at the first item failing `predicate`.
pub fn take_while<S, P>(upstream: S, predicate: P) -> TakeWhile<S, P> {
    TakeWhile {
        upstream,
        predicate,
        started: false,
        done: false,
    }
}

impl<S, P> Sequence for TakeWhile<S, P>
where
    S: Sequence,
    P: FnMut(&S::Item) -> bool,
{
    type Item = S::Item;

    fn advance(&mut self) {
        self.started = true;
        if self.done {
            return;
        }
        self.upstream.advance();
        if self
            .upstream
            .get()
            .is_some_and(|item| !(self.predicate)(item))
        {
            self.done = true;
        }
    }

    fn get(&self) -> Option<&S::Item> {
        if self.started && !self.done {
            self.upstream.get()
        } else {
            None
        }
    }
}

impl<S, P> Restart for TakeWhile<S, P>
where
    S: Restart,
    P: FnMut(&S::Item) -> bool + Clone,
{
    fn restart(&self) -> Self {
        take_while(self.upstream.restart(), self.predicate.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::{from_slice, gen, repeat};
    use std::cell::Cell;

    #[test]
    fn test_take_stops_at_count() {
        let data = [1, 2, 3, 4];
        let mut seq = from_slice(&data).take(2);
        assert_eq!(seq.next(), Some(&1));
        assert_eq!(seq.next(), Some(&2));
        assert_eq!(seq.next(), None);
        assert_eq!(seq.next(), None);
    }

    #[test]
    fn test_take_get_before_advance_is_none() {
        let data = [1, 2, 3];
        let mut source = from_slice(&data);
        source.advance();
        let mut seq = source.by_ref().take(1);
        assert_eq!(seq.get(), None);
        assert_eq!(seq.next(), Some(&2));
        assert_eq!(seq.next(), None);

        let seq = from_slice(&data).take_while(|_| true);
        assert_eq!(seq.get(), None);
    }

    #[test]
    fn test_take_more_than_available() {
        let data = [1, 2];
        assert_eq!(from_slice(&data).take(10).collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn test_take_zero_and_negative_never_pull() {
        let pulls = Cell::new(0);
        let mut seq = repeat(1).inspect(|_| pulls.set(pulls.get() + 1)).take(0);
        assert_eq!(seq.next(), None);

        let mut seq = repeat(1).inspect(|_| pulls.set(pulls.get() + 1)).take(-5);
        assert_eq!(seq.next(), None);
        assert_eq!(pulls.get(), 0);
    }

    #[test]
    fn test_take_does_not_pull_past_budget() {
        let pulls = Cell::new(0);
        let seq = gen(0).inspect(|_| pulls.set(pulls.get() + 1)).take(3);
        assert_eq!(seq.count(), 3);
        assert_eq!(pulls.get(), 3);
    }

    #[test]
    fn test_take_restart_resets_budget() {
        let data = [1, 2, 3];
        let seq = from_slice(&data).take(2);
        let fresh = seq.restart();
        assert_eq!(seq.count(), 2);
        assert_eq!(fresh.collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn test_take_while_drops_first_failing_item() {
        let data = [1, 2, 10, 3];
        let mut seq = from_slice(&data).take_while(|n| *n < 5);
        assert_eq!(seq.next(), Some(&1));
        assert_eq!(seq.next(), Some(&2));
        assert_eq!(seq.next(), None);
        // 3 would pass, but the end is latched.
        assert_eq!(seq.next(), None);
    }

    #[test]
    fn test_take_while_bounds_infinite_source() {
        let factorial = |n: u64| gen(1u64).take_while(move |i| *i <= n).product();
        assert_eq!(factorial(0), 1);
        assert_eq!(factorial(1), 1);
        assert_eq!(factorial(5), 120);
    }
}
