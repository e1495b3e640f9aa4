use crate::{Restart, Sequence};

/// Discards a fixed number of upstream items, then passes the rest through.
pub struct Skip<S> {
    upstream: S,
    count: usize,
    remaining: usize,
    started: bool,
}

/// Create a sequence that drops the first `n` items of `upstream`.
///
/// Zero or negative `n` drops nothing. If upstream runs out while items are
/// still being dropped, the result is simply empty.
///
/// ```rust
/// use lazy_seq::prelude::*;
///
/// let data = [1, 2, 3, 4];
/// assert_eq!(from_slice(&data).skip(2).collect::<Vec<_>>(), vec![3, 4]);
/// ```
pub fn skip<S>(upstream: S, n: isize) -> Skip<S> {
    let count = usize::try_from(n).unwrap_or(0);
    Skip {
        upstream,
        count,
        remaining: count,
        started: false,
    }
}

impl<S: Sequence> Sequence for Skip<S> {
    type Item = S::Item;

    fn advance(&mut self) {
        self.started = true;
        while self.remaining > 0 {
            self.upstream.advance();
            if self.upstream.get().is_none() {
                return;
            }
            self.remaining -= 1;
        }
        self.upstream.advance();
    }

    fn get(&self) -> Option<&S::Item> {
        if self.started {
            self.upstream.get()
        } else {
            None
        }
    }
}

impl<S: Restart> Restart for Skip<S> {
    fn restart(&self) -> Self {
        skip(self.upstream.restart(), self.count as isize)
    }
}

/// Discards upstream items while a predicate holds.
///
/// Once an item fails the predicate, it and everything after it are emitted
/// and the predicate is never called again.
pub struct SkipWhile<S, P> {
    upstream: S,
    predicate: P,
    started: bool,
    skipping: bool,
}

/// Create a sequence that drops the leading items matching `predicate`.
///
/// ```rust
/// use lazy_seq::prelude::*;
///
/// let data = [-1, -2, 0, 1, -3];
/// let items: Vec<_> = from_slice(&data).skip_while(|x| *x < 0).collect();
/// assert_eq!(items, vec![0, 1, -3]);
/// ```
pub fn skip_while<S, P>(upstream: S, predicate: P) -> SkipWhile<S, P> {
    SkipWhile {
        upstream,
        predicate,
        started: false,
        skipping: true,
    }
}

impl<S, P> Sequence for SkipWhile<S, P>
where
    S: Sequence,
    P: FnMut(&S::Item) -> bool,
{
    type Item = S::Item;

    fn advance(&mut self) {
        self.started = true;
        self.upstream.advance();
        if !self.skipping {
            return;
        }
        while self
            .upstream
            .get()
            .is_some_and(|item| (self.predicate)(item))
        {
            self.upstream.advance();
        }
        if self.upstream.get().is_some() {
            self.skipping = false;
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

impl<S, P> Restart for SkipWhile<S, P>
where
    S: Restart,
    P: FnMut(&S::Item) -> bool + Clone,
{
    fn restart(&self) -> Self {
        skip_while(self.upstream.restart(), self.predicate.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::from_slice;
    use std::cell::Cell;

    #[test]
    fn test_skip_emits_tail() {
        let data = [1, 2, 3, 4, 5];
        let mut seq = from_slice(&data).skip(3);
        assert_eq!(seq.next(), Some(&4));
        assert_eq!(seq.next(), Some(&5));
        assert_eq!(seq.next(), None);
    }

    #[test]
    fn test_skip_get_before_advance_is_none() {
        let data = [1, 2, 3];
        let mut source = from_slice(&data);
        source.advance();
        let mut seq = source.by_ref().skip(1);
        assert_eq!(seq.get(), None);
        assert_eq!(seq.next(), Some(&3));
    }

    #[test]
    fn test_skip_past_end_is_empty() {
        let data = [1, 2];
        assert_eq!(from_slice(&data).skip(5).count(), 0);
    }

    #[test]
    fn test_skip_negative_skips_nothing() {
        let data = [1, 2];
        assert_eq!(from_slice(&data).skip(-3).collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn test_skip_restart_skips_again() {
        let data = [1, 2, 3];
        let mut seq = from_slice(&data).skip(1);
        assert_eq!(seq.next(), Some(&2));
        let fresh = seq.restart();
        assert_eq!(fresh.collect::<Vec<_>>(), vec![2, 3]);
    }

    #[test]
    fn test_skip_while_stops_testing_after_first_failure() {
        let calls = Cell::new(0);
        let data = [-1, -2, 0, 1, 2, -3];
        let mut seq = from_slice(&data).skip_while(|x| {
            calls.set(calls.get() + 1);
            *x < 0
        });
        assert_eq!(seq.next(), Some(&0));
        assert_eq!(seq.next(), Some(&1));
        assert_eq!(seq.next(), Some(&2));
        assert_eq!(seq.next(), Some(&-3));
        assert_eq!(seq.next(), None);
        assert_eq!(calls.get(), 3);
    }

    #[test]
    fn test_skip_while_everything_matches() {
        let data = [1, 2, 3];
        assert_eq!(from_slice(&data).skip_while(|_| true).count(), 0);
    }
}
