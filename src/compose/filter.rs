use crate::{Restart, Sequence};

/// Passes through only the upstream items that match a predicate.
pub struct Filter<S, P> {
    upstream: S,
    predicate: P,
    started: bool,
}

/// Create a sequence of the items of `upstream` matching `predicate`.
///
/// ```rust
/// use lazy_seq::prelude::*;
///
/// let data = [0, 1, 2];
/// let mut seq = from_slice(&data).filter(|x| *x > 0);
/// assert_eq!(seq.next(), Some(&1));
/// assert_eq!(seq.next(), Some(&2));
/// assert_eq!(seq.next(), None);
/// ```
pub fn filter<S, P>(upstream: S, predicate: P) -> Filter<S, P> {
    Filter {
        upstream,
        predicate,
        started: false,
    }
}

impl<S, P> Sequence for Filter<S, P>
where
    S: Sequence,
    P: FnMut(&S::Item) -> bool,
{
    type Item = S::Item;

    fn advance(&mut self) {
        self.started = true;
        loop {
            self.upstream.advance();
            if self
                .upstream
                .get()
                .map_or(true, |item| (self.predicate)(item))
            {
                return;
            }
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

impl<S, P> Restart for Filter<S, P>
where
    S: Restart,
    P: FnMut(&S::Item) -> bool + Clone,
{
    fn restart(&self) -> Self {
        filter(self.upstream.restart(), self.predicate.clone())
    }
}

/// Maps and filters in one pass.
///
/// Items for which the function returns `None` are skipped; the others are
/// replaced by the returned value, which is kept in this node's slot.
pub struct FilterMap<S, F, U> {
    upstream: S,
    f: F,
    slot: Option<U>,
}

/// Create a sequence of the `Some` results of `f` over `upstream`.
///
/// ```rust
/// use lazy_seq::prelude::*;
///
/// let data = ["1", "lol", "3", "NaN", "5"];
/// let numbers: Vec<i32> = from_slice(&data).filter_map(|s| s.parse::<i32>().ok()).collect();
/// assert_eq!(numbers, vec![1, 3, 5]);
/// ```
pub fn filter_map<S, F, U>(upstream: S, f: F) -> FilterMap<S, F, U> {
    FilterMap {
        upstream,
        f,
        slot: None,
    }
}

impl<S, F, U> Sequence for FilterMap<S, F, U>
where
    S: Sequence,
    F: FnMut(&S::Item) -> Option<U>,
{
    type Item = U;

    fn advance(&mut self) {
        loop {
            self.upstream.advance();
            let Some(item) = self.upstream.get() else {
                self.slot = None;
                return;
            };
            if let Some(value) = (self.f)(item) {
                self.slot = Some(value);
                return;
            }
        }
    }

    fn get(&self) -> Option<&U> {
        self.slot.as_ref()
    }
}

impl<S, F, U> Restart for FilterMap<S, F, U>
where
    S: Restart,
    F: FnMut(&S::Item) -> Option<U> + Clone,
{
    fn restart(&self) -> Self {
        filter_map(self.upstream.restart(), self.f.clone())
    }
}
