use crate::{Restart, Sequence};

/// Expands each upstream item into a sequence and emits their items in turn.
///
/// The current inner sequence is drained first; only when it ends is the
/// next outer item pulled and turned into a new inner sequence.
pub struct FlatMap<S, U, F> {
    outer: S,
    inner: Option<U>,
    f: F,
}

/// Create a sequence of the items of `f(item)` for every item of `upstream`.
///
/// ```rust
/// use lazy_seq::prelude::*;
///
/// let counts = [1, 2, 3];
/// let items: Vec<i32> = from_slice(&counts)
///     .flat_map(|&n| repeat(n).take(n as isize))
///     .collect();
/// assert_eq!(items, vec![1, 2, 2, 3, 3, 3]);
/// ```
pub fn flat_map<S, U, F>(upstream: S, f: F) -> FlatMap<S, U, F> {
    FlatMap {
        outer: upstream,
        inner: None,
        f,
    }
}

impl<S, U, F> Sequence for FlatMap<S, U, F>
where
    S: Sequence,
    U: Sequence,
    F: FnMut(&S::Item) -> U,
{
    type Item = U::Item;

    fn advance(&mut self) {
        loop {
            if let Some(inner) = self.inner.as_mut() {
                inner.advance();
                if inner.get().is_some() {
                    return;
                }
            }
            self.outer.advance();
            match self.outer.get() {
                Some(item) => self.inner = Some((self.f)(item)),
                None => {
                    self.inner = None;
                    return;
                }
            }
        }
    }

    fn get(&self) -> Option<&U::Item> {
        self.inner.as_ref().and_then(|inner| inner.get())
    }
}

impl<S, U, F> Restart for FlatMap<S, U, F>
where
    S: Restart,
    U: Sequence,
    F: FnMut(&S::Item) -> U + Clone,
{
    fn restart(&self) -> Self {
        flat_map(self.outer.restart(), self.f.clone())
    }
}
