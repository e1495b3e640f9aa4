//! Adapters that control what happens at the end of a sequence.
//!
//! [`Cycle`] starts over by restarting its upstream; [`Fuse`] makes the end
//! permanent.

use crate::{Restart, Sequence};

/// Repeats a finite sequence forever.
///
/// Holds the original node, which is never pulled, and a working copy made
/// with [`Restart::restart`] on the first pull. When the working copy ends it
/// is replaced by a fresh restart of the original.
///
/// Cycling a sequence that restarts empty never returns from
/// [`advance`](Sequence::advance).
pub struct Cycle<S> {
    origin: S,
    current: Option<S>,
}

/// Create a sequence that repeats `upstream` endlessly.
///
/// ```rust
/// use lazy_seq::prelude::*;
///
/// let data = [1, 2, 3];
/// let items: Vec<_> = from_slice(&data).cycle().take(7).collect();
/// assert_eq!(items, vec![1, 2, 3, 1, 2, 3, 1]);
/// ```
pub fn cycle<S: Restart>(upstream: S) -> Cycle<S> {
    Cycle {
        origin: upstream,
        current: None,
    }
}

impl<S: Restart> Sequence for Cycle<S> {
    type Item = S::Item;

    fn advance(&mut self) {
        loop {
            let current = self
                .current
                .get_or_insert_with(|| self.origin.restart());
            current.advance();
            if current.get().is_some() {
                return;
            }
            tracing::trace!("Cycle reached end of upstream, restarting");
            self.current = None;
        }
    }

    fn get(&self) -> Option<&S::Item> {
        self.current.as_ref().and_then(|current| current.get())
    }
}

impl<S: Restart> Restart for Cycle<S> {
    fn restart(&self) -> Self {
        cycle(self.origin.restart())
    }
}

/// Keeps signaling end once upstream has ended.
///
/// Upstream is never pulled again after its first end, which protects
/// consumers from sources that resume after ending.
pub struct Fuse<S> {
    upstream: S,
    started: bool,
    done: bool,
}

/// Create a sequence whose end is permanent.
///
/// ```rust
/// use lazy_seq::prelude::*;
///
/// let mut flip = false;
/// let flaky = from_fn(move || {
///     flip = !flip;
///     flip.then_some(1)
/// });
/// let mut seq = flaky.fuse();
/// assert_eq!(seq.next(), Some(&1));
/// assert_eq!(seq.next(), None);
/// assert_eq!(seq.next(), None);
/// ```
pub fn fuse<S>(upstream: S) -> Fuse<S> {
    Fuse {
        upstream,
        started: false,
        done: false,
    }
}

impl<S: Sequence> Sequence for Fuse<S> {
    type Item = S::Item;

    fn advance(&mut self) {
        self.started = true;
        if self.done {
            return;
        }
        self.upstream.advance();
        if self.upstream.get().is_none() {
            tracing::trace!("Fuse latched end of sequence");
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

impl<S: Restart> Restart for Fuse<S> {
    fn restart(&self) -> Self {
        fuse(self.upstream.restart())
    }
}
