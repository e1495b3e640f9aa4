use crate::{Restart, Sequence};

/// Emits a running accumulator, updated from each upstream item.
///
/// Ends only when upstream ends.
pub struct Scan<S, B, F> {
    upstream: S,
    init: B,
    acc: Option<B>,
    live: bool,
    f: F,
}

/// Create a sequence of the successive states of `acc = f(&acc, &item)`,
/// starting from `init`.
///
/// `init` itself is not emitted; the first item is `f(&init, &first)`.
///
/// ```rust
/// use lazy_seq::prelude::*;
///
/// let data = [1.0, 2.0, 3.0];
/// let running: Vec<f64> = from_slice(&data).scan(1.0, |acc, x| acc * x).collect();
/// assert_eq!(running, vec![1.0, 2.0, 6.0]);
/// ```
pub fn scan<S, B, F>(upstream: S, init: B, f: F) -> Scan<S, B, F> {
    Scan {
        upstream,
        init,
        acc: None,
        live: false,
        f,
    }
}

impl<S, B, F> Sequence for Scan<S, B, F>
where
    S: Sequence,
    F: FnMut(&B, &S::Item) -> B,
{
    type Item = B;

    fn advance(&mut self) {
        self.upstream.advance();
        match self.upstream.get() {
            Some(item) => {
                let current = self.acc.as_ref().unwrap_or(&self.init);
                self.acc = Some((self.f)(current, item));
                self.live = true;
            }
            None => self.live = false,
        }
    }

    fn get(&self) -> Option<&B> {
        if self.live {
            self.acc.as_ref()
        } else {
            None
        }
    }
}

impl<S, B, F> Restart for Scan<S, B, F>
where
    S: Restart,
    B: Clone,
    F: FnMut(&B, &S::Item) -> B + Clone,
{
    fn restart(&self) -> Self {
        scan(self.upstream.restart(), self.init.clone(), self.f.clone())
    }
}
