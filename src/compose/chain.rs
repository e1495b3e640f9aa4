use crate::{Restart, Sequence};

/// Runs the first sequence to its end, then continues with the second.
///
/// Created via [`chain`] or [`Sequence::chain`]. Once the switch has
/// happened the first sequence is never pulled again.
pub struct Chain<S1, S2> {
    first: S1,
    second: S2,
    started: bool,
    switched: bool,
}

/// Create a sequence of all items of `first` followed by all items of
/// `second`.
///
/// ```rust
/// use lazy_seq::prelude::*;
///
/// let a1 = [1, 2, 3];
/// let a2 = [4, 5, 6];
/// let all: Vec<_> = from_slice(&a1).chain(from_slice(&a2)).collect();
/// assert_eq!(all, vec![1, 2, 3, 4, 5, 6]);
/// ```
pub fn chain<S1, S2>(first: S1, second: S2) -> Chain<S1, S2> {
    Chain {
        first,
        second,
        started: false,
        switched: false,
    }
}

impl<S1, S2> Sequence for Chain<S1, S2>
where
    S1: Sequence,
    S2: Sequence<Item = S1::Item>,
{
    type Item = S1::Item;

    fn advance(&mut self) {
        self.started = true;
        if !self.switched {
            self.first.advance();
            if self.first.get().is_some() {
                return;
            }
            self.switched = true;
        }
        self.second.advance();
    }

    fn get(&self) -> Option<&Self::Item> {
        if !self.started {
            None
        } else if self.switched {
            self.second.get()
        } else {
            self.first.get()
        }
    }
}

impl<S1, S2> Restart for Chain<S1, S2>
where
    S1: Restart,
    S2: Restart<Item = S1::Item>,
{
    fn restart(&self) -> Self {
        chain(self.first.restart(), self.second.restart())
    }
}
