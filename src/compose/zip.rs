use crate::{Restart, Sequence};

/// Pairs up the items of two sequences.
///
/// Both items are cloned into this node's slot. Ends as soon as either side
/// ends; if the first side has ended the second is not pulled.
pub struct Zip<A: Sequence, B: Sequence> {
    first: A,
    second: B,
    slot: Option<(A::Item, B::Item)>,
}

/// Create a sequence of `(a_i, b_i)` pairs, as long as the shorter input.
///
/// ```rust
/// use lazy_seq::prelude::*;
///
/// let a = [1, 2, 3, 4];
/// let b = [4, 5, 6];
/// let pairs: Vec<(i32, i32)> = from_slice(&a).zip(from_slice(&b)).collect();
/// assert_eq!(pairs, vec![(1, 4), (2, 5), (3, 6)]);
/// ```
pub fn zip<A: Sequence, B: Sequence>(first: A, second: B) -> Zip<A, B> {
    Zip {
        first,
        second,
        slot: None,
    }
}

impl<A, B> Sequence for Zip<A, B>
where
    A: Sequence,
    B: Sequence,
    A::Item: Clone,
    B::Item: Clone,
{
    type Item = (A::Item, B::Item);

    fn advance(&mut self) {
        self.first.advance();
        self.slot = match self.first.get() {
            Some(a) => {
                self.second.advance();
                self.second.get().map(|b| (a.clone(), b.clone()))
            }
            None => None,
        };
    }

    fn get(&self) -> Option<&Self::Item> {
        self.slot.as_ref()
    }
}

impl<A, B> Restart for Zip<A, B>
where
    A: Restart,
    B: Restart,
    A::Item: Clone,
    B::Item: Clone,
{
    fn restart(&self) -> Self {
        zip(self.first.restart(), self.second.restart())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::{empty, from_slice, gen, repeat};
    use std::cell::Cell;

    #[test]
    fn test_zip_length_is_shorter_input() {
        let a = [1, 2, 3, 4];
        let b = ["x", "y", "z"];
        let mut seq = from_slice(&a).zip(from_slice(&b));
        assert_eq!(seq.next(), Some(&(1, "x")));
        assert_eq!(seq.next(), Some(&(2, "y")));
        assert_eq!(seq.next(), Some(&(3, "z")));
        assert_eq!(seq.next(), None);
    }

    #[test]
    fn test_zip_does_not_pull_second_when_first_ends() {
        let pulls = Cell::new(0);
        let second = repeat('r').inspect(|_| pulls.set(pulls.get() + 1));
        let seq = empty::<u8>().zip(second);
        assert_eq!(seq.count(), 0);
        assert_eq!(pulls.get(), 0);
    }

    #[test]
    fn test_zip_with_infinite_side() {
        let words = ["a", "b"];
        let pairs: Vec<(&str, i32)> = from_slice(&words).zip(gen(10)).collect();
        assert_eq!(pairs, vec![("a", 10), ("b", 11)]);
    }

    #[test]
    fn test_zip_restart_restarts_both_sides() {
        let a = [1, 2];
        let b = [3, 4];
        let mut seq = from_slice(&a).zip(from_slice(&b));
        seq.advance();
        seq.advance();
        let fresh = seq.restart();
        assert_eq!(fresh.collect::<Vec<_>>(), vec![(1, 3), (2, 4)]);
    }
}
