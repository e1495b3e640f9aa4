//! Sources over existing collections.
//!
//! [`FromSlice`] walks a borrowed slice and hands out references into it.
//! [`FromVec`] owns its items behind an [`Rc`], so restarted copies share the
//! buffer and only the cursor is duplicated. [`FromIter`] adapts any std
//! iterator by parking each item in a slot.

use std::rc::Rc;

use crate::{Restart, Sequence};

/// Position within a buffer.
#[derive(Clone, Copy, Default)]
enum Cursor {
    #[default]
    Start,
    At(usize),
    End,
}

impl Cursor {
    fn advance(&mut self, len: usize) {
        *self = match *self {
            Cursor::Start if len > 0 => Cursor::At(0),
            Cursor::At(i) if i + 1 < len => Cursor::At(i + 1),
            _ => Cursor::End,
        };
    }

    fn index(self) -> Option<usize> {
        match self {
            Cursor::At(i) => Some(i),
            Cursor::Start | Cursor::End => None,
        }
    }
}

/// A sequence over a borrowed slice.
pub struct FromSlice<'a, T> {
    items: &'a [T],
    cursor: Cursor,
}

/// Create a sequence over the items of a slice.
///
/// Items are not copied: [`get`](Sequence::get) returns references into the
/// slice itself.
///
/// ```rust
/// use lazy_seq::prelude::*;
///
/// let words = vec!["a", "b"];
/// let mut seq = from_slice(&words);
/// assert!(std::ptr::eq(seq.next().unwrap(), &words[0]));
/// ```
pub fn from_slice<T>(items: &[T]) -> FromSlice<'_, T> {
    FromSlice {
        items,
        cursor: Cursor::default(),
    }
}

impl<'a, T> Sequence for FromSlice<'a, T> {
    type Item = T;

    fn advance(&mut self) {
        self.cursor.advance(self.items.len());
    }

    fn get(&self) -> Option<&T> {
        self.cursor.index().and_then(|i| self.items.get(i))
    }
}

impl<'a, T> Restart for FromSlice<'a, T> {
    fn restart(&self) -> Self {
        from_slice(self.items)
    }
}

/// A sequence that owns its items.
pub struct FromVec<T> {
    items: Rc<[T]>,
    cursor: Cursor,
}

/// Create a sequence that takes ownership of `items`.
///
/// Restarting shares the same buffer, so cycling over a large vector never
/// copies it.
///
/// ```rust
/// use lazy_seq::prelude::*;
///
/// let seq = from_vec(vec![1, 2, 3]);
/// assert_eq!(seq.sum(), 6);
/// ```
pub fn from_vec<T>(items: Vec<T>) -> FromVec<T> {
    FromVec {
        items: items.into(),
        cursor: Cursor::default(),
    }
}

impl<T> Sequence for FromVec<T> {
    type Item = T;

    fn advance(&mut self) {
        self.cursor.advance(self.items.len());
    }

    fn get(&self) -> Option<&T> {
        self.cursor.index().and_then(|i| self.items.get(i))
    }
}

impl<T> Restart for FromVec<T> {
    fn restart(&self) -> Self {
        FromVec {
            items: Rc::clone(&self.items),
            cursor: Cursor::default(),
        }
    }
}

/// A sequence driven by a std [`Iterator`].
pub struct FromIter<I: Iterator> {
    iter: I,
    slot: Option<I::Item>,
}

/// Create a sequence from anything iterable.
///
/// The iterator is only pulled on [`advance`](Sequence::advance).
///
/// ```rust
/// use lazy_seq::prelude::*;
///
/// let squares: Vec<u32> = from_iter(1..=4).map(|n| n * n).collect();
/// assert_eq!(squares, vec![1, 4, 9, 16]);
/// ```
pub fn from_iter<I: IntoIterator>(iter: I) -> FromIter<I::IntoIter> {
    FromIter {
        iter: iter.into_iter(),
        slot: None,
    }
}

impl<I: Iterator> Sequence for FromIter<I> {
    type Item = I::Item;

    fn advance(&mut self) {
        self.slot = self.iter.next();
    }

    fn get(&self) -> Option<&I::Item> {
        self.slot.as_ref()
    }
}
