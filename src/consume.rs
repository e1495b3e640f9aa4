//! Functions for draining sequences.
//!
//! Every terminal operation is a free function written only against the
//! [`Sequence`] capability; the trait exposes each one as a provided method.
//! Functions that take the sequence by value drain it. The short-circuiting
//! ones (`all`, `any`, `find`, `position`, `nth`) borrow it mutably and leave
//! the rest of the items in place.
//!
//! Items are handed out as transient borrows, so anything that outlives a
//! pull (`collect`, `last`, `max`, ...) needs `Item: Clone`.

use std::cmp::Ordering;

use num_traits::{One, Zero};

use crate::{iter::Cloned, Sequence};

/// Drain the sequence and count its items.
pub fn count<S: Sequence>(mut seq: S) -> usize {
    let mut n = 0;
    while seq.next().is_some() {
        n += 1;
    }
    n
}

/// Drain the sequence and return a copy of its final item.
pub fn last<S>(mut seq: S) -> Option<S::Item>
where
    S: Sequence,
    S::Item: Clone,
{
    let mut last = None;
    while let Some(item) = seq.next() {
        last = Some(item.clone());
    }
    last
}

/// Skip `n` items and return the one after.
///
/// Stops early if the sequence ends while skipping. Calling it again keeps
/// going from where the previous call left off.
///
/// ```rust
/// use lazy_seq::prelude::*;
///
/// let data = [10, 20, 30, 40];
/// let mut seq = from_slice(&data);
/// assert_eq!(seq.nth(1), Some(&20));
/// assert_eq!(seq.nth(1), Some(&40));
/// assert_eq!(seq.nth(0), None);
/// ```
pub fn nth<S>(seq: &mut S, n: usize) -> Option<&S::Item>
where
    S: Sequence + ?Sized,
{
    for _ in 0..n {
        seq.advance();
        if seq.get().is_none() {
            return None;
        }
    }
    seq.next()
}

/// Copy every item into a container.
///
/// ```rust
/// use std::collections::BTreeSet;
/// use lazy_seq::prelude::*;
///
/// let data = [3, 1, 3, 2];
/// let set: BTreeSet<i32> = from_slice(&data).collect();
/// assert_eq!(set.into_iter().collect::<Vec<_>>(), vec![1, 2, 3]);
/// ```
pub fn collect<S, C>(seq: S) -> C
where
    S: Sequence,
    S::Item: Clone,
    C: FromIterator<S::Item>,
{
    Cloned::new(seq).collect()
}

/// Split the items into those matching `predicate` and those that do not.
///
/// Both containers keep encounter order.
pub fn partition<S, C, P>(mut seq: S, mut predicate: P) -> (C, C)
where
    S: Sequence,
    S::Item: Clone,
    C: Default + Extend<S::Item>,
    P: FnMut(&S::Item) -> bool,
{
    let mut matched = C::default();
    let mut unmatched = C::default();
    while let Some(item) = seq.next() {
        if predicate(item) {
            matched.extend(std::iter::once(item.clone()));
        } else {
            unmatched.extend(std::iter::once(item.clone()));
        }
    }
    (matched, unmatched)
}

/// Strict left fold.
pub fn fold<S, B, F>(mut seq: S, init: B, mut f: F) -> B
where
    S: Sequence,
    F: FnMut(B, &S::Item) -> B,
{
    let mut acc = init;
    while let Some(item) = seq.next() {
        acc = f(acc, item);
    }
    acc
}

/// Sum of the items; zero for an empty sequence.
pub fn sum<S>(seq: S) -> S::Item
where
    S: Sequence,
    S::Item: Zero + Clone,
{
    fold(seq, S::Item::zero(), |acc, item| acc + item.clone())
}

/// Product of the items; one for an empty sequence.
pub fn product<S>(seq: S) -> S::Item
where
    S: Sequence,
    S::Item: One + Clone,
{
    fold(seq, S::Item::one(), |acc, item| acc * item.clone())
}

/// `true` unless some item fails `predicate`. Empty sequences are `true`.
pub fn all<S, P>(seq: &mut S, mut predicate: P) -> bool
where
    S: Sequence + ?Sized,
    P: FnMut(&S::Item) -> bool,
{
    while let Some(item) = seq.next() {
        if !predicate(item) {
            return false;
        }
    }
    true
}

/// `true` if some item matches `predicate`. Empty sequences are `false`.
pub fn any<S, P>(seq: &mut S, mut predicate: P) -> bool
where
    S: Sequence + ?Sized,
    P: FnMut(&S::Item) -> bool,
{
    while let Some(item) = seq.next() {
        if predicate(item) {
            return true;
        }
    }
    false
}

/// Pull until an item matches `predicate` and return it.
///
/// ```rust
/// use lazy_seq::prelude::*;
///
/// let mut seq = gen(1).map(|n| n * n);
/// assert_eq!(seq.find(|&sq| sq > 20), Some(&25));
/// assert_eq!(seq.next(), Some(&36));
/// ```
pub fn find<S, P>(seq: &mut S, mut predicate: P) -> Option<&S::Item>
where
    S: Sequence + ?Sized,
    P: FnMut(&S::Item) -> bool,
{
    loop {
        seq.advance();
        if seq.get().map_or(true, &mut predicate) {
            return S::get(seq);
        }
    }
}

/// Zero-based index of the first item matching `predicate`.
pub fn position<S, P>(seq: &mut S, mut predicate: P) -> Option<usize>
where
    S: Sequence + ?Sized,
    P: FnMut(&S::Item) -> bool,
{
    let mut index = 0;
    loop {
        match seq.next() {
            Some(item) if predicate(item) => return Some(index),
            Some(_) => index += 1,
            None => return None,
        }
    }
}

// Keeps the current best unless a later item compares as `wins` against it,
// so ties go to the first item seen.
fn select_by<S, F>(mut seq: S, mut compare: F, wins: Ordering) -> Option<S::Item>
where
    S: Sequence,
    S::Item: Clone,
    F: FnMut(&S::Item, &S::Item) -> Ordering,
{
    let mut best: Option<S::Item> = None;
    while let Some(item) = seq.next() {
        let replace = match &best {
            Some(current) => compare(item, current) == wins,
            None => true,
        };
        if replace {
            best = Some(item.clone());
        }
    }
    best
}

/// Largest item. Ties keep the first one seen.
pub fn max<S>(seq: S) -> Option<S::Item>
where
    S: Sequence,
    S::Item: Ord + Clone,
{
    max_by(seq, Ord::cmp)
}

/// Smallest item. Ties keep the first one seen.
pub fn min<S>(seq: S) -> Option<S::Item>
where
    S: Sequence,
    S::Item: Ord + Clone,
{
    min_by(seq, Ord::cmp)
}

/// Largest item according to `compare`. Ties keep the first one seen.
///
/// ```rust
/// use lazy_seq::prelude::*;
///
/// let data = [2.5_f64, -1.0, 7.25, 3.0];
/// let top = from_slice(&data).max_by(|a, b| a.total_cmp(b));
/// assert_eq!(top, Some(7.25));
/// ```
pub fn max_by<S, F>(seq: S, compare: F) -> Option<S::Item>
where
    S: Sequence,
    S::Item: Clone,
    F: FnMut(&S::Item, &S::Item) -> Ordering,
{
    select_by(seq, compare, Ordering::Greater)
}

/// Smallest item according to `compare`. Ties keep the first one seen.
pub fn min_by<S, F>(seq: S, compare: F) -> Option<S::Item>
where
    S: Sequence,
    S::Item: Clone,
    F: FnMut(&S::Item, &S::Item) -> Ordering,
{
    select_by(seq, compare, Ordering::Less)
}

/// Item whose key is largest. Ties keep the first one seen.
pub fn max_by_key<S, K, F>(seq: S, mut key: F) -> Option<S::Item>
where
    S: Sequence,
    S::Item: Clone,
    K: Ord,
    F: FnMut(&S::Item) -> K,
{
    max_by(seq, move |a, b| key(a).cmp(&key(b)))
}

/// Item whose key is smallest. Ties keep the first one seen.
pub fn min_by_key<S, K, F>(seq: S, mut key: F) -> Option<S::Item>
where
    S: Sequence,
    S::Item: Clone,
    K: Ord,
    F: FnMut(&S::Item) -> K,
{
    min_by(seq, move |a, b| key(a).cmp(&key(b)))
}

/// Call `f` on every item.
pub fn for_each<S, F>(mut seq: S, mut f: F)
where
    S: Sequence,
    F: FnMut(&S::Item),
{
    while let Some(item) = seq.next() {
        f(item);
    }
}

/// Pull both sequences in lockstep.
///
/// `true` only if every pair is equal and both end on the same step.
///
/// ```rust
/// use lazy_seq::prelude::*;
///
/// let data = [1, 2, 3];
/// assert!(from_slice(&data).eq(gen_until(1, 4)));
/// assert!(from_slice(&data).ne(gen_until(1, 5)));
/// ```
pub fn eq<A, B>(mut a: A, mut b: B) -> bool
where
    A: Sequence,
    B: Sequence,
    A::Item: PartialEq<B::Item>,
{
    loop {
        a.advance();
        b.advance();
        match (a.get(), b.get()) {
            (Some(x), Some(y)) => {
                if x != y {
                    return false;
                }
            }
            (None, None) => return true,
            _ => return false,
        }
    }
}

/// Negation of [`eq`].
pub fn ne<A, B>(a: A, b: B) -> bool
where
    A: Sequence,
    B: Sequence,
    A::Item: PartialEq<B::Item>,
{
    !eq(a, b)
}

#[cfg(test)]
mod tests {
    use std::collections::{HashMap, VecDeque};

    use crate::build::{empty, from_fn, from_slice, from_vec, gen, gen_until, once, repeat};
    use crate::Sequence;

    #[test]
    fn test_count_and_last() {
        let data = [4, 5, 6];
        assert_eq!(from_slice(&data).count(), 3);
        assert_eq!(from_slice(&data).last(), Some(6));
        assert_eq!(empty::<i32>().count(), 0);
        assert_eq!(empty::<i32>().last(), None);
    }

    #[test]
    fn test_nth_past_end() {
        let data = [1, 2];
        let mut seq = from_slice(&data);
        assert_eq!(seq.nth(5), None);
    }

    #[test]
    fn test_nth_stops_pulling_at_end() {
        let mut pulls = 0;
        let mut seq = from_fn(|| {
            pulls += 1;
            (pulls <= 2).then_some(pulls)
        });
        assert_eq!(seq.nth(10), None);
        drop(seq);
        assert_eq!(pulls, 3);
    }

    #[test]
    fn test_collect_zipped_pairs_into_map() {
        let words = ["test", "hello", "world", "aloha"];
        let squares = gen_until(1, 5).map(|x| x * x);
        let table: HashMap<String, i32> = from_slice(&words)
            .map(|w| w.to_string())
            .zip(squares)
            .collect();
        assert_eq!(table.len(), 4);
        assert_eq!(table.get("hello"), Some(&4));
        assert_eq!(table.get("aloha"), Some(&16));
    }

    #[test]
    fn test_partition_keeps_order() {
        let (even, odd): (Vec<i32>, Vec<i32>) = gen_until(0, 10).partition(|n| n % 2 == 0);
        assert_eq!(even, vec![0, 2, 4, 6, 8]);
        assert_eq!(odd, vec![1, 3, 5, 7, 9]);
    }

    #[test]
    fn test_partition_into_other_containers() {
        let data = ["a", "bb", "c"];
        let (short, long): (VecDeque<&str>, VecDeque<&str>) =
            from_slice(&data).partition(|s| s.len() == 1);
        assert_eq!(short, VecDeque::from(vec!["a", "c"]));
        assert_eq!(long, VecDeque::from(vec!["bb"]));
    }

    #[test]
    fn test_fold_sum_product() {
        let data = [1, 2, 3];
        assert_eq!(from_slice(&data).fold(0, |acc, x| acc + x), 6);
        assert_eq!(from_slice(&data).sum(), 6);
        assert_eq!(from_slice(&data).product(), 6);
        assert_eq!(empty::<i64>().sum(), 0);
        assert_eq!(empty::<i64>().product(), 1);
        assert_eq!(gen_until(1.0, 4.0).product(), 6.0);
    }

    #[test]
    fn test_fold_order_is_left_to_right() {
        let data = ["a", "b", "c"];
        let joined = from_slice(&data).fold(String::new(), |acc, s| acc + *s);
        assert_eq!(joined, "abc");
    }

    #[test]
    fn test_all_and_any_short_circuit() {
        let mut seq = gen(0);
        assert!(!seq.all(|&n| n < 3));
        assert_eq!(seq.next(), Some(&4));

        let mut seq = gen(0);
        assert!(seq.any(|&n| n == 2));
        assert_eq!(seq.next(), Some(&3));

        assert!(empty::<i32>().all(|_| false));
        assert!(!empty::<i32>().any(|_| true));
    }

    #[test]
    fn test_find_and_position() {
        let data = [3, 8, 5, 8];
        let mut seq = from_slice(&data);
        assert!(std::ptr::eq(seq.find(|&x| x == 8).unwrap(), &data[1]));
        assert_eq!(seq.position(|&x| x == 8), Some(1));
        assert_eq!(seq.find(|_| true), None);
        assert_eq!(from_slice(&data).position(|&x| x > 100), None);
    }

    #[test]
    fn test_max_min_empty() {
        assert_eq!(empty::<u8>().max(), None);
        assert_eq!(empty::<u8>().min(), None);
    }

    #[test]
    fn test_max_min_keep_first_on_ties() {
        let data = [(1, 'a'), (3, 'b'), (0, 'c'), (3, 'd'), (0, 'e')];
        assert_eq!(from_slice(&data).max_by_key(|p| p.0), Some((3, 'b')));
        assert_eq!(from_slice(&data).min_by_key(|p| p.0), Some((0, 'c')));
        assert_eq!(
            from_slice(&data).max_by(|a, b| a.0.cmp(&b.0)),
            Some((3, 'b'))
        );
        assert_eq!(
            from_slice(&data).min_by(|a, b| a.0.cmp(&b.0)),
            Some((0, 'c'))
        );
    }

    #[test]
    fn test_max_min_plain() {
        let data = [4, 9, -2, 7];
        assert_eq!(from_slice(&data).max(), Some(9));
        assert_eq!(from_slice(&data).min(), Some(-2));
    }

    #[test]
    fn test_for_each_visits_in_order() {
        let mut seen = Vec::new();
        from_vec(vec!['x', 'y']).for_each(|c| seen.push(*c));
        assert_eq!(seen, vec!['x', 'y']);
    }

    #[test]
    fn test_eq_requires_same_length() {
        let data = [1, 2, 3];
        assert!(from_slice(&data).eq(from_vec(vec![1, 2, 3])));
        assert!(!from_slice(&data).eq(from_vec(vec![1, 2])));
        assert!(!from_slice(&data).eq(from_vec(vec![1, 2, 3, 4])));
        assert!(!from_slice(&data).eq(from_vec(vec![1, 9, 3])));
        assert!(empty::<i32>().eq(empty::<i32>()));
    }

    #[test]
    fn test_ne_is_negated_eq() {
        let data = [1, 2, 3];
        assert!(!from_slice(&data).ne(from_slice(&data)));
        assert!(from_slice(&data).ne(once(1)));
        assert!(repeat(1).take(2).ne(once(1)));
    }

    // Property-based tests using proptest
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn test_count_matches_length(v in prop::collection::vec(any::<i32>(), 0..64)) {
            prop_assert_eq!(from_slice(&v).count(), v.len());
            prop_assert_eq!(from_slice(&v).collect::<Vec<i32>>(), v.clone());
        }

        #[test]
        fn test_take_emits_prefix(
            v in prop::collection::vec(any::<i32>(), 0..64),
            n in -8isize..80,
        ) {
            let expected: Vec<i32> = v.iter().copied().take(n.max(0) as usize).collect();
            prop_assert_eq!(from_slice(&v).take(n).collect::<Vec<i32>>(), expected);
        }

        #[test]
        fn test_skip_emits_tail(
            v in prop::collection::vec(any::<i32>(), 0..64),
            n in -8isize..80,
        ) {
            let expected: Vec<i32> = v.iter().copied().skip(n.max(0) as usize).collect();
            prop_assert_eq!(from_slice(&v).skip(n).collect::<Vec<i32>>(), expected);
        }

        #[test]
        fn test_map_and_filter_agree_with_std(v in prop::collection::vec(any::<i32>(), 0..64)) {
            let mapped: Vec<i32> = from_slice(&v).map(|x| x.wrapping_mul(3)).collect();
            let expected: Vec<i32> = v.iter().map(|x| x.wrapping_mul(3)).collect();
            prop_assert_eq!(mapped, expected);

            let kept: Vec<i32> = from_slice(&v).filter(|x| *x % 3 == 0).collect();
            let expected: Vec<i32> = v.iter().copied().filter(|x| x % 3 == 0).collect();
            prop_assert_eq!(kept, expected);
        }

        #[test]
        fn test_eq_is_reflexive(v in prop::collection::vec(any::<i32>(), 0..64)) {
            prop_assert!(from_slice(&v).eq(from_vec(v.clone())));
            prop_assert!(from_slice(&v).ne(from_slice(&v).chain(once(0))));
        }

        #[test]
        fn test_zip_length_is_minimum(
            a in prop::collection::vec(any::<u8>(), 0..32),
            b in prop::collection::vec(any::<u8>(), 0..32),
        ) {
            prop_assert_eq!(from_slice(&a).zip(from_slice(&b)).count(), a.len().min(b.len()));
        }
    }
}
