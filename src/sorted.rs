use std::iter::FromIterator;
use std::ops::{Deref, Range};

use itertools::Itertools;
use log::trace;

use crate::algo::{self, Bounds};
use crate::error::{Error, Result};

/// Index of the first element that is less than its predecessor, if any.
pub fn first_unsorted<T: Ord>(v: &[T]) -> Option<usize> {
    v.iter()
        .tuple_windows()
        .position(|(prev, next)| next < prev)
        .map(|i| i + 1)
}

pub fn is_sorted<T: Ord>(v: &[T]) -> bool {
    first_unsorted(v).is_none()
}

fn check_sorted<T: Ord>(v: &[T]) -> Result<()> {
    match first_unsorted(v) {
        Some(index) => {
            trace!("rejecting unsorted input of len {} at {}", v.len(), index);
            Err(Error::Unsorted { index })
        }
        None => Ok(()),
    }
}

pub trait Itemized {
    type Item;
}

/// A sequence known to be in non-decreasing order. All queries run in
/// O(log n).
pub trait Sorted: Itemized + Deref<Target = [<Self as Itemized>::Item]> {
    fn sorted_slice<'a>(&'a self, r: Range<usize>) -> SortedSlice<'a, Self::Item>
    where
        Self::Item: 'a,
    {
        SortedSlice(&self.deref()[r])
    }

    fn lower_bound(&self, target: &Self::Item) -> usize
    where
        Self::Item: Ord,
    {
        algo::lower_bound(self.deref(), target)
    }

    fn upper_bound(&self, target: &Self::Item) -> usize
    where
        Self::Item: Ord,
    {
        algo::upper_bound(self.deref(), target)
    }

    fn bounds(&self, target: &Self::Item) -> Bounds
    where
        Self::Item: Ord,
    {
        algo::bounds(self.deref(), target)
    }

    fn equal_range(&self, target: &Self::Item) -> Range<usize>
    where
        Self::Item: Ord,
    {
        algo::equal_range(self.deref(), target)
    }

    fn sorted_index(&self, target: &Self::Item) -> Option<usize>
    where
        Self::Item: Ord,
    {
        algo::sorted_index(self.deref(), target)
    }

    fn contains_item(&self, target: &Self::Item) -> bool
    where
        Self::Item: Ord,
    {
        self.sorted_index(target).is_some()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortedSlice<'a, T>(&'a [T]);

impl<'a, T> SortedSlice<'a, T> {
    pub fn new(v: &'a [T]) -> Result<Self>
    where
        T: Ord,
    {
        check_sorted(v)?;
        Ok(Self(v))
    }

    /// Wraps `v` without checking its order. Queries on an unsorted slice
    /// return unspecified (but in-range) indices.
    pub fn new_unchecked(v: &'a [T]) -> Self {
        Self(v)
    }

    pub fn as_slice(&self) -> &'a [T] {
        self.0
    }
}

impl<'a, T> Deref for SortedSlice<'a, T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        self.0
    }
}
impl<'a, T> Itemized for SortedSlice<'a, T> {
    type Item = T;
}
impl<'a, T> Sorted for SortedSlice<'a, T> {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortedVec<T>(Vec<T>);

impl<T> Default for SortedVec<T> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

impl<T> SortedVec<T> {
    /// Sorts `items` (stably) and takes ownership of them.
    pub fn new(mut items: Vec<T>) -> Self
    where
        T: Ord,
    {
        items.sort();
        Self(items)
    }

    pub fn try_from_vec(items: Vec<T>) -> Result<Self>
    where
        T: Ord,
    {
        check_sorted(&items)?;
        Ok(Self(items))
    }

    /// Inserts `item` after any equal elements and returns its index.
    pub fn insert(&mut self, item: T) -> usize
    where
        T: Ord,
    {
        let pos = algo::upper_bound(&self.0, &item);
        self.0.insert(pos, item);
        pos
    }

    /// Removes the leftmost element equal to `item`. Returns whether one was
    /// found.
    pub fn remove_one(&mut self, item: &T) -> bool
    where
        T: Ord,
    {
        match algo::sorted_index(&self.0, item) {
            Some(pos) => {
                self.0.remove(pos);
                true
            }
            None => false,
        }
    }

    pub fn merge<Other>(&self, other: &Other) -> Self
    where
        T: Ord + Clone,
        Other: Sorted<Item = T>,
    {
        Self(self.0.iter().merge(other.iter()).cloned().collect())
    }

    pub fn into_vec(self) -> Vec<T> {
        self.0
    }
}

impl<T> Deref for SortedVec<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T: Ord> FromIterator<T> for SortedVec<T> {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self::new(iter.into_iter().collect())
    }
}

impl<T> From<SortedVec<T>> for Vec<T> {
    fn from(sorted: SortedVec<T>) -> Self {
        sorted.0
    }
}

impl<'a, T> From<SortedSlice<'a, T>> for SortedVec<T>
where
    T: Clone,
{
    fn from(other: SortedSlice<'a, T>) -> Self {
        Self(other.0.to_vec())
    }
}

impl<T> Itemized for SortedVec<T> {
    type Item = T;
}
impl<T> Sorted for SortedVec<T> {}

#[cfg(test)]
mod tests {
    use super::*;

    use rand::distributions::{Distribution, Uniform};

    #[test]
    fn first_unsorted_test() {
        assert_eq!(first_unsorted(&[1, 2, 2, 3]), None);
        assert_eq!(first_unsorted(&[] as &[i32]), None);
        assert_eq!(first_unsorted(&[4]), None);
        assert_eq!(first_unsorted(&[1, 3, 2, 4]), Some(2));
        assert_eq!(first_unsorted(&[2, 1]), Some(1));
        assert!(is_sorted(&[1, 1, 1]));
        assert!(!is_sorted(&[1, 0]));
    }

    #[test]
    fn sorted_slice_test() {
        let v = vec![1, 2, 3, 4, 5];
        let s = SortedSlice::new(&v).unwrap();

        assert_eq!(s.lower_bound(&3), 2);
        assert_eq!(s.upper_bound(&3), 3);
        assert_eq!(s.bounds(&6), Bounds { lower: 5, upper: 5 });
        assert!(s.contains_item(&4));
        assert!(!s.contains_item(&0));

        let tail = s.sorted_slice(2..5);
        assert_eq!(tail.as_slice(), &[3, 4, 5]);
        assert_eq!(tail.lower_bound(&4), 1);
    }

    #[test]
    fn sorted_slice_rejects_unsorted_test() {
        let v = vec![1, 2, 4, 3];
        assert_eq!(SortedSlice::new(&v), Err(Error::Unsorted { index: 3 }));

        let unchecked = SortedSlice::new_unchecked(&v);
        assert!(unchecked.upper_bound(&3) <= v.len());
    }

    #[test]
    fn sorted_vec_test() {
        let mut s: SortedVec<i32> = vec![5, 1, 4, 1].into_iter().collect();
        assert_eq!(&*s, &[1, 1, 4, 5]);

        assert_eq!(s.insert(1), 2);
        assert_eq!(s.insert(0), 0);
        assert_eq!(s.insert(9), 6);
        assert_eq!(&*s, &[0, 1, 1, 1, 4, 5, 9]);
        assert_eq!(s.equal_range(&1), 1..4);

        assert!(s.remove_one(&1));
        assert!(!s.remove_one(&2));
        assert_eq!(Vec::from(s), vec![0, 1, 1, 4, 5, 9]);

        assert_eq!(
            SortedVec::try_from_vec(vec![3, 2]),
            Err(Error::Unsorted { index: 1 })
        );
    }

    #[test]
    fn merge_test() {
        let a = SortedVec::new(vec![1, 3, 5, 7]);
        let b = vec![2, 3, 8];
        let merged = a.merge(&SortedSlice::new(&b).unwrap());
        assert_eq!(merged.into_vec(), vec![1, 2, 3, 3, 5, 7, 8]);
    }

    #[test]
    fn random_update_test() {
        let mut rng = rand::thread_rng();
        let vals = Uniform::from(0..50);

        for _ in 0..200 {
            let mut s = SortedVec::<i32>::default();
            let mut good: Vec<i32> = Vec::new();

            for _ in 0..100 {
                let x = vals.sample(&mut rng);
                if x % 3 == 0 {
                    let removed = s.remove_one(&x);
                    match good.iter().position(|y| *y == x) {
                        Some(i) => {
                            good.remove(i);
                            assert!(removed);
                        }
                        None => assert!(!removed),
                    }
                } else {
                    s.insert(x);
                    good.push(x);
                }
                good.sort();
                assert!(is_sorted(&s));
                assert_eq!(&*s, good.as_slice());
            }
        }
    }
}
