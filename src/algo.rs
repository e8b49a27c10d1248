use std::cmp::Ordering;
use std::ops::Range;

use crate::partition::partition_point;

/// Lower and upper insertion points of a target within a sorted sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bounds {
    pub lower: usize,
    pub upper: usize,
}

impl Bounds {
    pub fn range(&self) -> Range<usize> {
        self.lower..self.upper
    }

    /// Number of elements equal to the target.
    pub fn len(&self) -> usize {
        self.upper - self.lower
    }

    pub fn is_empty(&self) -> bool {
        self.lower == self.upper
    }
}

impl From<Bounds> for Range<usize> {
    fn from(bounds: Bounds) -> Self {
        bounds.range()
    }
}

/// Index of the first element of `v` that is not less than `target`, or
/// `v.len()` if there is none.
///
/// `v` must be sorted in ascending order. This is not checked; see
/// [`SortedSlice::new`](crate::sorted::SortedSlice::new) for a validating entry
/// point.
pub fn lower_bound<T: Ord>(v: &[T], target: &T) -> usize {
    lower_bound_by(v, target, |a, b| a < b)
}

/// Index of the first element of `v` that is greater than `target`, or
/// `v.len()` if there is none.
pub fn upper_bound<T: Ord>(v: &[T], target: &T) -> usize {
    upper_bound_by(v, target, |a, b| a < b)
}

/// Both bounds of `target` in `v`; `upper - lower` counts the equal elements.
pub fn bounds<T: Ord>(v: &[T], target: &T) -> Bounds {
    Bounds {
        lower: lower_bound(v, target),
        upper: upper_bound(v, target),
    }
}

/// Like [`lower_bound`], with `is_less` as the (strict) ordering `v` is sorted by.
pub fn lower_bound_by<T, F>(v: &[T], target: &T, mut is_less: F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    partition_point(v, |x| is_less(x, target))
}

/// Like [`upper_bound`], with `is_less` as the (strict) ordering `v` is sorted by.
pub fn upper_bound_by<T, F>(v: &[T], target: &T, mut is_less: F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    partition_point(v, |x| !is_less(target, x))
}

pub fn lower_bound_by_key<'a, B, F, T: 'a>(v: &'a [T], b: &B, mut f: F) -> usize
where
    B: Ord,
    F: FnMut(&'a T) -> B,
{
    partition_point(v, |x| f(x) < *b)
}

pub fn upper_bound_by_key<'a, B, F, T: 'a>(v: &'a [T], b: &B, mut f: F) -> usize
where
    B: Ord,
    F: FnMut(&'a T) -> B,
{
    partition_point(v, |x| f(x) <= *b)
}

/// Range of indices whose elements equal `target`. When `target` is absent the
/// range is empty and starts at its insertion point.
///
/// Equivalent to `bounds(v, target).range()`, but the halving stops at the
/// first match and only the two sub-slices around it are searched further.
pub fn equal_range<T: Ord>(v: &[T], target: &T) -> Range<usize> {
    let mut first = 0;
    let mut len = v.len();

    while len > 0 {
        let half = len / 2;
        let middle = first + half;

        match v[middle].cmp(target) {
            Ordering::Less => {
                first = middle + 1;
                len -= half + 1;
            }
            Ordering::Greater => {
                len = half;
            }
            Ordering::Equal => {
                let lower = first + lower_bound(&v[first..middle], target);
                let last = first + len;
                let upper = middle + 1 + upper_bound(&v[(middle + 1)..last], target);
                return lower..upper;
            }
        }
    }

    first..first
}

/// Position of an element equal to `target` (the leftmost one), if any.
pub fn sorted_index<T: Ord>(v: &[T], target: &T) -> Option<usize> {
    let i = lower_bound(v, target);
    if i < v.len() && v[i] == *target {
        Some(i)
    } else {
        None
    }
}
