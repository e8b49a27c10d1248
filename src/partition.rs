/// Returns the index of the first element of `v` for which `pred` is false.
///
/// `v` must already be partitioned by `pred`: every element satisfying `pred`
/// precedes every element that does not. Otherwise the returned index is some
/// position in `0..=v.len()`, but which one is unspecified.
pub fn partition_point<'a, T, P>(v: &'a [T], mut pred: P) -> usize
where
    P: FnMut(&'a T) -> bool,
{
    let mut first = 0;
    let mut len = v.len();

    while len > 0 {
        let half = len / 2;
        let middle = first + half;

        if pred(&v[middle]) {
            first = middle + 1;
            len -= half + 1;
        } else {
            len = half;
        }
    }

    first
}

/// Reorders `v` so that all elements satisfying `pred` come first, and returns
/// how many there are. Not stable.
pub fn partition<T, P>(v: &mut [T], mut pred: P) -> usize
where
    P: FnMut(&T) -> bool,
{
    let mut lo = 0;
    let mut hi = v.len();

    // At the top of the loop:
    //  - pred(v[i]) for i in 0..lo
    //  - !pred(v[i]) for i in hi..v.len()
    //
    loop {
        while lo < hi && pred(&v[lo]) {
            lo += 1;
        }
        if lo == hi {
            return lo;
        }

        hi -= 1;
        while lo < hi && !pred(&v[hi]) {
            hi -= 1;
        }
        if lo == hi {
            return lo;
        }

        v.swap(lo, hi);
        lo += 1;
    }
}

/// Whether no element satisfying `pred` follows one that does not. O(n).
pub fn is_partitioned<T, P>(v: &[T], mut pred: P) -> bool
where
    P: FnMut(&T) -> bool,
{
    let mut iter = v.iter();
    iter.all(|x| pred(x)) || iter.all(|x| !pred(x))
}
