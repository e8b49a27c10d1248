//! Lower/upper bound queries over sorted sequences, plus a few things built on
//! them: partitioning, sorted views and a vector-backed sorted map.

pub mod algo;
pub mod error;
pub mod listing;
pub mod partition;
pub mod sorted;
pub mod sorted_map;

pub use algo::{
    bounds, equal_range, lower_bound, lower_bound_by, lower_bound_by_key, sorted_index,
    upper_bound, upper_bound_by, upper_bound_by_key, Bounds,
};
pub use error::{Error, Result};
pub use listing::{report, Listing};
pub use partition::{is_partitioned, partition, partition_point};
pub use sorted::{first_unsorted, is_sorted, Itemized, Sorted, SortedSlice, SortedVec};
pub use sorted_map::SortedMap;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_vectors_test() {
        let v1 = vec![1, 2, 3, 4, 5];
        let v2 = vec![1, 2, 4, 5];

        assert_eq!(Listing(&v1).to_string(), "[ 1 2 3 4 5 ]");
        assert_eq!(bounds(&v1, &3), Bounds { lower: 2, upper: 3 });
        assert_eq!(bounds(&v2, &3), Bounds { lower: 2, upper: 2 });
    }

    #[test]
    fn partition_then_search_test() {
        let mut v: Vec<i32> = (0..100).rev().collect();
        let n = partition(&mut v, |x| *x < 30);
        assert_eq!(n, 30);

        v[..n].sort();
        let s = SortedSlice::new(&v[..n]).unwrap();
        assert_eq!(s.bounds(&12), Bounds { lower: 12, upper: 13 });
        assert_eq!(partition_point(&v[..n], |x| *x < 12), 12);
    }

    #[test]
    fn checked_entry_point_test() {
        let v = [3, 1, 2];
        match SortedSlice::new(&v) {
            Err(Error::Unsorted { index }) => assert_eq!(index, 1),
            other => panic!("expected Unsorted, got {:?}", other),
        }
    }
}
