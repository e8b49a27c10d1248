use std::fmt;

use crate::algo::bounds;

/// Displays a sequence as `[ a b c ]`.
pub struct Listing<'a, T>(pub &'a [T]);

impl<'a, T> fmt::Display for Listing<'a, T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[ ")?;
        for x in self.0 {
            write!(f, "{} ", x)?;
        }
        write!(f, "]")
    }
}

pub fn report<T: Ord>(v: &[T], target: &T) -> String {
    let b = bounds(v, target);
    format!("Lower: {}\nUpper: {}", b.lower, b.upper)
}
