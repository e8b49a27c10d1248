use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// `index` is the first position holding an element smaller than the one
    /// before it.
    #[error("sequence is not sorted: element {index} is less than its predecessor")]
    Unsorted { index: usize },

    #[error("could not parse {input:?} as a list of integers")]
    Parse { input: String },
}
