//! Error type for index based operations.

use thiserror::Error;

/// Result type for fallible [`ArrayList`](crate::ArrayList) operations.
pub type Result<T> = core::result::Result<T, IndexOutOfRange>;

/// An index argument fell outside its valid range.
///
/// Carries the offending index and the list's length at the time of the check.
///
/// # Examples
///
/// ```
/// use array_list::ArrayList;
///
/// let list: ArrayList<u8> = ArrayList::new();
/// let err = list.get(-1).unwrap_err();
/// assert_eq!(err.to_string(), "Index: -1, Size: 0");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[error("Index: {index}, Size: {size}")]
pub struct IndexOutOfRange {
    /// The rejected index.
    pub index: isize,
    /// Number of elements in the list when the index was rejected.
    pub size: usize,
}
