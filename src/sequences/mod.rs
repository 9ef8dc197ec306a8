//! One-level sequence concatenation.
//!
//! # Architecture Note
//! The source API is variadic: `concatenate(a, b, c, ...)`. Rust functions
//! are not variadic, so the recipe splits the surface in two:
//!
//! - [`concatenate`], the function, takes any iterable of owned sequences and
//!   flattens them one level. This is the testable core.
//! - [`concatenate!`](crate::concatenate), the macro, restores the variadic
//!   call shape by collecting its arguments into a `Vec` and handing them to
//!   the function. Zero arguments is a valid call and yields an empty vector.
//!
//! Flattening is one level only: elements that are themselves sequences pass
//! through untouched.

/// Flattens the given sequences into one, preserving argument order and each
/// sequence's internal element order.
pub fn concatenate<T>(sequences: impl IntoIterator<Item = Vec<T>>) -> Vec<T> {
    sequences.into_iter().flatten().collect()
}

/// Variadic front-end for [`concatenate`].
///
/// ```
/// use utility_recipe::concatenate;
///
/// let merged = concatenate![vec![1, 2], vec![3], vec![4, 5]];
/// assert_eq!(merged, vec![1, 2, 3, 4, 5]);
///
/// let empty: Vec<i32> = concatenate![];
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! concatenate {
    () => {
        ::std::vec::Vec::new()
    };
    ($($seq:expr),+ $(,)?) => {
        $crate::sequences::concatenate(vec![$($seq),+])
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flattens_in_argument_order() {
        let merged = concatenate(vec![vec![1, 2], vec![3], vec![4, 5]]);
        assert_eq!(merged, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn zero_sequences_yield_empty() {
        let merged: Vec<i32> = concatenate(Vec::<Vec<i32>>::new());
        assert!(merged.is_empty());
    }

    #[test]
    fn empty_inner_sequences_are_skipped() {
        let merged = concatenate(vec![vec![], vec![1], vec![]]);
        assert_eq!(merged, vec![1]);
    }

    #[test]
    fn flattening_is_one_level_only() {
        let nested = concatenate(vec![vec![vec![1, 2]], vec![vec![3]]]);
        assert_eq!(nested, vec![vec![1, 2], vec![3]]);
    }

    #[test]
    fn macro_matches_the_function() {
        let merged = concatenate![vec!["a"], vec!["b", "c"]];
        assert_eq!(merged, vec!["a", "b", "c"]);

        let empty: Vec<&str> = concatenate![];
        assert!(empty.is_empty());
    }
}
