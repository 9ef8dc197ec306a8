//! Text case formatting.
//!
//! The smallest recipe in the crate: a pure function that uppercases or
//! lowercases a string.
//!
//! # Architecture Note
//! The source API takes a boolean flag defaulting to "uppercase". Rust has no
//! default arguments, so the flag becomes a [`Case`] enum with a `Default`
//! implementation. Callers that want the default spell it
//! `format(input, Case::default())` or use [`format_default`]; callers that
//! pass a literal `Case::Upper`/`Case::Lower` get a self-documenting call
//! site instead of a bare `true`/`false`.

use serde::{Deserialize, Serialize};

/// Which case to convert to. Defaults to [`Case::Upper`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Case {
    #[default]
    Upper,
    Lower,
}

/// Returns `input` converted to the requested case.
///
/// Total over all string input, the empty string included. Pure: the input is
/// borrowed, never modified.
pub fn format(input: &str, case: Case) -> String {
    match case {
        Case::Upper => input.to_uppercase(),
        Case::Lower => input.to_lowercase(),
    }
}

/// [`format`] with the default case (uppercase).
pub fn format_default(input: &str) -> String {
    format(input, Case::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uppercases_by_default() {
        assert_eq!(format_default("abc"), "ABC");
        assert_eq!(format("abc", Case::default()), "ABC");
    }

    #[test]
    fn lowercases_on_request() {
        assert_eq!(format("ABC", Case::Lower), "abc");
    }

    #[test]
    fn empty_input_is_accepted() {
        assert_eq!(format("", Case::Upper), "");
        assert_eq!(format("", Case::Lower), "");
    }

    #[test]
    fn mixed_input_round_trips() {
        assert_eq!(format("RuSt", Case::Upper), "RUST");
        assert_eq!(format("RuSt", Case::Lower), "rust");
    }
}
