//! Error types for the `parser` module.

use thiserror::Error;

/// Specifies the different classes of syntax errors which may occur. The
/// `Parser` records these and keeps going rather than stopping at the first.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum Error {
    #[error("expected next token to be {want}, got {got} instead")]
    UnexpectedToken {
        want: &'static str,
        got: &'static str,
    },
    #[error("no prefix parse function for {0} found")]
    NoPrefixParser(&'static str),
    #[error(r#"could not parse "{0}" as integer"#)]
    IllegalInteger(String),
}
