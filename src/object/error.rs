//! Error types for the `object` module.

use std::result;

use thiserror::Error;

use crate::object::{Builtin, ObjectType};

/// A Result type specialized use with for an Error.
pub type Result<T> = result::Result<T, Error>;

/// Describes the ways a built-in function can reject its arguments.
#[derive(Debug, Error, PartialEq)]
pub enum Error {
    #[error("wrong number of arguments. got={got}, want={want}")]
    WrongNumberArguments { got: usize, want: usize },
    #[error("argument to `{0}` not supported, got {1}")]
    ArgumentNotSupported(Builtin, ObjectType),
    #[error("argument to `{0}` must be Array, got {1}")]
    ArgumentNotArray(Builtin, ObjectType),
}
