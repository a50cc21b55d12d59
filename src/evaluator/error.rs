//! Error types for the `evaluator` module.

use std::result;

use thiserror::Error;

use crate::object::{self, ObjectType};
use crate::token::Token;

/// A Result type specialized use with for an Error.
pub type Result<T> = result::Result<T, Error>;

/// Specifies the runtime errors which may occur while evaluating a program.
/// Each one becomes an `Object::Error` carrying its message.
#[derive(Debug, Error, PartialEq)]
pub enum Error {
    #[error("unknown operator: {operator}{right}")]
    UnknownPrefixOperator { operator: Token, right: ObjectType },
    #[error("unknown operator: {left} {operator} {right}")]
    UnknownInfixOperator {
        left: ObjectType,
        operator: Token,
        right: ObjectType,
    },
    #[error("type mismatch: {left} {operator} {right}")]
    TypeMismatch {
        left: ObjectType,
        operator: Token,
        right: ObjectType,
    },
    #[error("division by zero")]
    DivisionByZero,
    #[error("identifier not found: {0}")]
    UnknownIdentifier(String),
    #[error("not a function: {0}")]
    NotAFunction(ObjectType),
    #[error("index operator not supported: {0}")]
    IndexNotSupported(ObjectType),
    #[error("unusable as hash key: {0}")]
    UnusableHashKey(ObjectType),
    #[error("wrong number of arguments to quote. got={0}, want=1")]
    QuoteArguments(usize),
    #[error("unquote produced unsupported value: {0}")]
    UnquoteUnsupported(ObjectType),
    #[error("macro literals may only be bound by a top-level let statement")]
    MacroLiteral,
    #[error(transparent)]
    Builtin(#[from] object::Error),
}

/// A fatal error produced while expanding a macro call.
#[derive(Debug, Error, PartialEq)]
pub enum MacroError {
    #[error("macro {name} must return a quoted expression, got {got}")]
    NotQuote { name: String, got: ObjectType },
    #[error("evaluating macro {name}: {err}")]
    Evaluation {
        name: String,
        #[source]
        err: Error,
    },
}
