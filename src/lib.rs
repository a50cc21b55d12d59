//! A Rust implementation of the Monkey programming language from
//! <https://interpreterbook.com/>, evaluated by walking its syntax tree and
//! extended with quote/unquote macros.

pub mod ast;
pub mod evaluator;
pub mod lexer;
pub mod object;
pub mod parser;
pub mod token;
