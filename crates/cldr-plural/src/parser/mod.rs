//! Plural rule tokenizer and parser.
//!
//! This module turns CLDR plural rule text into a typed AST that can be
//! re-rendered by the [`compiler`](crate::compiler) backends or walked by
//! external code generators.

pub mod ast;
pub mod error;
mod rule;
mod token;

pub use ast::*;
pub use error::ParseError;
pub use rule::parse_rule;
pub use token::{Token, TokenKind, tokenize};
