//! Error results that can be returned from the css parser

use thiserror::Error;

/// Errors surfaced by the parser. Only `InvalidSyntax` and `BadNesting` are
/// produced by the block consumer; `UnknownOption` is part of the public error
/// set for callers configuring the surrounding scanner.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CssParseError {
    #[error("invalid syntax: {0}")]
    InvalidSyntax(String),
    #[error("maximum nesting depth exceeded")]
    BadNesting,
    #[error("unknown option: {0}")]
    UnknownOption(String),
}
