use lib::input::{Input, InputError};
use thiserror::Error;

use crate::{Operation, Worry};

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error("failed to read input")]
    Io(#[from] std::io::Error),
    #[error("no actors to simulate")]
    NoActors,
    #[error("number of rounds must be at least 1")]
    NoRounds,
    #[error("actor at index {actor} has a zero divisor")]
    ZeroDivisor { actor: usize },
    #[error("{name} must be positive, got {value}")]
    NonPositive { name: &'static str, value: Worry },
    #[error("common multiple of all divisors overflows")]
    CommonMultipleOverflow,
    #[error("actor at index {actor} threw to {target}, but destinations must be between 0 and {} inclusive", .len - 1)]
    BadTarget {
        actor: usize,
        target: usize,
        len: usize,
    },
    #[error("actor at index {actor} overflowed computing `{operation}` where old = {worry}")]
    Overflow {
        actor: usize,
        worry: Worry,
        operation: Operation,
    },
}

impl Error {
    /// Zero-based line and column in the input the error refers to, if any.
    pub fn position(&self) -> Option<(usize, usize)> {
        match self {
            Error::Parse(error) => Some((error.line, error.column)),
            _ => None,
        }
    }
}

/// Error raised when an actor block can't be parsed.
#[derive(Debug, Error)]
#[error("line {}: `{text}`: {kind}", .line + 1)]
pub struct ParseError {
    line: usize,
    column: usize,
    text: String,
    kind: ParseErrorKind,
}

impl ParseError {
    pub(crate) fn new(line: usize, input: Input<'_>, kind: ParseErrorKind) -> Self {
        let column = match &kind {
            ParseErrorKind::Input(error) => error.span().start,
            _ => input.index(),
        };

        Self {
            line,
            column,
            text: input.as_bstr().to_string(),
            kind,
        }
    }

    /// Zero-based line number of the offending line.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Zero-based column in the offending line.
    pub fn column(&self) -> usize {
        self.column
    }

    /// The offending line, without surrounding whitespace.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn kind(&self) -> &ParseErrorKind {
        &self.kind
    }
}

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ParseErrorKind {
    #[error("expected actor id line to have an id value")]
    MissingId,
    #[error("actor id must be a non-negative integer, got `{0}`")]
    BadId(String),
    #[error("line must contain worry levels")]
    MissingItems,
    #[error("test condition must contain a non-zero divisor")]
    ZeroDivisor,
    #[error("destination must be a non-negative integer, got {0}")]
    NegativeTarget(i64),
    #[error("destination {0} is out of range")]
    TargetRange(i64),
    #[error("unexpected trailing input `{0}`")]
    Trailing(String),
    #[error("duplicate `{0}` line")]
    Duplicate(&'static str),
    #[error("actor is missing a `{0}` line")]
    MissingField(&'static str),
    #[error("no processing logic exists for line")]
    UnrecognizedLine,
    #[error(transparent)]
    Input(#[from] InputError),
}
