use thiserror::Error;

use crate::cuts::Edge;

/// What is wrong with a rejected input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    MissingColon,
    MultipleColons,
    InvalidSource,
    NoTargets,
    SelfLoop,
}

impl std::fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let reason = match self {
            ParseErrorKind::MissingColon => "expected `<label>: <label> ...`, found no colon",
            ParseErrorKind::MultipleColons => "more than one colon",
            ParseErrorKind::InvalidSource => "source must be a single non-empty label",
            ParseErrorKind::NoTargets => "no target labels after the colon",
            ParseErrorKind::SelfLoop => "component wired to itself",
        };
        f.write_str(reason)
    }
}

/// A line that does not follow the `<label>: <label> <label> ...` grammar.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("malformed line {line} ({kind}): {content:?}")]
pub struct ParseError {
    /// 1-based line number.
    pub line: usize,
    pub content: String,
    pub kind: ParseErrorKind,
}

impl ParseError {
    pub(crate) fn new(line: usize, content: &str, kind: ParseErrorKind) -> Self {
        Self {
            line,
            content: content.to_string(),
            kind,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CutError {
    #[error("invalid estimator configuration: {0}")]
    InvalidConfig(String),

    /// Removing the selected edges left the graph in one piece.
    #[error("no cut found: removing {removed:?} still reaches {reached} of {total} nodes")]
    NoCutFound {
        reached: usize,
        total: usize,
        removed: Vec<Edge>,
    },
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Cut(#[from] CutError),
}

pub type Result<T> = std::result::Result<T, Error>;
