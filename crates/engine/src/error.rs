// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;

use crate::pattern::ParserError;

/// Wordsieve error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Pattern source failed to parse.
    #[error(transparent)]
    Parse(#[from] ParserError),

    /// Two blacklisted terms share an id.
    #[error("duplicate blacklisted term id {id}")]
    DuplicateTermId { id: i64 },

    /// A blacklisted term has no pattern nodes at all.
    #[error("blacklisted term {id} has an empty pattern")]
    EmptyPattern { id: i64 },

    /// A blacklisted term simplifies to a pattern that matches the empty string.
    #[error("blacklisted term {id} can match the empty string (pattern `{pattern}`)")]
    MatchesEmptyString { id: i64, pattern: String },

    /// A whitelisted term is empty, or becomes empty after transformation.
    #[error("whitelisted term {index} is empty")]
    EmptyWhitelistTerm { index: usize },

    /// A pattern could not be compiled into a regular expression.
    #[error("invalid regex for blacklisted term {id}: {message}")]
    InvalidRegex { id: i64, message: String },

    /// The backtracking regex engine gave up while scanning input, for
    /// example on hitting its backtrack limit.
    #[error("regex scan failed for blacklisted term {id}: {message}")]
    RegexScan { id: i64, message: String },

    /// Configuration document not found or invalid.
    #[error("config error: {message}")]
    Config {
        message: String,
        path: Option<PathBuf>,
    },

    /// File I/O error while loading configuration.
    #[error("io error: {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Too many forked traversals were alive at once during a scan.
    #[error(
        "forked traversal limit of {limit} exceeded at position {position} \
         ({pattern_count} effective patterns); raise the limit or use fewer wildcard patterns"
    )]
    ForkedTraversalLimitExceeded {
        input: String,
        position: usize,
        pattern_count: usize,
        limit: usize,
    },
}

/// Result type using wordsieve Error
pub type Result<T> = std::result::Result<T, Error>;

/// Broad classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed pattern source.
    Syntax,
    /// Rejected matcher inputs or configuration; raised before any scan.
    Configuration,
    /// Input-dependent failure raised mid-scan.
    ResourceLimit,
}

impl From<&Error> for ErrorKind {
    fn from(err: &Error) -> Self {
        match err {
            Error::Parse(_) => ErrorKind::Syntax,
            Error::DuplicateTermId { .. }
            | Error::EmptyPattern { .. }
            | Error::MatchesEmptyString { .. }
            | Error::EmptyWhitelistTerm { .. }
            | Error::InvalidRegex { .. }
            | Error::Config { .. }
            | Error::Io { .. } => ErrorKind::Configuration,
            Error::ForkedTraversalLimitExceeded { .. } | Error::RegexScan { .. } => {
                ErrorKind::ResourceLimit
            }
        }
    }
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::from(self)
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
