//! Error types and position tracking for property parsing
//!
//! This module provides the error families returned by the loader and the
//! quoted-string tokenizer, plus the [`Position`] type used to report where
//! a tokenization error occurred.

use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Represents a position in the source text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    /// Line number (1-based)
    pub line: usize,
    /// Column number (1-based)
    pub column: usize,
    /// Byte offset from start of input (0-based)
    pub offset: usize,
}

impl Position {
    /// Creates a new position at the start of input
    pub fn new() -> Self {
        Self {
            line: 1,
            column: 1,
            offset: 0,
        }
    }

    /// Advances the position by one character
    pub fn advance(&mut self, c: char) {
        match c {
            '\n' => {
                self.line += 1;
                self.column = 1;
            }
            _ => {
                self.column += 1;
            }
        }
        self.offset += c.len_utf8();
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Errors produced while loading properties from a file or a slice of lines
#[derive(Debug, Error)]
pub enum LoadError {
    /// The properties file could not be read
    #[error("error reading file '{}': {source}", .path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A non-empty, non-comment line did not split into `key=value`
    #[error("invalid line format ({}:{line}), should be 'key=value'", .path.display())]
    LineFormat { path: PathBuf, line: usize },

    /// Slice variant of [`LoadError::LineFormat`], reported by index
    #[error("invalid line format (index:{index}), should be 'key=value'")]
    SliceFormat { index: usize },
}

/// Errors produced by the quoted-string tokenizer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenizeError {
    /// Input ended while a quoted span was still open
    #[error("unterminated quoted string starting at {position}")]
    UnterminatedQuote { position: Position },
}

/// Main error type for property map operations
#[derive(Debug, Error)]
pub enum PropsError {
    /// Loading or line-parsing error
    #[error("Load error: {0}")]
    Load(#[from] LoadError),

    /// Tokenization error
    #[error("Tokenize error: {0}")]
    Tokenize(#[from] TokenizeError),
}
