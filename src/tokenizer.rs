//! Shell-like quoted-string tokenization
//!
//! This module splits a command-line style string into tokens, honoring a
//! caller-supplied set of single-character quote delimiters. It is
//! independent of the property store and is typically applied to expanded
//! command strings to obtain argv-like pieces.

use crate::error::{Position, TokenizeError};
use smallvec::SmallVec;

/// Ordered sequence of tokens produced by [`split_quoted_string`]
///
/// Small argument lists (up to 8 tokens) are stored inline without heap
/// allocation.
pub type TokenList = SmallVec<[String; 8]>;

/// Splits `input` into shell-like tokens.
///
/// Every character in `quote_chars` is a valid quote delimiter; a quoted
/// span opened by one of them is closed only by that exact same character
/// (matched as a whole code point, so multi-byte delimiters work). Quote
/// characters are stripped from the emitted tokens, and quoted and unquoted
/// runs butting against each other concatenate into a single token.
///
/// With `keep_empty` set, every separator outside a quote produces a token
/// boundary, so consecutive separators and leading/trailing separators
/// yield empty tokens; otherwise tokens that are empty (or contain only
/// whitespace from a quoted span) are dropped.
///
/// Fails with [`TokenizeError::UnterminatedQuote`] if the input ends while
/// a quoted span is still open.
///
/// ```
/// use props_map::split_quoted_string;
///
/// let tokens = split_quoted_string(r#"this is a "test of quoting""#, "\"", false)?;
/// assert_eq!(tokens.as_slice(), ["this", "is", "a", "test of quoting"]);
/// # Ok::<(), props_map::TokenizeError>(())
/// ```
pub fn split_quoted_string(
    input: &str,
    quote_chars: &str,
    keep_empty: bool,
) -> Result<TokenList, TokenizeError> {
    QuotedSplitter::new(input, quote_chars, keep_empty).split()
}

/// Single-pass character scanner behind [`split_quoted_string`]
///
/// Holds one state bit (the currently open quote character, if any) plus
/// the position where that quote was opened, for error reporting.
struct QuotedSplitter<'a> {
    input: &'a str,
    quote_chars: &'a str,
    keep_empty: bool,
    /// Open quote character and the position it was opened at
    active_quote: Option<(char, Position)>,
    position: Position,
    current: String,
    tokens: TokenList,
}

impl<'a> QuotedSplitter<'a> {
    fn new(input: &'a str, quote_chars: &'a str, keep_empty: bool) -> Self {
        Self {
            input,
            quote_chars,
            keep_empty,
            active_quote: None,
            position: Position::new(),
            current: String::new(),
            tokens: TokenList::new(),
        }
    }

    fn split(mut self) -> Result<TokenList, TokenizeError> {
        for c in self.input.chars() {
            match self.active_quote {
                None => {
                    if self.quote_chars.contains(c) {
                        self.active_quote = Some((c, self.position));
                    } else if is_blank(c) {
                        self.flush_token();
                    } else {
                        self.current.push(c);
                    }
                }
                Some((quote, _)) => {
                    if c == quote {
                        self.active_quote = None;
                    } else {
                        self.current.push(c);
                    }
                }
            }
            self.position.advance(c);
        }

        if let Some((_, position)) = self.active_quote {
            return Err(TokenizeError::UnterminatedQuote { position });
        }

        self.flush_token();
        Ok(self.tokens)
    }

    /// Ends the current token and starts a new one
    fn flush_token(&mut self) {
        if self.keep_empty || !self.current.trim().is_empty() {
            self.tokens.push(std::mem::take(&mut self.current));
        } else {
            self.current.clear();
        }
    }
}

/// Token separators outside quotes: space and tab
#[inline]
fn is_blank(c: char) -> bool {
    c == ' ' || c == '\t'
}
