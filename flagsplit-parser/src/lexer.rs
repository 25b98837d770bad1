//! A lexer for splitting a command line into tokens.

use alloc::string::String;
use alloc::vec::Vec;

/// Defines a `Lexer` that is responsible for streaming tokens out of a raw command line.
///
/// At each position, a double-quoted span wins over a bare token: `"bbb ccc"` is one token with
/// its quotes stripped. Anything else is a maximal run of non-whitespace characters, returned
/// verbatim. Escapes are not recognized, so `\"` is just two ordinary characters.
///
/// Only ASCII whitespace separates tokens, so a no-break space stays inside its token.
///
/// A lexer acts like a forward iterator. Tokens borrow from the input.
#[derive(Clone, Debug)]
pub struct Lexer<'a> {
    input: &'a str,
    cursor: usize,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer from the command line input.
    pub fn new(input: &'a str) -> Self {
        Lexer { input, cursor: 0 }
    }

    /// Retrieve the part of the input that has not been consumed yet.
    #[inline(always)]
    pub fn remainder(&self) -> &'a str {
        &self.input[self.cursor..]
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let rest = self
            .remainder()
            .trim_start_matches(|c: char| c.is_ascii_whitespace());
        let offset = self.input.len() - rest.len();

        if rest.is_empty() {
            self.cursor = self.input.len();
            return None;
        }

        // Quoted span, only if it gets closed later on.
        if let Some(body) = rest.strip_prefix('"') {
            if let Some(end) = body.find('"') {
                self.cursor = offset + end + 2;
                return Some(&body[..end]);
            }
        }

        let end = rest.find(|c: char| c.is_ascii_whitespace()).unwrap_or(rest.len());
        self.cursor = offset + end;

        Some(&rest[..end])
    }
}

/// Split the input into its tokens.
#[inline(always)]
pub fn tokenize(input: &str) -> Vec<&str> {
    Lexer::new(input).collect()
}

/// Conversion into the token sequence consumed by the parser.
///
/// Text is run through the [`Lexer`], while an already split sequence (e.g. `argv`) is taken
/// as is.
pub trait IntoTokens<'a> {
    /// Convert into tokens.
    fn into_tokens(self) -> Vec<&'a str>;
}

impl<'a> IntoTokens<'a> for &'a str {
    fn into_tokens(self) -> Vec<&'a str> {
        tokenize(self)
    }
}

impl<'a> IntoTokens<'a> for &'a String {
    fn into_tokens(self) -> Vec<&'a str> {
        tokenize(self)
    }
}

impl<'a, S: AsRef<str>> IntoTokens<'a> for &'a [S] {
    fn into_tokens(self) -> Vec<&'a str> {
        self.iter().map(|x| x.as_ref()).collect()
    }
}

impl<'a, S: AsRef<str>, const N: usize> IntoTokens<'a> for &'a [S; N] {
    fn into_tokens(self) -> Vec<&'a str> {
        self.as_slice().into_tokens()
    }
}

impl<'a, S: AsRef<str>> IntoTokens<'a> for &'a Vec<S> {
    fn into_tokens(self) -> Vec<&'a str> {
        self.as_slice().into_tokens()
    }
}
