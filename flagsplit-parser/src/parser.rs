//! A parser for collecting flags and parameters from a token stream.

use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::lexer::IntoTokens;
use crate::scanner;

/// Defines the anomalies reported by strict parsing. Permissive parsing never fails and degrades
/// instead (see [`ParsedArgs::parse`]).
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[non_exhaustive]
pub enum Error {
    /// The flag has no name once its dashes are stripped (e.g. a lone `-` or `--=value`).
    #[error("malformed argument at token {position}")]
    MalformedArgument {
        /// Index of the offending token.
        position: usize,
    },

    /// The flag value holds a single quote character, so it cannot be unquoted.
    #[error("unbalanced quote in value at token {position}")]
    UnbalancedQuote {
        /// Index of the token starting the flag.
        position: usize,
    },

    /// The flag value holds another `=`, so the flag swallowed every token after it.
    #[error("embedded `=` in value at token {position}")]
    EmbeddedEquals {
        /// Index of the token starting the flag.
        position: usize,
    },
}

/// Defines the result of argument parsing: the flags with their optional value, and the
/// positional parameters in order.
///
/// A flag seen more than once keeps its last value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParsedArgs {
    args: BTreeMap<String, Option<String>>,
    params: Vec<String>,
}

impl ParsedArgs {
    /// Parse either a raw command line or an already split token sequence.
    ///
    /// This never fails. A flag without a name (e.g. a lone `-`) is kept as a parameter, and a
    /// value with a lone quote is kept unstripped.
    pub fn parse<'a>(input: impl IntoTokens<'a>) -> Self {
        Self::assemble(&input.into_tokens()).0
    }

    /// Try to parse the input, failing on the first anomaly instead of degrading.
    pub fn try_parse<'a>(input: impl IntoTokens<'a>) -> Result<Self, Error> {
        match Self::assemble(&input.into_tokens()) {
            (_, Some(err)) => Err(err),
            (out, None) => Ok(out),
        }
    }

    /// Create from already known flags and parameters.
    pub fn from_parts<'k>(
        args: impl IntoIterator<Item = (&'k str, Option<&'k str>)>,
        params: impl IntoIterator<Item = &'k str>,
    ) -> Self {
        ParsedArgs {
            args: args
                .into_iter()
                .map(|(name, value)| (name.to_string(), value.map(ToString::to_string)))
                .collect(),
            params: params.into_iter().map(ToString::to_string).collect(),
        }
    }

    /// Retrieve the flags, keyed by name without dashes.
    #[inline(always)]
    pub fn args(&self) -> &BTreeMap<String, Option<String>> {
        &self.args
    }

    /// Retrieve the positional parameters.
    #[inline(always)]
    pub fn params(&self) -> &[String] {
        &self.params
    }

    /// Check if the flag has been given, with or without a value.
    #[inline(always)]
    pub fn contains(&self, name: &str) -> bool {
        self.args.contains_key(name)
    }

    /// Get the value of the given flag.
    ///
    /// `Some(None)` means the flag is present without value, `None` that it is absent.
    pub fn get(&self, name: &str) -> Option<Option<&str>> {
        self.args.get(name).map(Option::as_deref)
    }

    /// Check if neither flags nor parameters were found.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.args.is_empty() && self.params.is_empty()
    }

    fn assemble(tokens: &[&str]) -> (Self, Option<Error>) {
        let mut out = Self::default();
        let mut anomaly = None;
        let mut cursor = 0;

        while let Some(raw) = tokens.get(cursor) {
            let token = raw.trim();

            // Separator, the remaining tokens are parameters, verbatim.
            if token == "--" {
                out.params
                    .extend(tokens[cursor + 1..].iter().map(ToString::to_string));
                break;
            }

            let dashes = if token.starts_with("--") {
                2
            } else if token.starts_with('-') && token.len() > 1 {
                1
            } else {
                0
            };

            if dashes == 0 {
                if token == "-" {
                    log::debug!("lone dash at token {cursor}, taken as parameter");
                    anomaly.get_or_insert(Error::MalformedArgument { position: cursor });
                }

                out.params.push(raw.to_string());
                cursor += 1;
                continue;
            }

            let window = scanner::scan_window(tokens, cursor);
            let name = window.name.get(dashes..).unwrap_or_default();

            if name.is_empty() {
                let consumed = tokens.get(cursor..window.next).unwrap_or_default();

                log::debug!("nameless flag {consumed:?}, taken as parameters");
                anomaly.get_or_insert(Error::MalformedArgument { position: cursor });
                out.params.extend(consumed.iter().map(ToString::to_string));
            } else {
                if window.unbalanced {
                    log::debug!("unbalanced quote in value of {name}, kept as is");
                    anomaly.get_or_insert(Error::UnbalancedQuote { position: cursor });
                }

                if window.embedded_equals {
                    log::debug!("embedded `=` in value of {name}, tokens {cursor}.. absorbed");
                    anomaly.get_or_insert(Error::EmbeddedEquals { position: cursor });
                }

                if dashes == 2 {
                    out.args.insert(name.to_string(), window.value);
                } else {
                    // Cluster, every flag but the last one is bare.
                    let mut flags = name.chars();
                    let last = flags.next_back();

                    for flag in flags {
                        out.args.insert(flag.to_string(), None);
                    }

                    if let Some(last) = last {
                        out.args.insert(last.to_string(), window.value);
                    }
                }
            }

            cursor = window.next;
        }

        (out, anomaly)
    }
}

/// Parse either a raw command line or an already split token sequence.
#[inline(always)]
pub fn parse<'a>(input: impl IntoTokens<'a>) -> ParsedArgs {
    ParsedArgs::parse(input)
}

/// Try to parse the input, failing on the first anomaly.
#[inline(always)]
pub fn try_parse<'a>(input: impl IntoTokens<'a>) -> Result<ParsedArgs, Error> {
    ParsedArgs::try_parse(input)
}
