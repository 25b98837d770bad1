//! A scanner merging a flag token with its value, which may span several tokens.
//!
//! Both `-name=value` and `-name`, `=`, `value` resolve to the same unit, and so does a quoted
//! value cut in pieces by whitespace (e.g. `-name="multi`, `part`, `value"`).

use alloc::string::String;
use alloc::vec::Vec;

/// Defines one `name[=value]` unit read from the token sequence.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Window {
    /// The flag name, leading dashes included.
    pub name: String,

    /// The value with its quotes stripped, if any.
    pub value: Option<String>,

    /// Index of the first token after the window.
    pub next: usize,

    /// Set if the value holds a lone quote, in which case it is left unstripped.
    pub unbalanced: bool,

    /// Set if the buffer holds more than one `=`. Such a window never completes, so it runs to
    /// the end of the tokens.
    pub embedded_equals: bool,
}

/// Scan the window starting at `start`, which is expected to point to a flag token.
///
/// A `start` past the end of `tokens` gives an empty window, still with `next` after `start`.
pub fn scan_window(tokens: &[&str], start: usize) -> Window {
    let Some(first) = tokens.get(start) else {
        return Window {
            next: start + 1,
            ..Window::default()
        };
    };

    let mut buffer = String::from(first.trim());
    let mut next = start + 1;

    while !is_complete(&buffer, tokens, next) {
        let Some(token) = tokens.get(next) else {
            break;
        };

        buffer.push(' ');
        buffer.push_str(token);
        next += 1;
    }

    let embedded_equals = split_assignment(&buffer).len() > 2;

    let mut parts = buffer.split(['=', ' ']);
    let name = parts.next().unwrap_or_default().trim();
    let value = parts
        .map(str::trim)
        .filter(|x| !x.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

    log::trace!("window {start}..{next}: {buffer:?}");

    if value.is_empty() {
        return Window {
            name: name.into(),
            value: None,
            next,
            unbalanced: false,
            embedded_equals,
        };
    }

    let (value, unbalanced): (String, bool) = match (value.find('"'), value.rfind('"')) {
        (Some(first), Some(last)) if first < last => (value[first + 1..last].into(), false),
        (Some(_), _) => (value, true),
        _ => (value, false),
    };

    Window {
        name: name.into(),
        value: Some(value),
        next,
        unbalanced,
        embedded_equals,
    }
}

/// Evaluate if `buffer` holds a whole `name[=value]` unit, given that `tokens[next..]` are still
/// to come.
///
/// A pending `=` (either at the end of the buffer or at the start of the next token) or an open
/// quote keeps the window growing, as long as there are tokens left.
pub fn is_complete(buffer: &str, tokens: &[&str], next: usize) -> bool {
    let Some(upcoming) = tokens.get(next) else {
        return true;
    };

    if buffer.find('=').is_some_and(|at| at > 0) {
        return match split_assignment(buffer).as_slice() {
            [_, value] if value.contains('"') => value.matches('"').count() >= 2,
            [_, value] => !value.trim().is_empty(),
            // Either `name=` or more than one `=`.
            _ => false,
        };
    }

    !upcoming.trim().starts_with('=')
}

/// Split on `=`, dropping trailing empty parts (i.e. `name=` is a single part).
fn split_assignment(buffer: &str) -> Vec<&str> {
    let mut parts: Vec<&str> = buffer.split('=').collect();

    while parts.len() > 1 && parts.last().is_some_and(|x| x.is_empty()) {
        parts.pop();
    }

    parts
}
