#![no_std]

extern crate alloc;

pub mod lexer;
pub mod parser;
pub mod render;
pub mod scanner;

pub use lexer::{IntoTokens, Lexer, tokenize};
pub use parser::{Error, ParsedArgs, parse, try_parse};
