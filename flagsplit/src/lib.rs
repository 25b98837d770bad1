//! flagsplit, a permissive and purely syntactic parser of POSIX-ish flags and parameters.
#![no_std]
#![deny(missing_docs)]

pub use flagsplit_parser as parser;

pub use parser::{IntoTokens, Lexer, ParsedArgs, parse, tokenize};

/// Defines the possible errors that may occur during usage of the crate.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[non_exhaustive]
pub enum Error {
    /// An error comes from the parsing of arguments.
    #[error(transparent)]
    Parser(#[from] parser::Error),
}

/// Try to parse the input, failing on the first malformed argument instead of degrading.
pub fn try_parse<'a>(input: impl IntoTokens<'a>) -> Result<ParsedArgs, Error> {
    Ok(ParsedArgs::try_parse(input)?)
}

#[cfg(test)]
mod tests {
    extern crate std;

    use std::string::ToString;
    use std::vec;

    use googletest::prelude::{assert_that, eq};

    use crate as flagsplit;

    fn flags(args: &[(&str, Option<&str>)]) -> flagsplit::ParsedArgs {
        flagsplit::ParsedArgs::from_parts(args.iter().copied(), core::iter::empty())
    }

    #[test]
    fn it_should_parse_cluster_like_separate_flags() {
        let clustered = flagsplit::parse("-abc");
        let separate = flagsplit::parse("-a -b -c");

        assert_that!(clustered == separate, eq(true));
        assert_that!(clustered, eq(&flags(&[("a", None), ("b", None), ("c", None)])));
    }

    #[test]
    fn it_should_parse_cluster_with_value_like_separate_flags() {
        let expected = flags(&[("a", None), ("b", None), ("c", Some("Value"))]);

        assert_that!(flagsplit::parse("-abc=Value"), eq(&expected));
        assert_that!(flagsplit::parse("-a -b -c=Value"), eq(&expected));
    }

    #[test]
    fn it_should_keep_last_duplicate() {
        let args = flagsplit::parse(&["-a", "-a=foo", "-a=bar"]);

        assert_that!(args.get("a"), eq(Some(Some("bar"))));
        assert_that!(args.args().len(), eq(1));
    }

    #[test]
    fn it_should_stop_flag_parsing_at_separator() {
        let args = flagsplit::parse("--message=\"Hello!\" -- -foo -bar");

        assert_that!(args.get("message"), eq(Some(Some("Hello!"))));
        assert_that!(args.contains("foo"), eq(false));
        assert_that!(
            args.params().to_vec(),
            eq(&vec!["-foo".to_string(), "-bar".to_string()])
        );
    }

    #[test]
    fn it_should_parse_quoted_multi_word_value() {
        let expected = flags(&[("n", Some("foo bar baz"))]);

        assert_that!(flagsplit::parse("-n=\"foo bar baz\""), eq(&expected));
        assert_that!(flagsplit::parse(&["-n=\"foo bar baz\""]), eq(&expected));
    }

    #[test]
    fn it_should_tolerate_whitespace_around_equals() {
        let expected = flags(&[("a", None), ("b", None), ("c", Some("Value"))]);

        assert_that!(flagsplit::parse("  -abc  =  Value  "), eq(&expected));
        assert_that!(
            flagsplit::parse(&["  -abc ", " =  ", " Value  "]),
            eq(&expected)
        );
    }

    #[test]
    fn it_should_tokenize_quoted_span() {
        assert_that!(flagsplit::tokenize("aaa \"bbb ccc\""), eq(&vec!["aaa", "bbb ccc"]));
    }

    #[test]
    fn it_should_take_trailing_bits_as_params() {
        let args = flagsplit::parse("-abc --message=\"Hello!\" param1 param2");

        assert_that!(
            args,
            eq(&flagsplit::ParsedArgs::from_parts(
                [("a", None), ("b", None), ("c", None), ("message", Some("Hello!"))],
                ["param1", "param2"]
            ))
        );
    }

    #[test]
    fn it_should_parse_owned_argv() {
        let argv = vec!["-v".to_string(), "--out=x".to_string(), "in".to_string()];
        let args = flagsplit::parse(&argv);

        assert_that!(args.get("v"), eq(Some(None)));
        assert_that!(args.get("out"), eq(Some(Some("x"))));
        assert_that!(args.params().len(), eq(1));
    }

    #[test]
    fn it_should_wrap_parser_error() {
        assert_that!(
            flagsplit::try_parse("-"),
            eq(&Err(flagsplit::Error::Parser(
                flagsplit::parser::Error::MalformedArgument { position: 0 }
            )))
        );
        assert_that!(flagsplit::try_parse("-x p").is_ok(), eq(true));
    }

    #[test]
    fn it_should_terminate_on_pending_value() {
        // Open quote and dangling `=` both run to the end of input.
        assert_that!(flagsplit::parse("-n=\"a b c").get("n"), eq(Some(Some("\"a b c"))));
        assert_that!(flagsplit::parse("-n = ").get("n"), eq(Some(None)));
        assert_that!(flagsplit::parse(&["-n", "="]).get("n"), eq(Some(None)));
    }

    #[test]
    fn it_should_parse_from_many_threads() {
        let inputs = ["-a p", "--b=1 -- -c", "-def=\"x y\""];

        std::thread::scope(|s| {
            let handles = inputs.map(|input| s.spawn(move || flagsplit::parse(input)));

            for (input, handle) in inputs.iter().zip(handles) {
                let args = handle.join().expect("parser thread panicked");
                assert_that!(args, eq(&flagsplit::parse(*input)));
            }
        });
    }
}
