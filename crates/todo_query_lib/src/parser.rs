//! # Parsing TODO comments out of lines of text.
use nom::{
    bytes::complete as bytes, character::complete as character, combinator, IResult, Parser,
};

pub mod comment;
pub mod date;
pub mod metadata;

pub use comment::todo_comment;
pub use date::parse_partial_date;
pub use metadata::{parse_comment, Metadata, ParsedComment};

/// Eat a whole line and optionally its ending but don't return that ending.
pub fn take_to_eol(i: &str) -> IResult<&str, &str> {
    let (i, ln) = bytes::take_till(|c| c == '\r' || c == '\n')(i)?;
    let (i, _) = combinator::opt(character::line_ending).parse(i)?;
    Ok((i, ln))
}

/// Iterate over the lines of some text, paired with their 1-based line
/// numbers. Line endings are not included.
///
/// ```rust
/// use todo_query_lib::parser::numbered_lines;
///
/// let lines = numbered_lines("one\r\ntwo\n\nfour").collect::<Vec<_>>();
/// assert_eq!(lines, vec![(1, "one"), (2, "two"), (3, ""), (4, "four")]);
/// ```
pub fn numbered_lines(contents: &str) -> impl Iterator<Item = (usize, &str)> {
    let mut i = contents;
    let mut line_number = 0;
    std::iter::from_fn(move || {
        if i.is_empty() {
            return None;
        }
        // take_till never fails on non-empty input
        let (j, ln) = take_to_eol(i).ok()?;
        i = j;
        line_number += 1;
        Some((line_number, ln))
    })
}
