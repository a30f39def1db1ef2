//! # Matching TODO markers in a single line.
use nom::{
    bytes::complete as bytes, character::complete as character, combinator, IResult, Parser,
};

/// The line comment prefix that may introduce a TODO.
pub const COMMENT_PREFIX: &str = "//";

/// The TODO tag, matched without regard to case.
pub const TODO_TAG: &str = "todo";

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Eat a TODO marker: a line comment prefix, optional space, the tag as a
/// whole word and then an optional colon surrounded by optional space.
///
/// ```rust
/// use todo_query_lib::parser::comment::*;
///
/// assert_eq!(todo_marker("// TODO: fix it"), Ok(("fix it", ())));
/// assert_eq!(todo_marker("//todo  fix it"), Ok(("fix it", ())));
/// assert!(todo_marker("// todos are fine").is_err());
/// assert!(todo_marker("/* TODO */").is_err());
/// ```
pub fn todo_marker(i: &str) -> IResult<&str, ()> {
    let (i, _) = bytes::tag(COMMENT_PREFIX)(i)?;
    let (i, _) = character::space0(i)?;
    let (i, _) = bytes::tag_no_case(TODO_TAG)(i)?;
    let (i, _) = combinator::not(character::satisfy(is_word_char)).parse(i)?;
    let (i, _) = character::space0(i)?;
    let (i, _) = combinator::opt(character::char(':')).parse(i)?;
    let (i, _) = character::space0(i)?;
    Ok((i, ()))
}

/// Find a TODO marker in the line and return the comment text that trails it,
/// trimmed. The comment prefix must open the line or follow whitespace, so a
/// `//` inside a URL is never a marker. A marker with no trailing text is no
/// match at all.
///
/// ```rust
/// use todo_query_lib::parser::todo_comment;
///
/// assert_eq!(
///     todo_comment("    let x = 1; // TODO alice; 2023-10-01; Fix this!"),
///     Some("alice; 2023-10-01; Fix this!")
/// );
/// assert_eq!(todo_comment("// TODO:   "), None);
/// assert_eq!(todo_comment("let todo = 1;"), None);
/// ```
pub fn todo_comment(line: &str) -> Option<&str> {
    line.char_indices()
        .filter(|(n, _)| line[*n..].starts_with(COMMENT_PREFIX))
        .filter(|(n, _)| line[..*n].chars().next_back().map_or(true, char::is_whitespace))
        .find_map(|(n, _)| {
            let (rest, ()) = todo_marker(&line[n..]).ok()?;
            let comment = rest.trim();
            if comment.is_empty() {
                None
            } else {
                Some(comment)
            }
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marker_variants() {
        assert_eq!(todo_comment("// TODO something"), Some("something"));
        assert_eq!(todo_comment("// todo: something"), Some("something"));
        assert_eq!(todo_comment("//TODO  something"), Some("something"));
        assert_eq!(todo_comment("//\tToDo :something  "), Some("something"));
    }

    #[test]
    fn marker_may_follow_code() {
        assert_eq!(
            todo_comment("fn main() {} // TODO: write main"),
            Some("write main")
        );
    }

    #[test]
    fn doc_comments_count_as_line_comments() {
        assert_eq!(todo_comment("/// TODO document this"), Some("document this"));
    }

    #[test]
    fn empty_todos_are_discarded() {
        assert_eq!(todo_comment("// TODO"), None);
        assert_eq!(todo_comment("// TODO:"), None);
        assert_eq!(todo_comment("  // todo   "), None);
    }

    #[test]
    fn tag_must_be_a_whole_word() {
        assert_eq!(todo_comment("// todos for later"), None);
        assert_eq!(todo_comment("// TODO_LIST is empty"), None);
        assert_eq!(todo_comment("# TODO not a slash comment"), None);
        assert_eq!(todo_comment("/* TODO block comment */"), None);
    }

    #[test]
    fn later_marker_is_found_after_a_plain_comment() {
        assert_eq!(
            todo_comment("let url = \"http://example.com\"; // TODO: move to config"),
            Some("move to config")
        );
        assert_eq!(todo_comment("fetch(\"http://todo.example.com/api\");"), None);
        assert_eq!(
            todo_comment("fetch(\"http://todo.example.com\"); // TODO: retry"),
            Some("retry")
        );
    }

    #[test]
    fn bang_is_not_part_of_the_tag() {
        assert_eq!(todo_comment("// TODO!!! urgent"), Some("!!! urgent"));
    }
}
