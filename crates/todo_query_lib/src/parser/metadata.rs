//! # Author, date and note metadata in a TODO comment.
//!
//! A comment in metadata form reads `author; date; note`. Anything else is a
//! bare note and is kept verbatim.
use chrono::NaiveDate;

use super::date::parse_partial_date;

/// Separates the fields of a TODO comment in metadata form.
pub const METADATA_SEPARATOR: char = ';';

/// The marker that makes a TODO important.
pub const IMPORTANT_MARKER: char = '!';

/// Recognized author and date. These are only ever recognized together.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Metadata {
    pub author: String,
    /// The date as it was written.
    pub date: String,
    /// The resolved calendar date.
    pub date_value: NaiveDate,
}

/// A TODO comment broken into its parts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParsedComment {
    pub metadata: Option<Metadata>,
    pub comment: String,
    pub important: bool,
}

/// Parse the text trailing a TODO marker.
///
/// ```rust
/// use todo_query_lib::parser::parse_comment;
///
/// let parsed = parse_comment("alice; 2023-10-01; Fix this critical issue!!!");
/// let metadata = parsed.metadata.unwrap();
/// assert_eq!(metadata.author, "alice");
/// assert_eq!(metadata.date, "2023-10-01");
/// assert_eq!(parsed.comment, "Fix this critical issue!!!");
/// assert!(parsed.important);
///
/// let parsed = parse_comment("alice; soon; Fix it");
/// assert!(parsed.metadata.is_none());
/// assert_eq!(parsed.comment, "alice; soon; Fix it");
/// ```
pub fn parse_comment(raw: &str) -> ParsedComment {
    let important = raw.contains(IMPORTANT_MARKER);
    let segments = raw
        .split(METADATA_SEPARATOR)
        .map(str::trim)
        .collect::<Vec<_>>();

    if let [author, date, note @ ..] = segments.as_slice() {
        let date_value = parse_partial_date(date).filter(|_| !note.is_empty());
        if let Some(date_value) = date_value {
            return ParsedComment {
                metadata: Some(Metadata {
                    author: author.to_string(),
                    date: date.to_string(),
                    date_value,
                }),
                comment: note.join("; "),
                important,
            };
        }
    }

    ParsedComment {
        metadata: None,
        comment: raw.to_string(),
        important,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metadata_form() {
        let parsed = parse_comment("bob; 2023-09; Improve the code quality!");
        assert_eq!(
            parsed,
            ParsedComment {
                metadata: Some(Metadata {
                    author: "bob".into(),
                    date: "2023-09".into(),
                    date_value: NaiveDate::from_ymd_opt(2023, 9, 1).unwrap(),
                }),
                comment: "Improve the code quality!".into(),
                important: true,
            }
        );
    }

    #[test]
    fn extra_segments_are_rejoined() {
        let parsed = parse_comment("carol;2023;  first;second ;third");
        assert_eq!(parsed.metadata.unwrap().author, "carol");
        assert_eq!(parsed.comment, "first; second; third");
    }

    #[test]
    fn bare_note() {
        let raw = "This is a simple TODO without author or date.";
        assert_eq!(
            parse_comment(raw),
            ParsedComment {
                metadata: None,
                comment: raw.into(),
                important: false,
            }
        );
    }

    #[test]
    fn two_segments_are_a_bare_note() {
        let raw = "alice; 2023-10-01";
        let parsed = parse_comment(raw);
        assert!(parsed.metadata.is_none());
        assert_eq!(parsed.comment, raw);
    }

    #[test]
    fn invalid_date_is_a_bare_note() {
        for raw in [
            "alice; 2023-02-30; note",
            "alice; tomorrow; note",
            "alice; ; note",
            "first; second; third",
        ] {
            let parsed = parse_comment(raw);
            assert!(parsed.metadata.is_none(), "{raw:?} has no metadata");
            assert_eq!(parsed.comment, raw);
        }
    }

    #[test]
    fn importance_comes_from_the_whole_comment() {
        // The only bang is in the author field, which is stripped.
        let parsed = parse_comment("dave!; 2023; quiet note");
        assert_eq!(parsed.comment, "quiet note");
        assert!(parsed.important);

        let parsed = parse_comment("dave; 2023; quiet note");
        assert!(!parsed.important);
    }
}
