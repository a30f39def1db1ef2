//! # Operator commands.
//!
//! A command line is parsed into a [`Command`], which runs one query against a
//! [`Snapshot`] and renders the result. Every failure along the way becomes a
//! one line diagnostic in the [`Reply`].
use snafu::prelude::*;
use std::str::FromStr;

use crate::{
    extract::Todo,
    finder::Snapshot,
    parser::date::DateThreshold,
    query::{self, SortCriteria},
    table, Error, MissingArgumentSnafu, UnknownCommandSnafu,
};

/// A parsed command along with its arguments.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// `show`
    Show,
    /// `important`
    Important,
    /// `user <name>`
    User(String),
    /// `sort <importance|user|date>`
    Sort(SortCriteria),
    /// `date <YYYY[-MM[-DD]]>`
    Date(DateThreshold),
    /// `exit`
    Exit,
}

/// What the operator should see after a command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Reply {
    Text(String),
    Exit,
}

impl FromStr for Command {
    type Err = Error;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let cmd = words.next().unwrap_or_default().to_lowercase();
        let arg = words.next();
        let command = match cmd.as_str() {
            "show" => Command::Show,
            "important" => Command::Important,
            "user" => {
                let name = arg.context(MissingArgumentSnafu { what: "username" })?;
                Command::User(name.to_string())
            }
            "sort" => {
                let criteria = arg.context(MissingArgumentSnafu {
                    what: "sorting criteria: importance, user, or date",
                })?;
                Command::Sort(criteria.parse()?)
            }
            "date" => {
                let threshold = arg.context(MissingArgumentSnafu { what: "date" })?;
                Command::Date(threshold.parse()?)
            }
            "exit" => Command::Exit,
            _ => return UnknownCommandSnafu { input: line }.fail(),
        };
        Ok(command)
    }
}

/// A heading line over the table, or the message when there is nothing to show.
fn listing(
    todos: Vec<Todo>,
    heading: impl FnOnce() -> String,
    nothing_found: impl FnOnce() -> String,
) -> Reply {
    if todos.is_empty() {
        Reply::Text(nothing_found())
    } else {
        Reply::Text(format!("{}\n{}", heading(), table::render(&todos)))
    }
}

impl Command {
    /// Run this command against the snapshot.
    pub fn run(&self, snapshot: &Snapshot) -> Reply {
        let todos = snapshot.todos();
        match self {
            Command::Show => listing(
                query::all(&todos),
                || "TODOs found:".into(),
                || "No TODOs found.".into(),
            ),
            Command::Important => listing(
                query::important(&todos),
                || "Important TODOs found:".into(),
                || "No important TODOs found.".into(),
            ),
            Command::User(name) => listing(
                query::by_user(&todos, name),
                || format!("TODOs for user \"{name}\":"),
                || format!("No TODOs found for user \"{name}\"."),
            ),
            Command::Sort(criteria) => listing(
                query::sort(&todos, *criteria),
                || format!("TODOs sorted by {criteria}:"),
                || "No TODOs found.".into(),
            ),
            Command::Date(threshold) => listing(
                query::after_date(&todos, threshold),
                || format!("TODOs found after {}:", threshold.raw),
                || format!("No TODOs found after {}.", threshold.raw),
            ),
            Command::Exit => Reply::Exit,
        }
    }
}

/// Parse and run one command line.
pub fn dispatch(snapshot: &Snapshot, line: &str) -> Reply {
    log::debug!("dispatching {line:?}");
    match line.parse::<Command>() {
        Ok(command) => command.run(snapshot),
        Err(err) => {
            log::debug!("  {err:?}");
            Reply::Text(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::SourceFile;

    const INDEX_JS: &str = "\
// TODO user1; 2023-10-01; Fix this critical issue!!!
function main() {}
// TODO user2; 2023-09-15; Improve the code quality!
// TODO user3; 2023-08-10; Refactor the code
// TODO This is a simple TODO without author or date.
";

    fn snapshot() -> Snapshot {
        Snapshot::new(vec![SourceFile::new("src/index.js", INDEX_JS)])
    }

    fn text(reply: Reply) -> String {
        match reply {
            Reply::Text(text) => text,
            Reply::Exit => panic!("unexpected exit"),
        }
    }

    fn heading(reply: Reply) -> String {
        text(reply).lines().next().unwrap_or_default().to_string()
    }

    /// The comment column of each table row.
    fn rows(reply: Reply) -> Vec<String> {
        let text = text(reply);
        let lines = text.lines().collect::<Vec<_>>();
        assert!(lines.len() >= 4, "not a table: {text}");
        lines[3..lines.len() - 1]
            .iter()
            .map(|line| line.split(" | ").nth(3).unwrap().trim().to_string())
            .collect()
    }

    #[test]
    fn parse_commands() {
        assert_eq!("show".parse::<Command>().unwrap(), Command::Show);
        assert_eq!("  SHOW  ".parse::<Command>().unwrap(), Command::Show);
        assert_eq!("Important".parse::<Command>().unwrap(), Command::Important);
        assert_eq!(
            "user Alice".parse::<Command>().unwrap(),
            Command::User("Alice".into())
        );
        assert_eq!(
            "sort date".parse::<Command>().unwrap(),
            Command::Sort(SortCriteria::Date)
        );
        assert_eq!(
            "date 2023-09".parse::<Command>().unwrap(),
            Command::Date("2023-09".parse().unwrap())
        );
        assert_eq!("exit".parse::<Command>().unwrap(), Command::Exit);
    }

    #[test]
    fn parse_errors() {
        assert!(matches!(
            "user".parse::<Command>(),
            Err(Error::MissingArgument { what: "username" })
        ));
        assert!(matches!(
            "sort size".parse::<Command>(),
            Err(Error::InvalidCriteria { .. })
        ));
        assert!(matches!(
            "date soon".parse::<Command>(),
            Err(Error::InvalidFilter { .. })
        ));
        assert!(matches!(
            "".parse::<Command>(),
            Err(Error::UnknownCommand { .. })
        ));
    }

    #[test]
    fn show() {
        assert_eq!(
            rows(dispatch(&snapshot(), "show")),
            vec![
                "Fix this critical issue!!!",
                "Improve the code quality!",
                "Refactor the code",
                "This is a simple TODO without author or date.",
            ]
        );
    }

    #[test]
    fn important() {
        assert_eq!(
            rows(dispatch(&snapshot(), "important")),
            vec!["Fix this critical issue!!!", "Improve the code quality!"]
        );
    }

    #[test]
    fn user_is_case_insensitive() {
        assert_eq!(
            rows(dispatch(&snapshot(), "user USER3")),
            vec!["Refactor the code"]
        );
        assert_eq!(
            text(dispatch(&snapshot(), "user nobody")),
            "No TODOs found for user \"nobody\"."
        );
    }

    #[test]
    fn sort() {
        assert_eq!(
            rows(dispatch(&snapshot(), "sort date")),
            vec![
                "Fix this critical issue!!!",
                "Improve the code quality!",
                "Refactor the code",
                "This is a simple TODO without author or date.",
            ]
        );
        assert_eq!(
            rows(dispatch(&snapshot(), "sort importance"))[..2],
            ["Fix this critical issue!!!", "Improve the code quality!"]
        );
        assert_eq!(
            text(dispatch(&snapshot(), "sort size")),
            "Invalid sorting criteria. Use: importance, user, or date."
        );
        assert_eq!(
            text(dispatch(&snapshot(), "sort")),
            "Please specify a sorting criteria: importance, user, or date."
        );
    }

    #[test]
    fn sort_does_not_leak_into_later_commands() {
        let snapshot = Snapshot::new(vec![SourceFile::new(
            "a.js",
            "// TODO bob; 2023; b\n// TODO plain\n// TODO alice; 2024; a",
        )]);
        assert_eq!(rows(dispatch(&snapshot, "sort user")), vec!["a", "b", "plain"]);
        assert_eq!(rows(dispatch(&snapshot, "show")), vec!["b", "plain", "a"]);
    }

    #[test]
    fn date() {
        assert_eq!(
            rows(dispatch(&snapshot(), "date 2023-09-01")),
            vec!["Fix this critical issue!!!", "Improve the code quality!"]
        );
        assert_eq!(
            text(dispatch(&snapshot(), "date 2024")),
            "No TODOs found after 2024."
        );
        assert_eq!(
            text(dispatch(&snapshot(), "date 2023-9-1-1")),
            "Invalid date format. Use YYYY[-MM[-DD]]"
        );
        assert_eq!(
            text(dispatch(&snapshot(), "date")),
            "Please specify a date."
        );
    }

    #[test]
    fn listings_have_headings() {
        let snapshot = snapshot();
        assert_eq!(heading(dispatch(&snapshot, "show")), "TODOs found:");
        assert_eq!(
            heading(dispatch(&snapshot, "important")),
            "Important TODOs found:"
        );
        assert_eq!(
            heading(dispatch(&snapshot, "user User1")),
            "TODOs for user \"User1\":"
        );
        assert_eq!(
            heading(dispatch(&snapshot, "sort IMPORTANCE")),
            "TODOs sorted by importance:"
        );
        assert_eq!(
            heading(dispatch(&snapshot, "date 2023-9")),
            "TODOs found after 2023-9:"
        );

        let show = text(dispatch(&snapshot, "show"));
        let lines = show.lines().collect::<Vec<_>>();
        assert!(lines[1].starts_with("! | User"), "{show}");
        assert!(lines[2].chars().all(|c| c == '-'), "{show}");
    }

    #[test]
    fn empty_snapshot() {
        let empty = Snapshot::new(vec![SourceFile::new("a.js", "// nothing to do\n")]);
        assert_eq!(text(dispatch(&empty, "show")), "No TODOs found.");
        assert_eq!(
            text(dispatch(&empty, "important")),
            "No important TODOs found."
        );
    }

    #[test]
    fn unknown_and_exit() {
        assert_eq!(text(dispatch(&snapshot(), "foo")), "wrong command");
        assert_eq!(text(dispatch(&snapshot(), "")), "wrong command");
        assert_eq!(dispatch(&snapshot(), "exit"), Reply::Exit);
        assert_eq!(dispatch(&snapshot(), "EXIT now"), Reply::Exit);
    }
}
