//! # Filtering and sorting TODOs.
//!
//! Every query borrows the TODOs it is given and returns a fresh sequence,
//! leaving its argument untouched. Filters keep the order they are given and
//! sorts are stable.
use snafu::prelude::*;
use std::{cmp::Ordering, str::FromStr};
use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

use crate::{extract::Todo, parser::date::DateThreshold, Error, InvalidCriteriaSnafu};

/// The ways TODOs can be sorted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortCriteria {
    Importance,
    User,
    Date,
}

impl SortCriteria {
    pub const ALL: [SortCriteria; 3] = [Self::Importance, Self::User, Self::Date];

    pub fn name(&self) -> &'static str {
        match self {
            SortCriteria::Importance => "importance",
            SortCriteria::User => "user",
            SortCriteria::Date => "date",
        }
    }
}

impl FromStr for SortCriteria {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let found = Self::ALL
            .into_iter()
            .find(|criteria| criteria.name().eq_ignore_ascii_case(s));
        found.context(InvalidCriteriaSnafu { input: s })
    }
}

impl std::fmt::Display for SortCriteria {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Present values first, ordered by `cmp`; absent values last.
fn present_first<T: ?Sized>(
    a: Option<&T>,
    b: Option<&T>,
    cmp: impl FnOnce(&T, &T) -> Ordering,
) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => cmp(a, b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Compare two names the way a person would alphabetize them. Base letters
/// decide first, ignoring case and accents. Ties go to the unaccented name,
/// then to the lowercase one.
///
/// ```rust
/// use std::cmp::Ordering;
/// use todo_query_lib::query::compare_names;
///
/// assert_eq!(compare_names("Émile", "frank"), Ordering::Less);
/// assert_eq!(compare_names("alice", "Alice"), Ordering::Less);
/// ```
pub fn compare_names(a: &str, b: &str) -> Ordering {
    let base_letters = |name: &str| {
        name.nfd()
            .filter(|c| !is_combining_mark(*c))
            .flat_map(char::to_lowercase)
            .collect::<Vec<_>>()
    };
    let accented = |name: &str| name.nfd().flat_map(char::to_lowercase).collect::<Vec<_>>();
    let uppercase = |name: &str| name.nfd().map(char::is_uppercase).collect::<Vec<_>>();

    base_letters(a)
        .cmp(&base_letters(b))
        .then_with(|| accented(a).cmp(&accented(b)))
        .then_with(|| uppercase(a).cmp(&uppercase(b)))
        .then_with(|| a.cmp(b))
}

/// Every TODO, in the given order.
pub fn all(todos: &[Todo]) -> Vec<Todo> {
    todos.to_vec()
}

/// The TODOs marked important.
pub fn important(todos: &[Todo]) -> Vec<Todo> {
    todos.iter().filter(|todo| todo.important).cloned().collect()
}

/// The TODOs whose author matches `name`, ignoring case. TODOs without an
/// author never match.
pub fn by_user(todos: &[Todo], name: &str) -> Vec<Todo> {
    let name = name.to_lowercase();
    todos
        .iter()
        .filter(|todo| {
            todo.author
                .as_ref()
                .map(|author| author.to_lowercase() == name)
                .unwrap_or(false)
        })
        .cloned()
        .collect()
}

/// The TODOs dated on or after the threshold. Undated TODOs are left out.
pub fn after_date(todos: &[Todo], threshold: &DateThreshold) -> Vec<Todo> {
    todos
        .iter()
        .filter(|todo| {
            todo.date_value
                .map(|date| date >= threshold.date)
                .unwrap_or(false)
        })
        .cloned()
        .collect()
}

/// Most `!`s in the note first.
pub fn sort_by_importance(todos: &[Todo]) -> Vec<Todo> {
    let mut sorted = todos.to_vec();
    sorted.sort_by_key(|todo| std::cmp::Reverse(todo.importance()));
    sorted
}

/// Alphabetically by author, with unattributed TODOs last.
pub fn sort_by_user(todos: &[Todo]) -> Vec<Todo> {
    let mut sorted = todos.to_vec();
    sorted.sort_by(|a, b| {
        present_first(a.author.as_deref(), b.author.as_deref(), compare_names)
    });
    sorted
}

/// Newest first, with undated TODOs last.
pub fn sort_by_date(todos: &[Todo]) -> Vec<Todo> {
    let mut sorted = todos.to_vec();
    sorted.sort_by(|a, b| {
        present_first(a.date_value.as_ref(), b.date_value.as_ref(), |a, b| b.cmp(a))
    });
    sorted
}

/// Sort by the given criteria.
pub fn sort(todos: &[Todo], criteria: SortCriteria) -> Vec<Todo> {
    log::debug!("sorting {} TODOs by {criteria}", todos.len());
    match criteria {
        SortCriteria::Importance => sort_by_importance(todos),
        SortCriteria::User => sort_by_user(todos),
        SortCriteria::Date => sort_by_date(todos),
    }
}
