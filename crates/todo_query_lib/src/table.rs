//! # Rendering TODOs as a text table.
//!
//! Column widths are computed from the TODOs being rendered, capped per
//! column. Every cell is truncated or padded to exactly its column's width.
use crate::extract::Todo;

/// Separates cells in a row.
pub const CELL_SEPARATOR: &str = " | ";

/// The columns of the table, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Column {
    Importance,
    User,
    Date,
    Comment,
    File,
}

impl Column {
    pub const ALL: [Column; 5] = [
        Column::Importance,
        Column::User,
        Column::Date,
        Column::Comment,
        Column::File,
    ];

    pub fn header(&self) -> &'static str {
        match self {
            Column::Importance => "!",
            Column::User => "User",
            Column::Date => "Date",
            Column::Comment => "Comment",
            Column::File => "File",
        }
    }

    /// The widest this column may be.
    pub fn max_width(&self) -> usize {
        match self {
            Column::Importance => 1,
            Column::User => 10,
            Column::Date => 10,
            Column::Comment => 50,
            Column::File => 20,
        }
    }

    /// The untruncated contents of this column for one TODO.
    pub fn value<'a>(&self, todo: &'a Todo) -> &'a str {
        match self {
            Column::Importance => {
                if todo.important {
                    "!"
                } else {
                    ""
                }
            }
            Column::User => todo.author.as_deref().unwrap_or_default(),
            Column::Date => todo.date.as_deref().unwrap_or_default(),
            Column::Comment => &todo.comment,
            Column::File => &todo.filename,
        }
    }
}

/// Compute the width of each column for the given TODOs.
pub fn column_widths(todos: &[Todo]) -> [usize; 5] {
    Column::ALL.map(|column| {
        todos
            .iter()
            .map(|todo| column.value(todo).chars().count())
            .chain(std::iter::once(column.header().chars().count()))
            .max()
            .unwrap_or_default()
            .min(column.max_width())
    })
}

/// Truncate or pad the value to exactly `width` characters.
fn cell(value: &str, width: usize) -> String {
    let truncated = value.chars().take(width).collect::<String>();
    format!("{truncated:<width$}")
}

fn row<'a>(values: impl IntoIterator<Item = &'a str>, widths: &[usize; 5]) -> String {
    values
        .into_iter()
        .zip(widths.iter())
        .map(|(value, width)| cell(value, *width))
        .collect::<Vec<_>>()
        .join(CELL_SEPARATOR)
}

/// Render the TODOs as a table: a header row, a separator, one row per TODO
/// and a closing separator.
///
/// ```rust
/// use todo_query_lib::{extract, table, SourceFile};
///
/// let todos = extract(&[SourceFile::new("a.js", "// TODO bob; 2023-09; Ship it!")]);
/// let expected = [
///     "! | User | Date    | Comment  | File",
///     "------------------------------------",
///     "! | bob  | 2023-09 | Ship it! | a.js",
///     "------------------------------------",
/// ];
/// assert_eq!(table::render(&todos), expected.join("\n"));
/// ```
pub fn render(todos: &[Todo]) -> String {
    let widths = column_widths(todos);
    let header = row(Column::ALL.iter().map(|column| column.header()), &widths);
    let separator = "-".repeat(header.chars().count());

    let mut lines = vec![header, separator.clone()];
    for todo in todos {
        lines.push(row(
            Column::ALL.iter().map(|column| column.value(todo)),
            &widths,
        ));
    }
    lines.push(separator);
    lines.join("\n")
}
