//! # Partial ISO dates.
//!
//! Dates are written as `YYYY`, `YYYY-MM` or `YYYY-MM-DD`. A missing month or
//! day resolves to the first, so `2023` and `2023-01-01` are the same date.
use chrono::NaiveDate;
use nom::{
    bytes::complete as bytes,
    character::complete as character,
    combinator,
    error::{Error as NomError, ErrorKind},
    sequence, IResult, Parser,
};
use snafu::OptionExt;
use std::str::FromStr;

use crate::{Error, InvalidFilterSnafu};

fn year(i: &str) -> IResult<&str, i32> {
    combinator::map_res(
        bytes::take_while_m_n(4, 4, |c: char| c.is_ascii_digit()),
        |s: &str| s.parse::<i32>(),
    )
    .parse(i)
}

fn month_or_day(i: &str) -> IResult<&str, u32> {
    combinator::map_res(
        bytes::take_while_m_n(1, 2, |c: char| c.is_ascii_digit()),
        |s: &str| s.parse::<u32>(),
    )
    .parse(i)
}

fn dash_then_month_or_day(i: &str) -> IResult<&str, Option<u32>> {
    combinator::opt(sequence::preceded(character::char('-'), month_or_day)).parse(i)
}

/// Eat a partial date and resolve it to a calendar date. Fails when the
/// resolved date does not exist.
///
/// ```rust
/// use chrono::NaiveDate;
/// use todo_query_lib::parser::date::*;
///
/// assert_eq!(
///     partial_date("2023-10; rest"),
///     Ok(("; rest", NaiveDate::from_ymd_opt(2023, 10, 1).unwrap()))
/// );
/// assert!(partial_date("2023-02-30").is_err());
/// ```
pub fn partial_date(i: &str) -> IResult<&str, NaiveDate> {
    let (i, y) = year(i)?;
    let (i, m) = dash_then_month_or_day(i)?;
    let (i, d) = if m.is_some() {
        dash_then_month_or_day(i)?
    } else {
        (i, None)
    };
    match NaiveDate::from_ymd_opt(y, m.unwrap_or(1), d.unwrap_or(1)) {
        Some(date) => Ok((i, date)),
        None => Err(nom::Err::Error(NomError::new(i, ErrorKind::Verify))),
    }
}

/// Parse the whole string as a partial date, returning `None` if it is not a
/// valid one.
///
/// ```rust
/// use todo_query_lib::parser::parse_partial_date;
///
/// assert!(parse_partial_date("2023").is_some());
/// assert!(parse_partial_date("2023-13").is_none());
/// assert!(parse_partial_date("2023-10-01 ").is_none());
/// ```
pub fn parse_partial_date(s: &str) -> Option<NaiveDate> {
    combinator::all_consuming(partial_date)
        .parse(s)
        .ok()
        .map(|(_, date)| date)
}

/// A lower bound on TODO dates, as given by the operator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DateThreshold {
    /// The threshold exactly as it was written.
    pub raw: String,
    pub date: NaiveDate,
}

impl FromStr for DateThreshold {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let date = parse_partial_date(s).context(InvalidFilterSnafu { input: s })?;
        Ok(DateThreshold {
            raw: s.to_string(),
            date,
        })
    }
}
