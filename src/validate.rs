//! Checks raw add-task form input before a [`Task`](crate::types::Task) is built.

use std::fmt::Display;

use chrono::NaiveDate;
use combine::parser::char::{char, digit};
use combine::parser::repeat::count_min_max;
use combine::{eof, Parser};
use log::debug;

use crate::error::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    DueDate,
    Category,
}

impl Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Field::Name => "Task name",
            Field::DueDate => "Due date",
            Field::Category => "Category",
        };
        f.write_str(label)
    }
}

/// Trimmed form input that passed every check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedTask {
    pub name: String,
    pub due_date: NaiveDate,
    pub category: String,
}

/// Presence is checked for all three fields before the date format, so a
/// blank date reports `MissingField` rather than `InvalidDateFormat`.
pub fn validate(
    name_raw: &str,
    due_date_raw: &str,
    category_raw: &str,
) -> Result<ValidatedTask, ValidationError> {
    let name = name_raw.trim();
    let due_date = due_date_raw.trim();
    let category = category_raw.trim();

    for (field, value) in [
        (Field::Name, name),
        (Field::DueDate, due_date),
        (Field::Category, category),
    ] {
        if value.is_empty() {
            debug!("Rejecting task form: {field} is empty");
            return Err(ValidationError::MissingField(field));
        }
    }

    Ok(ValidatedTask {
        name: name.to_owned(),
        due_date: parse_due_date(due_date)?,
        category: category.to_owned(),
    })
}

/// Parses exactly `YYYY-MM-DD`: four year digits, two month digits and two
/// day digits that together name a real calendar date.
pub fn parse_due_date(input: &str) -> Result<NaiveDate, ValidationError> {
    let invalid = || ValidationError::InvalidDateFormat(input.to_owned());

    let mut iso_date = (
        count_min_max::<String, _, _>(4, 4, digit()),
        char('-'),
        count_min_max::<String, _, _>(2, 2, digit()),
        char('-'),
        count_min_max::<String, _, _>(2, 2, digit()),
        eof(),
    )
        .map(|(year, _, month, _, day, _)| (year, month, day));

    let ((year, month, day), _) = iso_date.parse(input).map_err(|_| invalid())?;
    let year: i32 = year.parse().map_err(|_| invalid())?;
    let month: u32 = month.parse().map_err(|_| invalid())?;
    let day: u32 = day.parse().map_err(|_| invalid())?;

    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
        debug!("Rejecting due date {input:?}: not a calendar date");
        invalid()
    })
}
