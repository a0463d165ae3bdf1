use std::fmt::Display;

use chrono::NaiveDate;

/// The only textual date representation accepted or produced.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// One to-do item. Fields are fixed once the task is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    name: String,
    due_date: NaiveDate,
    category: String,
}

impl Task {
    pub fn new(name: String, due_date: NaiveDate, category: String) -> Self {
        Task {
            name,
            due_date,
            category,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn due_date(&self) -> NaiveDate {
        self.due_date
    }

    pub fn category(&self) -> &str {
        &self.category
    }
}

impl Display for Task {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} - {} - Due: {}",
            self.name,
            self.category,
            self.due_date.format(DATE_FORMAT)
        )
    }
}
