use std::io::Error as IOError;

use thiserror::Error;

use crate::validate::Field;

#[derive(Debug, Error)]
pub enum Error {
    #[error("terminal error: {0}")]
    Io(#[from] IOError),
    #[error("could not resolve configuration directories: {0}")]
    Xdg(#[from] xdg::BaseDirectoriesError),
    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("{}", describe_out_of_range(.index, .len))]
    OutOfRange { index: Option<usize>, len: usize },
}

/// Rejections produced while checking the add-task form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    MissingField(Field),
    #[error("'{0}' is not a valid date, use YYYY-MM-DD")]
    InvalidDateFormat(String),
}

pub type Result<T> = std::result::Result<T, Error>;

fn describe_out_of_range(index: &Option<usize>, len: &usize) -> String {
    match index {
        Some(index) => format!("there is no task at position {index} (the list has {len})"),
        None => "select a task to complete first".to_owned(),
    }
}
