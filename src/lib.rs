//! ClockWise: a terminal to-do list with due-today reminders.

pub mod app;
pub mod commands;
pub mod config;
pub mod error;
pub mod store;
pub mod terminal;
pub mod types;
pub mod validate;
pub mod views;
