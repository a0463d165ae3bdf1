//! The modal "Add New Task" form.
//!
//! All three fields are single-line: Enter submits and Ctrl-M is swallowed,
//! so neither can insert a newline and a field's text is its first line.

use crate::{
    app::App,
    config::Config,
    error::{Result, ValidationError},
    validate::{validate, Field, ValidatedTask},
};
use log::{debug, info};
use ratatui::{
    prelude::*,
    style::Style,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use tui_textarea::{Input, Key, TextArea};

use super::{centered_rect, home::draw_tasks, AppState};

const FORM_WIDTH: u16 = 50;
// title border + three bordered fields + error line + hint line + border
const FORM_HEIGHT: u16 = 13;
const FIELDS: [Field; 3] = [Field::Name, Field::DueDate, Field::Category];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormOutcome {
    Pending,
    Submitted(ValidatedTask),
    Cancelled,
}

pub struct AddTaskForm {
    fields: [TextArea<'static>; 3],
    focus: usize,
    error: Option<ValidationError>,
}

impl AddTaskForm {
    pub fn new(config: &Config) -> Self {
        let placeholders = ["Task name".to_owned(), "YYYY-MM-DD".to_owned(), config.category_hint()];
        let fields = placeholders.map(|placeholder| {
            let mut field = TextArea::default();
            field.set_cursor_line_style(Style::default());
            field.set_placeholder_text(placeholder);
            field
        });
        let mut form = AddTaskForm {
            fields,
            focus: 0,
            error: None,
        };
        form.restyle();
        form
    }

    pub fn error(&self) -> Option<&ValidationError> {
        self.error.as_ref()
    }

    pub fn focused(&self) -> Field {
        FIELDS[self.focus]
    }

    pub fn handle_input(&mut self, input: Input) -> FormOutcome {
        match input {
            Input { key: Key::Esc, .. } => return FormOutcome::Cancelled,
            Input {
                key: Key::Enter, ..
            } => return self.submit(),
            Input {
                key: Key::Tab | Key::Down,
                ..
            } => self.move_focus(1),
            Input { key: Key::Up, .. } => self.move_focus(FIELDS.len() - 1),
            Input {
                key: Key::Char('m'),
                ctrl: true,
                ..
            } => {}
            input => {
                self.fields[self.focus].input(input);
            }
        }
        FormOutcome::Pending
    }

    fn submit(&mut self) -> FormOutcome {
        let [name, due_date, category] = self.fields.each_ref().map(field_text);
        match validate(name, due_date, category) {
            Ok(task) => FormOutcome::Submitted(task),
            Err(e) => {
                debug!("Form rejected: {e}");
                if let ValidationError::MissingField(field) = e {
                    self.focus = FIELDS.iter().position(|f| *f == field).unwrap_or(self.focus);
                    self.restyle();
                }
                self.error = Some(e);
                FormOutcome::Pending
            }
        }
    }

    fn move_focus(&mut self, step: usize) {
        self.focus = (self.focus + step) % FIELDS.len();
        self.restyle();
    }

    fn restyle(&mut self) {
        for (i, (field, label)) in self.fields.iter_mut().zip(FIELDS).enumerate() {
            let (border, cursor) = if i == self.focus {
                (
                    Style::default().fg(Color::Cyan),
                    Style::default().add_modifier(Modifier::REVERSED),
                )
            } else {
                (Style::default().fg(Color::DarkGray), Style::default())
            };
            field.set_cursor_style(cursor);
            field.set_block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(border)
                    .title(label.to_string()),
            );
        }
    }

    pub(crate) fn draw(&self, frame: &mut Frame) {
        let area = centered_rect(FORM_WIDTH, FORM_HEIGHT, frame.size());
        let outer = Block::default().title("Add New Task").borders(Borders::ALL);
        let inner = outer.inner(area);
        frame.render_widget(Clear, area);
        frame.render_widget(outer, area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .split(inner);
        for (field, row) in self.fields.iter().zip(rows.iter()) {
            frame.render_widget(field.widget(), *row);
        }
        if let Some(error) = &self.error {
            frame.render_widget(
                Paragraph::new(error.to_string()).style(Style::default().fg(Color::Red)),
                rows[3],
            );
        }
        frame.render_widget(
            Paragraph::new("Enter save · Tab next field · Esc cancel")
                .style(Style::default().fg(Color::DarkGray)),
            rows[4],
        );
    }
}

fn field_text<'a>(field: &'a TextArea<'static>) -> &'a str {
    field.lines().first().map(String::as_str).unwrap_or("")
}

pub fn render_add_task<B>(term: &mut Terminal<B>, app: &mut App, config: &Config) -> Result<AppState>
where
    B: Backend,
{
    let mut form = AddTaskForm::new(config);
    loop {
        term.draw(|frame| {
            let area = frame.size();
            draw_tasks(frame, area, app);
            form.draw(frame);
        })?;
        match form.handle_input(crossterm::event::read()?.into()) {
            FormOutcome::Pending => {}
            FormOutcome::Submitted(task) => {
                info!("Adding {:?} due {}", task.name, task.due_date);
                app.submit(task);
                return Ok(AppState::Home);
            }
            FormOutcome::Cancelled => return Ok(AppState::Home),
        }
    }
}
