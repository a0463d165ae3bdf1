use crate::{
    app::{App, Notice, NoticeLevel},
    commands::{parse_home_command, CommandParseError, HomeCommand, HELP},
    error::Result,
};
use chrono::{Local, NaiveDate};
use log::{debug, warn};
use ratatui::{
    prelude::*,
    style::Style,
    widgets::{Block, Borders, List, ListState, Paragraph},
    Frame,
};
use tui_textarea::{Input, Key, TextArea};

use super::{notice::draw_notice, AppState};

const PLACEHOLDER: &str = "Enter a command... (? for help)";

pub fn render_home<B>(term: &mut Terminal<B>, app: &mut App) -> Result<AppState>
where
    B: Backend,
{
    let mut command_editor = command_editor();
    loop {
        term.draw(|frame| draw_home(frame, app, &command_editor))?;
        let input: Input = crossterm::event::read()?.into();
        let today = Local::now().date_naive();
        if let Some(next) = handle_home_input(app, &mut command_editor, input, today) {
            return Ok(next);
        }
    }
}

fn command_editor() -> TextArea<'static> {
    let mut editor = TextArea::default();
    editor.set_cursor_line_style(Style::default());
    editor.set_placeholder_text(PLACEHOLDER);
    editor.set_style(Style::default().fg(Color::White));
    editor.set_block(Block::default().borders(Borders::ALL).title("command"));
    editor
}

/// Applies one key press to the home view. Returns the next view when the
/// input leaves this one.
pub(crate) fn handle_home_input(
    app: &mut App,
    editor: &mut TextArea<'static>,
    input: Input,
    today: NaiveDate,
) -> Option<AppState> {
    if app.notice().is_some() {
        // resize and mouse events arrive as Key::Null
        if input.key != Key::Null {
            app.dismiss_notice();
        }
        return None;
    }
    match input {
        Input { key: Key::Esc, .. }
        | Input {
            key: Key::Char('q'),
            ctrl: true,
            ..
        } => Some(AppState::Exit),
        Input { key: Key::Up, .. } => {
            app.select_previous();
            None
        }
        Input { key: Key::Down, .. } => {
            app.select_next();
            None
        }
        // Ctrl-M inserts a newline in TextArea; the command line is one line
        Input {
            key: Key::Char('m'),
            ctrl: true,
            ..
        } => None,
        Input {
            key: Key::Enter, ..
        } => {
            let line = editor.lines().join(" ");
            *editor = command_editor();
            match parse_home_command(&line) {
                Ok(command) => run_command(app, command, today),
                Err(CommandParseError::Empty) => None,
                Err(e) => {
                    debug!("Rejected command {line:?}: {e}");
                    editor.set_placeholder_text(e.to_string());
                    None
                }
            }
        }
        input => {
            editor.input(input);
            None
        }
    }
}

fn run_command(app: &mut App, command: HomeCommand, today: NaiveDate) -> Option<AppState> {
    debug!("Running {command:?}");
    match command {
        HomeCommand::Add => return Some(AppState::AddTask),
        HomeCommand::Complete => {
            if let Err(e) = app.complete_selected() {
                warn!("Could not complete task: {e}");
                app.notify(Notice::new(
                    NoticeLevel::Warning,
                    "No task selected",
                    e.to_string(),
                ));
            }
        }
        HomeCommand::Reminders => {
            let reminders = app.reminders(today);
            app.notify(reminders);
        }
        HomeCommand::Help => app.notify(Notice::new(NoticeLevel::Info, "Commands", HELP)),
        HomeCommand::Quit => return Some(AppState::Exit),
    }
    None
}

pub(crate) fn draw_home(frame: &mut Frame, app: &App, editor: &TextArea) {
    let chunks = Layout::default()
        .constraints([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(3),
        ])
        .direction(Direction::Vertical)
        .split(frame.size());
    frame.render_widget(
        Paragraph::new("To-Do List")
            .alignment(Alignment::Center)
            .style(Style::default().add_modifier(Modifier::BOLD)),
        chunks[0],
    );
    draw_tasks(frame, chunks[1], app);
    frame.render_widget(editor.widget(), chunks[2]);
    if let Some(notice) = app.notice() {
        draw_notice(frame, notice);
    }
}

pub(crate) fn draw_tasks(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default().title("tasks").borders(Borders::ALL);
    if app.store().is_empty() {
        frame.render_widget(
            Paragraph::new("No tasks yet. Type add to create one.")
                .style(Style::default().fg(Color::DarkGray))
                .block(block),
            area,
        );
        return;
    }
    let list = List::new(app.lines())
        .block(block)
        .style(Style::default().fg(Color::White))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");
    let mut state = ListState::default().with_selected(app.selected());
    frame.render_stateful_widget(list, area, &mut state);
}
