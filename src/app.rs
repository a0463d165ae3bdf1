use chrono::NaiveDate;
use log::{debug, info};

use crate::{
    error::{Error, Result},
    store::TaskStore,
    types::{Task, DATE_FORMAT},
    validate::ValidatedTask,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Warning,
}

/// A popup message that blocks other input until dismissed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub title: String,
    pub body: String,
}

impl Notice {
    pub fn new(level: NoticeLevel, title: impl Into<String>, body: impl Into<String>) -> Self {
        Notice {
            level,
            title: title.into(),
            body: body.into(),
        }
    }
}

/// State shared by every view: the tasks, which one is highlighted, and
/// any notice waiting to be dismissed.
#[derive(Debug, Default)]
pub struct App {
    store: TaskStore,
    selected: Option<usize>,
    notice: Option<Notice>,
}

impl App {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn notify(&mut self, notice: Notice) {
        debug!("Showing notice {:?}", notice.title);
        self.notice = Some(notice);
    }

    pub fn dismiss_notice(&mut self) -> Option<Notice> {
        self.notice.take()
    }

    /// Adds the task and highlights it.
    pub fn submit(&mut self, task: ValidatedTask) {
        let ValidatedTask {
            name,
            due_date,
            category,
        } = task;
        self.store.add(name, due_date, category);
        self.selected = Some(self.store.len() - 1);
    }

    /// Removes the highlighted task. With no highlight, or a highlight past
    /// the end of the list, nothing changes.
    pub fn complete_selected(&mut self) -> Result<Task> {
        let index = self.selected.ok_or_else(|| Error::OutOfRange {
            index: None,
            len: self.store.len(),
        })?;
        let task = self.store.remove_at(index)?;
        info!("Completed {:?}", task.name());
        self.selected = match self.store.len() {
            0 => None,
            len => Some(index.min(len - 1)),
        };
        Ok(task)
    }

    pub fn reminders(&self, today: NaiveDate) -> Notice {
        let due = self.store.due_today(today);
        debug!(
            "{} of {} tasks due on {}",
            due.len(),
            self.store.len(),
            today.format(DATE_FORMAT)
        );
        let body = if due.is_empty() {
            "No tasks due today.".to_owned()
        } else {
            due.iter()
                .map(|t| t.to_string())
                .collect::<Vec<_>>()
                .join("\n")
        };
        Notice::new(NoticeLevel::Info, "Reminders", body)
    }

    pub fn select_next(&mut self) {
        if self.store.is_empty() {
            return;
        }
        self.selected = Some(match self.selected {
            Some(i) if i + 1 < self.store.len() => i + 1,
            Some(i) => i,
            None => 0,
        });
    }

    pub fn select_previous(&mut self) {
        if self.store.is_empty() {
            return;
        }
        self.selected = Some(match self.selected {
            Some(i) => i.saturating_sub(1),
            None => self.store.len() - 1,
        });
    }

    pub fn lines(&self) -> Vec<String> {
        self.store.all().iter().map(Task::to_string).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::validate;
    use rstest::{fixture, rstest};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[fixture]
    fn app() -> App {
        let mut app = App::new();
        app.submit(validate("Submit report", "2025-03-10", "Work").unwrap());
        app.submit(validate("Buy groceries", "2025-03-08", "Personal").unwrap());
        app.submit(validate("Call plumber", "2025-03-08", "Home").unwrap());
        app
    }

    #[rstest]
    fn submit_selects_the_new_task(app: App) {
        assert_eq!(app.selected(), Some(2));
        assert_eq!(app.lines()[2], "Call plumber - Home - Due: 2025-03-08");
    }

    #[test]
    fn complete_without_selection_is_out_of_range() {
        let mut app = App::new();
        assert!(matches!(
            app.complete_selected(),
            Err(Error::OutOfRange { index: None, len: 0 })
        ));
    }

    #[rstest]
    fn completing_the_last_row_moves_selection_up(mut app: App) {
        let task = app.complete_selected().unwrap();

        assert_eq!(task.name(), "Call plumber");
        assert_eq!(app.selected(), Some(1));
        assert_eq!(app.store().len(), 2);
    }

    #[rstest]
    fn completing_a_middle_row_keeps_position(mut app: App) {
        app.select_previous();
        let task = app.complete_selected().unwrap();

        assert_eq!(task.name(), "Buy groceries");
        assert_eq!(app.selected(), Some(1));
        assert_eq!(
            app.lines(),
            vec![
                "Submit report - Work - Due: 2025-03-10",
                "Call plumber - Home - Due: 2025-03-08",
            ]
        );
    }

    #[test]
    fn completing_everything_clears_selection() {
        let mut app = App::new();
        app.submit(validate("Only", "2025-01-01", "Work").unwrap());
        app.complete_selected().unwrap();

        assert_eq!(app.selected(), None);
        assert!(app.complete_selected().is_err());
    }

    #[rstest]
    fn selection_stops_at_the_ends(mut app: App) {
        app.select_next();
        assert_eq!(app.selected(), Some(2));
        app.select_previous();
        app.select_previous();
        app.select_previous();
        assert_eq!(app.selected(), Some(0));
    }

    #[test]
    fn selection_on_empty_list_stays_empty() {
        let mut app = App::new();
        app.select_next();
        app.select_previous();
        assert_eq!(app.selected(), None);
    }

    #[rstest]
    fn reminders_list_due_tasks(app: App) {
        let notice = app.reminders(date(2025, 3, 8));

        assert_eq!(notice.level, NoticeLevel::Info);
        assert_eq!(
            notice.body,
            "Buy groceries - Personal - Due: 2025-03-08\nCall plumber - Home - Due: 2025-03-08"
        );
    }

    #[rstest]
    fn reminders_without_matches(app: App) {
        assert_eq!(app.reminders(date(2025, 3, 9)).body, "No tasks due today.");
    }

    #[rstest]
    fn notices_are_dismissed_once(mut app: App) {
        app.notify(Notice::new(NoticeLevel::Warning, "Careful", "body"));
        assert!(app.dismiss_notice().is_some());
        assert!(app.dismiss_notice().is_none());
    }
}
