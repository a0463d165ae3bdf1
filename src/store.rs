use chrono::NaiveDate;
use log::debug;

use crate::{
    error::{Error, Result},
    types::Task,
};

/// Ordered, in-memory task list. Insertion order is display order and a
/// task's only identity is its current position.
#[derive(Debug, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a task. Inputs are expected to have been through
    /// [`crate::validate::validate`] already.
    pub fn add(&mut self, name: String, due_date: NaiveDate, category: String) {
        debug!("Adding task {name:?} due {due_date} at position {}", self.tasks.len());
        self.tasks.push(Task::new(name, due_date, category));
    }

    /// Removes the task at `index`, shifting every later task down by one.
    pub fn remove_at(&mut self, index: usize) -> Result<Task> {
        if index >= self.tasks.len() {
            return Err(Error::OutOfRange {
                index: Some(index),
                len: self.tasks.len(),
            });
        }
        let task = self.tasks.remove(index);
        debug!("Removed task {:?} from position {index}", task.name());
        Ok(task)
    }

    /// Tasks whose due date is exactly `reference`, in list order.
    pub fn due_today(&self, reference: NaiveDate) -> Vec<&Task> {
        self.tasks
            .iter()
            .filter(|t| t.due_date() == reference)
            .collect()
    }

    pub fn all(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[fixture]
    fn store() -> TaskStore {
        let mut store = TaskStore::new();
        store.add("Submit report".to_owned(), date(2025, 3, 10), "Work".to_owned());
        store.add("Buy groceries".to_owned(), date(2025, 3, 8), "Personal".to_owned());
        store.add("Call plumber".to_owned(), date(2025, 3, 8), "Personal".to_owned());
        store
    }

    fn names(tasks: &[Task]) -> Vec<&str> {
        tasks.iter().map(Task::name).collect()
    }

    #[rstest]
    fn add_appends_to_the_end(mut store: TaskStore) {
        store.add("Water plants".to_owned(), date(2024, 12, 31), "Home".to_owned());

        assert_eq!(store.len(), 4);
        let last = store.all().last().unwrap();
        assert_eq!(
            last,
            &Task::new("Water plants".to_owned(), date(2024, 12, 31), "Home".to_owned())
        );
    }

    #[rstest]
    #[case(0, "Submit report", vec!["Buy groceries", "Call plumber"])]
    #[case(1, "Buy groceries", vec!["Submit report", "Call plumber"])]
    #[case(2, "Call plumber", vec!["Submit report", "Buy groceries"])]
    fn remove_at_shifts_later_tasks(
        mut store: TaskStore,
        #[case] index: usize,
        #[case] removed: &str,
        #[case] remaining: Vec<&str>,
    ) {
        let task = store.remove_at(index).unwrap();

        assert_eq!(task.name(), removed);
        assert_eq!(names(store.all()), remaining);
    }

    #[rstest]
    fn remove_at_out_of_range_leaves_store_unchanged(mut store: TaskStore) {
        let err = store.remove_at(3).unwrap_err();

        assert!(matches!(
            err,
            Error::OutOfRange {
                index: Some(3),
                len: 3
            }
        ));
        assert_eq!(
            names(store.all()),
            vec!["Submit report", "Buy groceries", "Call plumber"]
        );
    }

    #[test]
    fn remove_at_on_empty_store_fails() {
        let mut store = TaskStore::new();
        assert!(matches!(
            store.remove_at(0),
            Err(Error::OutOfRange {
                index: Some(0),
                len: 0
            })
        ));
        assert!(store.is_empty());
    }

    #[rstest]
    fn due_today_keeps_insertion_order(store: TaskStore) {
        let due: Vec<&str> = store
            .due_today(date(2025, 3, 8))
            .into_iter()
            .map(Task::name)
            .collect();
        assert_eq!(due, vec!["Buy groceries", "Call plumber"]);
    }

    #[rstest]
    #[case(date(2025, 3, 9))]
    #[case(date(2025, 3, 11))]
    fn due_today_is_exact_equality(store: TaskStore, #[case] reference: NaiveDate) {
        assert!(store.due_today(reference).is_empty());
    }
}
