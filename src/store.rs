//! The task store: single source of truth for the ordered task list.
//!
//! Every mutating operation re-serializes the whole list to the
//! `"Tasks"` slot. O(n) per mutation, fine at the expected scale of
//! hundreds of tasks.

use crate::filter::{self, TaskFilter};
use crate::notify::ReminderScheduler;
use crate::prefs::{Prefs, TASKS_SLOT};
use crate::task::{Category, Task, TaskDraft};
use chrono::Local;
use std::cell::RefCell;
use std::collections::BTreeSet;
use std::rc::Rc;
use uuid::Uuid;

/// Title used for every scheduled reminder; the task title is the body.
const REMINDER_TITLE: &str = "Task Reminder";

/// Owns the ordered task list; the list order is the display order.
///
/// Not thread-safe: confine to the UI thread.
pub struct TaskStore {
    tasks: Vec<Task>,
    prefs: Rc<RefCell<Prefs>>,
    scheduler: Rc<RefCell<dyn ReminderScheduler>>,
}

impl TaskStore {
    /// Restores the saved list from the `"Tasks"` slot. Absent or
    /// corrupt data yields an empty list.
    pub fn new(prefs: Rc<RefCell<Prefs>>, scheduler: Rc<RefCell<dyn ReminderScheduler>>) -> Self {
        let tasks = prefs.borrow().get::<Vec<Task>>(TASKS_SLOT).unwrap_or_default();
        Self {
            tasks,
            prefs,
            scheduler,
        }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Appends a new task built from `draft`, persists, and schedules
    /// its reminder when one is set. Empty titles are the caller's
    /// responsibility to prevent.
    pub fn add(&mut self, draft: TaskDraft) -> Task {
        let task = Task::new(draft);
        self.tasks.push(task.clone());
        self.persist();

        if task.has_reminder {
            if let Some(at) = task.reminder_date {
                self.scheduler
                    .borrow_mut()
                    .schedule(task.id, at, REMINDER_TITLE, &task.title);
            }
        }
        task
    }

    /// Replaces the stored task with matching id; no-op when the id is
    /// unknown. Re-evaluates scheduling: a reminder with a date is
    /// (re)scheduled, anything else cancels the pending entry.
    pub fn update(&mut self, task: Task) {
        let Some(slot) = self.tasks.iter_mut().find(|t| t.id == task.id) else {
            return;
        };
        *slot = task.clone();
        self.persist();

        let mut scheduler = self.scheduler.borrow_mut();
        match (task.has_reminder, task.reminder_date) {
            (true, Some(at)) => scheduler.schedule(task.id, at, REMINDER_TITLE, &task.title),
            _ => scheduler.cancel(task.id),
        }
    }

    /// Removes the task with matching id, cancelling its reminder
    /// first; no-op when the id is unknown.
    pub fn delete_by_id(&mut self, id: Uuid) {
        let Some(index) = self.tasks.iter().position(|t| t.id == id) else {
            return;
        };
        self.scheduler.borrow_mut().cancel(id);
        self.tasks.remove(index);
        self.persist();
    }

    /// Removes the tasks at `indices`, cancelling their reminders
    /// first. Out-of-range positions are ignored.
    pub fn delete_at(&mut self, indices: &BTreeSet<usize>) {
        for &index in indices {
            if let Some(task) = self.tasks.get(index) {
                self.scheduler.borrow_mut().cancel(task.id);
            }
        }
        let mut position = 0;
        self.tasks.retain(|_| {
            let keep = !indices.contains(&position);
            position += 1;
            keep
        });
        self.persist();
    }

    /// Moves the tasks at `from` so they land, in their current relative
    /// order, at offset `to` as counted in the pre-removal list. All
    /// other relative orderings are preserved.
    pub fn move_tasks(&mut self, from: &BTreeSet<usize>, to: usize) {
        let mut moved = Vec::with_capacity(from.len());
        for &index in from.iter().rev() {
            if index < self.tasks.len() {
                moved.push(self.tasks.remove(index));
            }
        }
        moved.reverse();

        let removed_before = from.iter().filter(|&&index| index < to).count();
        let insert_at = to.saturating_sub(removed_before).min(self.tasks.len());
        for (offset, task) in moved.into_iter().enumerate() {
            self.tasks.insert(insert_at + offset, task);
        }
        self.persist();
    }

    /// Serializes the whole ordered list to the `"Tasks"` slot. Called
    /// after every mutation; write failures are logged downstream and
    /// the in-memory list stays authoritative for the session.
    pub fn persist(&self) {
        self.prefs.borrow_mut().set(TASKS_SLOT, &self.tasks);
    }

    /// The visible subsequence under the given category and filter,
    /// evaluated against the current local time. Recomputed on every
    /// call.
    pub fn filtered_tasks(&self, category: Option<Category>, filter: TaskFilter) -> Vec<&Task> {
        filter::filtered(&self.tasks, category, filter, Local::now())
    }
}
