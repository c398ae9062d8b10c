//! Reminder scheduling.
//!
//! The store talks to a [`ReminderScheduler`] collaborator; the shipped
//! implementation is [`ReminderQueue`], an in-process queue the UI polls
//! for due reminders each tick.

use chrono::{DateTime, Local, Timelike};
use tracing::{debug, info};
use uuid::Uuid;

/// Contract the task store uses to schedule local reminders.
pub trait ReminderScheduler {
    /// Asks for permission to deliver reminders. Denial is logged, never
    /// fatal; scheduling calls still proceed silently without delivery.
    fn request_permission(&mut self);

    /// Schedules a one-shot reminder. The fire time is truncated to
    /// minute granularity; re-scheduling an id replaces the pending
    /// entry.
    fn schedule(&mut self, id: Uuid, fire_at: DateTime<Local>, title: &str, body: &str);

    /// Cancels the pending reminder for `id`, if any.
    fn cancel(&mut self, id: Uuid);
}

/// A reminder waiting to fire.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingReminder {
    pub id: Uuid,
    pub fire_at: DateTime<Local>,
    pub title: String,
    pub body: String,
}

/// In-process scheduler. Nothing is delivered until permission has been
/// granted; entries scheduled meanwhile stay queued.
#[derive(Debug, Default)]
pub struct ReminderQueue {
    pending: Vec<PendingReminder>,
    permission_granted: bool,
}

impl ReminderQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drains and returns every reminder whose fire time is at or before
    /// `now`. Each reminder fires at most once.
    pub fn due(&mut self, now: DateTime<Local>) -> Vec<PendingReminder> {
        if !self.permission_granted {
            return Vec::new();
        }
        let (due, pending) = std::mem::take(&mut self.pending)
            .into_iter()
            .partition(|reminder| reminder.fire_at <= now);
        self.pending = pending;
        due
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }
}

impl ReminderScheduler for ReminderQueue {
    fn request_permission(&mut self) {
        self.permission_granted = true;
        info!("reminder delivery enabled");
    }

    fn schedule(&mut self, id: Uuid, fire_at: DateTime<Local>, title: &str, body: &str) {
        let fire_at = truncate_to_minute(fire_at);
        self.cancel(id);
        debug!("scheduling reminder for task {id} at {fire_at}");
        self.pending.push(PendingReminder {
            id,
            fire_at,
            title: title.to_owned(),
            body: body.to_owned(),
        });
    }

    fn cancel(&mut self, id: Uuid) {
        self.pending.retain(|reminder| reminder.id != id);
    }
}

/// Drops seconds and sub-seconds, keeping year through minute.
fn truncate_to_minute(at: DateTime<Local>) -> DateTime<Local> {
    at.with_second(0)
        .and_then(|t| t.with_nanosecond(0))
        .unwrap_or(at)
}
