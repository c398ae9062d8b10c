//! Pure task filtering.

use crate::task::{Category, Task};
use chrono::{DateTime, Local};

/// Named predicate classes applied to the task list for display.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TaskFilter {
    #[default]
    All,
    Active,
    Completed,
    Today,
    Upcoming,
    Overdue,
}

impl TaskFilter {
    pub const ALL: [TaskFilter; 6] = [
        TaskFilter::All,
        TaskFilter::Active,
        TaskFilter::Completed,
        TaskFilter::Today,
        TaskFilter::Upcoming,
        TaskFilter::Overdue,
    ];

    /// Lookup key into the localized string tables.
    pub fn label_key(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Active => "active",
            Self::Completed => "completed",
            Self::Today => "today",
            Self::Upcoming => "upcoming",
            Self::Overdue => "overdue",
        }
    }

    fn matches(self, task: &Task, now: DateTime<Local>) -> bool {
        match self {
            Self::All => true,
            Self::Active => !task.is_completed,
            Self::Completed => task.is_completed,
            // Local calendar day, not a 24h window.
            Self::Today => task
                .due_date
                .is_some_and(|due| due.date_naive() == now.date_naive()),
            // Strictly after now; overlaps Today for tasks due later
            // today. Kept as-is.
            Self::Upcoming => task.due_date.is_some_and(|due| due > now),
            Self::Overdue => task.due_date.is_some_and(|due| due < now) && !task.is_completed,
        }
    }
}

/// The visible subsequence of `tasks`: category predicate first, then
/// the filter predicate. Store order is preserved; nothing is mutated
/// or cached.
pub fn filtered<'a>(
    tasks: &'a [Task],
    category: Option<Category>,
    filter: TaskFilter,
    now: DateTime<Local>,
) -> Vec<&'a Task> {
    tasks
        .iter()
        .filter(|task| category.is_none_or(|c| task.category == c))
        .filter(|task| filter.matches(task, now))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::TaskDraft;
    use chrono::{Duration, TimeZone};

    fn noon() -> DateTime<Local> {
        Local.with_ymd_and_hms(2026, 8, 6, 12, 0, 0).unwrap()
    }

    fn task(title: &str, due: Option<DateTime<Local>>, completed: bool) -> Task {
        let mut task = Task::new(TaskDraft {
            title: title.to_owned(),
            due_date: due,
            ..Default::default()
        });
        task.is_completed = completed;
        task
    }

    fn titles(tasks: &[&Task]) -> Vec<String> {
        tasks.iter().map(|t| t.title.clone()).collect()
    }

    #[test]
    fn all_with_no_category_is_the_identity() {
        let tasks = vec![
            task("a", None, false),
            task("b", Some(noon()), true),
            task("c", None, false),
        ];
        let visible = filtered(&tasks, None, TaskFilter::All, noon());
        assert_eq!(titles(&visible), ["a", "b", "c"]);
    }

    #[test]
    fn active_and_completed_partition_the_list() {
        let tasks = vec![
            task("a", None, false),
            task("b", None, true),
            task("c", None, false),
            task("d", None, true),
        ];
        let active = filtered(&tasks, None, TaskFilter::Active, noon());
        let completed = filtered(&tasks, None, TaskFilter::Completed, noon());

        assert!(active.iter().all(|t| !t.is_completed));
        assert!(completed.iter().all(|t| t.is_completed));
        assert_eq!(active.len() + completed.len(), tasks.len());
        assert_eq!(titles(&active), ["a", "c"]);
        assert_eq!(titles(&completed), ["b", "d"]);
    }

    #[test]
    fn overdue_and_today_split_a_mixed_list() {
        let now = noon();
        let tasks = vec![
            task("Buy milk", Some(now + Duration::hours(6)), false),
            task("Report", Some(now - Duration::days(1)), false),
        ];

        let overdue = filtered(&tasks, None, TaskFilter::Overdue, now);
        assert_eq!(titles(&overdue), ["Report"]);

        let today = filtered(&tasks, None, TaskFilter::Today, now);
        assert_eq!(titles(&today), ["Buy milk"]);
    }

    #[test]
    fn today_uses_calendar_day_boundaries() {
        let now = noon();
        let just_before_midnight = Local.with_ymd_and_hms(2026, 8, 6, 23, 59, 0).unwrap();
        let tomorrow_morning = Local.with_ymd_and_hms(2026, 8, 7, 0, 1, 0).unwrap();
        let tasks = vec![
            task("late tonight", Some(just_before_midnight), false),
            task("tomorrow", Some(tomorrow_morning), false),
            // Within 24h of now but yesterday's calendar day.
            task("last night", Some(now - Duration::hours(13)), false),
        ];
        let today = filtered(&tasks, None, TaskFilter::Today, now);
        assert_eq!(titles(&today), ["late tonight"]);
    }

    #[test]
    fn upcoming_includes_tasks_due_later_today() {
        let now = noon();
        let later_today = now + Duration::hours(3);
        let tasks = vec![task("call", Some(later_today), false)];

        let upcoming = filtered(&tasks, None, TaskFilter::Upcoming, now);
        let today = filtered(&tasks, None, TaskFilter::Today, now);
        assert_eq!(upcoming.len(), 1);
        assert_eq!(today.len(), 1);
    }

    #[test]
    fn overdue_excludes_completed_tasks() {
        let now = noon();
        let tasks = vec![
            task("done late", Some(now - Duration::hours(2)), true),
            task("still open", Some(now - Duration::hours(2)), false),
        ];
        let overdue = filtered(&tasks, None, TaskFilter::Overdue, now);
        assert_eq!(titles(&overdue), ["still open"]);
    }

    #[test]
    fn tasks_without_due_dates_never_match_date_filters() {
        let tasks = vec![task("no due", None, false)];
        for filter in [TaskFilter::Today, TaskFilter::Upcoming, TaskFilter::Overdue] {
            assert!(filtered(&tasks, None, filter, noon()).is_empty());
        }
    }

    #[test]
    fn category_predicate_applies_before_the_filter() {
        let mut work = task("standup", None, false);
        work.category = Category::Work;
        let tasks = vec![task("groceries", None, false), work];

        let visible = filtered(&tasks, Some(Category::Work), TaskFilter::Active, noon());
        assert_eq!(titles(&visible), ["standup"]);

        let none = filtered(&tasks, Some(Category::Health), TaskFilter::All, noon());
        assert!(none.is_empty());
    }

    #[test]
    fn store_order_is_preserved() {
        let now = noon();
        let tasks: Vec<Task> = (0..5)
            .map(|i| task(&format!("t{i}"), Some(now + Duration::minutes(i)), false))
            .collect();
        let visible = filtered(&tasks, None, TaskFilter::Upcoming, now - Duration::hours(1));
        assert_eq!(titles(&visible), ["t0", "t1", "t2", "t3", "t4"]);
    }
}
