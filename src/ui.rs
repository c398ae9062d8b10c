//! Terminal UI: event loop, list rendering, form and popups.
//!
//! All store mutations happen synchronously in the key handler on the
//! UI thread; the reminder queue is polled between input events.

use crate::filter::TaskFilter;
use crate::lang::{Language, LanguageManager};
use crate::notify::{PendingReminder, ReminderQueue};
use crate::store::TaskStore;
use crate::task::{Category, Priority, Task, TaskDraft};
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Tabs, Wrap},
    Frame, Terminal,
};
use std::cell::RefCell;
use std::collections::BTreeSet;
use std::io;
use std::rc::Rc;
use std::time::Duration;
use uuid::Uuid;

const STAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

enum Mode {
    List,
    Form(TaskForm),
    Settings,
    ConfirmDelete(Uuid),
    Reminders(Vec<PendingReminder>),
}

pub struct App {
    store: TaskStore,
    lang: LanguageManager,
    reminders: Rc<RefCell<ReminderQueue>>,
    filter: TaskFilter,
    category: Option<Category>,
    selected: usize,
    mode: Mode,
}

impl App {
    pub fn new(
        store: TaskStore,
        lang: LanguageManager,
        reminders: Rc<RefCell<ReminderQueue>>,
    ) -> Self {
        Self {
            store,
            lang,
            reminders,
            filter: TaskFilter::All,
            category: None,
            selected: 0,
            mode: Mode::List,
        }
    }

    fn visible(&self) -> Vec<&Task> {
        self.store.filtered_tasks(self.category, self.filter)
    }

    fn visible_len(&self) -> usize {
        self.visible().len()
    }

    fn selected_task(&self) -> Option<Task> {
        self.visible().get(self.selected).map(|task| (*task).clone())
    }

    fn clamp_selection(&mut self) {
        self.selected = self.selected.min(self.visible_len().saturating_sub(1));
    }

    /// Returns true when the app should quit.
    fn handle_key(&mut self, code: KeyCode) -> bool {
        match std::mem::replace(&mut self.mode, Mode::List) {
            Mode::List => return self.handle_list_key(code),
            Mode::Form(mut form) => match code {
                KeyCode::Esc => {}
                KeyCode::Enter => {
                    if !self.save_form(&mut form) {
                        self.mode = Mode::Form(form);
                    }
                }
                other => {
                    form.input(other);
                    self.mode = Mode::Form(form);
                }
            },
            Mode::Settings => match code {
                KeyCode::Esc | KeyCode::Enter => {}
                KeyCode::Left | KeyCode::Right | KeyCode::Char(' ') => {
                    let next = match self.lang.current() {
                        Language::English => Language::Turkish,
                        Language::Turkish => Language::English,
                    };
                    self.lang.set_language(next);
                    self.mode = Mode::Settings;
                }
                _ => self.mode = Mode::Settings,
            },
            Mode::ConfirmDelete(id) => match code {
                KeyCode::Enter | KeyCode::Char('y') => {
                    self.store.delete_by_id(id);
                    self.clamp_selection();
                }
                KeyCode::Esc | KeyCode::Char('n') => {}
                _ => self.mode = Mode::ConfirmDelete(id),
            },
            // Any key dismisses the reminder popup.
            Mode::Reminders(_) => {}
        }
        false
    }

    fn handle_list_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Char('q') => return true,
            KeyCode::Char('a') => self.mode = Mode::Form(TaskForm::new()),
            KeyCode::Char('e') => {
                if let Some(task) = self.selected_task() {
                    self.mode = Mode::Form(TaskForm::for_task(&task));
                }
            }
            KeyCode::Char('d') => {
                if let Some(task) = self.selected_task() {
                    self.mode = Mode::ConfirmDelete(task.id);
                }
            }
            KeyCode::Char(' ') => {
                if let Some(mut task) = self.selected_task() {
                    task.is_completed = !task.is_completed;
                    self.store.update(task);
                    self.clamp_selection();
                }
            }
            KeyCode::Char('s') => self.mode = Mode::Settings,
            KeyCode::Up => self.selected = self.selected.saturating_sub(1),
            KeyCode::Down => {
                let len = self.visible_len();
                if len > 0 && self.selected < len - 1 {
                    self.selected += 1;
                }
            }
            KeyCode::Left => self.cycle_filter(-1),
            KeyCode::Right => self.cycle_filter(1),
            KeyCode::Tab => self.cycle_category(1),
            KeyCode::BackTab => self.cycle_category(-1),
            KeyCode::Char('K') => self.move_selected(-1),
            KeyCode::Char('J') => self.move_selected(1),
            KeyCode::Char('x') => self.clear_completed(),
            _ => {}
        }
        false
    }

    /// Deletes every completed task in one pass.
    fn clear_completed(&mut self) {
        let indices: BTreeSet<usize> = self
            .store
            .tasks()
            .iter()
            .enumerate()
            .filter(|(_, task)| task.is_completed)
            .map(|(index, _)| index)
            .collect();
        if !indices.is_empty() {
            self.store.delete_at(&indices);
            self.clamp_selection();
        }
    }

    fn cycle_filter(&mut self, direction: isize) {
        let filters = TaskFilter::ALL;
        let current = filters.iter().position(|f| *f == self.filter).unwrap_or(0);
        let next = (current as isize + direction).rem_euclid(filters.len() as isize);
        self.filter = filters[next as usize];
        self.clamp_selection();
    }

    fn cycle_category(&mut self, direction: isize) {
        // Index 0 is "all categories", 1.. map into Category::ALL.
        let count = Category::ALL.len() as isize + 1;
        let current = match self.category {
            None => 0,
            Some(c) => Category::ALL.iter().position(|x| *x == c).unwrap_or(0) as isize + 1,
        };
        let next = (current + direction).rem_euclid(count);
        self.category = if next == 0 {
            None
        } else {
            Some(Category::ALL[next as usize - 1])
        };
        self.clamp_selection();
    }

    /// Moves the selected task one position up or down in store order.
    fn move_selected(&mut self, direction: isize) {
        let Some(task) = self.selected_task() else {
            return;
        };
        let Some(index) = self.store.tasks().iter().position(|t| t.id == task.id) else {
            return;
        };
        let to = if direction < 0 {
            if index == 0 {
                return;
            }
            index - 1
        } else {
            if index + 1 >= self.store.len() {
                return;
            }
            index + 2
        };
        self.store.move_tasks(&BTreeSet::from([index]), to);
        if let Some(position) = self.visible().iter().position(|t| t.id == task.id) {
            self.selected = position;
        }
    }

    /// Returns true when the form was saved and closed. Empty titles
    /// keep the save inert; unparseable dates flag the form instead of
    /// saving.
    fn save_form(&mut self, form: &mut TaskForm) -> bool {
        if form.title.trim().is_empty() {
            return false;
        }
        let (due_date, reminder_date) =
            match (parse_stamp(&form.due_text), parse_stamp(&form.reminder_text)) {
                (Ok(due), Ok(reminder)) => (due, reminder),
                _ => {
                    form.invalid_date = true;
                    return false;
                }
            };
        let notes = match form.notes.trim() {
            "" => None,
            trimmed => Some(trimmed.to_owned()),
        };
        let draft = TaskDraft {
            title: form.title.trim().to_owned(),
            due_date,
            priority: form.priority,
            category: form.category,
            notes,
            has_reminder: reminder_date.is_some(),
            reminder_date,
        };

        match form.editing {
            Some(id) => {
                let existing = self.store.tasks().iter().find(|t| t.id == id).cloned();
                if let Some(mut task) = existing {
                    task.title = draft.title;
                    task.due_date = draft.due_date;
                    task.priority = draft.priority;
                    task.category = draft.category;
                    task.notes = draft.notes;
                    task.has_reminder = draft.has_reminder;
                    task.reminder_date = draft.reminder_date;
                    self.store.update(task);
                }
            }
            None => {
                self.store.add(draft);
            }
        }
        true
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FormField {
    Title,
    Priority,
    Category,
    DueDate,
    Reminder,
    Notes,
}

impl FormField {
    const ORDER: [FormField; 6] = [
        FormField::Title,
        FormField::Priority,
        FormField::Category,
        FormField::DueDate,
        FormField::Reminder,
        FormField::Notes,
    ];

    fn step(self, direction: isize) -> FormField {
        let current = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        let next = (current as isize + direction).rem_euclid(Self::ORDER.len() as isize);
        Self::ORDER[next as usize]
    }
}

/// Add/edit form state. An empty date or reminder field means "none";
/// a non-empty reminder field turns the reminder on.
struct TaskForm {
    editing: Option<Uuid>,
    title: String,
    priority: Priority,
    category: Category,
    due_text: String,
    reminder_text: String,
    notes: String,
    field: FormField,
    invalid_date: bool,
}

impl TaskForm {
    fn new() -> Self {
        Self {
            editing: None,
            title: String::new(),
            priority: Priority::default(),
            category: Category::default(),
            due_text: String::new(),
            reminder_text: String::new(),
            notes: String::new(),
            field: FormField::Title,
            invalid_date: false,
        }
    }

    fn for_task(task: &Task) -> Self {
        Self {
            editing: Some(task.id),
            title: task.title.clone(),
            priority: task.priority,
            category: task.category,
            due_text: task
                .due_date
                .map(|d| d.format(STAMP_FORMAT).to_string())
                .unwrap_or_default(),
            reminder_text: task
                .reminder_date
                .map(|d| d.format(STAMP_FORMAT).to_string())
                .unwrap_or_default(),
            notes: task.notes.clone().unwrap_or_default(),
            field: FormField::Title,
            invalid_date: false,
        }
    }

    fn input(&mut self, code: KeyCode) {
        match code {
            KeyCode::Tab | KeyCode::Down => self.field = self.field.step(1),
            KeyCode::BackTab | KeyCode::Up => self.field = self.field.step(-1),
            KeyCode::Left => self.cycle_choice(-1),
            KeyCode::Right => self.cycle_choice(1),
            KeyCode::Backspace => {
                if let Some(text) = self.active_text_mut() {
                    text.pop();
                    self.invalid_date = false;
                }
            }
            KeyCode::Char(c) => {
                if let Some(text) = self.active_text_mut() {
                    text.push(c);
                    self.invalid_date = false;
                }
            }
            _ => {}
        }
    }

    fn cycle_choice(&mut self, direction: isize) {
        match self.field {
            FormField::Priority => {
                let current = Priority::ALL
                    .iter()
                    .position(|p| *p == self.priority)
                    .unwrap_or(0);
                let next =
                    (current as isize + direction).rem_euclid(Priority::ALL.len() as isize);
                self.priority = Priority::ALL[next as usize];
            }
            FormField::Category => {
                let current = Category::ALL
                    .iter()
                    .position(|c| *c == self.category)
                    .unwrap_or(0);
                let next =
                    (current as isize + direction).rem_euclid(Category::ALL.len() as isize);
                self.category = Category::ALL[next as usize];
            }
            _ => {}
        }
    }

    fn active_text_mut(&mut self) -> Option<&mut String> {
        match self.field {
            FormField::Title => Some(&mut self.title),
            FormField::DueDate => Some(&mut self.due_text),
            FormField::Reminder => Some(&mut self.reminder_text),
            FormField::Notes => Some(&mut self.notes),
            FormField::Priority | FormField::Category => None,
        }
    }
}

/// Parses an optional timestamp field: empty means none, otherwise
/// `YYYY-MM-DD HH:MM` or a bare `YYYY-MM-DD` (midnight).
fn parse_stamp(text: &str) -> Result<Option<DateTime<Local>>, ()> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(None);
    }
    let naive = NaiveDateTime::parse_from_str(text, STAMP_FORMAT)
        .or_else(|_| {
            NaiveDate::parse_from_str(text, "%Y-%m-%d").map(|d| d.and_time(NaiveTime::MIN))
        })
        .map_err(|_| ())?;
    Local
        .from_local_datetime(&naive)
        .earliest()
        .map(Some)
        .ok_or(())
}

pub fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|f| draw(f, app))?;

        if matches!(app.mode, Mode::List) {
            let due = app.reminders.borrow_mut().due(Local::now());
            if !due.is_empty() {
                app.mode = Mode::Reminders(due);
                continue;
            }
        }

        if event::poll(Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && app.handle_key(key.code) {
                    return Ok(());
                }
            }
        }
    }
}

fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(f.area());

    draw_filter_bar(f, app, chunks[0]);
    draw_category_bar(f, app, chunks[1]);
    draw_task_list(f, app, chunks[2]);
    draw_help(f, app, chunks[3]);

    match &app.mode {
        Mode::List => {}
        Mode::Form(form) => draw_form(f, app, form),
        Mode::Settings => draw_settings(f, app),
        Mode::ConfirmDelete(_) => draw_confirm(f, app),
        Mode::Reminders(due) => draw_reminders(f, app, due),
    }
}

fn draw_filter_bar(f: &mut Frame, app: &App, area: Rect) {
    let titles: Vec<Line> = TaskFilter::ALL
        .iter()
        .map(|filter| Line::from(app.lang.localized(filter.label_key())))
        .collect();
    let selected = TaskFilter::ALL
        .iter()
        .position(|filter| *filter == app.filter)
        .unwrap_or(0);
    let tabs = Tabs::new(titles)
        .select(selected)
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(app.lang.localized("tasks")),
        );
    f.render_widget(tabs, area);
}

fn draw_category_bar(f: &mut Frame, app: &App, area: Rect) {
    let mut titles = vec![Line::from(app.lang.localized("all"))];
    titles.extend(Category::ALL.iter().map(|category| {
        Line::from(vec![
            Span::styled(category.icon(), Style::default().fg(category.color())),
            Span::raw(" "),
            Span::raw(app.lang.localized(category.label_key())),
        ])
    }));
    let selected = match app.category {
        None => 0,
        Some(c) => Category::ALL.iter().position(|x| *x == c).unwrap_or(0) + 1,
    };
    let tabs = Tabs::new(titles)
        .select(selected)
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(app.lang.localized("category")),
        );
    f.render_widget(tabs, area);
}

fn draw_task_list(f: &mut Frame, app: &App, area: Rect) {
    let now = Local::now();
    let visible = app.visible();

    let mut block = Block::default().borders(Borders::ALL);
    let pending = app.reminders.borrow().pending_count();
    if pending > 0 {
        block = block.title(format!("{pending} {}", app.lang.localized("reminder")));
    }

    if app.store.is_empty() {
        let hint = format!("a: {}", app.lang.localized("newTask"));
        f.render_widget(
            Paragraph::new(hint)
                .style(Style::default().fg(Color::DarkGray))
                .block(block),
            area,
        );
        return;
    }

    let items: Vec<ListItem> = visible
        .iter()
        .map(|task| task_row(task, &app.lang, now))
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");

    let mut state = ListState::default();
    if !visible.is_empty() {
        state.select(Some(app.selected.min(visible.len() - 1)));
    }
    f.render_stateful_widget(list, area, &mut state);
}

fn task_row<'a>(task: &'a Task, lang: &LanguageManager, now: DateTime<Local>) -> ListItem<'a> {
    let mut spans = vec![
        Span::raw(if task.is_completed { "[x] " } else { "[ ] " }),
        Span::styled(task.category.icon(), Style::default().fg(task.category.color())),
        Span::raw(" "),
    ];
    if task.is_completed {
        spans.push(Span::styled(
            task.title.as_str(),
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::CROSSED_OUT),
        ));
    } else {
        spans.push(Span::raw(task.title.as_str()));
    }

    spans.push(Span::styled(
        format!(" {} ", lang.localized(task.priority.label_key())),
        Style::default().fg(task.priority.color()),
    ));

    if let Some(due) = task.due_date {
        let overdue = due < now && !task.is_completed;
        let style = if overdue {
            Style::default().fg(Color::Red)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(
            format!("{} {} ", lang.localized("dueOn"), due.format(STAMP_FORMAT)),
            style,
        ));
    }

    if task.has_reminder {
        if let Some(reminder) = task.reminder_date {
            spans.push(Span::styled(
                format!("@{} ", reminder.format("%H:%M")),
                Style::default().fg(Color::Yellow),
            ));
        }
    }

    if let Some(notes) = &task.notes {
        spans.push(Span::styled(
            format!("· {notes}"),
            Style::default().fg(Color::DarkGray),
        ));
    }

    ListItem::new(Line::from(spans))
}

fn draw_help(f: &mut Frame, app: &App, area: Rect) {
    let t = |key| app.lang.localized(key);
    let help = match app.mode {
        Mode::List => format!(
            "a:{} e:{} d:{} x:{} space:{} J/K:↕ ←→:{} tab:{} s:{} q:quit",
            t("newTask"),
            t("editTask"),
            t("delete"),
            t("clearCompleted"),
            t("completed"),
            t("all"),
            t("category"),
            t("settings"),
        ),
        Mode::Form(_) => format!("tab/↑↓ · enter:{} esc:{}", t("save"), t("cancel")),
        _ => format!("enter/esc:{}", t("cancel")),
    };
    f.render_widget(
        Paragraph::new(help).style(Style::default().fg(Color::DarkGray)),
        area,
    );
}

fn draw_form(f: &mut Frame, app: &App, form: &TaskForm) {
    let t = |key| app.lang.localized(key);
    let title = if form.editing.is_some() {
        t("editTask")
    } else {
        t("newTask")
    };

    let field_line = |field: FormField, label: &str, value: Vec<Span<'static>>| {
        let marker = if form.field == field { "> " } else { "  " };
        let mut spans = vec![
            Span::raw(marker.to_owned()),
            Span::styled(
                format!("{label}: "),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ];
        spans.extend(value);
        Line::from(spans)
    };

    let text_value = |text: &str, placeholder: &str| {
        if text.is_empty() {
            vec![Span::styled(
                placeholder.to_owned(),
                Style::default().fg(Color::DarkGray),
            )]
        } else {
            vec![Span::raw(text.to_owned())]
        }
    };

    let mut lines = vec![
        field_line(FormField::Title, t("taskTitle"), text_value(&form.title, "")),
        field_line(
            FormField::Priority,
            t("priority"),
            vec![Span::styled(
                t(form.priority.label_key()).to_owned(),
                Style::default().fg(form.priority.color()),
            )],
        ),
        field_line(
            FormField::Category,
            t("category"),
            vec![
                Span::styled(
                    form.category.icon(),
                    Style::default().fg(form.category.color()),
                ),
                Span::raw(" "),
                Span::raw(t(form.category.label_key()).to_owned()),
            ],
        ),
        field_line(
            FormField::DueDate,
            t("dueDate"),
            text_value(&form.due_text, STAMP_FORMAT),
        ),
        field_line(
            FormField::Reminder,
            t("reminderTime"),
            text_value(&form.reminder_text, STAMP_FORMAT),
        ),
        field_line(FormField::Notes, t("notes"), text_value(&form.notes, "")),
    ];
    if form.invalid_date {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            t("invalidDate").to_owned(),
            Style::default().fg(Color::Red),
        )));
    }

    let area = centered_rect(60, 50, f.area());
    f.render_widget(Clear, area);
    f.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(Block::default().borders(Borders::ALL).title(title)),
        area,
    );
}

fn draw_settings(f: &mut Frame, app: &App) {
    let t = |key| app.lang.localized(key);
    let lines: Vec<Line> = Language::ALL
        .iter()
        .map(|language| {
            let marker = if *language == app.lang.current() {
                "> "
            } else {
                "  "
            };
            Line::from(format!("{marker}{}", language.tag()))
        })
        .collect();

    let area = centered_rect(40, 30, f.area());
    f.render_widget(Clear, area);
    f.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("{} · {}", t("settings"), t("language"))),
        ),
        area,
    );
}

fn draw_confirm(f: &mut Frame, app: &App) {
    let t = |key| app.lang.localized(key);
    let lines = vec![
        Line::from(t("deleteConfirm")),
        Line::from(""),
        Line::from(Span::styled(
            format!("y/enter: {}   n/esc: {}", t("delete"), t("cancel")),
            Style::default().fg(Color::DarkGray),
        )),
    ];
    let area = centered_rect(50, 25, f.area());
    f.render_widget(Clear, area);
    f.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL).title(t("deleteTask"))),
        area,
    );
}

fn draw_reminders(f: &mut Frame, app: &App, due: &[PendingReminder]) {
    let mut lines = Vec::new();
    for reminder in due {
        lines.push(Line::from(Span::styled(
            format!("{} ({})", reminder.title, reminder.fire_at.format("%H:%M")),
            Style::default().add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(reminder.body.clone()));
        lines.push(Line::from(""));
    }

    let area = centered_rect(50, 40, f.area());
    f.render_widget(Clear, area);
    f.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: true }).block(
            Block::default()
                .borders(Borders::ALL)
                .title(app.lang.localized("reminder"))
                .border_style(Style::default().fg(Color::Yellow)),
        ),
        area,
    );
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);
    horizontal[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_stamp_empty_is_none() {
        assert_eq!(parse_stamp(""), Ok(None));
        assert_eq!(parse_stamp("   "), Ok(None));
    }

    #[test]
    fn parse_stamp_accepts_date_and_minute() {
        let parsed = parse_stamp("2026-08-06 18:30").unwrap().unwrap();
        assert_eq!(parsed.format(STAMP_FORMAT).to_string(), "2026-08-06 18:30");
    }

    #[test]
    fn parse_stamp_bare_date_is_midnight() {
        let parsed = parse_stamp("2026-08-06").unwrap().unwrap();
        assert_eq!(parsed.format("%H:%M").to_string(), "00:00");
    }

    #[test]
    fn parse_stamp_rejects_garbage() {
        assert!(parse_stamp("tomorrow").is_err());
        assert!(parse_stamp("2026-13-40").is_err());
    }

    #[test]
    fn form_field_cycle_wraps() {
        assert_eq!(FormField::Title.step(-1), FormField::Notes);
        assert_eq!(FormField::Notes.step(1), FormField::Title);
        assert_eq!(FormField::Title.step(1), FormField::Priority);
    }

    #[test]
    fn form_typing_goes_to_the_active_field() {
        let mut form = TaskForm::new();
        form.input(KeyCode::Char('h'));
        form.input(KeyCode::Char('i'));
        assert_eq!(form.title, "hi");

        form.input(KeyCode::Tab);
        form.input(KeyCode::Right);
        assert_eq!(form.priority, Priority::High);

        form.input(KeyCode::Backspace);
        assert_eq!(form.title, "hi");
    }

    #[test]
    fn form_prefills_from_task() {
        let mut task = Task::new(TaskDraft {
            title: "Dentist".to_owned(),
            priority: Priority::High,
            category: Category::Health,
            notes: Some("crown".to_owned()),
            ..Default::default()
        });
        task.due_date = parse_stamp("2026-08-07 09:00").unwrap();
        let form = TaskForm::for_task(&task);
        assert_eq!(form.editing, Some(task.id));
        assert_eq!(form.title, "Dentist");
        assert_eq!(form.due_text, "2026-08-07 09:00");
        assert_eq!(form.notes, "crown");
    }
}
