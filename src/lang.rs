//! Display language selection and localized UI strings.

use crate::prefs::{Prefs, LANGUAGE_SLOT};
use std::cell::RefCell;
use std::rc::Rc;

/// Supported display languages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Language {
    #[default]
    English,
    Turkish,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::English, Language::Turkish];

    /// The persisted tag, which doubles as the native display name.
    pub fn tag(self) -> &'static str {
        match self {
            Self::English => "English",
            Self::Turkish => "Türkçe",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Language> {
        Language::ALL.into_iter().find(|l| l.tag() == tag)
    }

    fn table(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Self::English => ENGLISH,
            Self::Turkish => TURKISH,
        }
    }
}

static ENGLISH: &[(&str, &str)] = &[
    ("all", "All"),
    ("active", "Active"),
    ("completed", "Completed"),
    ("today", "Today"),
    ("upcoming", "Upcoming"),
    ("overdue", "Overdue"),
    ("tasks", "Tasks"),
    ("newTask", "New Task"),
    ("editTask", "Edit Task"),
    ("taskTitle", "Task Title"),
    ("priority", "Priority"),
    ("category", "Category"),
    ("dueDate", "Due Date"),
    ("reminder", "Reminder"),
    ("notes", "Notes"),
    ("cancel", "Cancel"),
    ("save", "Save"),
    ("delete", "Delete"),
    ("settings", "Settings"),
    ("language", "Language"),
    ("deleteTask", "Delete Task"),
    ("deleteConfirm", "Are you sure you want to delete this task?"),
    ("clearCompleted", "Clear Completed"),
    ("invalidDate", "Unrecognized date, use YYYY-MM-DD or YYYY-MM-DD HH:MM"),
    ("reminderTime", "Reminder Time"),
    ("personal", "Personal"),
    ("work", "Work"),
    ("shopping", "Shopping"),
    ("health", "Health"),
    ("education", "Education"),
    ("other", "Other"),
    ("low", "Low"),
    ("medium", "Medium"),
    ("high", "High"),
    ("dueOn", "Due on"),
];

static TURKISH: &[(&str, &str)] = &[
    ("all", "Tümü"),
    ("active", "Aktif"),
    ("completed", "Tamamlanan"),
    ("today", "Bugün"),
    ("upcoming", "Yaklaşan"),
    ("overdue", "Geciken"),
    ("tasks", "Görevler"),
    ("newTask", "Yeni Görev"),
    ("editTask", "Görevi Düzenle"),
    ("taskTitle", "Görev Başlığı"),
    ("priority", "Öncelik"),
    ("category", "Kategori"),
    ("dueDate", "Son Tarih"),
    ("reminder", "Hatırlatıcı"),
    ("notes", "Notlar"),
    ("cancel", "İptal"),
    ("save", "Kaydet"),
    ("delete", "Sil"),
    ("settings", "Ayarlar"),
    ("language", "Dil"),
    ("deleteTask", "Görevi Sil"),
    ("deleteConfirm", "Bu görevi silmek istediğinizden emin misiniz?"),
    ("clearCompleted", "Tamamlananları Temizle"),
    ("invalidDate", "Tarih anlaşılamadı, YYYY-AA-GG veya YYYY-AA-GG SS:DD kullanın"),
    ("reminderTime", "Hatırlatıcı Zamanı"),
    ("personal", "Kişisel"),
    ("work", "İş"),
    ("shopping", "Alışveriş"),
    ("health", "Sağlık"),
    ("education", "Eğitim"),
    ("other", "Diğer"),
    ("low", "Düşük"),
    ("medium", "Orta"),
    ("high", "Yüksek"),
    ("dueOn", "Son Tarih"),
];

/// Loads the selection from the `"AppLanguage"` slot and persists every
/// change back to it. Unrecognized or absent tags fall back to English.
pub struct LanguageManager {
    current: Language,
    prefs: Rc<RefCell<Prefs>>,
}

impl LanguageManager {
    pub fn new(prefs: Rc<RefCell<Prefs>>) -> Self {
        let current = prefs
            .borrow()
            .get::<String>(LANGUAGE_SLOT)
            .and_then(|tag| Language::from_tag(&tag))
            .unwrap_or_default();
        Self { current, prefs }
    }

    pub fn current(&self) -> Language {
        self.current
    }

    pub fn set_language(&mut self, language: Language) {
        self.current = language;
        self.prefs.borrow_mut().set(LANGUAGE_SLOT, &language.tag());
    }

    /// Localized UI string for `key`; unknown keys fall back to the key
    /// itself.
    pub fn localized<'a>(&self, key: &'a str) -> &'a str {
        self.current
            .table()
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| *v)
            .unwrap_or(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manager(dir: &tempfile::TempDir) -> LanguageManager {
        let prefs = Rc::new(RefCell::new(Prefs::open(dir.path().join("settings.json"))));
        LanguageManager::new(prefs)
    }

    #[test]
    fn defaults_to_english() {
        let dir = tempfile::tempdir().unwrap();
        let lang = manager(&dir);
        assert_eq!(lang.current(), Language::English);
        assert_eq!(lang.localized("tasks"), "Tasks");
    }

    #[test]
    fn selection_round_trips_through_the_slot() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        {
            let prefs = Rc::new(RefCell::new(Prefs::open(&path)));
            let mut lang = LanguageManager::new(prefs);
            lang.set_language(Language::Turkish);
        }
        let prefs = Rc::new(RefCell::new(Prefs::open(&path)));
        let lang = LanguageManager::new(prefs);
        assert_eq!(lang.current(), Language::Turkish);
        assert_eq!(lang.localized("tasks"), "Görevler");
    }

    #[test]
    fn unrecognized_tag_falls_back_to_english() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        {
            let mut prefs = Prefs::open(&path);
            prefs.set(LANGUAGE_SLOT, &"Klingon");
        }
        let prefs = Rc::new(RefCell::new(Prefs::open(&path)));
        let lang = LanguageManager::new(prefs);
        assert_eq!(lang.current(), Language::English);
    }

    #[test]
    fn unknown_keys_fall_back_to_the_key() {
        let dir = tempfile::tempdir().unwrap();
        let lang = manager(&dir);
        assert_eq!(lang.localized("nonexistent"), "nonexistent");
    }

    #[test]
    fn both_tables_cover_the_same_keys() {
        for (key, _) in ENGLISH {
            assert!(
                TURKISH.iter().any(|(k, _)| k == key),
                "missing Turkish label for '{key}'"
            );
        }
        assert_eq!(ENGLISH.len(), TURKISH.len());
    }
}
