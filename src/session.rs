use std::path::PathBuf;

use log::warn;

use crate::display::{self, DisplayRow, Summary};
use crate::error::Result;
use crate::labels::{Labels, Locale};
use crate::loader::load_file;
use crate::models::ComputedRecord;
use crate::view::{self, ViewState};

/// Everything a running ledger screen holds: the canonical series, the
/// display toggles and the current error banner, if any.
pub struct Session {
    pub data_file: PathBuf,
    pub baseline: i64,
    pub locale: Locale,
    pub view: ViewState,
    defaults: ViewState,
    records: Vec<ComputedRecord>,
    error: Option<String>,
}

impl Session {
    pub fn new(data_file: PathBuf, baseline: i64, locale: Locale, defaults: ViewState) -> Self {
        Self {
            data_file,
            baseline,
            locale,
            view: defaults,
            defaults,
            records: Vec::new(),
            error: None,
        }
    }

    /// Load the data file. On failure the canonical series is cleared and the
    /// banner is set, so nothing stale is shown next to the error.
    pub fn load(&mut self) -> Result<()> {
        let result = load_file(&self.data_file, self.baseline);
        self.apply_load(result)
    }

    /// Load again from scratch, with the toggles back at their defaults.
    pub fn reload(&mut self) -> Result<()> {
        self.view = self.defaults;
        self.load()
    }

    pub fn apply_load(&mut self, result: Result<Vec<ComputedRecord>>) -> Result<()> {
        match result {
            Ok(records) => {
                self.records = records;
                self.error = None;
                Ok(())
            }
            Err(e) => {
                warn!("load failed: {e}");
                let labels = self.labels();
                self.error = Some(format!(
                    "{}{} {}",
                    labels.error_prefix,
                    self.locale.error_message(&e),
                    labels.error_hint
                ));
                self.records.clear();
                Err(e)
            }
        }
    }

    pub fn labels(&self) -> &'static Labels {
        self.locale.labels()
    }

    pub fn records(&self) -> &[ComputedRecord] {
        &self.records
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn latest(&self) -> Option<&ComputedRecord> {
        view::latest(&self.records)
    }

    pub fn display_rows(&self) -> Vec<DisplayRow> {
        display::rows(view::display_sequence(&self.records, self.view.sort_descending))
    }

    pub fn summary(&self) -> Summary {
        Summary::new(self.latest(), self.labels())
    }

    pub fn view_label(&self) -> &'static str {
        match self.view.view_mode {
            view::ViewMode::Table => self.labels().view_table,
            view::ViewMode::Cards => self.labels().view_cards,
        }
    }

    pub fn sort_label(&self) -> &'static str {
        if self.view.sort_descending {
            self.labels().sort_newest
        } else {
            self.labels().sort_oldest
        }
    }

    pub fn count_label(&self) -> String {
        format!("{}{}", self.labels().count_prefix, self.records.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LedgerError;
    use crate::view::ViewMode;

    fn session_for(dir: &std::path::Path, body: &str) -> Session {
        let path = dir.join("data.json");
        std::fs::write(&path, body).unwrap();
        Session::new(path, 5000, Locale::En, ViewState::default())
    }

    const DATA: &str = r#"[
        {"month": "2024-01", "apt1": 1000, "apt2": 1000},
        {"month": "2024-03", "apt1": 3000, "apt2": 3000},
        {"month": "2024-02", "apt1": 2000, "apt2": 1500}
    ]"#;

    #[test]
    fn test_load_populates_records() {
        let dir = tempfile::tempdir().unwrap();
        let mut s = session_for(dir.path(), DATA);
        s.load().unwrap();
        assert_eq!(s.records().len(), 3);
        assert!(s.error().is_none());
        assert_eq!(s.count_label(), "Records: 3");
    }

    #[test]
    fn test_display_rows_follow_sort_direction() {
        let dir = tempfile::tempdir().unwrap();
        let mut s = session_for(dir.path(), DATA);
        s.load().unwrap();

        let newest_first: Vec<String> = s.display_rows().into_iter().map(|r| r.period).collect();
        assert_eq!(newest_first, vec!["2024\u{2011}03", "2024\u{2011}02", "2024\u{2011}01"]);

        s.view.toggle_sort();
        let oldest_first: Vec<String> = s.display_rows().into_iter().map(|r| r.period).collect();
        assert_eq!(oldest_first, vec!["2024\u{2011}01", "2024\u{2011}02", "2024\u{2011}03"]);

        assert_eq!(s.latest().unwrap().period, "2024-03");
    }

    #[test]
    fn test_failed_load_clears_stale_records() {
        let dir = tempfile::tempdir().unwrap();
        let mut s = session_for(dir.path(), DATA);
        s.load().unwrap();
        assert_eq!(s.records().len(), 3);

        std::fs::write(&s.data_file, "[]").unwrap();
        let err = s.load().unwrap_err();
        assert!(matches!(err, LedgerError::Empty));
        assert!(s.records().is_empty());
        let banner = s.error().unwrap();
        assert!(banner.starts_with("Data/load error: "));
        assert!(banner.contains("empty"));
        assert_eq!(s.summary().total, crate::fmt::PLACEHOLDER);
    }

    #[test]
    fn test_successful_load_clears_banner() {
        let dir = tempfile::tempdir().unwrap();
        let mut s = session_for(dir.path(), "not json");
        assert!(s.load().is_err());
        assert!(s.error().is_some());

        std::fs::write(&s.data_file, DATA).unwrap();
        s.load().unwrap();
        assert!(s.error().is_none());
    }

    #[test]
    fn test_reload_resets_toggles() {
        let dir = tempfile::tempdir().unwrap();
        let mut s = session_for(dir.path(), DATA);
        s.load().unwrap();
        s.view.toggle_view();
        s.view.toggle_sort();
        assert_eq!(s.view.view_mode, ViewMode::Cards);

        s.reload().unwrap();
        assert_eq!(s.view, ViewState::default());
    }

    #[test]
    fn test_banner_is_in_session_locale() {
        let dir = tempfile::tempdir().unwrap();
        let mut s = session_for(
            dir.path(),
            r#"[{"month": "2024-01", "apt1": 1, "apt2": 1}, {"month": "2024-02", "apt2": 1}]"#,
        );
        s.locale = Locale::Ru;
        assert!(s.load().is_err());
        assert_eq!(
            s.error().unwrap(),
            "Ошибка данных/загрузки: Запись #2: нужны поля apt1 и apt2. \
             Проверь, что файл данных существует и содержит валидный JSON."
        );
    }

    #[test]
    fn test_labels_follow_toggles() {
        let s = Session::new("data.json".into(), 5000, Locale::Ru, ViewState::default());
        assert_eq!(s.view_label(), "Режим: Таблица");
        assert_eq!(s.sort_label(), "Сортировка: новые сверху");
    }
}
