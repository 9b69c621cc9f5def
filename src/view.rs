use serde::{Deserialize, Serialize};

use crate::models::ComputedRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Table,
    Cards,
}

impl ViewMode {
    pub fn toggled(self) -> Self {
        match self {
            Self::Table => Self::Cards,
            Self::Cards => Self::Table,
        }
    }
}

/// The two display toggles. Neither touches canonical data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewState {
    pub view_mode: ViewMode,
    pub sort_descending: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            view_mode: ViewMode::Table,
            sort_descending: true,
        }
    }
}

impl ViewState {
    pub fn toggle_view(&mut self) {
        self.view_mode = self.view_mode.toggled();
    }

    pub fn toggle_sort(&mut self) {
        self.sort_descending = !self.sort_descending;
    }
}

/// Canonical records in display order: as-is, or newest first when
/// `sort_descending` is set.
pub fn display_sequence(canonical: &[ComputedRecord], sort_descending: bool) -> Vec<&ComputedRecord> {
    let mut list: Vec<&ComputedRecord> = canonical.iter().collect();
    if sort_descending {
        list.reverse();
    }
    list
}

/// The chronologically last record, whatever the current sort direction.
pub fn latest(canonical: &[ComputedRecord]) -> Option<&ComputedRecord> {
    canonical.last()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_records(n: usize) -> Vec<ComputedRecord> {
        (0..n)
            .map(|i| ComputedRecord {
                period: format!("2024-{:02}", i + 1),
                note: String::new(),
                share_a: 1000,
                share_b: 1000,
                total: 2000,
                remainder: 3000,
                running_accumulator: 3000 * (i as i64 + 1),
            })
            .collect()
    }

    #[test]
    fn test_ascending_keeps_canonical_order() {
        let records = make_records(3);
        let list = display_sequence(&records, false);
        let periods: Vec<&str> = list.iter().map(|r| r.period.as_str()).collect();
        assert_eq!(periods, vec!["2024-01", "2024-02", "2024-03"]);
    }

    #[test]
    fn test_descending_is_reverse_of_ascending() {
        for n in [0, 1, 2, 7] {
            let records = make_records(n);
            let mut asc = display_sequence(&records, false);
            asc.reverse();
            assert_eq!(display_sequence(&records, true), asc);
        }
    }

    #[test]
    fn test_display_sequence_leaves_canonical_untouched() {
        let records = make_records(4);
        let before = records.clone();
        let _ = display_sequence(&records, true);
        assert_eq!(records, before);
    }

    #[test]
    fn test_latest_ignores_sort_direction() {
        let records = make_records(5);
        let mut state = ViewState::default();
        assert_eq!(latest(&records).unwrap().period, "2024-05");
        state.toggle_sort();
        assert_eq!(latest(&records).unwrap().period, "2024-05");
        assert!(latest(&[]).is_none());
    }

    #[test]
    fn test_toggles() {
        let mut state = ViewState::default();
        assert_eq!(state.view_mode, ViewMode::Table);
        assert!(state.sort_descending);

        state.toggle_view();
        assert_eq!(state.view_mode, ViewMode::Cards);
        state.toggle_view();
        assert_eq!(state.view_mode, ViewMode::Table);

        state.toggle_sort();
        assert!(!state.sort_descending);
    }
}
