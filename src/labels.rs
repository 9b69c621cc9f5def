use serde::{Deserialize, Serialize};

use crate::error::{AmountProblem, LedgerError, PeriodProblem};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Ru,
    En,
}

/// All user-facing label text for one locale.
pub struct Labels {
    pub title: &'static str,
    pub month: &'static str,
    pub apt1: &'static str,
    pub apt2: &'static str,
    pub total: &'static str,
    pub remainder: &'static str,
    pub piggy: &'static str,
    pub note: &'static str,
    pub baseline: &'static str,
    pub no_data: &'static str,
    pub month_prefix: &'static str,
    pub count_prefix: &'static str,
    pub view_table: &'static str,
    pub view_cards: &'static str,
    pub sort_newest: &'static str,
    pub sort_oldest: &'static str,
    pub error_prefix: &'static str,
    pub error_hint: &'static str,
}

const RU: Labels = Labels {
    title: "Копилка",
    month: "Месяц",
    apt1: "Кв.1",
    apt2: "Кв.2",
    total: "Итого",
    remainder: "Остаток",
    piggy: "Копилка",
    note: "Заметка",
    baseline: "База",
    no_data: "Нет данных",
    month_prefix: "Месяц: ",
    count_prefix: "Записей: ",
    view_table: "Режим: Таблица",
    view_cards: "Режим: Карточки",
    sort_newest: "Сортировка: новые сверху",
    sort_oldest: "Сортировка: старые сверху",
    error_prefix: "Ошибка данных/загрузки: ",
    error_hint: "Проверь, что файл данных существует и содержит валидный JSON.",
};

const EN: Labels = Labels {
    title: "Piggy bank",
    month: "Month",
    apt1: "Apt 1",
    apt2: "Apt 2",
    total: "Total",
    remainder: "Remainder",
    piggy: "Piggy bank",
    note: "Note",
    baseline: "Baseline",
    no_data: "No data",
    month_prefix: "Month: ",
    count_prefix: "Records: ",
    view_table: "View: Table",
    view_cards: "View: Cards",
    sort_newest: "Sort: newest first",
    sort_oldest: "Sort: oldest first",
    error_prefix: "Data/load error: ",
    error_hint: "Check that the data file exists and contains valid JSON.",
};

impl Locale {
    pub fn labels(self) -> &'static Labels {
        match self {
            Self::Ru => &RU,
            Self::En => &EN,
        }
    }

    /// A load or validation error in this locale's words.
    pub fn error_message(self, err: &LedgerError) -> String {
        match self {
            Self::En => err.to_string(),
            Self::Ru => error_message_ru(err),
        }
    }
}

fn error_message_ru(err: &LedgerError) -> String {
    match err {
        LedgerError::Transport { path, source } => {
            format!("Не удалось прочитать {}: {source}", path.display())
        }
        LedgerError::Parse(e) => format!("Некорректный JSON: {e}"),
        LedgerError::Shape => "Файл данных должен содержать массив месяцев.".to_string(),
        LedgerError::Empty => "Файл данных пустой: добавь хотя бы один месяц.".to_string(),
        LedgerError::ElementShape { index } => format!("Запись #{index} не объект."),
        LedgerError::PeriodFormat { index, problem } => match problem {
            PeriodProblem::NotString => {
                format!("Запись #{index}: поле month должно быть строкой 'YYYY-MM'.")
            }
            PeriodProblem::BadFormat => {
                format!("Запись #{index}: month должен быть в формате YYYY-MM.")
            }
        },
        LedgerError::NumericField { index, problem } => match problem {
            AmountProblem::Missing => format!("Запись #{index}: нужны поля apt1 и apt2."),
            AmountProblem::NotNumeric => format!("Запись #{index}: apt1/apt2 должны быть числами."),
        },
        LedgerError::DuplicatePeriod(month) => format!("Повтор месяца в файле данных: {month}"),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_messages_match_display() {
        let err = LedgerError::ElementShape { index: 4 };
        assert_eq!(Locale::En.error_message(&err), "Record #4 is not an object.");
    }

    #[test]
    fn test_russian_validation_messages() {
        let err = LedgerError::NumericField { index: 2, problem: AmountProblem::Missing };
        assert_eq!(Locale::Ru.error_message(&err), "Запись #2: нужны поля apt1 и apt2.");

        let err = LedgerError::PeriodFormat { index: 1, problem: PeriodProblem::BadFormat };
        assert_eq!(
            Locale::Ru.error_message(&err),
            "Запись #1: month должен быть в формате YYYY-MM."
        );

        let err = LedgerError::DuplicatePeriod("2024-01".to_string());
        assert_eq!(Locale::Ru.error_message(&err), "Повтор месяца в файле данных: 2024-01");
        assert_eq!(
            Locale::Ru.error_message(&LedgerError::Empty),
            "Файл данных пустой: добавь хотя бы один месяц."
        );
    }

    #[test]
    fn test_russian_transport_message_names_the_file() {
        let err = LedgerError::Transport {
            path: "missing.json".into(),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        let msg = Locale::Ru.error_message(&err);
        assert!(msg.starts_with("Не удалось прочитать missing.json"));
    }
}
