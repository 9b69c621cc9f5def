use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("Could not read {}: {source}", path.display())]
    Transport {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("The data file must contain an array of months.")]
    Shape,

    #[error("The data file is empty: add at least one month.")]
    Empty,

    #[error("Record #{index} is not an object.")]
    ElementShape { index: usize },

    #[error("Record #{index}: {problem}.")]
    PeriodFormat { index: usize, problem: PeriodProblem },

    #[error("Record #{index}: {problem}.")]
    NumericField { index: usize, problem: AmountProblem },

    #[error("Duplicate month in data file: {0}")]
    DuplicatePeriod(String),

    #[error("Settings error: {0}")]
    Settings(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeriodProblem {
    #[error("month must be a string 'YYYY-MM'")]
    NotString,
    #[error("month must be in YYYY-MM format")]
    BadFormat,
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmountProblem {
    #[error("apt1 and apt2 are required")]
    Missing,
    #[error("apt1/apt2 must be numbers")]
    NotNumeric,
}

pub type Result<T> = std::result::Result<T, LedgerError>;
