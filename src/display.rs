//! Display-ready rows handed to the renderers. Everything here is already a
//! string; renderers only decide layout and colour.

use serde::Serialize;

use crate::fmt::{currency, currency_or_placeholder, period_label};
use crate::labels::Labels;
use crate::models::ComputedRecord;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayRow {
    pub period: String,
    pub share_a: String,
    pub share_b: String,
    pub total: String,
    pub remainder: String,
    pub remainder_negative: bool,
    pub running_accumulator: String,
    pub note: String,
}

impl From<&ComputedRecord> for DisplayRow {
    fn from(r: &ComputedRecord) -> Self {
        Self {
            period: period_label(&r.period),
            share_a: currency(r.share_a),
            share_b: currency(r.share_b),
            total: currency(r.total),
            remainder: currency(r.remainder),
            remainder_negative: r.remainder < 0,
            running_accumulator: currency(r.running_accumulator),
            note: r.note.clone(),
        }
    }
}

/// The "current period" panel, built from the latest record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub heading: String,
    pub share_a: String,
    pub share_b: String,
    pub total: String,
    pub remainder: String,
    pub remainder_negative: bool,
    pub running_accumulator: String,
    pub note: Option<String>,
}

impl Summary {
    pub fn new(latest: Option<&ComputedRecord>, labels: &Labels) -> Self {
        let heading = match latest {
            Some(r) => format!("{}{}", labels.month_prefix, period_label(&r.period)),
            None => labels.no_data.to_string(),
        };
        Self {
            heading,
            share_a: currency_or_placeholder(latest.map(|r| r.share_a)),
            share_b: currency_or_placeholder(latest.map(|r| r.share_b)),
            total: currency_or_placeholder(latest.map(|r| r.total)),
            remainder: currency_or_placeholder(latest.map(|r| r.remainder)),
            remainder_negative: latest.is_some_and(|r| r.remainder < 0),
            running_accumulator: currency_or_placeholder(latest.map(|r| r.running_accumulator)),
            note: latest.map(|r| r.note.clone()).filter(|n| !n.is_empty()),
        }
    }
}

pub fn rows<'a>(records: impl IntoIterator<Item = &'a ComputedRecord>) -> Vec<DisplayRow> {
    records.into_iter().map(DisplayRow::from).collect()
}
