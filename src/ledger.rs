use log::warn;

use crate::models::{Amount, ComputedRecord, RawRecord};

/// Monthly reference cost every period's contributions are measured against.
pub const DEFAULT_BASELINE: i64 = 5000;

/// Round a share to whole units, ties away from zero.
/// Anything that isn't a finite number counts as 0.
fn round_share(amount: &Amount, period: &str) -> i64 {
    match amount.value() {
        Some(v) => v.round() as i64,
        None => {
            warn!("non-numeric share in {period}, counting it as 0");
            0
        }
    }
}

fn note_text(note: Option<&serde_json::Value>) -> String {
    note.and_then(|v| v.as_str())
        .map(|s| s.trim().to_string())
        .unwrap_or_default()
}

/// Build the canonical chronological series from validated records.
///
/// Records are stably sorted by month (`YYYY-MM` sorts lexicographically in
/// calendar order) and walked once, carrying the running piggy bank: each
/// record holds the accumulator value after its own remainder is added.
pub fn transform(records: &[RawRecord], baseline: i64) -> Vec<ComputedRecord> {
    let mut sorted: Vec<&RawRecord> = records.iter().collect();
    sorted.sort_by(|a, b| a.month.cmp(&b.month));

    let mut piggy = 0i64;
    let mut computed = Vec::with_capacity(sorted.len());
    for r in sorted {
        let share_a = round_share(&r.apt1, &r.month);
        let share_b = round_share(&r.apt2, &r.month);
        let total = share_a.saturating_add(share_b);
        let remainder = baseline.saturating_sub(total);
        piggy = piggy.saturating_add(remainder);

        computed.push(ComputedRecord {
            period: r.month.clone(),
            note: note_text(r.note.as_ref()),
            share_a,
            share_b,
            total,
            remainder,
            running_accumulator: piggy,
        });
    }
    computed
}
