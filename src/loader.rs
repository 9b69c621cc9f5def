use std::path::Path;

use log::info;

use crate::error::{LedgerError, Result};
use crate::ledger::transform;
use crate::models::{ComputedRecord, RawRecord};
use crate::validator::validate;

/// Read the data file and run it through the whole pipeline.
pub fn load_file(path: &Path, baseline: i64) -> Result<Vec<ComputedRecord>> {
    let body = std::fs::read_to_string(path).map_err(|source| LedgerError::Transport {
        path: path.to_path_buf(),
        source,
    })?;
    let records = load_str(&body, baseline)?;
    info!("loaded {} months from {}", records.len(), path.display());
    Ok(records)
}

/// Parse, validate and transform a JSON document.
pub fn load_str(body: &str, baseline: i64) -> Result<Vec<ComputedRecord>> {
    let json: serde_json::Value = serde_json::from_str(body)?;
    validate(&json)?;
    let raw: Vec<RawRecord> = serde_json::from_value(json)?;
    Ok(transform(&raw, baseline))
}
