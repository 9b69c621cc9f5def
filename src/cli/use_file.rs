use std::path::PathBuf;

use crate::error::{LedgerError, Result};
use crate::settings::{load_settings, save_settings, shellexpand_path};

pub fn run(path: &str) -> Result<()> {
    let resolved = PathBuf::from(shellexpand_path(path));

    if !resolved.is_file() {
        return Err(LedgerError::Settings(format!(
            "No data file found at {}",
            resolved.display()
        )));
    }

    let mut settings = load_settings();
    settings.data_file = resolved.to_string_lossy().to_string();
    save_settings(&settings)?;

    println!("Using {}", resolved.display());
    Ok(())
}
