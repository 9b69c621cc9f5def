use colored::Colorize;

use crate::cli::{session_from, DataArgs};
use crate::error::Result;
use crate::settings::load_settings;
use crate::view::ViewState;

pub fn run(data: DataArgs) -> Result<()> {
    let settings = load_settings();
    let mut session = session_from(&data, &settings, ViewState::default());
    session.load()?;

    let records = session.records();
    let range = match (records.first(), records.last()) {
        (Some(first), Some(last)) => format!(" ({} \u{2192} {})", first.period, last.period),
        _ => String::new(),
    };
    println!(
        "{} {}: {} months{range}",
        "OK".green().bold(),
        session.data_file.display(),
        records.len()
    );
    Ok(())
}
