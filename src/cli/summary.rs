use colored::Colorize;

use crate::cli::show::text::format_summary;
use crate::cli::{session_from, DataArgs};
use crate::error::Result;
use crate::settings::load_settings;

pub fn run(data: DataArgs) -> Result<()> {
    let settings = load_settings();
    let mut session = session_from(&data, &settings, settings.view_defaults());
    let loaded = session.load();
    // The banner goes with the panel; `main` reports the error itself.
    if let Some(banner) = session.error() {
        println!("{}\n", banner.red().bold());
    }
    println!("{}", format_summary(&session.summary(), session.labels()));
    loaded
}
