use std::path::PathBuf;

use crate::error::Result;
use crate::fmt::currency;
use crate::loader::load_file;
use crate::settings::{load_settings, settings_path};
use crate::view::latest;

pub fn run() -> Result<()> {
    let settings = load_settings();
    let data_file = PathBuf::from(&settings.data_file);

    println!("Settings:   {}", settings_path().display());
    println!("Data file:  {}", data_file.display());
    println!("Baseline:   {}", currency(settings.baseline));
    println!("Locale:     {:?}", settings.locale);
    println!("View:       {:?}, newest first: {}", settings.view, settings.newest_first);

    println!();
    match load_file(&data_file, settings.baseline) {
        Ok(records) => {
            println!("Months:     {}", records.len());
            if let (Some(first), Some(last)) = (records.first(), latest(&records)) {
                println!("Range:      {} \u{2192} {}", first.period, last.period);
                println!("Piggy bank: {}", currency(last.running_accumulator));
            }
        }
        Err(e) => println!("Data file not usable: {e}"),
    }

    Ok(())
}
