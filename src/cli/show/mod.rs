pub mod text;
#[cfg(feature = "tui")]
pub mod view;

use std::io::IsTerminal;
use std::path::PathBuf;

use serde::Serialize;

use crate::cli::{session_from, OutputFormat, OutputMode, ShowArgs};
use crate::display::{DisplayRow, Summary};
use crate::error::{LedgerError, Result};
use crate::session::Session;
use crate::settings::load_settings;

pub fn run(args: ShowArgs) -> Result<()> {
    let settings = load_settings();
    let defaults = args.view_defaults(&settings);
    let mut session = session_from(&args.data, &settings, defaults);
    let loaded = session.load();

    let interactive = args.output.is_none()
        && args.format == OutputFormat::Text
        && args.mode.unwrap_or_default() == OutputMode::View
        && std::io::stdout().is_terminal();
    if interactive {
        // The view shows the banner itself and can reload, so the first
        // load's outcome doesn't decide the exit status.
        return dispatch_view(session);
    }

    if args.output.is_some() {
        // Files never get colour codes, even when stdout is a terminal.
        colored::control::set_override(false);
    }
    let out = match args.format {
        OutputFormat::Text => text::render(&session),
        OutputFormat::Json => render_json(&session)?,
    };
    match args.output {
        Some(path) => {
            let p = PathBuf::from(&path);
            if let Some(parent) = p.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)?;
                }
            }
            std::fs::write(&p, format!("{out}\n"))?;
            println!("Wrote {}", p.display());
        }
        None => println!("{out}"),
    }
    loaded
}

fn dispatch_view(session: Session) -> Result<()> {
    #[cfg(not(feature = "tui"))]
    {
        let _ = session;
        return Err(LedgerError::Other(
            "the interactive view requires the 'tui' feature, use `--mode text`".into(),
        ));
    }

    #[cfg(feature = "tui")]
    {
        let mut view = view::LedgerView::new(session);
        crate::tui::run_view(&mut view)
    }
}

#[derive(Serialize)]
struct JsonLedger<'a> {
    baseline: i64,
    count: usize,
    error: Option<&'a str>,
    summary: Summary,
    rows: Vec<DisplayRow>,
}

pub(crate) fn render_json(session: &Session) -> Result<String> {
    let doc = JsonLedger {
        baseline: session.baseline,
        count: session.records().len(),
        error: session.error(),
        summary: session.summary(),
        rows: session.display_rows(),
    };
    serde_json::to_string_pretty(&doc).map_err(|e| LedgerError::Other(e.to_string()))
}
