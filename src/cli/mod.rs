pub mod check;
pub mod show;
pub mod status;
pub mod summary;
pub mod use_file;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::labels::Locale;
use crate::session::Session;
use crate::settings::Settings;
use crate::view::{ViewMode, ViewState};

#[derive(Parser)]
#[command(name = "piggy", about = "Household utility ledger with a running piggy bank.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the ledger as a table or as cards.
    Show(ShowArgs),
    /// Validate the data file without rendering anything.
    Check {
        #[command(flatten)]
        data: DataArgs,
    },
    /// Show the latest month only.
    Summary {
        #[command(flatten)]
        data: DataArgs,
    },
    /// Make a data file the default for future runs.
    Use {
        /// Path to a ledger JSON file
        path: String,
    },
    /// Show current settings and a short summary of the data file.
    Status,
}

/// Where the ledger comes from and how it is computed.
#[derive(Args, Clone, Default)]
pub struct DataArgs {
    /// Ledger JSON file (default: from settings, initially ./data.json)
    #[arg(long)]
    pub file: Option<String>,
    /// Monthly baseline cost the shares are compared against
    #[arg(long)]
    pub baseline: Option<i64>,
    /// Label language
    #[arg(long, value_enum)]
    pub locale: Option<Locale>,
}

#[derive(Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputMode {
    /// Interactive terminal view
    #[default]
    View,
    /// Plain text
    Text,
}

#[derive(Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Args, Clone, Default)]
pub struct ShowArgs {
    #[command(flatten)]
    pub data: DataArgs,
    /// Start in table or card view
    #[arg(long, value_enum)]
    pub view: Option<ViewMode>,
    /// List the oldest month first
    #[arg(long = "oldest-first", conflicts_with = "newest_first")]
    pub oldest_first: bool,
    /// List the newest month first
    #[arg(long = "newest-first")]
    pub newest_first: bool,
    /// view (interactive, when stdout is a terminal) or text
    #[arg(long, value_enum)]
    pub mode: Option<OutputMode>,
    /// Output format for non-interactive output
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,
    /// Write non-interactive output to a file instead of stdout
    #[arg(long)]
    pub output: Option<String>,
}

impl ShowArgs {
    /// Settings defaults with command-line overrides applied.
    pub(crate) fn view_defaults(&self, settings: &Settings) -> ViewState {
        let mut state = settings.view_defaults();
        if let Some(mode) = self.view {
            state.view_mode = mode;
        }
        if self.oldest_first {
            state.sort_descending = false;
        }
        if self.newest_first {
            state.sort_descending = true;
        }
        state
    }
}

pub(crate) fn session_from(data: &DataArgs, settings: &Settings, defaults: ViewState) -> Session {
    let file = data.file.clone().unwrap_or_else(|| settings.data_file.clone());
    Session::new(
        PathBuf::from(file),
        data.baseline.unwrap_or(settings.baseline),
        data.locale.unwrap_or(settings.locale),
        defaults,
    )
}
