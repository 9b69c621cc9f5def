mod cli;
mod display;
mod error;
mod fmt;
mod labels;
mod ledger;
mod loader;
mod models;
mod session;
mod settings;
#[cfg(feature = "tui")]
mod tui;
mod validator;
mod view;

use clap::Parser;

use cli::{Cli, Commands, ShowArgs};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let result = match cli.command {
        None => cli::show::run(ShowArgs::default()),
        Some(Commands::Show(args)) => cli::show::run(args),
        Some(Commands::Check { data }) => cli::check::run(data),
        Some(Commands::Summary { data }) => cli::summary::run(data),
        Some(Commands::Use { path }) => cli::use_file::run(&path),
        Some(Commands::Status) => cli::status::run(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
