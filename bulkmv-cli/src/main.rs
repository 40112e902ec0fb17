use bulkmv_core::CancelToken;
use clap::Parser;
use log::LevelFilter;
use std::process;

mod cli;
mod rename;

use cli::Cli;

fn main() {
    let cli = Cli::parse();
    init_logger(cli.verbose, cli.quiet);

    // SIGINT requests cooperative cancellation; the engine polls the token
    // between rename actions and finishes with the applied subset.
    let cancel = CancelToken::new();
    let handler_token = cancel.clone();
    if let Err(e) = ctrlc::set_handler(move || {
        eprintln!("\nInterrupted, stopping after the current action...");
        handler_token.cancel();
    }) {
        log::warn!("could not install SIGINT handler: {e}");
    }

    match rename::run(&cli, &cancel) {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("Error: {e:#}");
            process::exit(2);
        },
    }
}

/// Map `-v` counts onto log levels: error by default, then warn, info,
/// debug. `-q` silences console logging entirely.
fn init_logger(verbosity: u8, quiet: bool) {
    let level = if quiet {
        LevelFilter::Off
    } else {
        match verbosity {
            0 => LevelFilter::Error,
            1 => LevelFilter::Warn,
            2 => LevelFilter::Info,
            _ => LevelFilter::Debug,
        }
    };
    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp_secs()
        .init();
}
