use std::process::ExitCode;

use clap::Parser;

mod cli;
mod exits;
mod settings;
mod terminal;

use cli::CliFlags;

fn main() -> ExitCode {
    let flags = CliFlags::parse();
    init_logging(flags.verbose);
    exits::harden();

    exits::status(cli::run(flags))
}

fn init_logging(verbose: u8) {
    let default_filter = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}
