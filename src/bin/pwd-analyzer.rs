use std::io;
use std::process::ExitCode;

use clap::Parser;
use pwd_analyzer::cli::{run, LogLevel, Opts};

fn main() -> ExitCode {
    let opts = Opts::parse();
    opts.process();
    LogLevel::from_verbosity_flag_count(opts.verbose).apply();
    tracing::trace!("Command-line arguments: {:#?}", &opts);

    let mut stdout = io::stdout().lock();
    if let Err(err) = run(&opts, &mut stdout) {
        eprintln!("Error: {err}");
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
