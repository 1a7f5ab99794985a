//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

use monastery_cli::{CliError, run};

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        if let CliError::ArgumentParsing(parse) = &err {
            parse.exit();
        }
        eprintln!("monastery360: {err}");
        std::process::exit(1);
    }
}
