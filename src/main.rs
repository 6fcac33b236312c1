mod cli;
mod commands;
#[cfg(target_os = "macos")]
mod ffi;
mod platform;

use clap::Parser;
use std::process::ExitCode;

use crate::cli::Cli;

fn main() -> ExitCode {
    commands::run(Cli::parse())
}
