//! Command dispatch.
//!
//! Each subcommand runs once against the live system and exits; no
//! state is carried between invocations.

use std::process::ExitCode;

use crate::cli::Cli;

#[cfg(target_os = "macos")]
pub fn run(cli: Cli) -> ExitCode {
    use im_switch::{format_source, format_transition, InputSourceSwitcher, SwitchError};

    use crate::cli::Command;
    use crate::platform::SystemInputSources;

    let switcher = InputSourceSwitcher::new(SystemInputSources);
    let result: Result<(), SwitchError> = match cli.command {
        Command::List { verbose } => switcher.selectable_sources().map(|sources| {
            for source in &sources {
                println!("{}", format_source(source, verbose));
            }
        }),
        Command::Select { id } => switcher.select_by_id(&id),
        Command::Next { verbose } => switcher.select_next().map(|(before, after)| {
            if verbose {
                println!("{}", format_transition(&before, &after));
            }
        }),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}

// Argument parsing still works everywhere; only the OS bridge is missing.
#[cfg(not(target_os = "macos"))]
pub fn run(_cli: Cli) -> ExitCode {
    eprintln!("Error: im-switch requires macOS");
    ExitCode::FAILURE
}
