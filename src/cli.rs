use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "im-switch",
    version,
    about = "List, select, and cycle macOS keyboard input sources"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List of available input sources
    List {
        /// Show selection state and localized name for each source
        #[arg(short, long)]
        verbose: bool,
    },
    /// Switch to the specified input source
    Select {
        /// Input Source ID (e.g. com.apple.keylayout.ABC)
        id: String,
    },
    /// Select the next input source
    Next {
        /// Print the change as "<before> -> <after>"
        #[arg(short, long)]
        verbose: bool,
    },
}
