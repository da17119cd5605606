use clap::{Parser, Subcommand};
use imekeys_common::Action;

/// imekeys: view and change the IME's input-mode switch keys.
#[derive(Parser, Debug)]
#[command(name = "imekeys", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Log level override (debug, info, warn, error).
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Show the key bound to each action.
    Show {
        /// Print as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Print the key bound to one action.
    Get {
        /// latin or kana.
        action: Action,
    },

    /// Bind an action to a key, or pass `unassigned` to clear it.
    Set {
        /// latin or kana.
        action: Action,
        /// Virtual-key code such as 0x1D, or `unassigned`.
        key: String,
    },

    /// List the keys offered for switching input mode.
    Keys,

    /// Print the installed version and where to check for updates.
    Version,
}

pub fn parse() -> Args {
    Args::parse()
}
