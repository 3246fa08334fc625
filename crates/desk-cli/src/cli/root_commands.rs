use clap::Subcommand;

use crate::cli::subcommands::{AuthCommands, ContractCommands, MeetingCommands};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Sign in, sign out, register, show the session.
    Auth {
        #[command(subcommand)]
        action: AuthCommands,
    },
    /// Contracts.
    Contract {
        #[command(subcommand)]
        action: ContractCommands,
    },
    /// Meetings.
    Meeting {
        #[command(subcommand)]
        action: MeetingCommands,
    },
    /// Administrative contract summary.
    Dashboard,
}
