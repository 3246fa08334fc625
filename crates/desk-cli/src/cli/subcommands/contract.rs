use clap::{Args, Subcommand};

/// Contract commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ContractCommands {
    /// List contracts.
    List {
        /// Status tab: all, active, expired, pending.
        #[arg(long)]
        status: Option<String>,
        /// Case-insensitive text search over name, description, type and client.
        #[arg(long)]
        search: Option<String>,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Show one contract.
    Get { id: String },
    /// Create a contract (admin).
    Create(ContractCreateArgs),
    /// Update a contract (admin). Omitted fields keep their current value.
    Update(ContractUpdateArgs),
    /// Delete a contract (admin).
    Delete { id: String },
}

#[derive(Clone, Debug, Args)]
pub struct ContractCreateArgs {
    #[arg(long)]
    pub name: String,
    /// Contract type, e.g. "Service Contract".
    #[arg(long = "type", default_value = "Service Contract")]
    pub contract_type: String,
    #[arg(long)]
    pub client: String,
    /// Start date (YYYY-MM-DD).
    #[arg(long)]
    pub start: String,
    /// End date (YYYY-MM-DD).
    #[arg(long)]
    pub end: String,
    #[arg(long)]
    pub amount: String,
    #[arg(long)]
    pub description: String,
    /// Initial status (default Pending).
    #[arg(long)]
    pub status: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct ContractUpdateArgs {
    pub id: String,
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long = "type")]
    pub contract_type: Option<String>,
    #[arg(long)]
    pub client: Option<String>,
    #[arg(long)]
    pub start: Option<String>,
    #[arg(long)]
    pub end: Option<String>,
    #[arg(long)]
    pub amount: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long)]
    pub status: Option<String>,
}
