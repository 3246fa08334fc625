use clap::{Args, Subcommand};

/// Meeting commands.
#[derive(Clone, Debug, Subcommand)]
pub enum MeetingCommands {
    /// List meetings. Admins see every meeting; others see their own.
    List {
        /// Status tab. Admin: all, scheduled, ongoing, completed.
        /// Others: all, upcoming, live.
        #[arg(long)]
        status: Option<String>,
        /// Case-insensitive text search over title and description.
        #[arg(long)]
        search: Option<String>,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Schedule a meeting (admin).
    Create(MeetingCreateArgs),
    /// Update a meeting (admin). Omitted fields keep their current value.
    Update(MeetingUpdateArgs),
    /// Delete a meeting (admin).
    Delete { id: String },
}

#[derive(Clone, Debug, Args)]
pub struct MeetingCreateArgs {
    /// Contract id the meeting belongs to.
    #[arg(long)]
    pub contract: String,
    #[arg(long)]
    pub title: String,
    /// Date (YYYY-MM-DD).
    #[arg(long)]
    pub date: String,
    /// Time (HH:MM).
    #[arg(long)]
    pub time: String,
    /// Minutes.
    #[arg(long, default_value_t = 30)]
    pub duration: u32,
    #[arg(long, default_value = "")]
    pub description: String,
    /// Initial status (default scheduled).
    #[arg(long)]
    pub status: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct MeetingUpdateArgs {
    pub id: String,
    #[arg(long)]
    pub contract: Option<String>,
    #[arg(long)]
    pub title: Option<String>,
    #[arg(long)]
    pub date: Option<String>,
    #[arg(long)]
    pub time: Option<String>,
    #[arg(long)]
    pub duration: Option<u32>,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long)]
    pub status: Option<String>,
}
