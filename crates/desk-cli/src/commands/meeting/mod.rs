mod delete;
mod list;
mod save;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::MeetingCommands;
use crate::context::AppContext;

/// Handle `desk meeting`.
pub async fn handle(
    action: &MeetingCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        MeetingCommands::List {
            status,
            search,
            limit,
        } => list::run(status.as_deref(), search.as_deref(), *limit, ctx, flags).await,
        MeetingCommands::Create(args) => save::create(args, ctx, flags).await,
        MeetingCommands::Update(args) => save::update(args, ctx, flags).await,
        MeetingCommands::Delete { id } => delete::run(id, ctx, flags).await,
    }
}
