mod create;
mod delete;
mod get;
mod list;
mod update;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ContractCommands;
use crate::context::AppContext;

/// Handle `desk contract`.
pub async fn handle(
    action: &ContractCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        ContractCommands::List {
            status,
            search,
            limit,
        } => list::run(status.as_deref(), search.as_deref(), *limit, ctx, flags).await,
        ContractCommands::Get { id } => get::run(id, ctx, flags).await,
        ContractCommands::Create(args) => create::run(args, ctx, flags).await,
        ContractCommands::Update(args) => update::run(args, ctx, flags).await,
        ContractCommands::Delete { id } => delete::run(id, ctx, flags).await,
    }
}
