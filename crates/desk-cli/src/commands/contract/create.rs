use anyhow::Context;
use desk_core::drafts::ContractDraft;
use desk_core::entities::ContractRecord;
use desk_core::enums::ContractStatus;
use desk_view::{ContractCategory, ListController};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::contract::ContractCreateArgs;
use crate::commands::shared::gate::{announce, settle};
use crate::commands::shared::page::show_page;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(args: &ContractCreateArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let draft = ContractDraft {
        name: args.name.clone(),
        contract_type: args.contract_type.clone(),
        client: args.client.clone(),
        start_date: args.start.clone(),
        end_date: args.end.clone(),
        amount: args.amount.clone(),
        description: args.description.clone(),
        status: parse_status(args.status.as_deref())?.unwrap_or(ContractStatus::Pending),
    };

    let mut page = ListController::<ContractRecord, ContractCategory>::new(ctx.formatter.clone());
    let effect = page.create(&ctx.api, &ctx.session, &draft).await;
    let message = settle(&page, effect)?;
    announce(&message, flags);

    match page.saved() {
        Some(created) => output(created, flags.format),
        // confirmed without the record; the page was reloaded instead
        None => show_page(&mut page, None, None, None, ctx, flags),
    }
}

pub fn parse_status(raw: Option<&str>) -> anyhow::Result<Option<ContractStatus>> {
    raw.map(|raw| {
        ContractStatus::parse(raw)
            .with_context(|| format!("unknown contract status '{raw}' (active, expired, pending)"))
    })
    .transpose()
}
