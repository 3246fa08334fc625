use desk_core::entities::ContractRecord;
use desk_view::ContractCategory;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::commands::shared::gate::settle;
use crate::commands::shared::page::load_page;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct DeleteResponse<'a> {
    deleted: &'a str,
    message: String,
}

pub async fn run(id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut page = load_page::<ContractRecord, ContractCategory, _>(ctx, &ctx.api).await?;
    let effect = page.remove(&ctx.api, &ctx.session, id).await;
    let message = settle(&page, effect)?;
    output(&DeleteResponse { deleted: id, message }, flags.format)
}
