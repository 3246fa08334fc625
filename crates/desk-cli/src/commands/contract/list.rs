use desk_core::entities::ContractRecord;
use desk_view::ContractCategory;

use crate::cli::GlobalFlags;
use crate::commands::shared::page::{load_page, show_page};
use crate::context::AppContext;

pub async fn run(
    status: Option<&str>,
    search: Option<&str>,
    limit: Option<u32>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let mut page = load_page::<ContractRecord, ContractCategory, _>(ctx, &ctx.api).await?;
    show_page(&mut page, status, search, limit, ctx, flags)
}
