use desk_core::entities::MeetingRecord;
use desk_view::{AttendeeCategory, MeetingCategory};

use crate::cli::GlobalFlags;
use crate::commands::shared::page::{load_page, show_page};
use crate::context::AppContext;

/// Admins get the full status tabs; everyone else gets upcoming/live.
pub async fn run(
    status: Option<&str>,
    search: Option<&str>,
    limit: Option<u32>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    if ctx.session.role().is_privileged() {
        let mut page = load_page::<MeetingRecord, MeetingCategory, _>(ctx, &ctx.api).await?;
        show_page(&mut page, status, search, limit, ctx, flags)
    } else {
        let mut page = load_page::<MeetingRecord, AttendeeCategory, _>(ctx, &ctx.api).await?;
        show_page(&mut page, status, search, limit, ctx, flags)
    }
}
