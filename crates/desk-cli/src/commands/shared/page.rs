//! Loading and printing list pages.

use anyhow::bail;
use desk_view::{Category, DisplayRecord, ListController, ListRecord, ListState, RecordSource};

use crate::cli::GlobalFlags;
use crate::commands::shared::gate::follow;
use crate::commands::shared::limit::effective_limit;
use crate::context::AppContext;
use crate::output::{ListView, TabCount, output_list};

/// Load a list page through a fresh controller.
pub async fn load_page<R, C, S>(ctx: &AppContext, source: &S) -> anyhow::Result<ListController<R, C>>
where
    R: ListRecord,
    C: Category,
    S: RecordSource<R>,
{
    let mut page = ListController::new(ctx.formatter.clone());
    follow(page.load(source, &ctx.session).await)?;
    if let ListState::Error(message) = page.state() {
        bail!("{message}");
    }
    Ok(page)
}

/// The loaded record behind the row with `id`.
pub fn find_record<'a, R: ListRecord, C: Category>(
    page: &'a ListController<R, C>,
    id: &str,
) -> Option<&'a R> {
    let index = page.rows().iter().position(|row| row.id == id)?;
    page.records().get(index)
}

pub fn find_row<'a, R: ListRecord, C: Category>(
    page: &'a ListController<R, C>,
    id: &str,
) -> Option<&'a DisplayRecord> {
    page.rows().iter().find(|row| row.id == id)
}

/// Apply `--status`/`--search`, then print the filtered page.
pub fn show_page<R: ListRecord, C: Category>(
    page: &mut ListController<R, C>,
    status: Option<&str>,
    search: Option<&str>,
    limit: Option<u32>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    if let Some(status) = status {
        let category = C::parse(status);
        let sentinel = C::default().label();
        let raw = status.trim();
        if category == C::default() && !raw.eq_ignore_ascii_case("all") && !raw.eq_ignore_ascii_case(sentinel) {
            tracing::warn!(status, "unknown status tab; showing all");
        }
        page.set_category(category);
    }
    if let Some(query) = search {
        page.set_query(query);
    }

    let limit = effective_limit(limit, flags.limit, ctx.config.display.default_limit);
    let visible = page.visible();
    let view = ListView {
        tab: page.filter().category.label(),
        query: page.filter().query.clone(),
        counts: tab_counts(page),
        matched: visible.len(),
        dropped: page.dropped(),
        records: visible.into_iter().take(usize::try_from(limit)?).collect(),
    };
    output_list(&view, flags.format)
}

fn tab_counts<R: ListRecord, C: Category>(page: &ListController<R, C>) -> Vec<TabCount> {
    page.counts()
        .into_iter()
        .map(|(category, count)| TabCount {
            tab: category.label(),
            count,
        })
        .collect()
}
