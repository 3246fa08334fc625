use anyhow::bail;
use chrono::{Local, Utc};
use desk_core::entities::ContractRecord;
use desk_view::dashboard::{DashboardSummary, Share, summarize};
use desk_view::{ContractCategory, Route};

use crate::cli::{GlobalFlags, OutputFormat};
use crate::commands::shared::gate::{SIGN_IN_HINT, require_view};
use crate::commands::shared::page::load_page;
use crate::context::AppContext;
use crate::output::table::{Cell, render_table};
use crate::output::{output, table_options};

/// Handle `desk dashboard` (admin).
pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    if desk_auth::check_credential(&ctx.session, Utc::now()).is_err() {
        bail!(SIGN_IN_HINT);
    }
    require_view(ctx.session.role(), &Route::AdminDashboard)?;

    let page = load_page::<ContractRecord, ContractCategory, _>(ctx, &ctx.api).await?;
    let summary = summarize(page.records(), &ctx.config.display, Local::now().date_naive());

    if flags.format == OutputFormat::Table {
        println!("{}", render_summary(&summary, ctx.config.display.expiring_soon_days));
        Ok(())
    } else {
        output(&summary, flags.format)
    }
}

fn render_summary(summary: &DashboardSummary, window_days: u32) -> String {
    let options = table_options();
    let totals = vec![
        vec![Cell::plain("total"), Cell::plain(summary.total.to_string())],
        vec![Cell::plain("active"), Cell::plain(summary.active.to_string())],
        vec![Cell::plain("expired"), Cell::plain(summary.expired.to_string())],
        vec![Cell::plain("pending"), Cell::plain(summary.pending.to_string())],
        vec![Cell::plain("active value"), Cell::plain(summary.active_value_label.clone())],
        vec![
            Cell::plain(format!("expiring in {window_days}d")),
            Cell::plain(summary.expiring_soon.to_string()),
        ],
    ];

    let mut sections = vec![render_table(&["contracts", "count"], &totals, options)];
    sections.push(render_table(&["type", "count", "share"], &share_rows(&summary.by_type), options));
    sections.push(render_table(&["status", "count", "share"], &share_rows(&summary.by_status), options));

    if !summary.recent.is_empty() {
        let recent = summary
            .recent
            .iter()
            .map(|row| {
                vec![
                    Cell::plain(row.title.clone()),
                    Cell::plain(row.subtitle.clone()),
                    Cell::plain(row.figure.clone()),
                    Cell::toned(row.status.clone(), row.tone),
                ]
            })
            .collect::<Vec<_>>();
        sections.push(render_table(&["recent", "client", "amount", "status"], &recent, options));
    }
    sections.join("\n\n")
}

fn share_rows(shares: &[Share]) -> Vec<Vec<Cell>> {
    shares
        .iter()
        .map(|share| {
            vec![
                Cell::plain(share.label.clone()),
                Cell::plain(share.count.to_string()),
                Cell::plain(format!("{}%", share.percent)),
            ]
        })
        .collect()
}
