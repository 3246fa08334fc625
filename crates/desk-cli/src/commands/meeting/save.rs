use anyhow::{Context, bail};
use desk_core::drafts::MeetingDraft;
use desk_core::entities::MeetingRecord;
use desk_core::enums::MeetingStatus;
use desk_view::{ListController, MeetingCategory};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::meeting::{MeetingCreateArgs, MeetingUpdateArgs};
use crate::commands::shared::gate::{announce, settle};
use crate::commands::shared::page::{find_record, find_row, load_page, show_page};
use crate::context::AppContext;
use crate::output::output;

type Meetings = ListController<MeetingRecord, MeetingCategory>;

pub async fn create(args: &MeetingCreateArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let draft = MeetingDraft {
        contract_id: args.contract.clone(),
        title: args.title.clone(),
        description: args.description.clone(),
        meeting_date: args.date.clone(),
        meeting_time: args.time.clone(),
        duration: args.duration,
        status: parse_status(args.status.as_deref())?.unwrap_or(MeetingStatus::Scheduled),
    };

    let mut page = Meetings::new(ctx.formatter.clone());
    let effect = page.create(&ctx.api, &ctx.session, &draft).await;
    let message = settle(&page, effect)?;
    announce(&message, flags);

    match page.saved() {
        Some(created) => output(created, flags.format),
        None => show_page(&mut page, None, None, None, ctx, flags),
    }
}

pub async fn update(args: &MeetingUpdateArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    validate_update_args(args)?;

    let mut page = load_page::<MeetingRecord, MeetingCategory, _>(ctx, &ctx.api).await?;
    let current = find_record(&page, &args.id).with_context(|| format!("no meeting with id '{}'", args.id))?;
    let draft = apply(MeetingDraft::from(current), args)?;

    let effect = page.update(&ctx.api, &ctx.session, &args.id, &draft).await;
    let message = settle(&page, effect)?;
    announce(&message, flags);

    let updated = find_row(&page, &args.id).context("updated meeting is no longer listed")?;
    output(updated, flags.format)
}

fn apply(mut draft: MeetingDraft, args: &MeetingUpdateArgs) -> anyhow::Result<MeetingDraft> {
    if let Some(contract) = &args.contract {
        draft.contract_id.clone_from(contract);
    }
    if let Some(title) = &args.title {
        draft.title.clone_from(title);
    }
    if let Some(date) = &args.date {
        draft.meeting_date.clone_from(date);
    }
    if let Some(time) = &args.time {
        draft.meeting_time.clone_from(time);
    }
    if let Some(duration) = args.duration {
        draft.duration = duration;
    }
    if let Some(description) = &args.description {
        draft.description.clone_from(description);
    }
    if let Some(status) = parse_status(args.status.as_deref())? {
        draft.status = status;
    }
    Ok(draft)
}

fn parse_status(raw: Option<&str>) -> anyhow::Result<Option<MeetingStatus>> {
    raw.map(|raw| {
        MeetingStatus::parse(raw)
            .with_context(|| format!("unknown meeting status '{raw}' (scheduled, ongoing, completed)"))
    })
    .transpose()
}

fn validate_update_args(args: &MeetingUpdateArgs) -> anyhow::Result<()> {
    if args.contract.is_none()
        && args.title.is_none()
        && args.date.is_none()
        && args.time.is_none()
        && args.duration.is_none()
        && args.description.is_none()
        && args.status.is_none()
    {
        bail!(
            "at least one of --contract, --title, --date, --time, --duration, --description or --status must be provided"
        );
    }
    Ok(())
}
