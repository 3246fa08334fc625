use anyhow::{Context, bail};
use desk_core::drafts::ContractDraft;
use desk_core::entities::ContractRecord;
use desk_core::enums::{CONTRACT_TYPES, canonical_contract_type};
use desk_view::ContractCategory;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::contract::ContractUpdateArgs;
use crate::commands::contract::create::parse_status;
use crate::commands::shared::gate::{announce, settle};
use crate::commands::shared::page::{find_record, find_row, load_page};
use crate::context::AppContext;
use crate::output::output;

pub async fn run(args: &ContractUpdateArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    validate_update_args(args)?;

    let mut page = load_page::<ContractRecord, ContractCategory, _>(ctx, &ctx.api).await?;
    let current = find_record(&page, &args.id).with_context(|| format!("no contract with id '{}'", args.id))?;
    let draft = apply(ContractDraft::from(current), args)?;

    let effect = page.update(&ctx.api, &ctx.session, &args.id, &draft).await;
    let message = settle(&page, effect)?;
    announce(&message, flags);

    let updated = find_row(&page, &args.id).context("updated contract is no longer listed")?;
    output(updated, flags.format)
}

/// Overlay the given flags on the edit form prefilled from the current record.
///
/// A stored type the form does not offer must be replaced with `--type`.
fn apply(mut draft: ContractDraft, args: &ContractUpdateArgs) -> anyhow::Result<ContractDraft> {
    if args.contract_type.is_none() && canonical_contract_type(&draft.contract_type).is_none() {
        bail!(
            "stored contract type '{}' is not one of {}; pass --type to choose one",
            draft.contract_type.trim(),
            CONTRACT_TYPES.join(", ")
        );
    }
    if let Some(name) = &args.name {
        draft.name.clone_from(name);
    }
    if let Some(kind) = &args.contract_type {
        draft.contract_type.clone_from(kind);
    }
    if let Some(client) = &args.client {
        draft.client.clone_from(client);
    }
    if let Some(start) = &args.start {
        draft.start_date.clone_from(start);
    }
    if let Some(end) = &args.end {
        draft.end_date.clone_from(end);
    }
    if let Some(amount) = &args.amount {
        draft.amount.clone_from(amount);
    }
    if let Some(description) = &args.description {
        draft.description.clone_from(description);
    }
    if let Some(status) = parse_status(args.status.as_deref())? {
        draft.status = status;
    }
    Ok(draft)
}

fn validate_update_args(args: &ContractUpdateArgs) -> anyhow::Result<()> {
    let fields = [
        &args.name,
        &args.contract_type,
        &args.client,
        &args.start,
        &args.end,
        &args.amount,
        &args.description,
        &args.status,
    ];
    if fields.iter().all(|field| field.is_none()) {
        bail!(
            "at least one of --name, --type, --client, --start, --end, --amount, --description or --status must be provided"
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use desk_core::enums::ContractStatus;
    use pretty_assertions::assert_eq;

    use super::*;

    fn args() -> ContractUpdateArgs {
        ContractUpdateArgs {
            id: String::from("c1"),
            name: None,
            contract_type: None,
            client: None,
            start: None,
            end: None,
            amount: None,
            description: None,
            status: None,
        }
    }

    #[test]
    fn rejects_noop_update() {
        assert!(validate_update_args(&args()).is_err());
    }

    #[test]
    fn flags_overlay_the_prefilled_form() {
        let current = ContractRecord {
            object_id: Some("c1".into()),
            contract_name: Some("Cleaning".into()),
            client_name: Some("Acme".into()),
            amount: Some(2500.0),
            start_date: Some("2025-01-01T00:00:00.000Z".into()),
            end_date: Some("2025-12-31".into()),
            status: Some("Active".into()),
            ..ContractRecord::default()
        };
        let update = ContractUpdateArgs {
            amount: Some("3000".into()),
            status: Some("expired".into()),
            ..args()
        };
        let draft = apply(ContractDraft::from(&current), &update).unwrap();
        assert_eq!(draft.name, "Cleaning");
        assert_eq!(draft.start_date, "2025-01-01");
        assert_eq!(draft.amount, "3000");
        assert_eq!(draft.status, ContractStatus::Expired);
    }

    #[test]
    fn unknown_stored_type_needs_an_explicit_type() {
        let current = ContractRecord {
            object_id: Some("c1".into()),
            contract_name: Some("Barter deal".into()),
            contract_type: Some("Barter".into()),
            ..ContractRecord::default()
        };
        let status_only = ContractUpdateArgs {
            status: Some("active".into()),
            ..args()
        };
        let err = apply(ContractDraft::from(&current), &status_only).unwrap_err();
        assert!(err.to_string().contains("'Barter'"), "{err}");
        assert!(err.to_string().contains("--type"), "{err}");

        let retyped = ContractUpdateArgs {
            contract_type: Some("other".into()),
            ..status_only
        };
        let draft = apply(ContractDraft::from(&current), &retyped).unwrap();
        assert_eq!(draft.contract_type, "other");
        let error = draft.validate().unwrap_err();
        assert_eq!(error.message_for("contract_type"), None);
    }
}
