use anyhow::bail;
use chrono::Utc;
use desk_api::ApiError;
use desk_view::mapper::map_contract;
use desk_view::role::Action;
use desk_view::{Capabilities, DisplayRecord, Route};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::commands::shared::gate::SIGN_IN_HINT;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct ContractDetail {
    #[serde(flatten)]
    record: DisplayRecord,
    view: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    edit: Option<String>,
}

pub async fn run(id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    if desk_auth::check_credential(&ctx.session, Utc::now()).is_err() {
        bail!(SIGN_IN_HINT);
    }

    let contract = match ctx.api.get_contract(&ctx.session, id).await {
        Ok(contract) => contract,
        Err(ApiError::Unauthorized) => bail!(SIGN_IN_HINT),
        Err(error) => return Err(error.into()),
    };
    let record = map_contract(&contract, &ctx.formatter)?;

    let edit = Capabilities::for_session(&ctx.session)
        .allows(Action::Edit)
        .then(|| Route::ContractEdit(record.id.clone()).path());
    let detail = ContractDetail {
        view: Route::ContractDetail(record.id.clone()).path(),
        edit,
        record,
    };
    output(&detail, flags.format)
}
