use desk_core::drafts::LoginRequest;
use desk_view::landing_route;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::auth::AuthLoginArgs;
use crate::output::output;

#[derive(Serialize)]
struct AuthLoginResponse {
    authenticated: bool,
    role: String,
    user_id: Option<String>,
    landing: String,
    stored_in: Option<&'static str>,
}

pub async fn handle(
    args: &AuthLoginArgs,
    flags: &GlobalFlags,
    config: &desk_config::DeskConfig,
) -> anyhow::Result<()> {
    let request = LoginRequest {
        username: args.username.clone(),
        password: super::resolve_password(args.password.as_deref())?,
    };

    let session = super::client(config)?.login(&request).await?;
    desk_auth::sign_in(&session)?;

    let role = session.role();
    tracing::info!(?role, "signed in");
    output(
        &AuthLoginResponse {
            authenticated: true,
            role: session.role.clone().unwrap_or_else(|| String::from("user")),
            user_id: session.user_id.clone(),
            landing: landing_route(role).path(),
            stored_in: desk_auth::session_store::detect_session_source(),
        },
        flags.format,
    )
}
