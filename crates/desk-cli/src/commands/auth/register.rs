use desk_core::drafts::RegisterRequest;
use desk_view::Route;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::auth::AuthRegisterArgs;
use crate::output::output;

#[derive(Serialize)]
struct AuthRegisterResponse {
    registered: bool,
    message: String,
    next: String,
}

pub async fn handle(
    args: &AuthRegisterArgs,
    flags: &GlobalFlags,
    config: &desk_config::DeskConfig,
) -> anyhow::Result<()> {
    let request = RegisterRequest {
        username: args.username.clone(),
        email: args.email.clone(),
        password: super::resolve_password(args.password.as_deref())?,
    };

    let message = super::client(config)?.register(&request).await?;
    output(
        &AuthRegisterResponse {
            registered: true,
            message,
            next: Route::Login.path(),
        },
        flags.format,
    )
}
