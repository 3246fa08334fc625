mod login;
mod logout;
mod register;
mod status;

use anyhow::{Context, bail};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AuthCommands;

/// Environment fallback for `--password`.
const PASSWORD_ENV: &str = "DESK_PASSWORD";

/// Handle `desk auth <subcommand>`.
pub async fn handle(
    action: &AuthCommands,
    flags: &GlobalFlags,
    config: &desk_config::DeskConfig,
) -> anyhow::Result<()> {
    match action {
        AuthCommands::Login(args) => login::handle(args, flags, config).await,
        AuthCommands::Register(args) => register::handle(args, flags, config).await,
        AuthCommands::Logout => logout::handle(flags),
        AuthCommands::Status => status::handle(flags),
    }
}

fn client(config: &desk_config::DeskConfig) -> anyhow::Result<desk_api::ApiClient> {
    desk_api::ApiClient::new(&config.api).context("failed to build API client")
}

/// `--password`, else `DESK_PASSWORD`.
fn resolve_password(flag: Option<&str>) -> anyhow::Result<String> {
    if let Some(password) = flag {
        return Ok(password.to_string());
    }
    match std::env::var(PASSWORD_ENV) {
        Ok(password) if !password.is_empty() => Ok(password),
        _ => bail!("no password given: pass --password or set {PASSWORD_ENV}"),
    }
}
