//! Turning controller outcomes into command results.

use anyhow::bail;
use desk_core::enums::Role;
use desk_view::{Category, Effect, ListController, ListRecord, Route, can_visit};

use crate::cli::GlobalFlags;

pub const SIGN_IN_HINT: &str = "not signed in or session expired; run `desk auth login`";

/// Fail on a redirect. A login redirect gets the sign-in hint.
pub fn follow(effect: Option<Effect>) -> anyhow::Result<()> {
    match effect {
        Some(Effect::Redirect(Route::Login)) => bail!(SIGN_IN_HINT),
        Some(Effect::Redirect(route)) => bail!("redirected to {route}"),
        Some(Effect::Fetch(_)) | None => Ok(()),
    }
}

/// Refuse a view the session's role may not open.
pub fn require_view(role: Role, route: &Route) -> anyhow::Result<()> {
    if !can_visit(role, route) {
        bail!("{route} requires an admin account");
    }
    Ok(())
}

/// Report the controller's notice: errors fail the command, otherwise the
/// message is returned.
pub fn settle<R: ListRecord, C: Category>(
    controller: &ListController<R, C>,
    effect: Option<Effect>,
) -> anyhow::Result<String> {
    follow(effect)?;
    match controller.notice() {
        Some(notice) if notice.is_error() => bail!("{}", notice.message()),
        Some(notice) => Ok(notice.message().to_string()),
        None => Ok(String::new()),
    }
}

/// Print a confirmation to stderr unless `--quiet`.
pub fn announce(message: &str, flags: &GlobalFlags) {
    if !flags.quiet && !message.is_empty() {
        eprintln!("{message}");
    }
}
