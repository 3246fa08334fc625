//! Role Gate: role → capability set.
//!
//! Pages consume [`Capabilities`], never the raw role string. Exactly one
//! role is privileged; unknown and missing roles are view-only and rely on
//! the server to scope what they can list.

use desk_core::enums::Role;
use desk_core::identity::Session;
use serde::Serialize;

use crate::route::Route;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[allow(clippy::struct_excessive_bools)]
pub struct Capabilities {
    pub can_create: bool,
    pub can_edit: bool,
    pub can_delete: bool,
    /// Unrestricted listing. Without it the server scopes results.
    pub can_view_all: bool,
}

/// A gated mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Create,
    Edit,
    Delete,
}

impl Action {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Create => "create records",
            Self::Edit => "edit records",
            Self::Delete => "delete records",
        }
    }
}

impl Capabilities {
    pub const FULL: Self = Self {
        can_create: true,
        can_edit: true,
        can_delete: true,
        can_view_all: true,
    };

    pub const VIEW_ONLY: Self = Self {
        can_create: false,
        can_edit: false,
        can_delete: false,
        can_view_all: false,
    };

    #[must_use]
    pub const fn for_role(role: Role) -> Self {
        if role.is_privileged() {
            Self::FULL
        } else {
            Self::VIEW_ONLY
        }
    }

    #[must_use]
    pub fn for_session(session: &Session) -> Self {
        Self::for_role(session.role())
    }

    #[must_use]
    pub const fn allows(self, action: Action) -> bool {
        match action {
            Action::Create => self.can_create,
            Action::Edit => self.can_edit,
            Action::Delete => self.can_delete,
        }
    }
}

/// Where to go right after sign-in.
#[must_use]
pub const fn landing_route(role: Role) -> Route {
    if role.is_privileged() {
        Route::AdminDashboard
    } else {
        Route::UserMeetings
    }
}

/// Whether `role` may open `route` (assuming an authenticated session).
#[must_use]
pub const fn can_visit(role: Role, route: &Route) -> bool {
    !route.requires_privilege() || role.is_privileged()
}
