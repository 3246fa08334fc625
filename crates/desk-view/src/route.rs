//! Named navigation targets.
//!
//! The core only ever embeds a record identifier into a path; everything
//! else is a fixed string.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    Login,
    Register,
    AdminDashboard,
    Contracts,
    ContractDetail(String),
    ContractEdit(String),
    ContractNew,
    AdminMeetings,
    MeetingNew,
    UserMeetings,
}

impl Route {
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::Login => "/".to_string(),
            Self::Register => "/register".to_string(),
            Self::AdminDashboard => "/admin-dashboard".to_string(),
            Self::Contracts => "/contract-page".to_string(),
            Self::ContractDetail(id) => format!("/view-contract-page/{}", urlencoding::encode(id)),
            Self::ContractEdit(id) => format!("/edit-contract/{}", urlencoding::encode(id)),
            Self::ContractNew => "/addnew-contract".to_string(),
            Self::AdminMeetings => "/admin-meeting".to_string(),
            Self::MeetingNew => "/add-meeting".to_string(),
            Self::UserMeetings => "/user-meeting".to_string(),
        }
    }

    /// Only the privileged role may open this view.
    #[must_use]
    pub const fn requires_privilege(&self) -> bool {
        matches!(
            self,
            Self::AdminDashboard
                | Self::ContractNew
                | Self::ContractEdit(_)
                | Self::AdminMeetings
                | Self::MeetingNew
        )
    }

    /// Open without a session.
    #[must_use]
    pub const fn is_public(&self) -> bool {
        matches!(self, Self::Login | Self::Register)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}
