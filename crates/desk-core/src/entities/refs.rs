use serde::{Deserialize, Serialize};

/// A reference to a user: either populated by the API or a bare identifier.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum UserRef {
    Id(String),
    User {
        #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
        id: Option<String>,
        #[serde(default)]
        username: Option<String>,
        #[serde(default)]
        email: Option<String>,
    },
}

impl UserRef {
    /// Display name: username, then email. Blank values are skipped.
    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        match self {
            Self::Id(_) => None,
            Self::User {
                username, email, ..
            } => non_blank(username.as_deref()).or_else(|| non_blank(email.as_deref())),
        }
    }
}

/// A reference to a contract: either populated by the API or a bare identifier.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum ContractRef {
    Id(String),
    Contract {
        #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
        id: Option<String>,
        #[serde(default)]
        contract_name: Option<String>,
        #[serde(default)]
        client_name: Option<String>,
    },
}

impl ContractRef {
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        match self {
            Self::Id(id) => non_blank(Some(id.as_str())),
            Self::Contract { id, .. } => non_blank(id.as_deref()),
        }
    }

    #[must_use]
    pub fn contract_name(&self) -> Option<&str> {
        match self {
            Self::Id(_) => None,
            Self::Contract { contract_name, .. } => non_blank(contract_name.as_deref()),
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
