//! Team member listing and invites.
//!
//! The list response carries no stable member identifier, so member removal
//! cannot be implemented against the current backend contract; the team page
//! surfaces that as a message instead of a delete call.

use serde::{Deserialize, Serialize};

use crate::client::Client;
use crate::error::ApiError;
use store::models::initials_of;

/// Role of a member within a customer's team.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TeamRole {
    Admin,
    Editor,
    #[default]
    Viewer,
}

impl TeamRole {
    pub fn label(&self) -> &'static str {
        match self {
            TeamRole::Admin => "Admin",
            TeamRole::Editor => "Editor",
            TeamRole::Viewer => "Viewer",
        }
    }

    pub const ALL: [TeamRole; 3] = [TeamRole::Admin, TeamRole::Editor, TeamRole::Viewer];
}

/// A member of the customer's team as listed by the backend.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TeamMember {
    #[serde(default)]
    pub name: Option<String>,
    pub email: String,
    #[serde(default)]
    pub role: TeamRole,
}

impl TeamMember {
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.email)
    }

    /// Up to two uppercase initials for the avatar badge.
    pub fn initials(&self) -> String {
        initials_of(self.name.as_deref().unwrap_or(&self.email))
    }
}

#[derive(Serialize)]
struct Invite<'a> {
    email: &'a str,
    role: TeamRole,
}

impl Client {
    pub async fn list_members(&self) -> Result<Vec<TeamMember>, ApiError> {
        self.get_json("/team").await
    }

    pub async fn invite_member(&self, email: &str, role: TeamRole) -> Result<(), ApiError> {
        self.post_unit("/team/invite", &Invite { email, role }).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_member_initials() {
        let named = TeamMember {
            name: Some("Ada Lovelace".to_string()),
            email: "ada@agency.com".to_string(),
            role: TeamRole::Editor,
        };
        assert_eq!(named.initials(), "AL");

        let unnamed = TeamMember {
            name: None,
            email: "ops@agency.com".to_string(),
            role: TeamRole::Viewer,
        };
        assert_eq!(unnamed.initials(), "O");
        assert_eq!(unnamed.display_name(), "ops@agency.com");
    }

    #[test]
    fn test_member_without_role_defaults_to_viewer() {
        let parsed: TeamMember =
            serde_json::from_str(r#"{"email":"new@agency.com"}"#).unwrap();
        assert_eq!(parsed.role, TeamRole::Viewer);
    }
}
