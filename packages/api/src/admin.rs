//! User management endpoints for the admin console.

use serde::Serialize;

use crate::client::Client;
use crate::error::ApiError;
use store::UserInfo;

#[derive(Serialize)]
struct SetFlag {
    value: bool,
}

impl Client {
    pub async fn list_users(&self) -> Result<Vec<UserInfo>, ApiError> {
        self.get_json("/admin/users").await
    }

    /// Verify or un-verify an account; returns the updated record.
    pub async fn set_verified(&self, user_id: &str, verified: bool) -> Result<UserInfo, ApiError> {
        self.put_json(
            &format!("/admin/users/{user_id}/verified"),
            &SetFlag { value: verified },
        )
        .await
    }

    /// Suspend or restore an account; returns the updated record.
    pub async fn set_suspended(
        &self,
        user_id: &str,
        suspended: bool,
    ) -> Result<UserInfo, ApiError> {
        self.put_json(
            &format!("/admin/users/{user_id}/suspended"),
            &SetFlag { value: suspended },
        )
        .await
    }
}
