//! Profile endpoints for the signed-in account.

use serde::Serialize;

use crate::client::Client;
use crate::error::ApiError;
use store::UserInfo;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct UpdateProfile {
    pub name: String,
    pub email: String,
}

impl Client {
    pub async fn profile(&self) -> Result<UserInfo, ApiError> {
        self.get_json("/account/profile").await
    }

    /// Update profile fields; returns the fresh record, which callers should
    /// write back into the session cache.
    pub async fn update_profile(&self, update: &UpdateProfile) -> Result<UserInfo, ApiError> {
        self.put_json("/account/profile", update).await
    }

    /// Permanently delete the account. The caller is responsible for clearing
    /// the local session afterwards.
    pub async fn delete_account(&self) -> Result<(), ApiError> {
        self.delete_unit("/account/profile").await
    }
}
