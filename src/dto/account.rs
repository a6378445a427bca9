use serde::Deserialize;
use validator::Validate;

use crate::domain::account::{NewAccount, UpdateAccount};

/// Request body for creating or replacing an account.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AccountPayload {
    #[validate(length(min = 1, message = "name cannot be empty"))]
    pub name: String,
    pub industry: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub address: Option<String>,
    pub notes: Option<String>,
}

impl From<AccountPayload> for NewAccount {
    fn from(payload: AccountPayload) -> Self {
        NewAccount::new(
            payload.name,
            payload.industry,
            payload.email,
            payload.phone,
            payload.website,
            payload.address,
            payload.notes,
        )
    }
}

impl From<AccountPayload> for UpdateAccount {
    fn from(payload: AccountPayload) -> Self {
        UpdateAccount::new(
            payload.name,
            payload.industry,
            payload.email,
            payload.phone,
            payload.website,
            payload.address,
            payload.notes,
        )
    }
}
