use serde::Deserialize;
use validator::Validate;

use crate::domain::contact::{NewContact, UpdateContact};

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ContactPayload {
    pub account_id: Option<i32>,
    #[validate(length(min = 1, message = "first name cannot be empty"))]
    pub first_name: String,
    #[validate(length(min = 1, message = "last name cannot be empty"))]
    pub last_name: String,
    #[validate(email)]
    pub email: Option<String>,
    pub phone: Option<String>,
    pub title: Option<String>,
}

impl From<ContactPayload> for NewContact {
    fn from(payload: ContactPayload) -> Self {
        NewContact::new(
            payload.account_id,
            payload.first_name,
            payload.last_name,
            payload.email,
            payload.phone,
            payload.title,
        )
    }
}

impl From<ContactPayload> for UpdateContact {
    fn from(payload: ContactPayload) -> Self {
        UpdateContact::new(
            payload.account_id,
            payload.first_name,
            payload.last_name,
            payload.email,
            payload.phone,
            payload.title,
        )
    }
}
