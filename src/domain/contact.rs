use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::trimmed_opt;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: i32,
    pub account_id: Option<i32>,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub title: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewContact {
    pub account_id: Option<i32>,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub title: Option<String>,
}

impl NewContact {
    #[must_use]
    pub fn new(
        account_id: Option<i32>,
        first_name: String,
        last_name: String,
        email: Option<String>,
        phone: Option<String>,
        title: Option<String>,
    ) -> Self {
        Self {
            account_id,
            first_name: first_name.trim().to_string(),
            last_name: last_name.trim().to_string(),
            email: trimmed_opt(email).map(|s| s.to_lowercase()),
            phone: trimmed_opt(phone),
            title: trimmed_opt(title),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct UpdateContact {
    pub account_id: Option<i32>,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub title: Option<String>,
}

impl UpdateContact {
    #[must_use]
    pub fn new(
        account_id: Option<i32>,
        first_name: String,
        last_name: String,
        email: Option<String>,
        phone: Option<String>,
        title: Option<String>,
    ) -> Self {
        Self {
            account_id,
            first_name: first_name.trim().to_string(),
            last_name: last_name.trim().to_string(),
            email: trimmed_opt(email).map(|s| s.to_lowercase()),
            phone: trimmed_opt(phone),
            title: trimmed_opt(title),
        }
    }
}
