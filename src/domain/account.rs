use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{sanitized_opt, trimmed_opt};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: i32,
    pub name: String,
    pub industry: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub address: Option<String>,
    pub notes: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewAccount {
    pub name: String,
    pub industry: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub address: Option<String>,
    pub notes: Option<String>,
}

impl NewAccount {
    #[must_use]
    pub fn new(
        name: String,
        industry: Option<String>,
        email: Option<String>,
        phone: Option<String>,
        website: Option<String>,
        address: Option<String>,
        notes: Option<String>,
    ) -> Self {
        Self {
            name: name.trim().to_string(),
            industry: trimmed_opt(industry),
            email: trimmed_opt(email).map(|s| s.to_lowercase()),
            phone: trimmed_opt(phone),
            website: trimmed_opt(website),
            address: trimmed_opt(address),
            notes: sanitized_opt(notes),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct UpdateAccount {
    pub name: String,
    pub industry: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub address: Option<String>,
    pub notes: Option<String>,
}

impl UpdateAccount {
    #[must_use]
    pub fn new(
        name: String,
        industry: Option<String>,
        email: Option<String>,
        phone: Option<String>,
        website: Option<String>,
        address: Option<String>,
        notes: Option<String>,
    ) -> Self {
        Self {
            name: name.trim().to_string(),
            industry: trimmed_opt(industry),
            email: trimmed_opt(email).map(|s| s.to_lowercase()),
            phone: trimmed_opt(phone),
            website: trimmed_opt(website),
            address: trimmed_opt(address),
            notes: sanitized_opt(notes),
        }
    }
}
