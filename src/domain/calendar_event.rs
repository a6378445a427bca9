use std::fmt::Display;
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{TypeConstraintError, sanitized_opt, trimmed_opt};

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    #[default]
    Meeting,
    Call,
    Demo,
    Other,
}

impl Display for EventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventType::Meeting => write!(f, "meeting"),
            EventType::Call => write!(f, "call"),
            EventType::Demo => write!(f, "demo"),
            EventType::Other => write!(f, "other"),
        }
    }
}

impl FromStr for EventType {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "meeting" => Ok(EventType::Meeting),
            "call" => Ok(EventType::Call),
            "demo" => Ok(EventType::Demo),
            "other" => Ok(EventType::Other),
            other => Err(TypeConstraintError::InvalidValue(format!(
                "unknown event type: {other}"
            ))),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub event_type: EventType,
    pub starts_at: NaiveDateTime,
    pub ends_at: Option<NaiveDateTime>,
    pub account_id: Option<i32>,
    pub partner_id: Option<i32>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewCalendarEvent {
    pub title: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub event_type: EventType,
    pub starts_at: NaiveDateTime,
    pub ends_at: Option<NaiveDateTime>,
    pub account_id: Option<i32>,
    pub partner_id: Option<i32>,
}

impl NewCalendarEvent {
    #[allow(clippy::too_many_arguments)]
    #[must_use]
    pub fn new(
        title: String,
        description: Option<String>,
        location: Option<String>,
        event_type: EventType,
        starts_at: NaiveDateTime,
        ends_at: Option<NaiveDateTime>,
        account_id: Option<i32>,
        partner_id: Option<i32>,
    ) -> Self {
        Self {
            title: title.trim().to_string(),
            description: sanitized_opt(description),
            location: trimmed_opt(location),
            event_type,
            starts_at,
            ends_at,
            account_id,
            partner_id,
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct UpdateCalendarEvent {
    pub title: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub event_type: EventType,
    pub starts_at: NaiveDateTime,
    pub ends_at: Option<NaiveDateTime>,
    pub account_id: Option<i32>,
    pub partner_id: Option<i32>,
}

impl UpdateCalendarEvent {
    #[allow(clippy::too_many_arguments)]
    #[must_use]
    pub fn new(
        title: String,
        description: Option<String>,
        location: Option<String>,
        event_type: EventType,
        starts_at: NaiveDateTime,
        ends_at: Option<NaiveDateTime>,
        account_id: Option<i32>,
        partner_id: Option<i32>,
    ) -> Self {
        Self {
            title: title.trim().to_string(),
            description: sanitized_opt(description),
            location: trimmed_opt(location),
            event_type,
            starts_at,
            ends_at,
            account_id,
            partner_id,
        }
    }
}
