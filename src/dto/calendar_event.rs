use chrono::NaiveDateTime;
use serde::Deserialize;
use validator::Validate;

use crate::domain::calendar_event::{EventType, NewCalendarEvent, UpdateCalendarEvent};

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEventPayload {
    #[validate(length(min = 1, message = "title cannot be empty"))]
    pub title: String,
    pub description: Option<String>,
    pub location: Option<String>,
    /// Defaults to `meeting` when omitted.
    pub event_type: Option<EventType>,
    pub starts_at: NaiveDateTime,
    pub ends_at: Option<NaiveDateTime>,
    pub account_id: Option<i32>,
    pub partner_id: Option<i32>,
}

impl From<CalendarEventPayload> for NewCalendarEvent {
    fn from(payload: CalendarEventPayload) -> Self {
        NewCalendarEvent::new(
            payload.title,
            payload.description,
            payload.location,
            payload.event_type.unwrap_or_default(),
            payload.starts_at,
            payload.ends_at,
            payload.account_id,
            payload.partner_id,
        )
    }
}

impl From<CalendarEventPayload> for UpdateCalendarEvent {
    fn from(payload: CalendarEventPayload) -> Self {
        UpdateCalendarEvent::new(
            payload.title,
            payload.description,
            payload.location,
            payload.event_type.unwrap_or_default(),
            payload.starts_at,
            payload.ends_at,
            payload.account_id,
            payload.partner_id,
        )
    }
}
