use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::calendar_event::{
    CalendarEvent as DomainCalendarEvent, NewCalendarEvent as DomainNewCalendarEvent,
    UpdateCalendarEvent as DomainUpdateCalendarEvent,
};
use crate::domain::types::TypeConstraintError;

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::calendar_events)]
/// Diesel model for [`crate::domain::calendar_event::CalendarEvent`].
pub struct CalendarEvent {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub event_type: String,
    pub starts_at: NaiveDateTime,
    pub ends_at: Option<NaiveDateTime>,
    pub account_id: Option<i32>,
    pub partner_id: Option<i32>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::calendar_events)]
pub struct NewCalendarEvent<'a> {
    pub title: &'a str,
    pub description: Option<&'a str>,
    pub location: Option<&'a str>,
    pub event_type: String,
    pub starts_at: NaiveDateTime,
    pub ends_at: Option<NaiveDateTime>,
    pub account_id: Option<i32>,
    pub partner_id: Option<i32>,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::calendar_events)]
#[diesel(treat_none_as_null = true)]
pub struct UpdateCalendarEvent<'a> {
    pub title: &'a str,
    pub description: Option<&'a str>,
    pub location: Option<&'a str>,
    pub event_type: String,
    pub starts_at: NaiveDateTime,
    pub ends_at: Option<NaiveDateTime>,
    pub account_id: Option<i32>,
    pub partner_id: Option<i32>,
    pub updated_at: NaiveDateTime,
}

impl TryFrom<CalendarEvent> for DomainCalendarEvent {
    type Error = TypeConstraintError;

    fn try_from(event: CalendarEvent) -> Result<Self, Self::Error> {
        Ok(Self {
            id: event.id,
            title: event.title,
            description: event.description,
            location: event.location,
            event_type: event.event_type.parse()?,
            starts_at: event.starts_at,
            ends_at: event.ends_at,
            account_id: event.account_id,
            partner_id: event.partner_id,
            created_at: event.created_at,
            updated_at: event.updated_at,
        })
    }
}

impl<'a> From<&'a DomainNewCalendarEvent> for NewCalendarEvent<'a> {
    fn from(event: &'a DomainNewCalendarEvent) -> Self {
        Self {
            title: event.title.as_str(),
            description: event.description.as_deref(),
            location: event.location.as_deref(),
            event_type: event.event_type.to_string(),
            starts_at: event.starts_at,
            ends_at: event.ends_at,
            account_id: event.account_id,
            partner_id: event.partner_id,
        }
    }
}

impl<'a> UpdateCalendarEvent<'a> {
    pub fn from_domain(updates: &'a DomainUpdateCalendarEvent, updated_at: NaiveDateTime) -> Self {
        Self {
            title: updates.title.as_str(),
            description: updates.description.as_deref(),
            location: updates.location.as_deref(),
            event_type: updates.event_type.to_string(),
            starts_at: updates.starts_at,
            ends_at: updates.ends_at,
            account_id: updates.account_id,
            partner_id: updates.partner_id,
            updated_at,
        }
    }
}
