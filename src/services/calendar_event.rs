use crate::domain::calendar_event::{CalendarEvent, NewCalendarEvent, UpdateCalendarEvent};
use crate::repository::{CalendarEventListQuery, CalendarEventReader, CalendarEventWriter};
use crate::services::{ServiceError, ServiceResult};

pub fn get_calendar_event<R>(repo: &R, event_id: i32) -> ServiceResult<CalendarEvent>
where
    R: CalendarEventReader + ?Sized,
{
    repo.get_calendar_event_by_id(event_id)?
        .ok_or(ServiceError::NotFound)
}

pub fn list_calendar_events<R>(
    repo: &R,
    query: CalendarEventListQuery,
) -> ServiceResult<(usize, Vec<CalendarEvent>)>
where
    R: CalendarEventReader + ?Sized,
{
    repo.list_calendar_events(query).map_err(ServiceError::from)
}

pub fn create_calendar_event<R>(repo: &R, new_event: &NewCalendarEvent) -> ServiceResult<CalendarEvent>
where
    R: CalendarEventWriter + ?Sized,
{
    if new_event.title.is_empty() {
        return Err(ServiceError::Validation("title cannot be empty".into()));
    }
    if let Some(ends_at) = new_event.ends_at
        && ends_at < new_event.starts_at
    {
        return Err(ServiceError::Validation(
            "event cannot end before it starts".into(),
        ));
    }
    repo.create_calendar_event(new_event)
        .map_err(ServiceError::from)
}

pub fn update_calendar_event<R>(
    repo: &R,
    event_id: i32,
    updates: &UpdateCalendarEvent,
) -> ServiceResult<CalendarEvent>
where
    R: CalendarEventWriter + ?Sized,
{
    if updates.title.is_empty() {
        return Err(ServiceError::Validation("title cannot be empty".into()));
    }
    if let Some(ends_at) = updates.ends_at
        && ends_at < updates.starts_at
    {
        return Err(ServiceError::Validation(
            "event cannot end before it starts".into(),
        ));
    }
    repo.update_calendar_event(event_id, updates)
        .map_err(ServiceError::from)
}

pub fn delete_calendar_event<R>(repo: &R, event_id: i32) -> ServiceResult<()>
where
    R: CalendarEventWriter + ?Sized,
{
    repo.delete_calendar_event(event_id)
        .map_err(ServiceError::from)
}
