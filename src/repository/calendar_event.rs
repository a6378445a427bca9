//! Repository implementation for calendar events.

use diesel::prelude::*;

use crate::domain::calendar_event::{CalendarEvent, NewCalendarEvent, UpdateCalendarEvent};
use crate::models::calendar_event::{
    CalendarEvent as DbCalendarEvent, NewCalendarEvent as DbNewCalendarEvent,
    UpdateCalendarEvent as DbUpdateCalendarEvent,
};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{
    CalendarEventListQuery, CalendarEventReader, CalendarEventWriter, DieselRepository,
    page_bounds, timestamp_now,
};

impl CalendarEventReader for DieselRepository {
    fn get_calendar_event_by_id(&self, id: i32) -> RepositoryResult<Option<CalendarEvent>> {
        use crate::schema::calendar_events;

        let mut conn = self.conn()?;
        let event = calendar_events::table
            .find(id)
            .first::<DbCalendarEvent>(&mut conn)
            .optional()?;

        match event {
            Some(event) => Ok(Some(
                CalendarEvent::try_from(event).map_err(RepositoryError::from)?,
            )),
            None => Ok(None),
        }
    }

    fn list_calendar_events(
        &self,
        query: CalendarEventListQuery,
    ) -> RepositoryResult<(usize, Vec<CalendarEvent>)> {
        use crate::schema::calendar_events;

        let mut conn = self.conn()?;

        let build = |query: &CalendarEventListQuery| {
            let mut q = calendar_events::table.into_boxed();
            if let Some(from) = query.from {
                q = q.filter(
                    calendar_events::starts_at.ge(from.and_hms_opt(0, 0, 0).unwrap_or_default()),
                );
            }
            if let Some(to) = query.to {
                q = q.filter(
                    calendar_events::starts_at
                        .lt(to.succ_opt().unwrap_or(to).and_hms_opt(0, 0, 0).unwrap_or_default()),
                );
            }
            if let Some(event_type) = query.event_type {
                q = q.filter(calendar_events::event_type.eq(event_type.to_string()));
            }
            if let Some(search) = &query.search {
                let pattern = format!("%{search}%");
                q = q.filter(
                    calendar_events::title
                        .like(pattern.clone())
                        .or(calendar_events::location.like(pattern)),
                );
            }
            q
        };

        let total: i64 = build(&query).count().get_result(&mut conn)?;

        let mut items_query = build(&query).order(calendar_events::starts_at.asc());
        if let Some((limit, offset)) = page_bounds(query.pagination) {
            items_query = items_query.limit(limit).offset(offset);
        }

        let items = items_query
            .load::<DbCalendarEvent>(&mut conn)?
            .into_iter()
            .map(|e| CalendarEvent::try_from(e).map_err(RepositoryError::from))
            .collect::<RepositoryResult<Vec<_>>>()?;

        Ok((total as usize, items))
    }
}

impl CalendarEventWriter for DieselRepository {
    fn create_calendar_event(
        &self,
        new_event: &NewCalendarEvent,
    ) -> RepositoryResult<CalendarEvent> {
        use crate::schema::calendar_events;

        let mut conn = self.conn()?;
        let insertable: DbNewCalendarEvent = new_event.into();
        let created = diesel::insert_into(calendar_events::table)
            .values(&insertable)
            .get_result::<DbCalendarEvent>(&mut conn)?;

        CalendarEvent::try_from(created).map_err(RepositoryError::from)
    }

    fn update_calendar_event(
        &self,
        event_id: i32,
        updates: &UpdateCalendarEvent,
    ) -> RepositoryResult<CalendarEvent> {
        use crate::schema::calendar_events;

        let mut conn = self.conn()?;
        let db_updates = DbUpdateCalendarEvent::from_domain(updates, timestamp_now());

        let updated = diesel::update(calendar_events::table.find(event_id))
            .set(&db_updates)
            .get_result::<DbCalendarEvent>(&mut conn)?;

        CalendarEvent::try_from(updated).map_err(RepositoryError::from)
    }

    fn delete_calendar_event(&self, event_id: i32) -> RepositoryResult<()> {
        use crate::schema::calendar_events;

        let mut conn = self.conn()?;
        let deleted =
            diesel::delete(calendar_events::table.find(event_id)).execute(&mut conn)?;
        if deleted == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
