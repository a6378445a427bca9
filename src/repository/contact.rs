//! Repository implementation for contacts.

use diesel::prelude::*;

use crate::domain::contact::{Contact, NewContact, UpdateContact};
use crate::models::contact::{
    Contact as DbContact, NewContact as DbNewContact, UpdateContact as DbUpdateContact,
};
use crate::repository::errors::RepositoryResult;
use crate::repository::{
    ContactListQuery, ContactReader, ContactWriter, DieselRepository, page_bounds, timestamp_now,
};

impl ContactReader for DieselRepository {
    fn get_contact_by_id(&self, id: i32) -> RepositoryResult<Option<Contact>> {
        use crate::schema::contacts;

        let mut conn = self.conn()?;
        let contact = contacts::table
            .find(id)
            .first::<DbContact>(&mut conn)
            .optional()?;

        Ok(contact.map(Into::into))
    }

    fn list_contacts(&self, query: ContactListQuery) -> RepositoryResult<(usize, Vec<Contact>)> {
        use crate::schema::contacts;

        let mut conn = self.conn()?;

        let build = |query: &ContactListQuery| {
            let mut q = contacts::table.into_boxed();
            if let Some(account_id) = query.account_id {
                q = q.filter(contacts::account_id.eq(account_id));
            }
            if let Some(search) = &query.search {
                let pattern = format!("%{search}%");
                q = q.filter(
                    contacts::first_name
                        .like(pattern.clone())
                        .or(contacts::last_name.like(pattern.clone()))
                        .or(contacts::email.like(pattern.clone()))
                        .or(contacts::title.like(pattern)),
                );
            }
            q
        };

        let total: i64 = build(&query).count().get_result(&mut conn)?;

        let mut items_query = build(&query).order(contacts::id.asc());
        if let Some((limit, offset)) = page_bounds(query.pagination) {
            items_query = items_query.limit(limit).offset(offset);
        }

        let items = items_query
            .load::<DbContact>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect();

        Ok((total as usize, items))
    }
}

impl ContactWriter for DieselRepository {
    fn create_contact(&self, new_contact: &NewContact) -> RepositoryResult<Contact> {
        use crate::schema::contacts;

        let mut conn = self.conn()?;
        let insertable: DbNewContact = new_contact.into();
        let created = diesel::insert_into(contacts::table)
            .values(&insertable)
            .get_result::<DbContact>(&mut conn)?;

        Ok(created.into())
    }

    fn create_contacts(&self, new_contacts: &[NewContact]) -> RepositoryResult<usize> {
        use crate::schema::contacts;

        let mut conn = self.conn()?;
        let insertables: Vec<DbNewContact> = new_contacts.iter().map(Into::into).collect();
        let affected = diesel::insert_into(contacts::table)
            .values(&insertables)
            .execute(&mut conn)?;

        Ok(affected)
    }

    fn update_contact(
        &self,
        contact_id: i32,
        updates: &UpdateContact,
    ) -> RepositoryResult<Contact> {
        use crate::schema::contacts;

        let mut conn = self.conn()?;
        let db_updates = DbUpdateContact::from_domain(updates, timestamp_now());

        let updated = diesel::update(contacts::table.find(contact_id))
            .set(&db_updates)
            .get_result::<DbContact>(&mut conn)?;

        Ok(updated.into())
    }

    fn delete_contact(&self, contact_id: i32) -> RepositoryResult<()> {
        use crate::schema::contacts;

        let mut conn = self.conn()?;
        let deleted = diesel::delete(contacts::table.find(contact_id)).execute(&mut conn)?;
        if deleted == 0 {
            return Err(diesel::result::Error::NotFound.into());
        }
        Ok(())
    }
}
