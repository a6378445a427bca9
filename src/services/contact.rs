use crate::domain::contact::{Contact, NewContact, UpdateContact};
use crate::repository::{ContactListQuery, ContactReader, ContactWriter};
use crate::services::{ServiceError, ServiceResult};

pub fn get_contact<R>(repo: &R, contact_id: i32) -> ServiceResult<Contact>
where
    R: ContactReader + ?Sized,
{
    repo.get_contact_by_id(contact_id)?
        .ok_or(ServiceError::NotFound)
}

pub fn list_contacts<R>(repo: &R, query: ContactListQuery) -> ServiceResult<(usize, Vec<Contact>)>
where
    R: ContactReader + ?Sized,
{
    repo.list_contacts(query).map_err(ServiceError::from)
}

pub fn create_contact<R>(repo: &R, new_contact: &NewContact) -> ServiceResult<Contact>
where
    R: ContactWriter + ?Sized,
{
    repo.create_contact(new_contact).map_err(ServiceError::from)
}

pub fn update_contact<R>(
    repo: &R,
    contact_id: i32,
    updates: &UpdateContact,
) -> ServiceResult<Contact>
where
    R: ContactWriter + ?Sized,
{
    repo.update_contact(contact_id, updates)
        .map_err(ServiceError::from)
}

pub fn delete_contact<R>(repo: &R, contact_id: i32) -> ServiceResult<()>
where
    R: ContactWriter + ?Sized,
{
    repo.delete_contact(contact_id).map_err(ServiceError::from)
}
