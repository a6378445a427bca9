use crate::domain::sales_entry::{NewSalesEntry, SalesEntry, UpdateSalesEntry};
use crate::repository::{SalesEntryListQuery, SalesEntryReader, SalesEntryWriter};
use crate::services::{ServiceError, ServiceResult};

pub fn get_sales_entry<R>(repo: &R, entry_id: i32) -> ServiceResult<SalesEntry>
where
    R: SalesEntryReader + ?Sized,
{
    repo.get_sales_entry_by_id(entry_id)?
        .ok_or(ServiceError::NotFound)
}

pub fn list_sales_entries<R>(
    repo: &R,
    query: SalesEntryListQuery,
) -> ServiceResult<(usize, Vec<SalesEntry>)>
where
    R: SalesEntryReader + ?Sized,
{
    repo.list_sales_entries(query).map_err(ServiceError::from)
}

fn validate_entry(quantity: i32, unit_price: f64) -> ServiceResult<()> {
    if quantity < 1 {
        return Err(ServiceError::Validation(
            "quantity must be at least 1".into(),
        ));
    }
    if unit_price < 0.0 {
        return Err(ServiceError::Validation(
            "unit price cannot be negative".into(),
        ));
    }
    Ok(())
}

pub fn create_sales_entry<R>(repo: &R, new_entry: &NewSalesEntry) -> ServiceResult<SalesEntry>
where
    R: SalesEntryWriter + ?Sized,
{
    validate_entry(new_entry.quantity, new_entry.unit_price)?;
    repo.create_sales_entry(new_entry).map_err(ServiceError::from)
}

pub fn update_sales_entry<R>(
    repo: &R,
    entry_id: i32,
    updates: &UpdateSalesEntry,
) -> ServiceResult<SalesEntry>
where
    R: SalesEntryWriter + ?Sized,
{
    validate_entry(updates.quantity, updates.unit_price)?;
    repo.update_sales_entry(entry_id, updates)
        .map_err(ServiceError::from)
}

pub fn delete_sales_entry<R>(repo: &R, entry_id: i32) -> ServiceResult<()>
where
    R: SalesEntryWriter + ?Sized,
{
    repo.delete_sales_entry(entry_id).map_err(ServiceError::from)
}
