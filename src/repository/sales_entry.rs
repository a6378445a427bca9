//! Repository implementation for recorded sales transactions.

use diesel::prelude::*;

use crate::domain::sales_entry::{NewSalesEntry, SalesEntry, UpdateSalesEntry};
use crate::models::sales_entry::{
    NewSalesEntry as DbNewSalesEntry, SalesEntry as DbSalesEntry,
    UpdateSalesEntry as DbUpdateSalesEntry,
};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{
    DieselRepository, SalesEntryListQuery, SalesEntryReader, SalesEntryWriter, page_bounds,
    timestamp_now,
};

impl SalesEntryReader for DieselRepository {
    fn get_sales_entry_by_id(&self, id: i32) -> RepositoryResult<Option<SalesEntry>> {
        use crate::schema::sales_entries;

        let mut conn = self.conn()?;
        let entry = sales_entries::table
            .find(id)
            .first::<DbSalesEntry>(&mut conn)
            .optional()?;

        match entry {
            Some(entry) => Ok(Some(
                SalesEntry::try_from(entry).map_err(RepositoryError::from)?,
            )),
            None => Ok(None),
        }
    }

    fn list_sales_entries(
        &self,
        query: SalesEntryListQuery,
    ) -> RepositoryResult<(usize, Vec<SalesEntry>)> {
        use crate::schema::sales_entries;

        let mut conn = self.conn()?;

        let build = |query: &SalesEntryListQuery| {
            let mut q = sales_entries::table.into_boxed();
            if let Some(partner_id) = query.partner_id {
                q = q.filter(sales_entries::partner_id.eq(partner_id));
            }
            if let Some(payment_status) = query.payment_status {
                q = q.filter(sales_entries::payment_status.eq(payment_status.to_string()));
            }
            q
        };

        let total: i64 = build(&query).count().get_result(&mut conn)?;

        let mut items_query = build(&query).order(sales_entries::sale_date.desc());
        if let Some((limit, offset)) = page_bounds(query.pagination) {
            items_query = items_query.limit(limit).offset(offset);
        }

        let items = items_query
            .load::<DbSalesEntry>(&mut conn)?
            .into_iter()
            .map(|e| SalesEntry::try_from(e).map_err(RepositoryError::from))
            .collect::<RepositoryResult<Vec<_>>>()?;

        Ok((total as usize, items))
    }
}

impl SalesEntryWriter for DieselRepository {
    fn create_sales_entry(&self, new_entry: &NewSalesEntry) -> RepositoryResult<SalesEntry> {
        use crate::schema::sales_entries;

        let mut conn = self.conn()?;
        let insertable: DbNewSalesEntry = new_entry.into();
        let created = diesel::insert_into(sales_entries::table)
            .values(&insertable)
            .get_result::<DbSalesEntry>(&mut conn)?;

        SalesEntry::try_from(created).map_err(RepositoryError::from)
    }

    fn update_sales_entry(
        &self,
        entry_id: i32,
        updates: &UpdateSalesEntry,
    ) -> RepositoryResult<SalesEntry> {
        use crate::schema::sales_entries;

        let mut conn = self.conn()?;
        let db_updates = DbUpdateSalesEntry::from_domain(updates, timestamp_now());

        let updated = diesel::update(sales_entries::table.find(entry_id))
            .set(&db_updates)
            .get_result::<DbSalesEntry>(&mut conn)?;

        SalesEntry::try_from(updated).map_err(RepositoryError::from)
    }

    fn delete_sales_entry(&self, entry_id: i32) -> RepositoryResult<()> {
        use crate::schema::sales_entries;

        let mut conn = self.conn()?;
        let deleted = diesel::delete(sales_entries::table.find(entry_id)).execute(&mut conn)?;
        if deleted == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
