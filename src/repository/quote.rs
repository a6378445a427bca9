//! Repository implementation for quotes and their line items.
//!
//! Line items are owned by their quote: creates and updates replace the item
//! set inside one transaction, and `sort_order` is persisted exactly as the
//! service layer assigned it.

use diesel::prelude::*;

use crate::domain::quote::{NewQuote, Quote, UpdateQuote};
use crate::models::quote::{
    NewQuote as DbNewQuote, NewQuoteItem as DbNewQuoteItem, Quote as DbQuote,
    QuoteItem as DbQuoteItem, UpdateQuote as DbUpdateQuote,
};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{
    DieselRepository, QuoteListQuery, QuoteReader, QuoteWriter, page_bounds, timestamp_now,
};

fn load_items(
    conn: &mut crate::db::DbConnection,
    quote_id: i32,
) -> Result<Vec<DbQuoteItem>, diesel::result::Error> {
    use crate::schema::quote_items;

    quote_items::table
        .filter(quote_items::quote_id.eq(quote_id))
        .order(quote_items::sort_order.asc())
        .load::<DbQuoteItem>(conn)
}

impl QuoteReader for DieselRepository {
    fn get_quote_by_id(&self, id: i32) -> RepositoryResult<Option<Quote>> {
        use crate::schema::quotes;

        let mut conn = self.conn()?;
        let quote = quotes::table
            .find(id)
            .first::<DbQuote>(&mut conn)
            .optional()?;

        match quote {
            Some(quote) => {
                let items = load_items(&mut conn, quote.id)?;
                Ok(Some(
                    quote.into_domain(items).map_err(RepositoryError::from)?,
                ))
            }
            None => Ok(None),
        }
    }

    fn list_quotes(&self, query: QuoteListQuery) -> RepositoryResult<(usize, Vec<Quote>)> {
        use crate::schema::quotes;

        let mut conn = self.conn()?;

        let build = |query: &QuoteListQuery| {
            let mut q = quotes::table.into_boxed();
            if let Some(status) = query.status {
                q = q.filter(quotes::status.eq(status.to_string()));
            }
            if let Some(account_id) = query.account_id {
                q = q.filter(quotes::account_id.eq(account_id));
            }
            if let Some(partner_id) = query.partner_id {
                q = q.filter(quotes::partner_id.eq(partner_id));
            }
            if let Some(search) = &query.search {
                let pattern = format!("%{search}%");
                q = q.filter(
                    quotes::quote_number
                        .like(pattern.clone())
                        .or(quotes::notes.like(pattern)),
                );
            }
            q
        };

        let total: i64 = build(&query).count().get_result(&mut conn)?;

        let mut headers_query = build(&query).order(quotes::id.asc());
        if let Some((limit, offset)) = page_bounds(query.pagination) {
            headers_query = headers_query.limit(limit).offset(offset);
        }

        let headers = headers_query.load::<DbQuote>(&mut conn)?;

        let grouped_items = DbQuoteItem::belonging_to(&headers)
            .order(crate::schema::quote_items::sort_order.asc())
            .load::<DbQuoteItem>(&mut conn)?
            .grouped_by(&headers);

        let quotes = headers
            .into_iter()
            .zip(grouped_items)
            .map(|(header, items)| header.into_domain(items).map_err(RepositoryError::from))
            .collect::<RepositoryResult<Vec<_>>>()?;

        Ok((total as usize, quotes))
    }
}

impl QuoteWriter for DieselRepository {
    fn create_quote(&self, new_quote: &NewQuote) -> RepositoryResult<Quote> {
        use crate::schema::{quote_items, quotes};

        let mut conn = self.conn()?;

        let created = conn.transaction::<DbQuote, diesel::result::Error, _>(|conn| {
            // Insert with the caller's number or a placeholder; the final
            // number needs the row id, which SQLite assigns on insert.
            let number = new_quote.quote_number.clone().unwrap_or_default();
            let insertable = DbNewQuote::from_domain(new_quote, &number);

            let mut created = diesel::insert_into(quotes::table)
                .values(&insertable)
                .get_result::<DbQuote>(conn)?;

            if new_quote.quote_number.is_none() {
                created = diesel::update(quotes::table.find(created.id))
                    .set(quotes::quote_number.eq(format!("Q-{:06}", created.id)))
                    .get_result::<DbQuote>(conn)?;
            }

            let items: Vec<DbNewQuoteItem> = new_quote
                .items
                .iter()
                .map(|item| DbNewQuoteItem::from_domain(item, created.id))
                .collect();
            diesel::insert_into(quote_items::table)
                .values(&items)
                .execute(conn)?;

            Ok(created)
        })?;

        let items = load_items(&mut conn, created.id)?;
        created.into_domain(items).map_err(RepositoryError::from)
    }

    fn update_quote(&self, quote_id: i32, updates: &UpdateQuote) -> RepositoryResult<Quote> {
        use crate::schema::{quote_items, quotes};

        let mut conn = self.conn()?;
        let db_updates = DbUpdateQuote::from_domain(updates, timestamp_now());

        let updated = conn.transaction::<DbQuote, diesel::result::Error, _>(|conn| {
            let updated = diesel::update(quotes::table.find(quote_id))
                .set(&db_updates)
                .get_result::<DbQuote>(conn)?;

            diesel::delete(quote_items::table.filter(quote_items::quote_id.eq(quote_id)))
                .execute(conn)?;

            let items: Vec<DbNewQuoteItem> = updates
                .items
                .iter()
                .map(|item| DbNewQuoteItem::from_domain(item, quote_id))
                .collect();
            diesel::insert_into(quote_items::table)
                .values(&items)
                .execute(conn)?;

            Ok(updated)
        })?;

        let items = load_items(&mut conn, updated.id)?;
        updated.into_domain(items).map_err(RepositoryError::from)
    }

    fn delete_quote(&self, quote_id: i32) -> RepositoryResult<()> {
        use crate::schema::{quote_items, quotes};

        let mut conn = self.conn()?;

        conn.transaction::<(), diesel::result::Error, _>(|conn| {
            diesel::delete(quote_items::table.filter(quote_items::quote_id.eq(quote_id)))
                .execute(conn)?;
            let deleted = diesel::delete(quotes::table.find(quote_id)).execute(conn)?;
            if deleted == 0 {
                return Err(diesel::result::Error::NotFound);
            }
            Ok(())
        })?;

        Ok(())
    }
}
