//! Repository implementation for CRM accounts.

use diesel::prelude::*;

use crate::domain::account::{Account, NewAccount, UpdateAccount};
use crate::models::account::{
    Account as DbAccount, NewAccount as DbNewAccount, UpdateAccount as DbUpdateAccount,
};
use crate::repository::errors::RepositoryResult;
use crate::repository::{
    AccountListQuery, AccountReader, AccountWriter, DieselRepository, page_bounds, timestamp_now,
};

impl AccountReader for DieselRepository {
    fn get_account_by_id(&self, id: i32) -> RepositoryResult<Option<Account>> {
        use crate::schema::accounts;

        let mut conn = self.conn()?;
        let account = accounts::table
            .find(id)
            .first::<DbAccount>(&mut conn)
            .optional()?;

        Ok(account.map(Into::into))
    }

    fn list_accounts(&self, query: AccountListQuery) -> RepositoryResult<(usize, Vec<Account>)> {
        use crate::schema::accounts;

        let mut conn = self.conn()?;

        let build = |search: &Option<String>| {
            let mut q = accounts::table.into_boxed();
            if let Some(search) = search {
                let pattern = format!("%{search}%");
                q = q.filter(
                    accounts::name
                        .like(pattern.clone())
                        .or(accounts::industry.like(pattern.clone()))
                        .or(accounts::email.like(pattern.clone()))
                        .or(accounts::address.like(pattern)),
                );
            }
            q
        };

        let total: i64 = build(&query.search).count().get_result(&mut conn)?;

        let mut items_query = build(&query.search).order(accounts::id.asc());
        if let Some((limit, offset)) = page_bounds(query.pagination) {
            items_query = items_query.limit(limit).offset(offset);
        }

        let items = items_query
            .load::<DbAccount>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect();

        Ok((total as usize, items))
    }
}

impl AccountWriter for DieselRepository {
    fn create_account(&self, new_account: &NewAccount) -> RepositoryResult<Account> {
        use crate::schema::accounts;

        let mut conn = self.conn()?;
        let insertable: DbNewAccount = new_account.into();
        let created = diesel::insert_into(accounts::table)
            .values(&insertable)
            .get_result::<DbAccount>(&mut conn)?;

        Ok(created.into())
    }

    fn create_accounts(&self, new_accounts: &[NewAccount]) -> RepositoryResult<usize> {
        use crate::schema::accounts;

        let mut conn = self.conn()?;
        let insertables: Vec<DbNewAccount> = new_accounts.iter().map(Into::into).collect();
        let affected = diesel::insert_into(accounts::table)
            .values(&insertables)
            .execute(&mut conn)?;

        Ok(affected)
    }

    fn update_account(
        &self,
        account_id: i32,
        updates: &UpdateAccount,
    ) -> RepositoryResult<Account> {
        use crate::schema::accounts;

        let mut conn = self.conn()?;
        let db_updates = DbUpdateAccount::from_domain(updates, timestamp_now());

        let updated = diesel::update(accounts::table.find(account_id))
            .set(&db_updates)
            .get_result::<DbAccount>(&mut conn)?;

        Ok(updated.into())
    }

    fn delete_account(&self, account_id: i32) -> RepositoryResult<()> {
        use crate::schema::{accounts, contacts};

        let mut conn = self.conn()?;

        // Contacts survive their account; they are detached, not removed.
        conn.transaction::<(), diesel::result::Error, _>(|conn| {
            diesel::update(contacts::table.filter(contacts::account_id.eq(account_id)))
                .set(contacts::account_id.eq(None::<i32>))
                .execute(conn)?;

            let deleted = diesel::delete(accounts::table.find(account_id)).execute(conn)?;
            if deleted == 0 {
                return Err(diesel::result::Error::NotFound);
            }
            Ok(())
        })?;

        Ok(())
    }
}
