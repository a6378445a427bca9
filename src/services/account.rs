use crate::domain::account::{Account, NewAccount, UpdateAccount};
use crate::repository::{AccountListQuery, AccountReader, AccountWriter};
use crate::services::{ServiceError, ServiceResult};

/// Fetches an account by its identifier, failing when it does not exist.
pub fn get_account<R>(repo: &R, account_id: i32) -> ServiceResult<Account>
where
    R: AccountReader + ?Sized,
{
    repo.get_account_by_id(account_id)?
        .ok_or(ServiceError::NotFound)
}

/// Retrieves the paginated account list with the total match count.
pub fn list_accounts<R>(repo: &R, query: AccountListQuery) -> ServiceResult<(usize, Vec<Account>)>
where
    R: AccountReader + ?Sized,
{
    repo.list_accounts(query).map_err(ServiceError::from)
}

pub fn create_account<R>(repo: &R, new_account: &NewAccount) -> ServiceResult<Account>
where
    R: AccountWriter + ?Sized,
{
    if new_account.name.is_empty() {
        return Err(ServiceError::Validation("name cannot be empty".into()));
    }
    repo.create_account(new_account).map_err(ServiceError::from)
}

pub fn update_account<R>(
    repo: &R,
    account_id: i32,
    updates: &UpdateAccount,
) -> ServiceResult<Account>
where
    R: AccountWriter + ?Sized,
{
    if updates.name.is_empty() {
        return Err(ServiceError::Validation("name cannot be empty".into()));
    }
    repo.update_account(account_id, updates)
        .map_err(ServiceError::from)
}

pub fn delete_account<R>(repo: &R, account_id: i32) -> ServiceResult<()>
where
    R: AccountWriter + ?Sized,
{
    repo.delete_account(account_id).map_err(ServiceError::from)
}
