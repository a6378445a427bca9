use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::account::{
    Account as DomainAccount, NewAccount as DomainNewAccount, UpdateAccount as DomainUpdateAccount,
};

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::accounts)]
/// Diesel model for [`crate::domain::account::Account`].
pub struct Account {
    pub id: i32,
    pub name: String,
    pub industry: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub address: Option<String>,
    pub notes: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::accounts)]
/// Insertable form of [`Account`].
pub struct NewAccount<'a> {
    pub name: &'a str,
    pub industry: Option<&'a str>,
    pub email: Option<&'a str>,
    pub phone: Option<&'a str>,
    pub website: Option<&'a str>,
    pub address: Option<&'a str>,
    pub notes: Option<&'a str>,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::accounts)]
#[diesel(treat_none_as_null = true)]
/// Data used when updating an [`Account`] record.
pub struct UpdateAccount<'a> {
    pub name: &'a str,
    pub industry: Option<&'a str>,
    pub email: Option<&'a str>,
    pub phone: Option<&'a str>,
    pub website: Option<&'a str>,
    pub address: Option<&'a str>,
    pub notes: Option<&'a str>,
    pub updated_at: NaiveDateTime,
}

impl From<Account> for DomainAccount {
    fn from(account: Account) -> Self {
        Self {
            id: account.id,
            name: account.name,
            industry: account.industry,
            email: account.email,
            phone: account.phone,
            website: account.website,
            address: account.address,
            notes: account.notes,
            created_at: account.created_at,
            updated_at: account.updated_at,
        }
    }
}

impl<'a> From<&'a DomainNewAccount> for NewAccount<'a> {
    fn from(account: &'a DomainNewAccount) -> Self {
        Self {
            name: account.name.as_str(),
            industry: account.industry.as_deref(),
            email: account.email.as_deref(),
            phone: account.phone.as_deref(),
            website: account.website.as_deref(),
            address: account.address.as_deref(),
            notes: account.notes.as_deref(),
        }
    }
}

impl<'a> UpdateAccount<'a> {
    pub fn from_domain(updates: &'a DomainUpdateAccount, updated_at: NaiveDateTime) -> Self {
        Self {
            name: updates.name.as_str(),
            industry: updates.industry.as_deref(),
            email: updates.email.as_deref(),
            phone: updates.phone.as_deref(),
            website: updates.website.as_deref(),
            address: updates.address.as_deref(),
            notes: updates.notes.as_deref(),
            updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn from_domain_new_creates_insertable() {
        let domain = DomainNewAccount::new(
            " Acme Corp ".to_string(),
            Some("Manufacturing".to_string()),
            Some("Sales@Acme.com".to_string()),
            None,
            Some("".to_string()),
            None,
            None,
        );
        let new: NewAccount = (&domain).into();
        assert_eq!(new.name, "Acme Corp");
        assert_eq!(new.email, Some("sales@acme.com"));
        assert_eq!(new.website, None);
    }

    #[test]
    fn account_into_domain() {
        let now = Utc::now().naive_utc();
        let db_account = Account {
            id: 1,
            name: "Acme".to_string(),
            industry: None,
            email: Some("a@acme.com".to_string()),
            phone: None,
            website: None,
            address: None,
            notes: None,
            created_at: now,
            updated_at: now,
        };
        let domain: DomainAccount = db_account.into();
        assert_eq!(domain.id, 1);
        assert_eq!(domain.email, Some("a@acme.com".to_string()));
        assert_eq!(domain.created_at, now);
    }
}
