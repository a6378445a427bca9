use chrono::{NaiveDate, NaiveDateTime};

use crate::db::{DbConnection, DbPool};
use crate::domain::account::{Account, NewAccount, UpdateAccount};
use crate::domain::calendar_event::{CalendarEvent, EventType, NewCalendarEvent,
    UpdateCalendarEvent};
use crate::domain::contact::{Contact, NewContact, UpdateContact};
use crate::domain::partner::{NewPartner, Partner, PartnerStatus, PartnerTier, UpdatePartner};
use crate::domain::product::{NewProduct, Product, UpdateProduct};
use crate::domain::quote::{NewQuote, Quote, QuoteStatus, UpdateQuote};
use crate::domain::sales_entry::{NewSalesEntry, PaymentStatus, SalesEntry, UpdateSalesEntry};
use crate::repository::errors::{RepositoryError, RepositoryResult};

pub mod account;
pub mod calendar_event;
pub mod contact;
pub mod errors;
#[cfg(feature = "test-mocks")]
pub mod mock;
pub mod partner;
pub mod product;
pub mod quote;
pub mod sales_entry;

/// Diesel-backed repository shared by all entity traits.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub(crate) fn conn(&self) -> Result<DbConnection, RepositoryError> {
        Ok(self.pool.get()?)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Pagination {
    pub page: usize,
    pub per_page: usize,
}

macro_rules! list_query_common {
    () => {
        pub fn search(mut self, search: impl Into<String>) -> Self {
            self.search = Some(search.into());
            self
        }

        pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
            self.pagination = Some(Pagination { page, per_page });
            self
        }
    };
}

#[derive(Debug, Clone, Default)]
pub struct AccountListQuery {
    pub search: Option<String>,
    pub pagination: Option<Pagination>,
}

impl AccountListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    list_query_common!();
}

#[derive(Debug, Clone, Default)]
pub struct ContactListQuery {
    pub account_id: Option<i32>,
    pub search: Option<String>,
    pub pagination: Option<Pagination>,
}

impl ContactListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn account_id(mut self, account_id: i32) -> Self {
        self.account_id = Some(account_id);
        self
    }

    list_query_common!();
}

#[derive(Debug, Clone, Default)]
pub struct PartnerListQuery {
    pub status: Option<PartnerStatus>,
    pub tier: Option<PartnerTier>,
    pub search: Option<String>,
    pub pagination: Option<Pagination>,
}

impl PartnerListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(mut self, status: PartnerStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn tier(mut self, tier: PartnerTier) -> Self {
        self.tier = Some(tier);
        self
    }

    list_query_common!();
}

#[derive(Debug, Clone, Default)]
pub struct ProductListQuery {
    pub active: Option<bool>,
    pub search: Option<String>,
    pub pagination: Option<Pagination>,
}

impl ProductListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(mut self, active: bool) -> Self {
        self.active = Some(active);
        self
    }

    list_query_common!();
}

#[derive(Debug, Clone, Default)]
pub struct QuoteListQuery {
    pub status: Option<QuoteStatus>,
    pub account_id: Option<i32>,
    pub partner_id: Option<i32>,
    pub search: Option<String>,
    pub pagination: Option<Pagination>,
}

impl QuoteListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(mut self, status: QuoteStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn account_id(mut self, account_id: i32) -> Self {
        self.account_id = Some(account_id);
        self
    }

    pub fn partner_id(mut self, partner_id: i32) -> Self {
        self.partner_id = Some(partner_id);
        self
    }

    list_query_common!();
}

#[derive(Debug, Clone, Default)]
pub struct CalendarEventListQuery {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub event_type: Option<EventType>,
    pub search: Option<String>,
    pub pagination: Option<Pagination>,
}

impl CalendarEventListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from(mut self, from: NaiveDate) -> Self {
        self.from = Some(from);
        self
    }

    pub fn to(mut self, to: NaiveDate) -> Self {
        self.to = Some(to);
        self
    }

    pub fn event_type(mut self, event_type: EventType) -> Self {
        self.event_type = Some(event_type);
        self
    }

    list_query_common!();
}

#[derive(Debug, Clone, Default)]
pub struct SalesEntryListQuery {
    pub partner_id: Option<i32>,
    pub payment_status: Option<PaymentStatus>,
    pub pagination: Option<Pagination>,
}

impl SalesEntryListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn partner_id(mut self, partner_id: i32) -> Self {
        self.partner_id = Some(partner_id);
        self
    }

    pub fn payment_status(mut self, payment_status: PaymentStatus) -> Self {
        self.payment_status = Some(payment_status);
        self
    }

    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}

pub trait AccountReader {
    fn get_account_by_id(&self, id: i32) -> RepositoryResult<Option<Account>>;
    fn list_accounts(&self, query: AccountListQuery) -> RepositoryResult<(usize, Vec<Account>)>;
}

pub trait AccountWriter {
    fn create_account(&self, new_account: &NewAccount) -> RepositoryResult<Account>;
    fn create_accounts(&self, new_accounts: &[NewAccount]) -> RepositoryResult<usize>;
    fn update_account(&self, account_id: i32, updates: &UpdateAccount)
    -> RepositoryResult<Account>;
    fn delete_account(&self, account_id: i32) -> RepositoryResult<()>;
}

pub trait ContactReader {
    fn get_contact_by_id(&self, id: i32) -> RepositoryResult<Option<Contact>>;
    fn list_contacts(&self, query: ContactListQuery) -> RepositoryResult<(usize, Vec<Contact>)>;
}

pub trait ContactWriter {
    fn create_contact(&self, new_contact: &NewContact) -> RepositoryResult<Contact>;
    fn create_contacts(&self, new_contacts: &[NewContact]) -> RepositoryResult<usize>;
    fn update_contact(&self, contact_id: i32, updates: &UpdateContact)
    -> RepositoryResult<Contact>;
    fn delete_contact(&self, contact_id: i32) -> RepositoryResult<()>;
}

pub trait PartnerReader {
    fn get_partner_by_id(&self, id: i32) -> RepositoryResult<Option<Partner>>;
    fn list_partners(&self, query: PartnerListQuery) -> RepositoryResult<(usize, Vec<Partner>)>;
}

pub trait PartnerWriter {
    fn create_partner(&self, new_partner: &NewPartner) -> RepositoryResult<Partner>;
    fn create_partners(&self, new_partners: &[NewPartner]) -> RepositoryResult<usize>;
    fn update_partner(&self, partner_id: i32, updates: &UpdatePartner)
    -> RepositoryResult<Partner>;
    fn delete_partner(&self, partner_id: i32) -> RepositoryResult<()>;
}

pub trait ProductReader {
    fn get_product_by_id(&self, id: i32) -> RepositoryResult<Option<Product>>;
    fn get_products_by_ids(&self, ids: &[i32]) -> RepositoryResult<Vec<Product>>;
    fn list_products(&self, query: ProductListQuery) -> RepositoryResult<(usize, Vec<Product>)>;
}

pub trait ProductWriter {
    fn create_product(&self, new_product: &NewProduct) -> RepositoryResult<Product>;
    fn update_product(&self, product_id: i32, updates: &UpdateProduct)
    -> RepositoryResult<Product>;
    fn delete_product(&self, product_id: i32) -> RepositoryResult<()>;
}

pub trait QuoteReader {
    fn get_quote_by_id(&self, id: i32) -> RepositoryResult<Option<Quote>>;
    fn list_quotes(&self, query: QuoteListQuery) -> RepositoryResult<(usize, Vec<Quote>)>;
}

pub trait QuoteWriter {
    fn create_quote(&self, new_quote: &NewQuote) -> RepositoryResult<Quote>;
    fn update_quote(&self, quote_id: i32, updates: &UpdateQuote) -> RepositoryResult<Quote>;
    fn delete_quote(&self, quote_id: i32) -> RepositoryResult<()>;
}

pub trait CalendarEventReader {
    fn get_calendar_event_by_id(&self, id: i32) -> RepositoryResult<Option<CalendarEvent>>;
    fn list_calendar_events(
        &self,
        query: CalendarEventListQuery,
    ) -> RepositoryResult<(usize, Vec<CalendarEvent>)>;
}

pub trait CalendarEventWriter {
    fn create_calendar_event(&self, new_event: &NewCalendarEvent)
    -> RepositoryResult<CalendarEvent>;
    fn update_calendar_event(
        &self,
        event_id: i32,
        updates: &UpdateCalendarEvent,
    ) -> RepositoryResult<CalendarEvent>;
    fn delete_calendar_event(&self, event_id: i32) -> RepositoryResult<()>;
}

pub trait SalesEntryReader {
    fn get_sales_entry_by_id(&self, id: i32) -> RepositoryResult<Option<SalesEntry>>;
    fn list_sales_entries(
        &self,
        query: SalesEntryListQuery,
    ) -> RepositoryResult<(usize, Vec<SalesEntry>)>;
}

pub trait SalesEntryWriter {
    fn create_sales_entry(&self, new_entry: &NewSalesEntry) -> RepositoryResult<SalesEntry>;
    fn update_sales_entry(
        &self,
        entry_id: i32,
        updates: &UpdateSalesEntry,
    ) -> RepositoryResult<SalesEntry>;
    fn delete_sales_entry(&self, entry_id: i32) -> RepositoryResult<()>;
}

/// Normalizes a pagination request into `(limit, offset)` for a query.
pub(crate) fn page_bounds(pagination: Option<Pagination>) -> Option<(i64, i64)> {
    pagination.map(|p| {
        let page = if p.page == 0 { 1 } else { p.page } as i64;
        let per_page = p.per_page.max(1) as i64;
        (per_page, (page - 1) * per_page)
    })
}

pub(crate) fn timestamp_now() -> NaiveDateTime {
    chrono::Utc::now().naive_utc()
}
