//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::account::{Account, NewAccount, UpdateAccount};
use crate::domain::calendar_event::{CalendarEvent, NewCalendarEvent, UpdateCalendarEvent};
use crate::domain::contact::{Contact, NewContact, UpdateContact};
use crate::domain::partner::{NewPartner, Partner, UpdatePartner};
use crate::domain::product::{NewProduct, Product, UpdateProduct};
use crate::domain::quote::{NewQuote, Quote, UpdateQuote};
use crate::domain::sales_entry::{NewSalesEntry, SalesEntry, UpdateSalesEntry};
use crate::repository::errors::RepositoryResult;
use crate::repository::{
    AccountListQuery, AccountReader, AccountWriter, CalendarEventListQuery, CalendarEventReader,
    CalendarEventWriter, ContactListQuery, ContactReader, ContactWriter, PartnerListQuery,
    PartnerReader, PartnerWriter, ProductListQuery, ProductReader, ProductWriter, QuoteListQuery,
    QuoteReader, QuoteWriter, SalesEntryListQuery, SalesEntryReader, SalesEntryWriter,
};

mock! {
    pub Repository {}

    impl AccountReader for Repository {
        fn get_account_by_id(&self, id: i32) -> RepositoryResult<Option<Account>>;
        fn list_accounts(&self, query: AccountListQuery) -> RepositoryResult<(usize, Vec<Account>)>;
    }

    impl AccountWriter for Repository {
        fn create_account(&self, new_account: &NewAccount) -> RepositoryResult<Account>;
        fn create_accounts(&self, new_accounts: &[NewAccount]) -> RepositoryResult<usize>;
        fn update_account(
            &self,
            account_id: i32,
            updates: &UpdateAccount,
        ) -> RepositoryResult<Account>;
        fn delete_account(&self, account_id: i32) -> RepositoryResult<()>;
    }

    impl ContactReader for Repository {
        fn get_contact_by_id(&self, id: i32) -> RepositoryResult<Option<Contact>>;
        fn list_contacts(&self, query: ContactListQuery) -> RepositoryResult<(usize, Vec<Contact>)>;
    }

    impl ContactWriter for Repository {
        fn create_contact(&self, new_contact: &NewContact) -> RepositoryResult<Contact>;
        fn create_contacts(&self, new_contacts: &[NewContact]) -> RepositoryResult<usize>;
        fn update_contact(
            &self,
            contact_id: i32,
            updates: &UpdateContact,
        ) -> RepositoryResult<Contact>;
        fn delete_contact(&self, contact_id: i32) -> RepositoryResult<()>;
    }

    impl PartnerReader for Repository {
        fn get_partner_by_id(&self, id: i32) -> RepositoryResult<Option<Partner>>;
        fn list_partners(&self, query: PartnerListQuery) -> RepositoryResult<(usize, Vec<Partner>)>;
    }

    impl PartnerWriter for Repository {
        fn create_partner(&self, new_partner: &NewPartner) -> RepositoryResult<Partner>;
        fn create_partners(&self, new_partners: &[NewPartner]) -> RepositoryResult<usize>;
        fn update_partner(
            &self,
            partner_id: i32,
            updates: &UpdatePartner,
        ) -> RepositoryResult<Partner>;
        fn delete_partner(&self, partner_id: i32) -> RepositoryResult<()>;
    }

    impl ProductReader for Repository {
        fn get_product_by_id(&self, id: i32) -> RepositoryResult<Option<Product>>;
        fn get_products_by_ids(&self, ids: &[i32]) -> RepositoryResult<Vec<Product>>;
        fn list_products(&self, query: ProductListQuery) -> RepositoryResult<(usize, Vec<Product>)>;
    }

    impl ProductWriter for Repository {
        fn create_product(&self, new_product: &NewProduct) -> RepositoryResult<Product>;
        fn update_product(
            &self,
            product_id: i32,
            updates: &UpdateProduct,
        ) -> RepositoryResult<Product>;
        fn delete_product(&self, product_id: i32) -> RepositoryResult<()>;
    }

    impl QuoteReader for Repository {
        fn get_quote_by_id(&self, id: i32) -> RepositoryResult<Option<Quote>>;
        fn list_quotes(&self, query: QuoteListQuery) -> RepositoryResult<(usize, Vec<Quote>)>;
    }

    impl QuoteWriter for Repository {
        fn create_quote(&self, new_quote: &NewQuote) -> RepositoryResult<Quote>;
        fn update_quote(&self, quote_id: i32, updates: &UpdateQuote) -> RepositoryResult<Quote>;
        fn delete_quote(&self, quote_id: i32) -> RepositoryResult<()>;
    }

    impl CalendarEventReader for Repository {
        fn get_calendar_event_by_id(&self, id: i32) -> RepositoryResult<Option<CalendarEvent>>;
        fn list_calendar_events(
            &self,
            query: CalendarEventListQuery,
        ) -> RepositoryResult<(usize, Vec<CalendarEvent>)>;
    }

    impl CalendarEventWriter for Repository {
        fn create_calendar_event(
            &self,
            new_event: &NewCalendarEvent,
        ) -> RepositoryResult<CalendarEvent>;
        fn update_calendar_event(
            &self,
            event_id: i32,
            updates: &UpdateCalendarEvent,
        ) -> RepositoryResult<CalendarEvent>;
        fn delete_calendar_event(&self, event_id: i32) -> RepositoryResult<()>;
    }

    impl SalesEntryReader for Repository {
        fn get_sales_entry_by_id(&self, id: i32) -> RepositoryResult<Option<SalesEntry>>;
        fn list_sales_entries(
            &self,
            query: SalesEntryListQuery,
        ) -> RepositoryResult<(usize, Vec<SalesEntry>)>;
    }

    impl SalesEntryWriter for Repository {
        fn create_sales_entry(&self, new_entry: &NewSalesEntry) -> RepositoryResult<SalesEntry>;
        fn update_sales_entry(
            &self,
            entry_id: i32,
            updates: &UpdateSalesEntry,
        ) -> RepositoryResult<SalesEntry>;
        fn delete_sales_entry(&self, entry_id: i32) -> RepositoryResult<()>;
    }
}
