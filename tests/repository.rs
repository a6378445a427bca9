use chrono::NaiveDate;

use partner_crm::domain::account::{NewAccount, UpdateAccount};
use partner_crm::domain::calendar_event::{EventType, NewCalendarEvent};
use partner_crm::domain::contact::NewContact;
use partner_crm::domain::partner::{NewPartner, PartnerStatus, PartnerTier, UpdatePartner};
use partner_crm::domain::product::NewProduct;
use partner_crm::domain::quote::{NewQuote, NewQuoteItem, QuoteStatus, UpdateQuote};
use partner_crm::domain::sales_entry::{NewSalesEntry, PaymentStatus};
use partner_crm::repository::{
    AccountListQuery, AccountReader, AccountWriter, CalendarEventListQuery, CalendarEventReader,
    CalendarEventWriter, ContactListQuery, ContactReader, ContactWriter, DieselRepository,
    PartnerListQuery, PartnerReader, PartnerWriter, ProductListQuery, ProductReader,
    ProductWriter, QuoteListQuery, QuoteReader, QuoteWriter, SalesEntryListQuery,
    SalesEntryReader, SalesEntryWriter,
};

mod common;

fn new_account(name: &str) -> NewAccount {
    NewAccount::new(
        name.to_string(),
        Some("Software".to_string()),
        Some(format!("{}@example.com", name.to_lowercase())),
        None,
        None,
        None,
        None,
    )
}

fn new_partner(name: &str, status: PartnerStatus, tier: PartnerTier) -> NewPartner {
    NewPartner::new(
        name.to_string(),
        format!("{}@partners.example.com", name.to_lowercase()),
        None,
        Some("EMEA".to_string()),
        status,
        tier,
        Some(10.0),
    )
}

fn line(description: &str, quantity: i32, unit_price: f64, sort_order: i32) -> NewQuoteItem {
    NewQuoteItem {
        product_id: None,
        description: description.to_string(),
        quantity,
        unit_price,
        sort_order,
    }
}

#[test]
fn test_account_repository_crud() {
    let test_db = common::TestDb::new("test_account_repository_crud.db");
    let repo = DieselRepository::new(test_db.pool().clone());

    assert_eq!(
        repo.create_accounts(&[new_account("Acme"), new_account("Globex")])
            .unwrap(),
        2
    );

    let (total, mut accounts) = repo.list_accounts(AccountListQuery::new()).unwrap();
    assert_eq!(total, 2);
    accounts.sort_by(|a, b| a.name.cmp(&b.name));
    let acme = accounts[0].clone();
    let globex = accounts[1].clone();

    let (search_total, search_items) = repo
        .list_accounts(AccountListQuery::new().search("Glob"))
        .unwrap();
    assert_eq!(search_total, 1);
    assert_eq!(search_items[0].name, "Globex");

    let updates = UpdateAccount::new(
        "Globex Corporation".to_string(),
        globex.industry.clone(),
        globex.email.clone(),
        None,
        None,
        None,
        None,
    );
    let updated = repo.update_account(globex.id, &updates).unwrap();
    assert_eq!(updated.name, "Globex Corporation");

    repo.delete_account(acme.id).unwrap();
    assert!(repo.get_account_by_id(acme.id).unwrap().is_none());

    let (total_after, _) = repo.list_accounts(AccountListQuery::new()).unwrap();
    assert_eq!(total_after, 1);
}

#[test]
fn test_account_list_pagination() {
    let test_db = common::TestDb::new("test_account_list_pagination.db");
    let repo = DieselRepository::new(test_db.pool().clone());

    let accounts: Vec<NewAccount> = (1..=5)
        .map(|i| new_account(&format!("Account{i}")))
        .collect();
    assert_eq!(repo.create_accounts(&accounts).unwrap(), 5);

    let (total, page) = repo
        .list_accounts(AccountListQuery::new().paginate(2, 2))
        .unwrap();
    assert_eq!(total, 5);
    assert_eq!(page.len(), 2);
    assert_eq!(page[0].name, "Account3");
}

#[test]
fn test_deleting_account_detaches_contacts() {
    let test_db = common::TestDb::new("test_deleting_account_detaches_contacts.db");
    let repo = DieselRepository::new(test_db.pool().clone());

    let account = repo.create_account(&new_account("Acme")).unwrap();
    let contact = repo
        .create_contact(&NewContact::new(
            Some(account.id),
            "Ada".to_string(),
            "Lovelace".to_string(),
            None,
            None,
            None,
        ))
        .unwrap();
    assert_eq!(contact.account_id, Some(account.id));

    repo.delete_account(account.id).unwrap();

    let detached = repo.get_contact_by_id(contact.id).unwrap().unwrap();
    assert_eq!(detached.account_id, None);
}

#[test]
fn test_contact_repository_filters_by_account() {
    let test_db = common::TestDb::new("test_contact_repository_filters_by_account.db");
    let repo = DieselRepository::new(test_db.pool().clone());

    let acme = repo.create_account(&new_account("Acme")).unwrap();
    let globex = repo.create_account(&new_account("Globex")).unwrap();

    let contacts = vec![
        NewContact::new(
            Some(acme.id),
            "Ada".to_string(),
            "Lovelace".to_string(),
            None,
            None,
            None,
        ),
        NewContact::new(
            Some(globex.id),
            "Alan".to_string(),
            "Turing".to_string(),
            None,
            None,
            None,
        ),
    ];
    assert_eq!(repo.create_contacts(&contacts).unwrap(), 2);

    let (total, items) = repo
        .list_contacts(ContactListQuery::new().account_id(acme.id))
        .unwrap();
    assert_eq!(total, 1);
    assert_eq!(items[0].first_name, "Ada");
}

#[test]
fn test_partner_repository_filters_by_status_and_tier() {
    let test_db = common::TestDb::new("test_partner_repository_filters.db");
    let repo = DieselRepository::new(test_db.pool().clone());

    repo.create_partner(&new_partner(
        "Northwind",
        PartnerStatus::Approved,
        PartnerTier::Elite,
    ))
    .unwrap();
    repo.create_partner(&new_partner(
        "Initech",
        PartnerStatus::Pending,
        PartnerTier::New,
    ))
    .unwrap();

    let (total, approved) = repo
        .list_partners(PartnerListQuery::new().status(PartnerStatus::Approved))
        .unwrap();
    assert_eq!(total, 1);
    assert_eq!(approved[0].name, "Northwind");

    let (tier_total, _) = repo
        .list_partners(PartnerListQuery::new().tier(PartnerTier::New))
        .unwrap();
    assert_eq!(tier_total, 1);

    let northwind = approved[0].clone();
    let updated = repo
        .update_partner(
            northwind.id,
            &UpdatePartner::new(
                northwind.name.clone(),
                northwind.contact_email.clone(),
                None,
                northwind.region.clone(),
                PartnerStatus::Rejected,
                PartnerTier::Growth,
                northwind.discount_rate,
            ),
        )
        .unwrap();
    assert_eq!(updated.status, PartnerStatus::Rejected);
    assert_eq!(updated.tier, PartnerTier::Growth);
}

#[test]
fn test_product_sku_is_unique() {
    let test_db = common::TestDb::new("test_product_sku_is_unique.db");
    let repo = DieselRepository::new(test_db.pool().clone());

    repo.create_product(&NewProduct::new(
        "Router X2".to_string(),
        "rtr-x2".to_string(),
        199.0,
        true,
    ))
    .unwrap();

    // SKUs are uppercased on the way in, so this collides.
    let duplicate = repo.create_product(&NewProduct::new(
        "Router X2 rev B".to_string(),
        "RTR-X2".to_string(),
        209.0,
        true,
    ));
    assert!(duplicate.is_err());
}

#[test]
fn test_product_list_filters_active() {
    let test_db = common::TestDb::new("test_product_list_filters_active.db");
    let repo = DieselRepository::new(test_db.pool().clone());

    repo.create_product(&NewProduct::new(
        "Router".to_string(),
        "RTR-1".to_string(),
        199.0,
        true,
    ))
    .unwrap();
    repo.create_product(&NewProduct::new(
        "Legacy Switch".to_string(),
        "SW-0".to_string(),
        59.0,
        false,
    ))
    .unwrap();

    let (total, active) = repo
        .list_products(ProductListQuery::new().active(true))
        .unwrap();
    assert_eq!(total, 1);
    assert_eq!(active[0].sku, "RTR-1");
}

#[test]
fn test_quote_number_is_generated_when_missing() {
    let test_db = common::TestDb::new("test_quote_number_is_generated.db");
    let repo = DieselRepository::new(test_db.pool().clone());

    let account = repo.create_account(&new_account("Acme")).unwrap();

    let created = repo
        .create_quote(&NewQuote::new(
            None,
            account.id,
            None,
            QuoteStatus::Draft,
            0.0,
            18.0,
            None,
            None,
            None,
            vec![line("Router", 2, 100.0, 0), line("Cable", 1, 50.0, 1)],
        ))
        .unwrap();

    assert_eq!(created.quote_number, format!("Q-{:06}", created.id));
    assert_eq!(created.items.len(), 2);

    let totals = created.totals();
    assert_eq!(totals.subtotal, 250.0);
    assert_eq!(totals.tax, 45.0);
    assert_eq!(totals.total, 295.0);

    let explicit = repo
        .create_quote(&NewQuote::new(
            Some("Q-CUSTOM".to_string()),
            account.id,
            None,
            QuoteStatus::Draft,
            0.0,
            0.0,
            None,
            None,
            None,
            vec![line("Router", 1, 100.0, 0)],
        ))
        .unwrap();
    assert_eq!(explicit.quote_number, "Q-CUSTOM");
}

#[test]
fn test_quote_update_replaces_items() {
    let test_db = common::TestDb::new("test_quote_update_replaces_items.db");
    let repo = DieselRepository::new(test_db.pool().clone());

    let account = repo.create_account(&new_account("Acme")).unwrap();
    let created = repo
        .create_quote(&NewQuote::new(
            None,
            account.id,
            None,
            QuoteStatus::Draft,
            0.0,
            0.0,
            None,
            None,
            None,
            vec![
                line("First", 1, 10.0, 0),
                line("Second", 1, 20.0, 1),
                line("Third", 1, 30.0, 2),
            ],
        ))
        .unwrap();

    // Middle line removed; the survivors carry re-indexed sort orders.
    let updated = repo
        .update_quote(
            created.id,
            &UpdateQuote {
                account_id: account.id,
                partner_id: None,
                status: QuoteStatus::Sent,
                discount: 5.0,
                tax_rate: 0.0,
                valid_until: None,
                notes: None,
                terms: None,
                items: vec![line("First", 1, 10.0, 0), line("Third", 1, 30.0, 1)],
            },
        )
        .unwrap();

    assert_eq!(updated.status, QuoteStatus::Sent);
    assert_eq!(updated.items.len(), 2);
    assert_eq!(updated.items[0].description, "First");
    assert_eq!(updated.items[0].sort_order, 0);
    assert_eq!(updated.items[1].description, "Third");
    assert_eq!(updated.items[1].sort_order, 1);
}

#[test]
fn test_quote_delete_removes_items() {
    let test_db = common::TestDb::new("test_quote_delete_removes_items.db");
    let repo = DieselRepository::new(test_db.pool().clone());

    let account = repo.create_account(&new_account("Acme")).unwrap();
    let created = repo
        .create_quote(&NewQuote::new(
            None,
            account.id,
            None,
            QuoteStatus::Draft,
            0.0,
            0.0,
            None,
            None,
            None,
            vec![line("Router", 1, 100.0, 0)],
        ))
        .unwrap();

    repo.delete_quote(created.id).unwrap();
    assert!(repo.get_quote_by_id(created.id).unwrap().is_none());

    let (total, _) = repo.list_quotes(QuoteListQuery::new()).unwrap();
    assert_eq!(total, 0);
}

#[test]
fn test_quote_list_filters() {
    let test_db = common::TestDb::new("test_quote_list_filters.db");
    let repo = DieselRepository::new(test_db.pool().clone());

    let account = repo.create_account(&new_account("Acme")).unwrap();
    let partner = repo
        .create_partner(&new_partner(
            "Northwind",
            PartnerStatus::Approved,
            PartnerTier::Elite,
        ))
        .unwrap();

    repo.create_quote(&NewQuote::new(
        None,
        account.id,
        Some(partner.id),
        QuoteStatus::Sent,
        0.0,
        0.0,
        None,
        None,
        None,
        vec![line("Router", 1, 100.0, 0)],
    ))
    .unwrap();
    repo.create_quote(&NewQuote::new(
        None,
        account.id,
        None,
        QuoteStatus::Draft,
        0.0,
        0.0,
        None,
        None,
        None,
        vec![line("Cable", 1, 10.0, 0)],
    ))
    .unwrap();

    let (sent_total, sent) = repo
        .list_quotes(QuoteListQuery::new().status(QuoteStatus::Sent))
        .unwrap();
    assert_eq!(sent_total, 1);
    assert_eq!(sent[0].partner_id, Some(partner.id));

    let (partner_total, _) = repo
        .list_quotes(QuoteListQuery::new().partner_id(partner.id))
        .unwrap();
    assert_eq!(partner_total, 1);
}

#[test]
fn test_calendar_event_repository_date_range() {
    let test_db = common::TestDb::new("test_calendar_event_repository_date_range.db");
    let repo = DieselRepository::new(test_db.pool().clone());

    let june_demo = NewCalendarEvent::new(
        "Product demo".to_string(),
        None,
        None,
        EventType::Demo,
        NaiveDate::from_ymd_opt(2026, 6, 10)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap(),
        None,
        None,
        None,
    );
    let july_call = NewCalendarEvent::new(
        "Renewal call".to_string(),
        None,
        None,
        EventType::Call,
        NaiveDate::from_ymd_opt(2026, 7, 1)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap(),
        None,
        None,
        None,
    );
    repo.create_calendar_event(&june_demo).unwrap();
    repo.create_calendar_event(&july_call).unwrap();

    let (total, june) = repo
        .list_calendar_events(
            CalendarEventListQuery::new()
                .from(NaiveDate::from_ymd_opt(2026, 6, 1).unwrap())
                .to(NaiveDate::from_ymd_opt(2026, 6, 30).unwrap()),
        )
        .unwrap();
    assert_eq!(total, 1);
    assert_eq!(june[0].title, "Product demo");

    let (demo_total, _) = repo
        .list_calendar_events(CalendarEventListQuery::new().event_type(EventType::Demo))
        .unwrap();
    assert_eq!(demo_total, 1);
}

#[test]
fn test_sales_entry_repository_derives_amount() {
    let test_db = common::TestDb::new("test_sales_entry_repository_derives_amount.db");
    let repo = DieselRepository::new(test_db.pool().clone());

    let partner = repo
        .create_partner(&new_partner(
            "Northwind",
            PartnerStatus::Approved,
            PartnerTier::Elite,
        ))
        .unwrap();
    let product = repo
        .create_product(&NewProduct::new(
            "Router".to_string(),
            "RTR-1".to_string(),
            199.0,
            true,
        ))
        .unwrap();

    let created = repo
        .create_sales_entry(&NewSalesEntry {
            partner_id: partner.id,
            product_id: product.id,
            quantity: 3,
            unit_price: 199.0,
            sale_date: NaiveDate::from_ymd_opt(2026, 5, 20).unwrap(),
            payment_status: PaymentStatus::Pending,
        })
        .unwrap();
    assert_eq!(created.amount, 597.0);

    let (total, pending) = repo
        .list_sales_entries(SalesEntryListQuery::new().payment_status(PaymentStatus::Pending))
        .unwrap();
    assert_eq!(total, 1);
    assert_eq!(pending[0].partner_id, partner.id);
}

#[test]
fn test_partner_delete_is_blocked_while_referenced() {
    let test_db = common::TestDb::new("test_partner_delete_is_blocked.db");
    let repo = DieselRepository::new(test_db.pool().clone());

    let account = repo.create_account(&new_account("Acme")).unwrap();
    let partner = repo
        .create_partner(&new_partner(
            "Northwind",
            PartnerStatus::Approved,
            PartnerTier::Elite,
        ))
        .unwrap();
    let quote = repo
        .create_quote(&NewQuote::new(
            None,
            account.id,
            Some(partner.id),
            QuoteStatus::Draft,
            0.0,
            0.0,
            None,
            None,
            None,
            vec![line("Router", 1, 100.0, 0)],
        ))
        .unwrap();

    assert!(repo.delete_partner(partner.id).is_err());

    repo.delete_quote(quote.id).unwrap();
    repo.delete_partner(partner.id).unwrap();
    assert!(repo.get_partner_by_id(partner.id).unwrap().is_none());
}
