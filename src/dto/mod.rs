pub mod account;
pub mod api;
pub mod calendar_event;
pub mod contact;
pub mod partner;
pub mod product;
pub mod quote;
pub mod sales_entry;
