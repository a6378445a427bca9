pub mod account;
pub mod calendar_event;
pub mod contact;
#[cfg(feature = "server")]
pub mod config;
pub mod partner;
pub mod product;
pub mod quote;
pub mod sales_entry;
