pub mod account;
pub mod calendar_event;
pub mod contact;
pub mod errors;
pub mod import;
pub mod partner;
pub mod product;
pub mod quote;
pub mod sales_entry;

pub use errors::{ServiceError, ServiceResult};
