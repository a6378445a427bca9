//! Bulk CSV import for accounts, contacts, and partners.
//!
//! Parsing is row-tolerant: every data row is validated independently, valid
//! rows are inserted in one batch, and failures come back with their 1-based
//! row number so the caller can fix the file instead of guessing.

use std::collections::HashMap;
use std::io::Read;
use std::str::FromStr;

use serde::Serialize;

use crate::domain::account::NewAccount;
use crate::domain::contact::NewContact;
use crate::domain::partner::{NewPartner, PartnerStatus, PartnerTier};
use crate::domain::types::{normalize_email, normalize_phone_to_e164};
use crate::repository::{AccountWriter, ContactWriter, PartnerWriter};
use crate::services::{ServiceError, ServiceResult};

/// A single rejected row. `row` counts data rows from 1 (the header row is
/// not counted).
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RowError {
    pub row: usize,
    pub field: String,
    pub message: String,
}

/// Summary returned to the caller after an import run.
#[derive(Debug, Clone, Serialize, Default)]
pub struct ImportOutcome {
    pub total: usize,
    pub imported: usize,
    pub errors: Vec<RowError>,
}

const ACCOUNT_HEADERS: &[&str] = &[
    "name", "industry", "email", "phone", "website", "address", "notes",
];
const ACCOUNT_REQUIRED: &[&str] = &["name"];

const CONTACT_HEADERS: &[&str] = &[
    "first_name", "last_name", "email", "phone", "title", "account_id",
];
const CONTACT_REQUIRED: &[&str] = &["first_name", "last_name"];

const PARTNER_HEADERS: &[&str] = &[
    "name",
    "contact_email",
    "phone",
    "region",
    "status",
    "tier",
    "discount_rate",
];
const PARTNER_REQUIRED: &[&str] = &["name", "contact_email"];

/// Header template for a downloadable starter file.
#[must_use]
pub fn accounts_template() -> String {
    csv_template(ACCOUNT_HEADERS)
}

#[must_use]
pub fn contacts_template() -> String {
    csv_template(CONTACT_HEADERS)
}

#[must_use]
pub fn partners_template() -> String {
    csv_template(PARTNER_HEADERS)
}

fn csv_template(headers: &[&str]) -> String {
    let mut line = headers.join(",");
    line.push('\n');
    line
}

/// Maps lower-cased, trimmed header names to their column index, rejecting
/// the file when a required column is missing.
fn header_map(
    headers: &csv::StringRecord,
    required: &[&str],
) -> ServiceResult<HashMap<String, usize>> {
    let map: HashMap<String, usize> = headers
        .iter()
        .enumerate()
        .map(|(idx, name)| (name.trim().to_lowercase(), idx))
        .collect();

    for column in required {
        if !map.contains_key(*column) {
            return Err(ServiceError::Validation(format!(
                "missing required column: {column}"
            )));
        }
    }
    Ok(map)
}

struct Row<'a> {
    record: &'a csv::StringRecord,
    columns: &'a HashMap<String, usize>,
}

impl Row<'_> {
    /// Cell content by header name, `None` when absent or blank.
    fn get(&self, column: &str) -> Option<&str> {
        self.columns
            .get(column)
            .and_then(|idx| self.record.get(*idx))
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    fn require(&self, column: &str, row: usize) -> Result<&str, RowError> {
        self.get(column).ok_or_else(|| RowError {
            row,
            field: column.to_string(),
            message: "value is required".to_string(),
        })
    }

    fn email_opt(&self, column: &str, row: usize) -> Result<Option<String>, RowError> {
        self.get(column)
            .map(|raw| {
                normalize_email(raw).map_err(|err| RowError {
                    row,
                    field: column.to_string(),
                    message: err.to_string(),
                })
            })
            .transpose()
    }

    fn phone_opt(&self, column: &str, row: usize) -> Result<Option<String>, RowError> {
        self.get(column)
            .map(|raw| {
                normalize_phone_to_e164(raw).map_err(|err| RowError {
                    row,
                    field: column.to_string(),
                    message: err.to_string(),
                })
            })
            .transpose()
    }

    fn parse_opt<T: FromStr>(&self, column: &str, row: usize) -> Result<Option<T>, RowError>
    where
        T::Err: std::fmt::Display,
    {
        self.get(column)
            .map(|raw| {
                raw.parse().map_err(|err: T::Err| RowError {
                    row,
                    field: column.to_string(),
                    message: err.to_string(),
                })
            })
            .transpose()
    }
}

/// Splits a CSV stream into parsed rows and per-row errors.
fn parse_rows<T, R, F>(
    reader: R,
    required: &[&str],
    mut parse_row: F,
) -> ServiceResult<(usize, Vec<T>, Vec<RowError>)>
where
    R: Read,
    F: FnMut(&Row<'_>, usize) -> Result<T, RowError>,
{
    let mut rdr = csv::Reader::from_reader(reader);
    let headers = rdr
        .headers()
        .map_err(|err| ServiceError::Validation(format!("unreadable csv header: {err}")))?
        .clone();
    let columns = header_map(&headers, required)?;

    let mut parsed = Vec::new();
    let mut errors = Vec::new();
    let mut total = 0;

    for (idx, record) in rdr.records().enumerate() {
        let row_number = idx + 1;
        total += 1;
        match record {
            Ok(record) => {
                let row = Row {
                    record: &record,
                    columns: &columns,
                };
                match parse_row(&row, row_number) {
                    Ok(value) => parsed.push(value),
                    Err(err) => errors.push(err),
                }
            }
            Err(err) => errors.push(RowError {
                row: row_number,
                field: String::new(),
                message: format!("malformed row: {err}"),
            }),
        }
    }

    Ok((total, parsed, errors))
}

pub fn parse_accounts_csv<R: Read>(
    reader: R,
) -> ServiceResult<(usize, Vec<NewAccount>, Vec<RowError>)> {
    parse_rows(reader, ACCOUNT_REQUIRED, |row, row_number| {
        let name = row.require("name", row_number)?;
        let email = row.email_opt("email", row_number)?;
        let phone = row.phone_opt("phone", row_number)?;
        Ok(NewAccount::new(
            name.to_string(),
            row.get("industry").map(str::to_string),
            email,
            phone,
            row.get("website").map(str::to_string),
            row.get("address").map(str::to_string),
            row.get("notes").map(str::to_string),
        ))
    })
}

pub fn parse_contacts_csv<R: Read>(
    reader: R,
) -> ServiceResult<(usize, Vec<NewContact>, Vec<RowError>)> {
    parse_rows(reader, CONTACT_REQUIRED, |row, row_number| {
        let first_name = row.require("first_name", row_number)?;
        let last_name = row.require("last_name", row_number)?;
        let email = row.email_opt("email", row_number)?;
        let phone = row.phone_opt("phone", row_number)?;
        let account_id = row.parse_opt::<i32>("account_id", row_number)?;
        Ok(NewContact::new(
            account_id,
            first_name.to_string(),
            last_name.to_string(),
            email,
            phone,
            row.get("title").map(str::to_string),
        ))
    })
}

pub fn parse_partners_csv<R: Read>(
    reader: R,
) -> ServiceResult<(usize, Vec<NewPartner>, Vec<RowError>)> {
    parse_rows(reader, PARTNER_REQUIRED, |row, row_number| {
        let name = row.require("name", row_number)?;
        let contact_email = row.require("contact_email", row_number).and_then(|raw| {
            normalize_email(raw).map_err(|err| RowError {
                row: row_number,
                field: "contact_email".to_string(),
                message: err.to_string(),
            })
        })?;
        let phone = row.phone_opt("phone", row_number)?;
        let status = row
            .parse_opt::<PartnerStatus>("status", row_number)?
            .unwrap_or_default();
        let tier = row
            .parse_opt::<PartnerTier>("tier", row_number)?
            .unwrap_or_default();
        let discount_rate = row.parse_opt::<f64>("discount_rate", row_number)?;
        if let Some(rate) = discount_rate
            && !(0.0..=100.0).contains(&rate)
        {
            return Err(RowError {
                row: row_number,
                field: "discount_rate".to_string(),
                message: "discount rate must be between 0 and 100".to_string(),
            });
        }
        Ok(NewPartner::new(
            name.to_string(),
            contact_email,
            phone,
            row.get("region").map(str::to_string),
            status,
            tier,
            discount_rate,
        ))
    })
}

/// Parses and persists an accounts CSV, inserting the valid rows in one
/// batch and reporting the rest.
pub fn import_accounts<W, R>(repo: &W, reader: R) -> ServiceResult<ImportOutcome>
where
    W: AccountWriter + ?Sized,
    R: Read,
{
    let (total, accounts, errors) = parse_accounts_csv(reader)?;
    let imported = if accounts.is_empty() {
        0
    } else {
        repo.create_accounts(&accounts)?
    };
    Ok(ImportOutcome {
        total,
        imported,
        errors,
    })
}

pub fn import_contacts<W, R>(repo: &W, reader: R) -> ServiceResult<ImportOutcome>
where
    W: ContactWriter + ?Sized,
    R: Read,
{
    let (total, contacts, errors) = parse_contacts_csv(reader)?;
    let imported = if contacts.is_empty() {
        0
    } else {
        repo.create_contacts(&contacts)?
    };
    Ok(ImportOutcome {
        total,
        imported,
        errors,
    })
}

pub fn import_partners<W, R>(repo: &W, reader: R) -> ServiceResult<ImportOutcome>
where
    W: PartnerWriter + ?Sized,
    R: Read,
{
    let (total, partners, errors) = parse_partners_csv(reader)?;
    let imported = if partners.is_empty() {
        0
    } else {
        repo.create_partners(&partners)?
    };
    Ok(ImportOutcome {
        total,
        imported,
        errors,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accounts_csv_with_mixed_rows_reports_each_failure() {
        let csv = "name,email,phone\n\
                   Acme,sales@acme.com,+1 415 555 2671\n\
                   ,missing@name.com,\n\
                   Globex,not-an-email,\n";

        let (total, accounts, errors) = parse_accounts_csv(csv.as_bytes()).unwrap();
        assert_eq!(total, 3);
        assert_eq!(accounts.len(), 1);
        assert_eq!(accounts[0].name, "Acme");
        assert_eq!(accounts[0].phone.as_deref(), Some("+14155552671"));
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].row, 2);
        assert_eq!(errors[0].field, "name");
        assert_eq!(errors[1].row, 3);
        assert_eq!(errors[1].field, "email");
    }

    #[test]
    fn missing_required_header_rejects_whole_file() {
        let csv = "industry,email\nSoftware,a@b.com\n";
        assert!(matches!(
            parse_accounts_csv(csv.as_bytes()),
            Err(ServiceError::Validation(_))
        ));
    }

    #[test]
    fn contacts_csv_parses_optional_account_id() {
        let csv = "first_name,last_name,account_id\nAda,Lovelace,7\nAlan,Turing,\n";
        let (total, contacts, errors) = parse_contacts_csv(csv.as_bytes()).unwrap();
        assert_eq!(total, 2);
        assert!(errors.is_empty());
        assert_eq!(contacts[0].account_id, Some(7));
        assert_eq!(contacts[1].account_id, None);
    }

    #[test]
    fn partners_csv_defaults_status_and_tier() {
        let csv = "name,contact_email,status,tier,discount_rate\n\
                   Northwind,ops@northwind.io,,,\n\
                   Initech,buy@initech.com,approved,elite,12.5\n\
                   BadCo,ceo@badco.com,active,elite,\n";

        let (total, partners, errors) = parse_partners_csv(csv.as_bytes()).unwrap();
        assert_eq!(total, 3);
        assert_eq!(partners.len(), 2);
        assert_eq!(partners[0].status, PartnerStatus::Pending);
        assert_eq!(partners[0].tier, PartnerTier::New);
        assert_eq!(partners[1].status, PartnerStatus::Approved);
        assert_eq!(partners[1].discount_rate, Some(12.5));
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "status");
    }

    #[test]
    fn discount_rate_outside_percent_range_is_rejected() {
        let csv = "name,contact_email,discount_rate\nAcme,a@b.com,120\n";
        let (_, partners, errors) = parse_partners_csv(csv.as_bytes()).unwrap();
        assert!(partners.is_empty());
        assert_eq!(errors[0].field, "discount_rate");
    }

    #[test]
    fn templates_list_expected_columns() {
        assert!(accounts_template().starts_with("name,industry,email"));
        assert!(contacts_template().contains("first_name"));
        assert!(partners_template().contains("discount_rate"));
    }
}
