use std::fmt::Display;
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{TypeConstraintError, trimmed_opt};

/// Approval workflow state of a reseller/distributor.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum PartnerStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl Display for PartnerStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PartnerStatus::Pending => write!(f, "pending"),
            PartnerStatus::Approved => write!(f, "approved"),
            PartnerStatus::Rejected => write!(f, "rejected"),
        }
    }
}

impl FromStr for PartnerStatus {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pending" => Ok(PartnerStatus::Pending),
            "approved" => Ok(PartnerStatus::Approved),
            "rejected" => Ok(PartnerStatus::Rejected),
            other => Err(TypeConstraintError::InvalidValue(format!(
                "unknown partner status: {other}"
            ))),
        }
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum PartnerTier {
    #[default]
    New,
    Growth,
    Elite,
}

impl Display for PartnerTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PartnerTier::New => write!(f, "new"),
            PartnerTier::Growth => write!(f, "growth"),
            PartnerTier::Elite => write!(f, "elite"),
        }
    }
}

impl FromStr for PartnerTier {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "new" => Ok(PartnerTier::New),
            "growth" => Ok(PartnerTier::Growth),
            "elite" => Ok(PartnerTier::Elite),
            other => Err(TypeConstraintError::InvalidValue(format!(
                "unknown partner tier: {other}"
            ))),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Partner {
    pub id: i32,
    pub name: String,
    pub contact_email: String,
    pub phone: Option<String>,
    pub region: Option<String>,
    pub status: PartnerStatus,
    pub tier: PartnerTier,
    /// Percent discount the partner's tier grants on quotes.
    pub discount_rate: Option<f64>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewPartner {
    pub name: String,
    pub contact_email: String,
    pub phone: Option<String>,
    pub region: Option<String>,
    pub status: PartnerStatus,
    pub tier: PartnerTier,
    pub discount_rate: Option<f64>,
}

impl NewPartner {
    #[must_use]
    pub fn new(
        name: String,
        contact_email: String,
        phone: Option<String>,
        region: Option<String>,
        status: PartnerStatus,
        tier: PartnerTier,
        discount_rate: Option<f64>,
    ) -> Self {
        Self {
            name: name.trim().to_string(),
            contact_email: contact_email.trim().to_lowercase(),
            phone: trimmed_opt(phone),
            region: trimmed_opt(region),
            status,
            tier,
            discount_rate,
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct UpdatePartner {
    pub name: String,
    pub contact_email: String,
    pub phone: Option<String>,
    pub region: Option<String>,
    pub status: PartnerStatus,
    pub tier: PartnerTier,
    pub discount_rate: Option<f64>,
}

impl UpdatePartner {
    #[must_use]
    pub fn new(
        name: String,
        contact_email: String,
        phone: Option<String>,
        region: Option<String>,
        status: PartnerStatus,
        tier: PartnerTier,
        discount_rate: Option<f64>,
    ) -> Self {
        Self {
            name: name.trim().to_string(),
            contact_email: contact_email.trim().to_lowercase(),
            phone: trimmed_opt(phone),
            region: trimmed_opt(region),
            status,
            tier,
            discount_rate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partner_status_round_trips_from_str() {
        assert_eq!("approved".parse(), Ok(PartnerStatus::Approved));
        assert_eq!(" Pending ".parse(), Ok(PartnerStatus::Pending));
        assert!("active".parse::<PartnerStatus>().is_err());
    }

    #[test]
    fn partner_tier_round_trips_from_str() {
        assert_eq!("elite".parse(), Ok(PartnerTier::Elite));
        assert_eq!(PartnerTier::Growth.to_string(), "growth");
    }
}
