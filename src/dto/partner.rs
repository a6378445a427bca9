use serde::Deserialize;
use validator::Validate;

use crate::domain::partner::{NewPartner, PartnerStatus, PartnerTier, UpdatePartner};

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PartnerPayload {
    #[validate(length(min = 1, message = "name cannot be empty"))]
    pub name: String,
    #[validate(email)]
    pub contact_email: String,
    pub phone: Option<String>,
    pub region: Option<String>,
    /// Defaults to `pending` when omitted.
    pub status: Option<PartnerStatus>,
    /// Defaults to `new` when omitted.
    pub tier: Option<PartnerTier>,
    #[validate(range(min = 0.0, max = 100.0, message = "discount rate must be a percentage"))]
    pub discount_rate: Option<f64>,
}

impl From<PartnerPayload> for NewPartner {
    fn from(payload: PartnerPayload) -> Self {
        NewPartner::new(
            payload.name,
            payload.contact_email,
            payload.phone,
            payload.region,
            payload.status.unwrap_or_default(),
            payload.tier.unwrap_or_default(),
            payload.discount_rate,
        )
    }
}

impl From<PartnerPayload> for UpdatePartner {
    fn from(payload: PartnerPayload) -> Self {
        UpdatePartner::new(
            payload.name,
            payload.contact_email,
            payload.phone,
            payload.region,
            payload.status.unwrap_or_default(),
            payload.tier.unwrap_or_default(),
            payload.discount_rate,
        )
    }
}
