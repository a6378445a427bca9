use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::partner::{
    NewPartner as DomainNewPartner, Partner as DomainPartner, UpdatePartner as DomainUpdatePartner,
};
use crate::domain::types::TypeConstraintError;

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::partners)]
/// Diesel model for [`crate::domain::partner::Partner`].
pub struct Partner {
    pub id: i32,
    pub name: String,
    pub contact_email: String,
    pub phone: Option<String>,
    pub region: Option<String>,
    pub status: String,
    pub tier: String,
    pub discount_rate: Option<f64>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::partners)]
pub struct NewPartner<'a> {
    pub name: &'a str,
    pub contact_email: &'a str,
    pub phone: Option<&'a str>,
    pub region: Option<&'a str>,
    pub status: String,
    pub tier: String,
    pub discount_rate: Option<f64>,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::partners)]
#[diesel(treat_none_as_null = true)]
pub struct UpdatePartner<'a> {
    pub name: &'a str,
    pub contact_email: &'a str,
    pub phone: Option<&'a str>,
    pub region: Option<&'a str>,
    pub status: String,
    pub tier: String,
    pub discount_rate: Option<f64>,
    pub updated_at: NaiveDateTime,
}

impl TryFrom<Partner> for DomainPartner {
    type Error = TypeConstraintError;

    fn try_from(partner: Partner) -> Result<Self, Self::Error> {
        Ok(Self {
            id: partner.id,
            name: partner.name,
            contact_email: partner.contact_email,
            phone: partner.phone,
            region: partner.region,
            status: partner.status.parse()?,
            tier: partner.tier.parse()?,
            discount_rate: partner.discount_rate,
            created_at: partner.created_at,
            updated_at: partner.updated_at,
        })
    }
}

impl<'a> From<&'a DomainNewPartner> for NewPartner<'a> {
    fn from(partner: &'a DomainNewPartner) -> Self {
        Self {
            name: partner.name.as_str(),
            contact_email: partner.contact_email.as_str(),
            phone: partner.phone.as_deref(),
            region: partner.region.as_deref(),
            status: partner.status.to_string(),
            tier: partner.tier.to_string(),
            discount_rate: partner.discount_rate,
        }
    }
}

impl<'a> UpdatePartner<'a> {
    pub fn from_domain(updates: &'a DomainUpdatePartner, updated_at: NaiveDateTime) -> Self {
        Self {
            name: updates.name.as_str(),
            contact_email: updates.contact_email.as_str(),
            phone: updates.phone.as_deref(),
            region: updates.region.as_deref(),
            status: updates.status.to_string(),
            tier: updates.tier.to_string(),
            discount_rate: updates.discount_rate,
            updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::partner::{PartnerStatus, PartnerTier};
    use chrono::Utc;

    #[test]
    fn partner_try_into_domain_parses_enums() {
        let now = Utc::now().naive_utc();
        let db_partner = Partner {
            id: 7,
            name: "Northwind".to_string(),
            contact_email: "partners@northwind.com".to_string(),
            phone: None,
            region: Some("EMEA".to_string()),
            status: "approved".to_string(),
            tier: "elite".to_string(),
            discount_rate: Some(12.5),
            created_at: now,
            updated_at: now,
        };
        let domain = DomainPartner::try_from(db_partner).unwrap();
        assert_eq!(domain.status, PartnerStatus::Approved);
        assert_eq!(domain.tier, PartnerTier::Elite);
    }

    #[test]
    fn partner_try_into_domain_rejects_unknown_status() {
        let now = Utc::now().naive_utc();
        let db_partner = Partner {
            id: 7,
            name: "Northwind".to_string(),
            contact_email: "partners@northwind.com".to_string(),
            phone: None,
            region: None,
            status: "dormant".to_string(),
            tier: "new".to_string(),
            discount_rate: None,
            created_at: now,
            updated_at: now,
        };
        assert!(DomainPartner::try_from(db_partner).is_err());
    }
}
