use crate::domain::partner::{NewPartner, Partner, UpdatePartner};
use crate::repository::{PartnerListQuery, PartnerReader, PartnerWriter};
use crate::services::{ServiceError, ServiceResult};

pub fn get_partner<R>(repo: &R, partner_id: i32) -> ServiceResult<Partner>
where
    R: PartnerReader + ?Sized,
{
    repo.get_partner_by_id(partner_id)?
        .ok_or(ServiceError::NotFound)
}

pub fn list_partners<R>(repo: &R, query: PartnerListQuery) -> ServiceResult<(usize, Vec<Partner>)>
where
    R: PartnerReader + ?Sized,
{
    repo.list_partners(query).map_err(ServiceError::from)
}

pub fn create_partner<R>(repo: &R, new_partner: &NewPartner) -> ServiceResult<Partner>
where
    R: PartnerWriter + ?Sized,
{
    repo.create_partner(new_partner).map_err(ServiceError::from)
}

pub fn update_partner<R>(
    repo: &R,
    partner_id: i32,
    updates: &UpdatePartner,
) -> ServiceResult<Partner>
where
    R: PartnerWriter + ?Sized,
{
    repo.update_partner(partner_id, updates)
        .map_err(ServiceError::from)
}

pub fn delete_partner<R>(repo: &R, partner_id: i32) -> ServiceResult<()>
where
    R: PartnerWriter + ?Sized,
{
    repo.delete_partner(partner_id).map_err(ServiceError::from)
}
