//! Repository implementation for reseller/distributor partners.

use diesel::prelude::*;

use crate::domain::partner::{NewPartner, Partner, UpdatePartner};
use crate::models::partner::{
    NewPartner as DbNewPartner, Partner as DbPartner, UpdatePartner as DbUpdatePartner,
};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{
    DieselRepository, PartnerListQuery, PartnerReader, PartnerWriter, page_bounds, timestamp_now,
};

impl PartnerReader for DieselRepository {
    fn get_partner_by_id(&self, id: i32) -> RepositoryResult<Option<Partner>> {
        use crate::schema::partners;

        let mut conn = self.conn()?;
        let partner = partners::table
            .find(id)
            .first::<DbPartner>(&mut conn)
            .optional()?;

        match partner {
            Some(partner) => Ok(Some(
                Partner::try_from(partner).map_err(RepositoryError::from)?,
            )),
            None => Ok(None),
        }
    }

    fn list_partners(&self, query: PartnerListQuery) -> RepositoryResult<(usize, Vec<Partner>)> {
        use crate::schema::partners;

        let mut conn = self.conn()?;

        let build = |query: &PartnerListQuery| {
            let mut q = partners::table.into_boxed();
            if let Some(status) = query.status {
                q = q.filter(partners::status.eq(status.to_string()));
            }
            if let Some(tier) = query.tier {
                q = q.filter(partners::tier.eq(tier.to_string()));
            }
            if let Some(search) = &query.search {
                let pattern = format!("%{search}%");
                q = q.filter(
                    partners::name
                        .like(pattern.clone())
                        .or(partners::contact_email.like(pattern.clone()))
                        .or(partners::region.like(pattern)),
                );
            }
            q
        };

        let total: i64 = build(&query).count().get_result(&mut conn)?;

        let mut items_query = build(&query).order(partners::id.asc());
        if let Some((limit, offset)) = page_bounds(query.pagination) {
            items_query = items_query.limit(limit).offset(offset);
        }

        let items = items_query
            .load::<DbPartner>(&mut conn)?
            .into_iter()
            .map(|p| Partner::try_from(p).map_err(RepositoryError::from))
            .collect::<RepositoryResult<Vec<_>>>()?;

        Ok((total as usize, items))
    }
}

impl PartnerWriter for DieselRepository {
    fn create_partner(&self, new_partner: &NewPartner) -> RepositoryResult<Partner> {
        use crate::schema::partners;

        let mut conn = self.conn()?;
        let insertable: DbNewPartner = new_partner.into();
        let created = diesel::insert_into(partners::table)
            .values(&insertable)
            .get_result::<DbPartner>(&mut conn)?;

        Partner::try_from(created).map_err(RepositoryError::from)
    }

    fn create_partners(&self, new_partners: &[NewPartner]) -> RepositoryResult<usize> {
        use crate::schema::partners;

        let mut conn = self.conn()?;
        let insertables: Vec<DbNewPartner> = new_partners.iter().map(Into::into).collect();
        let affected = diesel::insert_into(partners::table)
            .values(&insertables)
            .execute(&mut conn)?;

        Ok(affected)
    }

    fn update_partner(
        &self,
        partner_id: i32,
        updates: &UpdatePartner,
    ) -> RepositoryResult<Partner> {
        use crate::schema::partners;

        let mut conn = self.conn()?;
        let db_updates = DbUpdatePartner::from_domain(updates, timestamp_now());

        let updated = diesel::update(partners::table.find(partner_id))
            .set(&db_updates)
            .get_result::<DbPartner>(&mut conn)?;

        Partner::try_from(updated).map_err(RepositoryError::from)
    }

    fn delete_partner(&self, partner_id: i32) -> RepositoryResult<()> {
        use crate::schema::partners;

        let mut conn = self.conn()?;
        // Quotes and sales entries keep their FK; SQLite surfaces a
        // constraint violation when the partner is still referenced.
        let deleted = diesel::delete(partners::table.find(partner_id)).execute(&mut conn)?;
        if deleted == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
