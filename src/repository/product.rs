//! Repository implementation for the product catalog.

use diesel::prelude::*;

use crate::domain::product::{NewProduct, Product, UpdateProduct};
use crate::models::product::{
    NewProduct as DbNewProduct, Product as DbProduct, UpdateProduct as DbUpdateProduct,
};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{
    DieselRepository, ProductListQuery, ProductReader, ProductWriter, page_bounds, timestamp_now,
};

impl ProductReader for DieselRepository {
    fn get_product_by_id(&self, id: i32) -> RepositoryResult<Option<Product>> {
        use crate::schema::products;

        let mut conn = self.conn()?;
        let product = products::table
            .find(id)
            .first::<DbProduct>(&mut conn)
            .optional()?;

        Ok(product.map(Into::into))
    }

    fn get_products_by_ids(&self, ids: &[i32]) -> RepositoryResult<Vec<Product>> {
        use crate::schema::products;

        let mut conn = self.conn()?;
        let items = products::table
            .filter(products::id.eq_any(ids))
            .load::<DbProduct>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect();

        Ok(items)
    }

    fn list_products(&self, query: ProductListQuery) -> RepositoryResult<(usize, Vec<Product>)> {
        use crate::schema::products;

        let mut conn = self.conn()?;

        let build = |query: &ProductListQuery| {
            let mut q = products::table.into_boxed();
            if let Some(active) = query.active {
                q = q.filter(products::active.eq(active));
            }
            if let Some(search) = &query.search {
                let pattern = format!("%{search}%");
                q = q.filter(
                    products::name
                        .like(pattern.clone())
                        .or(products::sku.like(pattern)),
                );
            }
            q
        };

        let total: i64 = build(&query).count().get_result(&mut conn)?;

        let mut items_query = build(&query).order(products::id.asc());
        if let Some((limit, offset)) = page_bounds(query.pagination) {
            items_query = items_query.limit(limit).offset(offset);
        }

        let items = items_query
            .load::<DbProduct>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect();

        Ok((total as usize, items))
    }
}

impl ProductWriter for DieselRepository {
    fn create_product(&self, new_product: &NewProduct) -> RepositoryResult<Product> {
        use crate::schema::products;

        let mut conn = self.conn()?;
        let insertable: DbNewProduct = new_product.into();
        let created = diesel::insert_into(products::table)
            .values(&insertable)
            .get_result::<DbProduct>(&mut conn)?;

        Ok(created.into())
    }

    fn update_product(
        &self,
        product_id: i32,
        updates: &UpdateProduct,
    ) -> RepositoryResult<Product> {
        use crate::schema::products;

        let mut conn = self.conn()?;
        let db_updates = DbUpdateProduct::from_domain(updates, timestamp_now());

        let updated = diesel::update(products::table.find(product_id))
            .set(&db_updates)
            .get_result::<DbProduct>(&mut conn)?;

        Ok(updated.into())
    }

    fn delete_product(&self, product_id: i32) -> RepositoryResult<()> {
        use crate::schema::products;

        let mut conn = self.conn()?;
        let deleted = diesel::delete(products::table.find(product_id)).execute(&mut conn)?;
        if deleted == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
