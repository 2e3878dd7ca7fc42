//! PostgreSQL Repository Implementation

use sqlx::PgPool;
use uuid::Uuid;

use kernel::id::{ProductId, SellerId};

use crate::domain::entity::{Product, Seller, ValidatedProduct, ValidatedSeller};
use crate::domain::repository::{ProductRepository, SellerRepository};
use crate::error::{CatalogError, CatalogResult};

const SELECT_PRODUCT: &str = r#"
    SELECT
        p.product_id,
        p.name,
        p.price,
        s.seller_id,
        s.name AS seller_name
    FROM products p
    JOIN sellers s ON s.seller_id = p.seller_id
"#;

/// PostgreSQL-backed seller and product repository
#[derive(Clone)]
pub struct PgCatalogRepository {
    pool: PgPool,
}

impl PgCatalogRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl SellerRepository for PgCatalogRepository {
    async fn create_seller(&self, seller: &ValidatedSeller) -> CatalogResult<()> {
        sqlx::query("INSERT INTO sellers (seller_id, name) VALUES ($1, $2)")
            .bind(seller.id().into_uuid())
            .bind(seller.name())
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn find_seller(&self, id: SellerId) -> CatalogResult<Option<ValidatedSeller>> {
        let row = sqlx::query_as::<_, SellerRow>(
            "SELECT seller_id, name FROM sellers WHERE seller_id = $1",
        )
        .bind(id.into_uuid())
        .fetch_optional(&self.pool)
        .await?;

        row.map(SellerRow::into_seller).transpose()
    }

    async fn find_all_sellers(&self) -> CatalogResult<Vec<ValidatedSeller>> {
        let rows = sqlx::query_as::<_, SellerRow>(
            "SELECT seller_id, name FROM sellers ORDER BY created_at, seller_id",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(SellerRow::into_seller).collect()
    }

    async fn update_seller(&self, seller: &ValidatedSeller) -> CatalogResult<()> {
        let result = sqlx::query(
            "UPDATE sellers SET name = $2, updated_at = NOW() WHERE seller_id = $1",
        )
        .bind(seller.id().into_uuid())
        .bind(seller.name())
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(CatalogError::SellerNotFound);
        }
        Ok(())
    }

    async fn delete_seller(&self, id: SellerId) -> CatalogResult<()> {
        let result = sqlx::query("DELETE FROM sellers WHERE seller_id = $1")
            .bind(id.into_uuid())
            .execute(&self.pool)
            .await
            .map_err(|e| match &e {
                sqlx::Error::Database(db) if db.is_foreign_key_violation() => {
                    CatalogError::SellerHasProducts
                }
                _ => CatalogError::from(e),
            })?;

        if result.rows_affected() == 0 {
            return Err(CatalogError::SellerNotFound);
        }
        Ok(())
    }
}

impl ProductRepository for PgCatalogRepository {
    async fn create_product(&self, product: &ValidatedProduct) -> CatalogResult<()> {
        sqlx::query(
            r#"
            INSERT INTO products (product_id, name, price, seller_id)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(product.id().into_uuid())
        .bind(product.name())
        .bind(product.price())
        .bind(product.seller().id().into_uuid())
        .execute(&self.pool)
        .await
        .map_err(missing_seller)?;

        Ok(())
    }

    async fn find_product(&self, id: ProductId) -> CatalogResult<Option<ValidatedProduct>> {
        let sql = format!("{SELECT_PRODUCT} WHERE p.product_id = $1");
        let row = sqlx::query_as::<_, ProductRow>(&sql)
            .bind(id.into_uuid())
            .fetch_optional(&self.pool)
            .await?;

        row.map(ProductRow::into_product).transpose()
    }

    async fn find_all_products(&self) -> CatalogResult<Vec<ValidatedProduct>> {
        let sql = format!("{SELECT_PRODUCT} ORDER BY p.created_at, p.product_id");
        let rows = sqlx::query_as::<_, ProductRow>(&sql)
            .fetch_all(&self.pool)
            .await?;

        rows.into_iter().map(ProductRow::into_product).collect()
    }

    async fn update_product(&self, product: &ValidatedProduct) -> CatalogResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE products SET
                name = $2,
                price = $3,
                seller_id = $4,
                updated_at = NOW()
            WHERE product_id = $1
            "#,
        )
        .bind(product.id().into_uuid())
        .bind(product.name())
        .bind(product.price())
        .bind(product.seller().id().into_uuid())
        .execute(&self.pool)
        .await
        .map_err(missing_seller)?;

        if result.rows_affected() == 0 {
            return Err(CatalogError::ProductNotFound);
        }
        Ok(())
    }

    async fn delete_product(&self, id: ProductId) -> CatalogResult<()> {
        let result = sqlx::query("DELETE FROM products WHERE product_id = $1")
            .bind(id.into_uuid())
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(CatalogError::ProductNotFound);
        }
        Ok(())
    }
}

/// On a product write the only foreign key is `seller_id`
fn missing_seller(err: sqlx::Error) -> CatalogError {
    match &err {
        sqlx::Error::Database(db) if db.is_foreign_key_violation() => CatalogError::SellerNotFound,
        _ => CatalogError::from(err),
    }
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct SellerRow {
    seller_id: Uuid,
    name: String,
}

impl SellerRow {
    fn into_seller(self) -> CatalogResult<ValidatedSeller> {
        let id = SellerId::from_uuid(self.seller_id);
        Seller::new(self.name)
            .validate_with_id(id)
            .map_err(|e| CatalogError::Internal(format!("stored seller {id}: {e}")))
    }
}

#[derive(sqlx::FromRow)]
struct ProductRow {
    product_id: Uuid,
    name: String,
    price: f64,
    seller_id: Uuid,
    seller_name: String,
}

impl ProductRow {
    fn into_product(self) -> CatalogResult<ValidatedProduct> {
        let seller = SellerRow {
            seller_id: self.seller_id,
            name: self.seller_name,
        }
        .into_seller()?;

        let id = ProductId::from_uuid(self.product_id);
        Product::with_id(id, self.name, self.price, seller)
            .validate()
            .map_err(|e| CatalogError::Internal(format!("stored product {id}: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_into_product() {
        let seller_id = Uuid::new_v4();
        let row = ProductRow {
            product_id: Uuid::new_v4(),
            name: "Anvil".into(),
            price: 10.0,
            seller_id,
            seller_name: "Acme".into(),
        };
        let product = row.into_product().unwrap();
        assert_eq!(product.seller().id().into_uuid(), seller_id);
        assert_eq!(product.seller().name(), "Acme");
    }

    #[test]
    fn test_invalid_stored_row_is_internal() {
        let row = ProductRow {
            product_id: Uuid::new_v4(),
            name: "Anvil".into(),
            price: 0.0,
            seller_id: Uuid::new_v4(),
            seller_name: "Acme".into(),
        };
        assert!(matches!(row.into_product(), Err(CatalogError::Internal(_))));
    }

    #[test]
    fn test_non_constraint_errors_fall_through() {
        let err = missing_seller(sqlx::Error::PoolTimedOut);
        assert!(matches!(err, CatalogError::Database(_)));
        assert_eq!(err.kind(), kernel::error::kind::ErrorKind::Unavailable);
    }
}
