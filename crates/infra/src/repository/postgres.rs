//! Postgres-backed supplier store.
//!
//! Rows are re-validated when loaded: a row that no longer parses as a valid
//! registry ID (or breaks the MEI rule) surfaces as [`StoreError::Corrupt`]
//! instead of leaking an unvalidated supplier.

use async_trait::async_trait;
use sqlx::postgres::{PgPool, PgPoolOptions, PgRow};
use sqlx::Row;

use supplierbook_core::{Entity, SupplierId};
use supplierbook_parties::{registry_id, Supplier, SupplierCategory, SupplierDetails};

use super::{StoreError, SupplierRepository};

const CREATE_SUPPLIERS: &str = include_str!("../../migrations/0001_create_suppliers.sql");

/// Postgres-backed implementation of [`SupplierRepository`].
///
/// Uses the SQLx connection pool, which is `Send + Sync`; each call runs as a
/// single statement so no explicit transaction is needed.
#[derive(Debug, Clone)]
pub struct PostgresSupplierRepository {
    pool: PgPool,
}

impl PostgresSupplierRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Open a pool against `database_url`.
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await?;
        Ok(Self::new(pool))
    }

    /// Create the `suppliers` table if it does not exist yet.
    pub async fn migrate(&self) -> Result<(), StoreError> {
        sqlx::raw_sql(CREATE_SUPPLIERS).execute(&self.pool).await?;
        tracing::info!("suppliers schema ready");
        Ok(())
    }
}

fn row_to_supplier(row: &PgRow) -> Result<Supplier, StoreError> {
    let id: i64 = row.try_get("id")?;
    let name: String = row.try_get("name")?;
    let raw_registry_id: String = row.try_get("registry_id")?;
    let category: String = row.try_get("category")?;

    let registry_id =
        registry_id::validate(&raw_registry_id).map_err(|e| StoreError::corrupt(id, e))?;
    let category = SupplierCategory::from_tag(&category)
        .ok_or_else(|| StoreError::corrupt(id, "empty category"))?;
    let details = SupplierDetails::from_parts(name, registry_id, category)
        .map_err(|e| StoreError::corrupt(id, e))?;

    Ok(Supplier::new(SupplierId::new(id), details))
}

#[async_trait]
impl SupplierRepository for PostgresSupplierRepository {
    async fn add(&self, details: SupplierDetails) -> Result<Supplier, StoreError> {
        let row = sqlx::query(
            r#"
            INSERT INTO suppliers (name, registry_id, category)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(details.name())
        .bind(details.registry_id().as_str())
        .bind(details.category().as_str())
        .fetch_one(&self.pool)
        .await?;

        let id: i64 = row.try_get("id")?;
        tracing::debug!(supplier_id = id, "supplier row inserted");
        Ok(Supplier::new(SupplierId::new(id), details))
    }

    async fn update(&self, supplier: &Supplier) -> Result<(), StoreError> {
        let result = sqlx::query(
            r#"
            UPDATE suppliers
            SET name = $2, registry_id = $3, category = $4
            WHERE id = $1
            "#,
        )
        .bind(supplier.id().get())
        .bind(supplier.name())
        .bind(supplier.registry_id().as_str())
        .bind(supplier.category().as_str())
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::Missing(supplier.id()));
        }
        Ok(())
    }

    async fn fetch_by_id(&self, id: SupplierId) -> Result<Option<Supplier>, StoreError> {
        let row = sqlx::query(
            r#"
            SELECT id, name, registry_id, category
            FROM suppliers
            WHERE id = $1
            "#,
        )
        .bind(id.get())
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(row_to_supplier).transpose()
    }

    async fn list(&self) -> Result<Vec<Supplier>, StoreError> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, registry_id, category
            FROM suppliers
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(row_to_supplier).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn migration_creates_fourteen_char_registry_column() {
        assert!(CREATE_SUPPLIERS.contains("CREATE TABLE IF NOT EXISTS suppliers"));
        assert!(CREATE_SUPPLIERS.contains("registry_id VARCHAR(14) NOT NULL"));
    }

    /// Runs only when `DATABASE_URL` points at a disposable Postgres.
    #[tokio::test]
    async fn roundtrip_against_postgres() {
        let Ok(url) = std::env::var("DATABASE_URL") else {
            return;
        };
        let repo = PostgresSupplierRepository::connect(&url, 2).await.unwrap();
        repo.migrate().await.unwrap();

        let details = SupplierDetails::validate("Acme", "a2345678901242", "eireli").unwrap();
        let mut stored = repo.add(details).await.unwrap();
        let fetched = repo.fetch_by_id(stored.id()).await.unwrap().unwrap();
        assert_eq!(fetched, stored);

        stored.replace_details(SupplierDetails::validate("Acme MEI", "11444777000142", "MEI").unwrap());
        repo.update(&stored).await.unwrap();
        let fetched = repo.fetch_by_id(stored.id()).await.unwrap().unwrap();
        assert_eq!(fetched.category(), &SupplierCategory::Mei);

        assert!(repo.list().await.unwrap().iter().any(|s| s.id() == stored.id()));
    }
}
