//! Inventory repository
//!
//! Executes the statements built by `QueryBuilder`:
//! - list: ORDER BY + LIMIT/OFFSET
//! - filter: optional WHERE clauses
//! - get: single row by id
//! - ping: table reachability for /health

use joyas_core::{
    BindValue, BuiltQuery, FilterRequest, InventoryItem, ListingRequest, QueryBuilder,
};
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },
}

/// Inventory repository
pub struct InventoryRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> InventoryRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// One page of items in the requested order.
    pub async fn list(&self, req: &ListingRequest) -> Result<Vec<InventoryItem>, DbError> {
        self.fetch_all(&QueryBuilder::listing(req)).await
    }

    /// All items matching the present filters.
    pub async fn filter(&self, req: &FilterRequest) -> Result<Vec<InventoryItem>, DbError> {
        self.fetch_all(&QueryBuilder::filtered(req)).await
    }

    /// A single item by id.
    pub async fn get(&self, id: i32) -> Result<InventoryItem, DbError> {
        let query = QueryBuilder::by_id(id);
        let row = bind_values(&query)
            .fetch_optional(self.pool)
            .await?
            .ok_or_else(|| DbError::NotFound {
                resource: "joya",
                id: id.to_string(),
            })?;

        Ok(item_from_row(&row)?)
    }

    /// Check that the `inventario` table is reachable.
    pub async fn ping(&self) -> Result<(), DbError> {
        bind_values(&QueryBuilder::ping())
            .fetch_optional(self.pool)
            .await?;
        Ok(())
    }

    async fn fetch_all(&self, query: &BuiltQuery) -> Result<Vec<InventoryItem>, DbError> {
        tracing::debug!(sql = %query.sql, params = query.values.len(), "executing query");

        let rows = bind_values(query).fetch_all(self.pool).await?;
        let items = rows
            .iter()
            .map(item_from_row)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(items)
    }
}

/// Attach every bound value, in placeholder order.
fn bind_values(
    query: &BuiltQuery,
) -> sqlx::query::Query<'_, sqlx::Postgres, sqlx::postgres::PgArguments> {
    query
        .values
        .iter()
        .fold(sqlx::query(&query.sql), |q, value| match value {
            BindValue::Int(n) => q.bind(*n),
            BindValue::Text(s) => q.bind(s.as_str()),
        })
}

fn item_from_row(row: &PgRow) -> Result<InventoryItem, sqlx::Error> {
    Ok(InventoryItem {
        id: row.try_get("id")?,
        name: row.try_get("nombre")?,
        category: row.try_get("categoria")?,
        metal: row.try_get("metal")?,
        price: row.try_get("precio")?,
        stock: row.try_get("stock")?,
    })
}
