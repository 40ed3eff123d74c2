//! SQL construction for the `inventario` table
//!
//! Every data value travels as a bound parameter (`$1`, `$2`, ...). The only
//! text interpolated into the statement is the table name, a constant, and the
//! `ORDER BY` column/keyword taken from [`SortField`]/[`SortDirection`].
//!
//! [`SortField`]: crate::listing::SortField
//! [`SortDirection`]: crate::listing::SortDirection

use std::fmt;

use crate::error::Result;
use crate::filter::{FilterParams, FilterRequest};
use crate::listing::{ListingParams, ListingRequest};

/// Table holding the catalog
pub const TABLE: &str = "inventario";

/// Value bound to a positional placeholder
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BindValue {
    Int(i64),
    Text(String),
}

impl fmt::Display for BindValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{}", n),
            Self::Text(s) => write!(f, "{:?}", s),
        }
    }
}

/// Statement text plus its bound values, in placeholder order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltQuery {
    pub sql: String,
    pub values: Vec<BindValue>,
}

/// Builds the catalog queries
#[derive(Debug, Clone, Copy, Default)]
pub struct QueryBuilder;

impl QueryBuilder {
    /// Paginated listing.
    ///
    /// # Example
    /// ```
    /// use joyas_core::{BindValue, ListingRequest, OrderBy, QueryBuilder};
    ///
    /// let req = ListingRequest::new(3, 2, OrderBy::parse("stock_ASC").unwrap()).unwrap();
    /// let query = QueryBuilder::listing(&req);
    /// assert_eq!(
    ///     query.sql,
    ///     "SELECT * FROM inventario ORDER BY stock ASC LIMIT $1 OFFSET $2"
    /// );
    /// assert_eq!(query.values, vec![BindValue::Int(3), BindValue::Int(3)]);
    /// ```
    pub fn listing(req: &ListingRequest) -> BuiltQuery {
        let sql = format!(
            "SELECT * FROM {} ORDER BY {} {} LIMIT $1 OFFSET $2",
            TABLE,
            req.order_by().field.column(),
            req.order_by().direction.keyword(),
        );

        tracing::debug!(
            limit = req.limit(),
            page = req.page(),
            offset = req.offset(),
            "built listing query"
        );

        BuiltQuery {
            sql,
            values: vec![BindValue::Int(req.limit()), BindValue::Int(req.offset())],
        }
    }

    /// Validate raw listing parameters, then build the query.
    pub fn listing_from_params(params: &ListingParams) -> Result<BuiltQuery> {
        ListingRequest::from_params(params).map(|req| Self::listing(&req))
    }

    /// Filtered listing.
    ///
    /// Clauses are appended in a fixed order (price max, price min, category,
    /// metal) so placeholder numbering only depends on which filters are set.
    pub fn filtered(req: &FilterRequest) -> BuiltQuery {
        let mut clauses = Clauses::default();

        if let Some(max) = req.price_max {
            clauses.push("precio", "<=", BindValue::Int(max));
        }
        if let Some(min) = req.price_min {
            clauses.push("precio", ">=", BindValue::Int(min));
        }
        if let Some(category) = &req.category {
            clauses.push("categoria", "=", BindValue::Text(category.clone()));
        }
        if let Some(metal) = &req.metal {
            clauses.push("metal", "=", BindValue::Text(metal.clone()));
        }

        tracing::debug!(filters = clauses.values.len(), "built filter query");
        clauses.finish(format!("SELECT * FROM {}", TABLE))
    }

    /// Validate raw filter parameters, then build the query.
    pub fn filtered_from_params(params: &FilterParams) -> Result<BuiltQuery> {
        FilterRequest::from_params(params).map(|req| Self::filtered(&req))
    }

    /// Single item lookup.
    pub fn by_id(id: i32) -> BuiltQuery {
        BuiltQuery {
            sql: format!("SELECT * FROM {} WHERE id = $1", TABLE),
            values: vec![BindValue::Int(i64::from(id))],
        }
    }

    /// Cheapest statement that still touches the catalog table.
    pub fn ping() -> BuiltQuery {
        BuiltQuery {
            sql: format!("SELECT 1 FROM {} LIMIT 1", TABLE),
            values: Vec::new(),
        }
    }
}

/// Accumulates `WHERE` conditions alongside their values.
#[derive(Default)]
struct Clauses {
    conditions: Vec<String>,
    values: Vec<BindValue>,
}

impl Clauses {
    fn push(&mut self, column: &'static str, op: &'static str, value: BindValue) {
        self.values.push(value);
        self.conditions
            .push(format!("{} {} ${}", column, op, self.values.len()));
    }

    fn finish(self, mut sql: String) -> BuiltQuery {
        if !self.conditions.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&self.conditions.join(" AND "));
        }
        BuiltQuery {
            sql,
            values: self.values,
        }
    }
}
