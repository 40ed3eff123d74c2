//! Paginated listing parameters
//!
//! `order_by` is split into a column and a direction, each checked against a
//! closed enum. Only the enums' static renderings ever reach the SQL text.

use serde::Deserialize;

use crate::error::{QueryError, Result};

/// Default items per page
pub const DEFAULT_LIMIT: i64 = 10;

/// Default page (1-indexed)
pub const DEFAULT_PAGE: i64 = 1;

/// Sortable columns of `inventario`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortField {
    Id,
    Name,
    Category,
    Metal,
    Price,
    Stock,
}

impl SortField {
    pub const ALL: [SortField; 6] = [
        Self::Id,
        Self::Name,
        Self::Category,
        Self::Metal,
        Self::Price,
        Self::Stock,
    ];

    /// Parse a column name. Accepts the column names and their English aliases.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "id" => Some(Self::Id),
            "nombre" | "name" => Some(Self::Name),
            "categoria" | "category" => Some(Self::Category),
            "metal" => Some(Self::Metal),
            "precio" | "price" => Some(Self::Price),
            "stock" => Some(Self::Stock),
            _ => None,
        }
    }

    /// Column name as written in SQL.
    pub fn column(&self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Name => "nombre",
            Self::Category => "categoria",
            Self::Metal => "metal",
            Self::Price => "precio",
            Self::Stock => "stock",
        }
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    /// Parse a direction, case-insensitive.
    pub fn from_name(name: &str) -> Option<Self> {
        if name.eq_ignore_ascii_case("asc") {
            Some(Self::Asc)
        } else if name.eq_ignore_ascii_case("desc") {
            Some(Self::Desc)
        } else {
            None
        }
    }

    /// SQL keyword.
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

/// Validated `ORDER BY` target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderBy {
    pub field: SortField,
    pub direction: SortDirection,
}

impl OrderBy {
    /// Parse `"<field>_<ASC|DESC>"`.
    ///
    /// The split happens at the last underscore.
    ///
    /// # Example
    /// ```
    /// use joyas_core::{OrderBy, SortDirection, SortField};
    ///
    /// let order = OrderBy::parse("stock_ASC").unwrap();
    /// assert_eq!(order.field, SortField::Stock);
    /// assert_eq!(order.direction, SortDirection::Asc);
    ///
    /// assert!(OrderBy::parse("password_ASC").is_err());
    /// assert!(OrderBy::parse("id; DROP TABLE inventario").is_err());
    /// ```
    pub fn parse(raw: &str) -> Result<Self> {
        let invalid = || QueryError::InvalidSortField {
            value: raw.to_owned(),
        };

        let (field, direction) = raw.rsplit_once('_').ok_or_else(invalid)?;
        let field = SortField::from_name(field).ok_or_else(invalid)?;
        let direction = SortDirection::from_name(direction).ok_or_else(invalid)?;

        Ok(Self { field, direction })
    }
}

impl Default for OrderBy {
    fn default() -> Self {
        Self {
            field: SortField::Id,
            direction: SortDirection::Asc,
        }
    }
}

/// Raw query parameters for `GET /joyas`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListingParams {
    pub limits: Option<String>,
    pub page: Option<String>,
    pub order_by: Option<String>,
}

/// Validated listing request
///
/// Fields are private: [`ListingRequest::new`] and
/// [`ListingRequest::from_params`] are the only ways to build one, so every
/// value handed to the query builder has passed validation.
///
/// ```compile_fail
/// use joyas_core::{ListingRequest, OrderBy};
///
/// let _ = ListingRequest { limit: 5, page: 0, order_by: OrderBy::default() };
/// ```
///
/// ```
/// use joyas_core::{ListingRequest, OrderBy};
///
/// assert!(ListingRequest::new(5, 0, OrderBy::default()).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListingRequest {
    limit: i64,
    page: i64,
    order_by: OrderBy,
}

impl ListingRequest {
    /// Create a listing request with validation.
    ///
    /// Both `limit` and `page` must be at least 1, and the resulting offset
    /// must fit in an `i64`.
    pub fn new(limit: i64, page: i64, order_by: OrderBy) -> Result<Self> {
        if limit < 1 {
            return Err(QueryError::InvalidPagination {
                field: "limits",
                value: limit.to_string(),
            });
        }
        if page < 1 {
            return Err(QueryError::InvalidPagination {
                field: "page",
                value: page.to_string(),
            });
        }

        let request = Self {
            limit,
            page,
            order_by,
        };
        request.checked_offset().ok_or(QueryError::InvalidPagination {
            field: "page",
            value: page.to_string(),
        })?;

        Ok(request)
    }

    /// Validate raw query parameters. Empty values fall back to defaults.
    pub fn from_params(params: &ListingParams) -> Result<Self> {
        let limit = parse_positive("limits", params.limits.as_deref(), DEFAULT_LIMIT)?;
        let page = parse_positive("page", params.page.as_deref(), DEFAULT_PAGE)?;
        let order_by = match present(params.order_by.as_deref()) {
            Some(raw) => OrderBy::parse(raw)?,
            None => OrderBy::default(),
        };

        Self::new(limit, page, order_by)
    }

    /// Items per page (>= 1)
    pub fn limit(&self) -> i64 {
        self.limit
    }

    /// Page number (1-indexed)
    pub fn page(&self) -> i64 {
        self.page
    }

    pub fn order_by(&self) -> OrderBy {
        self.order_by
    }

    /// SQL OFFSET value: `(page - 1) * limit`.
    pub fn offset(&self) -> i64 {
        // new() rejects requests whose offset overflows
        self.checked_offset().unwrap_or(i64::MAX)
    }

    fn checked_offset(&self) -> Option<i64> {
        (self.page - 1).checked_mul(self.limit)
    }
}

impl Default for ListingRequest {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            page: DEFAULT_PAGE,
            order_by: OrderBy::default(),
        }
    }
}

/// Trimmed value, or `None` when missing or blank.
pub(crate) fn present(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn parse_positive(field: &'static str, raw: Option<&str>, default: i64) -> Result<i64> {
    let Some(raw) = present(raw) else {
        return Ok(default);
    };

    match raw.parse::<i64>() {
        Ok(n) if n >= 1 => Ok(n),
        _ => Err(QueryError::InvalidPagination {
            field,
            value: raw.to_owned(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(limits: Option<&str>, page: Option<&str>, order_by: Option<&str>) -> ListingParams {
        ListingParams {
            limits: limits.map(String::from),
            page: page.map(String::from),
            order_by: order_by.map(String::from),
        }
    }

    #[test]
    fn offset_calculation() {
        let order = OrderBy::default();
        assert_eq!(ListingRequest::new(10, 1, order).unwrap().offset(), 0);
        assert_eq!(ListingRequest::new(10, 2, order).unwrap().offset(), 10);
        assert_eq!(ListingRequest::new(25, 3, order).unwrap().offset(), 50);
    }

    #[test]
    fn defaults_when_missing() {
        let req = ListingRequest::from_params(&ListingParams::default()).unwrap();
        assert_eq!(req, ListingRequest::default());
        assert_eq!(req.limit(), 10);
        assert_eq!(req.page(), 1);
        assert_eq!(req.order_by().field, SortField::Id);
    }

    #[test]
    fn blank_values_use_defaults() {
        let req = ListingRequest::from_params(&params(Some(""), Some("  "), Some(""))).unwrap();
        assert_eq!(req, ListingRequest::default());
    }

    #[test]
    fn rejects_non_positive_pagination() {
        let err = ListingRequest::from_params(&params(Some("0"), None, None)).unwrap_err();
        assert!(matches!(err, QueryError::InvalidPagination { field: "limits", .. }));

        let err = ListingRequest::from_params(&params(None, Some("-1"), None)).unwrap_err();
        assert!(matches!(err, QueryError::InvalidPagination { field: "page", .. }));
    }

    #[test]
    fn rejects_non_numeric_pagination() {
        let err = ListingRequest::from_params(&params(Some("ten"), None, None)).unwrap_err();
        assert!(matches!(err, QueryError::InvalidPagination { field: "limits", .. }));

        let err = ListingRequest::from_params(&params(None, Some("1.5"), None)).unwrap_err();
        assert!(matches!(err, QueryError::InvalidPagination { field: "page", .. }));
    }

    #[test]
    fn constructors_never_yield_negative_offset() {
        for (limit, page) in [(5, 0), (0, 1), (5, -3), (-5, 2)] {
            assert!(ListingRequest::new(limit, page, OrderBy::default()).is_err());
        }

        let req = ListingRequest::new(5, 1, OrderBy::default()).unwrap();
        assert_eq!(req.offset(), 0);
        assert!(req.limit() >= 1 && req.page() >= 1);
    }

    #[test]
    fn rejects_overflowing_offset() {
        let err = ListingRequest::new(i64::MAX, 3, OrderBy::default()).unwrap_err();
        assert!(matches!(err, QueryError::InvalidPagination { .. }));
    }

    #[test]
    fn order_by_accepts_every_column() {
        for field in SortField::ALL {
            let raw = format!("{}_DESC", field.column());
            let order = OrderBy::parse(&raw).unwrap();
            assert_eq!(order.field, field);
            assert_eq!(order.direction, SortDirection::Desc);
        }
    }

    #[test]
    fn order_by_direction_is_case_insensitive() {
        assert_eq!(
            OrderBy::parse("precio_desc").unwrap().direction,
            SortDirection::Desc
        );
        assert_eq!(OrderBy::parse("precio_Asc").unwrap().direction, SortDirection::Asc);
    }

    #[test]
    fn order_by_aliases() {
        assert_eq!(OrderBy::parse("price_ASC").unwrap().field, SortField::Price);
        assert_eq!(OrderBy::parse("name_ASC").unwrap().field, SortField::Name);
    }

    #[test]
    fn order_by_rejects_unknown() {
        for raw in ["stock", "stock_", "_ASC", "stock_UP", "secret_ASC", "id;--_ASC", "id_ASC;"] {
            let err = OrderBy::parse(raw).unwrap_err();
            assert_eq!(
                err,
                QueryError::InvalidSortField {
                    value: raw.to_owned()
                },
                "{raw} should be rejected"
            );
        }
    }
}
