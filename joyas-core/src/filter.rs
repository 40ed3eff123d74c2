//! Optional filters for `GET /joyas/filtros`

use serde::Deserialize;

use crate::error::{QueryError, Result};
use crate::listing::present;

/// Raw query parameters for the filtered listing
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FilterParams {
    pub precio_max: Option<String>,
    pub precio_min: Option<String>,
    pub categoria: Option<String>,
    pub metal: Option<String>,
}

/// Validated filters. `None` means no constraint on that column.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterRequest {
    pub price_max: Option<i64>,
    pub price_min: Option<i64>,
    pub category: Option<String>,
    pub metal: Option<String>,
}

impl FilterRequest {
    /// Validate raw query parameters.
    ///
    /// Blank values are treated as absent. Price bounds must be integers.
    pub fn from_params(params: &FilterParams) -> Result<Self> {
        Ok(Self {
            price_max: parse_price("precio_max", params.precio_max.as_deref())?,
            price_min: parse_price("precio_min", params.precio_min.as_deref())?,
            category: present(params.categoria.as_deref()).map(str::to_owned),
            metal: present(params.metal.as_deref()).map(str::to_owned),
        })
    }

    /// Number of filters that will produce a clause.
    pub fn len(&self) -> usize {
        [
            self.price_max.is_some(),
            self.price_min.is_some(),
            self.category.is_some(),
            self.metal.is_some(),
        ]
        .into_iter()
        .filter(|set| *set)
        .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn parse_price(field: &'static str, raw: Option<&str>) -> Result<Option<i64>> {
    present(raw)
        .map(|value| {
            value.parse::<i64>().map_err(|_| QueryError::InvalidFilterValue {
                field,
                value: value.to_owned(),
            })
        })
        .transpose()
}
