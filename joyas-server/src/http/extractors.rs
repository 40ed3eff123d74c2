//! Custom Axum extractors
//!
//! Rejections are turned into [`ApiError`] so malformed requests get the same
//! JSON body as every other error.

use axum::extract::{FromRequestParts, Path, Query};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;

use super::error::ApiError;

/// Extract and validate a numeric item id from path
pub struct ValidItemId(pub i32);

impl<S> FromRequestParts<S> for ValidItemId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let raw = match Path::<String>::from_request_parts(parts, state).await {
            Ok(Path(raw)) => raw,
            Err(_) => last_segment(parts).to_owned(),
        };

        let id = raw.parse::<i32>().map_err(|_| ApiError::InvalidPath {
            field: "id",
            value: raw.clone(),
        })?;

        Ok(Self(id))
    }
}

/// Query string deserialized into `T`, rejecting with a JSON error
pub struct ValidQuery<T>(pub T);

impl<S, T> FromRequestParts<S> for ValidQuery<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| ApiError::InvalidQuery {
                reason: rejection.body_text(),
            })?;

        Ok(Self(value))
    }
}

fn last_segment(parts: &Parts) -> &str {
    parts.uri.path().rsplit('/').next().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;
    use joyas_core::ListingParams;

    fn parts(uri: &str) -> Parts {
        let (parts, _) = Request::builder().uri(uri).body(()).unwrap().into_parts();
        parts
    }

    #[tokio::test]
    async fn duplicate_key_is_invalid_query() {
        let mut parts = parts("/joyas?limits=1&limits=2");
        let result = ValidQuery::<ListingParams>::from_request_parts(&mut parts, &()).await;
        assert!(matches!(result, Err(ApiError::InvalidQuery { .. })));
    }

    #[tokio::test]
    async fn well_formed_query_passes_through() {
        let mut parts = parts("/joyas?limits=3&order_by=stock_ASC");
        let ValidQuery(params) = ValidQuery::<ListingParams>::from_request_parts(&mut parts, &())
            .await
            .unwrap_or_else(|_| panic!("query rejected"));
        assert_eq!(params.limits.as_deref(), Some("3"));
        assert_eq!(params.order_by.as_deref(), Some("stock_ASC"));
        assert!(params.page.is_none());
    }

    #[test]
    fn last_segment_of_path() {
        assert_eq!(last_segment(&parts("/joyas/abc")), "abc");
        assert_eq!(last_segment(&parts("/joyas/")), "");
    }
}
