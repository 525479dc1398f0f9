//! Request extractors that route rejections through [`ApiError`].

use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// Query-string extractor whose deserialization failures surface as a
/// 422 [`ApiError::Validation`] instead of axum's default 400, keeping
/// every parameter error in the gateway's error taxonomy.
#[derive(Debug, Clone, Copy)]
pub struct ValidatedQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for ValidatedQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::try_from_uri(&parts.uri).map_err(|err| {
            ApiError::Validation {
                field: "query".to_string(),
                message: err.body_text(),
            }
        })?;
        Ok(Self(value))
    }
}
