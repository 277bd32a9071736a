//! JSON body extractor with field validation.

use axum::Json;
use axum::extract::{FromRequest, Request};
use serde::de::{self, DeserializeOwned};
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use validator::Validate;

use crate::error::ApiError;

/// Like `Json<T>`, but also runs `T`'s validation rules.
///
/// Bodies that are not JSON are rejected with `ApiError::BadRequest`; field
/// format violations with `ApiError::Validation`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;

        value.validate()?;
        Ok(Self(value))
    }
}

/// Reads a scalar field as text, leaving format checks to the validation rules.
///
/// `null` reads as absent, numbers and booleans as their JSON text. Use with
/// `#[serde(default, deserialize_with = "lenient_text")]` on `Option<String>`.
pub fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(text)) => Ok(Some(text)),
        Some(Value::Number(number)) => Ok(Some(number.to_string())),
        Some(Value::Bool(flag)) => Ok(Some(flag.to_string())),
        Some(other) => Err(de::Error::custom(format!(
            "invalid type: {other}, expected a string or number"
        ))),
    }
}
