//! JSON body extractors with `{ "message": ... }` rejections.

use crate::error::AppError;
use crate::service::{body_to_map, RawBug};
use async_trait::async_trait;
use axum::{
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde_json::{Map, Value};

/// Any JSON value. A request without a JSON content type reads as `{}`, so it reaches
/// field validation instead of failing with 415. Malformed JSON keeps axum's status code.
#[derive(Debug, Clone)]
pub struct JsonBody(pub Value);

#[async_trait]
impl<S> FromRequest<S> for JsonBody
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<Value>::from_request(req, state).await {
            Ok(Json(value)) => Ok(JsonBody(value)),
            Err(JsonRejection::MissingJsonContentType(_)) => Ok(JsonBody(Value::Object(Map::new()))),
            Err(rejection) => {
                tracing::warn!(error = %rejection.body_text(), "rejected request body");
                Err(AppError::Body {
                    status: rejection.status(),
                    message: rejection.body_text(),
                })
            }
        }
    }
}

impl JsonBody {
    pub fn into_object(self) -> Result<RawBug, AppError> {
        body_to_map(self.0)
    }
}

/// Request body that must be a JSON object; any other well-formed value is a 400.
#[derive(Debug, Clone)]
pub struct JsonObject(pub RawBug);

#[async_trait]
impl<S> FromRequest<S> for JsonObject
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        JsonBody::from_request(req, state).await?.into_object().map(JsonObject)
    }
}
