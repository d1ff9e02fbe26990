//! Decode a JSON request body, reporting failures through the error envelope.
//!
//! Only the first JSON value in the body is decoded; anything after it is ignored.

use crate::error::AppError;
use async_trait::async_trait;
use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;

/// JSON body extractor for create requests. Unlike `axum::Json` it does not require a
/// `Content-Type` header, reports an empty (or all-whitespace) body as
/// [`AppError::EmptyBody`], and any decode failure as a 400 carrying the decoder's message.
#[derive(Clone, Debug)]
pub struct JsonBody<T>(pub T);

/// Same as [`JsonBody`] but without the empty-body case: an empty body is an ordinary
/// decode failure (`EOF`). Used by update.
#[derive(Clone, Debug)]
pub struct DecodedBody<T>(pub T);

async fn buffer<S: Send + Sync>(req: Request, state: &S) -> Result<Bytes, AppError> {
    Bytes::from_request(req, state)
        .await
        .map_err(|e| AppError::Rejected(e.status(), e.body_text()))
}

fn decode_first<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, AppError> {
    match serde_json::Deserializer::from_slice(bytes).into_iter::<T>().next() {
        Some(value) => value.map_err(|e| AppError::BadRequest(e.to_string())),
        None => Err(AppError::BadRequest("EOF".into())),
    }
}

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = buffer(req, state).await?;
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Err(AppError::EmptyBody);
        }
        decode_first(&bytes).map(JsonBody)
    }
}

#[async_trait]
impl<S, T> FromRequest<S> for DecodedBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = buffer(req, state).await?;
        decode_first(&bytes).map(DecodedBody)
    }
}
