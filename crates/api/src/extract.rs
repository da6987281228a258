//! Request extractors.

use axum::{
    Json,
    body::Bytes,
    extract::{FromRequest, Request},
    http::header::CONTENT_TYPE,
};
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// A JSON body where an absent body counts as the default value.
///
/// A request without a JSON content type, or with an empty body, yields
/// `T::default()`. A JSON body that fails to parse is a validation error.
#[derive(Debug)]
pub struct JsonOrDefault<T>(pub T);

impl<S, T> FromRequest<S> for JsonOrDefault<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Default,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_json = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|value| value.to_ascii_lowercase().contains("json"));

        let bytes = Bytes::from_request(req, state).await.map_err(|rejection| {
            AppError::Validation(format!("Invalid request body: {}", rejection.body_text()))
        })?;

        if !is_json || bytes.is_empty() {
            return Ok(Self(T::default()));
        }

        let Json(value) = Json::<T>::from_bytes(&bytes)?;
        Ok(Self(value))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::{body::Body, http::StatusCode};
    use serde::Deserialize;

    use super::*;

    #[derive(Debug, Default, Deserialize, PartialEq, Eq)]
    struct Payload {
        #[serde(default)]
        comment: Option<String>,
    }

    async fn extract(content_type: Option<&str>, body: &'static str) -> Result<Payload, AppError> {
        let mut builder = axum::http::Request::builder().method("POST").uri("/");
        if let Some(content_type) = content_type {
            builder = builder.header(CONTENT_TYPE, content_type);
        }
        let request = builder.body(Body::from(body)).unwrap();

        JsonOrDefault::<Payload>::from_request(request, &())
            .await
            .map(|JsonOrDefault(payload)| payload)
    }

    #[tokio::test]
    async fn test_missing_body_is_default() {
        assert_eq!(extract(None, "").await.unwrap(), Payload::default());
        assert_eq!(
            extract(Some("application/json"), "").await.unwrap(),
            Payload::default()
        );
    }

    #[tokio::test]
    async fn test_non_json_content_type_is_default() {
        let payload = extract(Some("text/plain"), "comment=hi").await.unwrap();
        assert_eq!(payload, Payload::default());
    }

    #[tokio::test]
    async fn test_json_body_is_parsed() {
        let payload = extract(Some("application/json; charset=utf-8"), r#"{"comment":"hi"}"#)
            .await
            .unwrap();
        assert_eq!(payload.comment.as_deref(), Some("hi"));
    }

    #[tokio::test]
    async fn test_malformed_json_is_rejected() {
        let err = extract(Some("application/json"), "{\"comment\":")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }
}
