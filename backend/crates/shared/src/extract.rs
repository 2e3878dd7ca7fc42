//! Request extractors that reject with [`AppError`]

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;

use crate::error::app_error::AppError;

/// JSON body extractor whose rejection is a 400 `VALIDATION` error
///
/// `axum::Json` answers a missing field or a truncated body with a plain-text
/// 422; handlers take `ValidJson<T>` so every bad body gets the same JSON
/// error shape as the rest of the API.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let axum::Json(value) = axum::Json::<T>::from_request(req, state).await?;
        Ok(Self(value))
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::validation(rejection.body_text()).with_source(rejection)
    }
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::header;
    use serde::Deserialize;

    use super::*;
    use crate::error::kind::ErrorKind;

    #[derive(Debug, Deserialize)]
    struct Login {
        username: String,
        password: String,
    }

    fn request(body: &str) -> Request {
        axum::http::Request::builder()
            .method("POST")
            .uri("/")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn extract(req: Request) -> Result<Login, AppError> {
        ValidJson::<Login>::from_request(req, &()).await.map(|ValidJson(v)| v)
    }

    #[tokio::test]
    async fn test_valid_body() {
        let login = extract(request(r#"{"username":"alice","password":"pw"}"#))
            .await
            .unwrap();
        assert_eq!(login.username, "alice");
        assert_eq!(login.password, "pw");
    }

    #[tokio::test]
    async fn test_missing_field_is_validation() {
        let err = extract(request(r#"{"username":"alice"}"#)).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert_eq!(err.status_code(), 400);
        assert!(err.message().contains("password"));
    }

    #[tokio::test]
    async fn test_truncated_body_is_validation() {
        let err = extract(request(r#"{"username":"#)).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
    }

    #[tokio::test]
    async fn test_missing_content_type_is_validation() {
        let req = axum::http::Request::builder()
            .method("POST")
            .uri("/")
            .body(Body::from(r#"{"username":"alice","password":"pw"}"#))
            .unwrap();
        let err = extract(req).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
    }
}
