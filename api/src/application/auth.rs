use axum::{
    http::{StatusCode, request::Parts},
    extract::FromRequestParts,
    response::{IntoResponse, Response},
};
use mealplan_core::domain::common::value_objects::AccessToken;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The caller's Google OAuth access token, forwarded verbatim to
/// Gemini. The server never validates or introspects it; Google does.
pub struct RequiredToken(pub AccessToken);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("Missing Authorization header. Please provide a Bearer token.")]
    MissingHeader,
    #[error("Invalid Authorization header format. Expected 'Bearer <token>'")]
    InvalidFormat,
    #[error("Empty access token provided")]
    EmptyToken,
}

#[derive(Serialize, Deserialize)]
struct ErrorResponse {
    code: String,
    message: String,
    status: i64,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let status = StatusCode::UNAUTHORIZED;
        let error_response = ErrorResponse {
            code: "E_UNAUTHORIZED".to_string(),
            message: self.to_string(),
            status: status.as_u16() as i64,
        };

        let body = serde_json::to_string(&error_response).unwrap_or_else(|_| {
            r#"{"code":"INTERNAL_SERVER_ERROR","message":"Failed to serialize error response"}"#
                .to_string()
        });

        Response::builder()
            .status(status)
            .header("Content-Type", "application/json")
            .body(body.clone().into())
            .unwrap_or_else(|_| Response::new(body.into()))
    }
}

impl<S> FromRequestParts<S> for RequiredToken
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _: &S) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get("authorization")
            .and_then(|h| h.to_str().ok())
            .ok_or(AuthError::MissingHeader)?;

        let mut split = header.splitn(2, ' ');
        let scheme = split.next().unwrap_or_default();
        let token = split.next();

        let Some(token) = token else {
            return Err(AuthError::InvalidFormat);
        };
        if !scheme.eq_ignore_ascii_case("bearer") {
            return Err(AuthError::InvalidFormat);
        }

        let token = token.trim();
        if token.is_empty() {
            return Err(AuthError::EmptyToken);
        }

        Ok(RequiredToken(AccessToken::new(token.to_string())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    async fn extract(header: Option<&str>) -> Result<RequiredToken, AuthError> {
        let mut builder = Request::builder().uri("/");
        if let Some(value) = header {
            builder = builder.header("authorization", value);
        }
        let (mut parts, _) = builder.body(()).unwrap().into_parts();
        RequiredToken::from_request_parts(&mut parts, &()).await
    }

    #[tokio::test]
    async fn missing_header_is_rejected() {
        let err = extract(None).await.err().unwrap();
        assert_eq!(err, AuthError::MissingHeader);
        assert!(err.to_string().contains("Missing Authorization header"));
    }

    #[tokio::test]
    async fn non_bearer_scheme_is_rejected() {
        let err = extract(Some("Basic dXNlcjpwYXNz")).await.err().unwrap();
        assert_eq!(err, AuthError::InvalidFormat);
    }

    #[tokio::test]
    async fn missing_token_part_is_rejected() {
        let err = extract(Some("BearerTokenWithoutSpace")).await.err().unwrap();
        assert_eq!(err, AuthError::InvalidFormat);
    }

    #[tokio::test]
    async fn empty_token_is_rejected() {
        let err = extract(Some("Bearer   ")).await.err().unwrap();
        assert_eq!(err, AuthError::EmptyToken);
    }

    #[tokio::test]
    async fn valid_bearer_token_is_extracted() {
        let RequiredToken(token) = extract(Some("Bearer ya29.a0Example")).await.unwrap();
        assert_eq!(token.as_str(), "ya29.a0Example");
    }

    #[tokio::test]
    async fn scheme_is_case_insensitive() {
        let RequiredToken(token) = extract(Some("bearer lowercase-token")).await.unwrap();
        assert_eq!(token.as_str(), "lowercase-token");
    }
}
