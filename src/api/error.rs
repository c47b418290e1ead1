//! Error envelope and request validation for the API.
//!
//! Every error response has the shape
//! `{ "error": { "code": "...", "message": "...", "violations": [...] } }`.
//! `violations` carries field-level detail for schema failures and is omitted
//! when empty. Success responses are the bare endpoint envelopes — no
//! wrapping metadata, because response bodies must be byte-identical across
//! repeated identical requests.

use async_trait::async_trait;
use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::types::SchemaError;

/// One field-level schema violation.
#[derive(Debug, Serialize)]
pub struct FieldViolation {
    /// Path of the offending field (e.g. "project_brief.project_title")
    pub field: String,
    pub message: String,
}

/// Error detail inside [`ApiErrorResponse`].
#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub violations: Vec<FieldViolation>,
}

/// Error response: `{ "error": { "code": "...", "message": "...", ... } }`
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub error: ErrorDetail,
}

impl ApiErrorResponse {
    fn build(
        status: StatusCode,
        code: &str,
        msg: impl Into<String>,
        violations: Vec<FieldViolation>,
    ) -> Response {
        let body = Self {
            error: ErrorDetail {
                code: code.to_string(),
                message: msg.into(),
                violations,
            },
        };
        (status, axum::Json(body)).into_response()
    }

    pub fn bad_request(msg: impl Into<String>) -> Response {
        Self::build(StatusCode::BAD_REQUEST, "BAD_REQUEST", msg, Vec::new())
    }

    pub fn unprocessable(msg: impl Into<String>, violations: Vec<FieldViolation>) -> Response {
        Self::build(
            StatusCode::UNPROCESSABLE_ENTITY,
            "VALIDATION_FAILED",
            msg,
            violations,
        )
    }

    pub fn unsupported_media_type(msg: impl Into<String>) -> Response {
        Self::build(
            StatusCode::UNSUPPORTED_MEDIA_TYPE,
            "UNSUPPORTED_MEDIA_TYPE",
            msg,
            Vec::new(),
        )
    }

    pub fn internal(msg: impl Into<String>) -> Response {
        Self::build(
            StatusCode::INTERNAL_SERVER_ERROR,
            "INTERNAL_ERROR",
            msg,
            Vec::new(),
        )
    }

    pub fn service_unavailable(msg: impl Into<String>) -> Response {
        Self::build(
            StatusCode::SERVICE_UNAVAILABLE,
            "SERVICE_UNAVAILABLE",
            msg,
            Vec::new(),
        )
    }
}

/// Turn a caller-payload schema violation into a 422 with field detail.
pub fn schema_violation(field: &str, err: &SchemaError) -> Response {
    ApiErrorResponse::unprocessable(
        "request payload failed schema validation",
        vec![FieldViolation {
            field: field.to_string(),
            message: err.to_string(),
        }],
    )
}

/// JSON body extractor that reports deserialization failures through the
/// error envelope instead of axum's plain-text rejection.
///
/// Missing/mistyped fields become a 422 with a violation naming the field;
/// syntactically broken JSON becomes a 400.
pub struct AppJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for AppJson<T>
where
    axum::Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match axum::Json::<T>::from_request(req, state).await {
            Ok(axum::Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(rejection_response(rejection)),
        }
    }
}

fn rejection_response(rejection: JsonRejection) -> Response {
    match rejection {
        JsonRejection::JsonDataError(err) => {
            let message = err.body_text();
            let violations = vec![FieldViolation {
                field: field_from_serde_message(&message),
                message,
            }];
            ApiErrorResponse::unprocessable("request body failed schema validation", violations)
        }
        JsonRejection::JsonSyntaxError(err) => {
            ApiErrorResponse::bad_request(format!("malformed JSON body: {}", err.body_text()))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiErrorResponse::unsupported_media_type("expected `Content-Type: application/json`")
        }
        other => ApiErrorResponse::bad_request(other.body_text()),
    }
}

/// serde reports the offending field between backticks
/// ("missing field `project_title` at line 1 column 12").
fn field_from_serde_message(message: &str) -> String {
    message.split('`').nth(1).unwrap_or("body").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unprocessable_response_shape() {
        let resp = ApiErrorResponse::unprocessable(
            "nope",
            vec![FieldViolation {
                field: "project_title".to_string(),
                message: "missing field `project_title`".to_string(),
            }],
        );
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        let v: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(v["error"]["code"], "VALIDATION_FAILED");
        assert_eq!(v["error"]["violations"][0]["field"], "project_title");
    }

    #[tokio::test]
    async fn test_internal_omits_empty_violations() {
        let resp = ApiErrorResponse::internal("boom");
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        let v: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(v["error"]["code"], "INTERNAL_ERROR");
        assert!(v["error"].get("violations").is_none());
    }

    #[test]
    fn test_field_extracted_from_serde_message() {
        assert_eq!(
            field_from_serde_message("missing field `project_title` at line 1 column 12"),
            "project_title"
        );
        assert_eq!(field_from_serde_message("something else entirely"), "body");
    }
}
