use axum::extract::rejection::JsonRejection;
use axum::extract::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::Value as JsonValue;
use std::borrow::Cow;

#[derive(Debug, serde::Serialize, utoipa::ToSchema)]
pub(crate) struct ServerError {
    #[serde(skip)]
    pub(crate) code: StatusCode,
    pub message: Cow<'static, str>,
    #[schema(value_type = Object)]
    pub details: Option<JsonValue>,
}

impl ServerError {
    pub(crate) fn new(code: StatusCode, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    pub(crate) fn unprocessable(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(StatusCode::UNPROCESSABLE_ENTITY, message)
    }

    pub(crate) fn not_found() -> Self {
        Self::new(StatusCode::NOT_FOUND, "template not found")
    }

    pub(crate) fn details(mut self, details: JsonValue) -> Self {
        self.details = Some(details);
        self
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> axum::response::Response {
        metrics::counter!("request_error", "code" => self.code.as_u16().to_string()).increment(1);
        (self.code, Json(self)).into_response()
    }
}

impl From<template_registry_store::Error> for ServerError {
    fn from(error: template_registry_store::Error) -> Self {
        use template_registry_store::Error;

        match error {
            Error::EmptyName => ServerError::unprocessable(error.to_string()),
            Error::NotFound(name) => {
                ServerError::not_found().details(serde_json::json!({ "name": name }))
            }
        }
    }
}

/// A body that can't be read keeps the status given by axum (413 when too
/// large), any other rejection is a malformed body.
impl From<JsonRejection> for ServerError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!("invalid request body: {rejection}");
        let error = match rejection {
            JsonRejection::BytesRejection(ref inner) => {
                ServerError::new(inner.status(), "unable to read request body")
            }
            _ => ServerError::unprocessable("invalid request body"),
        };
        error.details(serde_json::json!({ "reason": rejection.body_text() }))
    }
}
