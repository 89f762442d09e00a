//! Request extractors whose rejections render as [`AppError`] JSON bodies.
//!
//! Use these in place of the axum extractors of the same name so a bad body,
//! query string or id produces the same `{ "error", "code" }` shape as every
//! other failure.

use axum::extract::{FromRequest, FromRequestParts};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::error::AppError;

/// JSON request body / response payload.
///
/// Malformed JSON, missing fields, wrong types, and a missing
/// `Content-Type: application/json` header all reject with a 400.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct Json<T>(pub T);

impl<T: Serialize> IntoResponse for Json<T> {
    fn into_response(self) -> Response {
        axum::Json(self.0).into_response()
    }
}

/// Path parameters.
///
/// A segment that does not parse as the expected type (e.g. a non-UUID id)
/// rejects with a 404, since no resource can live at that path.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct Path<T>(pub T);

/// Query string parameters. An unparseable query rejects with a 400.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct Query<T>(pub T);
