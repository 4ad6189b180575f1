//! ID validation and document filename generation endpoint.
//!
//! One POST endpoint runs the whole pipeline: decode the request, validate
//! the ID number, validate the embedded birth date, then compute the age
//! and the generated filename list. GET serves the static form page.

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
    Json, Router,
};
use bytes::Bytes;
use chrono::Utc;
use idstem_id::{completed_years, document_names, CitizenId};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Error message for structural or checksum failures.
const INVALID_ID_MESSAGE: &str = "请输入有效的18位身份证号码";

/// Error message for a checksum-valid ID with an impossible birth date.
const INVALID_BIRTH_DATE_MESSAGE: &str = "身份证号码中的出生日期无效";

/// Static form page, embedded at compile time.
const INDEX_PAGE: &str = include_str!("../../static/index.html");

/// Create the form page and generation routes.
pub fn routes() -> Router {
    Router::new().route("/", get(index).post(generate))
}

// =============================================================================
// Request/Response Types
// =============================================================================

/// Request to validate an ID number and generate filename stems.
#[derive(Debug, Default, Deserialize)]
pub struct GenerateRequest {
    /// The candidate 18-character ID number. Missing field is treated as
    /// an empty string, which fails validation.
    #[serde(default)]
    pub id_number: String,
}

/// Successful generation response.
#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    /// The 12 generated filename stems, in catalog order.
    pub ids: Vec<String>,

    /// The holder's age in completed years, as of today.
    pub age: u32,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable message.
    pub error: String,
}

// =============================================================================
// Handlers
// =============================================================================

/// Decode the request body as JSON, falling back to form encoding.
///
/// An empty or undecodable body yields the default request (empty
/// `id_number`), which then fails validation like any other bad input.
fn decode_request(body: &[u8]) -> GenerateRequest {
    serde_json::from_slice(body)
        .or_else(|_| serde_urlencoded::from_bytes(body))
        .unwrap_or_default()
}

/// Serve the static form page.
///
/// GET /
async fn index() -> Html<&'static str> {
    Html(INDEX_PAGE)
}

/// Validate an ID number and generate the document filename list.
///
/// POST /
async fn generate(body: Bytes) -> Response {
    let req = decode_request(&body);

    let id = match CitizenId::parse(&req.id_number) {
        Ok(id) => id,
        Err(err) => {
            debug!(error = %err, "rejected ID number");
            return bad_request(INVALID_ID_MESSAGE);
        }
    };

    let birth = match id.birth_date() {
        Ok(birth) => birth,
        Err(err) => {
            debug!(error = %err, "rejected embedded birth date");
            return bad_request(INVALID_BIRTH_DATE_MESSAGE);
        }
    };

    let age = completed_years(birth, Utc::now().date_naive());
    let ids = document_names(&id);

    (StatusCode::OK, Json(GenerateResponse { ids, age })).into_response()
}

fn bad_request(message: &str) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: message.to_owned(),
        }),
    )
        .into_response()
}
