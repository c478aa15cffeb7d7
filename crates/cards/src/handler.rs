use crate::models::ValidateResponse;
use crate::service::{CardError, CardService};
use axum::{
    body::Bytes,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::json;

impl IntoResponse for CardError {
    fn into_response(self) -> Response {
        let status = match self {
            CardError::InvalidInput(_) | CardError::MalformedRequest(_) => StatusCode::BAD_REQUEST,
            CardError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        };

        tracing::debug!(%status, error = %self, "request rejected");
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

pub fn cards_router() -> Router {
    Router::new().route("/validate", get(validate_card).fallback(method_not_allowed))
}

// GET with a body: clients rarely send a JSON content type, so the body is
// read raw instead of going through the `Json` extractor.
async fn validate_card(body: Bytes) -> Result<Json<ValidateResponse>, CardError> {
    let req = CardService::parse_request(&body)?;
    let resp = CardService::validate(&req)?;
    Ok(Json(resp))
}

async fn method_not_allowed() -> CardError {
    CardError::MethodNotAllowed
}
