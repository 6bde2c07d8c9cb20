//! Transport boundary: a status code plus a JSON body.
//!
//! A response is either the full payload or `{"error": "..."}`, never both.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::types::RenderPayload;

#[derive(Debug, Serialize, Deserialize)]
struct ErrorBody {
    error: String,
}

/// HTTP-shaped result of a render request.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct RenderResponse {
    pub status: u16,
    /// JSON text: the payload on success, `{"error": ...}` otherwise.
    pub body: String,
}

impl RenderResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    fn error(status: u16, message: String) -> Self {
        let body = serde_json::to_string(&ErrorBody { error: message })
            .unwrap_or_else(|_| r#"{"error":"internal error"}"#.to_string());
        Self { status, body }
    }
}

/// Turn a render outcome into a response.
pub fn respond(result: Result<RenderPayload>) -> RenderResponse {
    match result {
        Ok(payload) => match serde_json::to_string(&payload) {
            Ok(body) => RenderResponse { status: 200, body },
            Err(e) => {
                log::warn!("payload serialization failed: {e}");
                RenderResponse::error(500, format!("JSON: {e}"))
            }
        },
        Err(e) => RenderResponse::error(e.status_code(), e.to_string()),
    }
}
