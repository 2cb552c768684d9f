//! Response types for the HTTP endpoints that are not core models.
//!
//! The `GetMovements` body is `movements_core::models::movement::PagedMovements`
//! itself; nothing here wraps it.

use serde::{Deserialize, Serialize};

/// `GET /health`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub ok: bool,
    pub service: String,
    pub version: String,
}

/// Body of every non-2xx response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// `VALIDATION_ERROR` | `NOT_FOUND` | `UPSTREAM_ERROR` | `INTERNAL_ERROR`
    pub code: String,
    pub message: String,
}
