//! Shared response bodies for API handlers.
//!
//! Deals are returned as bare JSON (objects or arrays) with no envelope.
//! Endpoints that have nothing to return but an acknowledgement use
//! [`MessageResponse`].

use serde::Serialize;

/// `{ "message": "..." }` acknowledgement body.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}
