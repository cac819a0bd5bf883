//! Shared response shapes.

use serde::{Deserialize, Serialize};

/// Plain acknowledgement, e.g. `{"message": "Inscripción exitosa"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Human-readable confirmation from the server.
    pub message: String,
}
