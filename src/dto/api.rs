use serde::{Deserialize, Serialize};

/// Error body returned by every failing endpoint.
///
/// `error` is a machine-readable kind (`not_found`, `access_denied`,
/// `invalid_state`, `invalid_input`, `conflict`, `internal`), `message` the
/// human-readable reason.
#[derive(Serialize, Deserialize)]
pub struct ErrorDto {
    pub error: String,
    pub message: String,
}
