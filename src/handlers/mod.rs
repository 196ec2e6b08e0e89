pub mod exercises;
pub mod health;
pub mod users;

use crate::error::{AppError, Result};

/// Parse an integer path segment, rejecting anything else with `msg`.
fn parse_id(raw: &str, msg: &str) -> Result<i64> {
    raw.parse()
        .map_err(|_| AppError::BadRequest(msg.to_string()))
}
