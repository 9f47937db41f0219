//! In-memory clinic data standing in for a backend.
//!
//! Every loader returns a fresh owned snapshot parsed from the JSON fixtures
//! under `crates/app/data/`. The filter functions are pure and work on any
//! slice, so pages filter whatever snapshot they hold.

mod admin;
mod appointments;
mod dashboard;
mod records;
mod staff;
mod wellness;

pub use admin::*;
pub use appointments::*;
pub use dashboard::*;
pub use records::*;
pub use staff::*;
pub use wellness::*;

use serde::de::DeserializeOwned;
use shared_types::AppError;

/// Option value the list filters use for "no filter".
pub const ALL_FILTER: &str = "All";

fn parse_fixture<T: DeserializeOwned>(name: &str, json: &str) -> Result<T, AppError> {
    serde_json::from_str(json).map_err(|e| {
        tracing::warn!(fixture = name, error = %e, "mock fixture failed to parse");
        AppError::decode(format!("{name}: {e}"))
    })
}

/// Case-insensitive substring match; an empty query matches everything.
pub(crate) fn matches_query(query: &str, fields: &[&str]) -> bool {
    let query = query.trim().to_lowercase();
    query.is_empty() || fields.iter().any(|f| f.to_lowercase().contains(&query))
}
