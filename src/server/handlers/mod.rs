pub mod cache;
pub mod health;
pub mod insights;
pub mod league;
pub mod metrics;

use crate::error::{PuckError, Result};
use crate::model::League;

/// Parse the `{league}` path segment.
pub(crate) fn parse_league(raw: &str) -> Result<League> {
    raw.parse().map_err(PuckError::InvalidRequest)
}
