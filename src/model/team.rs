use serde::{Deserialize, Serialize};

/// Team identity as seen by every consumer of the domain model.
///
/// `code` is the join key between games, standings and player rows.
/// Translators upper-case it; comparisons elsewhere are case-insensitive.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamInfo {
    pub code: String,
    pub external_id: String,
    pub short: String,
    pub long: String,
    pub full: String,
    /// Logo URL, empty when the provider gave no stable identifier
    pub logo: String,
}

impl TeamInfo {
    /// Case-insensitive code comparison.
    pub fn has_code(&self, code: &str) -> bool {
        self.code.eq_ignore_ascii_case(code)
    }

    /// Best available human-readable name.
    pub fn display_name(&self) -> &str {
        [&self.full, &self.long, &self.short, &self.code]
            .into_iter()
            .find(|s| !s.is_empty())
            .map(|s| s.as_str())
            .unwrap_or("")
    }
}
