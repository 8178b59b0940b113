use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which upstream API family a league is served by.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProviderKind {
    Statnet,
    Chl,
}

/// Leagues aggregated by the service
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum League {
    Shl,
    Sdhl,
    Chl,
}

impl League {
    pub const ALL: [League; 3] = [League::Shl, League::Sdhl, League::Chl];

    pub fn slug(&self) -> &'static str {
        match self {
            League::Shl => "shl",
            League::Sdhl => "sdhl",
            League::Chl => "chl",
        }
    }

    pub fn provider_kind(&self) -> ProviderKind {
        match self {
            League::Shl | League::Sdhl => ProviderKind::Statnet,
            League::Chl => ProviderKind::Chl,
        }
    }
}

impl fmt::Display for League {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for League {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "shl" => Ok(League::Shl),
            "sdhl" => Ok(League::Sdhl),
            "chl" => Ok(League::Chl),
            other => Err(format!("Unknown league: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("SHL".parse::<League>().unwrap(), League::Shl);
        assert_eq!("chl".parse::<League>().unwrap(), League::Chl);
        assert!("nhl".parse::<League>().is_err());
    }

    #[test]
    fn statnet_leagues_share_provider_kind() {
        assert_eq!(League::Shl.provider_kind(), ProviderKind::Statnet);
        assert_eq!(League::Sdhl.provider_kind(), ProviderKind::Statnet);
        assert_eq!(League::Chl.provider_kind(), ProviderKind::Chl);
    }

    #[test]
    fn serializes_as_slug() {
        assert_eq!(serde_json::to_string(&League::Sdhl).unwrap(), "\"sdhl\"");
    }
}
