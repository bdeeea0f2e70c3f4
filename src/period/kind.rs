use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::warn;

use crate::errors::PeriodError;

/// How often a budget window repeats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PeriodKind {
    Daily,
    Weekly,
    #[default]
    Monthly,
    HalfYearly,
    Yearly,
}

impl PeriodKind {
    /// The wire tag used in stored budgets and client requests.
    pub fn as_tag(&self) -> &'static str {
        match self {
            PeriodKind::Daily => "daily",
            PeriodKind::Weekly => "weekly",
            PeriodKind::Monthly => "monthly",
            PeriodKind::HalfYearly => "half_yearly",
            PeriodKind::Yearly => "yearly",
        }
    }

    /// Parses a tag, treating anything unrecognized as monthly.
    ///
    /// Stored budgets may carry tags written by newer or older releases; a
    /// window is still produced for them, so unknown tags degrade to the
    /// monthly default instead of erroring.
    pub fn from_tag(tag: &str) -> PeriodKind {
        match tag.parse() {
            Ok(kind) => kind,
            Err(_) => {
                warn!("unrecognized period kind `{}`, defaulting to monthly", tag);
                PeriodKind::Monthly
            }
        }
    }
}

impl FromStr for PeriodKind {
    type Err = PeriodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "daily" => Ok(PeriodKind::Daily),
            "weekly" => Ok(PeriodKind::Weekly),
            "monthly" => Ok(PeriodKind::Monthly),
            "half_yearly" => Ok(PeriodKind::HalfYearly),
            "yearly" => Ok(PeriodKind::Yearly),
            other => Err(PeriodError::UnknownKind(other.to_string())),
        }
    }
}

impl fmt::Display for PeriodKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}

impl Serialize for PeriodKind {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_tag())
    }
}

impl<'de> Deserialize<'de> for PeriodKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let tag = String::deserialize(deserializer)?;
        Ok(PeriodKind::from_tag(&tag))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_round_trip_through_strict_parse() {
        for kind in [
            PeriodKind::Daily,
            PeriodKind::Weekly,
            PeriodKind::Monthly,
            PeriodKind::HalfYearly,
            PeriodKind::Yearly,
        ] {
            assert_eq!(kind.as_tag().parse::<PeriodKind>().unwrap(), kind);
        }
    }

    #[test]
    fn strict_parse_rejects_unknown_tags() {
        assert!("quarterly".parse::<PeriodKind>().is_err());
        assert!("".parse::<PeriodKind>().is_err());
    }

    #[test]
    fn lossy_parse_defaults_unknown_tags_to_monthly() {
        assert_eq!(PeriodKind::from_tag("quarterly"), PeriodKind::Monthly);
        assert_eq!(PeriodKind::from_tag("fortnightly"), PeriodKind::Monthly);
        assert_eq!(PeriodKind::from_tag("weekly"), PeriodKind::Weekly);
    }

    #[test]
    fn serde_uses_wire_tags() {
        let json = serde_json::to_string(&PeriodKind::HalfYearly).unwrap();
        assert_eq!(json, "\"half_yearly\"");
        let parsed: PeriodKind = serde_json::from_str("\"daily\"").unwrap();
        assert_eq!(parsed, PeriodKind::Daily);
    }

    #[test]
    fn serde_degrades_unknown_tags_to_monthly() {
        let parsed: PeriodKind = serde_json::from_str("\"biweekly\"").unwrap();
        assert_eq!(parsed, PeriodKind::Monthly);
    }
}
