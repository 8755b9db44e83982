use serde::{Deserialize, Serialize};

/// Action the gamification service logs when a mission is completed.
///
/// The service scores by action, not by challenge, so each XP tier has its
/// own action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionId {
    #[serde(rename = "ClickEGanhe25xp")]
    Xp25,
    #[serde(rename = "ClickEGanhe")]
    Xp50,
    #[serde(rename = "ClickEGanhe75xp")]
    Xp75,
    #[serde(rename = "ClickEGanhe100xp")]
    Xp100,
    #[serde(rename = "ClickEGanhe150xp")]
    Xp150,
}

impl ActionId {
    /// Look up the action for a mission's XP value
    pub fn for_xp(xp: i64) -> Option<Self> {
        match xp {
            25 => Some(Self::Xp25),
            50 => Some(Self::Xp50),
            75 => Some(Self::Xp75),
            100 => Some(Self::Xp100),
            150 => Some(Self::Xp150),
            _ => None,
        }
    }

    /// Identifier as the service knows it
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Xp25 => "ClickEGanhe25xp",
            Self::Xp50 => "ClickEGanhe",
            Self::Xp75 => "ClickEGanhe75xp",
            Self::Xp100 => "ClickEGanhe100xp",
            Self::Xp150 => "ClickEGanhe150xp",
        }
    }
}

impl std::fmt::Display for ActionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mapped_tiers() {
        assert_eq!(ActionId::for_xp(25), Some(ActionId::Xp25));
        assert_eq!(ActionId::for_xp(50).map(|a| a.as_str()), Some("ClickEGanhe"));
        assert_eq!(ActionId::for_xp(150), Some(ActionId::Xp150));
    }

    #[test]
    fn test_unmapped_tiers() {
        assert_eq!(ActionId::for_xp(0), None);
        assert_eq!(ActionId::for_xp(60), None);
        assert_eq!(ActionId::for_xp(-25), None);
    }

    #[test]
    fn test_serializes_as_service_identifier() {
        let json = serde_json::to_string(&ActionId::Xp100).unwrap();
        assert_eq!(json, "\"ClickEGanhe100xp\"");
    }
}
