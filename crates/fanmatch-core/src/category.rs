//! The identity categories a query can be classified into and an entity
//! can be rated on.

use serde::{Deserialize, Serialize};

/// The 6 identity categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// On-pitch results and squad quality. The classifier default.
    Strength,
    /// Financial power.
    Money,
    /// Longshot / giant-killing appeal.
    UnderdogFeel,
    /// History and heritage.
    Tradition,
    /// Attacking style of play.
    AttackStyle,
    /// Star players and global profile.
    StarPower,
}

impl Category {
    /// Total number of categories.
    pub const COUNT: usize = 6;

    /// All variants for iteration.
    pub const ALL: [Category; 6] = [
        Self::Strength,
        Self::Money,
        Self::UnderdogFeel,
        Self::Tradition,
        Self::AttackStyle,
        Self::StarPower,
    ];

    /// Wire name (matching the serde rename).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Strength => "strength",
            Self::Money => "money",
            Self::UnderdogFeel => "underdog_feel",
            Self::Tradition => "tradition",
            Self::AttackStyle => "attack_style",
            Self::StarPower => "star_power",
        }
    }

    /// Parse from string (matching the serde rename).
    pub fn from_str_name(s: &str) -> Option<Self> {
        match s {
            "strength" => Some(Self::Strength),
            "money" => Some(Self::Money),
            "underdog_feel" => Some(Self::UnderdogFeel),
            "tradition" => Some(Self::Tradition),
            "attack_style" => Some(Self::AttackStyle),
            "star_power" => Some(Self::StarPower),
            _ => None,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
