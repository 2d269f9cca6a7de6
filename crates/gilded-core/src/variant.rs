//! Rule selection: which aging rule applies to an item.

use serde::{Deserialize, Serialize};

/// Aging rule applied to an item, chosen once from its name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Variant {
    /// Loses one quality a day, two once expired.
    Normal,
    /// Gains one quality a day.
    AgedBrie,
    /// Legendary; never sold and never ages.
    Sulfuras,
    /// Gains faster as the concert nears, worthless after it.
    BackstagePasses,
    /// Loses two quality a day.
    Conjured,
}

/// Name prefixes in match priority order. Anything else is `Normal`.
const PREFIXES: &[(&str, Variant)] = &[
    ("Aged Brie", Variant::AgedBrie),
    ("Backstage passes", Variant::BackstagePasses),
    ("Sulfuras", Variant::Sulfuras),
    ("Conjured", Variant::Conjured),
];

impl Variant {
    /// Every variant, in declaration order.
    pub const ALL: [Self; 5] = [
        Self::Normal,
        Self::AgedBrie,
        Self::Sulfuras,
        Self::BackstagePasses,
        Self::Conjured,
    ];

    /// Select the variant for an item name.
    ///
    /// Matching is by prefix, first match wins. Unknown names are `Normal`.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        PREFIXES
            .iter()
            .find(|(prefix, _)| name.starts_with(prefix))
            .map_or(Self::Normal, |&(_, variant)| variant)
    }

    /// Whether a day passing decrements `sell_in`.
    #[must_use]
    pub const fn advances_sell_in(self) -> bool {
        !matches!(self, Self::Sulfuras)
    }

    /// Whether `quality` may be written at all.
    #[must_use]
    pub const fn quality_is_mutable(self) -> bool {
        !matches!(self, Self::Sulfuras)
    }

    /// Neither `sell_in` nor `quality` ever changes.
    #[must_use]
    pub const fn is_sealed(self) -> bool {
        !self.advances_sell_in() && !self.quality_is_mutable()
    }
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Normal => write!(f, "NORMAL"),
            Self::AgedBrie => write!(f, "AGED_BRIE"),
            Self::Sulfuras => write!(f, "SULFURAS"),
            Self::BackstagePasses => write!(f, "BACKSTAGE_PASSES"),
            Self::Conjured => write!(f, "CONJURED"),
        }
    }
}
