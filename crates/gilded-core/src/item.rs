//! Shop item model.

use crate::error::{CoreError, Result};
use crate::updater::{QUALITY_MAX, QUALITY_MIN};
use crate::variant::Variant;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A single stock item on the shelf.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Item {
    /// Display name. Also selects the aging rule.
    pub name: String,

    /// Days left to sell the item. Negative once expired.
    pub sell_in: i32,

    /// Perceived value, 0..=50 for everything but legendary items.
    pub quality: i32,
}

impl Item {
    /// Create a new item.
    #[must_use]
    pub fn new(name: impl Into<String>, sell_in: i32, quality: i32) -> Self {
        Self {
            name: name.into(),
            sell_in,
            quality,
        }
    }

    /// The aging rule for this item's name.
    #[must_use]
    pub fn variant(&self) -> Variant {
        Variant::from_name(&self.name)
    }

    /// Check if the sell-by date has passed.
    #[must_use]
    pub const fn is_expired(&self) -> bool {
        self.sell_in < 0
    }

    /// Check the item against the model rules.
    ///
    /// # Errors
    /// Returns `CoreError::Validation` for a blank name, or for a quality
    /// outside 0..=50 on an item whose quality can change.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(CoreError::Validation("item name is empty".to_string()));
        }

        let variant = self.variant();
        if variant.quality_is_mutable() && !(QUALITY_MIN..=QUALITY_MAX).contains(&self.quality) {
            return Err(CoreError::Validation(format!(
                "quality {} of '{}' is outside {QUALITY_MIN}..={QUALITY_MAX}",
                self.quality, self.name
            )));
        }

        Ok(())
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.name, self.sell_in, self.quality)
    }
}

impl FromStr for Item {
    type Err = CoreError;

    /// Parse the `name, sellIn, quality` form produced by `Display`.
    ///
    /// The name may itself contain commas; the last two fields are the numbers.
    fn from_str(input: &str) -> Result<Self> {
        let mut parts = input.rsplitn(3, ',');
        let (Some(quality), Some(sell_in), Some(name)) = (parts.next(), parts.next(), parts.next())
        else {
            return Err(CoreError::InvalidItem(format!(
                "expected 'name, sellIn, quality', got '{input}'"
            )));
        };

        let name = name.trim();
        if name.is_empty() {
            return Err(CoreError::InvalidItem(format!("missing name in '{input}'")));
        }

        let sell_in = sell_in
            .trim()
            .parse::<i32>()
            .map_err(|e| CoreError::InvalidItem(format!("bad sellIn '{}': {e}", sell_in.trim())))?;
        let quality = quality
            .trim()
            .parse::<i32>()
            .map_err(|e| CoreError::InvalidItem(format!("bad quality '{}': {e}", quality.trim())))?;

        Ok(Self::new(name, sell_in, quality))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_new_item() {
        let item = Item::new("Aged Brie", 2, 0);

        assert_eq!(item.name, "Aged Brie");
        assert_eq!(item.sell_in, 2);
        assert_eq!(item.quality, 0);
        assert_eq!(item.variant(), Variant::AgedBrie);
        assert!(!item.is_expired());
    }

    #[test]
    fn test_display() {
        let item = Item::new("Sulfuras, Hand of Ragnaros", -1, 80);
        assert_eq!(item.to_string(), "Sulfuras, Hand of Ragnaros, -1, 80");
    }

    #[test]
    fn test_parse() {
        let item: Item = "Sulfuras, Hand of Ragnaros, -1, 80".parse().unwrap();
        assert_eq!(item, Item::new("Sulfuras, Hand of Ragnaros", -1, 80));

        let item: Item = "  Elixir of the Mongoose ,5,7 ".parse().unwrap();
        assert_eq!(item, Item::new("Elixir of the Mongoose", 5, 7));
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            "Aged Brie, 2".parse::<Item>(),
            Err(CoreError::InvalidItem(_))
        ));
        assert!(matches!(
            " , 2, 3".parse::<Item>(),
            Err(CoreError::InvalidItem(_))
        ));
        assert!(matches!(
            "Aged Brie, two, 3".parse::<Item>(),
            Err(CoreError::InvalidItem(_))
        ));
        assert!(matches!(
            "Aged Brie, 2, 3.5".parse::<Item>(),
            Err(CoreError::InvalidItem(_))
        ));
    }

    #[test]
    fn test_validate() {
        assert!(Item::new("+5 Dexterity Vest", 10, 20).validate().is_ok());
        assert!(Item::new("+5 Dexterity Vest", 10, 0).validate().is_ok());
        assert!(Item::new("+5 Dexterity Vest", 10, 50).validate().is_ok());
        assert!(Item::new("Sulfuras, Hand of Ragnaros", 0, 80).validate().is_ok());

        assert!(matches!(
            Item::new("+5 Dexterity Vest", 10, 51).validate(),
            Err(CoreError::Validation(_))
        ));
        assert!(matches!(
            Item::new("Aged Brie", 10, -1).validate(),
            Err(CoreError::Validation(_))
        ));
        assert!(matches!(
            Item::new("   ", 10, 5).validate(),
            Err(CoreError::Validation(_))
        ));
    }
}
