//! Shop inventory and the end-of-day run across all items.

use crate::event::AgingEvent;
use crate::item::Item;
use crate::updater::create_updater;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// All items currently on the shelves.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Inventory {
    #[serde(default)]
    pub items: Vec<Item>,
}

impl Inventory {
    /// Create an inventory from a list of items.
    #[must_use]
    pub const fn new(items: Vec<Item>) -> Self {
        Self { items }
    }

    /// The classic nine-item stock used by the text fixture.
    #[must_use]
    pub fn standard_fixture() -> Self {
        Self::new(vec![
            Item::new("+5 Dexterity Vest", 10, 20),
            Item::new("Aged Brie", 2, 0),
            Item::new("Elixir of the Mongoose", 5, 7),
            Item::new("Sulfuras, Hand of Ragnaros", 0, 80),
            Item::new("Sulfuras, Hand of Ragnaros", -1, 80),
            Item::new("Backstage passes to a TAFKAL80ETC concert", 15, 20),
            Item::new("Backstage passes to a TAFKAL80ETC concert", 10, 49),
            Item::new("Backstage passes to a TAFKAL80ETC concert", 5, 49),
            Item::new("Conjured Mana Cake", 3, 6),
        ])
    }

    /// Add an item.
    pub fn push(&mut self, item: Item) {
        self.items.push(item);
    }

    /// Iterate over the items.
    pub fn iter(&self) -> std::slice::Iter<'_, Item> {
        self.items.iter()
    }

    /// Number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if there are no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// First item with exactly this name.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.name == name)
    }

    /// Age every item by one day.
    pub fn update_quality(&mut self) {
        self.advance(1);
    }

    /// Age every item by `days` days, one whole-shop day at a time.
    pub fn advance(&mut self, days: u32) {
        for day in 1..=days {
            for item in &mut self.items {
                create_updater(item).advance(1);
                trace!(day, item = %item, "Aged item");
            }
        }
    }

    /// Age every item by `days` days and collect the resulting events.
    ///
    /// Events are ordered by day, then by item position.
    pub fn advance_recorded(&mut self, days: u32) -> Vec<AgingEvent> {
        let mut events = Vec::new();

        for day in 1..=days {
            for item in &mut self.items {
                let mut day_events = create_updater(item).advance_recorded(1);
                for event in &mut day_events {
                    event.day = day;
                }
                trace!(day, item = %item, changes = day_events.len(), "Aged item");
                events.extend(day_events);
            }
        }

        events
    }
}

impl<'a> IntoIterator for &'a Inventory {
    type Item = &'a Item;
    type IntoIter = std::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl FromIterator<Item> for Inventory {
    fn from_iter<I: IntoIterator<Item = Item>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
