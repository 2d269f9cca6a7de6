//! Aging engine.
//!
//! Each day an item first loses one day of `sell_in`, then its variant's
//! quality rule runs against the already-decremented `sell_in`. Quality is
//! only ever written through [`Updater::set_quality`], which clamps to
//! `QUALITY_MIN..=QUALITY_MAX`.

use crate::event::AgingEvent;
use crate::item::Item;
use crate::variant::Variant;

/// Lowest quality a non-legendary item can hold.
pub const QUALITY_MIN: i32 = 0;
/// Highest quality a non-legendary item can hold.
pub const QUALITY_MAX: i32 = 50;

/// Clamp a quality value into `QUALITY_MIN..=QUALITY_MAX`.
#[must_use]
pub const fn clamp_quality(value: i32) -> i32 {
    if value < QUALITY_MIN {
        QUALITY_MIN
    } else if value > QUALITY_MAX {
        QUALITY_MAX
    } else {
        value
    }
}

/// What a variant does to quality on one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QualityStep {
    /// Leave quality alone.
    Keep,
    /// Relative change, refused at the ceiling and, for decrements, at the floor.
    Change(i32),
    /// Absolute set, always applied (clamped) while quality is mutable.
    Set(i32),
}

/// The daily quality rule for `variant`, given the post-decrement `sell_in`.
#[must_use]
pub const fn day_rule(variant: Variant, sell_in: i32) -> QualityStep {
    match variant {
        Variant::Normal if sell_in < 0 => QualityStep::Change(-2),
        Variant::Normal => QualityStep::Change(-1),
        Variant::AgedBrie => QualityStep::Change(1),
        Variant::Sulfuras => QualityStep::Keep,
        Variant::BackstagePasses if sell_in < 0 => QualityStep::Set(0),
        Variant::BackstagePasses if sell_in < 6 => QualityStep::Change(3),
        Variant::BackstagePasses if sell_in < 11 => QualityStep::Change(2),
        Variant::BackstagePasses => QualityStep::Change(1),
        Variant::Conjured => QualityStep::Change(-2),
    }
}

/// Binds one exclusively borrowed item to its aging rule.
#[derive(Debug)]
pub struct Updater<'a> {
    item: &'a mut Item,
    variant: Variant,
}

/// Create the updater for an item, selecting its variant from the name.
#[must_use]
pub fn create_updater(item: &mut Item) -> Updater<'_> {
    Updater::new(item)
}

impl<'a> Updater<'a> {
    /// Wrap an item. The variant is fixed for the updater's lifetime.
    #[must_use]
    pub fn new(item: &'a mut Item) -> Self {
        let variant = item.variant();
        Self { item, variant }
    }

    /// The selected variant.
    #[must_use]
    pub const fn variant(&self) -> Variant {
        self.variant
    }

    /// The wrapped item.
    #[must_use]
    pub fn item(&self) -> &Item {
        self.item
    }

    /// Age the item by `days` days. `0` and sealed items are no-ops.
    pub fn advance(&mut self, days: u32) {
        if self.variant.is_sealed() {
            return;
        }

        for _ in 0..days {
            self.age_one_day();
        }
    }

    /// Age exactly like [`Updater::advance`], returning what changed on each day.
    pub fn advance_recorded(&mut self, days: u32) -> Vec<AgingEvent> {
        let mut events = Vec::new();
        if self.variant.is_sealed() {
            return events;
        }

        for day in 1..=days {
            let sell_in_before = self.item.sell_in;
            let quality_before = self.item.quality;

            let step = self.age_one_day();

            let name = self.item.name.as_str();
            let (sell_in, quality) = (self.item.sell_in, self.item.quality);

            if sell_in != sell_in_before {
                events.push(AgingEvent::sell_in_changed(name, day, sell_in_before, sell_in));
                if sell_in_before >= 0 && sell_in < 0 {
                    events.push(AgingEvent::expired(name, day, sell_in_before, sell_in));
                }
            }

            if quality != quality_before {
                let event = if matches!(step, QualityStep::Set(_)) {
                    AgingEvent::quality_reset(name, day, quality_before, quality)
                } else {
                    AgingEvent::quality_changed(name, day, quality_before, quality)
                };
                events.push(event);
            }
        }

        events
    }

    fn age_one_day(&mut self) -> QualityStep {
        self.change_sell_in(-1);

        let step = day_rule(self.variant, self.item.sell_in);
        match step {
            QualityStep::Keep => {}
            QualityStep::Change(delta) => self.change_quality(delta),
            QualityStep::Set(value) => self.set_quality(value),
        }
        step
    }

    /// Set quality to `value`, clamped. No-op when quality is immutable.
    fn set_quality(&mut self, value: i32) {
        if !self.variant.quality_is_mutable() {
            return;
        }
        self.item.quality = clamp_quality(value);
    }

    /// Shift quality by `delta`.
    ///
    /// A quality at (or above) the ceiling is frozen against every delta. A
    /// quality at (or below) the floor is frozen against decrements only.
    /// `set_quality` can still move either.
    fn change_quality(&mut self, delta: i32) {
        if !self.variant.quality_is_mutable() {
            return;
        }

        let quality = self.item.quality;
        let frozen = quality >= QUALITY_MAX || (delta < 0 && quality <= QUALITY_MIN);
        if frozen {
            return;
        }

        self.set_quality(quality.saturating_add(delta));
    }

    /// Shift `sell_in` by `delta`. Unbounded below.
    fn change_sell_in(&mut self, delta: i32) {
        if !self.variant.advances_sell_in() {
            return;
        }
        self.item.sell_in = self.item.sell_in.saturating_add(delta);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::EventType;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn aged(name: &str, sell_in: i32, quality: i32, days: u32) -> (i32, i32) {
        let mut item = Item::new(name, sell_in, quality);
        create_updater(&mut item).advance(days);
        (item.sell_in, item.quality)
    }

    #[test]
    fn test_clamp_quality() {
        assert_eq!(clamp_quality(-3), 0);
        assert_eq!(clamp_quality(0), 0);
        assert_eq!(clamp_quality(27), 27);
        assert_eq!(clamp_quality(50), 50);
        assert_eq!(clamp_quality(52), 50);
    }

    #[test]
    fn test_normal_item() {
        assert_eq!(aged("+5 Dexterity Vest", 10, 20, 1), (9, 19));
        assert_eq!(aged("Elixir of the Mongoose", 0, 5, 1), (-1, 3));
        assert_eq!(aged("Elixir of the Mongoose", 1, 5, 2), (-1, 2));
        // never below zero
        assert_eq!(aged("Elixir of the Mongoose", -4, 1, 1), (-5, 0));
        assert_eq!(aged("Elixir of the Mongoose", 3, 0, 10), (-7, 0));
    }

    #[test]
    fn test_aged_brie() {
        assert_eq!(aged("Aged Brie", 2, 0, 1), (1, 1));
        assert_eq!(aged("Aged Brie", -3, 10, 2), (-5, 12));
        assert_eq!(aged("Aged Brie", 2, 49, 5), (-3, 50));
        assert_eq!(aged("Aged Brie", 2, 50, 1), (1, 50));
    }

    #[test]
    fn test_sulfuras_never_changes() {
        assert_eq!(aged("Sulfuras, Hand of Ragnaros", 0, 80, 5), (0, 80));
        assert_eq!(aged("Sulfuras, Hand of Ragnaros", -1, 80, 100), (-1, 80));
    }

    #[test]
    fn test_backstage_passes() {
        let name = "Backstage passes to a TAFKAL80ETC concert";
        assert_eq!(aged(name, 15, 20, 1), (14, 21));
        // 11 decrements to 10 before the rule runs
        assert_eq!(aged(name, 11, 20, 1), (10, 22));
        assert_eq!(aged(name, 6, 20, 1), (5, 23));
        assert_eq!(aged(name, 5, 49, 1), (4, 50));
        assert_eq!(aged(name, 1, 20, 1), (0, 23));
        assert_eq!(aged(name, 0, 20, 1), (-1, 0));
    }

    #[test]
    fn test_backstage_reset_from_ceiling() {
        // relative change is frozen at 50, the absolute reset is not
        let name = "Backstage passes to a TAFKAL80ETC concert";
        assert_eq!(aged(name, 3, 50, 1), (2, 50));
        assert_eq!(aged(name, 0, 50, 1), (-1, 0));
    }

    #[test]
    fn test_ceiling_freezes_decay() {
        assert_eq!(aged("+5 Dexterity Vest", 10, 50, 1), (9, 50));
        assert_eq!(aged("Conjured Mana Cake", 10, 50, 1), (9, 50));
        assert_eq!(aged("Elixir of the Mongoose", 0, 50, 3), (-3, 50));
        // the floor only blocks decrements
        assert_eq!(aged("Aged Brie", 2, 0, 1), (1, 1));
        assert_eq!(aged("+5 Dexterity Vest", 10, 0, 1), (9, 0));
    }

    #[test]
    fn test_out_of_range_start() {
        // above the ceiling nothing moves quality
        assert_eq!(aged("Aged Brie", 5, 60, 2), (3, 60));
        assert_eq!(aged("+5 Dexterity Vest", 5, 60, 2), (3, 60));
        // below the floor only increments apply, clamped
        assert_eq!(aged("+5 Dexterity Vest", 5, -3, 1), (4, -3));
        assert_eq!(aged("Aged Brie", 5, -3, 1), (4, 0));
        // the backstage reset still clamps
        assert_eq!(aged("Backstage passes to a TAFKAL80ETC concert", 0, 60, 1), (-1, 0));
    }

    #[test]
    fn test_conjured() {
        assert_eq!(aged("Conjured Mana Cake", 3, 6, 1), (2, 4));
        // no extra decay after expiry
        assert_eq!(aged("Conjured Mana Cake", 0, 6, 1), (-1, 4));
        assert_eq!(aged("Conjured Mana Cake", 0, 1, 1), (-1, 0));
    }

    #[test]
    fn test_unknown_name_is_normal() {
        let mut item = Item::new("Mystery Box", 1, 1);
        let updater = create_updater(&mut item);
        assert_eq!(updater.variant(), Variant::Normal);
    }

    #[test]
    fn test_advance_zero_days() {
        for name in ["Aged Brie", "Conjured Mana Cake", "+5 Dexterity Vest"] {
            assert_eq!(aged(name, 4, 10, 0), (4, 10));
        }
    }

    #[test]
    fn test_day_rule_table() {
        assert_eq!(day_rule(Variant::Normal, 0), QualityStep::Change(-1));
        assert_eq!(day_rule(Variant::Normal, -1), QualityStep::Change(-2));
        assert_eq!(day_rule(Variant::Sulfuras, -1), QualityStep::Keep);
        assert_eq!(day_rule(Variant::BackstagePasses, 11), QualityStep::Change(1));
        assert_eq!(day_rule(Variant::BackstagePasses, 10), QualityStep::Change(2));
        assert_eq!(day_rule(Variant::BackstagePasses, 5), QualityStep::Change(3));
        assert_eq!(day_rule(Variant::BackstagePasses, -1), QualityStep::Set(0));
        assert_eq!(day_rule(Variant::Conjured, -10), QualityStep::Change(-2));
    }

    #[test]
    fn test_advance_recorded() {
        let mut item = Item::new("Backstage passes to a TAFKAL80ETC concert", 1, 20);
        let events = create_updater(&mut item).advance_recorded(2);

        assert_eq!(item.sell_in, -1);
        assert_eq!(item.quality, 0);

        let types: Vec<(u32, EventType)> = events.iter().map(|e| (e.day, e.event_type)).collect();
        assert_eq!(
            types,
            vec![
                (1, EventType::SellInChanged),
                (1, EventType::QualityChanged),
                (2, EventType::SellInChanged),
                (2, EventType::Expired),
                (2, EventType::QualityReset),
            ]
        );
        assert_eq!(events[4].payload.from, 23);
        assert_eq!(events[4].payload.to, 0);
    }

    #[test]
    fn test_advance_recorded_skips_unchanged_quality() {
        let mut item = Item::new("Aged Brie", 5, 50);
        let events = create_updater(&mut item).advance_recorded(1);

        assert_eq!(events.len(), 1);
        assert_eq!(events[0].event_type, EventType::SellInChanged);
    }

    #[test]
    fn test_advance_recorded_sealed() {
        let mut item = Item::new("Sulfuras, Hand of Ragnaros", 0, 80);
        assert!(create_updater(&mut item).advance_recorded(3).is_empty());
        assert_eq!(item, Item::new("Sulfuras, Hand of Ragnaros", 0, 80));
    }

    fn any_name() -> impl Strategy<Value = String> {
        prop_oneof![
            Just("+5 Dexterity Vest".to_string()),
            Just("Aged Brie".to_string()),
            Just("Backstage passes to a TAFKAL80ETC concert".to_string()),
            Just("Conjured Mana Cake".to_string()),
            "[a-zA-Z ]{0,20}",
        ]
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: quality of a non-legendary item stays within bounds.
        #[test]
        fn quality_stays_in_bounds(
            name in any_name(),
            sell_in in -30i32..30,
            quality in QUALITY_MIN..=QUALITY_MAX,
            days in 0u32..60,
        ) {
            prop_assume!(!Variant::from_name(&name).is_sealed());
            let mut item = Item::new(name, sell_in, quality);
            create_updater(&mut item).advance(days);

            prop_assert!((QUALITY_MIN..=QUALITY_MAX).contains(&item.quality));
            prop_assert_eq!(item.sell_in, sell_in - i32::try_from(days).unwrap());
        }

        /// Property: legendary items never change.
        #[test]
        fn legendary_is_frozen(
            suffix in "[a-zA-Z ,]{0,20}",
            sell_in in any::<i32>(),
            quality in any::<i32>(),
            days in any::<u32>(),
        ) {
            let mut item = Item::new(format!("Sulfuras{suffix}"), sell_in, quality);
            create_updater(&mut item).advance(days);

            prop_assert_eq!(item.sell_in, sell_in);
            prop_assert_eq!(item.quality, quality);
        }

        /// Property: advancing n days equals advancing one day n times.
        #[test]
        fn advance_is_day_by_day(
            name in any_name(),
            sell_in in -30i32..30,
            quality in QUALITY_MIN..=QUALITY_MAX,
            days in 0u32..30,
        ) {
            let mut bulk = Item::new(name.clone(), sell_in, quality);
            create_updater(&mut bulk).advance(days);

            let mut stepped = Item::new(name, sell_in, quality);
            for _ in 0..days {
                create_updater(&mut stepped).advance(1);
            }

            prop_assert_eq!(bulk, stepped);
        }
    }
}
