//! CLI command implementations.

use crate::output::{self, DaySnapshot, ItemSummary, OutputFormat};
use anyhow::{Context, Result};
use console::style;
use gilded_core::{EventType, Inventory, Item};
use gilded_fs::{Store, StoreConfig};
use std::path::Path;
use tracing::debug;

/// Initialize a new store.
pub fn init(path: &Path, name: Option<String>, fixture: bool, format: OutputFormat) -> Result<()> {
    let config = name.map_or_else(StoreConfig::default, StoreConfig::new);
    let store = Store::init(path, config).context("Failed to initialize store")?;

    if fixture {
        store
            .save_inventory(&Inventory::standard_fixture())
            .context("Failed to stock fixture items")?;
    }

    output::print_success(&format!("Initialized store at {}", path.display()), format)
}

/// Add an item to the inventory.
pub fn add(path: &Path, name: String, sell_in: i32, quality: i32, format: OutputFormat) -> Result<()> {
    let store = Store::open(path).context("Failed to open store")?;
    let item = store
        .add_item(Item::new(name, sell_in, quality))
        .context("Failed to add item")?;

    output::print(&ItemSummary::from(&item), format)
}

/// Add every item listed in a text file.
pub fn import(path: &Path, file: &Path, format: OutputFormat) -> Result<()> {
    let store = Store::open(path).context("Failed to open store")?;
    let content = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;

    let items = parse_item_lines(&content)?;
    let count = items.len();
    for item in items {
        store
            .add_item(item)
            .context("Failed to add item")?;
    }

    output::print_success(&format!("Imported {count} item(s)"), format)
}

/// Parse `name, sellIn, quality` lines, skipping blanks and `#` comments.
fn parse_item_lines(content: &str) -> Result<Vec<Item>> {
    content
        .lines()
        .enumerate()
        .filter(|(_, line)| {
            let line = line.trim();
            !line.is_empty() && !line.starts_with('#')
        })
        .map(|(idx, line)| {
            line.parse::<Item>()
                .with_context(|| format!("Line {}", idx + 1))
        })
        .collect()
}

/// List the inventory.
pub fn list(path: &Path, format: OutputFormat) -> Result<()> {
    let store = Store::open(path).context("Failed to open store")?;
    let items = store.list_items().context("Failed to list items")?;

    let summaries: Vec<ItemSummary> = items.iter().map(ItemSummary::from).collect();
    output::print_item_list(&summaries, format)
}

/// Show a single item.
pub fn show(path: &Path, sku: &str, format: OutputFormat) -> Result<()> {
    let store = Store::open(path).context("Failed to open store")?;
    let item = store.get_item(sku).context("Failed to get item")?;

    output::print(&ItemSummary::from(&item), format)
}

/// Age the stored inventory.
pub fn age(path: &Path, days: Option<u32>, format: OutputFormat) -> Result<()> {
    let store = Store::open(path).context("Failed to open store")?;
    let days = days.unwrap_or(store.config().aging.default_days);
    debug!(days, path = %path.display(), "Running end-of-day aging");

    let events = store.age(days).context("Failed to age inventory")?;

    if matches!(format, OutputFormat::Human) {
        let expired = events
            .iter()
            .filter(|e| e.event_type == EventType::Expired)
            .count();
        println!(
            "{}",
            style(format!("  Aged {days} day(s), {} change(s)", events.len()))
                .green()
                .bold()
        );
        if expired > 0 {
            println!("{}", style(format!("  {expired} item(s) expired")).yellow());
        }
    }

    let items = store.list_items().context("Failed to list items")?;
    let summaries: Vec<ItemSummary> = items.iter().map(ItemSummary::from).collect();
    output::print_item_list(&summaries, format)
}

/// Show aging history.
pub fn history(path: &Path, sku: Option<&str>, format: OutputFormat) -> Result<()> {
    let store = Store::open(path).context("Failed to open store")?;
    let events = store.read_events(sku).context("Failed to read events")?;

    if events.is_empty() {
        return output::print_success("No events found", format);
    }

    output::print_list(&events, format)
}

/// Age the standard fixture and snapshot it each day, day 0 included.
pub fn simulate_days(days: u32) -> Vec<DaySnapshot> {
    let mut inventory = Inventory::standard_fixture();
    let mut snapshots = Vec::new();

    for day in 0..=days {
        snapshots.push(DaySnapshot {
            day,
            items: inventory.items.clone(),
        });
        inventory.update_quality();
    }

    snapshots
}

/// Print the standard fixture day by day.
pub fn simulate(days: u32, format: OutputFormat) -> Result<()> {
    output::print_list(&simulate_days(days), format)
}
