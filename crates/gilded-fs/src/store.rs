//! Store management and inventory operations.

use crate::config::StoreConfig;
use crate::error::{FsError, Result};
use gilded_core::{AgingEvent, Inventory, Item};
use slug::slugify;
use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Directory name for gilded configuration.
const GILDED_DIR: &str = ".gilded";
/// Configuration file name.
const CONFIG_FILE: &str = "config.yml";
/// Inventory file name.
const INVENTORY_FILE: &str = "inventory.yml";
/// Aging history file name.
const EVENTS_FILE: &str = "events.ndjson";

/// Stock keeping key for an item name (e.g. "aged-brie").
#[must_use]
pub fn sku(name: &str) -> String {
    slugify(name)
}

/// A store keeps one shop's inventory and aging history on disk.
#[derive(Debug)]
pub struct Store {
    /// Root path of the store.
    root: PathBuf,
    /// Store configuration.
    config: StoreConfig,
}

impl Store {
    /// Initialize a new, empty store at the given path.
    ///
    /// # Errors
    /// Returns error if a store already exists or IO fails.
    pub fn init(path: impl AsRef<Path>, config: StoreConfig) -> Result<Self> {
        let root = path.as_ref().to_path_buf();
        let gilded_dir = root.join(GILDED_DIR);

        if gilded_dir.exists() {
            return Err(FsError::StoreExists(root));
        }

        fs::create_dir_all(&gilded_dir)?;

        let config_content = serde_yaml::to_string(&config)?;
        fs::write(gilded_dir.join(CONFIG_FILE), config_content)?;

        let store = Self { root, config };
        store.save_inventory(&Inventory::default())?;

        info!(path = %store.root.display(), "Initialized store");

        Ok(store)
    }

    /// Open an existing store at the given path.
    ///
    /// # Errors
    /// Returns error if the store doesn't exist or config is invalid.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let root = path.as_ref().to_path_buf();
        let config_path = root.join(GILDED_DIR).join(CONFIG_FILE);

        if !config_path.exists() {
            return Err(FsError::StoreNotFound(root));
        }

        let config_content = fs::read_to_string(&config_path)?;
        let config: StoreConfig = serde_yaml::from_str(&config_content)?;

        debug!(path = %root.display(), "Opened store");

        Ok(Self { root, config })
    }

    /// Get the store root path.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Get the store configuration.
    #[must_use]
    pub const fn config(&self) -> &StoreConfig {
        &self.config
    }

    fn inventory_path(&self) -> PathBuf {
        self.root.join(INVENTORY_FILE)
    }

    fn events_path(&self) -> PathBuf {
        self.root.join(EVENTS_FILE)
    }

    /// Read the current inventory. A missing file is an empty inventory.
    ///
    /// # Errors
    /// Returns error if the file can't be read or parsed.
    pub fn load_inventory(&self) -> Result<Inventory> {
        let path = self.inventory_path();
        if !path.exists() {
            return Ok(Inventory::default());
        }

        let content = fs::read_to_string(&path)?;
        let inventory: Inventory = serde_yaml::from_str(&content)?;
        Ok(inventory)
    }

    /// Replace the stored inventory.
    ///
    /// # Errors
    /// Returns error if serialization or IO fails.
    pub fn save_inventory(&self, inventory: &Inventory) -> Result<()> {
        let content = serde_yaml::to_string(inventory)?;
        fs::write(self.inventory_path(), content)?;
        debug!(items = inventory.len(), "Saved inventory");
        Ok(())
    }

    /// List all items in shelf order.
    ///
    /// # Errors
    /// Returns error if the inventory can't be read.
    pub fn list_items(&self) -> Result<Vec<Item>> {
        Ok(self.load_inventory()?.items)
    }

    /// Get the first item with the given SKU.
    ///
    /// # Errors
    /// Returns `FsError::ItemNotFound` if no item matches.
    pub fn get_item(&self, item_sku: &str) -> Result<Item> {
        self.load_inventory()?
            .items
            .into_iter()
            .find(|item| sku(&item.name) == item_sku)
            .ok_or_else(|| FsError::ItemNotFound(item_sku.to_string()))
    }

    /// Add a new item to the inventory.
    ///
    /// # Errors
    /// Returns error if an item with the same SKU exists, the item fails
    /// validation (when enabled), or IO fails.
    pub fn add_item(&self, item: Item) -> Result<Item> {
        if self.config.aging.validate_on_add {
            item.validate()?;
        }

        let item_sku = sku(&item.name);
        let mut inventory = self.load_inventory()?;

        if inventory.iter().any(|existing| sku(&existing.name) == item_sku) {
            return Err(FsError::ItemExists(item_sku));
        }

        inventory.push(item.clone());
        self.save_inventory(&inventory)?;

        info!(sku = %item_sku, item = %item, "Added item");

        Ok(item)
    }

    /// Run the end-of-day aging for `days` days and persist the result.
    ///
    /// # Errors
    /// Returns error if the inventory can't be read or written.
    pub fn age(&self, days: u32) -> Result<Vec<AgingEvent>> {
        let mut inventory = self.load_inventory()?;
        let events = inventory.advance_recorded(days);

        self.append_events(&events)?;
        self.save_inventory(&inventory)?;

        info!(days, items = inventory.len(), events = events.len(), "Aged inventory");

        Ok(events)
    }

    /// Append events to the aging history.
    ///
    /// # Errors
    /// Returns error if serialization or IO fails.
    pub fn append_events(&self, events: &[AgingEvent]) -> Result<()> {
        if events.is_empty() {
            return Ok(());
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(self.events_path())?;

        for event in events {
            let json_line = serde_json::to_string(event)?;
            writeln!(file, "{json_line}")?;
        }

        debug!(count = events.len(), "Appended events");

        Ok(())
    }

    /// Read the aging history, optionally for a single SKU.
    ///
    /// # Errors
    /// Returns `FsError::ItemNotFound` for an unknown SKU, or an error if
    /// the history can't be read.
    pub fn read_events(&self, item_sku: Option<&str>) -> Result<Vec<AgingEvent>> {
        if let Some(item_sku) = item_sku {
            self.get_item(item_sku)?;
        }

        let events_path = self.events_path();
        if !events_path.exists() {
            return Ok(Vec::new());
        }

        let file = File::open(&events_path)?;
        let reader = BufReader::new(file);
        let mut events = Vec::new();

        for line in reader.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            let event: AgingEvent = serde_json::from_str(&line)?;

            if item_sku.is_none_or(|s| sku(&event.item) == s) {
                events.push(event);
            }
        }

        Ok(events)
    }
}
