//! Output formatting for the CLI.

use anyhow::Result;
use chrono::{DateTime, Utc};
use gilded_core::{AgingEvent, Item, Variant};
use serde::Serialize;

/// Output format for CLI responses.
#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    #[default]
    Human,
    /// JSON output
    Json,
    /// YAML output
    Yaml,
}

/// Print output in the specified format.
pub fn print<T: Serialize + HumanDisplay>(value: &T, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Human => println!("{}", value.human_display()),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(value)?),
        OutputFormat::Yaml => println!("{}", serde_yaml::to_string(value)?),
    }
    Ok(())
}

/// Print a list in the specified format.
pub fn print_list<T: Serialize + HumanDisplay>(values: &[T], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Human => {
            for value in values {
                println!("{}", value.human_display());
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(values)?),
        OutputFormat::Yaml => println!("{}", serde_yaml::to_string(values)?),
    }
    Ok(())
}

/// Print a list of item summaries with dynamic column widths.
pub fn print_item_list(items: &[ItemSummary], format: OutputFormat) -> Result<()> {
    let OutputFormat::Human = format else {
        return print_list(items, format);
    };

    if items.is_empty() {
        println!("No items found.");
        return Ok(());
    }

    let sku_width = items.iter().map(|i| i.sku.len()).max().unwrap_or(3).max(3);
    let variant_width = items
        .iter()
        .map(|i| i.variant.to_string().len())
        .max()
        .unwrap_or(7)
        .max(7);

    println!(
        "{:<sku_width$}  {:<variant_width$}  {:>7}  {:>7}  NAME",
        "SKU", "VARIANT", "SELL_IN", "QUALITY"
    );
    println!("{}", "-".repeat(sku_width + variant_width + 30));

    for item in items {
        println!(
            "{:<sku_width$}  {:<variant_width$}  {:>7}  {:>7}  {}",
            item.sku,
            item.variant.to_string(),
            item.sell_in,
            item.quality,
            item.name
        );
    }

    Ok(())
}

/// Print a success message.
pub fn print_success(message: &str, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Human => println!("{message}"),
        OutputFormat::Json => {
            let body = serde_json::json!({ "status": "ok", "message": message });
            println!("{}", serde_json::to_string(&body)?);
        }
        OutputFormat::Yaml => println!("status: ok\nmessage: {message}"),
    }
    Ok(())
}

/// Trait for human-readable display.
pub trait HumanDisplay {
    fn human_display(&self) -> String;
}

impl HumanDisplay for AgingEvent {
    fn human_display(&self) -> String {
        format!(
            "[{time}] day {day} {item}: {kind} {from} → {to}",
            time = format_time(&self.timestamp),
            day = self.day,
            item = self.item,
            kind = self.event_type,
            from = self.payload.from,
            to = self.payload.to,
        )
    }
}

fn format_time(dt: &DateTime<Utc>) -> String {
    dt.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}

/// Item with its derived SKU and variant, for listing.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct ItemSummary {
    pub sku: String,
    pub name: String,
    pub variant: Variant,
    pub sell_in: i32,
    pub quality: i32,
}

impl From<&Item> for ItemSummary {
    fn from(item: &Item) -> Self {
        Self {
            sku: gilded_fs::sku(&item.name),
            name: item.name.clone(),
            variant: item.variant(),
            sell_in: item.sell_in,
            quality: item.quality,
        }
    }
}

impl HumanDisplay for ItemSummary {
    fn human_display(&self) -> String {
        format!(
            "SKU:       {}\nName:      {}\nVariant:   {}\nSell in:   {}\nQuality:   {}\n",
            self.sku, self.name, self.variant, self.sell_in, self.quality
        )
    }
}

/// The inventory as it stood on one simulated day.
#[derive(Debug, Serialize)]
pub struct DaySnapshot {
    pub day: u32,
    pub items: Vec<Item>,
}

impl HumanDisplay for DaySnapshot {
    fn human_display(&self) -> String {
        let mut out = format!("-------- day {} --------\nname, sellIn, quality\n", self.day);
        for item in &self.items {
            out.push_str(&item.to_string());
            out.push('\n');
        }
        out
    }
}
