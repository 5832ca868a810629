//! Table and JSON output formatting for CLI commands.

use serde::Serialize;
use tabled::{Table, Tabled};

use explorer_entity::Item;

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    #[default]
    Table,
    /// JSON output
    Json,
}

/// Item display row
#[derive(Debug, Serialize, Tabled)]
pub struct ItemRow {
    /// Item ID
    pub id: String,
    /// Name
    pub name: String,
    /// Folder or file type key
    #[tabled(rename = "type")]
    pub kind: String,
    /// Materialized path
    pub path: String,
    /// Creator
    pub created_by: String,
    /// Last change
    pub updated_at: String,
}

impl From<&Item> for ItemRow {
    fn from(item: &Item) -> Self {
        let kind = if item.is_folder {
            "folder".to_string()
        } else {
            item.file_key.clone().unwrap_or_else(|| "file".to_string())
        };
        Self {
            id: item.id.to_string(),
            name: item.name.clone(),
            kind,
            path: item.path.clone(),
            created_by: item.created_by.clone(),
            updated_at: item.updated_at.format("%Y-%m-%d %H:%M").to_string(),
        }
    }
}

/// Print a list of items in the selected format
pub fn print_items(items: &[Item], format: OutputFormat) {
    match format {
        OutputFormat::Table => {
            if items.is_empty() {
                println!("No items found.");
            } else {
                let rows: Vec<ItemRow> = items.iter().map(ItemRow::from).collect();
                println!("{}", Table::new(rows));
            }
        }
        OutputFormat::Json => print_json(items, "[]"),
    }
}

/// Print a single item in the selected format
pub fn print_item(item: &Item, format: OutputFormat) {
    match format {
        OutputFormat::Table => println!("{}", Table::new([ItemRow::from(item)])),
        OutputFormat::Json => print_json(item, "{}"),
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T, fallback: &str) {
    let json = serde_json::to_string_pretty(value).unwrap_or_else(|_| fallback.to_string());
    println!("{json}");
}

/// Print a success message
pub fn print_success(msg: &str) {
    println!("✓ {msg}");
}

/// Print an error message
pub fn print_error(msg: &str) {
    eprintln!("✗ {msg}");
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:<12} {}", format!("{key}:"), value);
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn item(is_folder: bool, file_key: Option<&str>) -> Item {
        serde_json::from_value(serde_json::json!({
            "id": Uuid::new_v4(),
            "path": "home/Docs/",
            "is_folder": is_folder,
            "file_key": file_key,
            "parent_folder_id": Uuid::new_v4(),
            "name": "Docs",
            "created_by": "alice",
            "created_at": "2024-03-05T14:07:09Z",
            "updated_by": "alice",
            "updated_at": "2024-03-05T14:07:09Z",
        }))
        .unwrap()
    }

    #[test]
    fn test_row_kind() {
        assert_eq!(ItemRow::from(&item(true, None)).kind, "folder");
        assert_eq!(ItemRow::from(&item(false, Some("exam"))).kind, "exam");
        assert_eq!(ItemRow::from(&item(false, None)).kind, "file");
    }

    #[test]
    fn test_row_timestamp_format() {
        assert_eq!(ItemRow::from(&item(true, None)).updated_at, "2024-03-05 14:07");
    }
}
