//! DXF table entry types and management

use crate::types::Handle;
use indexmap::IndexMap;

pub mod appid;

pub use appid::{AppId, AppIdFlags};

/// Base trait for all table entries
pub trait TableEntry {
    /// Get the entry's unique handle
    fn handle(&self) -> Handle;

    /// Set the entry's handle
    fn set_handle(&mut self, handle: Handle);

    /// Get the entry's name
    fn name(&self) -> &str;

    /// Set the entry's name
    fn set_name(&mut self, name: String);

    /// Check if this is a standard/default entry
    fn is_standard(&self) -> bool {
        false
    }
}

/// Generic table for storing named entries
///
/// Entries keep insertion order and are looked up case-insensitively.
#[derive(Debug, Clone)]
pub struct Table<T: TableEntry> {
    /// Entries stored by uppercased name
    entries: IndexMap<String, T>,
    /// Table handle
    handle: Handle,
}

impl<T: TableEntry> Table<T> {
    /// Create a new empty table
    pub fn new() -> Self {
        Table {
            entries: IndexMap::new(),
            handle: Handle::NULL,
        }
    }

    /// Get the table's handle
    pub fn handle(&self) -> Handle {
        self.handle
    }

    /// Set the table's handle
    pub fn set_handle(&mut self, handle: Handle) {
        self.handle = handle;
    }

    /// Add an entry to the table
    pub fn add(&mut self, entry: T) -> Result<(), String> {
        let name = entry.name().to_uppercase();
        if self.entries.contains_key(&name) {
            return Err(format!("Entry '{}' already exists in table", entry.name()));
        }
        self.entries.insert(name, entry);
        Ok(())
    }

    /// Get an entry by name (case-insensitive)
    pub fn get(&self, name: &str) -> Option<&T> {
        self.entries.get(&name.to_uppercase())
    }

    /// Get a mutable entry by name (case-insensitive)
    pub fn get_mut(&mut self, name: &str) -> Option<&mut T> {
        self.entries.get_mut(&name.to_uppercase())
    }

    /// Remove an entry by name (case-insensitive)
    pub fn remove(&mut self, name: &str) -> Option<T> {
        self.entries.shift_remove(&name.to_uppercase())
    }

    /// Check if an entry exists (case-insensitive)
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(&name.to_uppercase())
    }

    /// Get the number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the table is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.entries.values()
    }
}

impl<T: TableEntry> Default for Table<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_add_and_get() {
        let mut table: Table<AppId> = Table::new();
        table.add(AppId::new("ACAD")).unwrap();
        table.add(AppId::new("MyApp")).unwrap();

        assert_eq!(table.len(), 2);
        assert!(table.contains("acad"));
        assert_eq!(table.get("MYAPP").unwrap().name(), "MyApp");
    }

    #[test]
    fn test_table_rejects_duplicates() {
        let mut table: Table<AppId> = Table::new();
        table.add(AppId::new("ACAD")).unwrap();
        assert!(table.add(AppId::new("acad")).is_err());
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_table_preserves_order() {
        let mut table: Table<AppId> = Table::new();
        for name in ["C", "A", "B"] {
            table.add(AppId::new(name)).unwrap();
        }
        let names: Vec<&str> = table.iter().map(|e| e.name()).collect();
        assert_eq!(names, ["C", "A", "B"]);
    }
}
