//! Dictionary object (DICTIONARY)

use super::ObjectCommon;
use crate::types::Handle;

/// One dictionary entry: a name paired with the handle of the entry object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictionaryEntry {
    /// Entry name (group 3)
    pub name: String,
    /// Handle string of the entry object (group 350)
    pub object_handle: String,
}

impl DictionaryEntry {
    /// Create a new entry
    pub fn new(name: impl Into<String>, object_handle: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            object_handle: object_handle.into(),
        }
    }
}

/// DICTIONARY object - an ordered name-to-object mapping
///
/// Entries are kept in stream order; names are compared case-insensitively
/// on lookup, as AutoCAD does.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Dictionary {
    /// Common object data
    pub common: ObjectCommon,
    /// Entries in stream order
    pub entries: Vec<DictionaryEntry>,
}

impl Dictionary {
    /// Create a new empty dictionary
    pub fn new() -> Self {
        Self::default()
    }

    /// The dictionary's handle
    pub fn handle(&self) -> Handle {
        self.common.handle
    }

    /// Append an entry
    pub fn add_entry(&mut self, name: impl Into<String>, object_handle: impl Into<String>) {
        self.entries
            .push(DictionaryEntry::new(name, object_handle));
    }

    /// Look up an entry's object handle by name (case-insensitive)
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.name.eq_ignore_ascii_case(name))
            .map(|e| e.object_handle.as_str())
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the dictionary has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dictionary_defaults() {
        let dict = Dictionary::new();
        assert!(dict.is_empty());
        assert_eq!(dict.handle(), Handle::NULL);
        assert_eq!(dict.common.owner_soft, "");
        assert_eq!(dict.common.owner_hard, "");
    }

    #[test]
    fn test_entries_keep_order() {
        let mut dict = Dictionary::new();
        dict.add_entry("ACAD_GROUP", "D");
        dict.add_entry("ACAD_LAYOUT", "1A");
        dict.add_entry("ACAD_MLINESTYLE", "17");

        assert_eq!(dict.len(), 3);
        assert_eq!(dict.entries[0].name, "ACAD_GROUP");
        assert_eq!(dict.entries[2].object_handle, "17");
    }

    #[test]
    fn test_case_insensitive_lookup() {
        let mut dict = Dictionary::new();
        dict.add_entry("ACAD_GROUP", "D");
        assert_eq!(dict.get("acad_group"), Some("D"));
        assert_eq!(dict.get("MISSING"), None);
    }
}
