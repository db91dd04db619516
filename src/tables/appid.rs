//! Application ID table entry (APPID)

use super::TableEntry;
use crate::types::Handle;

use bitflags::bitflags;

bitflags! {
    /// Standard flag values for an APPID entry (group 70).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct AppIdFlags: i16 {
        /// Entry comes from an external reference.
        const XREF_DEPENDENT = 16;
        /// Xref-dependent and resolved in the last open.
        const XREF_RESOLVED = 32;
        /// Entry was referenced at least once the last time the
        /// drawing was edited.
        const REFERENCED = 64;
    }
}

/// An application ID table entry (registers an application name for
/// extended data)
#[derive(Debug, Clone, PartialEq)]
pub struct AppId {
    /// Unique handle (group 5)
    pub handle: Handle,
    /// Application name (group 2); must be non-empty to write
    pub application_name: String,
    /// Standard flags (group 70)
    pub flags: AppIdFlags,
    /// Soft-pointer handle string to the owner dictionary (group 330)
    pub owner_soft: String,
    /// Hard-owner handle string to the owner dictionary (group 360)
    pub owner_hard: String,
}

impl AppId {
    /// Create a new application ID
    pub fn new(name: impl Into<String>) -> Self {
        AppId {
            handle: Handle::NULL,
            application_name: name.into(),
            flags: AppIdFlags::empty(),
            owner_soft: String::new(),
            owner_hard: String::new(),
        }
    }

    /// Create the standard "ACAD" application ID
    pub fn acad() -> Self {
        Self::new("ACAD")
    }
}

impl Default for AppId {
    fn default() -> Self {
        Self::new("")
    }
}

impl TableEntry for AppId {
    fn handle(&self) -> Handle {
        self.handle
    }

    fn set_handle(&mut self, handle: Handle) {
        self.handle = handle;
    }

    fn name(&self) -> &str {
        &self.application_name
    }

    fn set_name(&mut self, name: String) {
        self.application_name = name;
    }

    fn is_standard(&self) -> bool {
        self.application_name == "ACAD"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_appid_creation() {
        let appid = AppId::new("MyApp");
        assert_eq!(appid.name(), "MyApp");
        assert_eq!(appid.handle, Handle::NULL);
        assert_eq!(appid.flags, AppIdFlags::empty());
        assert!(!appid.is_standard());
    }

    #[test]
    fn test_acad_is_standard() {
        assert!(AppId::acad().is_standard());
    }

    #[test]
    fn test_flags() {
        let mut appid = AppId::new("XREFAPP");
        appid.flags = AppIdFlags::XREF_DEPENDENT | AppIdFlags::REFERENCED;
        assert_eq!(appid.flags.bits(), 80);
    }
}
