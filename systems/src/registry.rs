//! System registry for front-end discovery.
//!
//! Each runnable system self-registers via [`inventory::submit!`] with a
//! [`SystemEntry`] naming it and providing a factory from a program
//! image. The front-end discovers available systems at runtime without a
//! central list.

use fabric_core::core::decoder::MapError;
use fabric_core::core::machine::Machine;

/// Describes a runnable system composition.
pub struct SystemEntry {
    /// CLI name used to select this system (e.g., "hello").
    pub name: &'static str,
    /// Factory: wire up a Machine around a loaded program image.
    pub create: fn(&[u32]) -> Result<Box<dyn Machine>, MapError>,
}

impl SystemEntry {
    pub const fn new(
        name: &'static str,
        create: fn(&[u32]) -> Result<Box<dyn Machine>, MapError>,
    ) -> Self {
        Self { name, create }
    }
}

inventory::collect!(SystemEntry);

/// Return all registered systems, sorted by name.
pub fn all() -> Vec<&'static SystemEntry> {
    let mut entries: Vec<_> = inventory::iter::<SystemEntry>.into_iter().collect();
    entries.sort_by_key(|e| e.name);
    entries
}

/// Look up a system by its CLI name.
pub fn find(name: &str) -> Option<&'static SystemEntry> {
    inventory::iter::<SystemEntry>
        .into_iter()
        .find(|e| e.name == name)
}
