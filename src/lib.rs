//! WebGPU enum names
//!
//! Static lookup from WebGPU enum categories and wire ordinals to their
//! canonical string names, as needed by a binding layer that receives
//! numeric enum values and has to report them in readable form.

pub mod config;
pub mod enum_data;
pub mod error;
pub mod format;
pub mod table;

pub use error::{Error, Result};
pub use table::{Category, EnumNameTable, Slot};

/// Resolve `(category, ordinal)` against the global table.
pub fn resolve(category: &str, ordinal: u32) -> Result<Slot> {
    EnumNameTable::global().resolve(category, ordinal)
}
