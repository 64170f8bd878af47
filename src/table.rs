//! Name lookup over the static enum data.
//!
//! Turns the `(category, ordinal)` pairs a binding layer sees on the wire
//! back into the canonical WebGPU strings (e.g. `("TextureFormat", 18)` →
//! `"rgba8unorm"`). Ordinals the API reserves as undefined resolve to
//! [`Slot::Unnamed`] rather than an error.

use crate::enum_data::{ENUM_TABLES, Variants};
use crate::error::{Error, Result};
use serde::{Serialize, Serializer};
use std::fmt;

/// Value of one ordinal position within a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    /// Canonical lowercase-hyphenated name.
    Named(&'static str),
    /// Ordinal reserved as undefined/default; it has no name.
    Unnamed,
}

impl Slot {
    pub fn name(self) -> Option<&'static str> {
        match self {
            Slot::Named(name) => Some(name),
            Slot::Unnamed => None,
        }
    }

    pub fn is_named(self) -> bool {
        matches!(self, Slot::Named(_))
    }
}

impl From<Option<&'static str>> for Slot {
    fn from(value: Option<&'static str>) -> Self {
        value.map_or(Slot::Unnamed, Slot::Named)
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name().unwrap_or("undefined"))
    }
}

impl Serialize for Slot {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Slot::Named(name) => serializer.serialize_str(name),
            Slot::Unnamed => serializer.serialize_none(),
        }
    }
}

/// Borrowed view over a single enum category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    name: &'static str,
    variants: Variants,
}

impl Category {
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Number of ordinal slots, named or not.
    pub fn len(&self) -> usize {
        self.variants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }

    /// Slot at `ordinal`, or `None` past the end.
    pub fn get(&self, ordinal: u32) -> Option<Slot> {
        self.variants.get(ordinal as usize).copied().map(Slot::from)
    }

    pub fn slots(self) -> impl Iterator<Item = Slot> {
        self.variants.iter().copied().map(Slot::from)
    }

    /// `(ordinal, slot)` pairs in wire order.
    pub fn iter(self) -> impl Iterator<Item = (u32, Slot)> {
        self.slots().enumerate().map(|(i, slot)| (i as u32, slot))
    }

    /// Ordinal of the named slot matching `name`. Unnamed slots never match.
    pub fn ordinal_of(&self, name: &str) -> Option<u32> {
        self.variants
            .iter()
            .position(|v| *v == Some(name))
            .map(|i| i as u32)
    }
}

/// Immutable category → ordinal → name table.
///
/// Backed by compile-time data, so every instance reads the same static
/// storage and lookups are safe from any thread without locking.
#[derive(Debug, Clone, Copy)]
pub struct EnumNameTable {
    tables: &'static phf::OrderedMap<&'static str, Variants>,
}

static GLOBAL_TABLE: EnumNameTable = EnumNameTable {
    tables: &ENUM_TABLES,
};

impl Default for EnumNameTable {
    fn default() -> Self {
        GLOBAL_TABLE
    }
}

impl EnumNameTable {
    /// The process-wide table.
    pub fn global() -> &'static EnumNameTable {
        &GLOBAL_TABLE
    }

    /// Resolve a wire ordinal to its slot.
    ///
    /// Fails with [`Error::UnknownCategory`] if `category` is not in the
    /// table and [`Error::OrdinalOutOfRange`] if `ordinal >= len(category)`.
    pub fn resolve(&self, category: &str, ordinal: u32) -> Result<Slot> {
        let cat = self.category(category)?;
        cat.get(ordinal).ok_or_else(|| {
            tracing::debug!("Ordinal {} out of range for {}", ordinal, category);
            Error::OrdinalOutOfRange {
                category: category.to_string(),
                ordinal,
                len: cat.len(),
            }
        })
    }

    /// Reverse lookup: the ordinal carrying `name` within `category`.
    pub fn ordinal_of(&self, category: &str, name: &str) -> Result<u32> {
        self.category(category)?
            .ordinal_of(name)
            .ok_or_else(|| Error::UnknownVariant {
                category: category.to_string(),
                name: name.to_string(),
            })
    }

    pub fn category(&self, name: &str) -> Result<Category> {
        match self.tables.get_entry(name) {
            Some((&name, &variants)) => Ok(Category { name, variants }),
            None => {
                tracing::debug!("Unknown enum category: {}", name);
                Err(Error::UnknownCategory(name.to_string()))
            }
        }
    }

    /// Slot count of `category`.
    pub fn len(&self, category: &str) -> Result<usize> {
        self.category(category).map(|c| c.len())
    }

    pub fn contains(&self, category: &str) -> bool {
        self.tables.contains_key(category)
    }

    pub fn category_count(&self) -> usize {
        self.tables.len()
    }

    /// All categories in persisted (alphabetical) order.
    pub fn categories(self) -> impl Iterator<Item = Category> {
        self.tables
            .entries()
            .map(|(&name, &variants)| Category { name, variants })
    }

    /// Human-readable form of a wire value for diagnostics. Never fails:
    /// out-of-range and unknown inputs are rendered as such.
    pub fn describe(&self, category: &str, ordinal: u32) -> String {
        match self.resolve(category, ordinal) {
            Ok(Slot::Named(name)) => format!("{category}::{name}"),
            Ok(Slot::Unnamed) => format!("{category}::(undefined)"),
            Err(Error::OrdinalOutOfRange { .. }) => format!("{category}::(invalid {ordinal})"),
            Err(_) => format!("{category}({ordinal})"),
        }
    }
}
