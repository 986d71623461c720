//! src/model/catalog.rs
//! ============================================================================
//! # Catalog: Immutable Item List for the Session
//!
//! Wire-faithful item records plus the session store they live in. The store
//! is created empty, populated exactly once by a successful fetch, and never
//! cleared afterwards. It exposes the raw list read-only; filtering and
//! sorting are the query engine's job.

use compact_str::CompactString;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Classification of an item as paid, free, or view-only.
///
/// Wire representation is the bare integer (`pricingOption`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum Pricing {
    Paid = 0,
    Free = 1,
    ViewOnly = 2,
}

impl Pricing {
    /// All modes in checkbox display order.
    pub const ALL: [Self; 3] = [Self::Paid, Self::Free, Self::ViewOnly];

    /// Human-facing label used by the filter panel and the price column.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Paid => "Paid",
            Self::Free => "Free",
            Self::ViewOnly => "View Only",
        }
    }

    /// The wire integer for this mode.
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for Pricing {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Paid),
            1 => Ok(Self::Free),
            2 => Ok(Self::ViewOnly),
            other => Err(format!("unknown pricing option {other}")),
        }
    }
}

impl From<Pricing> for u8 {
    fn from(value: Pricing) -> Self {
        value as Self
    }
}

impl std::fmt::Display for Pricing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One catalog item, immutable once loaded. Identity is `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    #[serde(rename = "imagePath")]
    pub image_path: CompactString,

    pub id: CompactString,

    pub title: CompactString,

    pub creator: CompactString,

    #[serde(rename = "pricingOption")]
    pub pricing: Pricing,

    /// Meaningful only when `pricing` is [`Pricing::Paid`]; free and
    /// view-only items carry 0.
    #[serde(default)]
    pub price: f64,
}

/// Holds the full item list for the session once retrieved.
#[derive(Debug, Clone, Default)]
pub struct CatalogStore {
    items: Vec<Item>,
    populated: bool,
}

impl CatalogStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Install the fetched item list. Populated exactly once; a second call
    /// is a bug in the fetch wiring and is ignored.
    pub fn populate(&mut self, items: Vec<Item>) {
        if self.populated {
            warn!("catalog store already populated, ignoring {} items", items.len());
            return;
        }

        self.items = items;
        self.populated = true;
    }

    /// The raw item list, in original retrieval order.
    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// True until a successful fetch lands. Drives the loading placeholder.
    #[must_use]
    pub const fn is_populated(&self) -> bool {
        self.populated
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_wire_format() {
        let payload = r#"{
            "imagePath": "https://cdn.example/items/1.png",
            "id": "prd-001",
            "title": "Denim Jacket",
            "creator": "anna",
            "pricingOption": 0,
            "price": 45.5
        }"#;

        let item: Item = serde_json::from_str(payload).unwrap();
        assert_eq!(item.id, "prd-001");
        assert_eq!(item.pricing, Pricing::Paid);
        assert!((item.price - 45.5).abs() < f64::EPSILON);
    }

    #[test]
    fn missing_price_defaults_to_zero() {
        let payload = r#"{
            "imagePath": "x",
            "id": "prd-002",
            "title": "Scarf",
            "creator": "bob",
            "pricingOption": 1
        }"#;

        let item: Item = serde_json::from_str(payload).unwrap();
        assert_eq!(item.pricing, Pricing::Free);
        assert_eq!(item.price, 0.0);
    }

    #[test]
    fn rejects_unknown_pricing_option() {
        let payload = r#"{
            "imagePath": "x",
            "id": "prd-003",
            "title": "Hat",
            "creator": "eve",
            "pricingOption": 7
        }"#;

        assert!(serde_json::from_str::<Item>(payload).is_err());
    }

    #[test]
    fn store_populates_exactly_once() {
        let mut store = CatalogStore::new();
        assert!(!store.is_populated());

        store.populate(vec![]);
        assert!(store.is_populated());
        assert!(store.is_empty());

        // second populate is ignored
        store.populate(vec![Item {
            image_path: "x".into(),
            id: "late".into(),
            title: "Late".into(),
            creator: "n".into(),
            pricing: Pricing::Free,
            price: 0.0,
        }]);
        assert!(store.is_empty());
    }
}
