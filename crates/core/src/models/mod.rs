//! Shared domain models.

use serde::{Deserialize, Serialize};

/// A single catalog entry, immutable once loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    /// Game title.
    pub name: String,
    /// Release year.
    pub year: i32,
    /// Free-text description shown on the card.
    pub description: String,
    /// External "learn more" URL.
    pub link: String,
    /// Store identity key used for promotion lookups. Records without
    /// one are never handed to the promotion finder.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
}

impl GameRecord {
    /// Returns a user-facing label combining title and year.
    pub fn display_name(&self) -> String {
        format!("{} ({})", self.name, self.year)
    }
}

/// Outcome of a promotion lookup. Lives for one render pass only.
#[derive(Debug, Clone, PartialEq)]
pub enum DealResult {
    /// No promotion is currently available.
    NotFound,
    /// A promotion was found at the given vendor.
    Found {
        /// Discounted price, rounded to two decimals.
        price: f64,
        /// Vendor display name.
        vendor_name: String,
        /// Vendor storefront URL.
        vendor_url: String,
    },
}

impl DealResult {
    /// Whether the lookup produced a usable deal.
    pub fn is_found(&self) -> bool {
        matches!(self, DealResult::Found { .. })
    }
}
