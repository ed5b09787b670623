//! Brand enumeration and classification.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A grocery brand known to the catalog.
///
/// Brands outside the known set fall into [`Brand::Other`]; classification
/// is total and never fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Brand {
    /// Lotus supermarkets
    Lotus,
    /// Makro wholesale stores
    Makro,
    /// CJ MORE convenience stores
    CjMore,
    /// Foodland supermarkets
    Foodland,
    /// Catch-all for brands outside the known set
    Other,
}

impl Brand {
    /// Fixed ordering used when rendering brand groups.
    pub const DISPLAY_ORDER: [Brand; 5] = [
        Brand::Lotus,
        Brand::Makro,
        Brand::CjMore,
        Brand::Foodland,
        Brand::Other,
    ];

    /// Classifies a brand string. Exact match on the known set;
    /// everything else is [`Brand::Other`].
    pub fn classify(name: &str) -> Self {
        match name {
            "Lotus" => Brand::Lotus,
            "Makro" => Brand::Makro,
            "CJ MORE" => Brand::CjMore,
            "Foodland" => Brand::Foodland,
            _ => Brand::Other,
        }
    }

    /// Human-readable label for display.
    pub fn label(&self) -> &'static str {
        match self {
            Brand::Lotus => "Lotus",
            Brand::Makro => "Makro",
            Brand::CjMore => "CJ MORE",
            Brand::Foodland => "Foodland",
            Brand::Other => "Other",
        }
    }
}

impl fmt::Display for Brand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
