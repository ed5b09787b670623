//! Store card descriptors for the page collaborator.

use crate::format::{display_telephone, format_distance_km};
use serde::{Deserialize, Serialize};
use storefinder_catalog::{BrandGroup, StoreRecord};

/// One store card. Fields are plain text; the page collaborator escapes
/// them on insertion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardRequest {
    /// Brand label for the card heading
    pub brand_label: String,
    /// Store name
    pub name: String,
    /// Pre-formatted distance, e.g. "1.19 km"
    pub distance_text: String,
    /// Opening hours
    pub open_hours: String,
    /// Telephone number, or the "Not available" placeholder
    pub telephone: String,
    /// External map link
    pub map_link: String,
}

impl CardRequest {
    /// Builds the card for one annotated store record.
    pub fn from_store(record: &StoreRecord) -> Self {
        Self {
            brand_label: record.brand.clone(),
            name: record.name.clone(),
            distance_text: format_distance_km(record.distance_km),
            open_hours: record.open_hours.clone(),
            telephone: display_telephone(&record.telephone).to_string(),
            map_link: record.map_link.clone(),
        }
    }
}

/// One brand's cards, in display order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardGroup {
    /// Brand heading for the group
    pub brand_label: String,
    /// Member cards, closest store first
    pub cards: Vec<CardRequest>,
}

/// Converts sorted brand groups into card groups, preserving order.
pub fn card_groups(groups: &[BrandGroup]) -> Vec<CardGroup> {
    groups
        .iter()
        .map(|group| CardGroup {
            brand_label: group.brand.label().to_string(),
            cards: group.stores.iter().map(CardRequest::from_store).collect(),
        })
        .collect()
}
