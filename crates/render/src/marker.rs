//! Map marker descriptors.
//!
//! One [`MarkerRequest`] per store plus one for the reference point;
//! these are the inputs the map collaborator consumes.

use crate::format::{display_telephone, escape_html, format_distance_km};
use serde::{Deserialize, Serialize};
use storefinder_catalog::{Brand, ReferencePoint, StoreRecord};

/// Marker color palette understood by the map collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerColor {
    /// Makro stores
    Red,
    /// Lotus stores and the reference point
    Green,
    /// CJ MORE stores
    Yellow,
    /// Foodland stores
    Blue,
    /// Everything else
    Gray,
}

impl MarkerColor {
    /// CSS color name for the marker.
    pub fn css_name(&self) -> &'static str {
        match self {
            MarkerColor::Red => "red",
            MarkerColor::Green => "green",
            MarkerColor::Yellow => "yellow",
            MarkerColor::Blue => "blue",
            MarkerColor::Gray => "gray",
        }
    }
}

/// Total brand-to-color mapping.
///
/// Yellow for CJ MORE matches the original palette choice and is kept
/// as-is.
pub fn marker_color(brand: Brand) -> MarkerColor {
    match brand {
        Brand::Makro => MarkerColor::Red,
        Brand::Lotus => MarkerColor::Green,
        Brand::CjMore => MarkerColor::Yellow,
        Brand::Foodland => MarkerColor::Blue,
        Brand::Other => MarkerColor::Gray,
    }
}

/// One marker to place on the map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerRequest {
    /// Marker latitude in degrees
    pub latitude: f64,
    /// Marker longitude in degrees
    pub longitude: f64,
    /// Short label shown as the tooltip
    pub label: String,
    /// Rich HTML detail shown in the popup
    pub detail_html: String,
    /// Marker color
    pub color: MarkerColor,
}

impl MarkerRequest {
    /// Marker for the reference point itself.
    pub fn for_reference(reference: &ReferencePoint) -> Self {
        let label = reference.label.clone();
        let detail_html = format!("<b>{} (Starting Point)</b>", escape_html(&reference.label));
        Self {
            latitude: reference.coordinate.latitude,
            longitude: reference.coordinate.longitude,
            label,
            detail_html,
            color: MarkerColor::Green,
        }
    }

    /// Marker for one annotated store record.
    pub fn for_store(record: &StoreRecord) -> Self {
        let detail_html = format!(
            "<b>{brand} - {name}</b><br>\
             Distance: {distance}<br>\
             Open Hours: {hours}<br>\
             Telephone: {telephone}<br>\
             <a href=\"{link}\" target=\"_blank\" rel=\"noopener\">View on Google Maps</a>",
            brand = escape_html(&record.brand),
            name = escape_html(&record.name),
            distance = format_distance_km(record.distance_km),
            hours = escape_html(&record.open_hours),
            telephone = escape_html(display_telephone(&record.telephone)),
            link = escape_html(&record.map_link),
        );

        Self {
            latitude: record.coordinate.latitude,
            longitude: record.coordinate.longitude,
            label: record.name.clone(),
            detail_html,
            color: marker_color(record.brand_kind()),
        }
    }
}
