//! Store data: static definitions and annotated records.

use crate::Brand;
use serde::{Deserialize, Serialize};
use storefinder_geo::{haversine_distance, Coordinate};

/// A store as declared in the static data set, before annotation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreDefinition {
    /// Brand name as displayed (classification happens via [`Brand::classify`])
    pub brand: String,
    /// Store name, unique within the catalog
    pub name: String,
    /// Store location in decimal degrees
    pub coordinate: Coordinate,
    /// External map link for the store
    pub map_link: String,
    /// Opening hours, free text
    pub open_hours: String,
    /// Contact number; empty means no contact available
    pub telephone: String,
}

impl StoreDefinition {
    /// Annotates the definition with its distance from the reference
    /// point, producing the immutable record used for display.
    pub fn annotate(self, reference: &Coordinate) -> StoreRecord {
        let distance_km = haversine_distance(reference, &self.coordinate);
        StoreRecord {
            brand: self.brand,
            name: self.name,
            coordinate: self.coordinate,
            map_link: self.map_link,
            open_hours: self.open_hours,
            telephone: self.telephone,
            distance_km,
        }
    }
}

/// A fully annotated store record. Immutable after creation; the
/// distance is derived once at catalog build time and never reset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreRecord {
    /// Brand name as displayed
    pub brand: String,
    /// Store name, unique within the catalog
    pub name: String,
    /// Store location in decimal degrees
    pub coordinate: Coordinate,
    /// External map link for the store
    pub map_link: String,
    /// Opening hours, free text
    pub open_hours: String,
    /// Contact number; empty means no contact available
    pub telephone: String,
    /// Great-circle distance from the reference point, kilometers
    pub distance_km: f64,
}

impl StoreRecord {
    /// The enumerated brand for this record.
    pub fn brand_kind(&self) -> Brand {
        Brand::classify(&self.brand)
    }
}

/// The built-in store data set.
pub fn builtin_definitions() -> Vec<StoreDefinition> {
    vec![
        StoreDefinition {
            brand: "Lotus".to_string(),
            name: "Lotus Bangkapi".to_string(),
            coordinate: Coordinate::new(13.768142, 100.643965),
            map_link: "https://maps.app.goo.gl/EodHT737MiJ94B756".to_string(),
            open_hours: "7:00 AM - 10:00 PM".to_string(),
            telephone: "021165873".to_string(),
        },
        StoreDefinition {
            brand: "Makro".to_string(),
            name: "Makro Ladphrao".to_string(),
            coordinate: Coordinate::new(13.766041, 100.640360),
            map_link: "https://maps.app.goo.gl/FSKJ8KW8q67878Uk9".to_string(),
            open_hours: "6:00 AM - 10:00 PM".to_string(),
            telephone: "023752781".to_string(),
        },
        StoreDefinition {
            brand: "CJ MORE".to_string(),
            name: "CJ MORE Lat Phrao 130".to_string(),
            coordinate: Coordinate::new(13.772726, 100.632133),
            map_link: "https://maps.app.goo.gl/JeaHGM9Jut3ds4F79".to_string(),
            open_hours: "6:00 AM - 11:00 PM".to_string(),
            telephone: "0613875740".to_string(),
        },
        StoreDefinition {
            brand: "Foodland".to_string(),
            name: "Foodland Ladphrao".to_string(),
            coordinate: Coordinate::new(13.779413, 100.622674),
            map_link: "https://maps.app.goo.gl/Pe3NRz4X2gjheygA8".to_string(),
            open_hours: "24 hours".to_string(),
            telephone: "025300220".to_string(),
        },
    ]
}
