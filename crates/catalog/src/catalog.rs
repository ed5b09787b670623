//! Catalog building and brand grouping.

use crate::{builtin_definitions, Brand, StoreDefinition, StoreRecord};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use storefinder_geo::Coordinate;

/// The fixed point all store distances are measured from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferencePoint {
    /// Short label for display ("NIDA")
    pub label: String,
    /// Location in decimal degrees
    pub coordinate: Coordinate,
}

impl ReferencePoint {
    /// Creates a reference point with the given label and location.
    pub fn new(label: impl Into<String>, coordinate: Coordinate) -> Self {
        Self { label: label.into(), coordinate }
    }

    /// The built-in reference point: the NIDA campus in Bangkapi.
    pub fn nida() -> Self {
        Self::new("NIDA", Coordinate::new(13.771447, 100.654466))
    }
}

/// The annotated store catalog for one reference point.
///
/// Built once, then read-only. Distances are computed exactly once, at
/// build time; neither coordinates nor the reference point change
/// afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    reference: ReferencePoint,
    stores: Vec<StoreRecord>,
}

impl Catalog {
    /// Builds the catalog from the built-in store data set.
    pub fn build(reference: ReferencePoint) -> Self {
        Self::build_from(reference, builtin_definitions())
    }

    /// Builds a catalog from an explicit definition list.
    ///
    /// Each definition is annotated with its haversine distance from the
    /// reference point. Definitions are not validated here; malformed
    /// coordinates produce NaN distances that propagate into display.
    pub fn build_from(reference: ReferencePoint, definitions: Vec<StoreDefinition>) -> Self {
        let stores = definitions
            .into_iter()
            .map(|def| def.annotate(&reference.coordinate))
            .collect();
        Self { reference, stores }
    }

    /// The reference point this catalog was annotated against.
    pub fn reference(&self) -> &ReferencePoint {
        &self.reference
    }

    /// The annotated store records, in original definition order.
    pub fn stores(&self) -> &[StoreRecord] {
        &self.stores
    }

    /// Number of stores in the catalog.
    pub fn len(&self) -> usize {
        self.stores.len()
    }

    /// True if the catalog holds no stores.
    pub fn is_empty(&self) -> bool {
        self.stores.is_empty()
    }
}

/// One brand's stores, ordered by ascending distance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrandGroup {
    /// The brand this group holds
    pub brand: Brand,
    /// Member records, closest first
    pub stores: Vec<StoreRecord>,
}

/// Partitions the catalog into brand groups for display.
///
/// Groups are emitted in [`Brand::DISPLAY_ORDER`], only for brands that
/// actually occur in the catalog; unrecognized brands collect under
/// [`Brand::Other`]. Within each group records are ordered by ascending
/// distance, ties keeping original catalog order. Every record lands in
/// exactly one group.
pub fn group_and_sort(catalog: &Catalog) -> Vec<BrandGroup> {
    let mut groups = Vec::new();

    for brand in Brand::DISPLAY_ORDER {
        let mut stores: Vec<StoreRecord> = catalog
            .stores()
            .iter()
            .filter(|record| record.brand_kind() == brand)
            .cloned()
            .collect();

        if stores.is_empty() {
            continue;
        }

        // Stable sort; NaN distances sort as equal and keep their slot
        stores.sort_by(|a, b| {
            a.distance_km
                .partial_cmp(&b.distance_km)
                .unwrap_or(Ordering::Equal)
        });

        groups.push(BrandGroup { brand, stores });
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn definition(brand: &str, name: &str, lat: f64, lon: f64) -> StoreDefinition {
        StoreDefinition {
            brand: brand.to_string(),
            name: name.to_string(),
            coordinate: Coordinate::new(lat, lon),
            map_link: "https://maps.example.com/x".to_string(),
            open_hours: "24 hours".to_string(),
            telephone: String::new(),
        }
    }

    #[test]
    fn test_build_annotates_every_store() {
        let catalog = Catalog::build(ReferencePoint::nida());

        assert_eq!(catalog.len(), 4);
        for record in catalog.stores() {
            assert!(record.distance_km > 0.0);
            assert!(record.distance_km < 10.0, "{}", record.distance_km);
        }
    }

    #[test]
    fn test_lotus_bangkapi_fixture() {
        let catalog = Catalog::build(ReferencePoint::nida());
        let lotus = catalog
            .stores()
            .iter()
            .find(|r| r.name == "Lotus Bangkapi")
            .unwrap();

        assert!((lotus.distance_km - 1.20).abs() < 0.05, "{}", lotus.distance_km);

        let groups = group_and_sort(&catalog);
        let lotus_group = groups.iter().find(|g| g.brand == Brand::Lotus).unwrap();
        assert!(lotus_group.stores.iter().any(|r| r.name == "Lotus Bangkapi"));
    }

    #[test]
    fn test_group_and_sort_preserves_record_count() {
        let catalog = Catalog::build(ReferencePoint::nida());
        let groups = group_and_sort(&catalog);

        let total: usize = groups.iter().map(|g| g.stores.len()).sum();
        assert_eq!(total, catalog.len());
    }

    #[test]
    fn test_groups_are_sorted_by_distance() {
        let reference = ReferencePoint::nida();
        let definitions = vec![
            definition("Lotus", "Lotus Far", 13.90, 100.80),
            definition("Lotus", "Lotus Near", 13.7715, 100.6545),
            definition("Lotus", "Lotus Mid", 13.80, 100.70),
        ];
        let catalog = Catalog::build_from(reference, definitions);
        let groups = group_and_sort(&catalog);

        assert_eq!(groups.len(), 1);
        let names: Vec<&str> = groups[0].stores.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["Lotus Near", "Lotus Mid", "Lotus Far"]);

        for window in groups[0].stores.windows(2) {
            assert!(window[0].distance_km <= window[1].distance_km);
        }
    }

    #[test]
    fn test_unknown_brand_lands_in_other_group() {
        let reference = ReferencePoint::nida();
        let definitions = vec![
            definition("Lotus", "Lotus Bangkapi", 13.768142, 100.643965),
            definition("7-Eleven", "7-Eleven Soi 10", 13.7700, 100.6500),
        ];
        let catalog = Catalog::build_from(reference, definitions);
        let groups = group_and_sort(&catalog);

        let other = groups.iter().find(|g| g.brand == Brand::Other).unwrap();
        assert_eq!(other.stores.len(), 1);
        assert_eq!(other.stores[0].name, "7-Eleven Soi 10");
    }

    #[test]
    fn test_groups_follow_display_order() {
        let catalog = Catalog::build(ReferencePoint::nida());
        let groups = group_and_sort(&catalog);

        let brands: Vec<Brand> = groups.iter().map(|g| g.brand).collect();
        assert_eq!(
            brands,
            [Brand::Lotus, Brand::Makro, Brand::CjMore, Brand::Foodland]
        );
    }

    #[test]
    fn test_empty_catalog_yields_no_groups() {
        let catalog = Catalog::build_from(ReferencePoint::nida(), Vec::new());
        assert!(catalog.is_empty());
        assert!(group_and_sort(&catalog).is_empty());
    }

    #[test]
    fn test_distance_ties_keep_catalog_order() {
        let reference = ReferencePoint::nida();
        let definitions = vec![
            definition("Makro", "Makro First", 13.766041, 100.640360),
            definition("Makro", "Makro Second", 13.766041, 100.640360),
        ];
        let catalog = Catalog::build_from(reference, definitions);
        let groups = group_and_sort(&catalog);

        let names: Vec<&str> = groups[0].stores.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["Makro First", "Makro Second"]);
    }

    #[test]
    fn test_catalog_serializes() {
        let catalog = Catalog::build(ReferencePoint::nida());
        let json = serde_json::to_string(&catalog).unwrap();
        assert!(json.contains("Lotus Bangkapi"));

        let restored: Catalog = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, catalog);
    }
}
