//! Validation for externally supplied store definitions.
//!
//! The built-in data set is trusted and never validated on the build
//! path; callers feeding their own definitions into
//! [`Catalog::build_from`](crate::Catalog::build_from) can run this
//! check first.

use crate::{CatalogError, Result, StoreDefinition};
use std::collections::HashSet;

/// Checks a definition list for empty fields, duplicate names, and
/// out-of-range coordinates. Returns the first violation found.
pub fn validate(definitions: &[StoreDefinition]) -> Result<()> {
    let mut seen_names = HashSet::new();

    for (index, def) in definitions.iter().enumerate() {
        if def.name.is_empty() {
            return Err(CatalogError::EmptyName { index });
        }
        if def.brand.is_empty() {
            return Err(CatalogError::EmptyBrand { name: def.name.clone() });
        }
        if !seen_names.insert(def.name.as_str()) {
            return Err(CatalogError::DuplicateName(def.name.clone()));
        }
        if !def.coordinate.is_valid() {
            return Err(CatalogError::CoordinateOutOfRange {
                name: def.name.clone(),
                latitude: def.coordinate.latitude,
                longitude: def.coordinate.longitude,
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtin_definitions;
    use storefinder_geo::Coordinate;

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
    fn test_builtin_data_passes_validation() {
        assert_eq!(validate(&builtin_definitions()), Ok(()));
    }

    #[test]
    fn test_empty_name_is_rejected() {
        let defs = vec![definition("Lotus", "", 13.77, 100.65)];
        assert_eq!(validate(&defs), Err(CatalogError::EmptyName { index: 0 }));
    }

    #[test]
    fn test_empty_brand_is_rejected() {
        let defs = vec![definition("", "Nameless Brand Store", 13.77, 100.65)];
        assert_eq!(
            validate(&defs),
            Err(CatalogError::EmptyBrand { name: "Nameless Brand Store".to_string() })
        );
    }

    #[test]
    fn test_duplicate_name_is_rejected() {
        let defs = vec![
            definition("Lotus", "Lotus Bangkapi", 13.768142, 100.643965),
            definition("Makro", "Lotus Bangkapi", 13.766041, 100.640360),
        ];
        assert_eq!(
            validate(&defs),
            Err(CatalogError::DuplicateName("Lotus Bangkapi".to_string()))
        );
    }

    #[test]
    fn test_out_of_range_coordinate_is_rejected() {
        let defs = vec![definition("Lotus", "Lotus Nowhere", 95.0, 100.65)];
        assert!(matches!(
            validate(&defs),
            Err(CatalogError::CoordinateOutOfRange { .. })
        ));
    }
}
