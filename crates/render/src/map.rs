//! Leaflet map fragment emission.

use crate::templates::registry;
use crate::{MarkerRequest, Result};
use serde::Serialize;
use storefinder_geo::Coordinate;

/// Default zoom level, matching the original page.
pub const DEFAULT_ZOOM: u8 = 13;
/// Default map width in pixels.
pub const DEFAULT_WIDTH: u32 = 1200;
/// Default map height in pixels.
pub const DEFAULT_HEIGHT: u32 = 600;

/// An embeddable interactive map: a div plus the Leaflet script that
/// populates it. The emitted fragment expects the Leaflet assets to be
/// loaded by the surrounding document.
#[derive(Debug, Clone, PartialEq)]
pub struct MapView {
    /// Map center in decimal degrees
    pub center: Coordinate,
    /// Initial zoom level
    pub zoom: u8,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl MapView {
    /// A map with the default dimensions, centered on the given point.
    pub fn centered_on(center: Coordinate) -> Self {
        Self {
            center,
            zoom: DEFAULT_ZOOM,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }

    /// Renders the map fragment with the given markers.
    pub fn to_html(&self, markers: &[MarkerRequest]) -> Result<String> {
        let marker_data: Vec<MarkerJs<'_>> = markers
            .iter()
            .map(|m| MarkerJs {
                lat: m.latitude,
                lon: m.longitude,
                label: &m.label,
                detail: &m.detail_html,
                color: m.color.css_name(),
            })
            .collect();

        // Keep "</script>" sequences out of the inline script block
        let markers_json = serde_json::to_string(&marker_data)?.replace("</", "<\\/");

        let data = MapData {
            map_id: "store-map",
            center_lat: self.center.latitude,
            center_lon: self.center.longitude,
            zoom: self.zoom,
            width: self.width,
            height: self.height,
            markers_json,
        };

        Ok(registry()?.render("map", &data)?)
    }
}

#[derive(Serialize)]
struct MarkerJs<'a> {
    lat: f64,
    lon: f64,
    label: &'a str,
    detail: &'a str,
    color: &'static str,
}

#[derive(Serialize)]
struct MapData {
    map_id: &'static str,
    center_lat: f64,
    center_lon: f64,
    zoom: u8,
    width: u32,
    height: u32,
    markers_json: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefinder_catalog::{Catalog, ReferencePoint};

    fn test_markers() -> Vec<MarkerRequest> {
        let catalog = Catalog::build(ReferencePoint::nida());
        let mut markers = vec![MarkerRequest::for_reference(catalog.reference())];
        markers.extend(catalog.stores().iter().map(MarkerRequest::for_store));
        markers
    }

    #[test]
    fn test_map_fragment_contains_div_and_markers() {
        let map = MapView::centered_on(Coordinate::new(13.771447, 100.654466));
        let html = map.to_html(&test_markers()).unwrap();

        assert!(html.contains("id=\"store-map\""));
        assert!(html.contains("width: 1200px"));
        assert!(html.contains("height: 600px"));
        assert!(html.contains("13.771447"));
        // Reference plus four stores
        assert_eq!(html.matches("\"lat\":").count(), 5);
        assert!(html.contains("Lotus Bangkapi"));
        assert!(html.contains("\"color\":\"red\""));
    }

    #[test]
    fn test_map_fragment_neutralizes_closing_tags() {
        let mut markers = test_markers();
        markers[0].detail_html = "</script><b>x</b>".to_string();

        let map = MapView::centered_on(Coordinate::new(13.771447, 100.654466));
        let html = map.to_html(&markers).unwrap();
        assert!(!html.contains("</script><b>"));
    }

    #[test]
    fn test_custom_dimensions() {
        let map = MapView {
            center: Coordinate::new(0.0, 0.0),
            zoom: 10,
            width: 800,
            height: 400,
        };
        let html = map.to_html(&[]).unwrap();

        assert!(html.contains("width: 800px"));
        assert!(html.contains("height: 400px"));
        assert!(html.contains(", 10)"));
    }
}
