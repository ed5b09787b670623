//! Full page emission: title, map section, and grouped store cards.

use crate::card::{card_groups, CardGroup};
use crate::templates::registry;
use crate::{MapView, MarkerRequest, Result};
use serde::Serialize;
use storefinder_catalog::{group_and_sort, Catalog};

/// The store locator page.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    /// Document title and top heading
    pub title: String,
    /// Introductory line under the title
    pub intro: String,
}

impl Default for Page {
    fn default() -> Self {
        Self {
            title: "Store Locator".to_string(),
            intro: "Find stores near NIDA".to_string(),
        }
    }
}

impl Page {
    /// A page with a custom title and intro line.
    pub fn new(title: impl Into<String>, intro: impl Into<String>) -> Self {
        Self { title: title.into(), intro: intro.into() }
    }

    /// Renders the complete HTML document for the given catalog.
    ///
    /// The map is centered on the catalog's reference point and carries
    /// one marker for it plus one per store; cards follow, grouped by
    /// brand in display order with the closest store first.
    pub fn render(&self, catalog: &Catalog) -> Result<String> {
        let mut markers = vec![MarkerRequest::for_reference(catalog.reference())];
        markers.extend(catalog.stores().iter().map(MarkerRequest::for_store));

        let map_html =
            MapView::centered_on(catalog.reference().coordinate).to_html(&markers)?;

        let data = PageData {
            title: &self.title,
            intro: &self.intro,
            reference_label: &catalog.reference().label,
            map_html,
            groups: card_groups(&group_and_sort(catalog)),
        };

        Ok(registry()?.render("page", &data)?)
    }
}

#[derive(Serialize)]
struct PageData<'a> {
    title: &'a str,
    intro: &'a str,
    reference_label: &'a str,
    map_html: String,
    groups: Vec<CardGroup>,
}
