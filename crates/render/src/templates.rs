//! Embedded handlebars templates.

use crate::Result;
use handlebars::Handlebars;

const MAP_TEMPLATE: &str = include_str!("../templates/map.hbs");
const PAGE_TEMPLATE: &str = include_str!("../templates/page.hbs");

/// Registry with every template this crate renders.
pub(crate) fn registry() -> Result<Handlebars<'static>> {
    let mut handlebars = Handlebars::new();
    handlebars.register_template_string("map", MAP_TEMPLATE)?;
    handlebars.register_template_string("page", PAGE_TEMPLATE)?;
    Ok(handlebars)
}
