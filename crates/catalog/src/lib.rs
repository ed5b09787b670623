//! Store catalog for the store locator.
//!
//! This crate provides:
//!
//! - **Store data**: the static list of store definitions and the
//!   annotated records derived from it
//! - **Brand handling**: an enumerated brand type with a total
//!   classification function, no string fallthrough
//! - **Catalog building**: one-shot distance annotation against a fixed
//!   reference point
//! - **Grouping**: brand partitioning with per-group distance ordering
//!
//! The catalog is built once, then read-only. All types are plain owned
//! data and safe to share across threads.
//!
//! # Example
//!
//! ```
//! use storefinder_catalog::{group_and_sort, Brand, Catalog, ReferencePoint};
//!
//! let catalog = Catalog::build(ReferencePoint::nida());
//! let groups = group_and_sort(&catalog);
//!
//! let lotus = groups.iter().find(|g| g.brand == Brand::Lotus).unwrap();
//! assert_eq!(lotus.stores[0].name, "Lotus Bangkapi");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

mod brand;
mod catalog;
mod error;
mod store;
mod validation;

pub use brand::Brand;
pub use catalog::{group_and_sort, BrandGroup, Catalog, ReferencePoint};
pub use error::{CatalogError, Result};
pub use store::{builtin_definitions, StoreDefinition, StoreRecord};
pub use validation::validate;
