//! Hospital directory: the listed hospitals and where their pins sit on the
//! locator map.

mod catalog;
mod locator;

pub use catalog::{Catalog, Doctor, Hospital};
pub use locator::{pin_position, MapPin};
