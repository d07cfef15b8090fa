//! Collection point browser UI components.
//!
//! Two views over the same visible subset, kept in sync through
//! [`AppContext`](crate::app::AppContext):
//!
//! - [`CollectionMap`] - Browser container with the filter header
//! - [`MapView`] - Schematic map with one marker per visible point
//! - [`PointList`] - Card list with directions buttons and empty state

mod collection_map;
mod header;
mod map_view;
mod point_list;

pub use collection_map::CollectionMap;
pub use header::Header;
pub use map_view::MapView;
pub use point_list::{card_dom_id, PointList};
