//! Core logic for the collection point browser.
//!
//! This module provides:
//! - [`projector`] visible subset projection shared by the map and list
//! - [`BrowserState`] filter and selection state
//! - [`ActionDispatcher`] selection and directions event forwarding
//! - [`catalog`] bundled dataset loading

mod browser;
pub mod catalog;
mod dispatch;
pub mod error;
pub mod projector;

pub use browser::BrowserState;
pub use dispatch::{ActionDispatcher, DirectionsRequest};
pub use projector::visible_count;
