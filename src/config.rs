//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.
//! Data assets are loaded at compile time using `include_str!`.

use crate::models::Coordinate;

// =============================================================================
// Data Assets (loaded at compile time)
// =============================================================================

/// Bundled collection point dataset.
pub const COLLECTION_POINTS_JSON: &str = include_str!("../assets/data/collection_points.json");

/// Bundled health impact panel content.
pub const HEALTH_IMPACT_JSON: &str = include_str!("../assets/data/health.json");

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name shown in the page header.
pub const APP_NAME: &str = "EcoCollect";

/// Application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Map Configuration
// =============================================================================

/// Reference point drawn as the user marker when none is supplied.
pub const DEFAULT_USER_LOCATION: Coordinate = Coordinate::new(34.05, -118.245);

/// Base URL for external directions. Query is appended as `?q=lat,lng`.
pub const MAPS_BASE_URL: &str = "https://maps.google.com/";

/// Domains the directions handler may open.
/// Anything else is blocked.
pub const ALLOWED_MAP_DOMAINS: &[&str] = &["maps.google.com", "google.com"];

/// Inset (percent of map width/height) kept clear around markers.
pub const MARKER_PADDING_PCT: f64 = 10.0;

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Lucide` - Minimal, thin strokes (default)
/// - `Bootstrap` - Familiar, slightly bolder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Lucide,
    Bootstrap,
}

/// Current icon theme used throughout the application.
/// Change this value to switch icon styles globally.
pub const ICON_THEME: IconTheme = IconTheme::Lucide;
