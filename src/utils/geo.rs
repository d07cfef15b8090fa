//! Marker placement for the schematic map view.
//!
//! Coordinates are mapped linearly into the bounding box of the points on
//! screen. No projection or distance math: this only spreads markers out
//! so nearby points stay recognisably arranged.

use crate::models::Coordinate;

/// Latitude/longitude bounding box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub min: Coordinate,
    pub max: Coordinate,
}

impl Bounds {
    /// Smallest box containing every coordinate, or `None` for no input.
    pub fn enclosing<I>(coords: I) -> Option<Self>
    where
        I: IntoIterator<Item = Coordinate>,
    {
        let mut iter = coords.into_iter();
        let first = iter.next()?;
        Some(iter.fold(
            Self {
                min: first,
                max: first,
            },
            |b, c| Self {
                min: Coordinate::new(b.min.lat.min(c.lat), b.min.lng.min(c.lng)),
                max: Coordinate::new(b.max.lat.max(c.lat), b.max.lng.max(c.lng)),
            },
        ))
    }
}

/// Screen position as CSS percentages from the top-left corner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MarkerPosition {
    pub left: f64,
    pub top: f64,
}

impl MarkerPosition {
    /// Inline `style` value for an absolutely positioned marker.
    pub fn style(&self) -> String {
        format!("left: {:.2}%; top: {:.2}%;", self.left, self.top)
    }
}

/// Place `coord` inside `bounds`, keeping `padding` percent clear at each edge.
///
/// North is up. An axis with zero extent centers the marker on that axis.
pub fn marker_position(coord: Coordinate, bounds: &Bounds, padding: f64) -> MarkerPosition {
    let span = 100.0 - 2.0 * padding;
    let x = normalize(coord.lng, bounds.min.lng, bounds.max.lng);
    let y = 1.0 - normalize(coord.lat, bounds.min.lat, bounds.max.lat);
    MarkerPosition {
        left: padding + x * span,
        top: padding + y * span,
    }
}

fn normalize(value: f64, min: f64, max: f64) -> f64 {
    let extent = max - min;
    if extent <= f64::EPSILON {
        return 0.5;
    }
    ((value - min) / extent).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds() -> Bounds {
        Bounds::enclosing([
            Coordinate::new(34.048, -118.25),
            Coordinate::new(34.055, -118.243),
        ])
        .unwrap()
    }

    #[test]
    fn test_enclosing() {
        let b = Bounds::enclosing([
            Coordinate::new(34.052, -118.243),
            Coordinate::new(34.055, -118.248),
            Coordinate::new(34.048, -118.25),
        ])
        .unwrap();
        assert_eq!(b.min, Coordinate::new(34.048, -118.25));
        assert_eq!(b.max, Coordinate::new(34.055, -118.243));
        assert_eq!(Bounds::enclosing(Vec::new()), None);
    }

    #[test]
    fn test_corners() {
        let b = bounds();
        // South-west corner is bottom-left
        let sw = marker_position(b.min, &b, 10.0);
        assert!((sw.left - 10.0).abs() < 1e-9);
        assert!((sw.top - 90.0).abs() < 1e-9);
        // North-east corner is top-right
        let ne = marker_position(b.max, &b, 10.0);
        assert!((ne.left - 90.0).abs() < 1e-9);
        assert!((ne.top - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_single_point_centers() {
        let only = Coordinate::new(34.05, -118.245);
        let b = Bounds::enclosing([only]).unwrap();
        let pos = marker_position(only, &b, 10.0);
        assert_eq!(pos, MarkerPosition { left: 50.0, top: 50.0 });
    }

    #[test]
    fn test_outside_bounds_clamped() {
        let b = bounds();
        let pos = marker_position(Coordinate::new(40.0, -120.0), &b, 10.0);
        assert!((pos.left - 10.0).abs() < 1e-9);
        assert!((pos.top - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_style() {
        let pos = MarkerPosition { left: 12.5, top: 50.0 };
        assert_eq!(pos.style(), "left: 12.50%; top: 50.00%;");
    }
}
