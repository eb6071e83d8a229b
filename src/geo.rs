//! Geographic value types shared by the map seam and the wire DTOs.

#[cfg(test)]
#[path = "geo_test.rs"]
mod geo_test;

/// A WGS84 coordinate in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLng {
    pub lat: f64,
    pub lon: f64,
}

impl LatLng {
    #[must_use]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// Axis-aligned lat/lon rectangle, as passed to the map's `fitBounds`.
///
/// Routes are local (a single city), so antimeridian wrapping is ignored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub south_west: LatLng,
    pub north_east: LatLng,
}

impl Bounds {
    /// Degenerate bounds covering a single point.
    #[must_use]
    pub fn around(point: LatLng) -> Self {
        Self { south_west: point, north_east: point }
    }

    /// Smallest bounds containing every point, or `None` for an empty slice.
    #[must_use]
    pub fn from_points(points: &[LatLng]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let mut bounds = Self::around(*first);
        for point in rest {
            bounds.extend(*point);
        }
        Some(bounds)
    }

    /// Grow the bounds to include `point`.
    pub fn extend(&mut self, point: LatLng) {
        self.south_west.lat = self.south_west.lat.min(point.lat);
        self.south_west.lon = self.south_west.lon.min(point.lon);
        self.north_east.lat = self.north_east.lat.max(point.lat);
        self.north_east.lon = self.north_east.lon.max(point.lon);
    }
}
