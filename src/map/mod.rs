//! Map seam between the controller and the tile map widget.
//!
//! DESIGN
//! ======
//! The controller only ever speaks in [`LayerId`]s. Implementations own the
//! real layer objects and forget an id once it is removed, so removing an
//! unknown or already-removed id is a no-op.

#[cfg(feature = "hydrate")]
pub mod leaflet;

use crate::geo::{Bounds, LatLng};
use crate::render::Popup;

/// Handle to a marker or polyline added to the map.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LayerId(pub u64);

/// Operations the controller needs from an interactive map.
pub trait MapView {
    /// Attach the base tile layer.
    fn add_tile_layer(&mut self, url_template: &str, attribution: &str);

    /// Center the viewport on `center` at `zoom`.
    fn set_view(&mut self, center: LatLng, zoom: u8);

    /// Fit the viewport so `bounds` is fully visible.
    fn fit_bounds(&mut self, bounds: Bounds);

    /// Add a point marker with a bound popup.
    fn add_marker(&mut self, position: LatLng, popup: &Popup) -> LayerId;

    /// Open the popup bound to a marker.
    fn open_popup(&mut self, marker: LayerId);

    /// Add a polyline through `points` in order.
    fn add_polyline(&mut self, points: &[LatLng], color: &str, popup: Option<&Popup>) -> LayerId;

    fn remove_layer(&mut self, layer: LayerId);
}
