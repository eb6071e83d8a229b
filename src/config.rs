//! Controller configuration.
//!
//! Every field defaults to the matching constant in [`crate::consts`]. The
//! browser entry point always uses the defaults; tests override individual
//! fields to make assertions independent of the shipped values.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::consts::{
    CHAT_ENDPOINT, DEFAULT_CENTER_LAT, DEFAULT_CENTER_LON, DEFAULT_ZOOM, MAIN_LOCATION_ZOOM, PLACE_FOCUS_ZOOM,
    ROUTE_COLOR, TILE_ATTRIBUTION, TILE_URL_TEMPLATE,
};
use crate::geo::LatLng;

#[derive(Clone, Debug, PartialEq)]
pub struct ControllerConfig {
    /// Map center at page load.
    pub default_center: LatLng,
    pub default_zoom: u8,
    /// Zoom applied when a response carries a main location.
    pub main_location_zoom: u8,
    /// Zoom applied when a place card is clicked.
    pub place_focus_zoom: u8,
    pub tile_url_template: String,
    pub tile_attribution: String,
    /// Path of the chat endpoint, relative to the page origin.
    pub chat_endpoint: String,
    pub route_color: String,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            default_center: LatLng::new(DEFAULT_CENTER_LAT, DEFAULT_CENTER_LON),
            default_zoom: DEFAULT_ZOOM,
            main_location_zoom: MAIN_LOCATION_ZOOM,
            place_focus_zoom: PLACE_FOCUS_ZOOM,
            tile_url_template: TILE_URL_TEMPLATE.to_owned(),
            tile_attribution: TILE_ATTRIBUTION.to_owned(),
            chat_endpoint: CHAT_ENDPOINT.to_owned(),
            route_color: ROUTE_COLOR.to_owned(),
        }
    }
}
