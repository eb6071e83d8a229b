//! The chat/map controller.
//!
//! ARCHITECTURE
//! ============
//! [`ChatMapController`] owns the transcript, the tracked map overlays and
//! the side-panel models, and talks to the page through the [`MapView`] and
//! [`PageView`] seams. Each user or network event maps to one named handler
//! method, so a test harness can drive the whole flow without a browser.
//!
//! A submission is split in two synchronous halves, [`ChatMapController::begin_submit`]
//! and [`ChatMapController::settle`], joined by the async [`dispatch`] driver.
//! In the browser the controller sits in a `RefCell` and the driver never
//! holds a borrow across the network await, so a second submission can start
//! while the first is in flight. Each settles independently and the later
//! reply wins.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use std::cell::RefCell;

use crate::config::ControllerConfig;
use crate::consts::{APOLOGY_TEXT, PROCESSING_TEXT};
use crate::geo::{Bounds, LatLng};
use crate::map::{LayerId, MapView};
use crate::net::api::{ChatError, ChatTransport};
use crate::net::types::{ChatRequest, ChatResponse, Itinerary, Place};
use crate::render::{
    ImagesPanel, PlacesPanel, Popup, location_popup, place_popup, render_images, render_message, render_places,
    route_popup,
};
use crate::state::transcript::{MessageId, MessageKind, Transcript};
use crate::view::PageView;

/// A request accepted by [`ChatMapController::begin_submit`] and not yet settled.
#[derive(Clone, Debug, PartialEq)]
pub struct PendingRequest {
    /// Transcript id of this request's "processing" entry.
    pub indicator: MessageId,
    pub request: ChatRequest,
}

pub struct ChatMapController<M, V> {
    map: M,
    view: V,
    config: ControllerConfig,
    transcript: Transcript,
    /// Every marker currently on the map, main location included.
    markers: Vec<LayerId>,
    /// Markers for the current place cards, index-aligned with the cards.
    place_markers: Vec<LayerId>,
    route: Option<LayerId>,
    places: PlacesPanel,
    images: ImagesPanel,
    last_error: Option<ChatError>,
}

impl<M: MapView, V: PageView> ChatMapController<M, V> {
    /// Center the map on the configured default and attach the tile layer.
    pub fn new(mut map: M, view: V, config: ControllerConfig) -> Self {
        map.set_view(config.default_center, config.default_zoom);
        map.add_tile_layer(&config.tile_url_template, &config.tile_attribution);
        Self {
            map,
            view,
            config,
            transcript: Transcript::new(),
            markers: Vec::new(),
            place_markers: Vec::new(),
            route: None,
            places: PlacesPanel::default(),
            images: ImagesPanel::default(),
            last_error: None,
        }
    }

    // --- Event handlers ---

    /// Send button click or Enter in the input: submit the input's text.
    #[must_use]
    pub fn on_send(&mut self) -> Option<PendingRequest> {
        let text = self.view.input_value();
        self.begin_submit(&text)
    }

    /// Record a user message and open a pending request for it.
    ///
    /// Blank input is ignored and returns `None`. Otherwise the user entry is
    /// appended, the input cleared, and a "processing" entry appended, in that
    /// order. The caller sends the returned request and passes the outcome to
    /// [`Self::settle`].
    #[must_use]
    pub fn begin_submit(&mut self, text: &str) -> Option<PendingRequest> {
        let message = text.trim();
        if message.is_empty() {
            return None;
        }

        self.append(MessageKind::User, message);
        self.view.clear_input();
        let indicator = self.append(MessageKind::Pending, PROCESSING_TEXT);

        log::debug!("chat: submitting {} chars (pending {:?})", message.len(), indicator);
        Some(PendingRequest { indicator, request: ChatRequest::new(message) })
    }

    /// Apply the outcome of a request opened by [`Self::begin_submit`].
    pub fn settle(&mut self, pending: &PendingRequest, result: Result<ChatResponse, ChatError>) {
        match result {
            Ok(response) => self.apply_response(pending.indicator, &response),
            Err(err) => self.apply_failure(pending.indicator, err),
        }
    }

    /// Success path: reply text, fresh overlays, side panels, route.
    pub fn apply_response(&mut self, indicator: MessageId, response: &ChatResponse) {
        self.remove_indicator(indicator);
        self.append(MessageKind::Assistant, &response.response);

        self.clear_overlays();

        if let Some(location) = &response.main_location {
            let position = location.position();
            let marker = self.map.add_marker(position, &location_popup(location));
            self.map.open_popup(marker);
            self.markers.push(marker);
            self.map.set_view(position, self.config.main_location_zoom);

            self.refresh_places(response.nearby_places.as_deref());
            self.refresh_images(response.images.as_deref());
        }

        if let Some(itinerary) = &response.itinerary
            && !itinerary.points.is_empty()
        {
            self.draw_itinerary(itinerary);
        }
    }

    /// Failure path: apology in the transcript, overlays left as they were.
    pub fn apply_failure(&mut self, indicator: MessageId, err: ChatError) {
        self.remove_indicator(indicator);
        self.append(MessageKind::Error, APOLOGY_TEXT);
        log::error!("chat: {err}");
        self.last_error = Some(err);
    }

    /// Place card click: focus the map on the place and open its popup.
    ///
    /// Indices without a current card are ignored.
    pub fn select_place(&mut self, index: usize) {
        let Some(position) = self.places.cards().get(index).map(|card| card.position) else {
            log::warn!("places: no card at index {index}");
            return;
        };
        self.map.set_view(position, self.config.place_focus_zoom);
        if let Some(marker) = self.place_markers.get(index) {
            self.map.open_popup(*marker);
        }
    }

    // --- Panels and overlays ---

    /// Replace the places panel and add one tracked marker per place.
    pub fn refresh_places(&mut self, places: Option<&[Place]>) {
        self.places = render_places(places);
        self.view.show_places(&self.places);

        self.place_markers.clear();
        for place in places.unwrap_or_default() {
            let marker = self.map.add_marker(place.position(), &place_popup(place));
            self.markers.push(marker);
            self.place_markers.push(marker);
        }
    }

    /// Replace the images panel.
    pub fn refresh_images(&mut self, images: Option<&[String]>) {
        self.images = render_images(images);
        self.view.show_images(&self.images);
    }

    /// Remove every tracked marker and the route. Idempotent.
    pub fn clear_overlays(&mut self) {
        for marker in self.markers.drain(..) {
            self.map.remove_layer(marker);
        }
        self.place_markers.clear();
        if let Some(route) = self.route.take() {
            self.map.remove_layer(route);
        }
    }

    /// Replace the route with a polyline through `points` and fit the view to it.
    pub fn draw_route(&mut self, points: &[LatLng]) {
        self.draw_route_with_popup(points, None);
    }

    fn draw_itinerary(&mut self, itinerary: &Itinerary) {
        let summary = route_popup(itinerary);
        self.draw_route_with_popup(&itinerary.positions(), summary.as_ref());
    }

    fn draw_route_with_popup(&mut self, points: &[LatLng], popup: Option<&Popup>) {
        if let Some(route) = self.route.take() {
            self.map.remove_layer(route);
        }
        let Some(bounds) = Bounds::from_points(points) else {
            return;
        };
        self.route = Some(self.map.add_polyline(points, &self.config.route_color, popup));
        self.map.fit_bounds(bounds);
    }

    // --- Transcript ---

    fn append(&mut self, kind: MessageKind, text: &str) -> MessageId {
        let message = self.transcript.push(kind, text);
        self.view.append_message(&render_message(&message));
        message.id
    }

    fn remove_indicator(&mut self, indicator: MessageId) {
        if self.transcript.remove_pending(indicator) {
            self.view.remove_message(indicator);
        }
    }

    // --- Queries ---

    #[must_use]
    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Tracked markers, main location first when present.
    #[must_use]
    pub fn markers(&self) -> &[LayerId] {
        &self.markers
    }

    #[must_use]
    pub fn route(&self) -> Option<LayerId> {
        self.route
    }

    #[must_use]
    pub fn places(&self) -> &PlacesPanel {
        &self.places
    }

    #[must_use]
    pub fn images(&self) -> &ImagesPanel {
        &self.images
    }

    /// Most recent request failure, kept for diagnostics.
    #[must_use]
    pub fn last_error(&self) -> Option<&ChatError> {
        self.last_error.as_ref()
    }

    #[must_use]
    pub fn map(&self) -> &M {
        &self.map
    }

    #[must_use]
    pub fn view(&self) -> &V {
        &self.view
    }

    #[must_use]
    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }
}

/// Send an accepted request and settle it on the controller.
///
/// The controller is not borrowed while the transport is awaited.
pub async fn dispatch<M, V, T>(controller: &RefCell<ChatMapController<M, V>>, transport: &T, pending: PendingRequest)
where
    M: MapView,
    V: PageView,
    T: ChatTransport,
{
    let result = transport.send(&pending.request).await;
    controller.borrow_mut().settle(&pending, result);
}

/// Full submission: [`ChatMapController::begin_submit`] then [`dispatch`].
///
/// Returns `false` when the text was blank and nothing was sent.
pub async fn submit<M, V, T>(controller: &RefCell<ChatMapController<M, V>>, transport: &T, text: &str) -> bool
where
    M: MapView,
    V: PageView,
    T: ChatTransport,
{
    let pending = controller.borrow_mut().begin_submit(text);
    let Some(pending) = pending else {
        return false;
    };
    dispatch(controller, transport, pending).await;
    true
}
