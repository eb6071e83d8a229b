//! Pure renderers from domain records to view descriptors.
//!
//! Nothing here touches the DOM. The browser view turns each descriptor into
//! elements; tests assert on the descriptors directly. User-supplied and
//! backend-supplied strings stay plain text except the assistant reply,
//! which is Markdown rendered with raw HTML stripped.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use pulldown_cmark::{Event, Options, Parser, html};

use crate::consts::{ASSISTANT_LABEL, IMAGE_MAX_HEIGHT_PX, NO_IMAGES_TEXT, NO_PLACES_TEXT, PLACE_TYPE_PREFIX, USER_LABEL};
use crate::geo::LatLng;
use crate::net::types::{Itinerary, MainLocation, Place};
use crate::state::transcript::{Message, MessageId, MessageKind};

// =============================================================
// Transcript
// =============================================================

/// Body of a rendered transcript entry.
#[derive(Clone, Debug, PartialEq)]
pub enum MessageBody {
    /// Set as text content.
    Text(String),
    /// Sanitized HTML set as inner HTML.
    Html(String),
}

/// A transcript entry ready for the view.
#[derive(Clone, Debug, PartialEq)]
pub struct MessageView {
    pub id: MessageId,
    /// Bootstrap alert variant, e.g. `"alert-primary"`.
    pub class: &'static str,
    /// Speaker label rendered in bold before the body.
    pub label: &'static str,
    pub body: MessageBody,
    /// Removed again once its request settles; only the pending indicator.
    pub transient: bool,
}

#[must_use]
pub fn render_message(message: &Message) -> MessageView {
    let (class, label) = match message.kind {
        MessageKind::User => ("alert-primary", USER_LABEL),
        MessageKind::Assistant | MessageKind::Error => ("alert-secondary", ASSISTANT_LABEL),
        MessageKind::Pending => ("alert-warning", ASSISTANT_LABEL),
    };
    let body = match message.kind {
        MessageKind::Assistant => MessageBody::Html(render_markdown_html(&message.text)),
        _ => MessageBody::Text(message.text.clone()),
    };
    MessageView { id: message.id, class, label, body, transient: message.kind == MessageKind::Pending }
}

/// Render assistant Markdown to HTML.
#[must_use]
pub fn render_markdown_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    // Safety: drop inline/block raw HTML from model output before rendering.
    let parser = Parser::new_ext(markdown, options).filter_map(|event| match event {
        Event::Html(_) | Event::InlineHtml(_) => None,
        other => Some(other),
    });

    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}

// =============================================================
// Places panel
// =============================================================

/// One place summary card.
#[derive(Clone, Debug, PartialEq)]
pub struct PlaceCard {
    /// Position in the response's place list; routes card clicks.
    pub index: usize,
    pub name: String,
    pub address: String,
    /// `"Tipo: <type>"`.
    pub type_line: String,
    pub position: LatLng,
}

#[derive(Clone, Debug, PartialEq)]
pub enum PlacesPanel {
    Empty { notice: &'static str },
    Cards(Vec<PlaceCard>),
}

impl PlacesPanel {
    #[must_use]
    pub fn cards(&self) -> &[PlaceCard] {
        match self {
            Self::Empty { .. } => &[],
            Self::Cards(cards) => cards,
        }
    }
}

impl Default for PlacesPanel {
    fn default() -> Self {
        Self::Empty { notice: NO_PLACES_TEXT }
    }
}

#[must_use]
pub fn render_places(places: Option<&[Place]>) -> PlacesPanel {
    match places {
        None | Some([]) => PlacesPanel::default(),
        Some(places) => PlacesPanel::Cards(
            places
                .iter()
                .enumerate()
                .map(|(index, place)| PlaceCard {
                    index,
                    name: place.name.clone(),
                    address: place.address.clone(),
                    type_line: format!("{PLACE_TYPE_PREFIX}{}", place.kind),
                    position: place.position(),
                })
                .collect(),
        ),
    }
}

// =============================================================
// Images panel
// =============================================================

#[derive(Clone, Debug, PartialEq)]
pub struct ImageTile {
    pub src: String,
    pub class: &'static str,
    pub max_height_px: u32,
}

#[derive(Clone, Debug, PartialEq)]
pub enum ImagesPanel {
    Empty { notice: &'static str },
    Tiles(Vec<ImageTile>),
}

impl ImagesPanel {
    #[must_use]
    pub fn tiles(&self) -> &[ImageTile] {
        match self {
            Self::Empty { .. } => &[],
            Self::Tiles(tiles) => tiles,
        }
    }
}

impl Default for ImagesPanel {
    fn default() -> Self {
        Self::Empty { notice: NO_IMAGES_TEXT }
    }
}

#[must_use]
pub fn render_images(images: Option<&[String]>) -> ImagesPanel {
    match images {
        None | Some([]) => ImagesPanel::default(),
        Some(urls) => ImagesPanel::Tiles(
            urls.iter()
                .map(|src| ImageTile { src: src.clone(), class: "img-fluid mb-2", max_height_px: IMAGE_MAX_HEIGHT_PX })
                .collect(),
        ),
    }
}

// =============================================================
// Map labels
// =============================================================

/// Popup content for a marker or route: a bold title and an optional line.
#[derive(Clone, Debug, PartialEq)]
pub struct Popup {
    pub title: String,
    pub detail: Option<String>,
}

#[must_use]
pub fn place_popup(place: &Place) -> Popup {
    Popup {
        title: place.name.clone(),
        detail: Some(place.address.clone()).filter(|a| !a.is_empty()),
    }
}

#[must_use]
pub fn location_popup(location: &MainLocation) -> Popup {
    Popup {
        title: location.name.clone(),
        detail: location.address.clone().filter(|a| !a.is_empty()),
    }
}

/// Route summary, present only when the backend reported a distance.
#[must_use]
pub fn route_popup(itinerary: &Itinerary) -> Option<Popup> {
    let meters = itinerary.total_distance?;
    Some(Popup {
        title: "Itinerário".to_owned(),
        detail: Some(format!("Distância total estimada: {:.2} km", meters / 1000.0)),
    })
}
