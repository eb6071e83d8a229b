//! Host-page contract: element ids, mount errors, and DOM event decoding.
//!
//! Kept free of `web-sys` so the decoding rules are testable natively; the
//! browser wiring in `web` feeds raw strings through these helpers.

#[cfg(test)]
#[path = "mount_test.rs"]
mod mount_test;

pub const MAP_CONTAINER_ID: &str = "map-container";
pub const CHAT_CONTAINER_ID: &str = "chat-container";
pub const USER_INPUT_ID: &str = "user-input";
pub const SEND_BUTTON_ID: &str = "send-btn";
pub const PLACES_CONTAINER_ID: &str = "places-container";
pub const IMAGES_CONTAINER_ID: &str = "images-container";

/// Fatal page initialization failure.
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum MountError {
    #[error("no document available")]
    NoDocument,
    #[error("missing element #{0}")]
    MissingElement(&'static str),
    #[error("element #{0} has the wrong type")]
    WrongElementType(&'static str),
    #[error("map setup failed: {0}")]
    Map(String),
    #[error("event binding failed: {0}")]
    Listener(String),
}

/// Whether a `keypress` key value submits the message.
#[must_use]
pub fn is_submit_key(key: &str) -> bool {
    key == "Enter"
}

/// Decode a place card's index attribute.
#[must_use]
pub fn parse_place_index(attr: Option<&str>) -> Option<usize> {
    let raw = attr?;
    match raw.trim().parse() {
        Ok(index) => Some(index),
        Err(err) => {
            log::warn!("places: bad card index {raw:?}: {err}");
            None
        }
    }
}
