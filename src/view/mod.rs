//! Page seam between the controller and the host document.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host page owns the transcript container, the text input, and the two
//! side panels. The controller hands this seam finished descriptors from
//! [`crate::render`]; implementations only translate them into elements.

#[cfg(feature = "hydrate")]
pub mod dom;

use crate::render::{ImagesPanel, MessageView, PlacesPanel};
use crate::state::transcript::MessageId;

/// DOM-facing operations the controller performs.
pub trait PageView {
    /// Append an entry to the transcript and scroll it into view.
    fn append_message(&mut self, message: &MessageView);

    /// Remove a previously appended entry.
    fn remove_message(&mut self, id: MessageId);

    /// Current text of the message input.
    fn input_value(&self) -> String;

    fn clear_input(&mut self);

    /// Replace the places panel contents.
    fn show_places(&mut self, panel: &PlacesPanel);

    /// Replace the images panel contents.
    fn show_images(&mut self, panel: &ImagesPanel);
}
