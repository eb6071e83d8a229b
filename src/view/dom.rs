//! `web-sys` implementation of [`PageView`] over the host page's elements.
//!
//! All text from the user or the backend is set through text nodes; only the
//! pre-sanitized assistant Markdown goes through `inner_html`.

use std::collections::HashMap;

use wasm_bindgen::JsValue;
use web_sys::{Document, Element, HtmlElement, HtmlInputElement};

use super::PageView;
use crate::render::{ImagesPanel, MessageBody, MessageView, PlaceCard, PlacesPanel};
use crate::state::transcript::MessageId;

/// Attribute carrying a card's index, read by the delegated click handler.
pub const PLACE_INDEX_ATTR: &str = "data-place-index";

/// CSS class of a place card.
pub const PLACE_CARD_CLASS: &str = "location-card";

pub struct DomView {
    document: Document,
    chat: HtmlElement,
    input: HtmlInputElement,
    places: HtmlElement,
    images: HtmlElement,
    /// Transient entries still on the page, removable by id.
    pending: HashMap<MessageId, Element>,
}

impl DomView {
    #[must_use]
    pub fn new(
        document: Document,
        chat: HtmlElement,
        input: HtmlInputElement,
        places: HtmlElement,
        images: HtmlElement,
    ) -> Self {
        Self { document, chat, input, places, images, pending: HashMap::new() }
    }

    fn element(&self, tag: &str, class: &str) -> Result<Element, JsValue> {
        let el = self.document.create_element(tag)?;
        if !class.is_empty() {
            el.set_class_name(class);
        }
        Ok(el)
    }

    fn text_element(&self, tag: &str, class: &str, text: &str) -> Result<Element, JsValue> {
        let el = self.element(tag, class)?;
        el.set_text_content(Some(text));
        Ok(el)
    }

    fn try_append_message(&mut self, message: &MessageView) -> Result<(), JsValue> {
        let entry = self.element("div", &format!("alert {}", message.class))?;
        entry.set_attribute("data-message-id", &message.id.0.to_string())?;
        let label = self.text_element("strong", "", &format!("{}:", message.label))?;
        entry.append_child(&label)?;
        entry.append_child(&self.document.create_text_node(" "))?;
        match &message.body {
            MessageBody::Text(text) => {
                entry.append_child(&self.document.create_text_node(text))?;
            }
            MessageBody::Html(html) => {
                let body = self.element("div", "chat-markdown")?;
                body.set_inner_html(html);
                entry.append_child(&body)?;
            }
        }
        self.chat.append_child(&entry)?;
        self.chat.set_scroll_top(self.chat.scroll_height());
        if message.transient {
            self.pending.insert(message.id, entry);
        }
        Ok(())
    }

    fn place_card(&self, card: &PlaceCard) -> Result<Element, JsValue> {
        let root = self.element("div", &format!("card mb-2 {PLACE_CARD_CLASS}"))?;
        root.set_attribute(PLACE_INDEX_ATTR, &card.index.to_string())?;
        let body = self.element("div", "card-body")?;
        let name = self.text_element("h6", "", &card.name)?;
        body.append_child(&name)?;
        let address = self.text_element("p", "small mb-1", &card.address)?;
        body.append_child(&address)?;
        let type_line = self.text_element("p", "small text-muted", &card.type_line)?;
        body.append_child(&type_line)?;
        root.append_child(&body)?;
        Ok(root)
    }

    fn try_show_places(&self, panel: &PlacesPanel) -> Result<(), JsValue> {
        self.places.set_inner_html("");
        match panel {
            PlacesPanel::Empty { notice } => {
                let empty = self.text_element("p", "text-muted", notice)?;
                self.places.append_child(&empty)?;
            }
            PlacesPanel::Cards(cards) => {
                for card in cards {
                    let root = self.place_card(card)?;
                    self.places.append_child(&root)?;
                }
            }
        }
        Ok(())
    }

    fn try_show_images(&self, panel: &ImagesPanel) -> Result<(), JsValue> {
        self.images.set_inner_html("");
        match panel {
            ImagesPanel::Empty { notice } => {
                let empty = self.text_element("p", "text-muted", notice)?;
                self.images.append_child(&empty)?;
            }
            ImagesPanel::Tiles(tiles) => {
                for tile in tiles {
                    let img = self.element("img", tile.class)?;
                    img.set_attribute("src", &tile.src)?;
                    img.set_attribute("style", &format!("max-height: {}px", tile.max_height_px))?;
                    self.images.append_child(&img)?;
                }
            }
        }
        Ok(())
    }
}

impl PageView for DomView {
    fn append_message(&mut self, message: &MessageView) {
        if let Err(err) = self.try_append_message(message) {
            log::error!("transcript: append {:?} failed: {err:?}", message.id);
        }
    }

    fn remove_message(&mut self, id: MessageId) {
        if let Some(entry) = self.pending.remove(&id) {
            entry.remove();
        }
    }

    fn input_value(&self) -> String {
        self.input.value()
    }

    fn clear_input(&mut self) {
        self.input.set_value("");
    }

    fn show_places(&mut self, panel: &PlacesPanel) {
        if let Err(err) = self.try_show_places(panel) {
            log::error!("places panel: render failed: {err:?}");
        }
    }

    fn show_images(&mut self, panel: &ImagesPanel) {
        if let Err(err) = self.try_show_images(panel) {
            log::error!("images panel: render failed: {err:?}");
        }
    }
}
