//! Browser entry point.
//!
//! Looks up the host page's elements, mounts Leaflet, builds the controller
//! and binds the three listeners: send button click, Enter in the input, and
//! a delegated click on the places panel. Listeners live for the page, so
//! their closures are leaked with `forget`.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, HtmlInputElement, KeyboardEvent};

use crate::config::ControllerConfig;
use crate::controller::{ChatMapController, dispatch};
use crate::map::leaflet::LeafletMap;
use crate::mount::{
    CHAT_CONTAINER_ID, IMAGES_CONTAINER_ID, MAP_CONTAINER_ID, MountError, PLACES_CONTAINER_ID, SEND_BUTTON_ID,
    USER_INPUT_ID, is_submit_key, parse_place_index,
};
use crate::net::api::HttpChatTransport;
use crate::view::dom::{DomView, PLACE_CARD_CLASS, PLACE_INDEX_ATTR};

type Controller = ChatMapController<LeafletMap, DomView>;

impl From<MountError> for JsValue {
    fn from(err: MountError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}

/// Module start: install panic/log hooks and mount on the current page.
///
/// # Errors
///
/// Throws to the JS host if any required element is missing.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        log::warn!("logger already installed");
    }
    mount(ControllerConfig::default())?;
    log::info!("geochat: mounted");
    Ok(())
}

/// Bind a controller to the host page.
///
/// # Errors
///
/// Returns [`MountError`] if the document or any required element is missing,
/// if Leaflet cannot be created, or if a listener cannot be attached.
pub fn mount(config: ControllerConfig) -> Result<(), MountError> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or(MountError::NoDocument)?;

    let map_container: HtmlElement = element(&document, MAP_CONTAINER_ID)?;
    let chat: HtmlElement = element(&document, CHAT_CONTAINER_ID)?;
    let input: HtmlInputElement = element(&document, USER_INPUT_ID)?;
    let send_button: HtmlElement = element(&document, SEND_BUTTON_ID)?;
    let places: HtmlElement = element(&document, PLACES_CONTAINER_ID)?;
    let images: HtmlElement = element(&document, IMAGES_CONTAINER_ID)?;

    let map = LeafletMap::mount(document.clone(), &map_container).map_err(|e| MountError::Map(format!("{e:?}")))?;
    let transport = Rc::new(HttpChatTransport::new(config.chat_endpoint.clone()));
    let view = DomView::new(document, chat, input.clone(), places.clone(), images);
    let controller = Rc::new(RefCell::new(ChatMapController::new(map, view, config)));

    {
        let controller = Rc::clone(&controller);
        let transport = Rc::clone(&transport);
        listen(&send_button, "click", move |_: Event| send(&controller, &transport))?;
    }
    {
        let controller = Rc::clone(&controller);
        let transport = Rc::clone(&transport);
        listen(&input, "keypress", move |ev: KeyboardEvent| {
            if is_submit_key(&ev.key()) {
                send(&controller, &transport);
            }
        })?;
    }
    listen(&places, "click", move |ev: Event| {
        if let Some(index) = clicked_place_index(&ev) {
            controller.borrow_mut().select_place(index);
        }
    })?;

    Ok(())
}

fn element<T: JsCast>(document: &Document, id: &'static str) -> Result<T, MountError> {
    document
        .get_element_by_id(id)
        .ok_or(MountError::MissingElement(id))?
        .dyn_into::<T>()
        .map_err(|_| MountError::WrongElementType(id))
}

fn listen<E>(target: &EventTarget, event: &str, handler: impl FnMut(E) + 'static) -> Result<(), MountError>
where
    E: FromWasmAbi + 'static,
{
    let closure = Closure::<dyn FnMut(E)>::new(handler);
    target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .map_err(|e| MountError::Listener(format!("{event}: {e:?}")))?;
    closure.forget();
    Ok(())
}

/// Start a submission from the input and run it in the background.
fn send(controller: &Rc<RefCell<Controller>>, transport: &Rc<HttpChatTransport>) {
    let pending = controller.borrow_mut().on_send();
    let Some(pending) = pending else {
        return;
    };
    let controller = Rc::clone(controller);
    let transport = Rc::clone(transport);
    wasm_bindgen_futures::spawn_local(async move {
        dispatch(&controller, transport.as_ref(), pending).await;
    });
}

/// Index of the place card containing the click target, if any.
fn clicked_place_index(ev: &Event) -> Option<usize> {
    let Ok(target) = ev.target()?.dyn_into::<Element>() else {
        return None;
    };
    let card = match target.closest(&format!(".{PLACE_CARD_CLASS}")) {
        Ok(card) => card?,
        Err(err) => {
            log::warn!("places: closest() failed: {err:?}");
            return None;
        }
    };
    parse_place_index(card.get_attribute(PLACE_INDEX_ATTR).as_deref())
}
