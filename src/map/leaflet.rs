//! Leaflet-backed [`MapView`].
//!
//! Leaflet itself is loaded by the host page; this module binds the global
//! `L` namespace through `wasm-bindgen` and keeps the created layers keyed by
//! [`LayerId`]. JS failures after construction are logged and swallowed so a
//! single bad marker never takes the controller down.

use std::collections::HashMap;

use js_sys::{Array, Object, Reflect};
use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlElement};

use super::{LayerId, MapView};
use crate::geo::{Bounds, LatLng};
use crate::render::Popup;

#[wasm_bindgen]
extern "C" {
    /// `L.Map`
    type JsMap;

    #[wasm_bindgen(catch, js_namespace = L, js_name = map)]
    fn leaflet_map(container: &HtmlElement) -> Result<JsMap, JsValue>;

    #[wasm_bindgen(method, js_name = setView)]
    fn set_view(this: &JsMap, center: &Array, zoom: u8) -> JsMap;

    #[wasm_bindgen(method, js_name = fitBounds)]
    fn fit_bounds(this: &JsMap, bounds: &Array) -> JsMap;

    #[wasm_bindgen(method, js_name = removeLayer)]
    fn remove_layer(this: &JsMap, layer: &JsLayer) -> JsMap;

    /// `L.Layer`: tile layers, markers and polylines.
    type JsLayer;

    #[wasm_bindgen(js_namespace = L, js_name = tileLayer)]
    fn tile_layer(url_template: &str, options: &Object) -> JsLayer;

    #[wasm_bindgen(js_namespace = L, js_name = marker)]
    fn marker(position: &Array) -> JsLayer;

    #[wasm_bindgen(js_namespace = L, js_name = polyline)]
    fn polyline(points: &Array, options: &Object) -> JsLayer;

    #[wasm_bindgen(method, js_name = addTo)]
    fn add_to(this: &JsLayer, map: &JsMap) -> JsLayer;

    #[wasm_bindgen(method, js_name = bindPopup)]
    fn bind_popup(this: &JsLayer, content: &HtmlElement) -> JsLayer;

    #[wasm_bindgen(method, js_name = openPopup)]
    fn open_popup(this: &JsLayer) -> JsLayer;
}

/// A Leaflet map mounted on a host-page container.
pub struct LeafletMap {
    map: JsMap,
    document: Document,
    layers: HashMap<LayerId, JsLayer>,
    next_id: u64,
}

impl LeafletMap {
    /// Create the Leaflet map inside `container`.
    ///
    /// # Errors
    ///
    /// Returns the JS exception if `L` is missing or Leaflet rejects the container.
    pub fn mount(document: Document, container: &HtmlElement) -> Result<Self, JsValue> {
        let map = leaflet_map(container)?;
        Ok(Self { map, document, layers: HashMap::new(), next_id: 0 })
    }

    fn track(&mut self, layer: JsLayer) -> LayerId {
        let id = LayerId(self.next_id);
        self.next_id += 1;
        self.layers.insert(id, layer);
        id
    }

    /// `<b>title</b><br>detail` built from text nodes.
    fn popup_element(&self, popup: &Popup) -> Result<HtmlElement, JsValue> {
        let root: HtmlElement = self.document.create_element("div")?.dyn_into()?;
        let title = self.document.create_element("b")?;
        title.set_text_content(Some(&popup.title));
        root.append_child(&title)?;
        if let Some(detail) = &popup.detail {
            let line_break = self.document.create_element("br")?;
            root.append_child(&line_break)?;
            root.append_child(&self.document.create_text_node(detail))?;
        }
        Ok(root)
    }

    fn bind(&self, layer: &JsLayer, popup: &Popup) {
        match self.popup_element(popup) {
            Ok(content) => {
                layer.bind_popup(&content);
            }
            Err(err) => log::error!("leaflet: popup for {:?} failed: {err:?}", popup.title),
        }
    }
}

fn js_latlng(point: LatLng) -> Array {
    Array::of2(&JsValue::from_f64(point.lat), &JsValue::from_f64(point.lon))
}

fn string_options(pairs: &[(&str, &str)]) -> Object {
    let options = Object::new();
    for (key, value) in pairs {
        if let Err(err) = Reflect::set(&options, &JsValue::from_str(key), &JsValue::from_str(value)) {
            log::error!("leaflet: option {key} rejected: {err:?}");
        }
    }
    options
}

impl MapView for LeafletMap {
    fn add_tile_layer(&mut self, url_template: &str, attribution: &str) {
        let options = string_options(&[("attribution", attribution)]);
        tile_layer(url_template, &options).add_to(&self.map);
    }

    fn set_view(&mut self, center: LatLng, zoom: u8) {
        self.map.set_view(&js_latlng(center), zoom);
    }

    fn fit_bounds(&mut self, bounds: Bounds) {
        let corners = Array::of2(&js_latlng(bounds.south_west), &js_latlng(bounds.north_east));
        self.map.fit_bounds(&corners);
    }

    fn add_marker(&mut self, position: LatLng, popup: &Popup) -> LayerId {
        let layer = marker(&js_latlng(position)).add_to(&self.map);
        self.bind(&layer, popup);
        self.track(layer)
    }

    fn open_popup(&mut self, marker: LayerId) {
        if let Some(layer) = self.layers.get(&marker) {
            layer.open_popup();
        }
    }

    fn add_polyline(&mut self, points: &[LatLng], color: &str, popup: Option<&Popup>) -> LayerId {
        let latlngs: Array = points.iter().map(|p| JsValue::from(js_latlng(*p))).collect();
        let options = string_options(&[("color", color)]);
        let layer = polyline(&latlngs, &options).add_to(&self.map);
        if let Some(popup) = popup {
            self.bind(&layer, popup);
        }
        self.track(layer)
    }

    fn remove_layer(&mut self, layer: LayerId) {
        if let Some(js_layer) = self.layers.remove(&layer) {
            self.map.remove_layer(&js_layer);
        }
    }
}
