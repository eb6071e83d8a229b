#![allow(clippy::float_cmp)]

use serde_json::json;

use super::*;

// =============================================================
// ChatRequest
// =============================================================

#[test]
fn chat_request_serializes_message_field() {
    let body = serde_json::to_value(ChatRequest::new("onde comer?")).unwrap();
    assert_eq!(body, json!({ "message": "onde comer?" }));
}

// =============================================================
// ChatResponse
// =============================================================

#[test]
fn response_only_reply_leaves_optionals_absent() {
    let resp: ChatResponse = serde_json::from_value(json!({ "response": "Olá" })).unwrap();
    assert_eq!(resp.response, "Olá");
    assert!(resp.main_location.is_none());
    assert!(resp.nearby_places.is_none());
    assert!(resp.images.is_none());
    assert!(resp.itinerary.is_none());
}

#[test]
fn null_optionals_are_absent() {
    let resp: ChatResponse = serde_json::from_value(json!({
        "response": "ok",
        "main_location": null,
        "nearby_places": null,
        "images": null,
        "itinerary": null
    }))
    .unwrap();
    assert!(resp.main_location.is_none());
    assert!(resp.nearby_places.is_none());
    assert!(resp.images.is_none());
    assert!(resp.itinerary.is_none());
}

#[test]
fn missing_response_field_is_an_error() {
    let result = serde_json::from_value::<ChatResponse>(json!({ "images": [] }));
    assert!(result.is_err());
}

#[test]
fn full_location_payload_parses() {
    let resp: ChatResponse = serde_json::from_value(json!({
        "response": "Centro Histórico",
        "main_location": {
            "name": "Praia Grande",
            "address": "Centro, São Luís",
            "type": "monumento histórico",
            "lat": -2.528,
            "lon": -44.305
        },
        "nearby_places": [
            { "name": "Cafofinho", "address": "Rua da Estrela", "type": "restaurant", "lat": -2.529, "lon": -44.304 }
        ],
        "itinerary": null,
        "images": ["https://img.example/1.jpg"]
    }))
    .unwrap();

    let main = resp.main_location.unwrap();
    assert_eq!(main.name, "Praia Grande");
    assert_eq!(main.kind.as_deref(), Some("monumento histórico"));
    assert_eq!(main.position(), LatLng::new(-2.528, -44.305));

    let places = resp.nearby_places.unwrap();
    assert_eq!(places.len(), 1);
    assert_eq!(places[0].kind, "restaurant");
    assert_eq!(places[0].address, "Rua da Estrela");

    assert_eq!(resp.images.unwrap(), vec!["https://img.example/1.jpg".to_owned()]);
}

#[test]
fn main_location_without_address_or_type() {
    let loc: MainLocation = serde_json::from_value(json!({ "name": "X", "lat": 1, "lon": 2 })).unwrap();
    assert!(loc.address.is_none());
    assert!(loc.kind.is_none());
    assert_eq!(loc.lat, 1.0);
}

#[test]
fn itinerary_payload_ignores_unused_places_key() {
    let resp: ChatResponse = serde_json::from_value(json!({
        "response": "### Itinerário Otimizado:",
        "places": [{ "name": "ignored" }],
        "itinerary": {
            "points": [{ "lat": 1, "lon": 1 }, { "lat": 2, "lon": 2 }],
            "total_distance": 157_000.5
        },
        "images": []
    }))
    .unwrap();
    let itinerary = resp.itinerary.unwrap();
    assert_eq!(itinerary.positions(), vec![LatLng::new(1.0, 1.0), LatLng::new(2.0, 2.0)]);
    assert_eq!(itinerary.total_distance, Some(157_000.5));
    assert!(resp.nearby_places.is_none());
}

#[test]
fn itinerary_without_points_defaults_empty() {
    let itinerary: Itinerary = serde_json::from_value(json!({})).unwrap();
    assert!(itinerary.points.is_empty());
    assert!(itinerary.total_distance.is_none());
}

// =============================================================
// Coordinates
// =============================================================

#[test]
fn coordinate_accepts_numeric_string() {
    let point: ItineraryPoint = serde_json::from_value(json!({ "lat": "-2.53", "lon": " -44.30 " })).unwrap();
    assert_eq!(point.lat, -2.53);
    assert_eq!(point.lon, -44.30);
}

#[test]
fn coordinate_rejects_non_numeric_string() {
    let result = serde_json::from_value::<ItineraryPoint>(json!({ "lat": "north", "lon": 0 }));
    assert!(result.is_err());
}

#[test]
fn coordinate_rejects_null() {
    let result = serde_json::from_value::<Place>(json!({ "name": "X", "lat": null, "lon": 0 }));
    assert!(result.is_err());
}

#[test]
fn place_defaults_missing_address_and_type() {
    let place: Place = serde_json::from_value(json!({ "name": "X", "lat": 0.5, "lon": 1.5 })).unwrap();
    assert_eq!(place.address, "");
    assert_eq!(place.kind, "");
    assert_eq!(place.position(), LatLng::new(0.5, 1.5));
}

#[test]
fn place_treats_null_address_and_type_as_empty() {
    let place: Place =
        serde_json::from_value(json!({ "name": "X", "address": null, "type": null, "lat": 1, "lon": 1 })).unwrap();
    assert_eq!(place.address, "");
    assert_eq!(place.kind, "");
}

#[test]
fn null_place_field_keeps_the_reply() {
    let response = crate::net::api::parse_chat_response(
        r#"{"response":"ok","nearby_places":[{"name":"A","address":"x","type":null,"lat":1,"lon":1}]}"#,
    )
    .unwrap();
    assert_eq!(response.response, "ok");
    let places = response.nearby_places.unwrap();
    assert_eq!(places[0].address, "x");
    assert_eq!(places[0].kind, "");
}
