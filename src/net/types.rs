//! Wire DTOs for the `/api/chat` exchange.
//!
//! DESIGN
//! ======
//! Every field past `response` is optional and may arrive as JSON `null`;
//! absence means "nothing to show". Coordinates accept numeric strings as
//! well as numbers because the backend serializes database decimals as text.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

use crate::geo::LatLng;

/// Request body: `{"message": "<user text>"}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

impl ChatRequest {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

/// Response body from the chat endpoint.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ChatResponse {
    /// Assistant reply, Markdown.
    pub response: String,
    /// Primary point of interest for the query.
    #[serde(default)]
    pub main_location: Option<MainLocation>,
    /// Recommendations around the main location.
    #[serde(default)]
    pub nearby_places: Option<Vec<Place>>,
    /// Gallery image URLs.
    #[serde(default)]
    pub images: Option<Vec<String>>,
    #[serde(default)]
    pub itinerary: Option<Itinerary>,
}

/// The single primary location of a response.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MainLocation {
    pub name: String,
    #[serde(deserialize_with = "deserialize_coordinate")]
    pub lat: f64,
    #[serde(deserialize_with = "deserialize_coordinate")]
    pub lon: f64,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
}

impl MainLocation {
    #[must_use]
    pub fn position(&self) -> LatLng {
        LatLng::new(self.lat, self.lon)
    }
}

/// A nearby recommendation shown as a card and a marker.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub name: String,
    #[serde(default, deserialize_with = "deserialize_text_or_null")]
    pub address: String,
    /// Category such as `"restaurant"` or `"monumento histórico"`.
    #[serde(default, rename = "type", deserialize_with = "deserialize_text_or_null")]
    pub kind: String,
    #[serde(deserialize_with = "deserialize_coordinate")]
    pub lat: f64,
    #[serde(deserialize_with = "deserialize_coordinate")]
    pub lon: f64,
}

impl Place {
    #[must_use]
    pub fn position(&self) -> LatLng {
        LatLng::new(self.lat, self.lon)
    }
}

/// One vertex of a suggested route.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ItineraryPoint {
    #[serde(deserialize_with = "deserialize_coordinate")]
    pub lat: f64,
    #[serde(deserialize_with = "deserialize_coordinate")]
    pub lon: f64,
}

impl ItineraryPoint {
    #[must_use]
    pub fn position(&self) -> LatLng {
        LatLng::new(self.lat, self.lon)
    }
}

/// Ordered route through several points.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Itinerary {
    #[serde(default)]
    pub points: Vec<ItineraryPoint>,
    /// Total route length in meters, when the backend computed it.
    #[serde(default)]
    pub total_distance: Option<f64>,
}

impl Itinerary {
    #[must_use]
    pub fn positions(&self) -> Vec<LatLng> {
        self.points.iter().map(ItineraryPoint::position).collect()
    }
}

/// `null` reads as an empty string.
fn deserialize_text_or_null<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn deserialize_coordinate<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    let coord = match value {
        serde_json::Value::Number(number) => number
            .as_f64()
            .ok_or_else(|| D::Error::custom("expected finite coordinate"))?,
        serde_json::Value::String(text) => text
            .trim()
            .parse::<f64>()
            .map_err(|_| D::Error::custom(format!("invalid coordinate: {text}")))?,
        _ => return Err(D::Error::custom("expected number or numeric string")),
    };
    if !coord.is_finite() {
        return Err(D::Error::custom("expected finite coordinate"));
    }
    Ok(coord)
}
