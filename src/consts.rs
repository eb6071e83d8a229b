//! Compile-time defaults for the map client.

// ── Map ─────────────────────────────────────────────────────────

/// Latitude of the initial map center (São Luís, MA).
pub const DEFAULT_CENTER_LAT: f64 = -2.530_731;

/// Longitude of the initial map center (São Luís, MA).
pub const DEFAULT_CENTER_LON: f64 = -44.306_396;

/// Zoom level at page load.
pub const DEFAULT_ZOOM: u8 = 13;

/// Zoom level when recentering on a response's main location.
pub const MAIN_LOCATION_ZOOM: u8 = 14;

/// Zoom level when a place card is clicked.
pub const PLACE_FOCUS_ZOOM: u8 = 16;

/// OpenStreetMap-compatible tile URL template.
pub const TILE_URL_TEMPLATE: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";

/// Attribution shown in the map corner.
pub const TILE_ATTRIBUTION: &str = "&copy; OpenStreetMap";

/// Stroke color of the itinerary polyline.
pub const ROUTE_COLOR: &str = "blue";

// ── Network ─────────────────────────────────────────────────────

/// Chat endpoint on the hosting origin.
pub const CHAT_ENDPOINT: &str = "/api/chat";

// ── Transcript ──────────────────────────────────────────────────

pub const USER_LABEL: &str = "Você";
pub const ASSISTANT_LABEL: &str = "Assistente";

/// Body of the transient entry shown while a request is outstanding.
pub const PROCESSING_TEXT: &str = "Processando sua pergunta...";

/// Fixed apology appended when a request fails.
pub const APOLOGY_TEXT: &str = "Desculpe, ocorreu um erro. Tente novamente.";

// ── Side panels ─────────────────────────────────────────────────

pub const NO_PLACES_TEXT: &str = "Nenhum local recomendado";
pub const NO_IMAGES_TEXT: &str = "Nenhuma imagem disponível";

/// Prefix of the place-type line on a place card.
pub const PLACE_TYPE_PREFIX: &str = "Tipo: ";

/// Maximum rendered height of a gallery image, in CSS pixels.
pub const IMAGE_MAX_HEIGHT_PX: u32 = 150;
