//! # geochat
//!
//! Browser controller for the GeoChat tourism assistant: a chat transcript
//! next to a Leaflet map. Each user message is posted to `/api/chat`; the
//! reply is rendered as Markdown in the transcript while the map shows the
//! main location, nearby places and an optional itinerary, and the side
//! panels list place cards and images.
//!
//! The crate is compiled to WebAssembly for the browser (`hydrate` feature)
//! and natively for tests. All decisions live in [`controller`] behind the
//! [`map::MapView`], [`view::PageView`] and [`net::api::ChatTransport`] seams;
//! the `hydrate`-only modules only translate to Leaflet, the DOM and `fetch`.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`controller`] | [`controller::ChatMapController`] and the async submit driver |
//! | [`state`] | Transcript model with pending-entry tracking |
//! | [`render`] | Pure renderers for messages, place cards, images and popups |
//! | [`map`] | Map seam; Leaflet binding under `hydrate` |
//! | [`view`] | Page seam; `web-sys` binding under `hydrate` |
//! | [`net`] | Wire types, response parsing, `gloo-net` transport |
//! | [`geo`] | Coordinates and bounds |
//! | [`mount`] | Host-page element ids and DOM event decoding |
//! | [`config`] / [`consts`] | Compile-time defaults |

pub mod config;
pub mod consts;
pub mod controller;
pub mod geo;
pub mod map;
pub mod mount;
pub mod net;
pub mod render;
pub mod state;
pub mod view;
#[cfg(feature = "hydrate")]
pub mod web;
