//! Client-side state models owned by the controller.

pub mod transcript;
