//! Data models for color slots, validated hex values, and schemes.
//!
//! Models are independent of the settings store and the stylesheet
//! generator; they only describe what a color override is.

pub mod hex;
pub mod scheme;
pub mod slot;

// Re-export all model types
pub use hex::{sanitize, HexColor};
pub use scheme::ColorScheme;
pub use slot::{ColorSlot, SlotKey, Variant, SLOTS};
