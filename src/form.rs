//! Settings-form field descriptors.
//!
//! The host renders one text input per color slot; this module produces the
//! data those fields are built from. No HTML is rendered here; the host's
//! field-rendering convention owns the markup.

use serde::Serialize;

use crate::config::Config;
use crate::models::{SlotKey, Variant};

/// Everything the host needs to render one color input field.
#[derive(Debug, Clone, Serialize)]
pub struct FieldDescriptor {
    /// Slot key, doubling as the input's name attribute
    pub key: SlotKey,
    /// Field label
    pub label: &'static str,
    /// Help text shown under the input
    pub description: &'static str,
    /// Currently stored value ("" when unset)
    pub value: String,
    /// Factory default hex value
    #[serde(rename = "default")]
    pub default_color: &'static str,
}

/// Builds the field descriptors for a variant, in form order.
///
/// The value carried per field is the stored string, not the sanitized
/// color: a cleared field round-trips as "" and the form shows exactly
/// what the store holds.
#[must_use]
pub fn field_descriptors(variant: Variant, config: &Config) -> Vec<FieldDescriptor> {
    variant
        .slots()
        .iter()
        .map(|slot| {
            let descriptor = slot.descriptor();
            FieldDescriptor {
                key: *slot,
                label: descriptor.label,
                description: descriptor.description,
                value: config.stored_value(*slot).to_string(),
                default_color: descriptor.default,
            }
        })
        .collect()
}
