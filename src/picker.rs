//! Client color-picker seeding.
//!
//! The settings page binds a picker widget to each color input and needs
//! the factory default for every field as its "reset to default" swatch.
//! This payload is what gets handed to that client-side initializer.

use anyhow::{Context, Result};
use serde::Serialize;
use std::collections::BTreeMap;

use crate::models::{SlotKey, Variant};

/// Default-color payload consumed by the client picker initializer.
///
/// Serializes as `{ "defaultColors": { "<slot>": "#rrggbb", ... } }`.
/// Only carries defaults: currently stored values travel through the form
/// fields themselves, not through the picker seed.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PickerSeed {
    /// Factory default per slot of the active variant
    pub default_colors: BTreeMap<SlotKey, &'static str>,
}

impl PickerSeed {
    /// Builds the seed for a variant from the static slot registry.
    #[must_use]
    pub fn new(variant: Variant) -> Self {
        let default_colors = variant
            .slots()
            .iter()
            .map(|slot| (*slot, slot.descriptor().default))
            .collect();

        Self { default_colors }
    }

    /// Serializes the seed as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize picker seed")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_covers_variant_slots() {
        let seed = PickerSeed::new(Variant::Menu);
        assert_eq!(seed.default_colors.len(), 4);

        let seed = PickerSeed::new(Variant::AdminBarMenu);
        assert_eq!(seed.default_colors.len(), 9);
        assert_eq!(
            seed.default_colors.get(&SlotKey::AdminBarText),
            Some(&"#eeeeee")
        );
    }

    #[test]
    fn test_seed_json_shape() {
        let seed = PickerSeed::new(Variant::Menu);
        let json = seed.to_json().unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let defaults = value
            .get("defaultColors")
            .expect("camelCase defaultColors key")
            .as_object()
            .unwrap();

        assert_eq!(defaults.len(), 4);
        assert_eq!(
            defaults.get("menu-background").unwrap().as_str(),
            Some("#23282d")
        );
        assert_eq!(
            defaults.get("menu-hover-text").unwrap().as_str(),
            Some("#ffffff")
        );
    }
}
