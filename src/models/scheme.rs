//! Validated slot-to-color mapping.

use std::collections::BTreeMap;

use super::{sanitize, HexColor, SlotKey};

/// The set of color overrides currently in effect.
///
/// Every value in a `ColorScheme` has already passed sanitization; the type
/// has no way to hold a raw string. A slot with no entry means "no override"
/// and the stylesheet generator simply skips it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorScheme {
    colors: BTreeMap<SlotKey, HexColor>,
}

impl ColorScheme {
    /// Creates an empty scheme (no overrides).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a scheme from raw stored strings, sanitizing each one.
    ///
    /// Values that no longer pass sanitization are dropped to unset, with a
    /// warning on the logging layer so an operator can see that a stored
    /// setting was discarded. Empty strings are the explicit unset marker
    /// and are skipped silently.
    pub fn from_raw<'a, I>(values: I) -> Self
    where
        I: IntoIterator<Item = (SlotKey, &'a str)>,
    {
        let mut scheme = Self::new();

        for (slot, raw) in values {
            match sanitize(raw) {
                Some(color) => {
                    scheme.colors.insert(slot, color);
                }
                None => {
                    if !raw.is_empty() {
                        tracing::warn!(slot = %slot, value = raw, "discarding invalid stored color");
                    }
                }
            }
        }

        scheme
    }

    /// Sets an override for a slot.
    pub fn set(&mut self, slot: SlotKey, color: HexColor) {
        self.colors.insert(slot, color);
    }

    /// Removes the override for a slot, returning the previous value.
    pub fn unset(&mut self, slot: SlotKey) -> Option<HexColor> {
        self.colors.remove(&slot)
    }

    /// Returns the override for a slot, if one is set.
    #[must_use]
    pub fn get(&self, slot: SlotKey) -> Option<&HexColor> {
        self.colors.get(&slot)
    }

    /// Returns true when no slot has an override.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Number of slots with an override.
    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Iterates over the set overrides in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (SlotKey, &HexColor)> + '_ {
        self.colors.iter().map(|(key, color)| (*key, color))
    }
}
