//! Color slot registry and variant definitions.
//!
//! Slots are the fixed set of named color roles an administrator can
//! override. The registry is a static table built once at compile time;
//! nothing here is created or destroyed at runtime.

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::HexColor;

/// Identifier for one color role in the admin chrome.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum SlotKey {
    /// Background of the top horizontal admin bar
    AdminBarBackground,
    /// Text and icon color of the admin bar
    AdminBarText,
    /// Hover/active background of admin bar items
    AdminBarHover,
    /// Background of the left-hand admin menu
    MenuBackground,
    /// Default text and icon color of the admin menu
    MenuText,
    /// Hover background of admin menu items
    MenuHoverBackground,
    /// Hover text and icon color of admin menu items
    MenuHoverText,
    /// Background of the currently active menu item
    MenuCurrentBackground,
    /// Text and icon color of the currently active menu item
    MenuCurrentText,
}

/// Static descriptor for one color slot.
///
/// Carries everything the settings form and picker seeding need: the slot
/// key, human-readable label and description, and the factory default hex
/// value shown as the "reset to default" swatch.
#[derive(Debug, Clone, Copy)]
pub struct ColorSlot {
    /// The slot this descriptor belongs to
    pub key: SlotKey,
    /// Field label shown next to the input
    pub label: &'static str,
    /// Help text shown under the input
    pub description: &'static str,
    /// Factory default hex value
    pub default: &'static str,
}

/// The full slot registry, in registration order (admin bar, then menu).
pub const SLOTS: [ColorSlot; 9] = [
    ColorSlot {
        key: SlotKey::AdminBarBackground,
        label: "Admin Bar Background Color",
        description: "Choose the background color for the top horizontal admin bar.",
        default: "#23282d",
    },
    ColorSlot {
        key: SlotKey::AdminBarText,
        label: "Admin Bar Text Color",
        description: "Choose the default text and icon color for the top horizontal admin bar.",
        default: "#eeeeee",
    },
    ColorSlot {
        key: SlotKey::AdminBarHover,
        label: "Admin Bar Item Hover/Active Color",
        description: "Choose the background color for admin bar items on hover, and for active/current items.",
        default: "#0073aa",
    },
    ColorSlot {
        key: SlotKey::MenuBackground,
        label: "Menu Background Color",
        description: "Choose the main background color for the left-hand admin menu and submenu containers.",
        default: "#23282d",
    },
    ColorSlot {
        key: SlotKey::MenuText,
        label: "Menu Text Color",
        description: "Choose the default color for left-hand menu text and icons.",
        default: "#a7aaad",
    },
    ColorSlot {
        key: SlotKey::MenuHoverBackground,
        label: "Menu Item Hover Background Color",
        description: "Choose the background color when hovering over left-hand menu items.",
        default: "#0073aa",
    },
    ColorSlot {
        key: SlotKey::MenuHoverText,
        label: "Menu Item Hover Text Color",
        description: "Choose the text and icon color when hovering over left-hand menu items.",
        default: "#ffffff",
    },
    ColorSlot {
        key: SlotKey::MenuCurrentBackground,
        label: "Current Menu Item Background Color",
        description: "Choose the background color for the currently active left-hand menu item.",
        default: "#191e23",
    },
    ColorSlot {
        key: SlotKey::MenuCurrentText,
        label: "Current Menu Item Text Color",
        description: "Choose the text and icon color for the currently active left-hand menu item.",
        default: "#ffffff",
    },
];

impl SlotKey {
    /// Returns the kebab-case identifier used in settings files, CLI
    /// arguments, and serialized payloads.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AdminBarBackground => "admin-bar-background",
            Self::AdminBarText => "admin-bar-text",
            Self::AdminBarHover => "admin-bar-hover",
            Self::MenuBackground => "menu-background",
            Self::MenuText => "menu-text",
            Self::MenuHoverBackground => "menu-hover-background",
            Self::MenuHoverText => "menu-hover-text",
            Self::MenuCurrentBackground => "menu-current-background",
            Self::MenuCurrentText => "menu-current-text",
        }
    }

    /// Looks up the static descriptor for this slot.
    #[must_use]
    pub fn descriptor(self) -> &'static ColorSlot {
        SLOTS
            .iter()
            .find(|slot| slot.key == self)
            .unwrap()
    }

    /// Returns the factory default color for this slot.
    #[must_use]
    pub fn default_color(self) -> HexColor {
        HexColor::parse(self.descriptor().default).unwrap()
    }
}

impl fmt::Display for SlotKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SlotKey {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        SLOTS
            .iter()
            .map(|slot| slot.key)
            .find(|key| key.as_str() == s)
            .ok_or_else(|| {
                let known = SLOTS
                    .iter()
                    .map(|slot| slot.key.as_str())
                    .collect::<Vec<_>>()
                    .join(", ");
                anyhow!("Unknown color slot '{s}'. Known slots: {known}")
            })
    }
}

/// Which chrome surfaces a deployment themes.
///
/// The menu-only shape predates the combined one; both survive as rule-table
/// variants fed to the same generator rather than as separate code paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Variant {
    /// Left-hand admin menu only (4 slots)
    Menu,
    /// Admin bar plus admin menu (all 9 slots)
    #[default]
    AdminBarMenu,
}

impl Variant {
    /// Returns the slots this variant exposes, in form/display order.
    #[must_use]
    pub const fn slots(self) -> &'static [SlotKey] {
        match self {
            Self::Menu => &[
                SlotKey::MenuBackground,
                SlotKey::MenuText,
                SlotKey::MenuHoverBackground,
                SlotKey::MenuHoverText,
            ],
            Self::AdminBarMenu => &[
                SlotKey::AdminBarBackground,
                SlotKey::AdminBarText,
                SlotKey::AdminBarHover,
                SlotKey::MenuBackground,
                SlotKey::MenuText,
                SlotKey::MenuHoverBackground,
                SlotKey::MenuHoverText,
                SlotKey::MenuCurrentBackground,
                SlotKey::MenuCurrentText,
            ],
        }
    }

    /// Returns the kebab-case identifier for this variant.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Menu => "menu",
            Self::AdminBarMenu => "admin-bar-menu",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Variant {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "menu" => Ok(Self::Menu),
            "admin-bar-menu" => Ok(Self::AdminBarMenu),
            other => Err(anyhow!(
                "Unknown variant '{other}'. Expected 'menu' or 'admin-bar-menu'"
            )),
        }
    }
}
