//! Stylesheet generation from a color scheme.
//!
//! One parameterized generator walks a variant's rule table in fixed order
//! and interpolates the scheme's validated values. Slots without an override
//! contribute nothing; a run with no overrides at all produces no stylesheet
//! rather than an empty one.

use std::fmt::Write as _;

use crate::models::{ColorScheme, HexColor, Variant};

use super::rules::{rule_groups, Property, RuleGroup};

/// Generates the stylesheet for a variant from the given scheme.
///
/// Returns `None` when no slot referenced by the variant's rule table is
/// set, so callers can skip injecting an empty `<style>` block. Otherwise
/// the result contains one block per rule group with at least one set
/// declaration, in table order, every declaration marked `!important`.
///
/// # Examples
///
/// ```
/// use admin_colors::models::{ColorScheme, HexColor, SlotKey, Variant};
/// use admin_colors::styles::generate_stylesheet;
///
/// let mut scheme = ColorScheme::new();
/// assert!(generate_stylesheet(Variant::Menu, &scheme).is_none());
///
/// scheme.set(SlotKey::MenuBackground, HexColor::parse("#23282d").unwrap());
/// let css = generate_stylesheet(Variant::Menu, &scheme).unwrap();
/// assert!(css.contains("background-color: #23282d !important;"));
/// ```
#[must_use]
pub fn generate_stylesheet(variant: Variant, scheme: &ColorScheme) -> Option<String> {
    let mut output = String::new();

    for group in rule_groups(variant) {
        if let Some(block) = generate_group(group, scheme) {
            if !output.is_empty() {
                output.push('\n');
            }
            output.push_str(&block);
        }
    }

    if output.is_empty() {
        None
    } else {
        Some(output)
    }
}

/// Generates one rule block, or `None` when every declaration is unset.
fn generate_group(group: &RuleGroup, scheme: &ColorScheme) -> Option<String> {
    let set: Vec<(Property, &HexColor)> = group
        .declarations
        .iter()
        .filter_map(|declaration| {
            scheme
                .get(declaration.slot)
                .map(|color| (declaration.property, color))
        })
        .collect();

    if set.is_empty() {
        return None;
    }

    let mut block = format!("/* {} */\n", group.name);
    block.push_str(&group.selectors.join(",\n"));
    block.push_str(" {\n");

    for (property, color) in set {
        let _ = writeln!(block, "    {}: {} !important;", property.as_css(), color);
    }

    block.push_str("}\n");
    Some(block)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SlotKey;

    fn scheme_of(values: &[(SlotKey, &str)]) -> ColorScheme {
        let mut scheme = ColorScheme::new();
        for (slot, hex) in values {
            scheme.set(*slot, HexColor::parse(hex).unwrap());
        }
        scheme
    }

    #[test]
    fn test_empty_scheme_emits_nothing() {
        let scheme = ColorScheme::new();
        assert!(generate_stylesheet(Variant::Menu, &scheme).is_none());
        assert!(generate_stylesheet(Variant::AdminBarMenu, &scheme).is_none());
    }

    #[test]
    fn test_single_slot_emits_only_its_groups() {
        let scheme = scheme_of(&[(SlotKey::MenuBackground, "#23282d")]);
        let css = generate_stylesheet(Variant::AdminBarMenu, &scheme).unwrap();

        assert!(css.contains("/* Menu background */"));
        assert!(css.contains("background-color: #23282d !important;"));

        // No other group appears, and no block is empty.
        assert!(!css.contains("/* Menu text and icons */"));
        assert!(!css.contains("/* Admin bar background */"));
        assert!(!css.contains("color:"));
        assert!(!css.contains("{\n}"));
    }

    #[test]
    fn test_combined_hover_group_sets_both_properties() {
        let scheme = scheme_of(&[
            (SlotKey::MenuHoverBackground, "#0073aa"),
            (SlotKey::MenuHoverText, "#ffffff"),
        ]);
        let css = generate_stylesheet(Variant::AdminBarMenu, &scheme).unwrap();

        let hover_block = css
            .split("/* Submenu hover */")
            .nth(1)
            .expect("submenu hover block present");
        let hover_block = hover_block.split("}\n").next().unwrap();

        assert!(hover_block.contains("background-color: #0073aa !important;"));
        assert!(hover_block.contains("color: #ffffff !important;"));
    }

    #[test]
    fn test_partial_combined_group_omits_unset_declaration() {
        let scheme = scheme_of(&[(SlotKey::MenuHoverBackground, "#0073aa")]);
        let css = generate_stylesheet(Variant::AdminBarMenu, &scheme).unwrap();

        let hover_block = css
            .split("/* Submenu hover */")
            .nth(1)
            .expect("submenu hover block present");
        let hover_block = hover_block.split("}\n").next().unwrap();

        assert!(hover_block.contains("background-color: #0073aa !important;"));
        assert!(!hover_block.contains("color:"));
    }

    #[test]
    fn test_groups_follow_table_order() {
        let scheme = scheme_of(&[
            (SlotKey::AdminBarBackground, "#111111"),
            (SlotKey::MenuCurrentText, "#eeeeee"),
        ]);
        let css = generate_stylesheet(Variant::AdminBarMenu, &scheme).unwrap();

        let bar = css.find("/* Admin bar background */").unwrap();
        let current = css.find("/* Current menu item text and icons */").unwrap();
        assert!(bar < current);
    }

    #[test]
    fn test_generation_is_monotone() {
        let subset = scheme_of(&[(SlotKey::MenuBackground, "#000000")]);
        let superset = scheme_of(&[
            (SlotKey::MenuBackground, "#000000"),
            (SlotKey::MenuHoverBackground, "#0073aa"),
            (SlotKey::AdminBarText, "#eeeeee"),
        ]);

        let small = generate_stylesheet(Variant::AdminBarMenu, &subset).unwrap();
        let large = generate_stylesheet(Variant::AdminBarMenu, &superset).unwrap();

        // Every line emitted for the subset survives in the superset output.
        for line in small.lines().filter(|line| !line.is_empty()) {
            assert!(
                large.contains(line),
                "line lost when more slots were set: {line}"
            );
        }
        assert!(large.len() > small.len());
    }

    #[test]
    fn test_menu_variant_ignores_admin_bar_slots() {
        let scheme = scheme_of(&[(SlotKey::AdminBarBackground, "#111111")]);
        assert!(generate_stylesheet(Variant::Menu, &scheme).is_none());
    }

    #[test]
    fn test_end_to_end_scenario() {
        // background=#000, text unset, hover background=#111, hover text=#fff
        let scheme = scheme_of(&[
            (SlotKey::MenuBackground, "#000"),
            (SlotKey::MenuHoverBackground, "#111"),
            (SlotKey::MenuHoverText, "#fff"),
        ]);
        let css = generate_stylesheet(Variant::AdminBarMenu, &scheme).unwrap();

        assert!(css.contains("/* Menu background */"));
        assert!(css.contains("background-color: #000 !important;"));

        // No default-text rule.
        assert!(!css.contains("/* Menu text and icons */"));

        // Hover rules carry both values.
        assert!(css.contains("background-color: #111 !important;"));
        assert!(css.contains("color: #fff !important;"));

        // No current-item rules at all.
        assert!(!css.contains("/* Current menu item background */"));
        assert!(!css.contains("/* Current menu item text and icons */"));
        assert!(!css.contains("/* Active submenu item */"));
        assert!(!css.contains("/* Menu arrow */"));
    }

    #[test]
    fn test_every_declaration_is_important() {
        let scheme = scheme_of(&[
            (SlotKey::AdminBarBackground, "#23282d"),
            (SlotKey::AdminBarText, "#eeeeee"),
            (SlotKey::AdminBarHover, "#0073aa"),
            (SlotKey::MenuBackground, "#23282d"),
            (SlotKey::MenuText, "#a7aaad"),
            (SlotKey::MenuHoverBackground, "#0073aa"),
            (SlotKey::MenuHoverText, "#ffffff"),
            (SlotKey::MenuCurrentBackground, "#191e23"),
            (SlotKey::MenuCurrentText, "#ffffff"),
        ]);
        let css = generate_stylesheet(Variant::AdminBarMenu, &scheme).unwrap();

        for line in css.lines() {
            if line.contains(": #") {
                assert!(
                    line.trim_end().ends_with("!important;"),
                    "declaration missing !important: {line}"
                );
            }
        }
    }
}
