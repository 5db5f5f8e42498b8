//! Declarative selector rule tables.
//!
//! Each variant compiles to an ordered list of rule groups. A group ties a
//! fixed selector list to one or more (property, slot) declarations; the
//! generator emits a declaration only when its governing slot is set and
//! skips a group whose declarations are all unset.
//!
//! Group order is load-bearing where selector sets overlap: current-item
//! groups come after hover groups so the later group wins for the same
//! selector+property pair, matching the cascade order of the source tables.

use crate::models::{SlotKey, Variant};

/// CSS property a declaration writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Property {
    /// `background-color`
    BackgroundColor,
    /// `color`
    Color,
    /// `background` (shorthand, used for the menu arrow)
    Background,
}

impl Property {
    /// The property name as written into the stylesheet.
    #[must_use]
    pub const fn as_css(self) -> &'static str {
        match self {
            Self::BackgroundColor => "background-color",
            Self::Color => "color",
            Self::Background => "background",
        }
    }
}

/// One property governed by one slot.
#[derive(Debug, Clone, Copy)]
pub struct Declaration {
    /// Property to write
    pub property: Property,
    /// Slot whose value feeds the property
    pub slot: SlotKey,
}

/// A selector list plus the declarations applied to it.
#[derive(Debug, Clone, Copy)]
pub struct RuleGroup {
    /// Short name emitted as a comment above the block
    pub name: &'static str,
    /// Selectors the declarations apply to
    pub selectors: &'static [&'static str],
    /// Declarations, each gated on its own slot
    pub declarations: &'static [Declaration],
}

const fn decl(property: Property, slot: SlotKey) -> Declaration {
    Declaration { property, slot }
}

/// Rule table for the menu-only variant.
static MENU_RULES: [RuleGroup; 6] = [
    RuleGroup {
        name: "Menu background",
        selectors: &["#adminmenuback", "#adminmenuwrap"],
        declarations: &[decl(Property::BackgroundColor, SlotKey::MenuBackground)],
    },
    RuleGroup {
        name: "Menu text and icons",
        selectors: &[
            "#adminmenu .wp-has-current-submenu .wp-submenu .wp-submenu-head",
            "#adminmenu .wp-menu-arrow",
            "#adminmenu .wp-menu-arrow div",
            "#adminmenu li.menu-top a",
            "#adminmenu li.opensub>a",
            "#adminmenu li>a.menu-top-active",
            "#adminmenu .wp-menu-name",
            "#adminmenu .wp-not-current-submenu .wp-submenu",
            "#adminmenu .current-menu-item .menu-name",
            "#adminmenu li.current a.menu-top",
            "#adminmenu .wp-menu-image",
            "#adminmenu .wp-menu-image:before",
            "#adminmenu .wp-submenu li a",
        ],
        declarations: &[decl(Property::Color, SlotKey::MenuText)],
    },
    RuleGroup {
        name: "Menu hover background",
        selectors: &[
            "#adminmenu li.menu-top:hover",
            "#adminmenu li.opensub > a:hover",
            "#adminmenu li > a.menu-top:focus",
            "#adminmenu li.current a.menu-top",
            "#adminmenu li.current:hover a.menu-top",
            "#adminmenu li.current.menu-top a.menu-top-active",
        ],
        declarations: &[decl(Property::BackgroundColor, SlotKey::MenuHoverBackground)],
    },
    RuleGroup {
        name: "Menu hover text and icons",
        selectors: &[
            "#adminmenu li.menu-top:hover .wp-menu-image:before",
            "#adminmenu li.opensub > a:hover .wp-menu-image:before",
            "#adminmenu li > a.menu-top:focus .wp-menu-image:before",
            "#adminmenu li.current a.menu-top .wp-menu-image:before",
            "#adminmenu li.current:hover a.menu-top .wp-menu-image:before",
            "#adminmenu li.current.menu-top a.menu-top-active .wp-menu-image:before",
            "#adminmenu li.menu-top:hover .wp-menu-name",
            "#adminmenu li.opensub > a:hover .wp-menu-name",
            "#adminmenu li > a.menu-top:focus .wp-menu-name",
            "#adminmenu li.current a.menu-top .wp-menu-name",
            "#adminmenu li.current:hover a.menu-top .wp-menu-name",
            "#adminmenu li.current.menu-top a.menu-top-active .wp-menu-name",
            "#adminmenu .wp-submenu li a:hover",
            "#adminmenu .wp-submenu li.current a",
            "#adminmenu .wp-submenu li.current a:hover",
            "#adminmenu .current-menu-item .wp-submenu .wp-submenu-head",
        ],
        declarations: &[decl(Property::Color, SlotKey::MenuHoverText)],
    },
    RuleGroup {
        name: "Active submenu background",
        selectors: &[
            "#adminmenu .wp-has-current-submenu .wp-submenu .wp-submenu-head",
            "#adminmenu .wp-has-current-submenu .wp-menu-open.menu-top .wp-submenu",
            "#adminmenu .current-menu-item .wp-submenu .wp-submenu-head",
        ],
        declarations: &[decl(Property::BackgroundColor, SlotKey::MenuHoverBackground)],
    },
    RuleGroup {
        name: "Current menu item icon",
        selectors: &[
            "#adminmenu .wp-has-current-submenu .wp-menu-image:before",
            "#adminmenu .current-menu-item .wp-menu-image:before",
        ],
        declarations: &[decl(Property::Color, SlotKey::MenuHoverText)],
    },
];

/// Rule table for the combined admin-bar + menu variant.
static ADMIN_BAR_MENU_RULES: [RuleGroup; 19] = [
    RuleGroup {
        name: "Admin bar background",
        selectors: &["#wpadminbar"],
        declarations: &[decl(Property::BackgroundColor, SlotKey::AdminBarBackground)],
    },
    RuleGroup {
        name: "Admin bar text",
        selectors: &[
            "#wpadminbar .ab-item",
            "#wpadminbar a.ab-item",
            "#wpadminbar #wp-admin-bar-wp-logo.hover .ab-icon:before",
            "#wpadminbar #wp-admin-bar-site-name.hover .ab-icon:before",
            "#wpadminbar #wp-admin-bar-site-name.hover .ab-label",
            "#wpadminbar #wp-admin-bar-my-account > .ab-item",
            "#wpadminbar #wp-admin-bar-my-account.hover > .ab-item",
            "#wpadminbar #wp-admin-bar-user-info .display-name",
            "#wpadminbar #wp-admin-bar-user-info a",
            "#wpadminbar .quicklinks .ab-top-menu > li.current > .ab-item",
            "#wpadminbar .quicklinks .ab-top-menu > li.current-menu-parent > .ab-item",
            "#wpadminbar .quicklinks .ab-top-menu > li.current.menu-top-item > .ab-item",
        ],
        declarations: &[decl(Property::Color, SlotKey::AdminBarText)],
    },
    RuleGroup {
        name: "Admin bar hover and active",
        selectors: &[
            "#wpadminbar .ab-top-menu > li.hover > .ab-item",
            "#wpadminbar .ab-top-menu > li:hover > .ab-item",
            "#wpadminbar .ab-top-menu > li.current-menu-item > .ab-item",
            "#wpadminbar .ab-top-menu > li.current-menu-parent > .ab-item",
            "#wpadminbar .ab-top-menu > li.current-menu-ancestor > .ab-item",
            "#wpadminbar .ab-item:focus",
            "#wpadminbar .ab-item:hover",
            "#wpadminbar #wp-admin-bar-wp-logo > .ab-item:hover:before",
            "#wpadminbar #wp-admin-bar-wp-logo.hover > .ab-item:before",
            "#wpadminbar.nojq .quicklinks .ab-top-menu > li > .ab-item:focus",
            "#wpadminbar .quicklinks .ab-top-menu > li > .ab-item:focus",
            "#wpadminbar .quicklinks .ab-top-menu > li:hover > .ab-item",
            "#wpadminbar .quicklinks .ab-top-menu > li.hover > .ab-item",
            "#wpadminbar .menupop .ab-sub-wrapper",
        ],
        declarations: &[decl(Property::BackgroundColor, SlotKey::AdminBarHover)],
    },
    RuleGroup {
        name: "Admin bar submenu hover",
        selectors: &[
            "#wpadminbar .menupop .ab-sub-wrapper .ab-item:hover",
            "#wpadminbar .menupop .ab-sub-wrapper .ab-item:focus",
            "#wpadminbar .menupop .ab-sub-wrapper a:hover",
            "#wpadminbar .menupop .ab-sub-wrapper a:focus",
        ],
        declarations: &[
            decl(Property::BackgroundColor, SlotKey::AdminBarHover),
            decl(Property::Color, SlotKey::AdminBarText),
        ],
    },
    RuleGroup {
        name: "Admin bar icons",
        selectors: &["#wpadminbar .ab-icon:before"],
        declarations: &[decl(Property::Color, SlotKey::AdminBarText)],
    },
    RuleGroup {
        name: "Admin bar icons on hover and active",
        selectors: &[
            "#wpadminbar .ab-item:hover .ab-icon:before",
            "#wpadminbar .ab-item:focus .ab-icon:before",
            "#wpadminbar li:hover #adminbar-logo.hover > a .ab-icon:before",
            "#wpadminbar li.hover .ab-icon:before",
            "#wpadminbar .ab-menu-link:hover .ab-icon:before",
            "#wpadminbar .ab-top-menu > li.current > .ab-item .ab-icon:before",
            "#wpadminbar .ab-top-menu > li.current-menu-parent > .ab-item .ab-icon:before",
            "#wpadminbar .ab-top-menu > li.current-menu-ancestor > .ab-item .ab-icon:before",
        ],
        declarations: &[decl(Property::Color, SlotKey::AdminBarText)],
    },
    RuleGroup {
        name: "Admin bar submenu background",
        selectors: &[
            "#wpadminbar .menupop .ab-sub-wrapper",
            "#wpadminbar .quicklinks .menupop ul.ab-sub-secondary",
            "#wpadminbar .quicklinks .menupop ul.ab-sub-secondary .ab-submenu",
        ],
        declarations: &[decl(Property::BackgroundColor, SlotKey::AdminBarBackground)],
    },
    RuleGroup {
        name: "Admin bar submenu text",
        selectors: &[
            "#wpadminbar .quicklinks .menupop ul li a",
            "#wpadminbar .quicklinks .menupop ul li a .ab-icon:before",
            "#wpadminbar .quicklinks .menupop ul li a .ab-label",
        ],
        declarations: &[decl(Property::Color, SlotKey::AdminBarText)],
    },
    RuleGroup {
        name: "Menu background",
        selectors: &[
            "#adminmenuback",
            "#adminmenuwrap",
            "#adminmenu",
            "#adminmenu .wp-submenu",
            "#adminmenu .wp-submenu-wrap",
        ],
        declarations: &[decl(Property::BackgroundColor, SlotKey::MenuBackground)],
    },
    RuleGroup {
        name: "Menu text and icons",
        selectors: &[
            "#adminmenu li.menu-top a",
            "#adminmenu li.menu-top .wp-menu-image::before",
            "#adminmenu .wp-submenu li a",
        ],
        declarations: &[decl(Property::Color, SlotKey::MenuText)],
    },
    RuleGroup {
        name: "Menu hover background",
        selectors: &[
            "#adminmenu li.menu-top:hover",
            "#adminmenu li.opensub > a:hover",
            "#adminmenu li > a.menu-top:focus",
            "#adminmenu li.menu-top.menu-top-last.opensub > a:hover",
        ],
        declarations: &[decl(Property::BackgroundColor, SlotKey::MenuHoverBackground)],
    },
    RuleGroup {
        name: "Menu hover text and icons",
        selectors: &[
            "#adminmenu li.menu-top:hover .wp-menu-name",
            "#adminmenu li.opensub > a:hover .wp-menu-name",
            "#adminmenu li > a.menu-top:focus .wp-menu-name",
            "#adminmenu li.menu-top:hover .wp-menu-image::before",
            "#adminmenu li.opensub > a:hover .wp-menu-image::before",
            "#adminmenu li > a.menu-top:focus .wp-menu-image::before",
        ],
        declarations: &[decl(Property::Color, SlotKey::MenuHoverText)],
    },
    RuleGroup {
        name: "Submenu hover",
        selectors: &["#adminmenu .wp-submenu li a:hover"],
        declarations: &[
            decl(Property::BackgroundColor, SlotKey::MenuHoverBackground),
            decl(Property::Color, SlotKey::MenuHoverText),
        ],
    },
    RuleGroup {
        name: "Current menu item background",
        selectors: &[
            "#adminmenu li.current > a.menu-top",
            "#adminmenu li.current.menu-top",
            "#adminmenu li.current.menu-top a",
            "#adminmenu li.current.menu-top.opensub > a",
        ],
        declarations: &[decl(Property::BackgroundColor, SlotKey::MenuCurrentBackground)],
    },
    RuleGroup {
        name: "Current menu item text and icons",
        selectors: &[
            "#adminmenu li.current a.menu-top .wp-menu-name",
            "#adminmenu li.current .wp-menu-image::before",
            "#adminmenu li.current a.menu-top.wp-has-current-submenu .wp-menu-image::before",
        ],
        declarations: &[decl(Property::Color, SlotKey::MenuCurrentText)],
    },
    RuleGroup {
        name: "Active submenu item",
        selectors: &[
            "#adminmenu .wp-has-current-submenu .wp-submenu .wp-submenu-head",
            "#adminmenu .wp-menu-open.menu-top .wp-submenu li.current > a",
            "#adminmenu .wp-menu-open.menu-top .wp-submenu li.current > a:hover",
        ],
        declarations: &[
            decl(Property::BackgroundColor, SlotKey::MenuCurrentBackground),
            decl(Property::Color, SlotKey::MenuCurrentText),
        ],
    },
    RuleGroup {
        name: "Active submenu head",
        selectors: &["#adminmenu .wp-has-current-submenu .wp-submenu .wp-submenu-head"],
        declarations: &[decl(Property::Color, SlotKey::MenuCurrentText)],
    },
    RuleGroup {
        name: "Menu arrow",
        selectors: &[
            "#adminmenu .wp-has-current-submenu .wp-menu-arrow",
            "#adminmenu .wp-has-current-submenu .wp-menu-arrow div",
        ],
        declarations: &[decl(Property::Background, SlotKey::MenuCurrentBackground)],
    },
    RuleGroup {
        name: "Active submenu item text",
        selectors: &[
            "#adminmenu .wp-submenu li.current a",
            "#adminmenu .wp-submenu li.current a:hover",
        ],
        declarations: &[decl(Property::Color, SlotKey::MenuCurrentText)],
    },
];

/// Returns the rule table for a variant, in emission order.
#[must_use]
pub fn rule_groups(variant: Variant) -> &'static [RuleGroup] {
    match variant {
        Variant::Menu => &MENU_RULES,
        Variant::AdminBarMenu => &ADMIN_BAR_MENU_RULES,
    }
}
