use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::schema::{required_text, Draft, Shape};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavbarItem {
    pub href: String,
    #[serde(default)]
    pub icon: String,
    pub label: String,
}

/// Navbar hrefs are site-relative (`/blog`), so only presence is checked.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(default)]
pub struct NavbarItemDraft {
    #[validate(custom(function = "required_text", message = "Href is required"))]
    pub href: String,

    pub icon: String,

    #[validate(custom(function = "required_text", message = "Label is required"))]
    pub label: String,
}

impl Draft for NavbarItemDraft {
    type Output = NavbarItem;
    const ENTITY: &'static str = "NavbarItem";
    const SHAPE: &'static [(&'static str, Shape)] = &[
        ("href", Shape::Text),
        ("icon", Shape::Text),
        ("label", Shape::Text),
    ];

    fn finish(self) -> NavbarItem {
        NavbarItem {
            href: self.href,
            icon: self.icon,
            label: self.label,
        }
    }
}
