use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::schema::{conform, required_text, Draft, FieldPath, Report, Shape};

// ───── Content Models ───────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub email: String,
    pub tel: String,
    /// Keyed by platform, e.g. `GitHub` or `X`.
    pub social: BTreeMap<String, SocialLink>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    pub name: String,
    pub url: String,
    #[serde(default)]
    pub icon: String,
    pub navbar: bool,
}

// ───── Input & Validation ───────────────────────────────────────────

#[derive(Debug, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ContactDraft {
    #[validate(email(message = "Must be a valid email"))]
    pub email: String,

    #[validate(custom(function = "required_text", message = "Phone number is required"))]
    pub tel: String,

    pub social: BTreeMap<String, SocialLinkDraft>,
}

#[derive(Debug, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct SocialLinkDraft {
    #[validate(custom(function = "required_text", message = "Name is required"))]
    pub name: String,

    #[validate(url(message = "Must be a valid URL"))]
    pub url: String,

    pub icon: String,

    #[validate(required(message = "Navbar flag is required"))]
    pub navbar: Option<bool>,
}

impl Draft for SocialLinkDraft {
    type Output = SocialLink;
    const ENTITY: &'static str = "SocialLink";
    const SHAPE: &'static [(&'static str, Shape)] = &[
        ("name", Shape::Text),
        ("url", Shape::Text),
        ("icon", Shape::Text),
        ("navbar", Shape::Flag),
    ];

    fn finish(self) -> SocialLink {
        SocialLink {
            name: self.name,
            url: self.url,
            icon: self.icon,
            navbar: self.navbar.unwrap_or_default(),
        }
    }
}

impl Draft for ContactDraft {
    type Output = Contact;
    const ENTITY: &'static str = "Contact";
    const SHAPE: &'static [(&'static str, Shape)] = &[
        ("email", Shape::Text),
        ("tel", Shape::Text),
        ("social", Shape::EntityMap(conform::<SocialLinkDraft>)),
    ];

    fn inspect(&self, path: &FieldPath, report: &mut Report) {
        report.check(path, self);

        let social = path.field("social");
        for (key, link) in &self.social {
            report.nested(&social.key(key), link);
        }
    }

    fn finish(self) -> Contact {
        Contact {
            email: self.email,
            tel: self.tel,
            social: self
                .social
                .into_iter()
                .map(|(key, link)| (key, link.finish()))
                .collect(),
        }
    }
}
