use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::schema::{conform, descriptive_text, required_text, Draft, FieldPath, Report, Shape};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hackathon {
    pub title: String,
    pub dates: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub description: String,
    pub image: String,
    pub links: Vec<HackathonLink>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HackathonLink {
    pub title: String,
    pub href: String,
    #[serde(default)]
    pub icon: String,
}

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(default, rename_all = "camelCase")]
pub struct HackathonDraft {
    #[validate(custom(function = "required_text", message = "Title is required"))]
    pub title: String,

    #[validate(custom(function = "required_text", message = "Dates are required"))]
    pub dates: String,

    pub location: Option<String>,

    #[validate(custom(function = "descriptive_text", message = "Description must be at least 10 characters"))]
    pub description: String,

    #[validate(custom(function = "required_text", message = "Image path is required"))]
    pub image: String,

    pub links: Vec<HackathonLinkDraft>,
}

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(default)]
pub struct HackathonLinkDraft {
    pub title: String,

    #[validate(url(message = "Must be a valid URL"))]
    pub href: String,

    pub icon: String,
}

impl Draft for HackathonLinkDraft {
    type Output = HackathonLink;
    const ENTITY: &'static str = "HackathonLink";
    const SHAPE: &'static [(&'static str, Shape)] = &[("title", Shape::Text), ("href", Shape::Text), ("icon", Shape::Text)];

    fn finish(self) -> HackathonLink {
        HackathonLink {
            title: self.title,
            href: self.href,
            icon: self.icon,
        }
    }
}

impl Draft for HackathonDraft {
    type Output = Hackathon;
    const ENTITY: &'static str = "Hackathon";
    const SHAPE: &'static [(&'static str, Shape)] = &[
        ("title", Shape::Text),
        ("dates", Shape::Text),
        ("location", Shape::Text),
        ("description", Shape::Text),
        ("image", Shape::Text),
        ("links", Shape::Entities(conform::<HackathonLinkDraft>)),
    ];

    fn inspect(&self, path: &FieldPath, report: &mut Report) {
        report.check(path, self);
        report.each(&path.field("links"), &self.links);
    }

    fn finish(self) -> Hackathon {
        Hackathon {
            title: self.title,
            dates: self.dates,
            location: self.location,
            description: self.description,
            image: self.image,
            links: self.links.into_iter().map(Draft::finish).collect(),
        }
    }
}
