use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::schema::{conform, descriptive_text, required_text, Draft, FieldPath, Report, Shape};

// ───── Content Models ───────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub title: String,
    pub href: String,
    pub dates: String,
    pub active: bool,
    pub description: String,
    pub technologies: Vec<String>,
    pub links: Vec<ProjectLink>,
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectLink {
    #[serde(rename = "type")]
    pub kind: String,
    pub href: String,
    #[serde(default)]
    pub icon: String,
}

// ───── Input & Validation ───────────────────────────────────────────

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(default, rename_all = "camelCase")]
pub struct ProjectDraft {
    #[validate(custom(function = "required_text", message = "Title is required"))]
    pub title: String,

    #[validate(url(message = "Must be a valid URL"))]
    pub href: String,

    #[validate(custom(function = "required_text", message = "Dates are required"))]
    pub dates: String,

    #[validate(required(message = "Active flag is required"))]
    pub active: Option<bool>,

    #[validate(custom(function = "descriptive_text", message = "Description must be at least 10 characters"))]
    pub description: String,

    #[validate(length(min = 1, message = "At least one technology is required"))]
    pub technologies: Vec<String>,

    pub links: Vec<ProjectLinkDraft>,

    #[validate(custom(function = "required_text", message = "Image path is required"))]
    pub image: String,

    pub video: Option<String>,
}

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(default)]
pub struct ProjectLinkDraft {
    #[serde(rename = "type")]
    pub kind: String,

    #[validate(url(message = "Must be a valid URL"))]
    pub href: String,

    pub icon: String,
}

impl Draft for ProjectLinkDraft {
    type Output = ProjectLink;
    const ENTITY: &'static str = "ProjectLink";
    const SHAPE: &'static [(&'static str, Shape)] = &[("type", Shape::Text), ("href", Shape::Text), ("icon", Shape::Text)];

    fn finish(self) -> ProjectLink {
        ProjectLink {
            kind: self.kind,
            href: self.href,
            icon: self.icon,
        }
    }
}

impl Draft for ProjectDraft {
    type Output = Project;
    const ENTITY: &'static str = "Project";
    const SHAPE: &'static [(&'static str, Shape)] = &[
        ("title", Shape::Text),
        ("href", Shape::Text),
        ("dates", Shape::Text),
        ("active", Shape::Flag),
        ("description", Shape::Text),
        ("technologies", Shape::TextList),
        ("links", Shape::Entities(conform::<ProjectLinkDraft>)),
        ("image", Shape::Text),
        ("video", Shape::Text),
    ];

    fn inspect(&self, path: &FieldPath, report: &mut Report) {
        report.check(path, self);
        report.each(&path.field("links"), &self.links);
    }

    fn finish(self) -> Project {
        Project {
            title: self.title,
            href: self.href,
            dates: self.dates,
            active: self.active.unwrap_or_default(),
            description: self.description,
            technologies: self.technologies,
            links: self.links.into_iter().map(Draft::finish).collect(),
            image: self.image,
            video: self.video,
        }
    }
}
