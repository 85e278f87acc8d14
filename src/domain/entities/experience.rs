use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::schema::{descriptive_text, required_text, Draft, Shape};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkExperience {
    pub company: String,
    pub href: String,
    pub badges: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub title: String,
    pub logo_url: String,
    pub start: String,
    /// `None` while the position is ongoing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,
    pub description: String,
}

impl WorkExperience {
    pub fn is_ongoing(&self) -> bool {
        self.end.is_none()
    }

    /// Human period label, e.g. `June 2024 – Present`.
    pub fn period(&self) -> String {
        format!("{} – {}", self.start, self.end.as_deref().unwrap_or("Present"))
    }
}

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(default, rename_all = "camelCase")]
pub struct WorkExperienceDraft {
    #[validate(custom(function = "required_text", message = "Company name is required"))]
    pub company: String,

    #[validate(url(message = "Must be a valid URL"))]
    pub href: String,

    pub badges: Vec<String>,

    pub location: Option<String>,

    #[validate(custom(function = "required_text", message = "Job title is required"))]
    pub title: String,

    #[validate(custom(function = "required_text", message = "Logo URL is required"))]
    pub logo_url: String,

    #[validate(custom(function = "required_text", message = "Start date is required"))]
    pub start: String,

    pub end: Option<String>,

    #[validate(custom(function = "descriptive_text", message = "Description must be at least 10 characters"))]
    pub description: String,
}

impl Draft for WorkExperienceDraft {
    type Output = WorkExperience;
    const ENTITY: &'static str = "WorkExperience";
    const SHAPE: &'static [(&'static str, Shape)] = &[
        ("company", Shape::Text),
        ("href", Shape::Text),
        ("badges", Shape::TextList),
        ("location", Shape::Text),
        ("title", Shape::Text),
        ("logoUrl", Shape::Text),
        ("start", Shape::Text),
        ("end", Shape::Text),
        ("description", Shape::Text),
    ];

    fn finish(self) -> WorkExperience {
        WorkExperience {
            company: self.company,
            href: self.href,
            badges: self.badges,
            location: self.location,
            title: self.title,
            logo_url: self.logo_url,
            start: self.start,
            end: self.end,
            description: self.description,
        }
    }
}
