use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::schema::{required_text, Draft, Shape};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub school: String,
    pub href: String,
    pub degree: String,
    pub logo_url: String,
    pub start: String,
    pub end: String,
}

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(default, rename_all = "camelCase")]
pub struct EducationDraft {
    #[validate(custom(function = "required_text", message = "School name is required"))]
    pub school: String,

    #[validate(url(message = "Must be a valid URL"))]
    pub href: String,

    #[validate(custom(function = "required_text", message = "Degree is required"))]
    pub degree: String,

    #[validate(custom(function = "required_text", message = "Logo URL is required"))]
    pub logo_url: String,

    #[validate(custom(function = "required_text", message = "Start date is required"))]
    pub start: String,

    #[validate(custom(function = "required_text", message = "End date is required"))]
    pub end: String,
}

impl Draft for EducationDraft {
    type Output = Education;
    const ENTITY: &'static str = "Education";
    const SHAPE: &'static [(&'static str, Shape)] = &[
        ("school", Shape::Text),
        ("href", Shape::Text),
        ("degree", Shape::Text),
        ("logoUrl", Shape::Text),
        ("start", Shape::Text),
        ("end", Shape::Text),
    ];

    fn finish(self) -> Education {
        Education {
            school: self.school,
            href: self.href,
            degree: self.degree,
            logo_url: self.logo_url,
            start: self.start,
            end: self.end,
        }
    }
}
