use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::schema::{new_validation_error, required_text, Draft, Shape};

// ───── Constants ──────────────────────────────────────────────────────
const MAX_TITLE_LENGTH: u64 = 120;
const MIN_SLUG_LENGTH: u64 = 1;
const MAX_SLUG_LENGTH: u64 = 80;
const MAX_SUMMARY_LENGTH: u64 = 300;
pub const PUBLISHED_AT_FORMAT: &str = "%Y-%m-%d";

// ───── Content Models ───────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BlogPost {
    pub slug: String,
    pub metadata: BlogPostMetadata,
    /// Markdown body without front matter.
    #[serde(skip_serializing)]
    pub source: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPostMetadata {
    pub title: String,
    pub published_at: NaiveDate,
    pub summary: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

/// Entry of the blog listing page.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPostListItem {
    pub slug: String,
    pub title: String,
    pub published_at: NaiveDate,
    pub href: String,
}

impl BlogPost {
    pub fn href(&self) -> String {
        format!("/blog/{}", self.slug)
    }

    pub fn to_list_item(&self) -> BlogPostListItem {
        BlogPostListItem {
            slug: self.slug.clone(),
            title: self.metadata.title.clone(),
            published_at: self.metadata.published_at,
            href: self.href(),
        }
    }
}

// ───── Input & Validation ───────────────────────────────────────────

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(default, rename_all = "camelCase")]
pub struct BlogPostDraft {
    /// Taken from the file name, never from front matter.
    #[serde(skip)]
    #[validate(
        length(min = MIN_SLUG_LENGTH, max = MAX_SLUG_LENGTH, message = "Slug must be between 1 and 80 characters"),
        custom(function = "validate_slug")
    )]
    pub slug: String,

    #[validate(
        custom(function = "required_text", message = "Title is required"),
        length(max = MAX_TITLE_LENGTH, message = "Title must be at most 120 characters")
    )]
    pub title: String,

    #[validate(custom(function = "validate_published_at"))]
    pub published_at: String,

    #[validate(length(max = MAX_SUMMARY_LENGTH, message = "Summary must be at most 300 characters"))]
    pub summary: String,

    pub image: Option<String>,

    pub tags: Vec<String>,

    #[serde(skip)]
    pub source: String,
}

pub fn validate_slug(slug: &str) -> Result<(), ValidationError> {
    if slug.is_empty() {
        return Err(new_validation_error("slug_empty", "Slug cannot be empty"));
    }
    if !slug.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-') {
        return Err(new_validation_error("slug_invalid_chars", "Slug must contain only lowercase letters, digits, or hyphens"));
    }
    if slug.starts_with('-') || slug.ends_with('-') {
        return Err(new_validation_error("slug_edge_hyphen", "Slug must not start or end with a hyphen"));
    }
    if slug.contains("--") {
        return Err(new_validation_error("slug_double_hyphen", "Slug must not contain consecutive hyphens"));
    }
    Ok(())
}

pub fn validate_published_at(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(new_validation_error("published_at_missing", "Publication date is required"));
    }
    NaiveDate::parse_from_str(value.trim(), PUBLISHED_AT_FORMAT)
        .map(|_| ())
        .map_err(|_| new_validation_error("published_at_format", "Publication date must be YYYY-MM-DD"))
}

impl Draft for BlogPostDraft {
    type Output = BlogPost;
    const ENTITY: &'static str = "BlogPost";
    const SHAPE: &'static [(&'static str, Shape)] = &[
        ("title", Shape::Text),
        ("publishedAt", Shape::Text),
        ("summary", Shape::Text),
        ("image", Shape::Text),
        ("tags", Shape::TextList),
    ];

    fn finish(self) -> BlogPost {
        let published_at = NaiveDate::parse_from_str(self.published_at.trim(), PUBLISHED_AT_FORMAT)
            .unwrap_or_default();

        BlogPost {
            slug: self.slug,
            metadata: BlogPostMetadata {
                title: self.title,
                published_at,
                summary: self.summary,
                image: self.image,
                tags: self.tags,
            },
            source: self.source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugs_follow_kebab_case() {
        assert!(validate_slug("hello-world-2024").is_ok());
        assert!(validate_slug("Hello").is_err());
        assert!(validate_slug("-edge").is_err());
        assert!(validate_slug("double--hyphen").is_err());
    }

    #[test]
    fn publication_dates_are_iso_days() {
        assert!(validate_published_at("2024-06-18").is_ok());
        assert!(validate_published_at("18/06/2024").is_err());
        assert!(validate_published_at("").is_err());
    }
}
