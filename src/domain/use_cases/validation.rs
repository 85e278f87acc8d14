//! Entry points for checking untyped content against the content model.
//!
//! Every function is pure: it reads the input, never mutates it, and returns
//! either the typed value or the complete list of violations.

use serde_json::Value;

use crate::{
    entities::{
        contact::{Contact, ContactDraft, SocialLink, SocialLinkDraft},
        education::{Education, EducationDraft},
        experience::{WorkExperience, WorkExperienceDraft},
        hackathon::{Hackathon, HackathonDraft},
        navbar::{NavbarItem, NavbarItemDraft},
        profile::{Profile, ProfileDraft},
        project::{Project, ProjectDraft},
        tweet::{Tweet, TweetDraft},
    },
    errors::ValidationReport,
    schema::validate_value,
};

pub fn validate_project(data: &Value) -> Result<Project, ValidationReport> {
    validate_value::<ProjectDraft>(data)
}

pub fn validate_work_experience(data: &Value) -> Result<WorkExperience, ValidationReport> {
    validate_value::<WorkExperienceDraft>(data)
}

pub fn validate_education(data: &Value) -> Result<Education, ValidationReport> {
    validate_value::<EducationDraft>(data)
}

pub fn validate_hackathon(data: &Value) -> Result<Hackathon, ValidationReport> {
    validate_value::<HackathonDraft>(data)
}

pub fn validate_tweet(data: &Value) -> Result<Tweet, ValidationReport> {
    validate_value::<TweetDraft>(data)
}

pub fn validate_social_link(data: &Value) -> Result<SocialLink, ValidationReport> {
    validate_value::<SocialLinkDraft>(data)
}

pub fn validate_contact(data: &Value) -> Result<Contact, ValidationReport> {
    validate_value::<ContactDraft>(data)
}

pub fn validate_navbar_item(data: &Value) -> Result<NavbarItem, ValidationReport> {
    validate_value::<NavbarItemDraft>(data)
}

pub fn validate_profile(data: &Value) -> Result<Profile, ValidationReport> {
    validate_value::<ProfileDraft>(data)
}

/// Pass/fail check of a whole profile document for pre-deploy use.
///
/// On failure every violation is logged before returning `false`.
pub fn validate_all(data: &Value) -> bool {
    match validate_profile(data) {
        Ok(_) => true,
        Err(report) => {
            log_report(&report);
            false
        }
    }
}

/// Logs a failed report, one error event per violation.
pub fn log_report(report: &ValidationReport) {
    tracing::error!(entity = report.entity, count = report.len(), "Data validation failed");
    for violation in &report.violations {
        tracing::error!(path = %violation.path, "{}", violation.message);
    }
}
