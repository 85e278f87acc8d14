use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::{
    entities::{
        contact::{Contact, ContactDraft},
        education::{Education, EducationDraft},
        experience::{WorkExperience, WorkExperienceDraft},
        hackathon::{Hackathon, HackathonDraft},
        navbar::{NavbarItem, NavbarItemDraft},
        project::{Project, ProjectDraft},
        tweet::{Tweet, TweetDraft},
    },
    schema::{conform, descriptive_text, required_text, Draft, FieldPath, Report, Shape},
};

// ───── Content Models ───────────────────────────────────────────────

/// The whole portfolio document. Built once, then shared read-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub name: String,
    pub initials: String,
    pub url: String,
    pub location: String,
    pub location_link: String,
    pub description: String,
    /// Markdown.
    pub summary: String,
    pub avatar_url: String,
    pub skills: Vec<String>,
    pub navbar: Vec<NavbarItem>,
    pub contact: Contact,
    pub work: Vec<WorkExperience>,
    pub education: Vec<Education>,
    pub projects: Vec<Project>,
    pub hackathons: Vec<Hackathon>,
    pub tweets: Vec<Tweet>,
}

impl Profile {
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or(&self.name)
    }

    pub fn active_projects(&self) -> impl Iterator<Item = &Project> {
        self.projects.iter().filter(|p| p.active)
    }
}

// ───── Input & Validation ───────────────────────────────────────────

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(default, rename_all = "camelCase")]
pub struct ProfileDraft {
    #[validate(custom(function = "required_text", message = "Name is required"))]
    pub name: String,

    #[validate(custom(function = "required_text", message = "Initials are required"))]
    pub initials: String,

    #[validate(url(message = "Must be a valid URL"))]
    pub url: String,

    #[validate(custom(function = "required_text", message = "Location is required"))]
    pub location: String,

    #[validate(url(message = "Must be a valid URL"))]
    pub location_link: String,

    #[validate(custom(function = "descriptive_text", message = "Description must be at least 10 characters"))]
    pub description: String,

    #[validate(custom(function = "descriptive_text", message = "Summary must be at least 10 characters"))]
    pub summary: String,

    #[validate(custom(function = "required_text", message = "Avatar URL is required"))]
    pub avatar_url: String,

    #[validate(length(min = 1, message = "At least one skill is required"))]
    pub skills: Vec<String>,

    pub navbar: Vec<NavbarItemDraft>,

    #[validate(required(message = "Contact details are required"))]
    pub contact: Option<ContactDraft>,

    pub work: Vec<WorkExperienceDraft>,
    pub education: Vec<EducationDraft>,
    pub projects: Vec<ProjectDraft>,
    pub hackathons: Vec<HackathonDraft>,
    pub tweets: Vec<TweetDraft>,
}

impl Draft for ProfileDraft {
    type Output = Profile;
    const ENTITY: &'static str = "Profile";
    const SHAPE: &'static [(&'static str, Shape)] = &[
        ("name", Shape::Text),
        ("initials", Shape::Text),
        ("url", Shape::Text),
        ("location", Shape::Text),
        ("locationLink", Shape::Text),
        ("description", Shape::Text),
        ("summary", Shape::Text),
        ("avatarUrl", Shape::Text),
        ("skills", Shape::TextList),
        ("navbar", Shape::Entities(conform::<NavbarItemDraft>)),
        ("contact", Shape::Entity(conform::<ContactDraft>)),
        ("work", Shape::Entities(conform::<WorkExperienceDraft>)),
        ("education", Shape::Entities(conform::<EducationDraft>)),
        ("projects", Shape::Entities(conform::<ProjectDraft>)),
        ("hackathons", Shape::Entities(conform::<HackathonDraft>)),
        ("tweets", Shape::Entities(conform::<TweetDraft>)),
    ];

    fn inspect(&self, path: &FieldPath, report: &mut Report) {
        report.check(path, self);

        report.each(&path.field("navbar"), &self.navbar);
        if let Some(contact) = &self.contact {
            report.nested(&path.field("contact"), contact);
        }
        report.each(&path.field("work"), &self.work);
        report.each(&path.field("education"), &self.education);
        report.each(&path.field("projects"), &self.projects);
        report.each(&path.field("hackathons"), &self.hackathons);
        report.each(&path.field("tweets"), &self.tweets);
    }

    fn finish(self) -> Profile {
        Profile {
            name: self.name,
            initials: self.initials,
            url: self.url,
            location: self.location,
            location_link: self.location_link,
            description: self.description,
            summary: self.summary,
            avatar_url: self.avatar_url,
            skills: self.skills,
            navbar: finish_all(self.navbar),
            contact: self.contact.map(Draft::finish).unwrap_or_default(),
            work: finish_all(self.work),
            education: finish_all(self.education),
            projects: finish_all(self.projects),
            hackathons: finish_all(self.hackathons),
            tweets: finish_all(self.tweets),
        }
    }
}

fn finish_all<D: Draft>(drafts: Vec<D>) -> Vec<D::Output> {
    drafts.into_iter().map(Draft::finish).collect()
}
