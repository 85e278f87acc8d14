use std::fmt;

use serde::{Deserialize, Serialize};

/// Page sections of the portfolio home page, in page order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Hero,
    About,
    Work,
    Education,
    Skills,
    Projects,
    Hackathons,
    Tweets,
    Contact,
}

impl Section {
    pub const ALL: [Section; 9] = [
        Section::Hero,
        Section::About,
        Section::Work,
        Section::Education,
        Section::Skills,
        Section::Projects,
        Section::Hackathons,
        Section::Tweets,
        Section::Contact,
    ];

    /// Anchor id used by in-page links (`/#work`).
    pub fn anchor(&self) -> &'static str {
        match self {
            Section::Hero => "hero",
            Section::About => "about",
            Section::Work => "work",
            Section::Education => "education",
            Section::Skills => "skills",
            Section::Projects => "projects",
            Section::Hackathons => "hackathons",
            Section::Tweets => "tweets",
            Section::Contact => "contact",
        }
    }

    /// Below-the-fold sections whose renderer is fetched after first paint.
    pub fn is_deferred(&self) -> bool {
        matches!(self, Section::Hackathons | Section::Tweets | Section::Contact)
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.anchor())
    }
}

/// Split of a page into sections rendered in the initial output and sections
/// rendered only on the client once their renderer is acquired.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionPlan {
    pub eager: Vec<Section>,
    pub deferred: Vec<Section>,
}

impl SectionPlan {
    /// Partitions `sections`, keeping their relative order and dropping repeats.
    pub fn partition(sections: impl IntoIterator<Item = Section>) -> Self {
        let mut eager = Vec::new();
        let mut deferred = Vec::new();

        for section in sections {
            let target = if section.is_deferred() { &mut deferred } else { &mut eager };
            if !target.contains(&section) {
                target.push(section);
            }
        }

        SectionPlan { eager, deferred }
    }

    pub fn default_layout() -> Self {
        Self::partition(Section::ALL)
    }
}
