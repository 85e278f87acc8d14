#![allow(dead_code)]

use portfolio_content::{entities::profile::Profile, use_cases::validation::validate_profile};
use serde_json::{json, Value};

pub fn valid_project() -> Value {
    json!({
        "title": "Portfolio",
        "href": "https://example.com/portfolio",
        "dates": "Jan 2024 - Present",
        "active": true,
        "description": "A personal portfolio site built with Rust.",
        "technologies": ["Rust", "Tokio"],
        "links": [
            { "type": "Website", "href": "https://example.com", "icon": "globe" },
            { "type": "Source", "href": "https://github.com/example/portfolio", "icon": "github" }
        ],
        "image": "/portfolio.png"
    })
}

pub fn valid_work_experience() -> Value {
    json!({
        "company": "Acme",
        "href": "https://acme.example.com",
        "badges": [],
        "location": "Remote",
        "title": "Backend Engineer",
        "logoUrl": "/acme.png",
        "start": "May 2021",
        "end": "Oct 2022",
        "description": "Built and operated content APIs."
    })
}

pub fn valid_education() -> Value {
    json!({
        "school": "University of Lagos",
        "href": "https://unilag.edu.ng",
        "degree": "BSc Computer Science",
        "logoUrl": "/unilag.png",
        "start": "2015",
        "end": "2019"
    })
}

pub fn valid_hackathon() -> Value {
    json!({
        "title": "Rust Hack",
        "dates": "November 2023",
        "location": "Berlin",
        "description": "Built a log search engine in a weekend.",
        "image": "/rusthack.png",
        "links": [
            { "title": "Source", "href": "https://github.com/example/rusthack", "icon": "github" }
        ]
    })
}

pub fn valid_tweet() -> Value {
    json!({ "id": "1788112734534627500", "title": "Shipping day" })
}

pub fn valid_contact() -> Value {
    json!({
        "email": "hello@example.com",
        "tel": "+2348000000000",
        "social": {
            "GitHub": {
                "name": "GitHub",
                "url": "https://github.com/example",
                "icon": "github",
                "navbar": true
            },
            "X": {
                "name": "X",
                "url": "https://x.com/example",
                "icon": "x",
                "navbar": false
            }
        }
    })
}

pub fn valid_profile() -> Value {
    json!({
        "name": "Ada Example",
        "initials": "AE",
        "url": "https://example.com",
        "location": "Lagos, Nigeria",
        "locationLink": "https://www.google.com/maps/place/lagos",
        "description": "Software engineer who likes parsers and databases.",
        "summary": "I build backend systems in **Rust** and enjoy writing about it.",
        "avatarUrl": "/me.png",
        "skills": ["Rust", "PostgreSQL", "Docker"],
        "navbar": [
            { "href": "/", "icon": "home", "label": "Home" },
            { "href": "/blog", "icon": "notebook", "label": "Blog" }
        ],
        "contact": valid_contact(),
        "work": [valid_work_experience()],
        "education": [valid_education()],
        "projects": [valid_project()],
        "hackathons": [valid_hackathon()],
        "tweets": [valid_tweet()]
    })
}

/// `valid_profile()` with `key` replaced.
pub fn profile_with(key: &str, value: Value) -> Value {
    let mut profile = valid_profile();
    profile[key] = value;
    profile
}

/// `valid_profile()` with `key` removed.
pub fn profile_without(key: &str) -> Value {
    let mut profile = valid_profile();
    profile
        .as_object_mut()
        .expect("profile fixture is an object")
        .remove(key);
    profile
}

/// `valid_profile()` as a validated entity.
pub fn sample_profile() -> Profile {
    validate_profile(&valid_profile()).expect("fixture profile is valid")
}
