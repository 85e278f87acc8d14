use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::schema::{required_text, Draft, Shape};

static TWEET_ID: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+$").unwrap());

/// Reference to an embedded post; the id is opaque but always numeric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tweet {
    pub id: String,
    pub title: String,
}

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(default)]
pub struct TweetDraft {
    #[validate(regex(path = *TWEET_ID, message = "Tweet ID must be a numeric string"))]
    pub id: String,

    #[validate(custom(function = "required_text", message = "Title is required"))]
    pub title: String,
}

impl Draft for TweetDraft {
    type Output = Tweet;
    const ENTITY: &'static str = "Tweet";
    const SHAPE: &'static [(&'static str, Shape)] = &[("id", Shape::Text), ("title", Shape::Text)];

    fn finish(self) -> Tweet {
        Tweet {
            id: self.id,
            title: self.title,
        }
    }
}
