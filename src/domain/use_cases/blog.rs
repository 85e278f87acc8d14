use std::collections::BTreeMap;

use chrono::{DateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::instrument;

use crate::{
    constants::{BLOG_INDEX_PRIORITY, BLOG_PATH, BLOG_POST_PRIORITY, HOME_PRIORITY, SUMMARY_EXCERPT_CHARS},
    entities::blog_post::{BlogPost, BlogPostDraft, BlogPostListItem},
    errors::{ContentError, ValidationReport},
    repositories::blog_post::{BlogPostRepository, BlogPostSource},
    schema::{conform, Draft, FieldPath, Report},
    utils::markdown::{excerpt, parse_front_matter},
};

// ───── Blog index ───────────────────────────────────────────────────

/// Posts with unique slugs, most recent first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BlogIndex {
    posts: Vec<BlogPost>,
}

impl BlogIndex {
    /// Builds the index, reporting every post with a repeated slug.
    pub fn new(posts: Vec<BlogPost>) -> Result<Self, ValidationReport> {
        let mut seen: BTreeMap<&str, usize> = BTreeMap::new();
        let mut report = Report::new();
        let root = FieldPath::root().field("posts");

        for (i, post) in posts.iter().enumerate() {
            if let Some(first) = seen.insert(post.slug.as_str(), i) {
                report.push(
                    &root.index(i).field("slug"),
                    format!("Slug '{}' is already used by post {}", post.slug, first),
                );
            }
        }

        if !report.is_empty() {
            return Err(ValidationReport::new("BlogIndex", report.into_violations()));
        }

        let mut posts = posts;
        posts.sort_by(|a, b| {
            b.metadata
                .published_at
                .cmp(&a.metadata.published_at)
                .then_with(|| a.slug.cmp(&b.slug))
        });

        Ok(BlogIndex { posts })
    }

    pub fn posts(&self) -> &[BlogPost] {
        &self.posts
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    pub fn get(&self, slug: &str) -> Option<&BlogPost> {
        self.posts.iter().find(|p| p.slug == slug)
    }

    pub fn listing(&self) -> Vec<BlogPostListItem> {
        self.posts.iter().map(BlogPost::to_list_item).collect()
    }

    pub fn recent(&self, limit: usize) -> &[BlogPost] {
        &self.posts[..limit.min(self.posts.len())]
    }
}

// ───── Site index ───────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFrequency {
    Weekly,
    Monthly,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SitemapEntry {
    pub url: String,
    pub last_modified: DateTime<Utc>,
    pub change_frequency: ChangeFrequency,
    pub priority: f32,
}

/// Home page, blog listing, then one entry per post in index order.
///
/// Static pages carry `generated_at`; posts carry their publication day.
pub fn site_index(base_url: &str, index: &BlogIndex, generated_at: DateTime<Utc>) -> Vec<SitemapEntry> {
    let base = base_url.trim_end_matches('/');

    let mut entries = vec![
        SitemapEntry {
            url: base.to_string(),
            last_modified: generated_at,
            change_frequency: ChangeFrequency::Weekly,
            priority: HOME_PRIORITY,
        },
        SitemapEntry {
            url: format!("{base}{BLOG_PATH}"),
            last_modified: generated_at,
            change_frequency: ChangeFrequency::Weekly,
            priority: BLOG_INDEX_PRIORITY,
        },
    ];

    entries.extend(index.posts().iter().map(|post| SitemapEntry {
        url: format!("{base}{}", post.href()),
        last_modified: post.metadata.published_at.and_time(NaiveTime::MIN).and_utc(),
        change_frequency: ChangeFrequency::Monthly,
        priority: BLOG_POST_PRIORITY,
    }));

    entries
}

// ───── Loading ──────────────────────────────────────────────────────

/// Parses one stored post. Violations are reported under `path`.
pub fn parse_post(source: &BlogPostSource, path: &FieldPath, report: &mut Report) -> Option<BlogPost> {
    let parsed = source
        .markdown
        .as_ref()
        .map_err(|e| e.to_string())
        .and_then(|markdown| parse_front_matter::<Value>(markdown).map_err(|e| e.to_string()));
    let (mut front_matter, body) = match parsed {
        Ok(parts) => parts,
        Err(message) => {
            report.push(path, message);
            return None;
        }
    };

    let before = report.len();
    if front_matter.is_null() {
        front_matter = Value::Object(Map::new());
    }
    if !conform::<BlogPostDraft>(&mut front_matter, path, report) {
        return None;
    }

    let mut draft = match BlogPostDraft::deserialize(&front_matter) {
        Ok(draft) => draft,
        Err(e) => {
            report.push(path, format!("Malformed front matter: {e}"));
            return None;
        }
    };
    draft.slug = source.slug.clone();
    if draft.summary.trim().is_empty() {
        draft.summary = excerpt(body, SUMMARY_EXCERPT_CHARS);
    }
    draft.source = body.to_string();

    report.nested(path, &draft);
    (report.len() == before).then(|| draft.finish())
}

pub struct BlogHandler<R>
where
    R: BlogPostRepository,
{
    pub blog_post_repo: R,
}

impl<R> BlogHandler<R>
where
    R: BlogPostRepository,
{
    pub fn new(blog_post_repo: R) -> Self {
        BlogHandler { blog_post_repo }
    }

    /// Loads every stored post into an index, reporting all problems at once.
    #[instrument(skip(self))]
    pub async fn load_index(&self) -> Result<BlogIndex, ContentError> {
        let sources = self.blog_post_repo.list_sources().await?;

        let root = FieldPath::root().field("posts");
        let mut report = Report::new();
        let posts: Vec<BlogPost> = sources
            .iter()
            .filter_map(|source| parse_post(source, &root.key(&source.slug), &mut report))
            .collect();

        if !report.is_empty() {
            return Err(ValidationReport::new("Blog", report.into_violations()).into());
        }

        let index = BlogIndex::new(posts)?;
        tracing::info!(posts = index.len(), "Blog index loaded");
        Ok(index)
    }
}
