/// Root entry point offered by fallbacks.
pub const HOME_HREF: &str = "/";

pub const BLOG_PATH: &str = "/blog";

// Site index hints, by page kind.
pub const HOME_PRIORITY: f32 = 1.0;
pub const BLOG_INDEX_PRIORITY: f32 = 0.8;
pub const BLOG_POST_PRIORITY: f32 = 0.6;

/// Default length of generated post summaries, in characters.
pub const SUMMARY_EXCERPT_CHARS: usize = 160;
