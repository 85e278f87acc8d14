use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;

use crate::{
    errors::ContentError,
    utils::markdown::{batch_read_markdown_files, has_markdown_extension, MarkdownError},
};

/// A post as stored: the slug derived from its location plus its raw Markdown,
/// or the reason it could not be read.
#[derive(Debug)]
pub struct BlogPostSource {
    pub slug: String,
    pub markdown: Result<String, MarkdownError>,
}

#[async_trait]
pub trait BlogPostRepository: Send + Sync {
    async fn list_sources(&self) -> Result<Vec<BlogPostSource>, ContentError>;
}

/// Posts stored as Markdown files in one directory; the file stem is the slug.
#[derive(Debug, Clone)]
pub struct FsBlogPostRepo {
    pub dir: PathBuf,
    pub max_file_size: usize,
}

impl FsBlogPostRepo {
    pub fn new(dir: impl Into<PathBuf>, max_file_size: usize) -> Self {
        FsBlogPostRepo {
            dir: dir.into(),
            max_file_size,
        }
    }

    async fn markdown_files(&self) -> Result<Vec<PathBuf>, ContentError> {
        let mut entries = fs::read_dir(&self.dir).await.map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => {
                ContentError::NotFound(format!("blog directory {}", self.dir.display()))
            }
            _ => ContentError::from(e),
        })?;

        let mut files = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if entry.file_type().await?.is_file() && has_markdown_extension(&path) {
                files.push(path);
            }
        }

        files.sort();
        Ok(files)
    }
}

/// `Hello World.md` → `hello-world`.
pub fn slug_from_path(path: &Path) -> String {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .map(slug::slugify)
        .unwrap_or_default()
}

#[async_trait]
impl BlogPostRepository for FsBlogPostRepo {
    async fn list_sources(&self) -> Result<Vec<BlogPostSource>, ContentError> {
        let files = self.markdown_files().await?;
        let contents = batch_read_markdown_files(&files, self.max_file_size).await;

        let sources: Vec<BlogPostSource> = files
            .iter()
            .zip(contents)
            .map(|(path, markdown)| {
                if let Err(e) = &markdown {
                    tracing::warn!(path = %path.display(), "Unreadable blog post: {}", e);
                }
                BlogPostSource {
                    slug: slug_from_path(path),
                    markdown,
                }
            })
            .collect();

        tracing::debug!(count = sources.len(), dir = %self.dir.display(), "Listed blog posts");
        Ok(sources)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugs_come_from_file_stems() {
        assert_eq!(slug_from_path(Path::new("posts/Hello World.md")), "hello-world");
        assert_eq!(slug_from_path(Path::new("rust-tips.mdx")), "rust-tips");
    }
}
