use std::{io, path::{Path, PathBuf}};
use tokio::fs;

use serde::de::DeserializeOwned;

use pulldown_cmark::{Event, Parser, Tag, TagEnd};
use derive_more::Display;
use futures::future::join_all;

pub const MARKDOWN_EXTENSIONS: [&str; 4] = ["md", "mdx", "markdown", "mkd"];

const FRONT_MATTER_FENCE: &str = "---";

/// True when `path` has one of the accepted Markdown extensions.
pub fn has_markdown_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .is_some_and(|e| MARKDOWN_EXTENSIONS.contains(&e.as_str()))
}

/// Reads a Markdown file after checking extension, size and emptiness.
pub async fn read_markdown_file(file_path: &Path, max_size: usize) -> Result<String, MarkdownError> {
    if !has_markdown_extension(file_path) {
        return Err(MarkdownError::InvalidExtension);
    }

    let metadata = fs::metadata(file_path)
        .await
        .map_err(MarkdownError::IoError)?;
    if metadata.len() > max_size as u64 {
        return Err(MarkdownError::FileTooLarge);
    }

    let content = fs::read_to_string(file_path)
        .await
        .map_err(MarkdownError::IoError)?;
    if content.trim().is_empty() {
        return Err(MarkdownError::EmptyFile);
    }

    Ok(content)
}

/// Reads several Markdown files concurrently; each result stands alone.
pub async fn batch_read_markdown_files(
    files: &[PathBuf],
    max_size: usize,
) -> Vec<Result<String, MarkdownError>> {
    let futures: Vec<_> = files
        .iter()
        .map(|path| read_markdown_file(path, max_size))
        .collect();

    join_all(futures).await
}

/// Splits a leading `---` fenced block from the body.
///
/// Content that does not open with a fence line has no front matter.
pub fn split_front_matter(content: &str) -> Result<(Option<&str>, &str), MarkdownError> {
    let content = content.trim_start_matches('\u{feff}');
    let Some(rest) = content.strip_prefix(FRONT_MATTER_FENCE) else {
        return Ok((None, content));
    };
    let rest = rest.trim_start_matches([' ', '\t']);
    let Some(rest) = rest.strip_prefix("\r\n").or_else(|| rest.strip_prefix('\n')) else {
        return Ok((None, content));
    };

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == FRONT_MATTER_FENCE {
            return Ok((Some(&rest[..offset]), &rest[offset + line.len()..]));
        }
        offset += line.len();
    }

    Err(MarkdownError::UnterminatedFrontMatter)
}

/// Reads the YAML front matter of `content` into `T` and returns it with the body.
///
/// A missing or empty block yields `T::default()`.
pub fn parse_front_matter<T>(content: &str) -> Result<(T, &str), MarkdownError>
where
    T: DeserializeOwned + Default,
{
    let (block, body) = split_front_matter(content)?;
    let front_matter = match block {
        Some(yaml) if !yaml.trim().is_empty() => serde_yaml::from_str(yaml)
            .map_err(|e| MarkdownError::InvalidFrontMatter(e.to_string()))?,
        _ => T::default(),
    };
    Ok((front_matter, body))
}

/// Plain text of the first paragraph, cut at a word boundary near `max_chars`.
pub fn excerpt(markdown: &str, max_chars: usize) -> String {
    let mut text = String::new();
    let mut in_paragraph = false;

    for event in Parser::new(markdown) {
        match event {
            Event::Start(Tag::Paragraph) => in_paragraph = true,
            Event::End(TagEnd::Paragraph) if !text.trim().is_empty() => break,
            Event::End(TagEnd::Paragraph) => in_paragraph = false,
            Event::Text(t) | Event::Code(t) if in_paragraph => text.push_str(&t),
            Event::SoftBreak | Event::HardBreak if in_paragraph => text.push(' '),
            _ => {}
        }
    }

    let text = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if text.chars().count() <= max_chars {
        return text;
    }

    let cut: String = text.chars().take(max_chars).collect();
    let cut = match cut.rfind(' ') {
        Some(idx) if idx > 0 => &cut[..idx],
        _ => cut.as_str(),
    };
    format!("{}…", cut.trim_end_matches(|c: char| c.is_ascii_punctuation()))
}

/// All errors related to Markdown file handling.
#[derive(Debug, Display)]
pub enum MarkdownError {
    #[display("Invalid file extension. Only Markdown files are allowed.")]
    InvalidExtension,

    #[display("File is empty.")]
    EmptyFile,

    #[display("File size exceeds maximum allowed.")]
    FileTooLarge,

    #[display("Failed to read file: {_0}")]
    IoError(io::Error),

    #[display("Front matter is not closed with ---")]
    UnterminatedFrontMatter,

    #[display("Invalid front matter: {_0}")]
    InvalidFrontMatter(String),
}

impl std::error::Error for MarkdownError {}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Default, Deserialize)]
    #[serde(default, rename_all = "camelCase")]
    struct Meta {
        title: String,
        published_at: String,
        tags: Vec<String>,
    }

    #[test]
    fn front_matter_is_read_as_yaml() {
        let content = "---\ntitle: \"Hello, World\"\npublishedAt: 2024-06-18\ntags:\n  - rust\n  - web\n---\n\n# Heading\n\nBody text.\n";

        let (meta, body) = parse_front_matter::<Meta>(content).unwrap();

        assert_eq!(meta.title, "Hello, World");
        assert_eq!(meta.published_at, "2024-06-18");
        assert_eq!(meta.tags, vec!["rust", "web"]);
        assert_eq!(body, "\n# Heading\n\nBody text.\n");
    }

    #[test]
    fn content_without_front_matter_is_all_body() {
        let (meta, body) = parse_front_matter::<Meta>("Just text").unwrap();
        assert!(meta.title.is_empty());
        assert_eq!(body, "Just text");

        assert_eq!(split_front_matter("----\ntext").unwrap(), (None, "----\ntext"));
    }

    #[test]
    fn empty_front_matter_is_default() {
        let (meta, body) = parse_front_matter::<Meta>("---\n---\nBody").unwrap();
        assert!(meta.tags.is_empty());
        assert_eq!(body, "Body");
    }

    #[test]
    fn unterminated_front_matter_is_rejected() {
        assert!(matches!(
            split_front_matter("---\ntitle: x\n"),
            Err(MarkdownError::UnterminatedFrontMatter)
        ));
    }

    #[test]
    fn malformed_yaml_is_rejected() {
        assert!(matches!(
            parse_front_matter::<Meta>("---\ntitle: [unclosed\n---\nBody"),
            Err(MarkdownError::InvalidFrontMatter(_))
        ));
    }

    #[test]
    fn excerpt_takes_first_paragraph_text() {
        let markdown = "# Title\n\nSome *emphasised* text with `code`.\n\nSecond paragraph.";
        assert_eq!(excerpt(markdown, 160), "Some emphasised text with code.");
    }

    #[test]
    fn excerpt_cuts_at_word_boundary() {
        let markdown = "one two three four five";
        assert_eq!(excerpt(markdown, 10), "one two…");
    }

    #[test]
    fn extensions_are_checked_case_insensitively() {
        assert!(has_markdown_extension(Path::new("post.MD")));
        assert!(has_markdown_extension(Path::new("post.mdx")));
        assert!(!has_markdown_extension(Path::new("post.txt")));
    }
}
