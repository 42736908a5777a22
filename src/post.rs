//! Structured model of a blog-post source document
//!
//! Replaces regex structural parsing with an explicit line scanner. A post is
//! an extended-markdown document holding an optional H1 title line, an
//! optional delimited properties block with bullet metadata lines, and the
//! remaining markdown body.

use serde::Deserialize;

use crate::error::{CrosspostError, Result};

/// Opening delimiter of the properties block (start of line)
pub const PROPERTIES_OPEN: &str = "<!--[PROPERTIES]";

/// Closing delimiter of the properties block (whole line, trimmed)
pub const PROPERTIES_CLOSE: &str = "-->";

/// A parsed blog-post source document
#[derive(Debug, Clone)]
pub struct Post {
    source: String,
    title: Option<String>,
    properties: Option<PropertyBlock>,
}

/// The raw interior lines of a properties block, delimiters discarded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyBlock {
    lines: Vec<String>,
}

/// Typed view of the properties block metadata
///
/// The bullet lines form a YAML sequence of single-entry mappings. This view
/// is for validation and display; the Medium header is always built from the
/// literal lines via [`PropertyBlock::front_matter`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PostMeta {
    pub slug: Option<String>,
    pub title: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Post {
    /// Parse a source document into its structural components.
    ///
    /// Fails only when a properties block is opened but never closed; every
    /// other shape of document is accepted (title and properties are both
    /// optional).
    pub fn parse(source: &str) -> Result<Post> {
        let title = find_title_line(source).map(|(_, text)| text.to_string());
        let properties = parse_properties(source)?;

        Ok(Post {
            source: source.to_string(),
            title,
            properties,
        })
    }

    /// The unmodified source text
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Content of the first H1 title line, without the `# ` marker
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// The properties block, if the document has one
    pub fn properties(&self) -> Option<&PropertyBlock> {
        self.properties.as_ref()
    }
}

impl PropertyBlock {
    /// Raw interior lines in document order
    #[allow(dead_code)]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Build the Medium front-matter header from the literal lines.
    ///
    /// The joined interior text has its first two characters replaced with
    /// two spaces (so only the first bullet marker is de-itemized; later
    /// lines keep theirs) and is wrapped in `---` delimiters. The trailing
    /// newline lands directly before the body, with no blank line between.
    pub fn front_matter(&self) -> String {
        let joined = self.lines.join("\n");
        let de_itemized = replace_leading_chars(&joined, 2, "  ");
        format!("---\n{de_itemized}\n---\n")
    }

    /// Parse the bullet lines into typed metadata
    pub fn meta(&self) -> Result<PostMeta> {
        let yaml = self.lines.join("\n");
        let entries: Vec<serde_yaml::Mapping> = serde_yaml::from_str(&yaml)?;

        let mut merged = serde_yaml::Mapping::new();
        for entry in entries {
            for (key, value) in entry {
                merged.insert(key, value);
            }
        }

        let meta: PostMeta = serde_yaml::from_value(serde_yaml::Value::Mapping(merged))?;
        Ok(meta)
    }
}

/// Locate the first true H1 line: exactly one `#`, then a non-`#` character,
/// then at least one further character. Returns the byte offset of the line
/// start and the line content after the `#` marker.
pub(crate) fn find_title_line(source: &str) -> Option<(usize, &str)> {
    let mut offset = 0;
    for line in source.split_inclusive('\n') {
        let content = line.strip_suffix('\n').unwrap_or(line);
        let content = content.strip_suffix('\r').unwrap_or(content);
        if let Some(rest) = content.strip_prefix('#') {
            let mut chars = rest.chars();
            if let Some(first) = chars.next() {
                if first != '#' && chars.next().is_some() {
                    return Some((offset, rest));
                }
            }
        }
        offset += line.len();
    }
    None
}

/// Locate the properties block. Returns the byte range covering the opening
/// line through the closing line's newline, plus the interior lines.
pub(crate) fn find_properties_block(
    source: &str,
) -> Result<Option<(std::ops::Range<usize>, Vec<String>)>> {
    let mut offset = 0;
    let mut open: Option<(usize, usize)> = None; // (byte offset, line number)
    let mut interior = Vec::new();

    for (index, line) in source.split_inclusive('\n').enumerate() {
        let content = line.strip_suffix('\n').unwrap_or(line);
        let content = content.strip_suffix('\r').unwrap_or(content);

        match open {
            None => {
                if content.starts_with(PROPERTIES_OPEN) {
                    open = Some((offset, index + 1));
                }
            }
            Some((start, _)) => {
                if content.trim() == PROPERTIES_CLOSE {
                    return Ok(Some((start..offset + line.len(), interior)));
                }
                interior.push(content.to_string());
            }
        }
        offset += line.len();
    }

    match open {
        Some((_, line)) => Err(CrosspostError::PropertiesUnterminated { line }),
        None => Ok(None),
    }
}

fn parse_properties(source: &str) -> Result<Option<PropertyBlock>> {
    Ok(find_properties_block(source)?.map(|(_, lines)| PropertyBlock { lines }))
}

/// Replace the first `count` characters of `text` with `replacement`,
/// counting characters rather than bytes so multibyte text cannot split a
/// UTF-8 boundary.
fn replace_leading_chars(text: &str, count: usize, replacement: &str) -> String {
    let split = text
        .char_indices()
        .nth(count)
        .map_or(text.len(), |(index, _)| index);
    format!("{replacement}{}", &text[split..])
}
