//! Shared base transformation applied before any platform-specific step
//!
//! Order matters: image links are rewritten first, then the properties block
//! is removed, then the title line is blanked, then the result is trimmed.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::Result;
use crate::post::{self, Post};

/// Remote base URL substituted for the `./assets/` prefix of image links
pub const DEFAULT_ASSET_BASE_URL: &str =
    "https://raw.githubusercontent.com/Nevvulo/blog/main/posts/assets/";

static IMAGE_LINK: LazyLock<Regex> = LazyLock::new(image_link_pattern);

#[allow(clippy::expect_used)]
fn image_link_pattern() -> Regex {
    Regex::new(r"!\[([^\]]*)\]\(\./assets/([^)]+)\)").expect("image link pattern is valid")
}

/// Knobs for the base transformation
#[derive(Debug, Clone)]
pub struct TransformOptions {
    /// Base URL replacing the `./assets/` prefix (must end with `/`)
    pub base_url: String,
}

impl Default for TransformOptions {
    fn default() -> Self {
        TransformOptions {
            base_url: DEFAULT_ASSET_BASE_URL.to_string(),
        }
    }
}

impl TransformOptions {
    /// Options with a custom asset base URL; a missing trailing `/` is added
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        TransformOptions { base_url }
    }
}

/// Produce the cleaned post body shared by every platform.
///
/// Pure function of the parsed post and the options: strips the metadata
/// header material and absolutizes asset links, leaving the markdown body.
pub fn external_body(post: &Post, opts: &TransformOptions) -> Result<String> {
    let mut text = rewrite_image_links(post.source(), &opts.base_url);
    text = strip_properties_block(&text)?;
    text = strip_title_line(&text);
    Ok(text.trim().to_string())
}

/// Rewrite `![alt](./assets/rest)` image references to the remote base URL.
///
/// Alt text and the path remainder pass through untouched; references with
/// any other path shape are left as-is. The rewrite is terminal: rewritten
/// URLs no longer match the pattern.
pub fn rewrite_image_links(text: &str, base_url: &str) -> String {
    if !text.contains("(./assets/") {
        return text.to_string();
    }
    IMAGE_LINK
        .replace_all(text, |caps: &regex::Captures<'_>| {
            format!("![{}]({}{})", &caps[1], base_url, &caps[2])
        })
        .into_owned()
}

/// Remove the properties block, opening marker line through closing marker
/// line inclusive. Text without a block passes through unchanged.
pub fn strip_properties_block(text: &str) -> Result<String> {
    match post::find_properties_block(text)? {
        Some((range, _)) => {
            let mut out = String::with_capacity(text.len() - range.len());
            out.push_str(&text[..range.start]);
            out.push_str(&text[range.end..]);
            Ok(out)
        }
        None => Ok(text.to_string()),
    }
}

/// Blank out the content of the first H1 title line. The line's newline
/// survives; the final trim absorbs it when the title leads the document.
pub fn strip_title_line(text: &str) -> String {
    match post::find_title_line(text) {
        Some((start, rest)) => {
            // line content is `#` + rest
            let end = start + 1 + rest.len();
            let mut out = String::with_capacity(text.len() - (end - start));
            out.push_str(&text[..start]);
            out.push_str(&text[end..]);
            out
        }
        None => text.to_string(),
    }
}
