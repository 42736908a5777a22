//! Medium converter: front-matter header plus cleaned body
//!
//! Medium imports keep their metadata inline, so the properties block is
//! re-emitted as a `---`-delimited header ahead of the base-transformed body.

use crate::error::{CrosspostError, Result};
use crate::platforms::PlatformConverter;
use crate::post::Post;
use crate::transform::{self, TransformOptions};

#[derive(Debug)]
pub struct MediumConverter;

impl PlatformConverter for MediumConverter {
    fn platform_id(&self) -> &str {
        "medium"
    }

    fn display_name(&self) -> &str {
        "Medium"
    }

    fn convert(&self, post: &Post, opts: &TransformOptions) -> Result<String> {
        let block = post.properties().ok_or(CrosspostError::PropertiesMissing)?;
        let body = transform::external_body(post, opts)?;
        Ok(format!("{}{body}", block.front_matter()))
    }
}
