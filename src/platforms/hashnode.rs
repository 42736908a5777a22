//! Hashnode converter: base transform passthrough
//!
//! Hashnode takes the cleaned body as-is; metadata is configured on the
//! platform side. Kept as its own converter so Hashnode can diverge from
//! Dev.to independently.

use crate::error::Result;
use crate::platforms::PlatformConverter;
use crate::post::Post;
use crate::transform::{self, TransformOptions};

#[derive(Debug)]
pub struct HashnodeConverter;

impl PlatformConverter for HashnodeConverter {
    fn platform_id(&self) -> &str {
        "hashnode"
    }

    fn display_name(&self) -> &str {
        "Hashnode"
    }

    fn convert(&self, post: &Post, opts: &TransformOptions) -> Result<String> {
        transform::external_body(post, opts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hashnode_is_plain_base_transform() {
        let post = Post::parse("# T x\n\n<!--[PROPERTIES]\n- slug: t\n-->\n\nBody.\n").unwrap();
        let opts = TransformOptions::default();
        let output = HashnodeConverter.convert(&post, &opts).unwrap();
        assert_eq!(output, transform::external_body(&post, &opts).unwrap());
        assert_eq!(output, "Body.");
    }
}
