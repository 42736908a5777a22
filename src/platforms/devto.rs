//! Dev.to converter: base transform passthrough

use crate::error::Result;
use crate::platforms::PlatformConverter;
use crate::post::Post;
use crate::transform::{self, TransformOptions};

#[derive(Debug)]
pub struct DevtoConverter;

impl PlatformConverter for DevtoConverter {
    fn platform_id(&self) -> &str {
        "devto"
    }

    fn display_name(&self) -> &str {
        "Dev.to"
    }

    fn convert(&self, post: &Post, opts: &TransformOptions) -> Result<String> {
        transform::external_body(post, opts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_devto_platform_id() {
        assert_eq!(DevtoConverter.platform_id(), "devto");
    }

    #[test]
    fn test_devto_matches_hashnode_today() {
        let post = Post::parse("# T x\n\nBody.\n").unwrap();
        let opts = TransformOptions::default();
        assert_eq!(
            DevtoConverter.convert(&post, &opts).unwrap(),
            crate::platforms::hashnode::HashnodeConverter
                .convert(&post, &opts)
                .unwrap()
        );
    }
}
