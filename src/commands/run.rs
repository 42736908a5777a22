//! Action-mode command: convert the post supplied by the CI environment
//!
//! Reads the `contents` input, converts it for every registered platform and
//! publishes each variant as a named action output in emission order.

use crate::cli::RunArgs;
use crate::error::Result;
use crate::gha::{self, OutputSink};
use crate::platforms::ConverterRegistry;
use crate::post::Post;
use crate::transform::TransformOptions;

/// Run as the GitHub Action entrypoint
pub fn run(args: RunArgs) -> Result<()> {
    let contents = gha::required_input("contents")?;

    let base_url = args.base_url.or_else(|| gha::input("base_url"));
    let opts = match base_url {
        Some(url) => TransformOptions::with_base_url(url),
        None => TransformOptions::default(),
    };

    let post = Post::parse(&contents)?;
    let registry = ConverterRegistry::with_builtins()?;
    let converted = registry.convert_all(&post, &opts)?;

    let sink = OutputSink::from_env();
    for (platform_id, output) in converted.iter() {
        sink.set_output(platform_id, output)?;
    }

    Ok(())
}
