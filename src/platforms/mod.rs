//! Platform converter plugin system
//!
//! Each publishing platform implements the `PlatformConverter` trait and is
//! registered with `ConverterRegistry`. The registry keeps converters in
//! emission order, which the CI output shim relies on.
//!
//! ## Built-in Platforms
//!
//! - **hashnode**: base transform passthrough
//! - **devto**: base transform passthrough
//! - **medium**: front-matter header rebuilt from the properties block
//!
//! ## Adding a New Platform
//!
//! 1. Create a converter file in `src/platforms/`
//! 2. Implement the `PlatformConverter` trait
//! 3. Register it in `ConverterRegistry::register_builtins()`
//! 4. Add the module declaration here

pub mod devto;
pub mod hashnode;
pub mod medium;

use std::sync::Arc;

use crate::error::{CrosspostError, Result};
use crate::post::Post;
use crate::transform::TransformOptions;

/// A converter producing one platform's variant of a post
pub trait PlatformConverter: Send + Sync + std::fmt::Debug {
    /// Unique identifier for this platform (e.g., "medium")
    fn platform_id(&self) -> &str;

    /// Human-readable platform name for listings
    fn display_name(&self) -> &str;

    /// Produce this platform's markdown variant of the post
    fn convert(&self, post: &Post, opts: &TransformOptions) -> Result<String>;
}

/// The outputs of a full conversion, one entry per platform, in emission order
#[derive(Debug, Clone, Default)]
pub struct ConvertedPost {
    outputs: Vec<(String, String)>,
}

impl ConvertedPost {
    /// Output for a single platform
    pub fn get(&self, platform_id: &str) -> Option<&str> {
        self.outputs
            .iter()
            .find(|(id, _)| id == platform_id)
            .map(|(_, output)| output.as_str())
    }

    /// Iterate `(platform_id, output)` pairs in emission order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.outputs
            .iter()
            .map(|(id, output)| (id.as_str(), output.as_str()))
    }

    /// JSON object mapping platform id to output
    pub fn to_json(&self) -> serde_json::Value {
        let mut map = serde_json::Map::new();
        for (id, output) in &self.outputs {
            map.insert(id.clone(), serde_json::Value::String(output.clone()));
        }
        serde_json::Value::Object(map)
    }
}

/// Registry of platform converters, kept in emission order
#[derive(Debug, Default)]
pub struct ConverterRegistry {
    converters: Vec<Arc<dyn PlatformConverter>>,
}

impl ConverterRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            converters: Vec::new(),
        }
    }

    /// Registry with all built-in converters installed
    pub fn with_builtins() -> Result<Self> {
        let mut registry = Self::new();
        registry.register_builtins()?;
        Ok(registry)
    }

    /// Register a converter plugin.
    ///
    /// # Errors
    ///
    /// Returns `CrosspostError::DuplicateConverter` if a converter with the
    /// same `platform_id` is already registered.
    pub fn register(&mut self, converter: Box<dyn PlatformConverter>) -> Result<()> {
        let platform_id = converter.platform_id().to_string();
        if self.get(&platform_id).is_ok() {
            return Err(CrosspostError::DuplicateConverter { platform_id });
        }
        self.converters.push(Arc::from(converter));
        Ok(())
    }

    /// Register the built-in converters in emission order:
    /// hashnode, devto, medium.
    pub fn register_builtins(&mut self) -> Result<()> {
        self.register(Box::new(hashnode::HashnodeConverter))?;
        self.register(Box::new(devto::DevtoConverter))?;
        self.register(Box::new(medium::MediumConverter))?;
        Ok(())
    }

    /// Registry restricted to the given platform ids, emission order
    /// preserved. An empty selection keeps every registered converter.
    pub fn subset(&self, platform_ids: &[String]) -> Result<ConverterRegistry> {
        if platform_ids.is_empty() {
            return Ok(ConverterRegistry {
                converters: self.converters.clone(),
            });
        }

        for platform_id in platform_ids {
            self.get(platform_id)?;
        }

        Ok(ConverterRegistry {
            converters: self
                .converters
                .iter()
                .filter(|c| platform_ids.iter().any(|p| p == c.platform_id()))
                .cloned()
                .collect(),
        })
    }

    /// Look up a converter by platform id
    pub fn get(&self, platform_id: &str) -> Result<Arc<dyn PlatformConverter>> {
        self.converters
            .iter()
            .find(|c| c.platform_id() == platform_id)
            .cloned()
            .ok_or_else(|| CrosspostError::PlatformUnknown {
                platform: platform_id.to_string(),
            })
    }

    /// Registered converters in emission order
    pub fn converters(&self) -> &[Arc<dyn PlatformConverter>] {
        &self.converters
    }

    /// Registered platform ids in emission order
    pub fn platform_ids(&self) -> Vec<String> {
        self.converters
            .iter()
            .map(|c| c.platform_id().to_string())
            .collect()
    }

    /// Run every registered converter over the post.
    ///
    /// Each converter recomputes the base transform independently; the
    /// transform is pure and cheap, so no caching is warranted.
    pub fn convert_all(&self, post: &Post, opts: &TransformOptions) -> Result<ConvertedPost> {
        let mut outputs = Vec::with_capacity(self.converters.len());
        for converter in &self.converters {
            let output = converter.convert(post, opts)?;
            outputs.push((converter.platform_id().to_string(), output));
        }
        Ok(ConvertedPost { outputs })
    }
}
