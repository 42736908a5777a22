//! Error types and handling for crosspost
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for crosspost operations
#[derive(Error, Diagnostic, Debug)]
pub enum CrosspostError {
    // Action input errors
    #[error("Required input not supplied: {name}")]
    #[diagnostic(
        code(crosspost::input::missing),
        help("The Actions runner sets INPUT_* variables for `with:` inputs; for local runs export the variable yourself")
    )]
    InputMissing { name: String },

    // Document errors
    #[error("Post has no properties block")]
    #[diagnostic(
        code(crosspost::post::properties_missing),
        help("Medium output needs a <!--[PROPERTIES] ... --> block with slug, title and tags")
    )]
    PropertiesMissing,

    #[error("Properties block opened on line {line} is never closed")]
    #[diagnostic(
        code(crosspost::post::properties_unterminated),
        help("Close the <!--[PROPERTIES] block with a line containing only -->")
    )]
    PropertiesUnterminated { line: usize },

    #[error("Invalid post metadata: {reason}")]
    #[diagnostic(
        code(crosspost::post::meta_invalid),
        help("Properties lines must be bullet entries of the form `- key: value`")
    )]
    MetaInvalid { reason: String },

    // Platform errors
    #[error("Unknown platform: {platform}")]
    #[diagnostic(
        code(crosspost::platform::unknown),
        help("Run 'crosspost platforms' to list supported platforms")
    )]
    PlatformUnknown { platform: String },

    #[error("Converter already registered for platform: {platform_id}")]
    #[diagnostic(code(crosspost::platform::duplicate_converter))]
    DuplicateConverter { platform_id: String },

    // CLI errors
    #[error("Writing to stdout requires exactly one platform")]
    #[diagnostic(
        code(crosspost::cli::stdout_needs_single_platform),
        help("Pass a single --platform, or use --out-dir / --json for multi-platform output")
    )]
    StdoutNeedsSinglePlatform,

    // File system errors
    #[error("Failed to read file: {path}")]
    #[diagnostic(code(crosspost::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}")]
    #[diagnostic(code(crosspost::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("Failed to write action output '{name}': {reason}")]
    #[diagnostic(code(crosspost::output::write_failed))]
    OutputWriteFailed { name: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(crosspost::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for CrosspostError {
    fn from(err: std::io::Error) -> Self {
        CrosspostError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for CrosspostError {
    fn from(err: serde_yaml::Error) -> Self {
        CrosspostError::MetaInvalid {
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, CrosspostError>;
