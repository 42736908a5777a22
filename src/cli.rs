//! CLI definitions using clap derive API

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// crosspost - blog-post converter for external publishing platforms
///
/// Convert extended-markdown posts into platform-specific variants for
/// Hashnode, Dev.to and Medium.
#[derive(Parser, Debug)]
#[command(
    name = "crosspost",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Convert blog posts for external publishing platforms",
    long_about = "crosspost rewrites one extended-markdown blog post into the markdown \
                  variants expected by Hashnode, Dev.to and Medium: asset links become \
                  absolute URLs, the properties block and title heading are stripped, \
                  and Medium gets the metadata back as a front-matter header.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n    \
                  crosspost convert posts/my-post.mdx --platform medium\n    \
                  crosspost convert posts/ --out-dir dist/\n    \
                  crosspost convert posts/my-post.mdx --json\n    \
                  crosspost platforms\n\n\
                  \x1b[1m\x1b[32mDocumentation:\x1b[0m\n    \
                  https://github.com/Nevvulo/blog"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run as a GitHub Action (inputs and outputs via the environment)
    Run(RunArgs),

    /// Convert post files or directories locally
    Convert(ConvertArgs),

    /// List supported platforms
    Platforms(PlatformsArgs),

    /// Show version information
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the run command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Run as the action entrypoint (runner sets INPUT_CONTENTS):\n    \
                  crosspost run\n\n\
                  Override the asset base URL:\n    \
                  crosspost run --base-url https://cdn.example.com/assets/")]
pub struct RunArgs {
    /// Base URL replacing the ./assets/ prefix of image links
    /// (falls back to the base_url action input, then the built-in default)
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,
}

/// Arguments for the convert command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Print the Medium variant of one post:\n    \
                  crosspost convert posts/my-post.mdx --platform medium\n\n\
                  Convert a whole directory for all platforms:\n    \
                  crosspost convert posts/ --out-dir dist/\n\n\
                  Structured output for scripting:\n    \
                  crosspost convert posts/my-post.mdx --json\n\n\
                  Only selected platforms:\n    \
                  crosspost convert posts/ --platform devto --platform hashnode --out-dir dist/")]
pub struct ConvertArgs {
    /// Post files or directories (directories are walked for .md/.mdx)
    #[arg(required = true, value_name = "INPUT")]
    pub inputs: Vec<PathBuf>,

    /// Convert only for specific platforms (default: all registered)
    #[arg(long = "platform", value_name = "PLATFORM")]
    pub platforms: Vec<String>,

    /// Write <stem>.<platform>.md files into this directory
    #[arg(long, value_name = "DIR")]
    pub out_dir: Option<PathBuf>,

    /// Emit a JSON object mapping platform id to output
    #[arg(long, conflicts_with = "out_dir")]
    pub json: bool,

    /// Base URL replacing the ./assets/ prefix of image links
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,
}

/// Arguments for the platforms command
#[derive(Parser, Debug)]
pub struct PlatformsArgs {
    /// Emit the platform list as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    crosspost completions --shell bash > ~/.bash_completion.d/crosspost\n\n\
                  Generate zsh completions:\n    crosspost completions --shell zsh > ~/.zfunc/_crosspost\n\n\
                  Generate fish completions:\n    crosspost completions --shell fish > ~/.config/fish/completions/crosspost.fish")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    #[arg(long)]
    pub shell: String,
}
