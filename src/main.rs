//! crosspost - blog-post converter for external publishing platforms
//!
//! Converts one extended-markdown blog post into the markdown variants
//! expected by Hashnode, Dev.to and Medium. Runs either as a GitHub Action
//! entrypoint (`run`) or as a local conversion tool (`convert`).

use clap::Parser;

mod cli;
mod commands;
mod error;
mod gha;
mod platforms;
mod post;
mod transform;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run(args) => commands::run::run(args),
        Commands::Convert(args) => commands::convert::run(args),
        Commands::Platforms(args) => commands::platforms::run(args),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
