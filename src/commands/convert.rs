//! Local conversion command: files and directories instead of action inputs

use std::path::{Path, PathBuf};

use console::Style;
use walkdir::WalkDir;

use crate::cli::ConvertArgs;
use crate::error::{CrosspostError, Result};
use crate::platforms::ConverterRegistry;
use crate::post::Post;
use crate::transform::TransformOptions;

/// Run the convert command
pub fn run(args: ConvertArgs) -> Result<()> {
    let registry = ConverterRegistry::with_builtins()?.subset(&args.platforms)?;

    let opts = match args.base_url {
        Some(url) => TransformOptions::with_base_url(url),
        None => TransformOptions::default(),
    };

    let files = collect_post_files(&args.inputs)?;

    if let Some(out_dir) = &args.out_dir {
        convert_to_dir(&files, &registry, &opts, out_dir)
    } else if args.json {
        convert_to_json(&files, &registry, &opts)
    } else {
        convert_to_stdout(&files, &registry, &opts)
    }
}

/// Expand the input arguments into a flat list of post files. Directories
/// are walked for `.md` and `.mdx` files in file-name order.
fn collect_post_files(inputs: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for input in inputs {
        if input.is_dir() {
            for entry in WalkDir::new(input).sort_by_file_name() {
                let entry = entry.map_err(|e| CrosspostError::FileReadFailed {
                    path: input.display().to_string(),
                    reason: e.to_string(),
                })?;
                if entry.file_type().is_file() && is_post_file(entry.path()) {
                    files.push(entry.path().to_path_buf());
                }
            }
        } else {
            files.push(input.clone());
        }
    }

    Ok(files)
}

fn is_post_file(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|ext| ext.to_str()),
        Some("md" | "mdx")
    )
}

fn parse_post_file(path: &Path) -> Result<Post> {
    let source =
        std::fs::read_to_string(path).map_err(|e| CrosspostError::FileReadFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
    Post::parse(&source)
}

/// Display title for progress output: typed metadata first (validating the
/// properties block on the way), H1 content as the fallback
fn display_title(post: &Post) -> Result<Option<String>> {
    if let Some(block) = post.properties() {
        let meta = block.meta()?;
        if meta.title.is_some() {
            return Ok(meta.title);
        }
    }
    Ok(post.title().map(|t| t.trim().to_string()))
}

fn convert_to_dir(
    files: &[PathBuf],
    registry: &ConverterRegistry,
    opts: &TransformOptions,
    out_dir: &Path,
) -> Result<()> {
    std::fs::create_dir_all(out_dir).map_err(|e| CrosspostError::FileWriteFailed {
        path: out_dir.display().to_string(),
        reason: e.to_string(),
    })?;

    let heading = Style::new().bold();
    let success = Style::new().green().bold();
    let dim = Style::new().dim();

    for file in files {
        let post = parse_post_file(file)?;
        if let Some(title) = display_title(&post)? {
            println!("{}", heading.apply_to(title));
        }

        let converted = registry.convert_all(&post, opts)?;
        let stem = file
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("post");

        for (platform_id, output) in converted.iter() {
            let target = out_dir.join(format!("{stem}.{platform_id}.md"));
            std::fs::write(&target, ensure_trailing_newline(output)).map_err(|e| {
                CrosspostError::FileWriteFailed {
                    path: target.display().to_string(),
                    reason: e.to_string(),
                }
            })?;
            println!(
                "{} {} {} {}",
                success.apply_to("✓"),
                file.display(),
                dim.apply_to("->"),
                target.display()
            );
        }
    }

    Ok(())
}

fn convert_to_json(
    files: &[PathBuf],
    registry: &ConverterRegistry,
    opts: &TransformOptions,
) -> Result<()> {
    let mut documents = serde_json::Map::new();

    for file in files {
        let post = parse_post_file(file)?;
        let converted = registry.convert_all(&post, opts)?;
        documents.insert(file.display().to_string(), converted.to_json());
    }

    // a single input collapses to the bare platform map
    let value = if documents.len() == 1 {
        documents
            .into_iter()
            .next()
            .map(|(_, outputs)| outputs)
            .unwrap_or(serde_json::Value::Null)
    } else {
        serde_json::Value::Object(documents)
    };

    println!(
        "{}",
        serde_json::to_string_pretty(&value).unwrap_or_else(|_| "{}".to_string())
    );
    Ok(())
}

fn convert_to_stdout(
    files: &[PathBuf],
    registry: &ConverterRegistry,
    opts: &TransformOptions,
) -> Result<()> {
    let ids = registry.platform_ids();
    let [platform_id] = ids.as_slice() else {
        return Err(CrosspostError::StdoutNeedsSinglePlatform);
    };

    for file in files {
        let post = parse_post_file(file)?;
        let converted = registry.convert_all(&post, opts)?;
        if let Some(output) = converted.get(platform_id) {
            println!("{output}");
        }
    }

    Ok(())
}

fn ensure_trailing_newline(text: &str) -> String {
    if text.ends_with('\n') {
        text.to_string()
    } else {
        format!("{text}\n")
    }
}
