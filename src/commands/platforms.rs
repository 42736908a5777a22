//! Platforms command: list the registered converters

use console::Style;

use crate::cli::PlatformsArgs;
use crate::error::Result;
use crate::platforms::ConverterRegistry;

/// Run the platforms command
pub fn run(args: PlatformsArgs) -> Result<()> {
    let registry = ConverterRegistry::with_builtins()?;

    if args.json {
        let list: Vec<serde_json::Value> = registry
            .converters()
            .iter()
            .map(|c| {
                serde_json::json!({
                    "id": c.platform_id(),
                    "name": c.display_name(),
                })
            })
            .collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&list).unwrap_or_else(|_| "[]".to_string())
        );
        return Ok(());
    }

    let id_style = Style::new().cyan().bold();
    for converter in registry.converters() {
        println!(
            "{:<10} {}",
            id_style.apply_to(converter.platform_id()),
            converter.display_name()
        );
    }

    Ok(())
}
