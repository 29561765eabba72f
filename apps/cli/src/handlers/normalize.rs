use anyhow::{Context as _, Result};
use brigade::recipes::parse_recipe;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Reads a recipe from `file` (stdin for `None` or `-`) and returns its canonical JSON.
///
/// # Errors
/// Returns an error if the input cannot be read or is not a recipe document.
pub fn normalize(file: Option<&Path>, pretty: bool) -> Result<String> {
    let raw = match file.filter(|path| path.as_os_str() != "-") {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf).context("Failed to read stdin")?;
            buf
        },
    };

    let recipe = parse_recipe(&raw)?;
    debug!(id = ?recipe.id(), steps = recipe.recipe_steps.len(), "Recipe normalized");

    let json =
        if pretty { serde_json::to_string_pretty(&recipe) } else { serde_json::to_string(&recipe) };
    Ok(json?)
}
