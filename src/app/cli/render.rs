//! Render and plan command implementations.

use std::path::{Path, PathBuf};

use crate::domain::AppError;

pub fn run_render(path: &Path, templates_dir: Option<&Path>) -> Result<(), AppError> {
    let request = crate::load_request(path)?;
    let plan = crate::plan(&request, &templates_root(path, templates_dir))?;
    print!("{}", plan.config_text());
    Ok(())
}

pub fn run_plan(path: &Path, templates_dir: Option<&Path>) -> Result<(), AppError> {
    let request = crate::load_request(path)?;
    let plan = crate::plan(&request, &templates_root(path, templates_dir))?;
    let json = serde_json::to_string_pretty(&plan)
        .map_err(|err| AppError::Serialization(err.to_string()))?;
    println!("{}", json);
    Ok(())
}

/// Explicit directory, else the directory holding the request file.
fn templates_root(path: &Path, templates_dir: Option<&Path>) -> PathBuf {
    match templates_dir {
        Some(dir) => dir.to_path_buf(),
        None => path
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
            .unwrap_or(Path::new("."))
            .to_path_buf(),
    }
}
