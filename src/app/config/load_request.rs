//! Render request loading from a TOML or YAML file.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::{AppError, PlatformIdentity, RawParameters};

/// One render request: platform facts plus caller parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RenderRequest {
    pub facts: PlatformIdentity,
    #[serde(default)]
    pub parameters: RawParameters,
}

impl RenderRequest {
    pub fn new(facts: PlatformIdentity, parameters: RawParameters) -> Self {
        Self { facts, parameters }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestFormat {
    Toml,
    Yaml,
}

impl RequestFormat {
    /// `.yml`/`.yaml` files are YAML; everything else is TOML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yml") | Some("yaml") => RequestFormat::Yaml,
            _ => RequestFormat::Toml,
        }
    }
}

/// Load and parse a render request file.
pub fn load_request(path: &Path) -> Result<RenderRequest, AppError> {
    let content = fs::read_to_string(path)?;
    parse_request_content(&content, RequestFormat::from_path(path), &path.display().to_string())
}

pub fn parse_request_content(
    content: &str,
    format: RequestFormat,
    origin: &str,
) -> Result<RenderRequest, AppError> {
    let parse_error =
        |details: String| AppError::RequestParse { path: origin.to_string(), details };

    match format {
        RequestFormat::Toml => toml::from_str(content).map_err(|err| parse_error(err.to_string())),
        RequestFormat::Yaml => {
            serde_yaml::from_str(content).map_err(|err| parse_error(err.to_string()))
        }
    }
}
