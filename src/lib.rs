//! ntpconf: Synthesize ntp.conf and its auxiliary artifacts from platform facts.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

use std::path::Path;

use adapters::{FilesystemTemplateStore, MinijinjaTemplateEvaluator};
use app::AppContext;
use app::commands::{defaults, render as render_command};

pub use app::commands::render::RenderPlan;
pub use app::config::{RenderRequest, RequestFormat, parse_request_content};
pub use domain::artifacts::{resolve_auxiliaries, system_directives};
pub use domain::{
    AppError, Artifact, DesiredState, OsFamily, PlatformDefaults, PlatformIdentity, RawParameters,
    ResolvedConfig, SystemDirective, TemplateEvaluator, TemplateOverride, normalize, render,
    render_directives,
};

/// Resolve the platform defaults for a set of facts.
pub fn resolve_platform(identity: &PlatformIdentity) -> Result<PlatformDefaults, AppError> {
    defaults::execute(identity)
}

/// Load a render request from a `.toml`, `.yaml` or `.yml` file.
pub fn load_request(path: &Path) -> Result<RenderRequest, AppError> {
    app::config::load_request(path)
}

/// Produce the render plan for a request.
///
/// Template identifiers are resolved relative to `templates_dir`.
pub fn plan(request: &RenderRequest, templates_dir: &Path) -> Result<RenderPlan, AppError> {
    let store = FilesystemTemplateStore::new(templates_dir);
    plan_with(request, MinijinjaTemplateEvaluator::new(store))
}

/// Produce the render plan for a request with a caller-supplied template evaluator.
pub fn plan_with<E: TemplateEvaluator>(
    request: &RenderRequest,
    evaluator: E,
) -> Result<RenderPlan, AppError> {
    let ctx = AppContext::new(evaluator);
    render_command::execute(&ctx, request)
}

/// Render only the primary configuration text for a request.
pub fn render_config(request: &RenderRequest, templates_dir: &Path) -> Result<String, AppError> {
    let plan = plan(request, templates_dir)?;
    Ok(plan.config_text().to_string())
}
