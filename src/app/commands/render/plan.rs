use serde::Serialize;

use crate::domain::parameters::{PackageSpec, ServiceSpec};
use crate::domain::{Artifact, SystemDirective};

/// Everything one render request produces, for the provisioning layer to apply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderPlan {
    /// Primary configuration file.
    pub config: Artifact,
    /// Secondary artifacts (config directory, step-tickers, removals).
    pub artifacts: Vec<Artifact>,
    /// Requests for external config-patching collaborators.
    pub directives: Vec<SystemDirective>,
    /// Package state, when the package is managed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package: Option<PackageSpec>,
    /// Service state, when the service is managed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<ServiceSpec>,
}

impl RenderPlan {
    /// Rendered text of the primary configuration file.
    pub fn config_text(&self) -> &str {
        self.config.content.as_deref().unwrap_or_default()
    }

    /// Artifact at `path`, if any.
    pub fn artifact(&self, path: &str) -> Option<&Artifact> {
        std::iter::once(&self.config).chain(&self.artifacts).find(|a| a.path == path)
    }
}
