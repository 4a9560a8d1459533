pub mod artifacts;
pub mod error;
pub mod parameters;
pub mod platform;
pub mod render;

pub use artifacts::{Artifact, DesiredState, SystemDirective};
pub use error::AppError;
pub use parameters::{RawParameters, ResolvedConfig, TemplateOverride, normalize};
pub use platform::{OsFamily, PlatformDefaults, PlatformIdentity};
pub use render::{TemplateEvaluator, render, render_directives};
