//! Caller parameters and their resolution into a [`ResolvedConfig`].

pub mod normalize;
pub mod raw;
pub mod resolved;
pub mod validation;

pub use normalize::normalize;
pub use raw::RawParameters;
pub use resolved::{
    DirectorySpec, FileSpec, InterfaceRules, KeySettings, PackageSpec, PollBounds, ResolvedConfig,
    ServerEntry, ServiceEnsure, ServiceSpec, TemplateOverride, TinkerSettings, TosSettings,
};
