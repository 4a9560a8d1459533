//! Fully resolved configuration record. Drives both the built-in renderer and
//! template evaluation, so every field is serializable.

use serde::{Deserialize, Serialize};

use crate::domain::platform::OsFamily;

/// Desired service state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceEnsure {
    #[default]
    Running,
    Stopped,
}

/// Caller-supplied template that replaces the built-in layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum TemplateOverride {
    /// Free-form text template; undefined variables render empty.
    Text(String),
    /// Structured template; every referenced variable must exist.
    Structured(String),
}

impl TemplateOverride {
    pub fn id(&self) -> &str {
        match self {
            TemplateOverride::Text(id) | TemplateOverride::Structured(id) => id,
        }
    }
}

/// One `server` line. Modifiers are fixed here, never recomputed by the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServerEntry {
    pub host: String,
    pub iburst: bool,
    pub prefer: bool,
    pub maxpoll: Option<u8>,
    pub noselect: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackageSpec {
    pub names: Vec<String>,
    pub ensure: String,
    pub manage: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceSpec {
    pub name: String,
    pub ensure: ServiceEnsure,
    pub enable: bool,
    pub manage: bool,
    pub provider: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileSpec {
    pub path: String,
    pub owner: String,
    pub group: String,
    pub mode: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DirectorySpec {
    pub path: String,
    pub owner: String,
    pub group: String,
    pub mode: String,
    pub recurse: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct InterfaceRules {
    pub listen: Vec<String>,
    pub ignore: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeySettings {
    pub enable: bool,
    pub file: String,
    pub trusted: Vec<u32>,
    pub controlkey: Option<u32>,
    pub requestkey: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TinkerSettings {
    pub enable: bool,
    pub panic: Option<u32>,
    pub stepout: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PollBounds {
    pub minpoll: Option<u8>,
    pub maxpoll: Option<u8>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TosSettings {
    pub enable: bool,
    pub minclock: Option<u32>,
    pub minsane: Option<u32>,
    pub floor: Option<u32>,
    pub ceiling: Option<u32>,
    pub cohort: Option<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedConfig {
    pub family: OsFamily,
    pub is_virtual: bool,

    pub package: PackageSpec,
    pub service: ServiceSpec,
    pub config_file: FileSpec,
    pub config_dir: Option<DirectorySpec>,

    pub servers: Vec<ServerEntry>,
    pub iburst_enable: bool,
    pub peers: Vec<String>,
    pub interfaces: InterfaceRules,
    pub restrict: Vec<String>,
    pub keys: KeySettings,
    pub tinker: TinkerSettings,
    pub poll: PollBounds,

    pub disable_auth: bool,
    pub disable_kernel: bool,
    pub disable_monitor: bool,
    pub disable_dhclient: bool,
    pub broadcastclient: bool,

    pub tos: TosSettings,
    pub udlc_stratum: u8,
    pub fudge: Vec<String>,

    pub driftfile: String,
    pub leapfile: Option<String>,
    pub logfile: Option<String>,
    pub ntpsigndsocket: Option<String>,
    pub authprov: Option<String>,

    pub template: Option<TemplateOverride>,
}

impl ResolvedConfig {
    /// Hostnames of the resolved server list, in order.
    pub fn server_hosts(&self) -> impl Iterator<Item = &str> {
        self.servers.iter().map(|s| s.host.as_str())
    }
}
