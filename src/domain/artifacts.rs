//! Declarative artifacts handed to the provisioning layer.
//!
//! Nothing here touches the filesystem: each artifact only states a path, the
//! desired state, and (for files) the content.

use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::domain::parameters::{DirectorySpec, FileSpec, ResolvedConfig};
use crate::domain::platform::{DHCP_SERVERS_FILE, PlatformDefaults};

const ROOT_ID: &str = "0";
const STEP_TICKERS_MODE: &str = "0644";
const STEP_TICKERS_HEADER: &str = "# List of NTP servers used by the ntpdate service.";
const DHCLIENT_CONF: &str = "/etc/dhcp/dhclient.conf";

/// Desired state of a path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "ensure", rename_all = "lowercase")]
pub enum DesiredState {
    File { owner: String, group: String, mode: String },
    Directory { owner: String, group: String, mode: String, recurse: bool },
    Absent,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Artifact {
    pub path: String,
    #[serde(flatten)]
    pub state: DesiredState,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Hex SHA-256 of `content`, for change detection.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sha256: Option<String>,
}

impl Artifact {
    pub fn file(spec: &FileSpec, content: String) -> Self {
        Self {
            path: spec.path.clone(),
            state: DesiredState::File {
                owner: spec.owner.clone(),
                group: spec.group.clone(),
                mode: spec.mode.clone(),
            },
            sha256: Some(content_digest(&content)),
            content: Some(content),
        }
    }

    pub fn directory(spec: &DirectorySpec) -> Self {
        Self {
            path: spec.path.clone(),
            state: DesiredState::Directory {
                owner: spec.owner.clone(),
                group: spec.group.clone(),
                mode: spec.mode.clone(),
                recurse: spec.recurse,
            },
            content: None,
            sha256: None,
        }
    }

    pub fn absent(path: impl Into<String>) -> Self {
        Self { path: path.into(), state: DesiredState::Absent, content: None, sha256: None }
    }

    pub fn is_absent(&self) -> bool {
        self.state == DesiredState::Absent
    }
}

/// A change delegated to an external config-patching collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SystemDirective {
    pub name: String,
    pub target: String,
    pub changes: Vec<String>,
}

/// The primary config file artifact for already-rendered text.
pub fn primary_artifact(config: &ResolvedConfig, text: String) -> Artifact {
    Artifact::file(&config.config_file, text)
}

/// Secondary artifacts, in a stable order: config directory, step-tickers,
/// legacy netconfig removal, legacy DHCP file removal.
pub fn resolve_auxiliaries(config: &ResolvedConfig, defaults: &PlatformDefaults) -> Vec<Artifact> {
    let mut artifacts = Vec::new();

    if let Some(dir) = &config.config_dir {
        artifacts.push(Artifact::directory(dir));
    }

    if let Some(path) = &defaults.step_tickers {
        let spec = FileSpec {
            path: path.clone(),
            owner: ROOT_ID.to_string(),
            group: ROOT_ID.to_string(),
            mode: STEP_TICKERS_MODE.to_string(),
        };
        artifacts.push(Artifact::file(&spec, step_tickers_content(config)));
    }

    if let Some(path) = &defaults.netconfig_servers_file {
        artifacts.push(Artifact::absent(path.clone()));
    }

    if config.disable_dhclient {
        artifacts.push(Artifact::absent(DHCP_SERVERS_FILE));
    }

    artifacts
}

/// External directives requested alongside the artifacts.
pub fn system_directives(config: &ResolvedConfig) -> Vec<SystemDirective> {
    if !config.disable_dhclient {
        return Vec::new();
    }
    vec![SystemDirective {
        name: "disable ntp-servers in dhclient.conf".to_string(),
        target: DHCLIENT_CONF.to_string(),
        changes: vec!["rm request/*[.='ntp-servers']".to_string()],
    }]
}

/// Step-tickers seed file: a header and one resolved server per line.
pub fn step_tickers_content(config: &ResolvedConfig) -> String {
    let mut content = format!("{}\n\n", STEP_TICKERS_HEADER);
    for host in config.server_hosts() {
        content.push_str(host);
        content.push('\n');
    }
    content
}

pub fn content_digest(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    let digest = hasher.finalize();
    digest.iter().map(|byte| format!("{:02x}", byte)).collect()
}
