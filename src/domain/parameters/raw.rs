//! Caller-supplied parameters. Every field is optional; unset fields resolve to
//! platform or built-in defaults during normalization.

use serde::{Deserialize, Serialize};

use super::resolved::ServiceEnsure;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawParameters {
    // Servers and peers
    pub servers: Option<Vec<String>>,
    pub preferred_servers: Option<Vec<String>>,
    pub noselect_servers: Option<Vec<String>>,
    pub iburst_enable: Option<bool>,
    pub peers: Option<Vec<String>>,

    // Interfaces and access control
    pub interfaces: Option<Vec<String>>,
    pub interfaces_ignore: Option<Vec<String>>,
    pub restrict: Option<Vec<String>>,

    // Authentication keys
    pub keys_enable: Option<bool>,
    pub keys_file: Option<String>,
    pub keys_trusted: Option<Vec<u32>>,
    pub keys_controlkey: Option<u32>,
    pub keys_requestkey: Option<u32>,

    // Clock discipline
    pub tinker: Option<bool>,
    pub panic: Option<u32>,
    pub stepout: Option<u32>,
    pub minpoll: Option<u8>,
    pub maxpoll: Option<u8>,

    // Single-line switches
    pub disable_auth: Option<bool>,
    pub disable_kernel: Option<bool>,
    pub disable_monitor: Option<bool>,
    pub disable_dhclient: Option<bool>,
    pub broadcastclient: Option<bool>,

    // tos
    pub tos: Option<bool>,
    pub tos_minclock: Option<u32>,
    pub tos_minsane: Option<u32>,
    pub tos_floor: Option<u32>,
    pub tos_ceiling: Option<u32>,
    pub tos_cohort: Option<u8>,

    // Local clock
    pub udlc_stratum: Option<u8>,
    pub fudge: Option<Vec<String>>,

    // Path-valued directives
    pub driftfile: Option<String>,
    pub leapfile: Option<String>,
    pub logfile: Option<String>,
    pub ntpsigndsocket: Option<String>,
    pub authprov: Option<String>,

    // Config file placement
    pub config: Option<String>,
    pub config_dir: Option<String>,
    pub config_file_mode: Option<String>,
    pub config_template: Option<String>,
    pub config_epp: Option<String>,

    // Package and service
    pub package_ensure: Option<String>,
    pub package_manage: Option<bool>,
    pub package_name: Option<Vec<String>>,
    pub service_ensure: Option<ServiceEnsure>,
    pub service_enable: Option<bool>,
    pub service_manage: Option<bool>,
    pub service_name: Option<String>,
    pub service_provider: Option<String>,
}
