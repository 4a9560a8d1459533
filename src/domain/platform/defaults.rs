//! Per-family default table.

use serde::Serialize;

use super::identity::{OsFamily, PlatformIdentity};
use crate::domain::AppError;

/// Number of numbered pool hostnames generated for a platform (`0.<pool>`..).
pub const POOL_SIZE: usize = 4;

/// File some dhclient hooks write NTP servers into.
pub const DHCP_SERVERS_FILE: &str = "/var/lib/ntp/ntp.conf.dhcp";

const STEP_TICKERS_FILE: &str = "/etc/ntp/step-tickers";
const SUSE_NETCONFIG_SERVERS_FILE: &str = "/var/run/ntp/servers-netconfig";

const SOLARIS_10_PACKAGES: &[&str] = &["SUNWntpr", "SUNWntpu"];
const SOLARIS_PACKAGES: &[&str] = &["service/network/ntp"];

const DEFAULT_RESTRICT: [&str; 4] = [
    "default kod nomodify notrap nopeer noquery",
    "-6 default kod nomodify notrap nopeer noquery",
    "127.0.0.1",
    "-6 ::1",
];

/// Defaults derived from a supported platform identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlatformDefaults {
    pub family: OsFamily,
    /// Pool hostnames, in order.
    pub servers: Vec<String>,
    /// Whether servers on this platform are polled with iburst by default.
    pub iburst: bool,
    /// Fixed maxpoll carried on every server line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server_maxpoll: Option<u8>,
    pub package_names: Vec<String>,
    pub service_name: String,
    pub config_path: String,
    pub keys_file: String,
    pub driftfile: String,
    pub restrict: Vec<String>,
    /// Step-tickers seed file, when the platform ships ntpdate with one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step_tickers: Option<String>,
    /// Legacy netconfig-managed server file to remove.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub netconfig_servers_file: Option<String>,
}

/// One row of the family table.
struct FamilyProfile {
    pool: &'static str,
    iburst: bool,
    server_maxpoll: Option<u8>,
    packages: &'static [&'static str],
    service: &'static str,
    config: &'static str,
    keys: &'static str,
    driftfile: &'static str,
}

fn profile(identity: &PlatformIdentity) -> Option<FamilyProfile> {
    let release = identity.release_major.as_str();

    let row = match &identity.family {
        OsFamily::RedHat => FamilyProfile {
            pool: if identity.name == "Fedora" {
                "fedora.pool.ntp.org"
            } else {
                "centos.pool.ntp.org"
            },
            iburst: false,
            server_maxpoll: None,
            packages: &["ntp"],
            service: "ntpd",
            config: "/etc/ntp.conf",
            keys: "/etc/ntp/keys",
            driftfile: "/var/lib/ntp/drift",
        },
        OsFamily::Debian => FamilyProfile {
            pool: "debian.pool.ntp.org",
            iburst: true,
            server_maxpoll: None,
            packages: &["ntp"],
            service: "ntp",
            config: "/etc/ntp.conf",
            keys: "/etc/ntp/keys",
            driftfile: "/var/lib/ntp/ntp.drift",
        },
        OsFamily::Suse => FamilyProfile {
            pool: "opensuse.pool.ntp.org",
            iburst: false,
            server_maxpoll: None,
            packages: &["ntp"],
            service: if release_at_least(release, 12) { "ntpd" } else { "ntp" },
            config: "/etc/ntp.conf",
            keys: "/etc/ntp/keys",
            driftfile: "/var/lib/ntp/drift/ntp.drift",
        },
        OsFamily::FreeBSD => FamilyProfile {
            pool: "freebsd.pool.ntp.org",
            iburst: true,
            server_maxpoll: Some(9),
            packages: &["net/ntp"],
            service: "ntpd",
            config: "/etc/ntp.conf",
            keys: "/etc/ntp.keys",
            driftfile: "/var/db/ntpd.drift",
        },
        OsFamily::Archlinux => FamilyProfile {
            pool: "arch.pool.ntp.org",
            iburst: false,
            server_maxpoll: None,
            packages: &["ntp"],
            service: "ntpd",
            config: "/etc/ntp.conf",
            keys: "/etc/ntp.keys",
            driftfile: "/var/lib/ntp/ntp.drift",
        },
        OsFamily::Solaris => FamilyProfile {
            pool: "pool.ntp.org",
            iburst: false,
            server_maxpoll: None,
            packages: if release == "10" { SOLARIS_10_PACKAGES } else { SOLARIS_PACKAGES },
            service: "network/ntp",
            config: "/etc/inet/ntp.conf",
            keys: "/etc/inet/ntp.keys",
            driftfile: "/var/ntp/ntp.drift",
        },
        OsFamily::Gentoo => FamilyProfile {
            pool: "pool.ntp.org",
            iburst: false,
            server_maxpoll: None,
            packages: &["net-misc/ntp"],
            service: "ntpd",
            config: "/etc/ntp.conf",
            keys: "/etc/ntp.keys",
            driftfile: "/var/lib/ntp/ntp.drift",
        },
        OsFamily::Unsupported(_) => return None,
    };

    Some(row)
}

fn release_at_least(release: &str, major: u32) -> bool {
    release.split('.').next().and_then(|m| m.parse::<u32>().ok()).is_some_and(|m| m >= major)
}

/// Resolve the defaults for a platform.
///
/// Unknown families are refused instead of guessed at.
pub fn resolve(identity: &PlatformIdentity) -> Result<PlatformDefaults, AppError> {
    let row = profile(identity).ok_or_else(|| AppError::PlatformUnsupported {
        family: identity.family.to_string(),
    })?;

    let step_tickers = (identity.family == OsFamily::RedHat).then(|| STEP_TICKERS_FILE.to_string());
    let netconfig_servers_file = (identity.family == OsFamily::Suse
        && identity.release_major == "12")
        .then(|| SUSE_NETCONFIG_SERVERS_FILE.to_string());

    Ok(PlatformDefaults {
        family: identity.family.clone(),
        servers: (0..POOL_SIZE).map(|n| format!("{}.{}", n, row.pool)).collect(),
        iburst: row.iburst,
        server_maxpoll: row.server_maxpoll,
        package_names: row.packages.iter().map(|p| p.to_string()).collect(),
        service_name: row.service.to_string(),
        config_path: row.config.to_string(),
        keys_file: row.keys.to_string(),
        driftfile: row.driftfile.to_string(),
        restrict: DEFAULT_RESTRICT.iter().map(|r| r.to_string()).collect(),
        step_tickers,
        netconfig_servers_file,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity(family: OsFamily, name: &str, release: &str) -> PlatformIdentity {
        PlatformIdentity::new(family, name, release, false)
    }

    #[test]
    fn fedora_uses_fedora_pool_and_step_tickers() {
        let defaults = resolve(&identity(OsFamily::RedHat, "Fedora", "38")).unwrap();
        assert_eq!(
            defaults.servers,
            vec![
                "0.fedora.pool.ntp.org",
                "1.fedora.pool.ntp.org",
                "2.fedora.pool.ntp.org",
                "3.fedora.pool.ntp.org"
            ]
        );
        assert_eq!(defaults.step_tickers.as_deref(), Some("/etc/ntp/step-tickers"));
        assert_eq!(defaults.service_name, "ntpd");
    }

    #[test]
    fn other_redhat_uses_centos_pool() {
        let defaults = resolve(&identity(OsFamily::RedHat, "CentOS", "7")).unwrap();
        assert!(defaults.servers.iter().all(|s| s.ends_with(".centos.pool.ntp.org")));
        assert!(defaults.step_tickers.is_some());
    }

    #[test]
    fn debian_implies_iburst() {
        let defaults = resolve(&identity(OsFamily::Debian, "Debian", "12")).unwrap();
        assert!(defaults.iburst);
        assert_eq!(defaults.servers[0], "0.debian.pool.ntp.org");
        assert_eq!(defaults.service_name, "ntp");
        assert!(defaults.step_tickers.is_none());
    }

    #[test]
    fn freebsd_carries_fixed_maxpoll() {
        let defaults = resolve(&identity(OsFamily::FreeBSD, "FreeBSD", "13")).unwrap();
        assert_eq!(defaults.server_maxpoll, Some(9));
        assert!(defaults.iburst);
        assert_eq!(defaults.package_names, vec!["net/ntp"]);
    }

    #[test]
    fn suse_12_flags_netconfig_file() {
        let defaults = resolve(&identity(OsFamily::Suse, "SLES", "12")).unwrap();
        assert_eq!(
            defaults.netconfig_servers_file.as_deref(),
            Some("/var/run/ntp/servers-netconfig")
        );
        assert_eq!(defaults.service_name, "ntpd");

        let defaults = resolve(&identity(OsFamily::Suse, "SLES", "11")).unwrap();
        assert!(defaults.netconfig_servers_file.is_none());
        assert_eq!(defaults.service_name, "ntp");

        let defaults = resolve(&identity(OsFamily::Suse, "SLES", "15")).unwrap();
        assert!(defaults.netconfig_servers_file.is_none());
    }

    #[test]
    fn solaris_and_gentoo_use_generic_pool() {
        let solaris = resolve(&identity(OsFamily::Solaris, "Solaris", "11")).unwrap();
        assert_eq!(solaris.servers[3], "3.pool.ntp.org");
        assert_eq!(solaris.config_path, "/etc/inet/ntp.conf");
        assert_eq!(solaris.package_names, vec!["service/network/ntp"]);

        let solaris10 = resolve(&identity(OsFamily::Solaris, "Solaris", "10")).unwrap();
        assert_eq!(solaris10.package_names, vec!["SUNWntpr", "SUNWntpu"]);

        let gentoo = resolve(&identity(OsFamily::Gentoo, "Gentoo", "2")).unwrap();
        assert_eq!(gentoo.servers[0], "0.pool.ntp.org");
        assert_eq!(gentoo.package_names, vec!["net-misc/ntp"]);
    }

    #[test]
    fn arch_uses_arch_pool() {
        let defaults = resolve(&identity(OsFamily::Archlinux, "Archlinux", "")).unwrap();
        assert_eq!(defaults.servers[1], "1.arch.pool.ntp.org");
    }

    #[test]
    fn unsupported_family_is_refused() {
        let err = resolve(&identity(OsFamily::from_fact("Darwin"), "macOS", "14")).unwrap_err();
        assert!(matches!(err, AppError::PlatformUnsupported { family } if family == "Darwin"));
    }

    #[test]
    fn every_supported_family_has_restrict_defaults() {
        for family in OsFamily::SUPPORTED {
            let defaults = resolve(&identity(family, "", "")).unwrap();
            assert_eq!(defaults.restrict.len(), 4);
            assert_eq!(defaults.servers.len(), POOL_SIZE);
        }
    }
}
