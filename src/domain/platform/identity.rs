use std::fmt;

use serde::{Deserialize, Serialize};

/// Operating-system family as reported by the `os.family` fact.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum OsFamily {
    RedHat,
    Debian,
    Suse,
    FreeBSD,
    Archlinux,
    Solaris,
    Gentoo,
    /// Any family without known defaults. Keeps the raw fact for error reporting.
    Unsupported(String),
}

impl OsFamily {
    /// All families with defaults, in table order.
    pub const SUPPORTED: [OsFamily; 7] = [
        OsFamily::RedHat,
        OsFamily::Debian,
        OsFamily::Suse,
        OsFamily::FreeBSD,
        OsFamily::Archlinux,
        OsFamily::Solaris,
        OsFamily::Gentoo,
    ];

    /// Map a raw fact string. Matching is exact, the way facter reports families.
    pub fn from_fact(fact: &str) -> Self {
        match fact {
            "RedHat" => OsFamily::RedHat,
            "Debian" => OsFamily::Debian,
            "Suse" => OsFamily::Suse,
            "FreeBSD" => OsFamily::FreeBSD,
            "Archlinux" => OsFamily::Archlinux,
            "Solaris" => OsFamily::Solaris,
            "Gentoo" => OsFamily::Gentoo,
            other => OsFamily::Unsupported(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            OsFamily::RedHat => "RedHat",
            OsFamily::Debian => "Debian",
            OsFamily::Suse => "Suse",
            OsFamily::FreeBSD => "FreeBSD",
            OsFamily::Archlinux => "Archlinux",
            OsFamily::Solaris => "Solaris",
            OsFamily::Gentoo => "Gentoo",
            OsFamily::Unsupported(raw) => raw,
        }
    }

    pub fn is_supported(&self) -> bool {
        !matches!(self, OsFamily::Unsupported(_))
    }
}

impl From<String> for OsFamily {
    fn from(value: String) -> Self {
        OsFamily::from_fact(&value)
    }
}

impl From<OsFamily> for String {
    fn from(value: OsFamily) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for OsFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw platform identity supplied alongside the parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlatformIdentity {
    /// `os.family` fact.
    pub family: OsFamily,
    /// `os.name` fact (e.g. `Fedora`, `CentOS`).
    #[serde(default)]
    pub name: String,
    /// `os.release.major` fact.
    #[serde(default)]
    pub release_major: String,
    /// `is_virtual` fact.
    #[serde(default)]
    pub is_virtual: bool,
}

impl PlatformIdentity {
    pub fn new(
        family: OsFamily,
        name: impl Into<String>,
        release_major: impl Into<String>,
        is_virtual: bool,
    ) -> Self {
        Self { family, name: name.into(), release_major: release_major.into(), is_virtual }
    }
}
