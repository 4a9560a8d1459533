use tracing::debug;

use crate::domain::platform::{self, PlatformDefaults};
use crate::domain::{AppError, PlatformIdentity};

/// Resolve the platform defaults for a set of facts.
pub fn execute(identity: &PlatformIdentity) -> Result<PlatformDefaults, AppError> {
    let defaults = platform::resolve(identity)?;
    debug!(family = %identity.family, servers = defaults.servers.len(), "resolved defaults");
    Ok(defaults)
}

/// Format defaults as a TOML document.
pub fn to_toml(defaults: &PlatformDefaults) -> Result<String, AppError> {
    toml::to_string_pretty(defaults).map_err(|err| AppError::Serialization(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::OsFamily;

    #[test]
    fn freebsd_defaults_format_as_toml() {
        let identity = PlatformIdentity::new(OsFamily::FreeBSD, "FreeBSD", "13", false);
        let text = to_toml(&execute(&identity).unwrap()).unwrap();

        assert!(text.contains("family = \"FreeBSD\""));
        assert!(text.contains("server_maxpoll = 9"));
        assert!(text.contains("0.freebsd.pool.ntp.org"));
        assert!(!text.contains("step_tickers"));
    }

    #[test]
    fn unsupported_family_is_refused() {
        let identity = PlatformIdentity::new(OsFamily::from_fact("Darwin"), "macOS", "14", false);
        let err = execute(&identity).unwrap_err();

        assert_eq!(
            err.to_string(),
            "The ntp configuration is not supported on a Darwin based system."
        );
    }
}
