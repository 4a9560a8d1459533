use crate::domain::parameters::{RawParameters, ResolvedConfig, normalize};
use crate::domain::platform::{OsFamily, PlatformIdentity, resolve};

/// Debian defaults with no caller overrides.
pub fn resolved_config(is_virtual: bool) -> ResolvedConfig {
    let identity = PlatformIdentity::new(OsFamily::Debian, "Debian", "12", is_virtual);
    let defaults = resolve(&identity).expect("Debian is supported");
    normalize(&RawParameters::default(), &defaults, &identity).expect("defaults are valid")
}
