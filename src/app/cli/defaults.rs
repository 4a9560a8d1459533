//! Defaults command implementation.

use crate::domain::{AppError, OsFamily, PlatformIdentity};

/// Platform defaults never depend on virtualization, so the identity is built as physical.
pub fn run_defaults(family: &str, name: &str, release: &str) -> Result<(), AppError> {
    let identity = PlatformIdentity::new(OsFamily::from_fact(family), name, release, false);
    let defaults = crate::resolve_platform(&identity)?;
    print!("{}", crate::app::commands::defaults::to_toml(&defaults)?);
    Ok(())
}
