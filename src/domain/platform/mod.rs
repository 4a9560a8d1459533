//! Platform facts and the per-family defaults derived from them.

pub mod defaults;
pub mod identity;

pub use defaults::{DHCP_SERVERS_FILE, POOL_SIZE, PlatformDefaults, resolve};
pub use identity::{OsFamily, PlatformIdentity};
