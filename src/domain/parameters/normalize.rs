//! Layered resolution: explicit parameter, then platform default, then built-in constant.

use std::path::Path;

use tracing::debug;

use super::raw::RawParameters;
use super::resolved::{
    DirectorySpec, FileSpec, InterfaceRules, KeySettings, PackageSpec, PollBounds, ResolvedConfig,
    ServerEntry, ServiceSpec, TemplateOverride, TinkerSettings, TosSettings,
};
use super::validation::{
    STRATUM_MAX, validate_absolute_path, validate_disjoint_selection, validate_file_mode,
    validate_key_id, validate_key_trusted, validate_line, validate_poll_bounds, validate_token,
};
use crate::domain::AppError;
use crate::domain::platform::{PlatformDefaults, PlatformIdentity};

const ROOT_ID: &str = "0";
const CONFIG_FILE_MODE: &str = "0644";
const CONFIG_DIR_MODE: &str = "0775";
const PACKAGE_ENSURE: &str = "present";
const DEFAULT_IGNORE_RULE: &str = "wildcard";
const LOCAL_CLOCK_STRATUM: u8 = 10;
/// System directories whose ownership and mode are never taken over.
const UNMANAGED_DIRS: [&str; 2] = ["/", "/etc"];

/// Resolve caller parameters against platform defaults.
///
/// Pure: the result depends only on the arguments. Any invalid field aborts the
/// whole resolution.
pub fn normalize(
    raw: &RawParameters,
    defaults: &PlatformDefaults,
    identity: &PlatformIdentity,
) -> Result<ResolvedConfig, AppError> {
    let template = resolve_template(raw)?;

    validate_poll_bounds(raw.minpoll, raw.maxpoll)?;

    let preferred = list_of("preferred_servers", raw.preferred_servers.as_ref())?;
    let noselect = list_of("noselect_servers", raw.noselect_servers.as_ref())?;
    validate_disjoint_selection(&preferred, &noselect)?;

    let hosts = match &raw.servers {
        Some(servers) => list_of("servers", Some(servers))?,
        None => defaults.servers.clone(),
    };
    let iburst_enable = raw.iburst_enable.unwrap_or(defaults.iburst);
    // An explicit global maxpoll replaces the platform's fixed per-server value.
    let server_maxpoll = if raw.maxpoll.is_some() { None } else { defaults.server_maxpoll };
    let servers = hosts
        .into_iter()
        .map(|host| ServerEntry {
            iburst: iburst_enable,
            prefer: preferred.contains(&host),
            maxpoll: server_maxpoll,
            noselect: noselect.contains(&host),
            host,
        })
        .collect();

    let peers = list_of("peers", raw.peers.as_ref())?;
    let interfaces = resolve_interfaces(raw)?;

    let restrict = raw.restrict.clone().unwrap_or_else(|| defaults.restrict.clone());
    for rule in &restrict {
        validate_line("restrict", rule)?;
    }

    let config_path = path_or("config", raw.config.as_deref(), &defaults.config_path)?;
    let keys = resolve_keys(raw, defaults)?;
    let config_dir = resolve_config_dir(raw, &keys)?;

    let config_file_mode = raw.config_file_mode.as_deref().unwrap_or(CONFIG_FILE_MODE);
    validate_file_mode("config_file_mode", config_file_mode)?;

    let tinker = TinkerSettings {
        enable: raw.tinker.unwrap_or(false),
        panic: raw.panic,
        stepout: raw.stepout,
    };
    if identity.is_virtual && (raw.tinker.is_some() || raw.panic.is_some()) {
        debug!(
            tinker = ?raw.tinker,
            panic = ?raw.panic,
            "virtual host: 'tinker panic 0' takes precedence over explicit tinker settings"
        );
    }

    let tos = TosSettings {
        enable: raw.tos.unwrap_or(false),
        minclock: raw.tos_minclock,
        minsane: raw.tos_minsane,
        floor: raw.tos_floor,
        ceiling: raw.tos_ceiling,
        cohort: raw.tos_cohort,
    };
    if let Some(cohort) = tos.cohort
        && cohort > 1
    {
        return Err(AppError::validation(
            "tos_cohort",
            format!("cohort must be 0 or 1, got {}", cohort),
        ));
    }

    let udlc_stratum = raw.udlc_stratum.unwrap_or(LOCAL_CLOCK_STRATUM);
    if udlc_stratum > STRATUM_MAX {
        return Err(AppError::validation(
            "udlc_stratum",
            format!("stratum must be between 0 and {}, got {}", STRATUM_MAX, udlc_stratum),
        ));
    }
    let fudge = raw.fudge.clone().unwrap_or_default();
    for line in &fudge {
        validate_line("fudge", line)?;
    }

    let driftfile = path_or("driftfile", raw.driftfile.as_deref(), &defaults.driftfile)?;
    let leapfile = optional_path("leapfile", raw.leapfile.as_deref())?;
    let logfile = optional_path("logfile", raw.logfile.as_deref())?;
    let ntpsigndsocket = optional_path("ntpsigndsocket", raw.ntpsigndsocket.as_deref())?;
    if let Some(authprov) = &raw.authprov {
        validate_line("authprov", authprov)?;
    }

    let package = PackageSpec {
        names: raw.package_name.clone().unwrap_or_else(|| defaults.package_names.clone()),
        ensure: raw.package_ensure.clone().unwrap_or_else(|| PACKAGE_ENSURE.to_string()),
        manage: raw.package_manage.unwrap_or(true),
    };
    for name in &package.names {
        validate_token("package_name", name)?;
    }
    validate_token("package_ensure", &package.ensure)?;

    let service = ServiceSpec {
        name: raw.service_name.clone().unwrap_or_else(|| defaults.service_name.clone()),
        ensure: raw.service_ensure.unwrap_or_default(),
        enable: raw.service_enable.unwrap_or(true),
        manage: raw.service_manage.unwrap_or(true),
        provider: raw.service_provider.clone(),
    };
    validate_token("service_name", &service.name)?;

    Ok(ResolvedConfig {
        family: identity.family.clone(),
        is_virtual: identity.is_virtual,
        package,
        service,
        config_file: FileSpec {
            path: config_path,
            owner: ROOT_ID.to_string(),
            group: ROOT_ID.to_string(),
            mode: config_file_mode.to_string(),
        },
        config_dir,
        servers,
        iburst_enable,
        peers,
        interfaces,
        restrict,
        keys,
        tinker,
        poll: PollBounds { minpoll: raw.minpoll, maxpoll: raw.maxpoll },
        disable_auth: raw.disable_auth.unwrap_or(false),
        disable_kernel: raw.disable_kernel.unwrap_or(false),
        disable_monitor: raw.disable_monitor.unwrap_or(true),
        disable_dhclient: raw.disable_dhclient.unwrap_or(false),
        broadcastclient: raw.broadcastclient.unwrap_or(false),
        tos,
        udlc_stratum,
        fudge,
        driftfile,
        leapfile,
        logfile,
        ntpsigndsocket,
        authprov: raw.authprov.clone(),
        template,
    })
}

fn resolve_template(raw: &RawParameters) -> Result<Option<TemplateOverride>, AppError> {
    match (&raw.config_template, &raw.config_epp) {
        (Some(_), Some(_)) => Err(AppError::validation(
            "config_epp",
            "config_template and config_epp are mutually exclusive",
        )),
        (Some(id), None) => {
            validate_line("config_template", id)?;
            Ok(Some(TemplateOverride::Text(id.clone())))
        }
        (None, Some(id)) => {
            validate_line("config_epp", id)?;
            Ok(Some(TemplateOverride::Structured(id.clone())))
        }
        (None, None) => Ok(None),
    }
}

fn resolve_interfaces(raw: &RawParameters) -> Result<InterfaceRules, AppError> {
    let listen = list_of("interfaces", raw.interfaces.as_ref())?;
    let ignore = match &raw.interfaces_ignore {
        Some(rules) => list_of("interfaces_ignore", Some(rules))?,
        None if !listen.is_empty() => vec![DEFAULT_IGNORE_RULE.to_string()],
        None => Vec::new(),
    };
    Ok(InterfaceRules { listen, ignore })
}

fn resolve_keys(raw: &RawParameters, defaults: &PlatformDefaults) -> Result<KeySettings, AppError> {
    let keys = KeySettings {
        enable: raw.keys_enable.unwrap_or(false),
        file: path_or("keys_file", raw.keys_file.as_deref(), &defaults.keys_file)?,
        trusted: raw.keys_trusted.clone().unwrap_or_default(),
        controlkey: raw.keys_controlkey,
        requestkey: raw.keys_requestkey,
    };

    // Key ids are only checked when they will be rendered.
    if keys.enable {
        for id in &keys.trusted {
            validate_key_id("keys_trusted", *id)?;
        }
        validate_key_trusted("keys_controlkey", keys.controlkey, &keys.trusted)?;
        validate_key_trusted("keys_requestkey", keys.requestkey, &keys.trusted)?;
    }
    Ok(keys)
}

/// The config directory holds the keys file and is only managed when keys are on.
fn resolve_config_dir(
    raw: &RawParameters,
    keys: &KeySettings,
) -> Result<Option<DirectorySpec>, AppError> {
    if let Some(dir) = &raw.config_dir {
        validate_absolute_path("config_dir", dir)?;
    }
    if !keys.enable {
        return Ok(None);
    }

    let path = match &raw.config_dir {
        Some(dir) => {
            if !Path::new(&keys.file).starts_with(dir) {
                return Err(AppError::validation(
                    "keys_file",
                    format!("'{}' is not inside config_dir '{}'", keys.file, dir),
                ));
            }
            dir.clone()
        }
        None => Path::new(&keys.file)
            .parent()
            .map(|parent| parent.display().to_string())
            .unwrap_or_else(|| "/".to_string()),
    };

    if UNMANAGED_DIRS.iter().any(|unmanaged| Path::new(&path) == Path::new(unmanaged)) {
        debug!(path = %path, "keys file lives in a system directory; leaving it unmanaged");
        return Ok(None);
    }

    Ok(Some(DirectorySpec {
        path,
        owner: ROOT_ID.to_string(),
        group: ROOT_ID.to_string(),
        mode: CONFIG_DIR_MODE.to_string(),
        recurse: false,
    }))
}

fn list_of(field: &str, values: Option<&Vec<String>>) -> Result<Vec<String>, AppError> {
    let values = values.cloned().unwrap_or_default();
    for value in &values {
        validate_token(field, value)?;
    }
    Ok(values)
}

fn path_or(field: &str, explicit: Option<&str>, fallback: &str) -> Result<String, AppError> {
    let path = explicit.unwrap_or(fallback);
    validate_absolute_path(field, path)?;
    Ok(path.to_string())
}

fn optional_path(field: &str, explicit: Option<&str>) -> Result<Option<String>, AppError> {
    explicit
        .map(|path| validate_absolute_path(field, path).map(|()| path.to_string()))
        .transpose()
}
