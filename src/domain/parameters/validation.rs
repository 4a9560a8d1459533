//! Field-level checks used by the normalizer.

use std::path::Path;

use crate::domain::AppError;

pub const POLL_MIN: u8 = 3;
pub const POLL_MAX: u8 = 17;
pub const KEY_ID_MAX: u32 = 65534;
pub const STRATUM_MAX: u8 = 15;

/// A token that lands verbatim on a directive line (host, address, interface rule).
///
/// Rejects empty values and anything containing whitespace, which would smuggle
/// extra modifiers onto the line.
pub fn validate_token(field: &str, value: &str) -> Result<(), AppError> {
    if value.is_empty() {
        return Err(AppError::validation(field, "entries must not be empty"));
    }
    if value.chars().any(char::is_whitespace) {
        return Err(AppError::validation(
            field,
            format!("'{}' must not contain whitespace", value.escape_debug()),
        ));
    }
    Ok(())
}

/// Free-text directive arguments (restrict rules, fudge lines, authprov) may
/// contain spaces but must stay on one line.
pub fn validate_line(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::validation(field, "entries must not be empty"));
    }
    if value.contains(['\n', '\r']) {
        return Err(AppError::validation(
            field,
            format!("'{}' must be a single line", value.escape_debug()),
        ));
    }
    Ok(())
}

pub fn validate_absolute_path(field: &str, value: &str) -> Result<(), AppError> {
    validate_line(field, value)?;
    if !Path::new(value).is_absolute() {
        return Err(AppError::validation(field, format!("'{}' is not an absolute path", value)));
    }
    Ok(())
}

/// File modes are 3 or 4 octal digits, e.g. `0644`.
pub fn validate_file_mode(field: &str, value: &str) -> Result<(), AppError> {
    let octal = (3..=4).contains(&value.len()) && value.chars().all(|c| ('0'..='7').contains(&c));
    if !octal {
        return Err(AppError::validation(
            field,
            format!("'{}' is not an octal file mode like 0644", value),
        ));
    }
    Ok(())
}

pub fn validate_poll_bounds(minpoll: Option<u8>, maxpoll: Option<u8>) -> Result<(), AppError> {
    for (field, value) in [("minpoll", minpoll), ("maxpoll", maxpoll)] {
        if let Some(v) = value
            && !(POLL_MIN..=POLL_MAX).contains(&v)
        {
            return Err(AppError::validation(
                field,
                format!("{} must be between {} and {}, got {}", field, POLL_MIN, POLL_MAX, v),
            ));
        }
    }

    if let (Some(min), Some(max)) = (minpoll, maxpoll)
        && min > max
    {
        return Err(AppError::validation(
            "minpoll",
            format!("minpoll {} exceeds maxpoll {}", min, max),
        ));
    }
    Ok(())
}

pub fn validate_key_id(field: &str, id: u32) -> Result<(), AppError> {
    if !(1..=KEY_ID_MAX).contains(&id) {
        return Err(AppError::validation(
            field,
            format!("key id {} must be between 1 and {}", id, KEY_ID_MAX),
        ));
    }
    Ok(())
}

/// Control and request keys are only usable when they are also trusted.
pub fn validate_key_trusted(field: &str, id: Option<u32>, trusted: &[u32]) -> Result<(), AppError> {
    let Some(id) = id else {
        return Ok(());
    };
    validate_key_id(field, id)?;
    if !trusted.contains(&id) {
        let reason = if trusted.is_empty() {
            format!("key {} is set but keys_trusted is empty", id)
        } else {
            format!("key {} is not listed in keys_trusted", id)
        };
        return Err(AppError::validation(field, reason));
    }
    Ok(())
}

/// `prefer` and `noselect` are contradictory selection hints.
pub fn validate_disjoint_selection(preferred: &[String], noselect: &[String]) -> Result<(), AppError> {
    if let Some(host) = preferred.iter().find(|host| noselect.contains(host)) {
        return Err(AppError::validation(
            "noselect_servers",
            format!("server '{}' appears in both preferred_servers and noselect_servers", host),
        ));
    }
    Ok(())
}
