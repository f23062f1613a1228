//! Input validation for instance options.
//!
//! Option values end up inside a directory name and inside double-quoted
//! stack.env values, neither of which is escaped. Anything that would break
//! either is rejected here, before any secret is generated or file written.

use crate::error::{Result, ValidationError};

fn invalid(option: &'static str, value: &str, reason: impl Into<String>) -> crate::error::Error {
    ValidationError::InvalidOption {
        option,
        value: value.to_string(),
        reason: reason.into(),
    }
    .into()
}

/// Reject quotes and control characters.
///
/// # Errors
///
/// Returns `ValidationError` naming the first offending character.
pub fn validate_quotable(option: &'static str, value: &str) -> Result<()> {
    for (i, ch) in value.chars().enumerate() {
        if ch == '"' {
            return Err(invalid(
                option,
                value,
                format!("double quote at position {} cannot be written unescaped", i + 1),
            ));
        }
        if ch.is_control() {
            return Err(invalid(
                option,
                value,
                format!("control character at position {}", i + 1),
            ));
        }
    }

    Ok(())
}

/// Validate a project name, which becomes part of the instance directory.
///
/// Spaces and dashes are fine; path separators and `.`/`..` are not.
///
/// # Errors
///
/// Returns `ValidationError` if the name is unsafe as a path segment.
pub fn validate_project_name(name: &str) -> Result<()> {
    validate_quotable("name", name)?;

    if name == "." || name == ".." {
        return Err(invalid("name", name, "cannot be a relative path component"));
    }
    if let Some(ch) = name.chars().find(|ch| matches!(ch, '/' | '\\')) {
        return Err(invalid(
            "name",
            name,
            format!("path separator '{}' is not allowed", ch),
        ));
    }

    Ok(())
}

/// Validate a stack prefix, which becomes part of every service hostname.
///
/// # Errors
///
/// Returns `ValidationError` if the prefix contains whitespace, `/`, quotes
/// or control characters.
pub fn validate_stack_prefix(prefix: &str) -> Result<()> {
    validate_host("stackPrefix", prefix)
}

/// Validate text used as (part of) a hostname.
///
/// # Errors
///
/// Returns `ValidationError` if the value contains whitespace, path
/// separators, quotes or control characters.
pub fn validate_host(option: &'static str, host: &str) -> Result<()> {
    validate_quotable(option, host)?;

    if let Some(ch) = host
        .chars()
        .find(|ch| ch.is_whitespace() || matches!(ch, '/' | '\\'))
    {
        return Err(invalid(
            option,
            host,
            format!("character {:?} is not valid in a hostname", ch),
        ));
    }

    Ok(())
}

/// Validate a Postgres port override.
///
/// # Errors
///
/// Returns `ValidationError` unless the value is a decimal port in 1-65535.
pub fn validate_port(port: &str) -> Result<()> {
    match port.parse::<u16>() {
        Ok(n) if n > 0 && port.chars().all(|c| c.is_ascii_digit()) => Ok(()),
        _ => Err(invalid("postgresPort", port, "expected a port number between 1 and 65535")),
    }
}
