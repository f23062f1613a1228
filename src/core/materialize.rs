//! Writing an instance directory.
//!
//! The template is treated as opaque text: placeholders are replaced
//! wherever they occur, including inside YAML keys, quoted strings or
//! `${...}` interpolations, and nothing else is touched.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::core::constants;
use crate::error::{MaterializeError, TemplateError};

/// Read the orchestration template.
///
/// # Errors
///
/// Returns `TemplateError::NotFound` if the file does not exist, or
/// `TemplateError::ReadFailed` if it cannot be read as UTF-8 text.
pub fn read_template(path: &Path) -> Result<String, TemplateError> {
    debug!("Reading template from: {}", path.display());

    fs::read_to_string(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            TemplateError::NotFound(path.to_path_buf())
        } else {
            TemplateError::ReadFailed {
                path: path.to_path_buf(),
                source,
            }
        }
    })
}

/// Replace every occurrence of each placeholder, in order.
pub fn substitute<'a>(
    template: &str,
    substitutions: impl IntoIterator<Item = (&'a str, &'a str)>,
) -> String {
    substitutions
        .into_iter()
        .fold(template.to_string(), |text, (token, replacement)| {
            text.replace(token, replacement)
        })
}

/// Create `<root>/<instance_name>` and write both artifacts into it.
///
/// Steps run in order: create the directory (parents included, existing
/// directory accepted), write stack.env, write docker-compose.yaml as
/// `header` + substituted template. A failure part-way leaves whatever was
/// already written in place.
///
/// # Errors
///
/// Returns `MaterializeError` carrying the path that could not be created or
/// written.
pub fn materialize<'a>(
    root: &Path,
    instance_name: &str,
    header: &str,
    env_content: &str,
    template: &str,
    substitutions: impl IntoIterator<Item = (&'a str, &'a str)>,
) -> Result<PathBuf, MaterializeError> {
    let dir = root.join(instance_name);
    debug!("Creating instance directory: {}", dir.display());

    fs::create_dir_all(&dir).map_err(|source| MaterializeError::CreateDir {
        path: dir.clone(),
        source,
    })?;

    let compose = format!("{}{}", header, substitute(template, substitutions));

    let env_path = dir.join(constants::ENV_FILE);
    write_private(&env_path, env_content).map_err(|source| MaterializeError::WriteFile {
        path: env_path.clone(),
        source,
    })?;
    debug!("Wrote {}", env_path.display());

    let compose_path = dir.join(constants::COMPOSE_FILE);
    fs::write(&compose_path, compose).map_err(|source| MaterializeError::WriteFile {
        path: compose_path.clone(),
        source,
    })?;
    debug!("Wrote {}", compose_path.display());

    Ok(dir)
}

/// Write a file readable only by the owner (0600 on Unix).
fn write_private(path: &Path, content: &str) -> std::io::Result<()> {
    #[cfg(unix)]
    {
        use std::io::Write;
        use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};

        let mut file = fs::OpenOptions::new()
            .create(true)
            .truncate(true)
            .write(true)
            .mode(0o600)
            .open(path)?;
        file.write_all(content.as_bytes())?;
        file.flush()?;

        fs::set_permissions(path, fs::Permissions::from_mode(0o600))?;
    }

    #[cfg(not(unix))]
    {
        fs::write(path, content)?;
    }

    Ok(())
}
