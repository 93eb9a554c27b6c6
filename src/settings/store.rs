use super::Settings;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

const APP_DIR: &str = ".langdeck";
const SETTINGS_FILE: &str = "settings.json";
const LOG_DIR: &str = "logs";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("cannot determine the cache directory")]
    NoCacheDir,
    #[error("failed to access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed settings in {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// `<cache>/.langdeck/logs`, created if needed.
pub fn ensure_log_dir() -> io::Result<PathBuf> {
    let dir = get_cache_dir()
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "cannot determine the cache directory"))?
        .join(APP_DIR)
        .join(LOG_DIR);
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Writes a settings file with every default spelled out, unless one already exists.
pub fn ensure_settings_file_in(cache_dir: &Path) -> Result<PathBuf, SettingsError> {
    let path = cache_dir.join(APP_DIR).join(SETTINGS_FILE);
    let io_err = |source: io::Error| SettingsError::Io {
        path: path.clone(),
        source,
    };

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(io_err)?;
    }
    if !path.exists() {
        let content =
            serde_json::to_string_pretty(&Settings::default()).unwrap_or_else(|_| "{}".to_string());
        std::fs::write(&path, content).map_err(io_err)?;
        tracing::info!(path = %path.display(), "created settings file");
    }
    Ok(path)
}

/// Reads settings from `path`. A missing file is `Ok(None)`.
pub fn load_settings_from(path: &Path) -> Result<Option<Settings>, SettingsError> {
    let data = match std::fs::read_to_string(path) {
        Ok(data) => data,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(SettingsError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    serde_json::from_str(&data)
        .map(Some)
        .map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })
}

/// Creates the settings file under `cache_dir` on first run, then reads it. Any problem is
/// logged and yields the defaults.
pub fn load_settings_in(cache_dir: &Path) -> Settings {
    let loaded = ensure_settings_file_in(cache_dir)
        .and_then(|path| Ok(load_settings_from(&path)?.map(|settings| (path, settings))));

    match loaded {
        Ok(Some((path, settings))) => {
            tracing::info!(path = %path.display(), "settings loaded");
            settings
        }
        Ok(None) => Settings::default(),
        Err(err) => {
            tracing::warn!(error = %err, "using default settings");
            Settings::default()
        }
    }
}

/// [`load_settings_in`] the OS cache dir.
pub fn load_settings() -> Settings {
    match get_cache_dir() {
        Some(dir) => load_settings_in(&dir),
        None => {
            tracing::warn!("{}, using default settings", SettingsError::NoCacheDir);
            Settings::default()
        }
    }
}

fn get_cache_dir() -> Option<PathBuf> {
    let var = |name: &str| std::env::var_os(name).filter(|v| !v.is_empty()).map(PathBuf::from);

    if cfg!(target_os = "macos") {
        var("HOME").map(|home| home.join("Library").join("Caches"))
    } else if cfg!(windows) {
        var("LOCALAPPDATA").or_else(|| var("APPDATA"))
    } else {
        var("XDG_CACHE_HOME").or_else(|| var("HOME").map(|home| home.join(".cache")))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/settings/store.rs"]
mod tests;
