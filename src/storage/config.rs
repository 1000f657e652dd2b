//! JSON prefs file.
//!
//! Stores settings in `<config dir>/Free Ruler/prefs.json`.
//!
//! [`PrefsCache`] keeps an in-memory copy so that dragging a slider does not
//! hit the disk on every tick. Call [`PrefsCache::flush`] to persist changes.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use directories_next::BaseDirs;

use crate::error::{FreeRulerError, Result};
use crate::model::constants::{CONFIG_DIR_NAME, PREFS_FILE_NAME};
use crate::model::Prefs;

/// Default prefs file location for the current user.
pub fn default_prefs_path() -> Result<PathBuf> {
    BaseDirs::new()
        .map(|base| base.config_dir().join(CONFIG_DIR_NAME).join(PREFS_FILE_NAME))
        .ok_or(FreeRulerError::NoConfigDir)
}

/// Load prefs from `path`.
///
/// A missing file yields the defaults. Keys absent from the file take their
/// default value; out-of-range values are clamped.
pub fn load_prefs(path: &Path) -> Result<Prefs> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            log::info!("no prefs file at {}, using defaults", path.display());
            return Ok(Prefs::default());
        }
        Err(e) => return Err(e.into()),
    };
    let mut prefs: Prefs = serde_json::from_str(&contents)?;
    prefs.validate();
    Ok(prefs)
}

/// Write prefs to `path` as pretty JSON, creating the directory if needed.
///
/// The file is written next to its destination and renamed into place.
pub fn save_prefs(path: &Path, prefs: &Prefs) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(prefs)?;
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, json)?;
    fs::rename(&tmp, path)?;
    log::debug!("prefs saved to {}", path.display());
    Ok(())
}

/// In-memory prefs with a dirty flag, written to disk on [`flush`](Self::flush).
#[derive(Debug)]
pub struct PrefsCache {
    path: Option<PathBuf>,
    prefs: Prefs,
    dirty: bool,
}

impl PrefsCache {
    /// Load the cache from `path`. Unreadable files are logged and replaced
    /// by defaults on the next flush.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let prefs = load_prefs(&path).unwrap_or_else(|e| {
            log::error!("failed to load {}: {}", path.display(), e);
            Prefs::default()
        });
        Self {
            path: Some(path),
            prefs,
            dirty: false,
        }
    }

    /// Open the cache at the default location.
    pub fn open_default() -> Result<Self> {
        Ok(Self::open(default_prefs_path()?))
    }

    /// A cache that never touches the disk.
    pub fn in_memory(prefs: Prefs) -> Self {
        Self {
            path: None,
            prefs,
            dirty: false,
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn prefs(&self) -> &Prefs {
        &self.prefs
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Replace the cached prefs. Marks the cache dirty if anything changed.
    pub fn set(&mut self, prefs: Prefs) {
        if prefs != self.prefs {
            self.prefs = prefs;
            self.dirty = true;
        }
    }

    /// Write to disk if dirty. Returns whether a write happened.
    ///
    /// The dirty flag is kept on failure so a later flush retries.
    pub fn flush(&mut self) -> Result<bool> {
        if !self.dirty {
            return Ok(false);
        }
        let Some(path) = &self.path else {
            self.dirty = false;
            return Ok(false);
        };
        save_prefs(path, &self.prefs)?;
        self.dirty = false;
        Ok(true)
    }
}
