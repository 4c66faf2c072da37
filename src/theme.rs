//! Light/dark theme preference.
//!
//! The preference is tri-state: `system` follows the terminal, `light` and `dark` pin a choice.
//! It persists as a small JSON file in the user's config directory and is resolved against the
//! terminal's reported background. The service lives for the whole process.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ThemeError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// User preference.
pub enum ThemeMode {
    /// Follow the terminal.
    #[default]
    System,
    /// Always light.
    Light,
    /// Always dark.
    Dark,
}

impl ThemeMode {
    #[must_use]
    /// The next mode in the header toggle order: system, light, dark, system.
    pub fn cycle(self) -> Self {
        match self {
            Self::System => Self::Light,
            Self::Light => Self::Dark,
            Self::Dark => Self::System,
        }
    }

    #[must_use]
    /// Lowercase name, as stored on disk.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::System => "system",
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "system" => Ok(Self::System),
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(ThemeError::InvalidMode(other.to_string())),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// A concrete theme after resolving `system`.
pub enum ResolvedTheme {
    /// Dark text on a light background.
    Light,
    /// Light text on a dark background.
    Dark,
}

impl ResolvedTheme {
    #[must_use]
    /// Button caption for the header toggle.
    pub fn label(self) -> &'static str {
        match self {
            Self::Light => "Light",
            Self::Dark => "Dark",
        }
    }
}

#[must_use]
/// Reads the terminal background from a `COLORFGBG` value such as `15;0`.
///
/// The last field is the background palette index. Indices 0 to 6 and 8 are dark colours;
/// anything else parsable is light. Unknown values resolve to dark.
pub fn theme_from_colorfgbg(value: Option<&str>) -> ResolvedTheme {
    let background = value
        .and_then(|v| v.rsplit(';').next())
        .and_then(|bg| bg.trim().parse::<u8>().ok());
    match background {
        Some(0..=6 | 8) | None => ResolvedTheme::Dark,
        Some(_) => ResolvedTheme::Light,
    }
}

#[must_use]
/// The terminal's preferred theme, read from the environment.
pub fn detect_system_theme() -> ResolvedTheme {
    theme_from_colorfgbg(std::env::var("COLORFGBG").ok().as_deref())
}

#[must_use]
/// Default location of the persisted preference: `<config dir>/folio/theme.json`.
pub fn default_store_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("folio").join("theme.json"))
}

#[derive(Serialize, Deserialize)]
struct StoredPreference {
    mode: ThemeMode,
}

/// Reads a persisted mode.
///
/// # Errors
///
/// Returns an error if the file cannot be read or does not hold a known mode.
pub fn read_stored(path: &Path) -> Result<ThemeMode, ThemeError> {
    let contents = fs::read_to_string(path).map_err(|error| ThemeError::Io {
        path: path.to_path_buf(),
        error,
    })?;
    let stored: StoredPreference = serde_json::from_str(&contents)?;
    Ok(stored.mode)
}

/// Persists a mode, creating the parent directory if needed.
///
/// # Errors
///
/// Returns an error if the directory or file cannot be written.
pub fn write_stored(path: &Path, mode: ThemeMode) -> Result<(), ThemeError> {
    let io_error = |error| ThemeError::Io {
        path: path.to_path_buf(),
        error,
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(io_error)?;
    }
    let json = serde_json::to_string_pretty(&StoredPreference { mode })?;
    fs::write(path, json).map_err(io_error)
}

/// Callback invoked with the new resolved theme whenever it changes.
pub type ThemeListener = Box<dyn FnMut(ResolvedTheme)>;

/// Process-wide theme preference with persistence and change notification.
pub struct ThemeService {
    mode: ThemeMode,
    system: ResolvedTheme,
    store: Option<PathBuf>,
    listeners: Vec<ThemeListener>,
}

impl ThemeService {
    #[must_use]
    /// Loads the stored preference from `store`, falling back to `system` when the file is
    /// absent or unreadable. Passing `None` disables persistence.
    pub fn load(store: Option<PathBuf>, system: ResolvedTheme) -> Self {
        let mode = match store.as_deref() {
            Some(path) if path.exists() => read_stored(path).unwrap_or_else(|error| {
                tracing::warn!(%error, "ignoring stored theme preference");
                ThemeMode::System
            }),
            _ => ThemeMode::System,
        };
        tracing::debug!(%mode, ?system, "theme loaded");

        Self {
            mode,
            system,
            store,
            listeners: Vec::new(),
        }
    }

    #[must_use]
    /// Current preference.
    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    #[must_use]
    /// Resolves `mode` against the current system preference.
    pub fn resolve(&self, mode: ThemeMode) -> ResolvedTheme {
        match mode {
            ThemeMode::System => self.system,
            ThemeMode::Light => ResolvedTheme::Light,
            ThemeMode::Dark => ResolvedTheme::Dark,
        }
    }

    #[must_use]
    /// The theme currently in effect.
    pub fn resolved(&self) -> ResolvedTheme {
        self.resolve(self.mode)
    }

    /// Registers a listener for changes of the resolved theme.
    pub fn subscribe(&mut self, listener: ThemeListener) {
        self.listeners.push(listener);
    }

    /// Changes the preference, persists it and notifies listeners if the resolved theme changed.
    ///
    /// The in-memory preference changes even when persisting fails.
    ///
    /// # Errors
    ///
    /// Returns an error if the preference file cannot be written.
    pub fn set(&mut self, mode: ThemeMode) -> Result<(), ThemeError> {
        let before = self.resolved();
        self.mode = mode;
        self.notify_if_changed(before);
        tracing::debug!(%mode, resolved = ?self.resolved(), "theme mode set");

        match self.store.as_deref() {
            Some(path) => write_stored(path, mode),
            None => Ok(()),
        }
    }

    /// Advances to the next mode in toggle order and returns it.
    ///
    /// # Errors
    ///
    /// Returns an error if the preference file cannot be written.
    pub fn cycle(&mut self) -> Result<ThemeMode, ThemeError> {
        let next = self.mode.cycle();
        self.set(next)?;
        Ok(next)
    }

    /// Records a change in the terminal's preference.
    ///
    /// Only affects the resolved theme while the mode is `system`. The terminal reports its
    /// background through `COLORFGBG` once, at startup, so the binary never calls this; it is
    /// the hook for a host that can observe the background changing.
    pub fn set_system_preference(&mut self, system: ResolvedTheme) {
        let before = self.resolved();
        self.system = system;
        self.notify_if_changed(before);
    }

    fn notify_if_changed(&mut self, before: ResolvedTheme) {
        let after = self.resolved();
        if after == before {
            return;
        }
        for listener in &mut self.listeners {
            listener(after);
        }
    }
}

#[cfg(test)]
#[path = "tests/theme.rs"]
mod tests;
