//! Light/dark theme preference and its persistence

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::{Error, Result};

/// Colour scheme selected by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    #[default]
    Dark,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, ThemeMode::Dark)
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            other => Err(Error::UnknownTheme(other.to_string())),
        }
    }
}

/// Storage for the persisted theme flag
pub trait ThemeStore {
    /// Saved mode, `None` if nothing was saved yet
    fn load(&self) -> Result<Option<ThemeMode>>;
    fn save(&mut self, mode: ThemeMode) -> Result<()>;
}

impl<T: ThemeStore + ?Sized> ThemeStore for Box<T> {
    fn load(&self) -> Result<Option<ThemeMode>> {
        (**self).load()
    }

    fn save(&mut self, mode: ThemeMode) -> Result<()> {
        (**self).save(mode)
    }
}

/// Stores the mode as a single word in `<data_dir>/theme`
#[derive(Debug, Clone)]
pub struct FileThemeStore {
    path: PathBuf,
}

impl FileThemeStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            path: data_dir.into().join("theme"),
        }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl ThemeStore for FileThemeStore {
    fn load(&self) -> Result<Option<ThemeMode>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(&self.path)?;
        content.parse().map(Some)
    }

    fn save(&mut self, mode: ThemeMode) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, format!("{}\n", mode))?;
        Ok(())
    }
}

/// In-memory store, used when no data directory is available
#[derive(Debug, Clone, Default)]
pub struct MemoryThemeStore {
    saved: Option<ThemeMode>,
}

impl ThemeStore for MemoryThemeStore {
    fn load(&self) -> Result<Option<ThemeMode>> {
        Ok(self.saved)
    }

    fn save(&mut self, mode: ThemeMode) -> Result<()> {
        self.saved = Some(mode);
        Ok(())
    }
}

/// Current theme plus the store it is persisted to
pub struct ThemePreference<S: ThemeStore> {
    mode: ThemeMode,
    store: S,
}

impl<S: ThemeStore> ThemePreference<S> {
    /// Hydrate from the store, falling back to the system preference
    ///
    /// An unreadable store is logged and treated as empty.
    pub fn hydrate(store: S, prefers_dark: bool) -> Self {
        let saved = match store.load() {
            Ok(saved) => saved,
            Err(e) => {
                warn!("Failed to read saved theme: {}", e);
                None
            }
        };
        let mode = saved.unwrap_or(if prefers_dark {
            ThemeMode::Dark
        } else {
            ThemeMode::Light
        });
        debug!(%mode, from_store = saved.is_some(), "theme hydrated");
        Self { mode, store }
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    /// Apply and persist a mode
    ///
    /// The in-memory mode changes even if persisting fails.
    pub fn set(&mut self, mode: ThemeMode) -> Result<()> {
        self.mode = mode;
        self.store.save(mode)
    }

    pub fn toggle(&mut self) -> Result<ThemeMode> {
        let next = self.mode.toggled();
        self.set(next)?;
        Ok(next)
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

/// Guess whether the terminal background is dark from `COLORFGBG`
///
/// The variable looks like `15;0` (foreground;background). Background
/// indexes 0-6 and 8 are dark colours. Unknown means dark.
pub fn detect_prefers_dark() -> bool {
    match std::env::var("COLORFGBG") {
        Ok(value) => prefers_dark_from_colorfgbg(&value),
        Err(_) => true,
    }
}

fn prefers_dark_from_colorfgbg(value: &str) -> bool {
    value
        .rsplit(';')
        .next()
        .and_then(|bg| bg.trim().parse::<u8>().ok())
        .map(|bg| bg <= 6 || bg == 8)
        .unwrap_or(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_dir() -> PathBuf {
        std::env::temp_dir().join(format!("expatise-theme-{}", uuid::Uuid::new_v4()))
    }

    #[test]
    fn test_toggle_mode() {
        assert_eq!(ThemeMode::Dark.toggled(), ThemeMode::Light);
        assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
        assert_eq!(ThemeMode::default(), ThemeMode::Dark);
    }

    #[test]
    fn test_parse_mode() {
        assert_eq!("Light".parse::<ThemeMode>().unwrap(), ThemeMode::Light);
        assert_eq!(" dark\n".parse::<ThemeMode>().unwrap(), ThemeMode::Dark);
        assert!(matches!(
            "sepia".parse::<ThemeMode>(),
            Err(Error::UnknownTheme(_))
        ));
    }

    #[test]
    fn test_saved_value_wins_over_system() {
        let mut store = MemoryThemeStore::default();
        store.save(ThemeMode::Light).unwrap();

        let pref = ThemePreference::hydrate(store, true);
        assert_eq!(pref.mode(), ThemeMode::Light);
    }

    #[test]
    fn test_system_preference_when_unsaved() {
        let pref = ThemePreference::hydrate(MemoryThemeStore::default(), false);
        assert_eq!(pref.mode(), ThemeMode::Light);

        let pref = ThemePreference::hydrate(MemoryThemeStore::default(), true);
        assert_eq!(pref.mode(), ThemeMode::Dark);
    }

    #[test]
    fn test_toggle_persists() {
        let mut pref = ThemePreference::hydrate(MemoryThemeStore::default(), true);
        assert_eq!(pref.toggle().unwrap(), ThemeMode::Light);
        assert_eq!(pref.store().load().unwrap(), Some(ThemeMode::Light));
        assert_eq!(pref.toggle().unwrap(), ThemeMode::Dark);
        assert_eq!(pref.store().load().unwrap(), Some(ThemeMode::Dark));
    }

    #[test]
    fn test_file_store_round_trip() {
        let dir = temp_dir();
        let mut store = FileThemeStore::new(&dir);
        assert_eq!(store.load().unwrap(), None);

        store.save(ThemeMode::Light).unwrap();
        let reopened = FileThemeStore::new(&dir);
        assert_eq!(reopened.load().unwrap(), Some(ThemeMode::Light));

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_corrupt_file_falls_back_to_system() {
        let dir = temp_dir();
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("theme"), "purple").unwrap();

        let pref = ThemePreference::hydrate(FileThemeStore::new(&dir), false);
        assert_eq!(pref.mode(), ThemeMode::Light);

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_colorfgbg() {
        assert!(prefers_dark_from_colorfgbg("15;0"));
        assert!(prefers_dark_from_colorfgbg("15;default;8"));
        assert!(!prefers_dark_from_colorfgbg("0;15"));
        assert!(!prefers_dark_from_colorfgbg("0;7"));
        assert!(prefers_dark_from_colorfgbg("garbage"));
    }
}
