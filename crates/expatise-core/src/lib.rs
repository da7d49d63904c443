pub mod avatar;
pub mod config;
pub mod countdown;
pub mod error;
pub mod theme;

pub use avatar::{AvatarPreview, PreviewHandle};
pub use config::{AppConfig, EasingType, ScrollConfig};
pub use countdown::Countdown;
pub use error::{Error, Result};
pub use theme::{ThemeMode, ThemePreference, ThemeStore};
