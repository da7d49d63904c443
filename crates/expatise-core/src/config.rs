use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::warn;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub scroll: ScrollConfig,
    #[serde(default)]
    pub exam: ExamConfig,
    #[serde(default)]
    pub profile: ProfileConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Data directory path
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            log_level: default_log_level(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Tick rate in milliseconds while nothing is animating
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Width of one practice card in the home row, in columns
    #[serde(default = "default_card_width")]
    pub card_width: u16,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            card_width: default_card_width(),
        }
    }
}

impl UiConfig {
    pub const MIN_CARD_WIDTH: u16 = 8;
    pub const MAX_CARD_WIDTH: u16 = 80;

    /// Return a copy with `card_width` clamped into
    /// [`Self::MIN_CARD_WIDTH`, `Self::MAX_CARD_WIDTH`]
    pub fn validated(&self) -> Self {
        let mut config = self.clone();
        let clamped = config
            .card_width
            .clamp(Self::MIN_CARD_WIDTH, Self::MAX_CARD_WIDTH);
        if clamped != config.card_width {
            warn!(
                card_width = config.card_width,
                clamped, "ui.card_width out of range, clamping"
            );
        }
        config.card_width = clamped;
        config
    }
}

/// Easing curve used by eased scroll animations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EasingType {
    /// Jump straight to the end value
    None,
    Linear,
    /// 1 - (1-t)^3
    #[default]
    Cubic,
    /// 1 - (1-t)^5
    Quintic,
    /// 1 - 2^(-10t)
    EaseOut,
}

/// Physics parameters for the draggable card row
///
/// Distances are in columns, velocities in columns per frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScrollConfig {
    /// Multiplier from pointer delta to velocity (bigger = stronger throw)
    #[serde(default = "default_sensitivity")]
    pub sensitivity: f64,
    /// Release speed that must be exceeded to start momentum
    #[serde(default = "default_fling_threshold")]
    pub fling_threshold: f64,
    /// Per-frame velocity multiplier, 0.98 stops sooner, 0.99 glides longer
    #[serde(default = "default_friction")]
    pub friction: f64,
    /// Momentum stops at or below this speed
    #[serde(default = "default_min_velocity")]
    pub min_velocity: f64,
    /// How far the row may stretch past either edge
    #[serde(default = "default_overshoot")]
    pub overshoot: f64,
    /// Extra damping at full overshoot (0 = none, 1 = stop dead)
    #[serde(default = "default_edge_damping")]
    pub edge_damping: f64,
    /// Snap-back animation duration in milliseconds
    #[serde(default = "default_snap_back_duration")]
    pub snap_back_duration_ms: u64,
    /// Easing curve for snap-back
    #[serde(default)]
    pub easing: EasingType,
    /// Frame rate while an animation is running
    #[serde(default = "default_animation_fps")]
    pub animation_fps: u32,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            sensitivity: default_sensitivity(),
            fling_threshold: default_fling_threshold(),
            friction: default_friction(),
            min_velocity: default_min_velocity(),
            overshoot: default_overshoot(),
            edge_damping: default_edge_damping(),
            snap_back_duration_ms: default_snap_back_duration(),
            easing: EasingType::default(),
            animation_fps: default_animation_fps(),
        }
    }
}

impl ScrollConfig {
    pub const MIN_FRICTION: f64 = 0.98;
    pub const MAX_FRICTION: f64 = 0.99;

    /// Return a copy with out-of-range values replaced
    ///
    /// Friction is clamped into [`Self::MIN_FRICTION`, `Self::MAX_FRICTION`].
    /// Non-finite or non-positive values fall back to their defaults.
    pub fn validated(&self) -> Self {
        let defaults = Self::default();
        let mut config = self.clone();

        config.sensitivity = positive_or("sensitivity", config.sensitivity, defaults.sensitivity);
        config.fling_threshold =
            positive_or("fling_threshold", config.fling_threshold, defaults.fling_threshold);
        config.min_velocity = positive_or("min_velocity", config.min_velocity, defaults.min_velocity);
        config.overshoot = positive_or("overshoot", config.overshoot, defaults.overshoot);

        if config.friction.is_finite() {
            let clamped = config.friction.clamp(Self::MIN_FRICTION, Self::MAX_FRICTION);
            if clamped != config.friction {
                warn!(
                    friction = config.friction,
                    clamped, "scroll.friction out of range, clamping"
                );
            }
            config.friction = clamped;
        } else {
            warn!("scroll.friction is not finite, using default");
            config.friction = defaults.friction;
        }

        if !(0.0..=1.0).contains(&config.edge_damping) {
            warn!(
                edge_damping = config.edge_damping,
                "scroll.edge_damping must be within [0, 1], using default"
            );
            config.edge_damping = defaults.edge_damping;
        }

        config
    }
}

fn positive_or(name: &str, value: f64, fallback: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        warn!(field = name, value, fallback, "invalid scroll setting, using default");
        fallback
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExamConfig {
    /// Scheduled test date (YYYY-MM-DD)
    #[serde(default = "default_test_date")]
    pub test_date: String,
}

impl Default for ExamConfig {
    fn default() -> Self {
        Self {
            test_date: default_test_date(),
        }
    }
}

/// Link rows in the profile settings list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsLink {
    PrivacyPolicy,
    AboutUs,
    ExamRegistration,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileConfig {
    #[serde(default = "default_username")]
    pub username: String,
    #[serde(default = "default_email")]
    pub email: String,
    /// Show the premium plan badge
    #[serde(default = "default_true")]
    pub premium: bool,
    #[serde(default)]
    pub privacy_policy_url: Option<String>,
    #[serde(default)]
    pub about_url: Option<String>,
    #[serde(default)]
    pub exam_registration_url: Option<String>,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            username: default_username(),
            email: default_email(),
            premium: default_true(),
            privacy_policy_url: None,
            about_url: None,
            exam_registration_url: None,
        }
    }
}

impl ProfileConfig {
    /// Parsed URL for a settings row, `None` when not configured
    pub fn link_url(&self, link: SettingsLink) -> crate::Result<Option<url::Url>> {
        let raw = match link {
            SettingsLink::PrivacyPolicy => &self.privacy_policy_url,
            SettingsLink::AboutUs => &self.about_url,
            SettingsLink::ExamRegistration => &self.exam_registration_url,
        };
        raw.as_deref()
            .map(url::Url::parse)
            .transpose()
            .map_err(Into::into)
    }
}

fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("expatise")
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_tick_rate() -> u64 {
    100
}

fn default_card_width() -> u16 {
    24
}

fn default_sensitivity() -> f64 {
    0.9
}

fn default_fling_threshold() -> f64 {
    0.5
}

fn default_friction() -> f64 {
    0.985
}

fn default_min_velocity() -> f64 {
    0.05
}

fn default_overshoot() -> f64 {
    160.0
}

fn default_edge_damping() -> f64 {
    0.7
}

fn default_snap_back_duration() -> u64 {
    400
}

fn default_animation_fps() -> u32 {
    60
}

fn default_test_date() -> String {
    "2025-04-20".to_string()
}

fn default_username() -> String {
    "@Expatise".to_string()
}

fn default_email() -> String {
    "user@expatise.com".to_string()
}

/// Expand tilde (~) in path to user's home directory
fn expand_tilde(path: &Path) -> PathBuf {
    if let Some(path_str) = path.to_str() {
        if let Some(stripped) = path_str.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(stripped);
            }
        } else if path_str == "~" {
            if let Some(home) = dirs::home_dir() {
                return home;
            }
        }
    }
    path.to_path_buf()
}

impl AppConfig {
    /// Load configuration from file or return defaults
    pub fn load() -> crate::Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from a specific file, defaults when it does not exist
    pub fn load_from(path: &Path) -> crate::Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            toml::from_str(&content).map_err(|e| crate::Error::Config(e.to_string()))
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to file
    pub fn save(&self) -> crate::Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> crate::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content =
            toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))?;
        std::fs::write(path, content)?;

        Ok(())
    }

    /// Get the configuration file path
    /// Always uses ~/.config/expatise/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("expatise")
            .join("config.toml")
    }

    /// Get the data directory (with tilde expansion)
    pub fn data_dir(&self) -> PathBuf {
        expand_tilde(&self.general.data_dir)
    }

    /// File the TUI writes its logs to
    pub fn log_path(&self) -> PathBuf {
        self.data_dir().join("expatise.log")
    }
}
