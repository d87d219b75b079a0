use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Configuration from config.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DashboardConfig {
    #[serde(default)]
    pub widgets: WidgetsConfig,
    #[serde(default)]
    pub clock: ClockConfig,
    #[serde(default)]
    pub calendar: CalendarConfig,
    #[serde(default)]
    pub lock: LockConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WidgetsConfig {
    /// Widgets present on the page. Anything not listed is not constructed.
    #[serde(default = "default_widgets")]
    pub enabled: Vec<String>,
}

impl Default for WidgetsConfig {
    fn default() -> Self {
        WidgetsConfig {
            enabled: default_widgets(),
        }
    }
}

fn default_widgets() -> Vec<String> {
    [
        "clock",
        "sidebar",
        "wallpaper",
        "notepad",
        "lock",
        "checklist",
        "calendar",
        "theme",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClockConfig {
    #[serde(default)]
    pub hour24: bool,
    #[serde(default = "default_true")]
    pub show_seconds: bool,
}

impl Default for ClockConfig {
    fn default() -> Self {
        ClockConfig {
            hour24: false,
            show_seconds: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// First column of the calendar grid
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    #[default]
    Sunday,
    Monday,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CalendarConfig {
    #[serde(default)]
    pub week_start: WeekStart,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LockConfig {
    /// Show the keypad overlay at start-up
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_code")]
    pub code: String,
    /// Shown under the keypad verbatim; never derived from `code`
    #[serde(default)]
    pub hint: Option<String>,
}

impl Default for LockConfig {
    fn default() -> Self {
        LockConfig {
            enabled: false,
            code: default_code(),
            hint: None,
        }
    }
}

fn default_code() -> String {
    "1234".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Theme color overrides by slot name (hex values)
    #[serde(default)]
    pub colors: HashMap<String, String>,
    /// Swatches offered by the theme selector
    #[serde(default = "default_accent_presets")]
    pub accent_presets: Vec<String>,
    #[serde(default = "default_true")]
    pub mouse: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            colors: HashMap::new(),
            accent_presets: default_accent_presets(),
            mouse: true,
        }
    }
}

fn default_accent_presets() -> Vec<String> {
    ["#4A90E2", "#E94F64", "#50C878", "#F5A623", "#9B59B6", "#1ABC9C"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}
