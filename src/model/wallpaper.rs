use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Background mode, stored as the bare word `video` or `image`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WallpaperMode {
    #[default]
    Video,
    Image,
}

impl WallpaperMode {
    pub fn toggled(self) -> Self {
        match self {
            WallpaperMode::Video => WallpaperMode::Image,
            WallpaperMode::Image => WallpaperMode::Video,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            WallpaperMode::Video => "video",
            WallpaperMode::Image => "image",
        }
    }
}

impl fmt::Display for WallpaperMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown wallpaper mode: {0} (expected video or image)")]
pub struct ParseWallpaperError(pub String);

impl FromStr for WallpaperMode {
    type Err = ParseWallpaperError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "video" => Ok(WallpaperMode::Video),
            "image" => Ok(WallpaperMode::Image),
            other => Err(ParseWallpaperError(other.to_string())),
        }
    }
}
