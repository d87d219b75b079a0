pub mod calendar;
pub mod checklist;
pub mod color;
pub mod config;
pub mod wallpaper;

pub use calendar::*;
pub use checklist::*;
pub use color::*;
pub use config::*;
pub use wallpaper::*;
