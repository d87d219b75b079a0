pub mod app;
pub mod input;
pub mod render;
pub mod theme;
pub mod widgets;

pub use app::run;
