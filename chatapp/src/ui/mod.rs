pub mod core;
pub mod effects;
pub mod icons;
pub mod screens;
pub mod theme;

mod app;

pub use app::*;
