// Startup settings (config file plus environment overrides)
pub mod config;

// UI module is always available.
pub mod ui;
