#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use chatapp::config::AppConfig;
use chatapp::ui::ChatApp;
use iced::Size;
use tracing_subscriber::prelude::*;

fn main() -> iced::Result {
    // Initialize tracing (optional, controlled via RUST_LOG)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "chatapp=info,chatapp_core=info,iced=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
    let config = AppConfig::load();
    let window_size = Size::new(config.window_width, config.window_height);
    iced::application(ChatApp::title, ChatApp::update, ChatApp::view)
        .theme(ChatApp::theme)
        .subscription(ChatApp::subscription)
        .window_size(window_size)
        .run_with(move || ChatApp::new(config))
}
