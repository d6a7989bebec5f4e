//! StudyNest Desktop Application
//!
//! A note-taking dashboard for students.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod components;
mod state;
mod theme;
mod views;

use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
use studynest_core::config::DashboardConfig;
use tracing_subscriber::EnvFilter;

fn main() {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    init_logging();

    tracing::info!("Starting StudyNest...");

    let config = DashboardConfig::load().unwrap_or_else(|e| {
        tracing::error!("Failed to load config: {}. Using defaults.", e);
        DashboardConfig::default()
    });

    let window = WindowBuilder::new()
        .with_title(config.window_title.clone())
        .with_inner_size(LogicalSize::new(1280.0, 820.0));

    dioxus::LaunchBuilder::new()
        .with_cfg(Config::new().with_window(window))
        .with_context(config)
        .launch(app::App);
}

fn init_logging() {
    let mut filter = EnvFilter::from_default_env();
    if let Ok(directive) = "studynest=debug".parse() {
        filter = filter.add_directive(directive);
    }
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
