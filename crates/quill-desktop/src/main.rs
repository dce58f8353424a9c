//! Quill Desktop Application
//!
//! A desktop host for the Quill note form.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod components;
mod route;
mod state;
mod theme;
mod views;

use dioxus::desktop::{Config, WindowBuilder};

fn main() {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize logging
    let mut filter = tracing_subscriber::EnvFilter::from_default_env();
    if let Ok(directive) = "quill=debug".parse() {
        filter = filter.add_directive(directive);
    }
    tracing_subscriber::fmt().with_env_filter(filter).init();

    tracing::info!("Starting Quill...");

    let config = Config::new().with_window(WindowBuilder::new().with_title("Quill"));

    dioxus::LaunchBuilder::new()
        .with_cfg(config)
        .launch(app::App);
}
