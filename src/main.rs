#![allow(non_snake_case)]

mod app;
mod browser;
pub mod context;
mod pages;
mod theme;

use tracing::Level;

/// Birthday Book - animated greeting card for the web
fn main() {
    // Routes tracing records to the browser console.
    let _ = dioxus::logger::init(Level::INFO);

    tracing::info!("Starting Birthday Book");

    dioxus::LaunchBuilder::web().launch(app::App);
}
