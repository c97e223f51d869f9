//! Mergington Activities
//!
//! Sign-up page for Mergington High School extracurricular activities, built
//! with Leptos (WASM).
//!
//! # Features
//!
//! - Activity cards with schedule, availability and participants
//! - Sign-up form
//! - Per-participant unregister with confirmation
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. The flows themselves live in the `mergington` crate; this
//! crate supplies the `gloo-net` transport, reactive state and DOM.

use leptos::*;
use mergington::{logging, Config};

mod api;
mod app;
mod components;
mod state;

const CONFIG_TOML: &str = include_str!("../mergington.toml");

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    let (config, config_error) = match Config::from_toml(CONFIG_TOML) {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    };

    logging::init(&config.logging);
    if let Some(e) = config_error {
        tracing::warn!("Using default config: {}", e);
    }

    mount_to_body(move || view! { <app::App config=config /> });
}
