//! RxC Voice - account activation page
//!
//! Checks an emailed activation link, lets the new user set their name,
//! email and password, then sends them to GitHub or Twitter to verify
//! their identity.

mod activation;
mod api;
mod browser;
mod components;
mod config;
mod models;
mod routes;
mod state;

use dioxus::prelude::*;
use routes::Route;
use state::UI_STATE;
use components::common::Notification;

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
        tracing_subscriber::registry()
            .with(tracing_subscriber::fmt::layer())
            .with(tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("voice_activation=info")))
            .init();
    }

    run_app();
}

fn run_app() {
    let config = match config::AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Invalid configuration, using defaults: {:#}", e);
            config::AppConfig::default()
        }
    };

    tracing::info!("Using API at {}", config.api_url);

    // Initialize API client
    api::init_api_client(&config.api_url);
    config::init_config(config);

    // Launch the Dioxus app
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let background = UI_STATE.read().background.css_class();

    rsx! {
        // Global styles
        style { {include_str!("../assets/styles.css")} }

        // Notification toast
        Notification {}

        div { class: "min-h-screen {background}",
            Router::<Route> {}
        }
    }
}
