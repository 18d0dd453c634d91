//! Todo App Frontend Entry Point

mod app;
mod components;
mod context;
mod controller;
mod logging;
mod models;
mod settings;
mod state;
mod store;
mod view;

use app::App;
use leptos::prelude::*;
use todo_api::Config;

fn main() {
    console_error_panic_hook::set_once();

    let config = match settings::load() {
        Ok(config) => {
            logging::init(config.log_level());
            config
        }
        Err(err) => {
            logging::init(log::LevelFilter::Info);
            log::warn!("Falling back to default settings: {}", err);
            Config::default()
        }
    };

    mount_to_body(move || view! { <App config=config /> });
}
