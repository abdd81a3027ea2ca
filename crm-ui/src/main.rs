mod app;
mod backend;
mod bridge;
mod components;
mod config;
mod dto;
mod navigator;
mod preferences;

fn main() {
    let config = config::UiConfig::load();
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(config.log_level);
    log::debug!("mounting crm shell (store global: {})", config.store_global);
    leptos::mount_to_body(app::App);
}
