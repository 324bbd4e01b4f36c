pub mod api;
pub mod components;
pub mod config;
pub mod pages;
pub mod router;
pub mod state;
pub mod utils;

#[cfg(test)]
mod test_support;

/// Browser entry point: installs logging, starts the runtime config load
/// and mounts the router.
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        web_sys::console::warn_1(&"console logger already installed".into());
    }
    log::info!("starting HR Desk frontend");

    // `window.__HRDESK_ENV` (env.js) takes precedence over ./config.json.
    leptos::spawn_local(async move {
        config::init().await;
        log::debug!("runtime config initialized");
    });

    router::mount_app();
}
