#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

mod app;
mod domain;
mod ui;
mod util;

use dioxus::prelude::*;

#[cfg(feature = "desktop")]
use dioxus_desktop::{tao::window::WindowBuilder, Config as DesktopConfig};

use crate::util::version::APP_NAME;

fn main() {
    dioxus::logger::initialize_default();

    for (key, value) in wayland_env_fixes(|key| std::env::var_os(key).is_some()) {
        std::env::set_var(key, value);
    }

    let builder = LaunchBuilder::new();

    #[cfg(feature = "desktop")]
    let builder = {
        let config = desktop! {
            DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title(APP_NAME)
            )
        };
        builder.with_cfg(config)
    };

    #[cfg(not(feature = "desktop"))]
    let builder = builder;

    tracing::info!("Starting {APP_NAME} {}", crate::util::version::version_label());
    builder.launch(app::App);
}

/// WebKit's DMABUF renderer opts into explicit sync, which crashes on some
/// Wayland drivers. Disabled unless the user already set the variable.
fn wayland_env_fixes(is_set: impl Fn(&str) -> bool) -> Vec<(&'static str, &'static str)> {
    const DMABUF: &str = "WEBKIT_DISABLE_DMABUF_RENDERER";
    if is_set("WAYLAND_DISPLAY") && !is_set(DMABUF) {
        vec![(DMABUF, "1")]
    } else {
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wayland_only_touches_the_webkit_renderer() {
        let fixes = wayland_env_fixes(|key| key == "WAYLAND_DISPLAY");
        assert_eq!(fixes, vec![("WEBKIT_DISABLE_DMABUF_RENDERER", "1")]);
    }

    #[test]
    fn user_settings_and_x11_are_left_alone() {
        assert!(wayland_env_fixes(|_| false).is_empty());
        assert!(wayland_env_fixes(|_| true).is_empty());
    }
}
