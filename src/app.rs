use dioxus::{prelude::*, signals::Signal};

use crate::{
    domain::CalculatorState,
    ui::{
        components::toast::{push_toast, Toast, ToastKind, ToastMessage},
        pages::{HomePage, PricesPage},
        shell::Shell,
    },
    util::{assets, config::load_price_overrides},
};

#[derive(Routable, Clone, PartialEq)]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/prices")]
    Prices {},
}

#[component]
pub fn App() -> Element {
    let state = use_signal(CalculatorState::default);
    let toasts = use_signal(Vec::<ToastMessage>::new);

    use_hook({
        let mut state = state;
        move || match load_price_overrides() {
            Ok(Some(table)) => {
                tracing::debug!("Installing configured prices as session defaults");
                state.with_mut(|st| st.install_default_prices(table));
            }
            Ok(None) => tracing::debug!("No price overrides configured; using built-in price list"),
            Err(err) => {
                tracing::warn!("Ignoring price overrides: {err}");
                push_toast(
                    toasts,
                    ToastKind::Error,
                    format!("Не удалось загрузить цены, используются исходные: {err}"),
                );
            }
        }
    });

    use_context_provider(|| state);
    use_context_provider(|| toasts);

    rsx! {
        document::Link { rel: "icon", href: assets::favicon_data_uri() }
        document::Style { "{assets::main_css()}" }
        document::Style { "{assets::tailwind_css()}" }
        Router::<Route> {}
        Toast {}
    }
}

#[component]
pub fn Home() -> Element {
    rsx! { Shell { HomePage {} } }
}

#[component]
pub fn Prices() -> Element {
    rsx! { Shell { PricesPage {} } }
}
