use dioxus::prelude::*;

use crate::{
    app::Route,
    domain::CalculatorState,
    ui::{
        components::{
            price_editor::PriceEditor,
            toast::{push_toast, ToastKind, ToastMessage},
        },
        theme,
    },
};

#[component]
pub fn PricesPage() -> Element {
    let state = use_context::<Signal<CalculatorState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let modified = state.with(|st| st.prices_modified());

    let on_reset = {
        let mut state = state;
        move |_| {
            state.with_mut(|st| st.reset_prices());
            tracing::info!("Price table reset to defaults");
            push_toast(toasts, ToastKind::Info, "Цены сброшены к исходным.");
        }
    };

    rsx! {
        div { class: "mx-auto max-w-4xl px-4 sm:px-6 lg:px-8 py-10",
            section { class: theme::card(),
                div { class: "flex flex-wrap items-center justify-between gap-3",
                    h2 { class: "text-2xl font-bold", "Настройка цен" }
                    div { class: "flex gap-2",
                        button {
                            class: theme::btn_small(),
                            disabled: !modified,
                            onclick: on_reset,
                            "Сбросить"
                        }
                        Link {
                            to: Route::Home {},
                            class: theme::btn_small().to_string(),
                            "← К калькулятору"
                        }
                    }
                }
                p { class: "mt-2 {theme::muted()}",
                    "Изменения сразу учитываются в калькуляторе и действуют до перезагрузки страницы."
                }
                div { class: "mt-4", PriceEditor {} }
            }
        }
    }
}
