use dioxus::prelude::*;

use crate::{
    app::Route,
    domain::CalculatorState,
    ui::components::contact_links::{CallButton, WhatsAppButton},
    util::{
        links::{tel_url, DOMAIN, PHONE_DISPLAY},
        version::version_label,
    },
};

#[component]
pub fn Shell(children: Element) -> Element {
    let state = use_context::<Signal<CalculatorState>>();
    let current_route = use_route::<Route>();
    let nav = use_navigator();
    let message = state.with(|st| st.summary_message());
    let version = version_label();

    rsx! {
        div { class: "min-h-screen relative overflow-hidden bg-slate-950 text-slate-100 font-sans",
            div { aria_hidden: "true", class: "tile-bg pointer-events-none fixed inset-0 -z-20" }
            div { aria_hidden: "true", class: "glow-bg pointer-events-none fixed inset-0 -z-30" }

            header {
                class: "sticky top-0 z-30 backdrop-blur bg-slate-950/90 border-b border-white/10",
                div { class: "mx-auto max-w-7xl px-4 sm:px-6 lg:px-8 py-4 flex items-center justify-between gap-4",
                    div { class: "flex items-center gap-3",
                        div {
                            class: "w-9 h-9 rounded-2xl bg-emerald-500/25 grid place-content-center shadow-inner text-emerald-400",
                            "▦"
                        }
                        div {
                            div { class: "text-xs sm:text-sm uppercase tracking-widest text-emerald-400", "{DOMAIN}" }
                            div { class: "font-semibold text-base sm:text-lg", "Гуренко Евгений — плиточник" }
                        }
                    }

                    nav { class: "flex items-center gap-3 text-sm",
                        NavButton {
                            active: matches!(current_route, Route::Home {}),
                            onclick: move |_| { nav.push(Route::Home {}); },
                            label: "Калькулятор",
                        }
                        NavButton {
                            active: matches!(current_route, Route::Prices {}),
                            onclick: move |_| { nav.push(Route::Prices {}); },
                            label: "Цены",
                        }
                        CallButton {
                            class: Some("hidden md:inline-flex items-center gap-2 px-4 py-2 rounded-xl border border-white/15 hover:border-white/30 transition bg-slate-900".to_string()),
                        }
                        WhatsAppButton {}
                    }
                }
            }

            main { {children} }

            footer { class: "border-t border-white/10 py-8 text-sm text-slate-300",
                div { class: "mx-auto max-w-7xl px-4 sm:px-6 lg:px-8 flex flex-col sm:flex-row items-center justify-between gap-2",
                    div {
                        "© {DOMAIN}"
                        span { class: "ml-2 text-xs text-slate-500", "{version}" }
                    }
                    div { class: "flex items-center gap-3",
                        a {
                            href: tel_url(),
                            class: "inline-flex items-center gap-2 underline decoration-dotted",
                            "📞 {PHONE_DISPLAY}"
                        }
                        WhatsAppButton {
                            label: Some("WhatsApp".to_string()),
                            message: Some(message),
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn NavButton(active: bool, onclick: EventHandler<()>, label: &'static str) -> Element {
    let class = if active {
        "rounded-xl border border-emerald-400/60 bg-emerald-400/10 px-3 py-2 font-semibold text-emerald-200"
    } else {
        "rounded-xl border border-transparent px-3 py-2 text-slate-400 transition hover:border-white/15 hover:text-slate-200"
    };

    rsx! {
        button {
            class: "{class}",
            onclick: move |_| onclick.call(()),
            "{label}"
        }
    }
}
