use dioxus::prelude::*;

use crate::{
    domain::{CalculatorState, Lightbox, GALLERY},
    ui::components::{
        calculator::Calculator,
        contact_links::{CallButton, WhatsAppButton},
        gallery::{GalleryGrid, LightboxView},
    },
};

#[component]
pub fn HomePage() -> Element {
    let state = use_context::<Signal<CalculatorState>>();
    let lightbox = use_signal(|| Lightbox::new(GALLERY.len()));
    let message = state.with(|st| st.summary_message());

    rsx! {
        section { class: "relative pt-10 sm:pt-12",
            div { class: "mx-auto max-w-7xl px-4 sm:px-6 lg:px-8 py-8 md:py-14 grid md:grid-cols-2 gap-10",
                div { class: "space-y-6",
                    h1 { class: "text-3xl sm:text-4xl md:text-5xl font-extrabold tracking-tight drop-shadow",
                        "Плиточные работы во Владивостоке и Артёме"
                        span { class: "block text-emerald-400", "качественно, в срок, под ключ" }
                    }
                    p { class: "text-slate-200 text-base sm:text-lg",
                        "Укладка плитки и керамогранита: санузлы, фартуки кухонь, полы. Подготовка основания, гидроизоляция, затирка, запил под 45°, аккуратные примыкания."
                    }
                    div { class: "flex flex-col sm:flex-row gap-3",
                        WhatsAppButton {
                            label: Some("Рассчитать и записаться".to_string()),
                            message: Some(message),
                        }
                        CallButton { label: Some("Позвонить".to_string()) }
                    }
                    div { class: "text-sm text-slate-300",
                        "Базовая цена укладки: "
                        span { class: "text-white font-medium", "от 1 800 ₽/м²" }
                        ". Итог после замера."
                    }
                }
                Calculator {}
            }
        }

        GalleryGrid { lightbox }
        LightboxView { lightbox }
    }
}
