use dioxus::prelude::*;

use crate::{
    domain::{Lightbox, GALLERY},
    ui::theme,
};

#[component]
pub fn GalleryGrid(lightbox: Signal<Lightbox>) -> Element {
    let mut lightbox = lightbox;
    rsx! {
        section {
            id: "gallery",
            class: "py-12 md:py-16 border-t border-white/10",
            div {
                class: "mx-auto max-w-7xl px-4 sm:px-6 lg:px-8",
                div {
                    class: "flex items-center gap-2 mb-4",
                    span { class: "text-emerald-400", "🖼" }
                    h2 { class: theme::section_title(), "Галерея выполненных работ" }
                }
                div {
                    class: "grid grid-cols-2 md:grid-cols-4 gap-3",
                    for (index, image) in GALLERY.iter().enumerate() {
                        button {
                            key: "{image.src}",
                            class: "gallery-thumb group relative rounded-2xl overflow-hidden border border-white/10 bg-slate-900/50",
                            onclick: move |_| lightbox.with_mut(|lb| lb.open(index)),
                            img {
                                src: image.src,
                                alt: image.caption,
                                loading: "lazy",
                                class: "w-full h-full",
                            }
                            div {
                                class: "absolute bottom-2 left-2 text-[11px] sm:text-xs text-slate-200 drop-shadow",
                                "{image.caption}"
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn LightboxView(lightbox: Signal<Lightbox>) -> Element {
    let mut lightbox = lightbox;
    let (open, position) = lightbox.with(|lb| (lb.is_open(), lb.index() + 1));
    if !open {
        return rsx! { Fragment {} };
    }
    let Some(image) = lightbox.with(|lb| lb.current(GALLERY).copied()) else {
        return rsx! { Fragment {} };
    };
    let count = GALLERY.len();

    rsx! {
        div {
            class: "fixed inset-0 z-40 bg-black/80 grid place-items-center p-4",
            role: "dialog",
            aria_modal: "true",
            button {
                class: "absolute top-4 right-4 p-2 rounded-xl bg-white/10 hover:bg-white/20 focus:outline-none",
                aria_label: "Закрыть",
                onclick: move |_| lightbox.with_mut(|lb| lb.close()),
                "✕"
            }
            div {
                class: "relative max-w-5xl w-full",
                img {
                    class: "lightbox-image rounded-2xl shadow-2xl",
                    src: image.src,
                    alt: image.caption,
                }
                div {
                    class: "absolute inset-0 flex items-center justify-between px-2",
                    button {
                        class: "p-2 rounded-xl bg-white/10 hover:bg-white/20",
                        aria_label: "Назад",
                        onclick: move |_| lightbox.with_mut(|lb| lb.prev()),
                        "‹"
                    }
                    button {
                        class: "p-2 rounded-xl bg-white/10 hover:bg-white/20",
                        aria_label: "Вперёд",
                        onclick: move |_| lightbox.with_mut(|lb| lb.next()),
                        "›"
                    }
                }
                div {
                    class: "mt-2 flex justify-between text-sm text-slate-200",
                    span { "{image.caption}" }
                    span { class: "text-slate-400", "{position} / {count}" }
                }
            }
        }
    }
}
