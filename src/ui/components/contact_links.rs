use dioxus::prelude::*;

use crate::{
    ui::theme,
    util::links::{tel_url, whatsapp_url, PHONE_DISPLAY},
};

#[component]
pub fn WhatsAppButton(label: Option<String>, message: Option<String>) -> Element {
    let href = whatsapp_url(message.as_deref());
    let label = label.unwrap_or_else(|| "Написать в WhatsApp".to_string());

    rsx! {
        a {
            href: "{href}",
            target: "_blank",
            rel: "noopener noreferrer",
            class: theme::btn_whatsapp(),
            aria_label: "Написать в WhatsApp",
            span { "💬" }
            span { "{label}" }
        }
    }
}

/// Dialer link; shows the phone number unless a label is given.
#[component]
pub fn CallButton(label: Option<String>, class: Option<String>) -> Element {
    let label = label.unwrap_or_else(|| PHONE_DISPLAY.to_string());
    let class = class.unwrap_or_else(|| theme::btn_outline().to_string());

    rsx! {
        a {
            href: tel_url(),
            class: "{class}",
            span { "📞" }
            span { "{label}" }
        }
    }
}
