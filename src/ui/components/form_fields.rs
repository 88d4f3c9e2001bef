use dioxus::prelude::*;

use crate::{
    domain::{format_quantity, parse_quantity},
    ui::theme,
};

/// Numeric input; anything that does not parse reports zero.
#[component]
pub fn NumberField(
    label: String,
    value: f64,
    step: Option<f64>,
    compact: Option<bool>,
    on_change: EventHandler<f64>,
) -> Element {
    let step = step.map(format_quantity).unwrap_or_else(|| "any".to_string());
    let label_class = if compact.unwrap_or(false) {
        "text-slate-400 mb-1"
    } else {
        theme::field_label()
    };

    rsx! {
        label {
            class: "block",
            div { class: label_class, "{label}" }
            input {
                r#type: "number",
                inputmode: "decimal",
                min: "0",
                step: "{step}",
                class: theme::input_class(),
                value: format_quantity(value),
                oninput: move |evt| on_change.call(parse_quantity(&evt.value())),
            }
        }
    }
}

#[component]
pub fn ToggleField(label: String, checked: bool, on_toggle: EventHandler<bool>) -> Element {
    rsx! {
        label {
            class: "inline-flex items-center gap-2",
            input {
                r#type: "checkbox",
                class: theme::checkbox_class(),
                checked,
                onchange: move |evt| on_toggle.call(evt.checked()),
            }
            span { class: "text-sm text-slate-300", "{label}" }
        }
    }
}
