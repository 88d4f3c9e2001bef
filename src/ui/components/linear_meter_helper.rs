use dioxus::prelude::*;

use crate::{
    domain::{format_quantity, CalculatorState, LinearMeterInputs},
    ui::{
        components::{
            form_fields::NumberField,
            toast::{push_toast, ToastKind, ToastMessage},
        },
        theme,
    },
};

/// Collapsible helper turning room geometry into miter / sealant lengths.
/// Nothing is bound: the quantities change only when the user applies it.
#[component]
pub fn LinearMeterHelper() -> Element {
    let mut state = use_context::<Signal<CalculatorState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let mut expanded = use_signal(|| false);
    let inputs = state.with(|st| st.helper);

    let field = move |label: &'static str,
                      value: f64,
                      step: f64,
                      update: fn(&mut LinearMeterInputs, f64)| {
        rsx! {
            NumberField {
                label: label.to_string(),
                value,
                step: Some(step),
                compact: Some(true),
                on_change: move |next| {
                    let mut state = state;
                    state.with_mut(|st| update(&mut st.helper, next));
                },
            }
        }
    };

    let on_apply = move |_| {
        let meters = state.with_mut(|st| st.apply_linear_meter_helper());
        tracing::debug!(?meters, "Applied linear meter helper");
        push_toast(
            toasts,
            ToastKind::Success,
            format!(
                "Подставлено: запил {} п.м, силикон {} п.м",
                format_quantity(meters.miter_lm),
                format_quantity(meters.sealant_lm)
            ),
        );
    };

    rsx! {
        div {
            class: theme::panel(),
            button {
                class: "inline-flex items-center gap-2 text-sm mb-2 hover:opacity-90",
                onclick: move |_| expanded.toggle(),
                span { "ℹ️" }
                "Помощник: посчитать погонные метры"
            }
            if expanded() {
                div {
                    class: "grid sm:grid-cols-2 gap-3 text-sm",
                    div {
                        class: "space-y-2",
                        {field("Высота стен, м", inputs.wall_height, 0.1, |h, v| h.wall_height = v)}
                        {field("Внутренние углы, шт (силикон)", inputs.inner_corners, 1.0, |h, v| h.inner_corners = v)}
                        {field("Внешние углы, шт (под 45°)", inputs.outer_corners, 1.0, |h, v| h.outer_corners = v)}
                    }
                    div {
                        class: "space-y-2",
                        {field("Периметр пол-стена, м", inputs.floor_perimeter, 0.1, |h, v| h.floor_perimeter = v)}
                        {field("Доп. примыкания, м", inputs.extra_sealant, 0.1, |h, v| h.extra_sealant = v)}
                        {field("Открытые торцы/ниши (под 45°), м", inputs.open_edges, 0.1, |h, v| h.open_edges = v)}
                    }
                    div {
                        class: "sm:col-span-2 flex items-center justify-between gap-3 pt-1",
                        div {
                            class: theme::muted(),
                            "Формула: 45° = внешние углы × высота + открытые торцы. Силикон = внутренние углы × высота + периметр пол-стена + доп. примыкания."
                        }
                        button { class: theme::btn_small(), onclick: on_apply, "Подставить" }
                    }
                }
            }
        }
    }
}
