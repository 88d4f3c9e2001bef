use dioxus::prelude::*;

use crate::{
    domain::{AreaType, CalculatorState, Complexity, Material, Surcharge},
    ui::components::form_fields::NumberField,
};

/// Editable price list. Edits apply to the live session immediately and are
/// lost on reload.
#[component]
pub fn PriceEditor() -> Element {
    let mut state = use_context::<Signal<CalculatorState>>();
    let prices = state.with(|st| st.prices);

    rsx! {
        div {
            class: "grid grid-cols-1 md:grid-cols-2 gap-4 text-sm",
            for area_type in AreaType::ALL {
                div {
                    key: "{area_type}",
                    class: "space-y-2",
                    div { class: "font-medium", "{area_type.name()}" }
                    div {
                        class: "grid grid-cols-2 gap-2",
                        for material in Material::ALL {
                            NumberField {
                                key: "{area_type}-{material}",
                                label: format!("{} ₽/м²", material.name()),
                                value: prices.base_rate(area_type, material),
                                compact: Some(true),
                                on_change: move |value| {
                                    state.with_mut(|st| st.prices.set_base_rate(area_type, material, value));
                                },
                            }
                        }
                    }
                }
            }

            div {
                class: "space-y-2",
                div { class: "font-medium", "Доп. работы, ₽" }
                for surcharge in Surcharge::ALL {
                    NumberField {
                        key: "{surcharge.key()}",
                        label: format!("{} {}", surcharge.name(), surcharge.unit()),
                        value: prices.surcharge(surcharge),
                        compact: Some(true),
                        on_change: move |value| {
                            state.with_mut(|st| st.prices.extras.set(surcharge, value));
                        },
                    }
                }
                NumberField {
                    label: "Скидка «под ключ», %",
                    value: prices.package_discount_pct(),
                    compact: Some(true),
                    on_change: move |value| {
                        state.with_mut(|st| st.prices.extras.set_package_discount_pct(value));
                    },
                }
            }

            div {
                class: "space-y-2",
                div { class: "font-medium", "Коэффициенты" }
                for complexity in Complexity::ALL {
                    NumberField {
                        key: "{complexity}",
                        label: format!("{} ×{:.2}", complexity.name(), prices.multiplier(complexity)),
                        value: prices.multiplier(complexity),
                        step: Some(0.01),
                        compact: Some(true),
                        on_change: move |value| {
                            state.with_mut(|st| st.prices.coefficients.set(complexity, value));
                        },
                    }
                }
            }
        }
    }
}
