use dioxus::prelude::*;

use crate::{
    app::Route,
    domain::{format_quantity, AreaType, CalculatorState, Complexity, Material, OptionalWork},
    ui::{
        components::{
            contact_links::{CallButton, WhatsAppButton},
            estimate_breakdown::EstimateBreakdown,
            form_fields::{NumberField, ToggleField},
            linear_meter_helper::LinearMeterHelper,
        },
        theme,
    },
};

#[component]
pub fn Calculator() -> Element {
    let mut state = use_context::<Signal<CalculatorState>>();

    let snapshot = state();
    let request = snapshot.request.clone();
    let result = snapshot.estimate();
    let message = snapshot.summary_message();
    let discount_pct = format_quantity(snapshot.prices.package_discount_pct());
    let prices_modified = snapshot.prices_modified();

    rsx! {
        div {
            class: theme::card(),
            div {
                class: "flex items-center justify-between gap-3",
                div {
                    class: "flex items-center gap-2",
                    span { class: "text-emerald-400", "🧮" }
                    h2 { class: "text-2xl font-bold", "Калькулятор" }
                }
                Link {
                    to: Route::Prices {},
                    class: theme::btn_small().to_string(),
                    if prices_modified { "✂️ Цены изменены" } else { "✂️ Настроить цены" }
                }
            }

            div {
                class: "mt-6 grid grid-cols-1 gap-4",

                div {
                    div { class: theme::field_label(), "Зона работ" }
                    div {
                        class: "grid grid-cols-3 gap-2",
                        for area_type in AreaType::ALL {
                            button {
                                key: "{area_type}",
                                class: theme::choice(request.area_type == area_type),
                                onclick: move |_| state.with_mut(|st| st.set_area_type(area_type)),
                                "{area_type.short_name()}"
                            }
                        }
                    }
                }

                div {
                    div { class: theme::field_label(), "Материал" }
                    div {
                        class: "grid grid-cols-2 gap-2",
                        for material in Material::ALL {
                            button {
                                key: "{material}",
                                class: theme::choice(request.material == material),
                                onclick: move |_| state.with_mut(|st| st.set_material(material)),
                                "{material.name()}"
                            }
                        }
                    }
                }

                NumberField {
                    label: "Площадь, м²",
                    value: request.area,
                    step: Some(0.1),
                    on_change: move |area| state.with_mut(|st| st.set_area(area)),
                }

                div {
                    div { class: theme::field_label(), "Сложность" }
                    div {
                        class: "grid grid-cols-2 sm:grid-cols-4 gap-2",
                        for complexity in Complexity::ALL {
                            button {
                                key: "{complexity}",
                                class: theme::choice(request.complexity == complexity),
                                onclick: move |_| state.with_mut(|st| st.set_complexity(complexity)),
                                "{complexity.name()}"
                            }
                        }
                    }
                }

                div {
                    class: "grid sm:grid-cols-2 gap-3",
                    ToggleField {
                        label: format!("Санузел под ключ (скидка {discount_pct}%)"),
                        checked: request.turnkey,
                        on_toggle: move |on| state.with_mut(|st| st.set_turnkey(on)),
                    }
                    for work in OptionalWork::ALL {
                        if work != OptionalWork::Waterproofing {
                            ToggleField {
                                key: "{work.toggle_label()}",
                                label: work.toggle_label().to_string(),
                                checked: request.works.is_enabled(work),
                                on_toggle: move |on| state.with_mut(|st| st.set_work(work, on)),
                            }
                        }
                    }
                    div {
                        class: "grid grid-cols-1 sm:grid-cols-2 gap-2",
                        ToggleField {
                            label: OptionalWork::Waterproofing.toggle_label().to_string(),
                            checked: request.works.waterproofing,
                            on_toggle: move |on| {
                                state.with_mut(|st| st.set_work(OptionalWork::Waterproofing, on));
                            },
                        }
                        if request.works.waterproofing {
                            ToggleField {
                                label: "= площади",
                                checked: request.waterproofing_linked,
                                on_toggle: move |on| state.with_mut(|st| st.set_waterproofing_linked(on)),
                            }
                        }
                    }
                }

                if request.works.waterproofing && !request.waterproofing_linked {
                    NumberField {
                        label: "Гидроизоляция — площадь, м²",
                        value: request.waterproofing_area,
                        step: Some(0.1),
                        on_change: move |area| state.with_mut(|st| st.set_waterproofing_area(area)),
                    }
                }

                div {
                    class: "grid sm:grid-cols-2 gap-3",
                    NumberField {
                        label: "Запил под 45°, пог. м",
                        value: request.miter_lm,
                        step: Some(0.1),
                        on_change: move |meters| state.with_mut(|st| st.set_miter_lm(meters)),
                    }
                    NumberField {
                        label: "Силикон/примыкания, пог. м",
                        value: request.sealant_lm,
                        step: Some(0.1),
                        on_change: move |meters| state.with_mut(|st| st.set_sealant_lm(meters)),
                    }
                }

                LinearMeterHelper {}

                EstimateBreakdown { result }

                div {
                    class: "mt-1 flex flex-col sm:flex-row gap-3",
                    WhatsAppButton {
                        label: Some("Отправить расчёт в WhatsApp".to_string()),
                        message: Some(message),
                    }
                    CallButton { label: Some("Позвонить".to_string()) }
                }
            }
        }
    }
}
