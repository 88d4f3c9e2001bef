use dioxus::prelude::*;

use crate::{
    domain::{format_rub, EstimateLine, EstimateResult, LineItem},
    ui::theme,
};

#[component]
pub fn EstimateBreakdown(result: EstimateResult) -> Element {
    // two columns, the left one gets the extra line on odd counts
    let split = result.lines.len().div_ceil(2);
    let (left, right) = result.lines.split_at(split);
    let left = left.to_vec();
    let right = right.to_vec();
    let discount = format_rub(result.discount);
    let total = format_rub(result.total);
    let multiplier = format!("{:.2}", result.multiplier);

    rsx! {
        div {
            class: "mt-2 {theme::panel()}",
            div { class: "text-sm text-slate-300", "Предварительный расчёт" }
            div {
                class: "mt-2 grid grid-cols-1 md:grid-cols-2 gap-3 text-sm",
                BreakdownColumn { lines: left, multiplier: multiplier.clone() }
                BreakdownColumn { lines: right, multiplier }
            }
            if result.has_discount() {
                div {
                    class: "flex justify-between gap-3 text-sm mt-2 text-emerald-300",
                    span { "Скидка «под ключ»" }
                    span { "−{discount} ₽" }
                }
            }
            div { class: "text-3xl font-extrabold mt-2", "{total} ₽" }
            div {
                class: "{theme::muted()} mt-1",
                "Без материалов (если не отмечены). Итог после замера и раскладки."
            }
        }
    }
}

#[component]
fn BreakdownColumn(lines: Vec<EstimateLine>, multiplier: String) -> Element {
    rsx! {
        ul {
            class: "space-y-1",
            for line in lines {
                li {
                    key: "{line.item.label()}",
                    class: "flex justify-between gap-3",
                    span {
                        if line.item == LineItem::Base {
                            "{line.item.label()} (×{multiplier})"
                        } else {
                            "{line.item.label()}"
                        }
                    }
                    span { "{format_rub(line.amount)} ₽" }
                }
            }
        }
    }
}
