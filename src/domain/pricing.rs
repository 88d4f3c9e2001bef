use super::entities::{AreaType, Complexity, Material, PriceTable, Surcharge};

/// Coerces a quantity to a usable value: negative, NaN and infinite inputs count as zero.
pub fn sanitize_quantity(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

/// Parses a numeric form field. Empty or unparsable input is zero; a decimal
/// comma is accepted alongside the dot.
pub fn parse_quantity(raw: &str) -> f64 {
    let normalized = raw.trim().replace(',', ".");
    if normalized.is_empty() {
        return 0.0;
    }
    normalized.parse::<f64>().map(sanitize_quantity).unwrap_or(0.0)
}

/// Works that can be switched on and off in the calculator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OptionalWork {
    Demolition,
    Prep,
    Adhesive,
    Grout,
    Waterproofing,
}

impl OptionalWork {
    pub const ALL: [OptionalWork; 5] = [
        OptionalWork::Demolition,
        OptionalWork::Prep,
        OptionalWork::Adhesive,
        OptionalWork::Grout,
        OptionalWork::Waterproofing,
    ];

    /// Works the turnkey package switches on.
    pub const PACKAGE: [OptionalWork; 4] = [
        OptionalWork::Prep,
        OptionalWork::Adhesive,
        OptionalWork::Grout,
        OptionalWork::Waterproofing,
    ];

    pub fn toggle_label(&self) -> &'static str {
        match self {
            OptionalWork::Demolition => "Добавить демонтаж",
            OptionalWork::Prep => "Подготовка/выравнивание",
            OptionalWork::Adhesive => "Клей и расходники",
            OptionalWork::Grout => "Затирка",
            OptionalWork::Waterproofing => "Гидроизоляция",
        }
    }

    pub fn surcharge(&self) -> Surcharge {
        match self {
            OptionalWork::Demolition => Surcharge::Demolition,
            OptionalWork::Prep => Surcharge::Prep,
            OptionalWork::Adhesive => Surcharge::Adhesive,
            OptionalWork::Grout => Surcharge::Grout,
            OptionalWork::Waterproofing => Surcharge::Waterproofing,
        }
    }

    pub fn line_item(&self) -> LineItem {
        match self {
            OptionalWork::Demolition => LineItem::Demolition,
            OptionalWork::Prep => LineItem::Prep,
            OptionalWork::Adhesive => LineItem::Adhesive,
            OptionalWork::Grout => LineItem::Grout,
            OptionalWork::Waterproofing => LineItem::Waterproofing,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WorkToggles {
    pub demolition: bool,
    pub prep: bool,
    pub adhesive: bool,
    pub grout: bool,
    pub waterproofing: bool,
}

impl Default for WorkToggles {
    fn default() -> Self {
        Self {
            demolition: false,
            prep: true,
            adhesive: true,
            grout: true,
            waterproofing: true,
        }
    }
}

impl WorkToggles {
    #[cfg(test)]
    pub fn none() -> Self {
        Self {
            demolition: false,
            prep: false,
            adhesive: false,
            grout: false,
            waterproofing: false,
        }
    }

    pub fn is_enabled(&self, work: OptionalWork) -> bool {
        match work {
            OptionalWork::Demolition => self.demolition,
            OptionalWork::Prep => self.prep,
            OptionalWork::Adhesive => self.adhesive,
            OptionalWork::Grout => self.grout,
            OptionalWork::Waterproofing => self.waterproofing,
        }
    }

    pub fn set(&mut self, work: OptionalWork, enabled: bool) {
        let slot = match work {
            OptionalWork::Demolition => &mut self.demolition,
            OptionalWork::Prep => &mut self.prep,
            OptionalWork::Adhesive => &mut self.adhesive,
            OptionalWork::Grout => &mut self.grout,
            OptionalWork::Waterproofing => &mut self.waterproofing,
        };
        *slot = enabled;
    }
}

/// Everything the customer picked in the calculator.
#[derive(Clone, Debug, PartialEq)]
pub struct EstimateRequest {
    pub area_type: AreaType,
    pub material: Material,
    /// Tiled area, m².
    pub area: f64,
    pub complexity: Complexity,
    pub works: WorkToggles,
    /// When set, waterproofing is billed on the main area.
    pub waterproofing_linked: bool,
    /// Explicit waterproofing area, m²; only read while unlinked.
    pub waterproofing_area: f64,
    pub miter_lm: f64,
    pub sealant_lm: f64,
    pub turnkey: bool,
}

impl Default for EstimateRequest {
    fn default() -> Self {
        Self {
            area_type: AreaType::Bathroom,
            material: Material::Tile,
            area: 6.0,
            complexity: Complexity::Normal,
            works: WorkToggles::default(),
            waterproofing_linked: true,
            waterproofing_area: 6.0,
            miter_lm: 0.0,
            sealant_lm: 0.0,
            turnkey: true,
        }
    }
}

impl EstimateRequest {
    pub fn effective_waterproofing_area(&self) -> f64 {
        if self.waterproofing_linked {
            sanitize_quantity(self.area)
        } else {
            sanitize_quantity(self.waterproofing_area)
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LineItem {
    Base,
    Demolition,
    Prep,
    Adhesive,
    Grout,
    Waterproofing,
    Miter,
    Sealant,
}

impl LineItem {
    pub fn label(&self) -> &'static str {
        match self {
            LineItem::Base => "База",
            LineItem::Demolition => "Демонтаж",
            LineItem::Prep => "Подготовка",
            LineItem::Adhesive => "Клей/расходники",
            LineItem::Grout => "Затирка",
            LineItem::Waterproofing => "Гидроизоляция",
            LineItem::Miter => "Запил 45°",
            LineItem::Sealant => "Силикон",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EstimateLine {
    pub item: LineItem,
    pub amount: f64,
}

/// Cost breakdown derived from a request and a price table. Amounts are not
/// rounded; only the discount is a whole number.
#[derive(Clone, Debug, PartialEq)]
pub struct EstimateResult {
    pub multiplier: f64,
    pub waterproofing_area: f64,
    /// Base line first, then every enabled or non-zero extra in display order.
    pub lines: Vec<EstimateLine>,
    pub subtotal: f64,
    pub discount_pct: f64,
    pub discount: f64,
    pub total: f64,
}

impl EstimateResult {
    /// Amount billed for `item`, zero when it is not part of the estimate.
    #[cfg(test)]
    pub fn cost(&self, item: LineItem) -> f64 {
        self.lines
            .iter()
            .find(|line| line.item == item)
            .map(|line| line.amount)
            .unwrap_or(0.0)
    }

    /// False when turnkey is off or the rounded discount came out as zero.
    pub fn has_discount(&self) -> bool {
        self.discount > 0.0
    }
}

pub fn estimate(request: &EstimateRequest, prices: &PriceTable) -> EstimateResult {
    let area = sanitize_quantity(request.area);
    let multiplier = prices.multiplier(request.complexity);
    let base = area * prices.base_rate(request.area_type, request.material) * multiplier;

    let mut lines = vec![EstimateLine {
        item: LineItem::Base,
        amount: base,
    }];

    let waterproofing_area = request.effective_waterproofing_area();
    for work in OptionalWork::ALL {
        if !request.works.is_enabled(work) {
            continue;
        }
        let quantity = match work {
            OptionalWork::Waterproofing => waterproofing_area,
            _ => area,
        };
        lines.push(EstimateLine {
            item: work.line_item(),
            amount: quantity * prices.surcharge(work.surcharge()),
        });
    }

    let miter_lm = sanitize_quantity(request.miter_lm);
    if miter_lm > 0.0 {
        lines.push(EstimateLine {
            item: LineItem::Miter,
            amount: miter_lm * prices.surcharge(Surcharge::Miter),
        });
    }
    let sealant_lm = sanitize_quantity(request.sealant_lm);
    if sealant_lm > 0.0 {
        lines.push(EstimateLine {
            item: LineItem::Sealant,
            amount: sealant_lm * prices.surcharge(Surcharge::Sealant),
        });
    }

    let subtotal: f64 = lines.iter().map(|line| line.amount).sum();
    let discount_pct = prices.package_discount_pct();
    let discount = if request.turnkey {
        (subtotal * discount_pct / 100.0).round()
    } else {
        0.0
    };
    let total = (subtotal - discount).max(0.0);

    EstimateResult {
        multiplier,
        waterproofing_area,
        lines,
        subtotal,
        discount_pct,
        discount,
        total,
    }
}

/// Room geometry used to derive miter and sealant lengths.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearMeterInputs {
    pub wall_height: f64,
    pub inner_corners: f64,
    pub outer_corners: f64,
    pub floor_perimeter: f64,
    pub extra_sealant: f64,
    pub open_edges: f64,
}

impl Default for LinearMeterInputs {
    fn default() -> Self {
        Self {
            wall_height: 2.5,
            inner_corners: 2.0,
            outer_corners: 0.0,
            floor_perimeter: 0.0,
            extra_sealant: 0.0,
            open_edges: 0.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearMeters {
    pub miter_lm: f64,
    pub sealant_lm: f64,
}

impl LinearMeterInputs {
    /// Miter runs along outer corners and open edges; sealant along inner
    /// corners, the floor-to-wall joint and any extra joints. Rounded to cm.
    pub fn compute(&self) -> LinearMeters {
        let height = sanitize_quantity(self.wall_height);
        let miter = sanitize_quantity(self.outer_corners) * height
            + sanitize_quantity(self.open_edges);
        let sealant = sanitize_quantity(self.inner_corners) * height
            + sanitize_quantity(self.floor_perimeter)
            + sanitize_quantity(self.extra_sealant);
        LinearMeters {
            miter_lm: round_to_cm(miter),
            sealant_lm: round_to_cm(sealant),
        }
    }
}

fn round_to_cm(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Formats a ruble amount rounded to whole rubles with ru-RU digit grouping
/// (no-break space between groups).
pub fn format_rub(amount: f64) -> String {
    let rounded = amount.round();
    let negative = rounded < 0.0;
    let digits = format!("{:.0}", rounded.abs());

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 * 2);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push('\u{a0}');
        }
        grouped.push(ch);
    }

    if negative {
        format!("-{grouped}")
    } else {
        grouped
    }
}

/// Shortest representation of a quantity: `6`, `6.5`, `2.75`.
pub fn format_quantity(value: f64) -> String {
    format!("{}", sanitize_quantity(value))
}

/// Text handed to the messaging app: the selections, the enabled works and
/// the calculated total.
pub fn format_summary_message(request: &EstimateRequest, result: &EstimateResult) -> String {
    let mut message = format!(
        "Здравствуйте! Хочу рассчитать работы: {}. Материал: {}. Площадь: {} м². Сложность: {}. ",
        request.area_type.name(),
        request.material.inline_name(),
        format_quantity(request.area),
        request.complexity.inline_name(),
    );

    let works = &request.works;
    if works.demolition {
        message.push_str("Демонтаж: да. ");
    }
    if works.prep {
        message.push_str("Подготовка: да. ");
    }
    if works.adhesive {
        message.push_str("Клей: да. ");
    }
    if works.grout {
        message.push_str("Затирка: да. ");
    }
    if works.waterproofing {
        message.push_str(&format!(
            "Гидроизоляция: {} м². ",
            format_quantity(result.waterproofing_area)
        ));
    }
    if sanitize_quantity(request.miter_lm) > 0.0 {
        message.push_str(&format!(
            "Запил 45°: {} п.м. ",
            format_quantity(request.miter_lm)
        ));
    }
    if sanitize_quantity(request.sealant_lm) > 0.0 {
        message.push_str(&format!(
            "Силикон: {} п.м. ",
            format_quantity(request.sealant_lm)
        ));
    }
    if request.turnkey {
        message.push_str(&format!(
            "Пакет «под ключ», скидка {}%. ",
            format_quantity(result.discount_pct)
        ));
    }

    message.push_str(&format!(
        "Сумма по калькулятору: ~{} ₽. Когда можно сделать замер?",
        format_rub(result.total)
    ));
    message
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bare_request(area: f64) -> EstimateRequest {
        EstimateRequest {
            area,
            works: WorkToggles::none(),
            turnkey: false,
            ..EstimateRequest::default()
        }
    }

    #[test]
    fn base_cost_is_area_times_rate_times_multiplier() {
        let mut prices = PriceTable::default();
        prices.set_base_rate(AreaType::Floor, Material::Porcelain, 2000.0);
        prices.coefficients.set(Complexity::LargeFormat, 1.15);

        let request = EstimateRequest {
            area_type: AreaType::Floor,
            material: Material::Porcelain,
            complexity: Complexity::LargeFormat,
            ..bare_request(12.5)
        };
        let result = estimate(&request, &prices);

        assert_eq!(result.cost(LineItem::Base), 12.5 * 2000.0 * 1.15);
        assert_eq!(result.multiplier, 1.15);
    }

    #[test]
    fn bare_request_totals_base_only() {
        let prices = PriceTable::default();
        let result = estimate(&bare_request(4.0), &prices);

        assert_eq!(result.lines.len(), 1);
        assert_eq!(result.subtotal, 7200.0);
        assert_eq!(result.discount, 0.0);
        assert_eq!(result.total, 7200.0);
    }

    #[test]
    fn worked_example_with_turnkey_discount() {
        let prices = PriceTable::default();
        let request = EstimateRequest {
            material: Material::Porcelain,
            ..EstimateRequest::default()
        };
        let result = estimate(&request, &prices);

        assert_eq!(result.cost(LineItem::Base), 10800.0);
        assert_eq!(result.cost(LineItem::Prep), 840.0);
        assert_eq!(result.cost(LineItem::Adhesive), 1320.0);
        assert_eq!(result.cost(LineItem::Grout), 780.0);
        assert_eq!(result.cost(LineItem::Waterproofing), 1500.0);
        assert_eq!(result.cost(LineItem::Demolition), 0.0);
        assert_eq!(result.subtotal, 15240.0);
        assert_eq!(result.discount, 762.0);
        assert_eq!(result.total, 14478.0);
    }

    #[test]
    fn discount_rounds_to_whole_rubles() {
        let mut prices = PriceTable::default();
        prices.extras.set_package_discount_pct(7.0);
        let request = EstimateRequest {
            turnkey: true,
            ..bare_request(1.0)
        };
        // 1800 * 7% = 126
        assert_eq!(estimate(&request, &prices).discount, 126.0);

        prices.set_base_rate(AreaType::Bathroom, Material::Tile, 1805.0);
        // 1805 * 7% = 126.35
        let result = estimate(&request, &prices);
        assert_eq!(result.discount, 126.0);
        assert_eq!(result.total, 1805.0 - 126.0);
    }

    #[test]
    fn total_never_goes_negative() {
        let mut prices = PriceTable::default();
        prices.extras.set_package_discount_pct(150.0);
        let request = EstimateRequest {
            turnkey: true,
            ..bare_request(2.0)
        };
        let result = estimate(&request, &prices);
        assert_eq!(result.discount, 5400.0);
        assert_eq!(result.total, 0.0);
    }

    #[test]
    fn unlinked_waterproofing_uses_its_own_area() {
        let prices = PriceTable::default();
        let mut request = bare_request(6.0);
        request.works.waterproofing = true;
        request.waterproofing_linked = false;
        request.waterproofing_area = 9.5;

        let result = estimate(&request, &prices);
        assert_eq!(result.waterproofing_area, 9.5);
        assert_eq!(result.cost(LineItem::Waterproofing), 9.5 * 250.0);
    }

    #[test]
    fn miter_and_sealant_are_gated_by_quantity_only() {
        let prices = PriceTable::default();
        let mut request = bare_request(0.0);
        assert_eq!(estimate(&request, &prices).total, 0.0);

        request.miter_lm = 2.5;
        request.sealant_lm = 4.0;
        let result = estimate(&request, &prices);
        assert_eq!(result.cost(LineItem::Miter), 625.0);
        assert_eq!(result.cost(LineItem::Sealant), 360.0);
        assert_eq!(result.total, 985.0);
    }

    #[test]
    fn invalid_quantities_count_as_zero() {
        let prices = PriceTable::default();
        let mut request = bare_request(f64::NAN);
        request.miter_lm = -3.0;
        request.works.prep = true;

        let result = estimate(&request, &prices);
        assert_eq!(result.total, 0.0);
        assert_eq!(result.cost(LineItem::Miter), 0.0);
    }

    #[test]
    fn discount_rounds_half_away_from_zero() {
        let request = EstimateRequest {
            area: 6.5,
            waterproofing_area: 6.5,
            ..EstimateRequest::default()
        };
        let result = estimate(&request, &PriceTable::default());

        assert_eq!(result.subtotal, 16510.0);
        assert_eq!(result.discount, 826.0);
        assert_eq!(result.total, 15684.0);
        assert!(result.has_discount());
    }

    #[test]
    fn no_discount_without_turnkey() {
        let request = EstimateRequest {
            turnkey: false,
            ..EstimateRequest::default()
        };
        let result = estimate(&request, &PriceTable::default());
        assert!(!result.has_discount());
        assert_eq!(result.total, result.subtotal);
    }

    #[test]
    fn recomputing_is_idempotent() {
        let prices = PriceTable::default();
        let request = EstimateRequest {
            complexity: Complexity::Mosaic,
            miter_lm: 1.3,
            ..EstimateRequest::default()
        };
        assert_eq!(estimate(&request, &prices), estimate(&request, &prices));
    }

    #[test]
    fn parse_quantity_defaults_to_zero() {
        assert_eq!(parse_quantity(""), 0.0);
        assert_eq!(parse_quantity("abc"), 0.0);
        assert_eq!(parse_quantity("-4"), 0.0);
        assert_eq!(parse_quantity(" 6.5 "), 6.5);
        assert_eq!(parse_quantity("2,75"), 2.75);
    }

    #[test]
    fn linear_meter_helper_formulas() {
        let inputs = LinearMeterInputs {
            wall_height: 2.7,
            inner_corners: 3.0,
            outer_corners: 2.0,
            floor_perimeter: 8.4,
            extra_sealant: 1.5,
            open_edges: 0.6,
        };
        let meters = inputs.compute();
        assert_eq!(meters.miter_lm, 6.0);
        assert_eq!(meters.sealant_lm, 18.0);

        let defaults = LinearMeterInputs::default().compute();
        assert_eq!(defaults.miter_lm, 0.0);
        assert_eq!(defaults.sealant_lm, 5.0);
    }

    #[test]
    fn helper_rounds_to_centimeters() {
        let inputs = LinearMeterInputs {
            wall_height: 2.333,
            inner_corners: 1.0,
            ..LinearMeterInputs::default()
        };
        assert_eq!(inputs.compute().sealant_lm, 2.33);
    }

    #[test]
    fn rub_formatting_groups_thousands() {
        assert_eq!(format_rub(0.0), "0");
        assert_eq!(format_rub(762.0), "762");
        assert_eq!(format_rub(14478.0), "14\u{a0}478");
        assert_eq!(format_rub(1234567.4), "1\u{a0}234\u{a0}567");
        assert_eq!(format_rub(999.5), "1\u{a0}000");
    }

    #[test]
    fn quantity_formatting_is_shortest() {
        assert_eq!(format_quantity(6.0), "6");
        assert_eq!(format_quantity(6.5), "6.5");
        assert_eq!(format_quantity(-1.0), "0");
    }

    #[test]
    fn summary_message_lists_selected_works() {
        let prices = PriceTable::default();
        let request = EstimateRequest {
            material: Material::Porcelain,
            ..EstimateRequest::default()
        };
        let result = estimate(&request, &prices);
        let message = format_summary_message(&request, &result);

        assert_eq!(
            message,
            "Здравствуйте! Хочу рассчитать работы: Санузел. Материал: керамогранит. \
             Площадь: 6 м². Сложность: стандарт. Подготовка: да. Клей: да. Затирка: да. \
             Гидроизоляция: 6 м². Пакет «под ключ», скидка 5%. \
             Сумма по калькулятору: ~14\u{a0}478 ₽. Когда можно сделать замер?"
        );
    }

    #[test]
    fn summary_message_mentions_linear_works_only_when_present() {
        let prices = PriceTable::default();
        let mut request = EstimateRequest {
            area_type: AreaType::Backsplash,
            complexity: Complexity::Mosaic,
            works: WorkToggles::none(),
            turnkey: false,
            ..EstimateRequest::default()
        };
        request.works.demolition = true;
        request.miter_lm = 1.5;

        let result = estimate(&request, &prices);
        let message = format_summary_message(&request, &result);

        assert!(message.contains("Фартук кухни"));
        assert!(message.contains("мозаика/рисунок"));
        assert!(message.contains("Демонтаж: да. "));
        assert!(message.contains("Запил 45°: 1.5 п.м. "));
        assert!(!message.contains("Силикон"));
        assert!(!message.contains("под ключ"));
    }

    #[test]
    fn summary_message_uses_unlinked_waterproofing_area_and_sealant() {
        let request = EstimateRequest {
            waterproofing_linked: false,
            waterproofing_area: 4.0,
            sealant_lm: 3.25,
            ..EstimateRequest::default()
        };
        let result = estimate(&request, &PriceTable::default());
        let message = format_summary_message(&request, &result);

        assert!(message.contains("Площадь: 6 м². "));
        assert!(message.contains("Гидроизоляция: 4 м². "));
        assert!(message.contains("Силикон: 3.25 п.м. "));
        assert!(!message.contains("Запил"));
    }
}
