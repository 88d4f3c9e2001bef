use super::{
    entities::{AreaType, Complexity, Material, PriceTable},
    pricing::{
        estimate, format_summary_message, sanitize_quantity, EstimateRequest, EstimateResult,
        LinearMeterInputs, LinearMeters, OptionalWork,
    },
};

/// The single interactive calculator session. Every mutation goes through a
/// method here so linked fields stay consistent; callers recompute with
/// [`CalculatorState::estimate`] afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct CalculatorState {
    pub prices: PriceTable,
    /// Table restored by "reset": built-in defaults or the configured overrides.
    pub default_prices: PriceTable,
    pub request: EstimateRequest,
    pub helper: LinearMeterInputs,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self::new(PriceTable::default())
    }
}

impl CalculatorState {
    pub fn new(default_prices: PriceTable) -> Self {
        Self {
            prices: default_prices,
            default_prices,
            request: EstimateRequest::default(),
            helper: LinearMeterInputs::default(),
        }
    }

    pub fn estimate(&self) -> EstimateResult {
        estimate(&self.request, &self.prices)
    }

    pub fn summary_message(&self) -> String {
        format_summary_message(&self.request, &self.estimate())
    }

    pub fn set_area_type(&mut self, area_type: AreaType) {
        self.request.area_type = area_type;
    }

    pub fn set_material(&mut self, material: Material) {
        self.request.material = material;
    }

    pub fn set_complexity(&mut self, complexity: Complexity) {
        self.request.complexity = complexity;
    }

    pub fn set_area(&mut self, area: f64) {
        self.request.area = sanitize_quantity(area);
        self.sync_waterproofing_area();
    }

    pub fn set_work(&mut self, work: OptionalWork, enabled: bool) {
        self.request.works.set(work, enabled);
    }

    pub fn set_waterproofing_linked(&mut self, linked: bool) {
        self.request.waterproofing_linked = linked;
        self.sync_waterproofing_area();
    }

    /// Only meaningful while unlinked; a linked area is overwritten on the next sync.
    pub fn set_waterproofing_area(&mut self, area: f64) {
        self.request.waterproofing_area = sanitize_quantity(area);
        self.sync_waterproofing_area();
    }

    /// Switching the package on enables its works and re-links waterproofing.
    /// Switching it off leaves every toggle as it is.
    pub fn set_turnkey(&mut self, turnkey: bool) {
        self.request.turnkey = turnkey;
        if turnkey {
            for work in OptionalWork::PACKAGE {
                self.request.works.set(work, true);
            }
            self.set_waterproofing_linked(true);
        }
    }

    pub fn set_miter_lm(&mut self, meters: f64) {
        self.request.miter_lm = sanitize_quantity(meters);
    }

    pub fn set_sealant_lm(&mut self, meters: f64) {
        self.request.sealant_lm = sanitize_quantity(meters);
    }

    /// Overwrites the miter and sealant quantities from the room geometry.
    pub fn apply_linear_meter_helper(&mut self) -> LinearMeters {
        let meters = self.helper.compute();
        self.request.miter_lm = meters.miter_lm;
        self.request.sealant_lm = meters.sealant_lm;
        meters
    }

    pub fn reset_prices(&mut self) {
        self.prices = self.default_prices;
    }

    /// Replaces the defaults (e.g. after loading overrides) and the live table with them.
    pub fn install_default_prices(&mut self, prices: PriceTable) {
        self.default_prices = prices;
        self.prices = prices;
    }

    pub fn prices_modified(&self) -> bool {
        self.prices != self.default_prices
    }

    fn sync_waterproofing_area(&mut self) {
        if self.request.waterproofing_linked {
            self.request.waterproofing_area = self.request.area;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::pricing::LineItem;

    #[test]
    fn linked_waterproofing_follows_area() {
        let mut state = CalculatorState::default();
        for area in [0.0, 3.2, 11.0, -5.0, 7.75] {
            state.set_area(area);
            assert_eq!(state.request.waterproofing_area, state.request.area);
        }
        assert_eq!(state.request.area, 7.75);
    }

    #[test]
    fn unlinked_waterproofing_keeps_its_area() {
        let mut state = CalculatorState::default();
        state.set_waterproofing_linked(false);
        state.set_waterproofing_area(4.0);
        state.set_area(10.0);

        assert_eq!(state.request.waterproofing_area, 4.0);
        assert_eq!(state.estimate().waterproofing_area, 4.0);

        state.set_waterproofing_linked(true);
        assert_eq!(state.request.waterproofing_area, 10.0);
    }

    #[test]
    fn turnkey_is_a_one_shot_default() {
        let mut state = CalculatorState::default();
        state.set_turnkey(false);
        for work in OptionalWork::PACKAGE {
            state.set_work(work, false);
        }
        state.set_waterproofing_linked(false);
        state.set_waterproofing_area(2.0);

        state.set_turnkey(true);
        for work in OptionalWork::PACKAGE {
            assert!(state.request.works.is_enabled(work));
        }
        assert!(!state.request.works.demolition);
        assert!(state.request.waterproofing_linked);
        assert_eq!(state.request.waterproofing_area, state.request.area);

        // the user can still opt out afterwards
        state.set_work(OptionalWork::Grout, false);
        assert!(state.request.turnkey);
        assert_eq!(state.estimate().cost(LineItem::Grout), 0.0);

        state.set_turnkey(false);
        assert!(state.request.waterproofing_linked);
        assert!(state.request.works.prep);
    }

    #[test]
    fn helper_overwrites_quantities_once() {
        let mut state = CalculatorState::default();
        state.set_miter_lm(9.0);
        state.helper.outer_corners = 2.0;
        state.helper.open_edges = 1.0;

        let meters = state.apply_linear_meter_helper();
        assert_eq!(meters.miter_lm, 6.0);
        assert_eq!(state.request.miter_lm, 6.0);
        assert_eq!(state.request.sealant_lm, 5.0);

        // editing the geometry afterwards does not rebind
        state.helper.outer_corners = 4.0;
        assert_eq!(state.request.miter_lm, 6.0);
    }

    #[test]
    fn reset_restores_default_prices() {
        let mut state = CalculatorState::default();
        state
            .prices
            .set_base_rate(AreaType::Floor, Material::Tile, 2500.0);
        assert!(state.prices_modified());

        state.reset_prices();
        assert!(!state.prices_modified());
        assert_eq!(state.prices, PriceTable::default());
    }

    #[test]
    fn price_edits_flow_into_the_estimate() {
        let mut state = CalculatorState::default();
        let before = state.estimate().total;
        state
            .prices
            .set_base_rate(AreaType::Bathroom, Material::Tile, 2000.0);
        assert!(state.estimate().total > before);
        assert!(state.summary_message().contains("Сумма по калькулятору"));
    }
}
