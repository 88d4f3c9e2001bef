//! Pricing, calculator session and gallery logic; no UI types in here.

pub mod app_state;
pub mod entities;
pub mod gallery;
pub mod pricing;

#[allow(unused_imports)]
pub use app_state::CalculatorState;
#[allow(unused_imports)]
pub use entities::{
    AreaType, BaseRates, Complexity, ComplexityCoefficients, ExtraRates, Material, MaterialRates,
    PriceTable, PriceTableError, SelectionError, Surcharge,
};
pub use gallery::{GalleryImage, Lightbox, GALLERY};
#[allow(unused_imports)]
pub use pricing::{
    estimate, format_quantity, format_rub, format_summary_message, parse_quantity,
    EstimateLine, EstimateRequest, EstimateResult, LineItem, LinearMeterInputs, LinearMeters,
    OptionalWork, WorkToggles,
};
