pub mod calculator;
pub mod contact_links;
pub mod estimate_breakdown;
pub mod form_fields;
pub mod gallery;
pub mod linear_meter_helper;
pub mod price_editor;
pub mod toast;
