//! Optional read-only price overrides.
//!
//! The calculator never writes prices back; this file only replaces the
//! built-in defaults the session starts from and resets to.

use std::{collections::BTreeMap, env, fs, io, path::PathBuf};

use directories::ProjectDirs;
use serde::Deserialize;
use serde_json::Error as SerdeError;
use tracing::{debug, info};

use crate::domain::{
    AreaType, Complexity, Material, PriceTable, PriceTableError, SelectionError, Surcharge,
};

const APP_QUALIFIER: &str = "ru";
const APP_ORG: &str = "MasterPlitkaVL";
const APP_NAME: &str = "PlitkaSite";
const PRICES_FILENAME: &str = "prices.json";

/// Points at a prices file outside the platform config directory.
pub const PRICES_FILE_ENV: &str = "PLITKA_PRICES_FILE";

const PACKAGE_DISCOUNT_KEY: &str = "package_discount_pct";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serde(#[from] SerdeError),
    #[error(transparent)]
    Selection(#[from] SelectionError),
    #[error(transparent)]
    PriceTable(#[from] PriceTableError),
    #[error("unknown rate {0:?}")]
    UnknownRate(String),
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct PriceOverrides {
    base: BTreeMap<String, BTreeMap<String, f64>>,
    extras: BTreeMap<String, f64>,
    coefficients: BTreeMap<String, f64>,
}

fn prices_file() -> Option<PathBuf> {
    if let Some(path) = env::var_os(PRICES_FILE_ENV) {
        return Some(PathBuf::from(path));
    }
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
        .map(|dirs| dirs.config_dir().join(PRICES_FILENAME))
}

/// Reads the overrides file. `Ok(None)` when there is nothing to load.
pub fn load_price_overrides() -> Result<Option<PriceTable>, ConfigError> {
    let Some(path) = prices_file() else {
        debug!("No config directory on this platform; using built-in prices");
        return Ok(None);
    };

    let data = match fs::read_to_string(&path) {
        Ok(data) => data,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            debug!("No price overrides at {}", path.display());
            return Ok(None);
        }
        Err(err) => return Err(err.into()),
    };

    let table = parse_price_overrides(&data)?;
    info!("Loaded price overrides from {}", path.display());
    Ok(Some(table))
}

/// Builds a price table from `json`. Rates the file leaves out are zero, so a
/// usable file lists the full price list. Any unknown zone, material,
/// complexity or rate name rejects the whole file.
pub fn parse_price_overrides(json: &str) -> Result<PriceTable, ConfigError> {
    let overrides: PriceOverrides = serde_json::from_str(json)?;
    let mut table = PriceTable::ZERO;

    for (zone, row) in &overrides.base {
        let area_type: AreaType = zone.parse()?;
        for (material, value) in row {
            let material: Material = material.parse()?;
            check_rate(format!("base.{area_type}.{material}"), *value)?;
            table.set_base_rate(area_type, material, *value);
        }
    }

    for (key, value) in &overrides.extras {
        check_rate(format!("extras.{key}"), *value)?;
        if key == PACKAGE_DISCOUNT_KEY {
            table.extras.set_package_discount_pct(*value);
            continue;
        }
        let surcharge = Surcharge::ALL
            .into_iter()
            .find(|surcharge| surcharge.key() == key)
            .ok_or_else(|| ConfigError::UnknownRate(key.clone()))?;
        table.extras.set(surcharge, *value);
    }

    for (key, value) in &overrides.coefficients {
        let complexity: Complexity = key.parse()?;
        check_rate(format!("coefficients.{complexity}"), *value)?;
        table.coefficients.set(complexity, *value);
    }

    table.validate()?;
    Ok(table)
}

fn check_rate(field: String, value: f64) -> Result<(), PriceTableError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(PriceTableError::InvalidRate { field, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_is_an_all_zero_table() {
        assert_eq!(parse_price_overrides("{}").unwrap(), PriceTable::ZERO);
    }

    #[test]
    fn rates_left_out_read_as_zero() {
        let table = parse_price_overrides(r#"{ "extras": { "grout_per_m2": 150 } }"#).unwrap();
        assert_eq!(table.surcharge(Surcharge::Grout), 150.0);
        assert_eq!(table.surcharge(Surcharge::Prep), 0.0);
        assert_eq!(table.base_rate(AreaType::Bathroom, Material::Tile), 0.0);
        assert_eq!(table.multiplier(Complexity::Normal), 0.0);
    }

    #[test]
    fn listed_rates_are_applied() {
        let table = parse_price_overrides(
            r#"{
                "base": { "floor": { "porcelain": 2200 } },
                "extras": { "sealant_per_lm": 110, "package_discount_pct": 7 },
                "coefficients": { "mosaic": 1.35 }
            }"#,
        )
        .unwrap();

        assert_eq!(table.base_rate(AreaType::Floor, Material::Porcelain), 2200.0);
        assert_eq!(table.base_rate(AreaType::Floor, Material::Tile), 0.0);
        assert_eq!(table.surcharge(Surcharge::Sealant), 110.0);
        assert_eq!(table.surcharge(Surcharge::Miter), 0.0);
        assert_eq!(table.package_discount_pct(), 7.0);
        assert_eq!(table.multiplier(Complexity::Mosaic), 1.35);
    }

    #[test]
    fn unknown_zone_is_a_configuration_error() {
        let err = parse_price_overrides(r#"{ "base": { "terrace": { "tile": 1 } } }"#)
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Selection(SelectionError::Unsupported { kind: "area type", .. })
        ));
    }

    #[test]
    fn unknown_rate_is_rejected() {
        let err = parse_price_overrides(r#"{ "extras": { "grout": 10 } }"#).unwrap_err();
        assert!(matches!(err, ConfigError::UnknownRate(ref key) if key == "grout"));
    }

    #[test]
    fn negative_rate_is_rejected_not_clamped() {
        let err = parse_price_overrides(r#"{ "coefficients": { "diagonal": -1.1 } }"#)
            .unwrap_err();
        match err {
            ConfigError::PriceTable(PriceTableError::InvalidRate { field, value }) => {
                assert_eq!(field, "coefficients.diagonal");
                assert_eq!(value, -1.1);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn malformed_json_surfaces_serde_error() {
        assert!(matches!(
            parse_price_overrides("{ \"base\": 3 }"),
            Err(ConfigError::Serde(_))
        ));
        assert!(matches!(
            parse_price_overrides(r#"{ "discount": 5 }"#),
            Err(ConfigError::Serde(_))
        ));
    }
}
