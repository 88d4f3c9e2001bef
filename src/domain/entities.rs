use std::{fmt, str::FromStr};

use thiserror::Error;

/// Out-of-enum selection names are refused instead of falling back to a default.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("unsupported {kind} selection: {value:?}")]
    Unsupported { kind: &'static str, value: String },
}

/// Zone of the works; picks the row of the base rate table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum AreaType {
    #[default]
    Bathroom,
    Backsplash,
    Floor,
}

impl AreaType {
    pub const ALL: [AreaType; 3] = [AreaType::Bathroom, AreaType::Backsplash, AreaType::Floor];

    pub fn key(&self) -> &'static str {
        match self {
            AreaType::Bathroom => "bathroom",
            AreaType::Backsplash => "backsplash",
            AreaType::Floor => "floor",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            AreaType::Bathroom => "Санузел",
            AreaType::Backsplash => "Фартук кухни",
            AreaType::Floor => "Пол",
        }
    }

    /// Compact label for the selector buttons.
    pub fn short_name(&self) -> &'static str {
        match self {
            AreaType::Backsplash => "Фартук",
            other => other.name(),
        }
    }
}

/// Finishing material; picks the column of the base rate table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Material {
    #[default]
    Tile,
    Porcelain,
}

impl Material {
    pub const ALL: [Material; 2] = [Material::Tile, Material::Porcelain];

    pub fn key(&self) -> &'static str {
        match self {
            Material::Tile => "tile",
            Material::Porcelain => "porcelain",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Material::Tile => "Кафель",
            Material::Porcelain => "Керамогранит",
        }
    }

    /// Lower-case form used inside sentences.
    pub fn inline_name(&self) -> &'static str {
        match self {
            Material::Tile => "кафель",
            Material::Porcelain => "керамогранит",
        }
    }
}

/// Laying pattern; selects the cost multiplier.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Complexity {
    #[default]
    Normal,
    Diagonal,
    LargeFormat,
    Mosaic,
}

impl Complexity {
    pub const ALL: [Complexity; 4] = [
        Complexity::Normal,
        Complexity::Diagonal,
        Complexity::LargeFormat,
        Complexity::Mosaic,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Complexity::Normal => "normal",
            Complexity::Diagonal => "diagonal",
            Complexity::LargeFormat => "large_format",
            Complexity::Mosaic => "mosaic",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Complexity::Normal => "Стандарт",
            Complexity::Diagonal => "Диагональ",
            Complexity::LargeFormat => "Крупный формат",
            Complexity::Mosaic => "Мозаика",
        }
    }

    /// Wording used in the summary message.
    pub fn inline_name(&self) -> &'static str {
        match self {
            Complexity::Normal => "стандарт",
            Complexity::Diagonal => "диагональ",
            Complexity::LargeFormat => "крупный формат",
            Complexity::Mosaic => "мозаика/рисунок",
        }
    }
}

macro_rules! selection_from_str {
    ($ty:ty, $kind:literal) => {
        impl FromStr for $ty {
            type Err = SelectionError;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                let wanted = value.trim();
                <$ty>::ALL
                    .into_iter()
                    .find(|candidate| candidate.key().eq_ignore_ascii_case(wanted))
                    .ok_or_else(|| SelectionError::Unsupported {
                        kind: $kind,
                        value: value.to_string(),
                    })
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.key())
            }
        }
    };
}

selection_from_str!(AreaType, "area type");
selection_from_str!(Material, "material");
selection_from_str!(Complexity, "complexity");

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PriceTableError {
    #[error("rate {field} must be a non-negative number, got {value}")]
    InvalidRate { field: String, value: f64 },
}

/// Clamps user input to a valid rate: negative, NaN and infinite values become zero.
pub fn sanitize_rate(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MaterialRates {
    pub tile: f64,
    pub porcelain: f64,
}

impl Default for MaterialRates {
    fn default() -> Self {
        Self {
            tile: 1800.0,
            porcelain: 1800.0,
        }
    }
}

impl MaterialRates {
    pub const ZERO: MaterialRates = MaterialRates {
        tile: 0.0,
        porcelain: 0.0,
    };

    pub fn get(&self, material: Material) -> f64 {
        match material {
            Material::Tile => self.tile,
            Material::Porcelain => self.porcelain,
        }
    }

    pub fn set(&mut self, material: Material, value: f64) {
        let slot = match material {
            Material::Tile => &mut self.tile,
            Material::Porcelain => &mut self.porcelain,
        };
        *slot = sanitize_rate(value);
    }
}

/// Base laying rates in ₽/m², one row per zone.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BaseRates {
    pub bathroom: MaterialRates,
    pub backsplash: MaterialRates,
    pub floor: MaterialRates,
}

impl BaseRates {
    pub const ZERO: BaseRates = BaseRates {
        bathroom: MaterialRates::ZERO,
        backsplash: MaterialRates::ZERO,
        floor: MaterialRates::ZERO,
    };

    pub fn row(&self, area_type: AreaType) -> &MaterialRates {
        match area_type {
            AreaType::Bathroom => &self.bathroom,
            AreaType::Backsplash => &self.backsplash,
            AreaType::Floor => &self.floor,
        }
    }

    pub fn row_mut(&mut self, area_type: AreaType) -> &mut MaterialRates {
        match area_type {
            AreaType::Bathroom => &mut self.bathroom,
            AreaType::Backsplash => &mut self.backsplash,
            AreaType::Floor => &mut self.floor,
        }
    }
}

/// Optional works billed per square meter or per linear meter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Surcharge {
    Demolition,
    Waterproofing,
    Prep,
    Adhesive,
    Grout,
    Miter,
    Sealant,
}

impl Surcharge {
    pub const ALL: [Surcharge; 7] = [
        Surcharge::Demolition,
        Surcharge::Waterproofing,
        Surcharge::Prep,
        Surcharge::Adhesive,
        Surcharge::Grout,
        Surcharge::Miter,
        Surcharge::Sealant,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Surcharge::Demolition => "demolition_per_m2",
            Surcharge::Waterproofing => "waterproofing_per_m2",
            Surcharge::Prep => "prep_per_m2",
            Surcharge::Adhesive => "adhesive_per_m2",
            Surcharge::Grout => "grout_per_m2",
            Surcharge::Miter => "miter_per_lm",
            Surcharge::Sealant => "sealant_per_lm",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Surcharge::Demolition => "Демонтаж",
            Surcharge::Waterproofing => "Гидроизоляция",
            Surcharge::Prep => "Подготовка",
            Surcharge::Adhesive => "Клей и расходники",
            Surcharge::Grout => "Затирка",
            Surcharge::Miter => "Запил 45°",
            Surcharge::Sealant => "Силикон",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            Surcharge::Miter | Surcharge::Sealant => "₽/п.м",
            _ => "₽/м²",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ExtraRates {
    pub demolition_per_m2: f64,
    pub waterproofing_per_m2: f64,
    pub prep_per_m2: f64,
    pub adhesive_per_m2: f64,
    pub grout_per_m2: f64,
    pub miter_per_lm: f64,
    pub sealant_per_lm: f64,
    pub package_discount_pct: f64,
}

impl Default for ExtraRates {
    fn default() -> Self {
        Self {
            demolition_per_m2: 200.0,
            waterproofing_per_m2: 250.0,
            prep_per_m2: 140.0,
            adhesive_per_m2: 220.0,
            grout_per_m2: 130.0,
            miter_per_lm: 250.0,
            sealant_per_lm: 90.0,
            package_discount_pct: 5.0,
        }
    }
}

impl ExtraRates {
    pub const ZERO: ExtraRates = ExtraRates {
        demolition_per_m2: 0.0,
        waterproofing_per_m2: 0.0,
        prep_per_m2: 0.0,
        adhesive_per_m2: 0.0,
        grout_per_m2: 0.0,
        miter_per_lm: 0.0,
        sealant_per_lm: 0.0,
        package_discount_pct: 0.0,
    };

    pub fn get(&self, surcharge: Surcharge) -> f64 {
        match surcharge {
            Surcharge::Demolition => self.demolition_per_m2,
            Surcharge::Waterproofing => self.waterproofing_per_m2,
            Surcharge::Prep => self.prep_per_m2,
            Surcharge::Adhesive => self.adhesive_per_m2,
            Surcharge::Grout => self.grout_per_m2,
            Surcharge::Miter => self.miter_per_lm,
            Surcharge::Sealant => self.sealant_per_lm,
        }
    }

    pub fn set(&mut self, surcharge: Surcharge, value: f64) {
        let slot = match surcharge {
            Surcharge::Demolition => &mut self.demolition_per_m2,
            Surcharge::Waterproofing => &mut self.waterproofing_per_m2,
            Surcharge::Prep => &mut self.prep_per_m2,
            Surcharge::Adhesive => &mut self.adhesive_per_m2,
            Surcharge::Grout => &mut self.grout_per_m2,
            Surcharge::Miter => &mut self.miter_per_lm,
            Surcharge::Sealant => &mut self.sealant_per_lm,
        };
        *slot = sanitize_rate(value);
    }

    pub fn set_package_discount_pct(&mut self, value: f64) {
        self.package_discount_pct = sanitize_rate(value);
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ComplexityCoefficients {
    pub normal: f64,
    pub diagonal: f64,
    pub large_format: f64,
    pub mosaic: f64,
}

impl Default for ComplexityCoefficients {
    fn default() -> Self {
        Self {
            normal: 1.0,
            diagonal: 1.1,
            large_format: 1.15,
            mosaic: 1.2,
        }
    }
}

impl ComplexityCoefficients {
    pub const ZERO: ComplexityCoefficients = ComplexityCoefficients {
        normal: 0.0,
        diagonal: 0.0,
        large_format: 0.0,
        mosaic: 0.0,
    };

    pub fn get(&self, complexity: Complexity) -> f64 {
        match complexity {
            Complexity::Normal => self.normal,
            Complexity::Diagonal => self.diagonal,
            Complexity::LargeFormat => self.large_format,
            Complexity::Mosaic => self.mosaic,
        }
    }

    pub fn set(&mut self, complexity: Complexity, value: f64) {
        let slot = match complexity {
            Complexity::Normal => &mut self.normal,
            Complexity::Diagonal => &mut self.diagonal,
            Complexity::LargeFormat => &mut self.large_format,
            Complexity::Mosaic => &mut self.mosaic,
        };
        *slot = sanitize_rate(value);
    }
}

/// Editable price list driving the estimator. Never persisted; the session
/// starts from [`PriceTable::default`] or the configured overrides.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PriceTable {
    pub base: BaseRates,
    pub extras: ExtraRates,
    pub coefficients: ComplexityCoefficients,
}

impl PriceTable {
    /// Starting point for configured tables: a rate the file leaves out is zero.
    pub const ZERO: PriceTable = PriceTable {
        base: BaseRates::ZERO,
        extras: ExtraRates::ZERO,
        coefficients: ComplexityCoefficients::ZERO,
    };

    pub fn base_rate(&self, area_type: AreaType, material: Material) -> f64 {
        self.base.row(area_type).get(material)
    }

    pub fn set_base_rate(&mut self, area_type: AreaType, material: Material, value: f64) {
        self.base.row_mut(area_type).set(material, value);
    }

    pub fn multiplier(&self, complexity: Complexity) -> f64 {
        self.coefficients.get(complexity)
    }

    pub fn surcharge(&self, surcharge: Surcharge) -> f64 {
        self.extras.get(surcharge)
    }

    pub fn package_discount_pct(&self) -> f64 {
        self.extras.package_discount_pct
    }

    /// Checks every rate, reporting the first one that is negative or not finite.
    pub fn validate(&self) -> Result<(), PriceTableError> {
        let mut fields = Vec::new();
        for area_type in AreaType::ALL {
            for material in Material::ALL {
                fields.push((
                    format!("base.{}.{}", area_type.key(), material.key()),
                    self.base_rate(area_type, material),
                ));
            }
        }
        for surcharge in Surcharge::ALL {
            fields.push((format!("extras.{}", surcharge.key()), self.surcharge(surcharge)));
        }
        fields.push((
            "extras.package_discount_pct".to_string(),
            self.package_discount_pct(),
        ));
        for complexity in Complexity::ALL {
            fields.push((
                format!("coefficients.{}", complexity.key()),
                self.multiplier(complexity),
            ));
        }

        match fields
            .into_iter()
            .find(|(_, value)| !value.is_finite() || *value < 0.0)
        {
            Some((field, value)) => Err(PriceTableError::InvalidRate { field, value }),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selections_parse_their_keys() {
        assert_eq!("bathroom".parse::<AreaType>(), Ok(AreaType::Bathroom));
        assert_eq!(" Porcelain ".parse::<Material>(), Ok(Material::Porcelain));
        assert_eq!("large_format".parse::<Complexity>(), Ok(Complexity::LargeFormat));
    }

    #[test]
    fn unknown_selection_is_refused() {
        let err = "terrace".parse::<AreaType>().unwrap_err();
        assert_eq!(
            err,
            SelectionError::Unsupported {
                kind: "area type",
                value: "terrace".to_string(),
            }
        );
        assert!("granite".parse::<Material>().is_err());
    }

    #[test]
    fn default_table_matches_price_list() {
        let table = PriceTable::default();
        for area_type in AreaType::ALL {
            for material in Material::ALL {
                assert_eq!(table.base_rate(area_type, material), 1800.0);
            }
        }
        assert_eq!(table.surcharge(Surcharge::Sealant), 90.0);
        assert_eq!(table.multiplier(Complexity::Mosaic), 1.2);
        assert_eq!(table.package_discount_pct(), 5.0);
        assert!(table.validate().is_ok());
    }

    #[test]
    fn setters_clamp_to_non_negative() {
        let mut table = PriceTable::default();
        table.set_base_rate(AreaType::Floor, Material::Tile, -10.0);
        table.extras.set(Surcharge::Grout, f64::NAN);
        table.coefficients.set(Complexity::Diagonal, 1.3);

        assert_eq!(table.base_rate(AreaType::Floor, Material::Tile), 0.0);
        assert_eq!(table.surcharge(Surcharge::Grout), 0.0);
        assert_eq!(table.multiplier(Complexity::Diagonal), 1.3);
        assert!(table.validate().is_ok());
    }

    #[test]
    fn validate_names_the_bad_field() {
        let mut table = PriceTable::default();
        table.extras.miter_per_lm = -1.0;
        assert_eq!(
            table.validate(),
            Err(PriceTableError::InvalidRate {
                field: "extras.miter_per_lm".to_string(),
                value: -1.0,
            })
        );
    }
}
