use crate::MassPropertiesErrors;
use serde::{Deserialize, Serialize};
use std::fs;
use std::num::NonZeroU64;
use std::path::Path;

/// Significant digits kept when dividing by the total mass.
pub const DEFAULT_PRECISION: u64 = 28;

/// How each particle's position contributes to the center of mass.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Formula {
    /// R_k = Σ m_i |origin_k - p_ik| / Σ m_i.
    ///
    /// Every axis uses the absolute distance from the origin, so sign information is
    /// lost: particles at x = 2 and x = -2 give x = 2, not 0. This is the historical
    /// behavior of the calculator and remains the default.
    #[default]
    AxisAbsolute,
    /// The textbook R_k = Σ m_i p_ik / Σ m_i, computed entirely in exact decimal.
    Signed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CenterOfMassConfig {
    pub formula: Formula,
    pub precision: u64,
}

impl Default for CenterOfMassConfig {
    fn default() -> Self {
        Self {
            formula: Formula::default(),
            precision: DEFAULT_PRECISION,
        }
    }
}

impl CenterOfMassConfig {
    pub fn with_formula(mut self, formula: Formula) -> Self {
        self.formula = formula;
        self
    }

    pub fn with_precision(mut self, precision: u64) -> Result<Self, MassPropertiesErrors> {
        self.precision = precision;
        self.validate()?;
        Ok(self)
    }

    pub fn precision(&self) -> Result<NonZeroU64, MassPropertiesErrors> {
        NonZeroU64::new(self.precision).ok_or_else(|| {
            MassPropertiesErrors::Config("precision must be at least one digit".to_string())
        })
    }

    pub fn validate(&self) -> Result<(), MassPropertiesErrors> {
        self.precision().map(|_| ())
    }

    /// Parses a config from RON text, e.g. `(formula: Signed, precision: 40)`.
    /// Missing fields take their default values.
    pub fn from_ron_str(text: &str) -> Result<Self, MassPropertiesErrors> {
        let config: Self = ron::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, MassPropertiesErrors> {
        let text = fs::read_to_string(path)?;
        Self::from_ron_str(&text)
    }
}
