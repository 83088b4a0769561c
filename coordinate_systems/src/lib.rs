pub mod cylindrical;
pub mod decimal;
pub mod spherical;
pub mod vector;

use cylindrical::Cylindrical;
use serde::{Deserialize, Serialize};
use spherical::Spherical;
use thiserror::Error;
use vector::Vector;

pub mod prelude {
    pub use crate::cylindrical::Cylindrical;
    pub use crate::decimal::IntoDecimal;
    pub use crate::spherical::Spherical;
    pub use crate::vector::Vector;
    pub use crate::{CoordinateErrors, CoordinateSystem};
    pub use bigdecimal::BigDecimal;
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum CoordinateErrors {
    #[error("'{0}' is not a valid number")]
    InvalidNumber(String),
    #[error("{0} is not a finite number")]
    NonFinite(f64),
    #[error("{0} is too large to be represented as a floating point number")]
    Overflow(String),
}

impl CoordinateErrors {
    /// True for input that could not be read as a finite number at all.
    pub fn is_invalid_number(&self) -> bool {
        matches!(
            self,
            CoordinateErrors::InvalidNumber(_) | CoordinateErrors::NonFinite(_)
        )
    }
}

/// Represents a position in one of the supported coordinate systems, as entered by a user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CoordinateSystem {
    Cartesian(Vector),
    Cylindrical(Cylindrical),
    Spherical(Spherical),
}

impl Default for CoordinateSystem {
    fn default() -> Self {
        Self::Cartesian(Vector::default())
    }
}

impl TryFrom<CoordinateSystem> for Vector {
    type Error = CoordinateErrors;

    /// Converts any `CoordinateSystem` into a Cartesian `Vector`.
    fn try_from(cs: CoordinateSystem) -> Result<Self, Self::Error> {
        match cs {
            CoordinateSystem::Cartesian(v) => Ok(v),
            CoordinateSystem::Cylindrical(cyl) => cyl.try_into(),
            CoordinateSystem::Spherical(sph) => sph.try_into(),
        }
    }
}
