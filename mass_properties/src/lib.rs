use coordinate_systems::CoordinateErrors;
use thiserror::Error;

pub mod config;
pub mod particle;

pub use config::{CenterOfMassConfig, Formula};
pub use particle::{Particle, ParticleSet, center_of_mass, combine_masses};

#[derive(Debug, Error)]
pub enum MassPropertiesErrors {
    #[error("mass cannot be negative, got {0}")]
    NegativeMass(String),
    #[error("center of mass is undefined when the total mass is zero")]
    UndefinedResult,
    #[error("invalid configuration: {0}")]
    Config(String),
    #[error("{0}")]
    CoordinateErrors(#[from] CoordinateErrors),
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse configuration: {0}")]
    Ron(#[from] ron::error::SpannedError),
}

impl MassPropertiesErrors {
    /// True when the error comes from input that is not a finite number.
    pub fn is_invalid_number(&self) -> bool {
        matches!(self, MassPropertiesErrors::CoordinateErrors(e) if e.is_invalid_number())
    }
}
