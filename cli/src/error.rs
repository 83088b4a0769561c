use coordinate_systems::CoordinateErrors;
use mass_properties::MassPropertiesErrors;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliErrors {
    #[error("{0}")]
    MassProperties(#[from] MassPropertiesErrors),
    #[error("{0}")]
    Coordinate(#[from] CoordinateErrors),
    #[error("failed to read particles: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse particles: {0}")]
    Ron(#[from] ron::error::SpannedError),
    #[error("{0}")]
    Prompt(#[from] inquire::InquireError),
    #[error("no particles were entered")]
    NoParticles,
}

impl CliErrors {
    /// True when the user pressed Ctrl+C or Esc at a prompt.
    pub fn is_interrupt(&self) -> bool {
        matches!(
            self,
            CliErrors::Prompt(
                inquire::InquireError::OperationInterrupted
                    | inquire::InquireError::OperationCanceled
            )
        )
    }
}
