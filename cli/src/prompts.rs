use crate::error::CliErrors;
use coordinate_systems::{decimal, vector::Vector};
use inquire::validator::Validation;
use inquire::{Confirm, CustomType, CustomUserError, Select, Text};
use mass_properties::{Particle, ParticleSet};
use std::fmt;
use tracing::{debug, warn};

pub trait PromptAction {
    type Output;
    fn prompt(&self) -> Result<Self::Output, CliErrors>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoordinateKind {
    Cartesian,
    Polar,
    Cylindrical,
}

impl CoordinateKind {
    pub const ALL: [CoordinateKind; 3] = [
        CoordinateKind::Cartesian,
        CoordinateKind::Polar,
        CoordinateKind::Cylindrical,
    ];
}

impl fmt::Display for CoordinateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CoordinateKind::Cartesian => "Cartesian",
            CoordinateKind::Polar => "Polar",
            CoordinateKind::Cylindrical => "Cylindrical",
        };
        write!(f, "{name}")
    }
}

/// Accepts any finite decimal literal.
pub fn validate_decimal(text: &str) -> Result<Validation, CustomUserError> {
    Ok(match decimal::parse_decimal(text) {
        Ok(_) => Validation::Valid,
        Err(e) => Validation::Invalid(e.to_string().into()),
    })
}

/// Accepts a finite, non-negative decimal.
pub fn validate_mass(text: &str) -> Result<Validation, CustomUserError> {
    Ok(match Particle::new(Vector::origin(), text) {
        Ok(_) => Validation::Valid,
        Err(e) => Validation::Invalid(e.to_string().into()),
    })
}

fn prompt_decimal_text(message: &str) -> Result<String, CliErrors> {
    Ok(Text::new(message).with_validator(validate_decimal).prompt()?)
}

fn prompt_float(message: &str) -> Result<f64, CliErrors> {
    Ok(CustomType::<f64>::new(message)
        .with_error_message("Please type a valid number")
        .prompt()?)
}

pub struct PromptCoordinateKind;
impl PromptAction for PromptCoordinateKind {
    type Output = CoordinateKind;
    fn prompt(&self) -> Result<Self::Output, CliErrors> {
        Ok(Select::new("Type", CoordinateKind::ALL.to_vec()).prompt()?)
    }
}

pub struct PromptCartesian {
    pub index: usize,
}
impl PromptAction for PromptCartesian {
    type Output = Vector;
    fn prompt(&self) -> Result<Self::Output, CliErrors> {
        let x = prompt_decimal_text(&format!("Particle[{}] Location X:", self.index))?;
        let y = prompt_decimal_text(&format!("Particle[{}] Location Y:", self.index))?;
        let z = prompt_decimal_text(&format!("Particle[{}] Location Z:", self.index))?;
        Ok(Vector::new(x, y, z)?)
    }
}

pub struct PromptPolar {
    pub index: usize,
}
impl PromptAction for PromptPolar {
    type Output = Vector;
    fn prompt(&self) -> Result<Self::Output, CliErrors> {
        let radius = prompt_float(&format!("Particle[{}] Location Radius (r):", self.index))?;
        let inclination = prompt_float(&format!(
            "Particle[{}] Location Angle from z-axis <rad> (q):",
            self.index
        ))?;
        let azimuth = prompt_float(&format!(
            "Particle[{}] Location Angle from x-axis <rad> (j):",
            self.index
        ))?;
        Ok(Vector::from_polar(radius, inclination, azimuth)?)
    }
}

pub struct PromptCylindrical {
    pub index: usize,
}
impl PromptAction for PromptCylindrical {
    type Output = Vector;
    fn prompt(&self) -> Result<Self::Output, CliErrors> {
        let radius = prompt_float(&format!("Particle[{}] Location Radial (r):", self.index))?;
        let azimuth = prompt_float(&format!(
            "Particle[{}] Location Azimuthal <rad> (j):",
            self.index
        ))?;
        let height = prompt_float(&format!("Particle[{}] Location Z:", self.index))?;
        Ok(Vector::from_cylindrical(radius, azimuth, height)?)
    }
}

pub struct PromptParticle {
    pub index: usize,
}
impl PromptAction for PromptParticle {
    type Output = Particle;
    fn prompt(&self) -> Result<Self::Output, CliErrors> {
        let index = self.index;
        let location = match PromptCoordinateKind.prompt()? {
            CoordinateKind::Cartesian => PromptCartesian { index }.prompt()?,
            CoordinateKind::Polar => PromptPolar { index }.prompt()?,
            CoordinateKind::Cylindrical => PromptCylindrical { index }.prompt()?,
        };
        let mass = Text::new(&format!("Particle[{index}] Mass:"))
            .with_validator(validate_mass)
            .prompt()?;
        Ok(Particle::new(location, mass)?)
    }
}

/// Prompts for particles until the user declines to continue or interrupts.
///
/// A particle whose values cannot be used is reported and skipped, and input resumes
/// with the next particle.
pub fn prompt_particles() -> Result<ParticleSet, CliErrors> {
    println!("To stop adding particles answer \"n\" or press Ctrl+C.");
    let mut particles = ParticleSet::new();

    loop {
        match (PromptParticle {
            index: particles.len() + 1,
        })
        .prompt()
        {
            Ok(particle) => {
                debug!(location = %particle.location(), "particle added");
                particles.push(particle);
            }
            Err(e) if e.is_interrupt() => break,
            Err(e @ (CliErrors::Coordinate(_) | CliErrors::MassProperties(_))) => {
                warn!(error = %e, "skipping particle");
                eprintln!("[Error]: {e}\n[Info]: Skipping particle.");
            }
            Err(e) => return Err(e),
        }

        match Confirm::new("Continue adding particles?")
            .with_default(true)
            .prompt()
        {
            Ok(true) => continue,
            Ok(false) => break,
            Err(e) => {
                let e = CliErrors::from(e);
                if e.is_interrupt() {
                    break;
                }
                return Err(e);
            }
        }
    }

    Ok(particles)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_valid(result: Result<Validation, CustomUserError>) -> bool {
        matches!(result, Ok(Validation::Valid))
    }

    #[test]
    fn test_validate_decimal() {
        assert!(is_valid(validate_decimal("1.25")));
        assert!(is_valid(validate_decimal("-3")));
        assert!(!is_valid(validate_decimal("three")));
        assert!(!is_valid(validate_decimal("")));
    }

    #[test]
    fn test_validate_mass() {
        assert!(is_valid(validate_mass("0")));
        assert!(is_valid(validate_mass("12.5")));
        assert!(!is_valid(validate_mass("-1")));
        assert!(!is_valid(validate_mass("nan")));
    }

    #[test]
    fn test_coordinate_kind_display() {
        let names: Vec<String> = CoordinateKind::ALL.iter().map(|k| k.to_string()).collect();
        assert_eq!(names, ["Cartesian", "Polar", "Cylindrical"]);
    }

    #[test]
    fn test_interrupt_detection() {
        assert!(CliErrors::from(inquire::InquireError::OperationInterrupted).is_interrupt());
        assert!(CliErrors::from(inquire::InquireError::OperationCanceled).is_interrupt());
        assert!(!CliErrors::NoParticles.is_interrupt());
    }
}
