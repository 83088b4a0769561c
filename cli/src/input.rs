use crate::error::CliErrors;
use coordinate_systems::{CoordinateSystem, vector::Vector};
use mass_properties::{Particle, ParticleSet};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::info;

/// One particle as written in an input file. The mass is kept as text so that it is read
/// as an exact decimal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParticleEntry {
    pub position: CoordinateSystem,
    pub mass: String,
}

impl ParticleEntry {
    pub fn into_particle(self) -> Result<Particle, CliErrors> {
        let location = Vector::try_from(self.position)?;
        Ok(Particle::new(location, self.mass)?)
    }
}

/// Parses a RON list of `ParticleEntry`, e.g.
///
/// ```text
/// [
///     (position: Cartesian((x: "2", y: "0", z: "0")), mass: "1"),
///     (position: Spherical((radius: 1.0, azimuth: 0.0, inclination: 1.5)), mass: "2.5"),
/// ]
/// ```
pub fn parse_particles(text: &str) -> Result<ParticleSet, CliErrors> {
    let entries: Vec<ParticleEntry> = ron::from_str(text)?;
    entries.into_iter().map(ParticleEntry::into_particle).collect()
}

pub fn load_particles(path: &Path) -> Result<ParticleSet, CliErrors> {
    let text = fs::read_to_string(path)?;
    let particles = parse_particles(&text)?;
    info!(path = %path.display(), particles = particles.len(), "loaded particles");
    Ok(particles)
}
