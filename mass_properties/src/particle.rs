use crate::{CenterOfMassConfig, Formula, MassPropertiesErrors};
use bigdecimal::BigDecimal;
use coordinate_systems::decimal::{self, IntoDecimal};
use coordinate_systems::{CoordinateErrors, vector::Vector};
use num_traits::Zero;
use serde::Serialize;
use tracing::{debug, trace};

/// A point mass at a fixed location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Particle {
    location: Vector,
    mass: BigDecimal,
}

impl Particle {
    /// Creates a new `Particle`.
    ///
    /// # Arguments
    ///
    /// * `location` - Position of the particle.
    /// * `mass` - Mass of the particle, as an integer, decimal text, float or decimal.
    ///
    /// # Returns
    ///
    /// The `Particle`, `NegativeMass` if the mass is below zero, or the coordinate error
    /// if the mass is not a finite number.
    pub fn new(location: Vector, mass: impl IntoDecimal) -> Result<Self, MassPropertiesErrors> {
        let mass = mass.into_decimal()?;
        if mass < BigDecimal::zero() {
            return Err(MassPropertiesErrors::NegativeMass(mass.to_plain_string()));
        }
        Ok(Self { location, mass })
    }

    pub fn location(&self) -> &Vector {
        &self.location
    }

    pub fn mass(&self) -> &BigDecimal {
        &self.mass
    }

    pub fn distance_from_origin(&self) -> Result<BigDecimal, MassPropertiesErrors> {
        Ok(self.location.distance(&Vector::origin())?)
    }
}

/// Sum of the masses of `particles`, zero when there are none.
pub fn combine_masses(particles: &[Particle]) -> BigDecimal {
    particles
        .iter()
        .fold(BigDecimal::zero(), |total, particle| total + &particle.mass)
}

/// Computes the center of mass of `particles` with the formula from `config`.
///
/// Each axis is processed independently. With `Formula::AxisAbsolute` the per-axis
/// distance |origin_k - p_k| is taken as a floating point square root of the exact
/// squared offset; weighting and summation are always exact decimal. The final division
/// keeps `config.precision` significant digits.
///
/// Returns `UndefinedResult` when the total mass is zero, including the empty set.
pub fn center_of_mass(
    particles: &[Particle],
    config: &CenterOfMassConfig,
) -> Result<Vector, MassPropertiesErrors> {
    let total_mass = combine_masses(particles);
    if total_mass.is_zero() {
        return Err(MassPropertiesErrors::UndefinedResult);
    }
    let precision = config.precision()?;
    let origin = Vector::origin();

    let x = axis_moment(particles, config.formula, origin.x(), Vector::x)?;
    let y = axis_moment(particles, config.formula, origin.y(), Vector::y)?;
    let z = axis_moment(particles, config.formula, origin.z(), Vector::z)?;

    let divide = |moment: BigDecimal| {
        decimal::divide(&moment, &total_mass, precision).ok_or(MassPropertiesErrors::UndefinedResult)
    };
    let com = Vector::from_decimals(divide(x)?, divide(y)?, divide(z)?);

    debug!(
        particles = particles.len(),
        total_mass = %total_mass.to_plain_string(),
        formula = ?config.formula,
        center_of_mass = %com,
        "computed center of mass"
    );
    Ok(com)
}

/// Σ m_i * offset_i along one axis.
fn axis_moment(
    particles: &[Particle],
    formula: Formula,
    origin: &BigDecimal,
    axis: fn(&Vector) -> &BigDecimal,
) -> Result<BigDecimal, CoordinateErrors> {
    particles
        .iter()
        .try_fold(BigDecimal::zero(), |moment, particle| -> Result<_, CoordinateErrors> {
            let position = axis(&particle.location);
            let offset = match formula {
                Formula::AxisAbsolute => {
                    let delta = origin - position;
                    decimal::float_sqrt(&(&delta * &delta))?
                }
                Formula::Signed => position - origin,
            };
            trace!(
                offset = %offset.to_plain_string(),
                mass = %particle.mass.to_plain_string(),
                "axis term"
            );
            Ok(moment + offset * &particle.mass)
        })
}

/// An ordered collection of particles. Insertion order is kept for display only; the
/// aggregate results do not depend on it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParticleSet {
    particles: Vec<Particle>,
}

impl ParticleSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, particle: Particle) {
        self.particles.push(particle);
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Particle> {
        self.particles.iter()
    }

    pub fn as_slice(&self) -> &[Particle] {
        &self.particles
    }

    pub fn combine_masses(&self) -> BigDecimal {
        combine_masses(&self.particles)
    }

    /// Center of mass with the default configuration.
    pub fn center_of_mass(&self) -> Result<Vector, MassPropertiesErrors> {
        self.center_of_mass_with(&CenterOfMassConfig::default())
    }

    pub fn center_of_mass_with(
        &self,
        config: &CenterOfMassConfig,
    ) -> Result<Vector, MassPropertiesErrors> {
        center_of_mass(&self.particles, config)
    }
}

impl FromIterator<Particle> for ParticleSet {
    fn from_iter<I: IntoIterator<Item = Particle>>(iter: I) -> Self {
        Self {
            particles: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a ParticleSet {
    type Item = &'a Particle;
    type IntoIter = std::slice::Iter<'a, Particle>;

    fn into_iter(self) -> Self::IntoIter {
        self.particles.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::str::FromStr;

    fn dec(text: &str) -> BigDecimal {
        BigDecimal::from_str(text).unwrap()
    }

    fn particle(x: &str, y: &str, z: &str, mass: &str) -> Particle {
        Particle::new(Vector::new(x, y, z).unwrap(), mass).unwrap()
    }

    #[test]
    fn test_types_are_thread_safe() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Particle>();
        assert_send_sync::<ParticleSet>();
        assert_send_sync::<CenterOfMassConfig>();
    }

    #[test]
    fn test_particle_rejects_negative_mass() {
        let result = Particle::new(Vector::origin(), "-0.5");
        assert!(matches!(result, Err(MassPropertiesErrors::NegativeMass(m)) if m == "-0.5"));
    }

    #[test]
    fn test_particle_rejects_invalid_mass() {
        let result = Particle::new(Vector::origin(), "heavy");
        assert!(result.unwrap_err().is_invalid_number());
        let result = Particle::new(Vector::origin(), f64::NAN);
        assert!(result.unwrap_err().is_invalid_number());
    }

    #[test]
    fn test_particle_rejects_out_of_range_mass() {
        let result = Particle::new(Vector::origin(), "1e3000000");
        assert!(result.unwrap_err().is_invalid_number());
        let p = Particle::new(Vector::origin(), "1e9").unwrap();
        assert_eq!(combine_masses(&[p, particle("0", "0", "0", "1")]), dec("1000000001"));
    }

    #[test]
    fn test_particle_accepts_zero_mass() {
        let p = Particle::new(Vector::origin(), 0).unwrap();
        assert!(p.mass().is_zero());
    }

    #[test]
    fn test_particle_distance_from_origin() {
        let p = particle("3", "4", "0", "1");
        assert_eq!(p.distance_from_origin().unwrap(), dec("5"));
    }

    #[test]
    fn test_combine_masses_empty() {
        assert!(combine_masses(&[]).is_zero());
        assert!(ParticleSet::new().combine_masses().is_zero());
    }

    #[test]
    fn test_combine_masses_single() {
        let p = particle("1", "2", "3", "2.75");
        assert_eq!(combine_masses(std::slice::from_ref(&p)), *p.mass());
    }

    #[test]
    fn test_combine_masses_is_exact() {
        let set: ParticleSet = ["0.1", "0.2", "0.3"]
            .into_iter()
            .map(|m| particle("0", "0", "0", m))
            .collect();
        assert_eq!(set.combine_masses(), dec("0.6"));

        let reversed: ParticleSet = set.iter().rev().cloned().collect();
        assert_eq!(reversed.combine_masses(), set.combine_masses());
    }

    #[test]
    fn test_center_of_mass_empty_is_undefined() {
        assert!(matches!(
            ParticleSet::new().center_of_mass(),
            Err(MassPropertiesErrors::UndefinedResult)
        ));
    }

    #[test]
    fn test_center_of_mass_zero_mass_is_undefined() {
        let set: ParticleSet = vec![particle("1", "2", "3", "0"), particle("-4", "5", "6", "0")]
            .into_iter()
            .collect();
        assert!(matches!(
            set.center_of_mass(),
            Err(MassPropertiesErrors::UndefinedResult)
        ));
    }

    #[test]
    fn test_center_of_mass_uses_axis_distances() {
        let set: ParticleSet = vec![particle("2", "0", "0", "1"), particle("-2", "0", "0", "1")]
            .into_iter()
            .collect();
        let com = set.center_of_mass().unwrap();
        assert_eq!(com, Vector::new(2, 0, 0).unwrap());
        assert_eq!(com.to_string(), "vector(2, 0, 0)");
    }

    #[test]
    fn test_center_of_mass_signed_formula() {
        let set: ParticleSet = vec![particle("2", "0", "0", "1"), particle("-2", "0", "0", "1")]
            .into_iter()
            .collect();
        let config = CenterOfMassConfig::default().with_formula(Formula::Signed);
        assert_eq!(set.center_of_mass_with(&config).unwrap(), Vector::origin());

        let set: ParticleSet = vec![particle("-1", "2", "0", "3"), particle("3", "-2", "4", "1")]
            .into_iter()
            .collect();
        let com = set.center_of_mass_with(&config).unwrap();
        assert_eq!(com, Vector::new(0, 1, 1).unwrap());
    }

    #[test]
    fn test_center_of_mass_weighting() {
        let set: ParticleSet = vec![particle("1", "-3", "0", "3"), particle("5", "1", "2", "1")]
            .into_iter()
            .collect();
        // x: (1*3 + 5*1)/4 = 2, y: (3*3 + 1*1)/4 = 2.5, z: (0*3 + 2*1)/4 = 0.5
        assert_eq!(set.center_of_mass().unwrap(), Vector::new(2, "2.5", "0.5").unwrap());
    }

    #[test]
    fn test_center_of_mass_single_particle() {
        let set: ParticleSet = vec![particle("-1.5", "2", "0.25", "7")].into_iter().collect();
        assert_eq!(set.center_of_mass().unwrap(), Vector::new("1.5", "2", "0.25").unwrap());
    }

    #[test]
    fn test_center_of_mass_rounds_to_precision() {
        let set: ParticleSet = vec![particle("1", "0", "0", "1"), particle("0", "0", "0", "2")]
            .into_iter()
            .collect();
        let com = set.center_of_mass().unwrap();
        assert_eq!(com.x().to_plain_string(), "0.3333333333333333333333333333");

        let config = CenterOfMassConfig::default().with_precision(5).unwrap();
        let com = set.center_of_mass_with(&config).unwrap();
        assert_eq!(com.x().to_plain_string(), "0.33333");
    }

    #[test]
    fn test_center_of_mass_from_polar_particles() {
        use std::f64::consts::PI;
        let a = Particle::new(Vector::from_polar(1.0, PI / 2.0, 0.0).unwrap(), 1).unwrap();
        let b = Particle::new(Vector::from_cylindrical(1.0, PI / 2.0, 3.0).unwrap(), 1).unwrap();
        let set: ParticleSet = vec![a, b].into_iter().collect();
        let com = set.center_of_mass().unwrap().to_vector3().unwrap();
        assert_abs_diff_eq!(com[0], 0.5, epsilon = 1e-9);
        assert_abs_diff_eq!(com[1], 0.5, epsilon = 1e-9);
        assert_abs_diff_eq!(com[2], 1.5, epsilon = 1e-9);
    }
}
