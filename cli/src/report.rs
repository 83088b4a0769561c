use crate::error::CliErrors;
use colored::Colorize;
use mass_properties::{CenterOfMassConfig, ParticleSet};

/// Renders every particle with its distance from the origin (DFO), followed by the
/// center of mass of the set.
pub fn render(particles: &ParticleSet, config: &CenterOfMassConfig) -> Result<String, CliErrors> {
    let mut out = String::new();

    out.push_str(&format!("{}\n", "Particles".bold().cyan()));
    out.push_str("DFO = Distance from Origin.\n\n");

    for (i, particle) in particles.iter().enumerate() {
        let location = particle.location();
        out.push_str(&format!("{}\n", format!("Particle #{}", i + 1).bold()));
        out.push_str(&format!("X\t=\t{}\n", location.x().to_plain_string()));
        out.push_str(&format!("Y\t=\t{}\n", location.y().to_plain_string()));
        out.push_str(&format!("Z\t=\t{}\n", location.z().to_plain_string()));
        out.push_str(&format!("Mass\t=\t{}\n", particle.mass().to_plain_string()));
        out.push_str(&format!(
            "DFO\t=\t{}\n\n",
            particle.distance_from_origin()?.to_plain_string()
        ));
    }

    let com = particles.center_of_mass_with(config)?;
    out.push_str(&format!("{}\n", "Center of Mass".bold().green()));
    out.push_str(&format!("comX\t=\t{}\n", com.x().to_plain_string()));
    out.push_str(&format!("comY\t=\t{}\n", com.y().to_plain_string()));
    out.push_str(&format!("comZ\t=\t{}\n", com.z().to_plain_string()));

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use coordinate_systems::vector::Vector;
    use mass_properties::{Formula, MassPropertiesErrors, Particle};

    fn two_particles() -> ParticleSet {
        vec![
            Particle::new(Vector::new(2, 0, 0).unwrap(), 1).unwrap(),
            Particle::new(Vector::new(-2, 0, 0).unwrap(), 1).unwrap(),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_render_report() {
        colored::control::set_override(false);
        let report = render(&two_particles(), &CenterOfMassConfig::default()).unwrap();

        let expected = "Particles\n\
            DFO = Distance from Origin.\n\n\
            Particle #1\nX\t=\t2\nY\t=\t0\nZ\t=\t0\nMass\t=\t1\nDFO\t=\t2\n\n\
            Particle #2\nX\t=\t-2\nY\t=\t0\nZ\t=\t0\nMass\t=\t1\nDFO\t=\t2\n\n\
            Center of Mass\ncomX\t=\t2\ncomY\t=\t0\ncomZ\t=\t0\n";
        assert_eq!(report, expected);
    }

    #[test]
    fn test_render_signed_formula() {
        colored::control::set_override(false);
        let config = CenterOfMassConfig::default().with_formula(Formula::Signed);
        let report = render(&two_particles(), &config).unwrap();
        assert!(report.ends_with("comX\t=\t0\ncomY\t=\t0\ncomZ\t=\t0\n"));
    }

    #[test]
    fn test_render_zero_mass_fails() {
        let particles: ParticleSet = vec![Particle::new(Vector::origin(), 0).unwrap()]
            .into_iter()
            .collect();
        assert!(matches!(
            render(&particles, &CenterOfMassConfig::default()),
            Err(CliErrors::MassProperties(MassPropertiesErrors::UndefinedResult))
        ));
    }
}
